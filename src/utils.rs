use num::Complex;

/// Floating point sample type a filter can run on.
///
/// Only implemented for `f32` and `f64`, so filters over integer or other
/// non-float sample types are rejected by the compiler.
pub trait Float: num_traits::Float + num_traits::FloatConst + std::fmt::Debug {
    const ZERO: Self;
    const ONE: Self;
    const TWO: Self;
    /// Delay registers below this magnitude count as silent. Scaled to the
    /// precision of the type.
    const SILENT_THRESHOLD: Self;

    fn from_f64(value: f64) -> Self;
}

impl Float for f32 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const TWO: Self = 2.0;
    const SILENT_THRESHOLD: Self = 2.0e-8;

    fn from_f64(value: f64) -> Self {
        value as f32
    }
}

impl Float for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const TWO: Self = 2.0;
    const SILENT_THRESHOLD: Self = 1.0e-15;

    fn from_f64(value: f64) -> Self {
        value
    }
}

#[allow(type_alias_bounds)]
pub type PolynomRoots<F: Float> = smallvec::SmallVec<[Complex<F>; 2]>;

pub fn amplitude_to_db<F: Float>(amplitude: F) -> F {
    if amplitude > F::ZERO {
        F::from_f64(20.0) * F::log10(amplitude)
    } else {
        F::neg_infinity()
    }
}

pub fn omega<F: Float>(frequency: F, sample_rate: F) -> F {
    F::TWO * F::PI() * (frequency / sample_rate)
}

/// Complex roots of `c2 x^2 + c1 x + c0`. A polynomial that vanishes
/// everywhere reports the single root zero.
pub fn polynom_roots<F: Float>(c2: F, c1: F, c0: F) -> PolynomRoots<F> {
    let mut roots = PolynomRoots::new();
    match (c2 == F::ZERO, c1 == F::ZERO) {
        (true, true) => {
            if c0 == F::ZERO {
                roots.push(Complex::from(F::ZERO));
            }
        }
        (true, false) => roots.push(Complex::from(-c0 / c1)),
        (false, _) => {
            let center = -c1 / (F::TWO * c2);
            let discriminant = center * center - c0 / c2;
            if discriminant == F::ZERO {
                roots.push(Complex::from(center));
            } else {
                let offset = Complex::from(discriminant).sqrt();
                roots.push(Complex::from(center) - offset);
                roots.push(Complex::from(center) + offset);
            }
        }
    }
    roots
}
