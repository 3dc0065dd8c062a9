use crate::biquad::error::DesignError;
use crate::utils::Float;

/// Normalized biquad transfer function
/// `H(z) = (b0 + b1 z^-1 + b2 z^-2) / (1 + a1 z^-1 + a2 z^-2)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients<F: Float> {
    pub a1: F,
    pub a2: F,
    pub b0: F,
    pub b1: F,
    pub b2: F,
}

/// Formulas for coefficients taken from here http://shepazu.github.io/Audio-EQ-Cookbook/audio-eq-cookbook.html
impl<F: Float> Coefficients<F> {
    /// Passes every sample through unchanged.
    pub const fn identity() -> Self {
        Self {
            a1: F::ZERO,
            a2: F::ZERO,
            b0: F::ONE,
            b1: F::ZERO,
            b2: F::ZERO,
        }
    }

    /// Two-pole low pass with cutoff `cutoff_frequency` and quality factor `q`.
    ///
    /// Inputs are not validated. Out of range parameters (e.g. `q == 0`) show up
    /// as non-finite coefficients, use [`Self::try_lowpass_two_pole`] to have
    /// them rejected instead.
    pub fn lowpass_two_pole(sample_rate: F, cutoff_frequency: F, q: F) -> Self {
        debug_assert!(cutoff_frequency < F::TWO * sample_rate);
        debug_assert!(q >= F::ZERO);
        Self::derive_lowpass_two_pole(sample_rate, cutoff_frequency, q)
    }

    pub fn try_lowpass_two_pole(
        sample_rate: F,
        cutoff_frequency: F,
        q: F,
    ) -> Result<Self, DesignError> {
        let result = Self::validate_lowpass_two_pole(sample_rate, cutoff_frequency, q)
            .map(|_| Self::derive_lowpass_two_pole(sample_rate, cutoff_frequency, q))
            .and_then(|coefficients| {
                if coefficients.is_finite() {
                    Ok(coefficients)
                } else {
                    Err(DesignError::NonFiniteCoefficients)
                }
            });
        if let Err(error) = &result {
            log::debug!("rejected two-pole low pass design: {error}");
        }
        result
    }

    pub fn is_finite(&self) -> bool {
        [self.a1, self.a2, self.b0, self.b1, self.b2]
            .iter()
            .all(|c| c.is_finite())
    }

    fn validate_lowpass_two_pole(
        sample_rate: F,
        cutoff_frequency: F,
        q: F,
    ) -> Result<(), DesignError> {
        if !sample_rate.is_finite() || sample_rate <= F::ZERO {
            return Err(DesignError::InvalidSampleRate {
                sample_rate: to_f64(sample_rate),
            });
        }
        if !cutoff_frequency.is_finite()
            || cutoff_frequency <= F::ZERO
            || cutoff_frequency >= F::TWO * sample_rate
        {
            return Err(DesignError::InvalidCutoff {
                cutoff_frequency: to_f64(cutoff_frequency),
                sample_rate: to_f64(sample_rate),
            });
        }
        if !q.is_finite() || q <= F::ZERO {
            return Err(DesignError::InvalidQ { q: to_f64(q) });
        }
        Ok(())
    }

    // every step stays in F, no widening to f64
    fn derive_lowpass_two_pole(sample_rate: F, cutoff_frequency: F, q: F) -> Self {
        let omega = F::TWO * F::PI() * cutoff_frequency / sample_rate;
        let sin_omega = F::sin(omega);
        let cos_omega = F::cos(omega);
        let alpha = sin_omega / (F::TWO * q);
        let a0 = F::ONE + alpha;
        let one_minus_cos_omega = F::ONE - cos_omega;
        let b0_and_b2 = one_minus_cos_omega / F::TWO / a0;
        Self {
            a1: -F::TWO * cos_omega / a0,
            a2: (F::ONE - alpha) / a0,
            b0: b0_and_b2,
            b1: one_minus_cos_omega / a0,
            b2: b0_and_b2,
        }
    }
}

fn to_f64<F: Float>(value: F) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}
