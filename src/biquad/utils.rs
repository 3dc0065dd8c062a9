use crate::biquad::coefficients::Coefficients;
use crate::biquad::filter::Filter;
use crate::biquad::section::Section;
use crate::utils;
use num::Complex;

/// Evaluates H at the given `z^-1`.
pub fn make_transfer_function<F: utils::Float>(
    coefficients: &Coefficients<F>,
) -> impl Fn(Complex<F>) -> Complex<F> + use<F> {
    let c = *coefficients;
    move |z: Complex<F>| {
        let z_squared = z * z;
        let numerator = Complex::from(c.b0) + z * c.b1 + z_squared * c.b2;
        let denominator = Complex::from(F::ONE) + z * c.a1 + z_squared * c.a2;
        numerator / denominator
    }
}

pub fn make_frequency_response<F: utils::Float>(
    coefficients: &Coefficients<F>,
    sample_rate: F,
) -> impl Fn(F) -> Complex<F> + use<F> {
    let transfer_function = make_transfer_function(coefficients);
    move |frequency| {
        transfer_function(Complex::from_polar(
            F::ONE,
            -utils::omega(frequency, sample_rate),
        ))
    }
}

/// Feeds a unit impulse followed by zeros into `process_function`. Stops once
/// `hold_length` consecutive outputs stayed within `eps`, or after
/// `max_length` samples in total. Trailing samples within `eps` are dropped,
/// the first sample is always kept.
pub fn impulse_response<F: utils::Float>(
    process_function: &mut impl FnMut(F) -> F,
    eps: F,
    hold_length: usize,
    max_length: usize,
) -> Vec<F> {
    let mut response = vec![process_function(F::ONE)];
    let mut silent_run = 0;
    while response.len() < max_length && silent_run < hold_length {
        let sample = process_function(F::ZERO);
        if sample.abs() <= eps {
            silent_run += 1;
        } else {
            silent_run = 0;
        }
        response.push(sample);
    }
    let tail = response
        .iter()
        .rev()
        .take_while(|sample| sample.abs() <= eps)
        .count();
    response.truncate((response.len() - tail).max(1));
    response
}

pub fn impulse_response_for_filter<F: utils::Float, S: Section<F>>(
    filter: &mut Filter<F, S>,
    eps: F,
    hold_length: usize,
    max_length: usize,
) -> Vec<F> {
    let mut process = |s| filter.filter(s);
    impulse_response(&mut process, eps, hold_length, max_length)
}

pub fn zeros<F: utils::Float>(coefficients: &Coefficients<F>) -> utils::PolynomRoots<F> {
    utils::polynom_roots(coefficients.b0, coefficients.b1, coefficients.b2)
}

pub fn poles<F: utils::Float>(coefficients: &Coefficients<F>) -> utils::PolynomRoots<F> {
    utils::polynom_roots(F::ONE, coefficients.a1, coefficients.a2)
}

pub fn is_stable<F: utils::Float>(coefficients: &Coefficients<F>) -> bool {
    poles(coefficients)
        .into_iter()
        .all(|pole| pole.norm() < F::ONE)
}
