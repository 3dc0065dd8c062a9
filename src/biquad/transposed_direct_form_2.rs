use crate::biquad::coefficients::Coefficients;
use crate::biquad::section::Section;
use crate::utils::Float;

/// Keeps two accumulators. Cheapest of the three and the most robust against
/// large inputs; swapping coefficients mid stream may still leave transients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransposedDirectFormII<F: Float> {
    state: [F; 2],
}

impl<F: Float> TransposedDirectFormII<F> {
    pub const fn new() -> Self {
        Self {
            state: [F::ZERO; 2],
        }
    }
}

impl<F: Float> Default for TransposedDirectFormII<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Float> Section<F> for TransposedDirectFormII<F> {
    #[inline]
    fn filter(&mut self, sample: F, coefficients: &Coefficients<F>) -> F {
        let c = coefficients;
        let [s1, s2] = self.state;
        let processed = s1 + c.b0 * sample;
        self.state = [
            s2 + c.b1 * sample - c.a1 * processed,
            c.b2 * sample - c.a2 * processed,
        ];
        processed
    }

    fn reset(&mut self) {
        self.state.fill(F::ZERO);
    }

    fn is_silent(&self) -> bool {
        self.state.iter().all(|s| s.abs() <= F::SILENT_THRESHOLD)
    }
}
