use crate::biquad::coefficients::Coefficients;
use crate::biquad::section::Section;
use crate::utils::Float;

/// Keeps the last two inputs and outputs. Most expensive of the three, but
/// coefficients can be swapped between any two samples without artifacts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectFormI<F: Float> {
    input_state: [F; 2],
    output_state: [F; 2],
}

impl<F: Float> DirectFormI<F> {
    pub const fn new() -> Self {
        Self {
            input_state: [F::ZERO; 2],
            output_state: [F::ZERO; 2],
        }
    }
}

impl<F: Float> Default for DirectFormI<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Float> Section<F> for DirectFormI<F> {
    #[inline]
    fn filter(&mut self, sample: F, coefficients: &Coefficients<F>) -> F {
        let c = coefficients;
        let in_state = &mut self.input_state;
        let out_state = &mut self.output_state;
        let processed = c.b0 * sample + c.b1 * in_state[0] + c.b2 * in_state[1]
            - c.a1 * out_state[0]
            - c.a2 * out_state[1];
        in_state[1] = in_state[0];
        in_state[0] = sample;
        out_state[1] = out_state[0];
        out_state[0] = processed;
        processed
    }

    fn reset(&mut self) {
        self.input_state.fill(F::ZERO);
        self.output_state.fill(F::ZERO);
    }

    fn is_silent(&self) -> bool {
        self.input_state
            .iter()
            .chain(self.output_state.iter())
            .all(|s| s.abs() <= F::SILENT_THRESHOLD)
    }
}
