use crate::biquad::coefficients::Coefficients;
use crate::biquad::section::Section;
use crate::utils::Float;

/// Keeps two samples of the intermediate signal `w`. The recursive part runs
/// before the feed forward part, so large inputs can overflow `w` and
/// coefficient swaps mid stream may cause transients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectFormII<F: Float> {
    state: [F; 2],
}

impl<F: Float> DirectFormII<F> {
    pub const fn new() -> Self {
        Self {
            state: [F::ZERO; 2],
        }
    }
}

impl<F: Float> Default for DirectFormII<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Float> Section<F> for DirectFormII<F> {
    #[inline]
    fn filter(&mut self, sample: F, coefficients: &Coefficients<F>) -> F {
        let c = coefficients;
        let [v1, v2] = self.state;
        let w = sample - c.a1 * v1 - c.a2 * v2;
        let processed = c.b0 * w + c.b1 * v1 + c.b2 * v2;
        self.state = [w, v1];
        processed
    }

    fn reset(&mut self) {
        self.state.fill(F::ZERO);
    }

    fn is_silent(&self) -> bool {
        self.state.iter().all(|s| s.abs() <= F::SILENT_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    #[test]
    fn recurrence_by_hand() {
        let c = Coefficients {
            a1: 0.5_f64,
            a2: 0.25,
            b0: 1.0,
            b1: 2.0,
            b2: 3.0,
        };
        let mut section = DirectFormII::new();
        // w0 = 1, y0 = 1
        assert_approx_eq!(section.filter(1.0, &c), 1.0);
        assert_eq!(section.state, [1.0, 0.0]);
        // w1 = -0.5, y1 = -0.5 + 2 = 1.5
        assert_approx_eq!(section.filter(0.0, &c), 1.5);
        assert_eq!(section.state, [-0.5, 1.0]);
        // w2 = 0.25 - 0.25 = 0, y2 = 0 - 1 + 3 = 2
        assert_approx_eq!(section.filter(0.0, &c), 2.0);
        // w3 = 0.125, y3 = 0.125 + 0 - 1.5 = -1.375
        assert_approx_eq!(section.filter(0.0, &c), -1.375);
    }

    #[test]
    fn reset_zeroes_state() {
        let c = Coefficients::lowpass_two_pole(48000.0_f64, 1000.0, 0.7);
        let mut section = DirectFormII::new();
        section.filter(1.0, &c);
        assert!(!section.is_silent());
        section.reset();
        assert_eq!(section, DirectFormII::default());
    }
}
