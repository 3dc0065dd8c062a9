use crate::biquad::coefficients::Coefficients;
use crate::biquad::error::DesignError;
use crate::utils::Float;

#[derive(Debug, PartialEq, Eq, Clone, Copy, variant_count::VariantCount)]
pub enum SectionKind {
    DirectFormI,
    DirectFormII,
    TransposedDirectFormII,
}

impl SectionKind {
    pub fn to_string(&self) -> &str {
        match self {
            SectionKind::DirectFormI => "Direct Form I",
            SectionKind::DirectFormII => "Direct Form II",
            SectionKind::TransposedDirectFormII => "Transposed Direct Form II",
        }
    }

    /// Whether coefficients can be swapped mid stream without transients.
    pub fn is_safe_to_retune(&self) -> bool {
        matches!(self, SectionKind::DirectFormI)
    }

    pub const ALL: [Self; Self::VARIANT_COUNT] = [
        Self::DirectFormI,
        Self::DirectFormII,
        Self::TransposedDirectFormII,
    ];
}

/// Design parameters of a two-pole low pass.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct LowPass<F: Float> {
    pub sample_rate: F,
    pub cutoff_frequency: F,
    pub q: F,
}

impl<F: Float> LowPass<F> {
    pub fn coefficients(&self) -> Coefficients<F> {
        Coefficients::lowpass_two_pole(self.sample_rate, self.cutoff_frequency, self.q)
    }

    pub fn try_coefficients(&self) -> Result<Coefficients<F>, DesignError> {
        Coefficients::try_lowpass_two_pole(self.sample_rate, self.cutoff_frequency, self.q)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_kinds_are_distinct() {
        assert_eq!(SectionKind::ALL.len(), 3);
        for (i, a) in SectionKind::ALL.iter().enumerate() {
            for b in SectionKind::ALL.iter().skip(i + 1) {
                assert_ne!(a, b);
                assert_ne!(a.to_string(), b.to_string());
            }
        }
    }

    #[test]
    fn only_direct_form_1_is_safe_to_retune() {
        assert!(SectionKind::DirectFormI.is_safe_to_retune());
        assert!(!SectionKind::DirectFormII.is_safe_to_retune());
        assert!(!SectionKind::TransposedDirectFormII.is_safe_to_retune());
    }

    #[test]
    fn lowpass_params_forward_to_design() {
        let params = LowPass {
            sample_rate: 44100.0_f32,
            cutoff_frequency: 2500.0,
            q: 0.9,
        };
        assert_eq!(
            params.coefficients(),
            Coefficients::lowpass_two_pole(44100.0_f32, 2500.0, 0.9)
        );
        assert_eq!(params.try_coefficients(), Ok(params.coefficients()));

        let invalid = LowPass { q: -1.0, ..params };
        assert_eq!(
            invalid.try_coefficients(),
            Err(DesignError::InvalidQ { q: -1.0 })
        );
    }
}
