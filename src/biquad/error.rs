use std::fmt;

/// Why a coefficient design or a retune was refused.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DesignError {
    InvalidSampleRate { sample_rate: f64 },
    InvalidCutoff { cutoff_frequency: f64, sample_rate: f64 },
    InvalidQ { q: f64 },
    NonFiniteCoefficients,
    Unstable,
}

impl fmt::Display for DesignError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DesignError::InvalidSampleRate { sample_rate } => {
                write!(f, "sample rate must be positive and finite, got {sample_rate}")
            }
            DesignError::InvalidCutoff {
                cutoff_frequency,
                sample_rate,
            } => write!(
                f,
                "cutoff frequency must be in (0, {}), got {cutoff_frequency}",
                2.0 * sample_rate
            ),
            DesignError::InvalidQ { q } => write!(f, "q must be positive and finite, got {q}"),
            DesignError::NonFiniteCoefficients => write!(f, "coefficients are not finite"),
            DesignError::Unstable => {
                write!(f, "coefficients have a pole on or outside the unit circle")
            }
        }
    }
}

impl std::error::Error for DesignError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            DesignError::InvalidCutoff {
                cutoff_frequency: 2500.0,
                sample_rate: 1000.0
            }
            .to_string(),
            "cutoff frequency must be in (0, 2000), got 2500"
        );
        assert_eq!(
            DesignError::InvalidQ { q: -0.5 }.to_string(),
            "q must be positive and finite, got -0.5"
        );
        assert_eq!(
            DesignError::Unstable.to_string(),
            "coefficients have a pole on or outside the unit circle"
        );
    }
}
