use crate::biquad::coefficients::Coefficients;
use crate::biquad::direct_form_1::DirectFormI;
use crate::biquad::direct_form_2::DirectFormII;
use crate::biquad::transposed_direct_form_2::TransposedDirectFormII;
use crate::params::SectionKind;
use crate::utils::Float;

/// State realization of a biquad: the delay registers plus the per sample
/// recurrence operating on them.
pub trait Section<F: Float> {
    /// Advances the state by one input sample and returns the output sample.
    fn filter(&mut self, sample: F, coefficients: &Coefficients<F>) -> F;

    /// Zeroes all delay registers.
    fn reset(&mut self);

    /// True if every delay register is below [`Float::SILENT_THRESHOLD`].
    fn is_silent(&self) -> bool;
}

/// Section whose realization is picked at runtime from a [`SectionKind`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnySection<F: Float> {
    DirectFormI(DirectFormI<F>),
    DirectFormII(DirectFormII<F>),
    TransposedDirectFormII(TransposedDirectFormII<F>),
}

impl<F: Float> AnySection<F> {
    pub const fn new(kind: SectionKind) -> Self {
        match kind {
            SectionKind::DirectFormI => Self::DirectFormI(DirectFormI::new()),
            SectionKind::DirectFormII => Self::DirectFormII(DirectFormII::new()),
            SectionKind::TransposedDirectFormII => {
                Self::TransposedDirectFormII(TransposedDirectFormII::new())
            }
        }
    }

    pub const fn kind(&self) -> SectionKind {
        match self {
            Self::DirectFormI(_) => SectionKind::DirectFormI,
            Self::DirectFormII(_) => SectionKind::DirectFormII,
            Self::TransposedDirectFormII(_) => SectionKind::TransposedDirectFormII,
        }
    }
}

impl<F: Float> From<SectionKind> for AnySection<F> {
    fn from(kind: SectionKind) -> Self {
        Self::new(kind)
    }
}

impl<F: Float> Section<F> for AnySection<F> {
    #[inline]
    fn filter(&mut self, sample: F, coefficients: &Coefficients<F>) -> F {
        match self {
            Self::DirectFormI(section) => section.filter(sample, coefficients),
            Self::DirectFormII(section) => section.filter(sample, coefficients),
            Self::TransposedDirectFormII(section) => section.filter(sample, coefficients),
        }
    }

    fn reset(&mut self) {
        match self {
            Self::DirectFormI(section) => section.reset(),
            Self::DirectFormII(section) => section.reset(),
            Self::TransposedDirectFormII(section) => section.reset(),
        }
    }

    fn is_silent(&self) -> bool {
        match self {
            Self::DirectFormI(section) => section.is_silent(),
            Self::DirectFormII(section) => section.is_silent(),
            Self::TransposedDirectFormII(section) => section.is_silent(),
        }
    }
}
