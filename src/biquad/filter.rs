use crate::biquad::coefficients::Coefficients;
use crate::biquad::direct_form_1::DirectFormI;
use crate::biquad::direct_form_2::DirectFormII;
use crate::biquad::error::DesignError;
use crate::biquad::section::{AnySection, Section};
use crate::biquad::transposed_direct_form_2::TransposedDirectFormII;
use crate::biquad::utils;
use crate::params::SectionKind;
use crate::utils::Float;

/// A biquad: coefficients plus the state of one section realization.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter<F: Float, S: Section<F>> {
    coefficients: Coefficients<F>,
    section: S,
}

pub type DirectFormIFilter<F> = Filter<F, DirectFormI<F>>;
pub type DirectFormIIFilter<F> = Filter<F, DirectFormII<F>>;
pub type TransposedDirectFormIIFilter<F> = Filter<F, TransposedDirectFormII<F>>;

impl<F: Float, S: Section<F> + Default> Filter<F, S> {
    pub fn new(coefficients: Coefficients<F>) -> Self {
        Self {
            coefficients,
            section: S::default(),
        }
    }
}

impl<F: Float> Filter<F, AnySection<F>> {
    pub fn with_kind(coefficients: Coefficients<F>, kind: SectionKind) -> Self {
        Self {
            coefficients,
            section: AnySection::new(kind),
        }
    }

    pub fn kind(&self) -> SectionKind {
        self.section.kind()
    }
}

impl<F: Float, S: Section<F>> Filter<F, S> {
    /// Wraps an existing section, keeping whatever state it already has.
    pub fn from_section(coefficients: Coefficients<F>, section: S) -> Self {
        Self {
            coefficients,
            section,
        }
    }

    #[inline]
    pub fn filter(&mut self, sample: F) -> F {
        self.section.filter(sample, &self.coefficients)
    }

    pub fn process_in_place(&mut self, samples: &mut [F]) {
        for sample in samples.iter_mut() {
            *sample = self.filter(*sample);
        }
    }

    pub fn coefficients(&self) -> &Coefficients<F> {
        &self.coefficients
    }

    pub fn section(&self) -> &S {
        &self.section
    }

    pub fn set_coefficients(&mut self, coefficients: Coefficients<F>, reset_state: bool) {
        log::trace!("swapping biquad coefficients, reset_state: {reset_state}");
        self.coefficients = coefficients;
        if reset_state {
            self.section.reset();
        }
    }

    /// Like [`Self::set_coefficients`], but leaves the filter untouched if the
    /// new coefficients are not finite or not stable.
    pub fn try_set_coefficients(
        &mut self,
        coefficients: Coefficients<F>,
        reset_state: bool,
    ) -> Result<(), DesignError> {
        let error = if !coefficients.is_finite() {
            Some(DesignError::NonFiniteCoefficients)
        } else if !utils::is_stable(&coefficients) {
            Some(DesignError::Unstable)
        } else {
            None
        };
        if let Some(error) = error {
            log::debug!("refusing to retune biquad: {error}");
            return Err(error);
        }
        self.set_coefficients(coefficients, reset_state);
        Ok(())
    }

    pub fn reset(&mut self) {
        self.section.reset();
    }

    pub fn is_silent(&self) -> bool {
        self.section.is_silent()
    }
}
