//! Second order IIR ("biquad") filters, generic over the sample type and over
//! the state realization.
//!
//! ```
//! use biquad_sections::biquad::coefficients::Coefficients;
//! use biquad_sections::biquad::filter::TransposedDirectFormIIFilter;
//!
//! let coefficients = Coefficients::lowpass_two_pole(48000.0_f32, 1000.0, 0.7);
//! let mut filter = TransposedDirectFormIIFilter::new(coefficients);
//! let output = filter.filter(1.0);
//! assert_eq!(output, coefficients.b0);
//! ```
//!
//! Only floating point sample types are accepted:
//!
//! ```compile_fail
//! use biquad_sections::biquad::coefficients::Coefficients;
//!
//! let coefficients = Coefficients::<i32>::lowpass_two_pole(48000, 1000, 1);
//! ```
//!
//! and the realization has to be a [`biquad::section::Section`]:
//!
//! ```compile_fail
//! use biquad_sections::biquad::coefficients::Coefficients;
//! use biquad_sections::biquad::filter::Filter;
//!
//! let filter = Filter::<f32, u8>::new(Coefficients::identity());
//! ```

pub mod biquad;
pub mod params;
pub mod utils;

pub use biquad::coefficients::Coefficients;
pub use biquad::error::DesignError;
pub use biquad::filter::{
    DirectFormIFilter, DirectFormIIFilter, Filter, TransposedDirectFormIIFilter,
};
pub use biquad::section::{AnySection, Section};
pub use params::{LowPass, SectionKind};
