pub mod coefficients;
pub mod direct_form_1;
pub mod direct_form_2;
pub mod error;
pub mod filter;
pub mod section;
pub mod transposed_direct_form_2;
pub mod utils;
