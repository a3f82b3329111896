use thiserror::Error;

pub mod constants;
pub mod converter;
pub mod scale;
pub mod validation;

pub use converter::{NumberConverter, to_words};
pub use scale::Scale;

/// Invalid argument passed to one of the bounded helpers.
///
/// None of these can be observed through [`to_words`], which is total over `i64`.
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum ValidationError {
    /// error returned if the lower bound of a range is greater than the upper bound
    #[error("min ({min}) > max ({max})")]
    InvalidRange { min: i64, max: i64 },

    /// error returned if a value is smaller than the lower bound
    #[error("value ({value}) < min ({min})")]
    BelowMinimum { value: i64, min: i64 },

    /// error returned if a value is greater than the upper bound
    #[error("value ({value}) > max ({max})")]
    AboveMaximum { value: i64, max: i64 },

    /// error returned if a value that has to be zero or positive is negative
    #[error("negative value ({0})")]
    NegativeValue(i64),
}
