use thiserror::Error;

/// Errors returned when constructing or computing a [`crate::TimeSpan`].
#[non_exhaustive]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("the value is outside of the representable range")]
    OutOfRange,
    #[error("the value is not a number")]
    InvalidValue,
}
