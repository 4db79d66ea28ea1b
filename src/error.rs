//! Error taxonomy for the two core operations.
//!
//! Every failure is raised synchronously at the call boundary; the caller is
//! expected to fix the input and re-invoke. No partial results are returned.
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Empty or malformed stimulus set, malformed passband, or non-finite
    /// sample values.
    #[error("invalid input `{arg}`: {reason}")]
    InvalidInput { arg: &'static str, reason: String },

    /// Recording too short for forward-backward filtering at the realized
    /// filter order.
    #[error("insufficient signal length: forward-backward filtering needs more than {needed} samples, got {got}")]
    InsufficientData { needed: usize, got: usize },
}

impl Error {
    pub(crate) fn invalid(arg: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidInput { arg, reason: reason.into() }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
