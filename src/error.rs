use thiserror::Error;

/// Errors raised when a value cannot enter or leave factoradic form.
///
/// Every variant is an input-validation failure; the variant identifies
/// which precondition was violated. Conversion never returns a partial
/// result alongside an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error("Negative number {0} cannot be represented as a factoradic number")]
    Negative(String),

    #[error("Non-integral number {0} cannot be represented as a factoradic number")]
    NonIntegral(String),

    #[error("Non-finite number {0} cannot be represented as a factoradic number")]
    NonFinite(String),

    #[error("Coefficient sequence does not contain at least one element")]
    EmptyCoefficients,

    #[error("Coefficient {coefficient} at index {index} is not less than or equal to its index")]
    CoefficientOutOfRange { coefficient: u64, index: usize },
}

/// Result type for conversion operations
pub type ConvertResult<T> = Result<T, ConvertError>;
