use num_bigint::ParseBigIntError;
use thiserror::Error;

/// Errors raised while evaluating the parameter bounds.
///
/// None of these are recovered from: they point at a parameter that has to be
/// fixed by hand before rerunning.
#[derive(Debug, Error)]
pub enum EstimatorError {
    #[error("math domain error: {0}")]
    Domain(String),

    #[error("division by zero: {0}")]
    DivisionByZero(String),

    #[error("numerical result out of range: {0}")]
    Overflow(String),

    #[error("invalid modulus literal: {0}")]
    ParseModulus(#[from] ParseBigIntError),

    #[error("modulus literal contains no digits")]
    EmptyModulus,
}
