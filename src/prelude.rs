use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum IntegerMathError{
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    #[error("no exact match in range: {0}")]
    TargetNotFound(&'static str),
    #[error("result out of range: {0}")]
    OutOfRange(&'static str),
}
