use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("malformed scalar: {token:?}")]
    MalformedScalar { token: String },

    #[error("row length mismatch: expected {expected} terms, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("division by zero")]
    DivisionByZero,

    #[error("{axis} index {index} out of range 1..={count}")]
    IndexOutOfRange {
        axis: &'static str,
        index: usize,
        count: usize,
    },

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, SolverError>;

impl SolverError {
    pub(crate) fn malformed(token: &str) -> Self {
        SolverError::MalformedScalar {
            token: token.to_owned(),
        }
    }

    pub(crate) fn check_index(axis: &'static str, index: usize, count: usize) -> Result<()> {
        if index < 1 || index > count {
            return Err(SolverError::IndexOutOfRange { axis, index, count });
        }
        Ok(())
    }
}
