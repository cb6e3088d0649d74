use simple_error::SimpleError;
use std::fmt;

/// Error types for complex-number operations
#[derive(Debug, Clone, PartialEq)]
pub enum ComplexError {
    /// A branch index was not a whole number
    InvalidBranchIndex(f64),
    /// Text could not be parsed as a complex number
    Parse(String),
}

impl fmt::Display for ComplexError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ComplexError::InvalidBranchIndex(k) => {
                write!(f, "Invalid branch index: {} is not a whole number", k)
            }
            ComplexError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for ComplexError {}

impl From<SimpleError> for ComplexError {
    fn from(err: SimpleError) -> Self {
        ComplexError::Parse(err.as_str().to_string())
    }
}
