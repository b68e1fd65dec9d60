use std::fmt;

/// Error returned when an input cannot be interpreted as a complex number.
///
/// Mathematically undefined results (0/0, ∞-∞, ...) are not errors, they
/// produce `Complex::NAN`.
#[derive(Debug, Clone, PartialEq)]
pub enum ComplexError {
    EmptyInput,
    InvalidNumber(String),
    InvalidToken(String),
    TrailingSign,
    UnsupportedShape(String),
}

impl fmt::Display for ComplexError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ComplexError::EmptyInput => write!(f, "Input contains no complex number"),
            ComplexError::InvalidNumber(msg) => write!(f, "Invalid numeric literal: {}", msg),
            ComplexError::InvalidToken(msg) => write!(f, "Unexpected token: {}", msg),
            ComplexError::TrailingSign => {
                write!(f, "Sign is not followed by a number or imaginary unit")
            }
            ComplexError::UnsupportedShape(msg) => {
                write!(f, "Unsupported input shape: {}", msg)
            }
        }
    }
}

impl std::error::Error for ComplexError {}

pub type Result<T> = std::result::Result<T, ComplexError>;
