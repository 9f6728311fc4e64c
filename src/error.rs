//! Error kinds raised by the worm model
//!
//! Every failing operation is checked before any field is written, so a
//! worm that returned an error is exactly as it was before the call.

use thiserror::Error;

/// Failure of a worm operation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum WormError {
    /// An argument (name, radius, orientation, step count) is not acceptable
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The worm faces the lower half-plane and cannot leave the ground
    #[error("Bad orientation: {0} rad points downward, worms cannot tunnel")]
    BadOrientation(f64),

    /// A caller contract was broken (turning too far, sampling outside a jump)
    #[error("Precondition violated: {0}")]
    PreconditionViolation(String),
}

impl WormError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a precondition violation error
    pub fn precondition(msg: impl Into<String>) -> Self {
        Self::PreconditionViolation(msg.into())
    }

    /// Returns true if this error stems from a bad argument
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Returns true if this error stems from a downward orientation
    pub fn is_bad_orientation(&self) -> bool {
        matches!(self, Self::BadOrientation(_))
    }
}

/// Result alias for worm operations
pub type Result<T> = std::result::Result<T, WormError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = WormError::invalid_argument("radius 0.1 is below 0.25");
        assert_eq!(err.to_string(), "Invalid argument: radius 0.1 is below 0.25");
        assert!(err.is_invalid_argument());
        assert!(!err.is_bad_orientation());

        let err = WormError::BadOrientation(4.5);
        assert!(err.to_string().contains("4.5"));
        assert!(err.is_bad_orientation());
    }
}
