//! Error types for vector addition.

use std::fmt;
use thiserror::Error;

/// Which side of an addition an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operand {
    /// The left-hand operand.
    Left,
    /// The right-hand operand.
    Right,
}

impl Operand {
    /// Get the parameter name of this operand.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Errors that can occur when adding vectors.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SseError {
    /// The operands have different lengths.
    #[error("cannot operate on two elements of different length ({left} vs {right})")]
    LengthMismatch {
        /// Length of the left operand.
        left: usize,
        /// Length of the right operand.
        right: usize,
    },

    /// An operand does not fit in a single 128-bit register.
    #[error("cannot operate on anything larger than a 128 bit number (4 floats): `{operand}` has {len}")]
    CapacityExceeded {
        /// The offending operand.
        operand: Operand,
        /// Its length.
        len: usize,
    },

    /// The accelerated strategy was requested on a host without it.
    #[error("128-bit float vector add is not supported on this host")]
    Unsupported,

    /// Unknown strategy name.
    #[error("unknown add strategy: {0}")]
    UnknownStrategy(String),
}

impl SseError {
    /// Returns true if this error is a violated call precondition
    /// (mismatched or oversized operands).
    #[must_use]
    pub const fn is_argument_error(&self) -> bool {
        matches!(
            self,
            Self::LengthMismatch { .. } | Self::CapacityExceeded { .. }
        )
    }
}

/// Result type for vector addition.
pub type Result<T> = std::result::Result<T, SseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_mismatch_message() {
        let err = SseError::LengthMismatch { left: 2, right: 4 };
        assert_eq!(
            err.to_string(),
            "cannot operate on two elements of different length (2 vs 4)"
        );
        assert!(err.is_argument_error());
    }

    #[test]
    fn test_capacity_message_names_operand() {
        let err = SseError::CapacityExceeded {
            operand: Operand::Right,
            len: 5,
        };
        let msg = err.to_string();
        assert!(msg.contains("128 bit"));
        assert!(msg.contains("4 floats"));
        assert!(msg.contains("`right` has 5"));
        assert!(err.is_argument_error());
    }

    #[test]
    fn test_non_argument_errors() {
        assert!(!SseError::Unsupported.is_argument_error());
        assert!(!SseError::UnknownStrategy("avx".into()).is_argument_error());
    }
}
