//! Error handling for the corral library
//!
//! The container operations share a deliberately small failure taxonomy:
//! out-of-range index, underflow (removal/peek on an empty structure), and
//! overflow (insertion into a full fixed-capacity structure). Every violation
//! is surfaced to the caller immediately; nothing is retried or recovered
//! internally, and a failed operation leaves the container unchanged.

use thiserror::Error;

/// Main error type for the corral library
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CorralError {
    /// Index at or past the logical size of the container
    #[error("index {index} out of range for length {len}")]
    OutOfRange {
        /// The invalid index
        index: usize,
        /// The logical size at the time of the call
        len: usize,
    },

    /// Removal or peek on an empty container
    #[error("{op} on empty container")]
    Underflow {
        /// The operation that was attempted
        op: &'static str,
    },

    /// Insertion into a full fixed-capacity container
    #[error("enqueue on full queue (capacity {capacity})")]
    Overflow {
        /// Physical capacity of the queue (one slot is reserved)
        capacity: usize,
    },
}

impl CorralError {
    /// Create an out-of-range error
    pub fn out_of_range(index: usize, len: usize) -> Self {
        Self::OutOfRange { index, len }
    }

    /// Create an underflow error for the named operation
    pub fn underflow(op: &'static str) -> Self {
        Self::Underflow { op }
    }

    /// Create an overflow error for a queue of the given capacity
    pub fn overflow(capacity: usize) -> Self {
        Self::Overflow { capacity }
    }

    /// Get the error category for logging/diagnostics
    pub fn category(&self) -> &'static str {
        match self {
            Self::OutOfRange { .. } => "range",
            Self::Underflow { .. } => "underflow",
            Self::Overflow { .. } => "overflow",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, CorralError>;

/// Assert that an index is within bounds
#[inline]
pub fn check_bounds(index: usize, len: usize) -> Result<()> {
    if index >= len {
        Err(CorralError::out_of_range(index, len))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = CorralError::out_of_range(5, 3);
        assert_eq!(err, CorralError::OutOfRange { index: 5, len: 3 });
        assert_eq!(err.category(), "range");

        let err = CorralError::underflow("pop");
        assert_eq!(err, CorralError::Underflow { op: "pop" });
        assert_eq!(err.category(), "underflow");

        let err = CorralError::overflow(8);
        assert_eq!(err, CorralError::Overflow { capacity: 8 });
        assert_eq!(err.category(), "overflow");
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            CorralError::out_of_range(4, 4).to_string(),
            "index 4 out of range for length 4"
        );
        assert_eq!(
            CorralError::underflow("dequeue").to_string(),
            "dequeue on empty container"
        );
        assert_eq!(
            CorralError::overflow(4).to_string(),
            "enqueue on full queue (capacity 4)"
        );
    }

    #[test]
    fn test_bounds_checking() {
        assert!(check_bounds(5, 10).is_ok());
        assert!(check_bounds(0, 1).is_ok());
        assert_eq!(
            check_bounds(10, 10),
            Err(CorralError::out_of_range(10, 10))
        );
        assert_eq!(
            check_bounds(15, 10),
            Err(CorralError::out_of_range(15, 10))
        );
        assert_eq!(check_bounds(0, 0), Err(CorralError::out_of_range(0, 0)));
    }

    #[test]
    fn test_error_is_std_error() {
        fn takes_std_error(_: &dyn std::error::Error) {}
        takes_std_error(&CorralError::underflow("front"));
    }
}
