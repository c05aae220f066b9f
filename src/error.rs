//! Error types for allocation operations.
//!
//! Both error categories are local and recoverable: a failed operation
//! never leaves the allocator in a partially mutated state.
//!
//! # Examples
//!
//! ```rust
//! use blockfit::{Error, Result};
//!
//! fn check_request(size: usize, capacity: usize) -> Result<()> {
//!     if size == 0 || size > capacity {
//!         return Err(Error::invalid_size(
//!             "request must be between 1 and capacity"
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use std::fmt;

/// Main error type for allocation operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Requested size is zero or exceeds the allocator's capacity.
    InvalidSize(String),

    /// No contiguous free run of the requested length exists.
    NotFound(String),
}

impl Error {
    /// Create an invalid-size error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use blockfit::Error;
    ///
    /// let err = Error::invalid_size("requested 0 blocks");
    /// assert!(matches!(err, Error::InvalidSize(_)));
    /// ```
    pub fn invalid_size(msg: impl Into<String>) -> Self {
        Self::InvalidSize(msg.into())
    }

    /// Create a not-found error.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Check if error is retryable.
    ///
    /// A `NotFound` may succeed later once blocks are deallocated; an
    /// `InvalidSize` request can never succeed against the same allocator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use blockfit::Error;
    ///
    /// assert!(Error::not_found("no run of 8 blocks").is_retryable());
    /// assert!(!Error::invalid_size("requested 0 blocks").is_retryable());
    /// ```
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Check if error is a caller error (bad request, not allocator state).
    pub const fn is_caller_error(&self) -> bool {
        matches!(self, Self::InvalidSize(_))
    }

    /// Get error code for logging.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use blockfit::Error;
    ///
    /// assert_eq!(Error::invalid_size("bad").code(), "INVALID_SIZE");
    /// ```
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidSize(_) => "INVALID_SIZE",
            Self::NotFound(_) => "NOT_FOUND",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize(msg) => write!(f, "invalid size: {msg}"),
            Self::NotFound(msg) => write!(f, "no fit found: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

/// Result type alias for allocation operations.
pub type Result<T> = std::result::Result<T, Error>;
