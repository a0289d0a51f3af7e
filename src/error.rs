//! # Error Handling System
//!
//! Error taxonomy shared by every yieldstream component.
//!
//! ## Overview
//!
//! All fallible operations in the crate report a [`YieldError`]:
//!
//! - **InvalidArgument**: a constructor was given an input it cannot accept.
//!   Detected eagerly at construction, never deferred to first use.
//! - **Exhausted**: `next()` was called on a pull sequence whose producer has
//!   completed and whose backlog is drained. This is the expected,
//!   recoverable end-of-sequence signal; well-behaved callers check
//!   `has_next()` first.
//! - **Unsupported**: an operation the pull view deliberately does not
//!   support, such as removing elements through it.
//! - **Cancelled**: the traversal was cancelled. Always distinct from
//!   `Exhausted`, so callers can tell a cut-short sequence from a genuinely
//!   finished one.
//! - **Failed**: the generator's own logic returned an error. The bridge
//!   transports it through the transfer queue and reports it to the consumer
//!   on the next pull operation.
//!
//! ## Example
//!
//! ```rust
//! use yieldstream::error::YieldError;
//!
//! let error = YieldError::invalid_argument("step may not be zero");
//! assert!(!error.is_exhausted());
//! ```

use std::error::Error as StdError;
use thiserror::Error;

/// Boxed error type used as the source of a generator failure.
pub type SourceError = Box<dyn StdError + Send + Sync>;

/// Error type reported by generators, sinks and pull sequences.
#[derive(Debug, Error)]
pub enum YieldError {
  /// A constructor input was rejected. Raised at construction time.
  #[error("invalid argument: {0}")]
  InvalidArgument(String),

  /// The producer completed and every value has been consumed.
  #[error("pull sequence is exhausted")]
  Exhausted,

  /// The named operation is not supported on a pull sequence.
  #[error("{0} is not supported on a pull sequence")]
  Unsupported(&'static str),

  /// The traversal was cancelled before the producer completed.
  #[error("pull sequence was cancelled")]
  Cancelled,

  /// The generator's own logic failed while producing values.
  #[error("generator failed: {source}")]
  Failed {
    /// The underlying error returned by the generator.
    #[source]
    source: SourceError,
  },
}

impl YieldError {
  /// Builds an `InvalidArgument` error from the given message.
  pub fn invalid_argument(message: impl Into<String>) -> Self {
    YieldError::InvalidArgument(message.into())
  }

  /// Wraps an arbitrary error as a generator failure.
  pub fn failed(source: impl Into<SourceError>) -> Self {
    YieldError::Failed {
      source: source.into(),
    }
  }

  /// Returns true for the end-of-sequence signal.
  pub fn is_exhausted(&self) -> bool {
    matches!(self, YieldError::Exhausted)
  }

  /// Returns true when the traversal was cancelled.
  pub fn is_cancelled(&self) -> bool {
    matches!(self, YieldError::Cancelled)
  }
}
