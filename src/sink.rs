//! # Sink Trait
//!
//! This module defines the [`Sink`] trait, the receiving capability that
//! generators submit values to. Anything that can accept values implements
//! it: the bridge's transfer queue, in-memory collectors, the console sink,
//! and decorators that rewrite values on the way through.
//!
//! ## Overview
//!
//! A sink accepts one value per [`Sink::submit`] call. Submission may
//! suspend, for example when the value is handed to a bounded transfer queue
//! that is currently full. Submission may also fail: the bridge's sink
//! reports [`YieldError::Cancelled`] once the consuming side has gone away,
//! which lets a well-behaved generator unwind with `?` instead of producing
//! into the void.
//!
//! ## Example
//!
//! ```rust
//! use yieldstream::sink::Sink;
//! use yieldstream::sinks::vec::VecSink;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let mut sink = VecSink::new();
//! sink.submit(1).await.unwrap();
//! sink.submit(2).await.unwrap();
//! assert_eq!(sink.into_vec(), vec![1, 2]);
//! # }
//! ```

use crate::error::YieldError;
use async_trait::async_trait;

/// Trait for components that values can be submitted to.
///
/// Generators drive values into a sink in production order; the sink decides
/// what receiving a value means. Implementations must be safe to call
/// repeatedly and may suspend inside `submit`.
#[async_trait]
pub trait Sink: Send {
  /// The type of values this sink accepts.
  type Item: Send + 'static;

  /// Submits one value to this sink for processing.
  ///
  /// # Errors
  ///
  /// Returns [`YieldError::Cancelled`] when the receiving side of the sink
  /// no longer exists or the traversal feeding it was cancelled. Generators
  /// should propagate this with `?` so their producing task terminates
  /// promptly.
  async fn submit(&mut self, value: Self::Item) -> Result<(), YieldError>;
}

#[async_trait]
impl<'a, S> Sink for &'a mut S
where
  S: Sink + ?Sized,
{
  type Item = S::Item;

  async fn submit(&mut self, value: Self::Item) -> Result<(), YieldError> {
    (**self).submit(value).await
  }
}
