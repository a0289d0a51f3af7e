//! # Generator Trait
//!
//! This module defines the [`Generator`] trait, the push-style producer
//! capability. A generator is a routine that drives values into a [`Sink`]
//! one at a time until it has no more to give, which may be never.
//!
//! ## Overview
//!
//! The Generator trait provides:
//!
//! - **Push-style production**: values are submitted to a sink in the order
//!   they are meant to be observed
//! - **Unbounded runs**: a generator is not required to terminate; infinite
//!   producers are a first-class use case
//! - **Explicit failure**: a generator that cannot continue returns an
//!   error, which the bridge surfaces to the consumer on the next pull
//! - **Replayable runs**: generators are re-run from scratch for every
//!   traversal; the bridge models this with `Clone`, so each traversal gets
//!   its own fresh instance
//!
//! ## Example
//!
//! ```rust
//! use async_trait::async_trait;
//! use yieldstream::error::YieldError;
//! use yieldstream::generator::Generator;
//! use yieldstream::sink::Sink;
//!
//! #[derive(Clone)]
//! struct Evens;
//!
//! #[async_trait]
//! impl Generator for Evens {
//!   type Item = i64;
//!
//!   async fn generate(&mut self, sink: &mut dyn Sink<Item = i64>) -> Result<(), YieldError> {
//!     for value in [0, 2, 4, 6] {
//!       sink.submit(value).await?;
//!     }
//!     Ok(())
//!   }
//! }
//! ```

use crate::error::YieldError;
use crate::sink::Sink;
use async_trait::async_trait;

/// Trait for push-style producers that drive values into a sink.
///
/// A generator calls the given sink zero or more times, strictly in the
/// order values are meant to be observed, then returns. It is not required
/// that `generate` ever terminate.
#[async_trait]
pub trait Generator: Send {
  /// The type of values this generator produces.
  type Item: Send + 'static;

  /// Repeatedly submits values to the sink until none remain.
  ///
  /// Returning `Ok(())` signals normal completion. Returning an error is
  /// the generator's failure path: when run under the bridge, the error is
  /// transported to the consumer and reported on its next pull operation.
  /// A submission failure (see [`Sink::submit`]) should be propagated with
  /// `?`, which turns consumer-side cancellation into prompt producer
  /// termination.
  async fn generate(&mut self, sink: &mut dyn Sink<Item = Self::Item>) -> Result<(), YieldError>;
}
