//! # Draining Utilities
//!
//! Helpers that exhaust a generator or a pull-style sequence into an
//! ordered, insertion-order-preserving container. Useful for materializing
//! a bridge's output, feeding an adapter, and testing. Order and
//! multiplicity are always preserved: no deduplication, no reordering.
//!
//! Draining a generator runs it directly in the calling task, with no
//! bridge and no second execution context, so draining an infinite source
//! never returns.

use crate::error::YieldError;
use crate::generator::Generator;
use crate::sink::Sink;
use crate::sinks::vec::VecSink;
use async_trait::async_trait;
use futures::{Stream, StreamExt, TryStreamExt, pin_mut};
use std::marker::PhantomData;

struct ExtendSink<'a, C, T> {
  destination: &'a mut C,
  _marker: PhantomData<fn(T)>,
}

#[async_trait]
impl<'a, C, T> Sink for ExtendSink<'a, C, T>
where
  C: Extend<T> + Send,
  T: Send + 'static,
{
  type Item = T;

  async fn submit(&mut self, value: T) -> Result<(), YieldError> {
    self.destination.extend(std::iter::once(value));
    Ok(())
  }
}

/// Runs the generator to completion and returns everything it produced.
///
/// # Errors
///
/// Propagates the generator's own failure, if any.
pub async fn generator<G>(source: &mut G) -> Result<Vec<G::Item>, YieldError>
where
  G: Generator,
{
  let mut sink = VecSink::new();
  source.generate(&mut sink).await?;
  Ok(sink.into_vec())
}

/// Runs the generator to completion, appending everything it produces to
/// the given container.
///
/// # Errors
///
/// Propagates the generator's own failure; values produced before the
/// failure have already been appended.
pub async fn generator_into<G, C>(source: &mut G, destination: &mut C) -> Result<(), YieldError>
where
  G: Generator,
  C: Extend<G::Item> + Send,
{
  let mut sink = ExtendSink {
    destination,
    _marker: PhantomData,
  };
  source.generate(&mut sink).await
}

/// Collects a pull-style sequence into a vector.
///
/// # Errors
///
/// Propagates the first error the sequence yields.
pub async fn sequence<S, T>(source: S) -> Result<Vec<T>, YieldError>
where
  S: Stream<Item = Result<T, YieldError>>,
{
  source.try_collect().await
}

/// Appends every element of a pull-style sequence to the given container.
///
/// # Errors
///
/// Propagates the first error the sequence yields; earlier elements have
/// already been appended.
pub async fn sequence_into<S, T, C>(source: S, destination: &mut C) -> Result<(), YieldError>
where
  S: Stream<Item = Result<T, YieldError>>,
  C: Extend<T>,
{
  pin_mut!(source);
  while let Some(item) = source.next().await {
    destination.extend(std::iter::once(item?));
  }
  Ok(())
}
