use crate::error::YieldError;
use crate::sink::Sink;
use async_trait::async_trait;
use std::marker::PhantomData;

/// Sink decorator that applies a transformation before forwarding.
///
/// Every value submitted here is passed through the transformation and the
/// result is submitted to the inner sink; order and count are preserved.
/// This is the building block behind
/// [`MappedGenerator`](crate::generators::mapped::MappedGenerator).
pub struct MappedSink<S, F, I> {
  inner: S,
  transform: F,
  _marker: PhantomData<fn(I)>,
}

impl<S, F, I> MappedSink<S, F, I>
where
  S: Sink,
  F: FnMut(I) -> S::Item + Send,
  I: Send + 'static,
{
  /// Wraps `inner` so that submitted values pass through `transform` first.
  pub fn new(inner: S, transform: F) -> Self {
    Self {
      inner,
      transform,
      _marker: PhantomData,
    }
  }

  /// Consumes the decorator and returns the inner sink.
  pub fn into_inner(self) -> S {
    self.inner
  }
}

#[async_trait]
impl<S, F, I> Sink for MappedSink<S, F, I>
where
  S: Sink,
  F: FnMut(I) -> S::Item + Send,
  I: Send + 'static,
{
  type Item = I;

  async fn submit(&mut self, value: I) -> Result<(), YieldError> {
    let mapped = (self.transform)(value);
    self.inner.submit(mapped).await
  }
}
