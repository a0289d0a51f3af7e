use crate::error::YieldError;
use crate::generator::Generator;
use crate::sink::Sink;
use crate::sinks::mapped::MappedSink;
use async_trait::async_trait;
use std::marker::PhantomData;

/// Generator decorator that applies a transformation per element.
///
/// Driving this generator drives the inner one with its sink wrapped in a
/// [`MappedSink`], so every value the inner generator submits reaches the
/// outer sink transformed. Order and count are preserved and the
/// transformation is applied exactly once per element.
pub struct MappedGenerator<G, F, O> {
  inner: G,
  transform: F,
  _marker: PhantomData<fn() -> O>,
}

impl<G, F, O> MappedGenerator<G, F, O>
where
  G: Generator,
  F: FnMut(G::Item) -> O + Send,
  O: Send + 'static,
{
  /// Wraps `inner` so every generated value passes through `transform`.
  pub fn new(inner: G, transform: F) -> Self {
    Self {
      inner,
      transform,
      _marker: PhantomData,
    }
  }
}

impl<G: Clone, F: Clone, O> Clone for MappedGenerator<G, F, O> {
  fn clone(&self) -> Self {
    Self {
      inner: self.inner.clone(),
      transform: self.transform.clone(),
      _marker: PhantomData,
    }
  }
}

#[async_trait]
impl<G, F, O> Generator for MappedGenerator<G, F, O>
where
  G: Generator,
  F: FnMut(G::Item) -> O + Send,
  O: Send + 'static,
{
  type Item = O;

  async fn generate(&mut self, sink: &mut dyn Sink<Item = O>) -> Result<(), YieldError> {
    let Self {
      inner, transform, ..
    } = self;
    let mut mapped: MappedSink<_, _, G::Item> = MappedSink::new(sink, transform);
    inner.generate(&mut mapped).await
  }
}
