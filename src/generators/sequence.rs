use crate::error::YieldError;
use crate::generator::Generator;
use crate::sink::Sink;
use async_trait::async_trait;
use futures::{Stream, StreamExt, stream};

/// Pull-to-push adapter: a generator that drains a pull-style sequence.
///
/// Driving this generator submits every element of the wrapped stream, in
/// traversal order, exactly once, then returns. An infinite stream makes a
/// generator that never returns, which the generator contract permits.
///
/// Each run continues from where the stream currently stands; since a run
/// normally exhausts the stream, construct one adapter per traversal (a
/// clone snapshots the stream's current state).
#[derive(Clone)]
pub struct SequenceGenerator<S> {
  stream: S,
}

impl<S> SequenceGenerator<S> {
  /// Wraps a pull-style stream as a generator.
  pub fn new(stream: S) -> Self {
    Self { stream }
  }
}

impl<I> SequenceGenerator<stream::Iter<I>>
where
  I: Iterator,
{
  /// Wraps an ordinary in-memory sequence as a generator.
  pub fn from_iter<C>(source: C) -> Self
  where
    C: IntoIterator<IntoIter = I>,
  {
    Self::new(stream::iter(source))
  }
}

#[async_trait]
impl<S> Generator for SequenceGenerator<S>
where
  S: Stream + Send + Unpin,
  S::Item: Send + 'static,
{
  type Item = S::Item;

  async fn generate(&mut self, sink: &mut dyn Sink<Item = S::Item>) -> Result<(), YieldError> {
    while let Some(value) = self.stream.next().await {
      sink.submit(value).await?;
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::drain;

  #[tokio::test]
  async fn test_forwards_every_element_in_order() {
    let mut letters = SequenceGenerator::from_iter(vec!["a", "b", "c"]);
    let values = drain::generator(&mut letters).await.unwrap();
    assert_eq!(values, vec!["a", "b", "c"]);
  }

  #[tokio::test]
  async fn test_preserves_duplicates() {
    let mut repeated = SequenceGenerator::from_iter(vec![1, 1, 2, 1]);
    let values = drain::generator(&mut repeated).await.unwrap();
    assert_eq!(values, vec![1, 1, 2, 1]);
  }

  #[tokio::test]
  async fn test_empty_sequence_completes_immediately() {
    let mut empty = SequenceGenerator::from_iter(Vec::<i32>::new());
    let values = drain::generator(&mut empty).await.unwrap();
    assert!(values.is_empty());
  }

  #[tokio::test]
  async fn test_wraps_any_stream() {
    let mut squares = SequenceGenerator::new(stream::iter(0..5).map(|value| value * value));
    let values = drain::generator(&mut squares).await.unwrap();
    assert_eq!(values, vec![0, 1, 4, 9, 16]);
  }
}
