use crate::error::YieldError;
use futures::{Stream, StreamExt};
use pin_project::pin_project;
use std::pin::Pin;
use std::task::{Context, Poll};

/// Pull-sequence decorator that applies a transformation per element.
///
/// Wraps any pull-side source yielding `Result<I, YieldError>`, including
/// [`PullSequence`](crate::pull::PullSequence) and other `MappedSequence`
/// instances. `has_next` delegates to the source unchanged; `next` returns
/// the transformed value. Errors pass through untransformed, and count and
/// order are always preserved.
#[pin_project]
pub struct MappedSequence<S, F>
where
  S: Stream,
{
  #[pin]
  inner: S,
  transform: F,
  peeked: Option<S::Item>,
}

impl<S, F> MappedSequence<S, F>
where
  S: Stream,
{
  /// Wraps `inner` so every pulled value passes through `transform`.
  pub fn new(inner: S, transform: F) -> Self {
    Self {
      inner,
      transform,
      peeked: None,
    }
  }
}

impl<S, F, I, O> MappedSequence<S, F>
where
  S: Stream<Item = Result<I, YieldError>> + Send + Unpin,
  F: FnMut(I) -> O + Send,
  I: Send + 'static,
  O: Send + 'static,
{
  /// Reports whether another value is available; delegates to the source.
  pub async fn has_next(&mut self) -> bool {
    if self.peeked.is_none() {
      self.peeked = self.inner.next().await;
    }
    matches!(self.peeked, Some(Ok(_)))
  }

  /// Consumes the next value and returns its transformation.
  ///
  /// # Errors
  ///
  /// Source errors (exhaustion, cancellation, generator failure) pass
  /// through unchanged.
  pub async fn next(&mut self) -> Result<O, YieldError> {
    let item = match self.peeked.take() {
      Some(item) => Some(item),
      None => self.inner.next().await,
    };
    match item {
      Some(Ok(value)) => Ok((self.transform)(value)),
      Some(Err(error)) => Err(error),
      None => Err(YieldError::Exhausted),
    }
  }
}

impl<S, F, I, O> Stream for MappedSequence<S, F>
where
  S: Stream<Item = Result<I, YieldError>>,
  F: FnMut(I) -> O,
{
  type Item = Result<O, YieldError>;

  fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
    let this = self.project();
    if let Some(item) = this.peeked.take() {
      return Poll::Ready(Some(item.map(|value| (this.transform)(value))));
    }
    match this.inner.poll_next(cx) {
      Poll::Ready(Some(item)) => Poll::Ready(Some(item.map(|value| (this.transform)(value)))),
      Poll::Ready(None) => Poll::Ready(None),
      Poll::Pending => Poll::Pending,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use futures::stream;

  fn source(values: Vec<i64>) -> impl Stream<Item = Result<i64, YieldError>> + Send + Unpin {
    stream::iter(values.into_iter().map(Ok))
  }

  #[tokio::test]
  async fn test_maps_values_in_order() {
    let mut doubled = MappedSequence::new(source(vec![1, 2, 3]), |value| value * 2);

    let mut collected = Vec::new();
    while doubled.has_next().await {
      collected.push(doubled.next().await.unwrap());
    }
    assert_eq!(collected, vec![2, 4, 6]);
    assert!(matches!(doubled.next().await, Err(YieldError::Exhausted)));
  }

  #[tokio::test]
  async fn test_changes_element_type() {
    let mut named = MappedSequence::new(source(vec![7]), |value| format!("#{}", value));
    assert_eq!(named.next().await.unwrap(), "#7");
  }

  #[tokio::test]
  async fn test_composes_with_itself() {
    let doubled = MappedSequence::new(source(vec![1, 2]), |value| value * 2);
    let mut shifted = MappedSequence::new(doubled, |value| value + 1);

    assert_eq!(shifted.next().await.unwrap(), 3);
    assert_eq!(shifted.next().await.unwrap(), 5);
  }

  #[tokio::test]
  async fn test_errors_pass_through_untransformed() {
    let inner = stream::iter(vec![Ok(1), Err(YieldError::Cancelled)]);
    let mut mapped = MappedSequence::new(inner, |value: i64| value * 10);

    assert_eq!(mapped.next().await.unwrap(), 10);
    assert!(!mapped.has_next().await);
    assert!(matches!(mapped.next().await, Err(YieldError::Cancelled)));
  }

  #[tokio::test]
  async fn test_stream_view() {
    use futures::TryStreamExt;
    let tripled = MappedSequence::new(source(vec![1, 2, 3]), |value| value * 3);
    let collected: Vec<_> = tripled.try_collect().await.unwrap();
    assert_eq!(collected, vec![3, 6, 9]);
  }
}
