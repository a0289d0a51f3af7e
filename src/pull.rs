//! # Pull Sequence
//!
//! This module defines [`PullSequence`], the consumer-driven view over a
//! bridged generator. The consumer steps through values at its own pace with
//! [`PullSequence::has_next`] and [`PullSequence::next`], both of which
//! suspend while the transfer queue is empty and the producer is still
//! running. For an infinite producer that suspension is indefinite once the
//! backlog is drained, which is correct and intentional.
//!
//! ## Terminal states
//!
//! A sequence ends in exactly one of three ways, and the distinction is
//! never blurred:
//!
//! - **Exhausted**: the producer returned normally and every value has been
//!   consumed; `next` reports [`YieldError::Exhausted`].
//! - **Cancelled**: the traversal was cancelled via
//!   [`PullSequence::cancel`] or by dropping the sequence; `next` reports
//!   [`YieldError::Cancelled`], never `Exhausted`.
//! - **Failed**: the generator's own logic returned an error; `next` reports
//!   it exactly once, after which the sequence reads as exhausted.
//!
//! ## Single-consumer contract
//!
//! Every consuming method takes `&mut self`, so concurrent consumption of
//! one sequence is rejected by the borrow checker instead of being
//! undefined behavior.
//!
//! ## Stream view
//!
//! `PullSequence` also implements [`futures::Stream`] with
//! `Item = Result<T, YieldError>`: values arrive as `Ok`, a failure or
//! cancellation arrives as one `Err`, and the stream ends after normal
//! exhaustion. Prefer `has_next`/`next` when you need prompt wakeup on
//! cancellation while the producer is parked between submissions.

use crate::error::YieldError;
use crate::generator::Generator;
use crate::sequences::mapped::MappedSequence;
use crate::sink::Sink;
use async_trait::async_trait;
use futures::Stream;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::mpsc;
use tokio_util::sync::{CancellationToken, WaitForCancellationFutureOwned};

pub(crate) enum SinkRx<T> {
  Unbounded(mpsc::UnboundedReceiver<Result<T, YieldError>>),
  Bounded(mpsc::Receiver<Result<T, YieldError>>),
}

impl<T> SinkRx<T> {
  async fn recv(&mut self) -> Option<Result<T, YieldError>> {
    match self {
      SinkRx::Unbounded(rx) => rx.recv().await,
      SinkRx::Bounded(rx) => rx.recv().await,
    }
  }

  fn poll_recv(&mut self, cx: &mut Context<'_>) -> Poll<Option<Result<T, YieldError>>> {
    match self {
      SinkRx::Unbounded(rx) => rx.poll_recv(cx),
      SinkRx::Bounded(rx) => rx.poll_recv(cx),
    }
  }
}

enum Terminal {
  Completed,
  Cancelled,
  Failed(Option<YieldError>),
}

/// Consumer-driven pull view over a bridged generator.
///
/// Produced by [`BridgedIterable::iterate`](crate::bridge::BridgedIterable::iterate).
/// Values are observed in exactly the order the generator submitted them.
pub struct PullSequence<T> {
  rx: SinkRx<T>,
  token: CancellationToken,
  cancelled: Pin<Box<WaitForCancellationFutureOwned>>,
  peeked: Option<T>,
  terminal: Option<Terminal>,
  cancel_reported: bool,
}

impl<T: Send + 'static> PullSequence<T> {
  pub(crate) fn new(rx: SinkRx<T>, token: CancellationToken) -> Self {
    let cancelled = Box::pin(token.clone().cancelled_owned());
    Self {
      rx,
      token,
      cancelled,
      peeked: None,
      terminal: None,
      cancel_reported: false,
    }
  }

  /// Suspends until a value is buffered or a terminal state is known.
  async fn fill(&mut self) {
    if self.peeked.is_some() || self.terminal.is_some() {
      return;
    }
    let received = tokio::select! {
      biased;
      item = self.rx.recv() => Some(item),
      _ = self.token.cancelled() => None,
    };
    match received {
      Some(Some(Ok(value))) => self.peeked = Some(value),
      Some(Some(Err(error))) => self.terminal = Some(Terminal::from_error(error)),
      Some(None) => self.terminal = Some(Terminal::Completed),
      None => self.terminal = Some(Terminal::Cancelled),
    }
  }

  fn terminal_error(&mut self) -> YieldError {
    match self.terminal.as_mut() {
      Some(Terminal::Cancelled) => YieldError::Cancelled,
      Some(Terminal::Failed(error)) => error.take().unwrap_or(YieldError::Exhausted),
      _ => YieldError::Exhausted,
    }
  }

  /// Reports whether another value is available, suspending until that is
  /// known.
  ///
  /// Returns `true` exactly when a subsequent [`next`](Self::next) will
  /// return a value. A pending failure or cancellation reads as `false`;
  /// `next` then reports which one it was. Calling `has_next` repeatedly
  /// does not consume anything.
  pub async fn has_next(&mut self) -> bool {
    self.fill().await;
    self.peeked.is_some()
  }

  /// Consumes and returns the next value, suspending until one is
  /// available or the sequence has ended.
  ///
  /// # Errors
  ///
  /// [`YieldError::Exhausted`] after normal completion,
  /// [`YieldError::Cancelled`] after cancellation, or the generator's own
  /// error (reported once) after a failure.
  pub async fn next(&mut self) -> Result<T, YieldError> {
    self.fill().await;
    match self.peeked.take() {
      Some(value) => Ok(value),
      None => Err(self.terminal_error()),
    }
  }

  /// Requests cancellation of this traversal.
  ///
  /// The producer observes the cancellation through its sink (and through
  /// [`ChannelSink::is_cancelled`](crate::sinks::channel::ChannelSink::is_cancelled)
  /// if it polls between submissions) and terminates instead of producing
  /// further. Values already buffered still drain first; after that the
  /// sequence ends in the `Cancelled` state, never `Exhausted`.
  /// Cancellation is cooperative: a generator that never submits and never
  /// polls cannot observe it.
  pub fn cancel(&self) {
    self.token.cancel();
  }

  /// Removal through a pull view is not a supported operation.
  ///
  /// # Errors
  ///
  /// Always returns [`YieldError::Unsupported`].
  pub fn remove(&mut self) -> Result<(), YieldError> {
    Err(YieldError::Unsupported("remove"))
  }

  /// Wraps this sequence so every value passes through `transform`.
  pub fn map<F, O>(self, transform: F) -> MappedSequence<Self, F>
  where
    F: FnMut(T) -> O + Send,
    O: Send + 'static,
  {
    MappedSequence::new(self, transform)
  }
}

// Nothing in the sequence is structurally pinned; `peeked` holds values by
// move only.
impl<T> Unpin for PullSequence<T> {}

impl<T> Drop for PullSequence<T> {
  fn drop(&mut self) {
    // An abandoned traversal must not leak its producer task.
    self.token.cancel();
  }
}

impl<T: Send + 'static> Stream for PullSequence<T> {
  type Item = Result<T, YieldError>;

  fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
    let this = self.get_mut();
    if let Some(value) = this.peeked.take() {
      return Poll::Ready(Some(Ok(value)));
    }
    if this.terminal.is_none() {
      match this.rx.poll_recv(cx) {
        Poll::Ready(Some(Ok(value))) => return Poll::Ready(Some(Ok(value))),
        Poll::Ready(Some(Err(error))) => this.terminal = Some(Terminal::from_error(error)),
        Poll::Ready(None) => this.terminal = Some(Terminal::Completed),
        Poll::Pending => match this.cancelled.as_mut().poll(cx) {
          Poll::Ready(()) => this.terminal = Some(Terminal::Cancelled),
          Poll::Pending => return Poll::Pending,
        },
      }
    }
    match this.terminal.as_mut() {
      Some(Terminal::Completed) | None => Poll::Ready(None),
      Some(Terminal::Cancelled) => {
        if this.cancel_reported {
          Poll::Ready(None)
        } else {
          this.cancel_reported = true;
          Poll::Ready(Some(Err(YieldError::Cancelled)))
        }
      }
      Some(Terminal::Failed(error)) => match error.take() {
        Some(error) => Poll::Ready(Some(Err(error))),
        None => Poll::Ready(None),
      },
    }
  }
}

impl Terminal {
  fn from_error(error: YieldError) -> Self {
    match error {
      YieldError::Cancelled => Terminal::Cancelled,
      other => Terminal::Failed(Some(other)),
    }
  }
}

/// A pull sequence is itself a generator: driving it submits every
/// remaining value, in order, to the given sink. This is the pull-to-push
/// adapter applied directly to a bridge output; see also
/// [`SequenceGenerator`](crate::generators::sequence::SequenceGenerator)
/// for ordinary streams and iterators.
#[async_trait]
impl<T: Send + 'static> Generator for PullSequence<T> {
  type Item = T;

  async fn generate(&mut self, sink: &mut dyn Sink<Item = T>) -> Result<(), YieldError> {
    loop {
      match self.next().await {
        Ok(value) => sink.submit(value).await?,
        Err(YieldError::Exhausted) => return Ok(()),
        Err(error) => return Err(error),
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::sinks::channel::{ChannelSink, SinkTx};
  use futures::StreamExt;

  fn unbounded_pair<T: Send + 'static>() -> (ChannelSink<T>, PullSequence<T>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let token = CancellationToken::new();
    let sink = ChannelSink::from_parts(SinkTx::Unbounded(tx), token.clone());
    let sequence = PullSequence::new(SinkRx::Unbounded(rx), token);
    (sink, sequence)
  }

  #[tokio::test]
  async fn test_values_then_exhausted() {
    let (mut sink, mut sequence) = unbounded_pair();
    sink.submit(1).await.unwrap();
    sink.submit(2).await.unwrap();
    drop(sink);

    assert!(sequence.has_next().await);
    assert_eq!(sequence.next().await.unwrap(), 1);
    assert_eq!(sequence.next().await.unwrap(), 2);
    assert!(!sequence.has_next().await);
    assert!(matches!(sequence.next().await, Err(YieldError::Exhausted)));
    // Exhaustion is sticky.
    assert!(matches!(sequence.next().await, Err(YieldError::Exhausted)));
  }

  #[tokio::test]
  async fn test_has_next_does_not_consume() {
    let (mut sink, mut sequence) = unbounded_pair();
    sink.submit(42).await.unwrap();
    drop(sink);

    assert!(sequence.has_next().await);
    assert!(sequence.has_next().await);
    assert_eq!(sequence.next().await.unwrap(), 42);
  }

  #[tokio::test]
  async fn test_remove_is_unsupported() {
    let (_sink, mut sequence) = unbounded_pair::<i32>();
    assert!(matches!(
      sequence.remove(),
      Err(YieldError::Unsupported("remove"))
    ));
  }

  #[tokio::test]
  async fn test_cancel_is_not_exhaustion() {
    let (mut sink, mut sequence) = unbounded_pair();
    sink.submit(1).await.unwrap();

    sequence.cancel();
    // The buffered value still drains before the terminal state.
    assert_eq!(sequence.next().await.unwrap(), 1);
    assert!(matches!(sequence.next().await, Err(YieldError::Cancelled)));
    assert!(!sequence.has_next().await);
    assert!(matches!(sequence.next().await, Err(YieldError::Cancelled)));
  }

  #[tokio::test]
  async fn test_failure_reported_once() {
    let (mut sink, mut sequence) = unbounded_pair();
    sink.submit(5).await.unwrap();
    sink
      .fail(YieldError::failed(std::io::Error::new(
        std::io::ErrorKind::Other,
        "exploded",
      )))
      .await;
    drop(sink);

    assert_eq!(sequence.next().await.unwrap(), 5);
    assert!(matches!(
      sequence.next().await,
      Err(YieldError::Failed { .. })
    ));
    assert!(matches!(sequence.next().await, Err(YieldError::Exhausted)));
  }

  #[tokio::test]
  async fn test_stream_view() {
    let (mut sink, mut sequence) = unbounded_pair();
    sink.submit(1).await.unwrap();
    sink.submit(2).await.unwrap();
    drop(sink);

    assert_eq!(sequence.next().await.unwrap(), 1);
    let rest: Vec<_> = sequence.collect().await;
    assert_eq!(rest.len(), 1);
    assert_eq!(*rest[0].as_ref().unwrap(), 2);
  }

  #[tokio::test]
  async fn test_stream_reports_cancellation_once() {
    let (mut sink, sequence) = unbounded_pair();
    sink.submit(9).await.unwrap();
    sequence.cancel();

    let items: Vec<_> = sequence.collect().await;
    assert_eq!(items.len(), 2);
    assert_eq!(*items[0].as_ref().unwrap(), 9);
    assert!(matches!(items[1], Err(YieldError::Cancelled)));
  }
}
