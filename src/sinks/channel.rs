use crate::error::YieldError;
use crate::sink::Sink;
use async_trait::async_trait;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Sending half of a bridge transfer queue.
///
/// Values submitted here appear, in submission order, on the paired
/// [`PullSequence`](crate::pull::PullSequence). The queue is unbounded by
/// default; in bounded mode `submit` suspends while the queue is full, which
/// is how the bridge applies backpressure to a producer that outruns its
/// consumer.
///
/// `submit` observes the traversal's cancellation token and the liveness of
/// the receiving side, and reports [`YieldError::Cancelled`] when either is
/// gone.
pub struct ChannelSink<T> {
  tx: SinkTx<T>,
  token: CancellationToken,
}

pub(crate) enum SinkTx<T> {
  Unbounded(mpsc::UnboundedSender<Result<T, YieldError>>),
  Bounded(mpsc::Sender<Result<T, YieldError>>),
}

impl<T: Send + 'static> ChannelSink<T> {
  /// Builds a sink over an unbounded channel.
  pub fn unbounded(
    tx: mpsc::UnboundedSender<Result<T, YieldError>>,
    token: CancellationToken,
  ) -> Self {
    Self::from_parts(SinkTx::Unbounded(tx), token)
  }

  /// Builds a sink over a bounded channel; `submit` suspends while full.
  pub fn bounded(tx: mpsc::Sender<Result<T, YieldError>>, token: CancellationToken) -> Self {
    Self::from_parts(SinkTx::Bounded(tx), token)
  }

  pub(crate) fn from_parts(tx: SinkTx<T>, token: CancellationToken) -> Self {
    Self { tx, token }
  }

  /// Returns true once the paired traversal has been cancelled.
  pub fn is_cancelled(&self) -> bool {
    self.token.is_cancelled()
  }

  /// Enqueues a terminal failure for the consumer to observe.
  ///
  /// Used by the bridge after `generate` returns an error. The failure is
  /// delivered at the current tail of the queue, so every value submitted
  /// before it is still consumed first. Delivery is best effort: if the
  /// consumer is already gone there is nobody left to tell.
  pub async fn fail(&mut self, error: YieldError) {
    match &self.tx {
      SinkTx::Unbounded(tx) => {
        let _ = tx.send(Err(error));
      }
      SinkTx::Bounded(tx) => {
        let _ = tx.send(Err(error)).await;
      }
    }
  }
}

#[async_trait]
impl<T: Send + 'static> Sink for ChannelSink<T> {
  type Item = T;

  async fn submit(&mut self, value: T) -> Result<(), YieldError> {
    if self.token.is_cancelled() {
      return Err(YieldError::Cancelled);
    }
    match &self.tx {
      SinkTx::Unbounded(tx) => tx.send(Ok(value)).map_err(|_| YieldError::Cancelled),
      SinkTx::Bounded(tx) => {
        tokio::select! {
          biased;
          sent = tx.send(Ok(value)) => sent.map_err(|_| YieldError::Cancelled),
          _ = self.token.cancelled() => Err(YieldError::Cancelled),
        }
      }
    }
  }
}
