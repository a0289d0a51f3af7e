//! # Push to Pull Bridge
//!
//! This module inverts a push-style [`Generator`] into a pull-style
//! [`PullSequence`]. The generator runs to completion in its own tokio task
//! and feeds a transfer queue; the consumer drains the queue on demand from
//! whatever task calls [`PullSequence::next`].
//!
//! ## Overview
//!
//! [`bridge`] is pure construction and runs nothing. Each call to
//! [`BridgedIterable::iterate`] allocates a fresh transfer queue and
//! cancellation token, clones the generator, and spawns one producer task
//! that drives it. Requesting a second sequence from the same bridged
//! object therefore replays generation from scratch; it never rewinds a
//! shared buffer.
//!
//! The transfer queue is a channel carrying `Result<T, YieldError>`.
//! Closing the channel is the completion signal: one primitive both says
//! "no more data" and wakes a suspended consumer, so there is no separate
//! completion flag to keep in sync.
//!
//! ## Queue growth and backpressure
//!
//! The queue is unbounded by default: a producer faster than its consumer
//! grows the backlog without limit. That is an explicit, documented
//! limitation, not an oversight. Opting in to a bounded queue with
//! [`BridgedIterable::with_capacity`] changes producer blocking behavior:
//! `submit` then suspends whenever the queue is full until the consumer
//! drains an element or the traversal ends.
//!
//! ## Example
//!
//! ```rust
//! use yieldstream::bridge::bridge;
//! use yieldstream::generators::range::Range;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let numbers = bridge(Range::new(3));
//! let mut sequence = numbers.iterate();
//! while sequence.has_next().await {
//!   println!("{}", sequence.next().await.unwrap());
//! }
//! # }
//! ```

use crate::generator::Generator;
use crate::pull::{PullSequence, SinkRx};
use crate::sinks::channel::{ChannelSink, SinkTx};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::Instrument;

/// Configuration for a bridged generator.
#[derive(Debug, Clone, Default)]
pub struct BridgeConfig {
  /// Name used to identify this bridge in tracing output.
  pub name: Option<String>,
  /// Transfer queue capacity; `None` means unbounded.
  pub capacity: Option<usize>,
}

/// Converts a push-style generator into a source of pull sequences.
///
/// Construction runs nothing; generation starts when a sequence is
/// requested with [`BridgedIterable::iterate`].
pub fn bridge<G>(generator: G) -> BridgedIterable<G>
where
  G: Generator,
{
  BridgedIterable {
    generator,
    config: BridgeConfig::default(),
  }
}

/// A generator wrapped for pull-style consumption.
///
/// Each [`iterate`](Self::iterate) call runs an independent traversal over
/// a fresh clone of the generator.
pub struct BridgedIterable<G> {
  generator: G,
  config: BridgeConfig,
}

impl<G> BridgedIterable<G>
where
  G: Generator + Clone + 'static,
{
  /// Sets the name used for this bridge in tracing output.
  pub fn with_name(mut self, name: impl Into<String>) -> Self {
    self.config.name = Some(name.into());
    self
  }

  /// Bounds the transfer queue, making the producer suspend when it is
  /// full.
  ///
  /// With a bounded queue a producer that outruns its consumer blocks in
  /// `submit` instead of growing the backlog. `capacity` must be at least
  /// one.
  pub fn with_capacity(mut self, capacity: usize) -> Self {
    self.config.capacity = Some(capacity);
    self
  }

  /// Returns the bridge configuration.
  pub fn config(&self) -> &BridgeConfig {
    &self.config
  }

  /// Starts a new traversal and returns its pull sequence.
  ///
  /// Allocates a fresh transfer queue and cancellation token, clones the
  /// generator and spawns one producer task that drives it. Must be called
  /// within a tokio runtime. The producer task ends when the generator
  /// returns, when it propagates a cancelled submission, or when its error
  /// is handed to the consumer; dropping the returned sequence cancels the
  /// traversal so a cooperative producer does not leak.
  pub fn iterate(&self) -> PullSequence<G::Item> {
    let mut generator = self.generator.clone();
    let token = CancellationToken::new();
    let (tx, rx) = match self.config.capacity {
      Some(capacity) => {
        let (tx, rx) = mpsc::channel(capacity);
        (SinkTx::Bounded(tx), SinkRx::Bounded(rx))
      }
      None => {
        let (tx, rx) = mpsc::unbounded_channel();
        (SinkTx::Unbounded(tx), SinkRx::Unbounded(rx))
      }
    };
    let mut sink = ChannelSink::from_parts(tx, token.clone());
    let span = tracing::debug_span!(
      "generate",
      bridge = self.config.name.as_deref().unwrap_or("bridge")
    );
    tokio::spawn(
      async move {
        tracing::debug!("generator started");
        match generator.generate(&mut sink).await {
          Ok(()) => tracing::debug!("generator completed"),
          Err(error) => {
            if error.is_cancelled() {
              tracing::debug!("generator cancelled");
            } else {
              tracing::warn!(%error, "generator failed");
            }
            sink.fail(error).await;
          }
        }
      }
      .instrument(span),
    );
    PullSequence::new(rx, token)
  }
}
