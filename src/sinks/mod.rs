//! Built-in sink implementations.
//!
//! Sinks are the receiving half of the push model: generators submit values
//! into them. This module provides the transfer-queue sink used by the
//! bridge, in-memory collectors, a console sink and an element-wise
//! decorator.

/// Transfer-queue sink feeding a bridged pull sequence.
pub mod channel;
/// Console sink that prints values and optionally forwards them.
pub mod console;
/// Element-wise decorator that rewrites values before forwarding them.
pub mod mapped;
/// Collecting sink that appends values to a vector.
pub mod vec;

pub use channel::ChannelSink;
pub use console::PrintSink;
pub use mapped::MappedSink;
pub use vec::VecSink;
