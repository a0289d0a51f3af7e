//! # YieldStream
//!
//! Push-to-pull inversion for async Rust.
//!
//! YieldStream lets code that naturally *produces* values by pushing them
//! one at a time (a [`Generator`] driving a [`Sink`]) be consumed as a
//! *pull*-style sequence that a caller steps through at its own pace,
//! including over a logically infinite sequence.
//!
//! ## Key Features
//!
//! - **Push to Pull Bridge**: run a generator in its own tokio task and
//!   consume it on demand through a [`PullSequence`]
//! - **Infinite Producers**: a generator that never returns is a
//!   first-class use case, not an error
//! - **Explicit Terminal States**: exhaustion, cancellation and generator
//!   failure are distinct, never conflated
//! - **Cancellation**: dropping or cancelling a traversal stops a
//!   cooperative producer instead of leaking it
//! - **Composable**: element-wise decorators for both the push and the
//!   pull side, plus adapters in both directions
//!
//! ## Quick Start
//!
//! ```rust
//! use yieldstream::bridge::bridge;
//! use yieldstream::generators::range::Range;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let numbers = bridge(Range::new(5)).with_name("numbers");
//! let mut sequence = numbers.iterate();
//! while sequence.has_next().await {
//!   println!("{}", sequence.next().await.unwrap());
//! }
//! # }
//! ```

// Documentation enforcement - treat missing docs as errors
#![deny(missing_docs)]

/// The push to pull inversion bridge.
pub mod bridge;
/// Utilities that exhaust a source into an ordered container.
pub mod drain;
/// Error taxonomy shared by every component.
pub mod error;
/// Push-style producer capability.
pub mod generator;
/// Built-in generator implementations.
pub mod generators;
/// Consumer-driven pull view over a bridged generator.
pub mod pull;
/// Pull-sequence decorators.
pub mod sequences;
/// Receiving capability that generators submit values to.
pub mod sink;
/// Built-in sink implementations.
pub mod sinks;

pub use bridge::{BridgeConfig, BridgedIterable, bridge};
pub use error::YieldError;
pub use generator::Generator;
pub use pull::PullSequence;
pub use sink::Sink;
