use crate::error::YieldError;
use crate::sink::Sink;
use async_trait::async_trait;
use std::fmt::Display;

/// Sink that prints each value, then optionally forwards it onward.
///
/// With [`PrintSink::new`] values are printed and discarded. With
/// [`PrintSink::forwarding`] values are printed and then submitted to the
/// inner sink, which makes this a transparent debugging tap in front of any
/// other sink.
pub struct PrintSink<T> {
  forward: Option<Box<dyn Sink<Item = T>>>,
}

impl<T: Display + Send + 'static> PrintSink<T> {
  /// Builds a sink that prints values and discards them.
  pub fn new() -> Self {
    Self { forward: None }
  }

  /// Builds a sink that prints values and forwards them to `inner`.
  pub fn forwarding(inner: impl Sink<Item = T> + 'static) -> Self {
    Self {
      forward: Some(Box::new(inner)),
    }
  }
}

impl<T: Display + Send + 'static> Default for PrintSink<T> {
  fn default() -> Self {
    Self::new()
  }
}

#[async_trait]
impl<T: Display + Send + 'static> Sink for PrintSink<T> {
  type Item = T;

  async fn submit(&mut self, value: T) -> Result<(), YieldError> {
    println!("{}", value);
    if let Some(forward) = self.forward.as_mut() {
      forward.submit(value).await?;
    }
    Ok(())
  }
}
