use crate::error::YieldError;
use crate::sink::Sink;
use async_trait::async_trait;

/// Sink that appends every submitted value to a vector, in order.
pub struct VecSink<T> {
  values: Vec<T>,
}

impl<T: Send + 'static> VecSink<T> {
  /// Builds an empty collecting sink.
  pub fn new() -> Self {
    Self { values: Vec::new() }
  }

  /// Builds a collecting sink with preallocated capacity.
  pub fn with_capacity(capacity: usize) -> Self {
    Self {
      values: Vec::with_capacity(capacity),
    }
  }

  /// Returns the collected values so far.
  pub fn values(&self) -> &[T] {
    &self.values
  }

  /// Consumes the sink and returns the collected values.
  pub fn into_vec(self) -> Vec<T> {
    self.values
  }
}

impl<T: Send + 'static> Default for VecSink<T> {
  fn default() -> Self {
    Self::new()
  }
}

#[async_trait]
impl<T: Send + 'static> Sink for VecSink<T> {
  type Item = T;

  async fn submit(&mut self, value: T) -> Result<(), YieldError> {
    self.values.push(value);
    Ok(())
  }
}
