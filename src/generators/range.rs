use crate::error::YieldError;
use crate::generator::Generator;
use crate::sink::Sink;
use async_trait::async_trait;

/// Arithmetic sequence over `i64` with a start, an exclusive end and a
/// step.
///
/// A range is both a [`Generator`] (push) and an ordinary iterable
/// ([`Range::iter`], pull). The two views produce identical sequences, and
/// the pull view needs no bridge because the elements are computed, not
/// received.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
  start: i64,
  finish: i64,
  step: i64,
}

impl Range {
  /// Builds the range `[0, count)` stepping by one.
  ///
  /// A negative `count` runs downward: `Range::new(5)` is `0, 1, 2, 3, 4`
  /// while `Range::new(-5)` is `0, -1, -2, -3, -4`.
  pub fn new(count: i64) -> Self {
    Self {
      start: 0,
      finish: count,
      step: if count < 0 { -1 } else { 1 },
    }
  }

  /// Builds the range `[start, end)` stepping by one toward `end`.
  pub fn between(start: i64, end: i64) -> Self {
    Self {
      start,
      finish: end,
      step: if start <= end { 1 } else { -1 },
    }
  }

  /// Builds the range `[start, end)` with an explicit step.
  ///
  /// # Errors
  ///
  /// Returns [`YieldError::InvalidArgument`] for a zero step, or a step
  /// whose sign cannot ever reach `end` from `start`. The check is eager so
  /// an unreachable range fails at construction, not on first use.
  pub fn with_step(start: i64, end: i64, step: i64) -> Result<Self, YieldError> {
    if step == 0 {
      return Err(YieldError::invalid_argument("step may not be zero"));
    }
    if start < end && step < 0 {
      return Err(YieldError::invalid_argument(
        "step must be positive when start < end",
      ));
    }
    if start > end && step > 0 {
      return Err(YieldError::invalid_argument(
        "step must be negative when start > end",
      ));
    }
    Ok(Self {
      start,
      finish: end,
      step,
    })
  }

  /// Returns the value at the given offset, without bounds checking.
  ///
  /// This is the value the sequence would contain at that index if it
  /// continued indefinitely; combine with [`contains`](Self::contains)
  /// when bounds matter.
  pub fn element_at(&self, index: i64) -> i64 {
    self.start + index * self.step
  }

  /// Reports whether the value lies within the range's bounds.
  pub fn contains(&self, value: i64) -> bool {
    if self.step > 0 {
      value >= self.start && value < self.finish
    } else {
      value <= self.start && value > self.finish
    }
  }

  /// The first element, inclusive.
  pub fn start(&self) -> i64 {
    self.start
  }

  /// The last element, exclusive.
  pub fn finish(&self) -> i64 {
    self.finish
  }

  /// The distance between consecutive elements; negative for descending
  /// ranges.
  pub fn step(&self) -> i64 {
    self.step
  }

  /// Returns a pull-style iterator over the range.
  pub fn iter(&self) -> RangeIter {
    RangeIter {
      value: self.start,
      finish: self.finish,
      step: self.step,
    }
  }
}

#[async_trait]
impl Generator for Range {
  type Item = i64;

  async fn generate(&mut self, sink: &mut dyn Sink<Item = i64>) -> Result<(), YieldError> {
    let mut value = self.start;
    if self.step > 0 {
      while value < self.finish {
        sink.submit(value).await?;
        value += self.step;
      }
    } else {
      while value > self.finish {
        sink.submit(value).await?;
        value += self.step;
      }
    }
    Ok(())
  }
}

impl IntoIterator for Range {
  type Item = i64;
  type IntoIter = RangeIter;

  fn into_iter(self) -> RangeIter {
    self.iter()
  }
}

/// Pull-style iterator over a [`Range`].
#[derive(Debug, Clone)]
pub struct RangeIter {
  value: i64,
  finish: i64,
  step: i64,
}

impl Iterator for RangeIter {
  type Item = i64;

  fn next(&mut self) -> Option<i64> {
    let remaining = if self.step > 0 {
      self.value < self.finish
    } else {
      self.value > self.finish
    };
    if !remaining {
      return None;
    }
    let result = self.value;
    self.value += self.step;
    Some(result)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::drain;

  #[tokio::test]
  async fn test_forward_count() {
    let values = drain::generator(&mut Range::new(5)).await.unwrap();
    assert_eq!(values, vec![0, 1, 2, 3, 4]);
  }

  #[tokio::test]
  async fn test_backward_count() {
    let values = drain::generator(&mut Range::new(-5)).await.unwrap();
    assert_eq!(values, vec![0, -1, -2, -3, -4]);
  }

  #[tokio::test]
  async fn test_between_infers_direction() {
    let values = drain::generator(&mut Range::between(3, 0)).await.unwrap();
    assert_eq!(values, vec![3, 2, 1]);
  }

  #[tokio::test]
  async fn test_explicit_step() {
    let mut range = Range::with_step(2, 7, 2).unwrap();
    let values = drain::generator(&mut range).await.unwrap();
    assert_eq!(values, vec![2, 4, 6]);
  }

  #[test]
  fn test_invalid_steps_rejected_eagerly() {
    assert!(matches!(
      Range::with_step(0, 10, 0),
      Err(YieldError::InvalidArgument(_))
    ));
    assert!(matches!(
      Range::with_step(0, 10, -1),
      Err(YieldError::InvalidArgument(_))
    ));
    assert!(matches!(
      Range::with_step(10, 0, 1),
      Err(YieldError::InvalidArgument(_))
    ));
  }

  #[test]
  fn test_empty_when_start_equals_end() {
    let range = Range::between(4, 4);
    assert_eq!(range.iter().count(), 0);
  }

  #[test]
  fn test_pull_iteration_matches_push() {
    let range = Range::with_step(10, 0, -3).unwrap();
    let values: Vec<i64> = range.iter().collect();
    assert_eq!(values, vec![10, 7, 4, 1]);
  }

  #[test]
  fn test_element_at_and_contains() {
    let range = Range::with_step(2, 10, 2).unwrap();
    assert_eq!(range.element_at(0), 2);
    assert_eq!(range.element_at(3), 8);
    assert_eq!(range.element_at(7), 16);
    assert!(range.contains(8));
    assert!(!range.contains(10));
    assert!(!range.contains(1));

    let descending = Range::new(-3);
    assert!(descending.contains(-2));
    assert!(!descending.contains(-3));
    assert!(!descending.contains(1));
  }

  #[test]
  fn test_accessors() {
    let range = Range::with_step(1, 9, 4).unwrap();
    assert_eq!(range.start(), 1);
    assert_eq!(range.finish(), 9);
    assert_eq!(range.step(), 4);
  }

  #[test]
  fn test_into_iterator() {
    let mut collected = Vec::new();
    for value in Range::new(3) {
      collected.push(value);
    }
    assert_eq!(collected, vec![0, 1, 2]);
  }
}
