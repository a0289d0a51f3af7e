//! Demonstrates push-to-pull inversion end to end: a finite range driven
//! through the print sink, then an unbounded counting generator bridged
//! and pulled forever. Stop it with ctrl-c.

use async_trait::async_trait;
use yieldstream::bridge::bridge;
use yieldstream::error::YieldError;
use yieldstream::generator::Generator;
use yieldstream::generators::range::Range;
use yieldstream::sink::Sink;
use yieldstream::sinks::console::PrintSink;

#[derive(Clone)]
struct Counter;

#[async_trait]
impl Generator for Counter {
  type Item = u64;

  async fn generate(&mut self, sink: &mut dyn Sink<Item = u64>) -> Result<(), YieldError> {
    let mut count = 0;
    // Never returns; the bridge still hands every value to the consumer.
    loop {
      sink.submit(count).await?;
      count += 1;
    }
  }
}

#[tokio::main]
async fn main() -> Result<(), YieldError> {
  tracing_subscriber::fmt::init();

  // Push side: drive a finite range straight into the print sink.
  let mut range = Range::new(5);
  let mut printer = PrintSink::new();
  range.generate(&mut printer).await?;

  // Pull side: bridge an unbounded counter and consume at our own pace.
  let numbers = bridge(Counter).with_name("counter");
  let mut sequence = numbers.iterate();
  while sequence.has_next().await {
    println!("{}", sequence.next().await?);
  }
  Ok(())
}
