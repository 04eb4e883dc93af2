use crate::domain::model::{Pull, RunReport, StopReason};
use crate::domain::ports::{LineSink, SequenceProducer};
use crate::utils::error::Result;
use std::fmt::Display;

pub const DEFAULT_PULL_CAP: usize = 20;
pub const COMPLETION_MARKER: &str = "done!";

/// Pulls from a producer at most `cap` times, writing one line per pull.
#[derive(Debug, Clone, Copy)]
pub struct BoundedConsumer {
    cap: usize,
}

impl BoundedConsumer {
    pub fn new(cap: usize) -> Self {
        Self { cap }
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    /// Writes each yielded value as a decimal line. On exhaustion writes the
    /// completion marker and stops pulling.
    pub async fn drain<P, S>(&self, producer: &mut P, sink: &mut S) -> Result<RunReport>
    where
        P: SequenceProducer,
        P::Item: Display,
        S: LineSink + ?Sized,
    {
        let mut pulls = 0;
        let mut values_emitted = 0;
        let mut stop_reason = StopReason::CapReached;

        while pulls < self.cap {
            pulls += 1;
            match producer.pull().await {
                Pull::Yielded(value) => {
                    sink.write_line(&value.to_string()).await?;
                    values_emitted += 1;
                }
                Pull::Exhausted => {
                    sink.write_line(COMPLETION_MARKER).await?;
                    stop_reason = StopReason::Exhausted;
                    break;
                }
            }
        }

        sink.flush().await?;

        tracing::debug!(pulls, values_emitted, ?stop_reason, "consumer finished");

        Ok(RunReport {
            pulls,
            values_emitted,
            stop_reason,
        })
    }
}

impl Default for BoundedConsumer {
    fn default() -> Self {
        Self::new(DEFAULT_PULL_CAP)
    }
}
