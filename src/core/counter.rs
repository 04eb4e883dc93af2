use crate::domain::model::Pull;
use crate::domain::ports::SequenceProducer;
use futures_core::Stream;
use std::pin::Pin;
use std::task::{Context, Poll};

pub const DEFAULT_LIMIT: u64 = 18;

/// Lazy counter over `1..=limit`.
///
/// Each value is produced on demand. Once `limit` values have been handed out
/// every further pull reports exhaustion; the only way to start over is to
/// build a new sequence.
#[derive(Debug, Clone)]
pub struct CountingSequence {
    produced: u64,
    limit: u64,
}

impl CountingSequence {
    pub fn new(limit: u64) -> Self {
        Self { produced: 0, limit }
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    pub fn produced(&self) -> u64 {
        self.produced
    }

    pub fn remaining(&self) -> u64 {
        self.limit - self.produced
    }

    pub fn is_exhausted(&self) -> bool {
        self.produced >= self.limit
    }

    fn advance(&mut self) -> Pull<u64> {
        if self.is_exhausted() {
            return Pull::Exhausted;
        }
        self.produced += 1;
        Pull::Yielded(self.produced)
    }
}

impl Default for CountingSequence {
    fn default() -> Self {
        Self::new(DEFAULT_LIMIT)
    }
}

impl SequenceProducer for CountingSequence {
    type Item = u64;

    async fn pull(&mut self) -> Pull<u64> {
        // Hand control back to the scheduler once per pull, like a generator resuming.
        tokio::task::yield_now().await;

        let pull = self.advance();
        match pull {
            Pull::Yielded(value) => tracing::trace!(value, "sequence yielded"),
            Pull::Exhausted => tracing::trace!(produced = self.produced, "sequence exhausted"),
        }
        pull
    }
}

impl Stream for CountingSequence {
    type Item = u64;

    fn poll_next(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Option<u64>> {
        Poll::Ready(self.get_mut().advance().into_option())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}
