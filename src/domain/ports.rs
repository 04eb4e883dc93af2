use crate::domain::model::Pull;
use crate::utils::error::Result;
use async_trait::async_trait;

/// A stateful producer that hands out one value per pull until exhausted.
pub trait SequenceProducer: Send {
    type Item: Send;

    fn pull(&mut self) -> impl std::future::Future<Output = Pull<Self::Item>> + Send;
}

#[async_trait]
pub trait LineSink: Send {
    async fn write_line(&mut self, line: &str) -> Result<()>;

    async fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

pub trait ConfigProvider {
    /// Number of values the counting sequence produces, if set.
    fn sequence_limit(&self) -> Option<u64>;
    /// Maximum number of pulls the consumer performs, if set.
    fn pull_cap(&self) -> Option<usize>;
}
