use crate::config::RunSettings;
use crate::core::consumer::BoundedConsumer;
use crate::core::counter::CountingSequence;
use crate::domain::model::RunReport;
use crate::domain::ports::LineSink;
use crate::utils::error::Result;

pub struct CountEngine {
    settings: RunSettings,
}

impl CountEngine {
    pub fn new(settings: RunSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &RunSettings {
        &self.settings
    }

    /// Runs a fresh sequence through a fresh consumer into `sink`.
    pub async fn run<S: LineSink + ?Sized>(&self, sink: &mut S) -> Result<RunReport> {
        tracing::info!(
            limit = self.settings.limit,
            cap = self.settings.cap,
            "Starting counting run"
        );

        let mut sequence = CountingSequence::new(self.settings.limit);
        let consumer = BoundedConsumer::new(self.settings.cap);
        let report = consumer.drain(&mut sequence, sink).await?;

        tracing::info!(
            "Run finished after {} pulls: {} values, stop reason {:?}",
            report.pulls,
            report.values_emitted,
            report.stop_reason
        );

        Ok(report)
    }
}
