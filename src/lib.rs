pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::output::{MemorySink, WriterSink};
pub use config::{toml_config::TomlConfig, RunSettings};
pub use crate::core::{
    consumer::{BoundedConsumer, COMPLETION_MARKER},
    counter::CountingSequence,
    engine::CountEngine,
};
pub use domain::model::{Pull, RunReport, StopReason};
pub use domain::ports::{LineSink, SequenceProducer};
pub use utils::error::{CountError, Result};
