pub mod consumer;
pub mod counter;
pub mod engine;

pub use crate::domain::model::{Pull, RunReport, StopReason};
pub use crate::domain::ports::{ConfigProvider, LineSink, SequenceProducer};
pub use crate::utils::error::Result;
