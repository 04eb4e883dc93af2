// Adapters layer: concrete line sinks for the consumer.

pub mod output;
