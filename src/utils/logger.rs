use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logging options resolved from the command line and config file.
#[derive(Debug, Clone, Default)]
pub struct LogSettings {
    pub verbose: bool,
    pub json: bool,
    pub level: Option<String>,
}

impl LogSettings {
    /// Filter directive used when `RUST_LOG` is not set.
    pub fn default_directive(&self) -> String {
        if self.verbose {
            return "bounded_count=debug,info".to_string();
        }
        match &self.level {
            Some(level) => format!("bounded_count={}", level),
            None => "bounded_count=info".to_string(),
        }
    }
}

// Logs go to stderr; stdout carries only the sequence output.
pub fn init_logger(settings: &LogSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.default_directive()));

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    if settings.json {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer.json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer.compact())
            .init();
    }
}
