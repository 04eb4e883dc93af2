use bounded_count::utils::{logger, validation::Validate};
use bounded_count::{CliConfig, CountEngine, CountError, RunSettings, WriterSink};
use clap::Parser;

fn exit_with(e: CountError) -> ! {
    tracing::error!("❌ {}", e);
    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(1);
}

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    if let Err(e) = config.validate() {
        exit_with(e);
    }

    let file = config.load_file().unwrap_or_else(|e| exit_with(e));

    logger::init_logger(&config.log_settings(file.as_ref()));

    tracing::info!("Starting bounded-count");
    tracing::debug!("CLI config: {:?}", config);

    let mut settings = RunSettings::default();
    if let Some(file) = &file {
        settings = settings.overlay(file);
    }
    let settings = settings.overlay(&config);

    let engine = CountEngine::new(settings);
    let mut stdout = WriterSink::stdout();
    match engine.run(&mut stdout).await {
        Ok(report) => tracing::debug!("Emitted {} lines", report.lines_emitted()),
        Err(e) => exit_with(e),
    }
}
