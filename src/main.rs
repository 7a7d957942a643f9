use clap::Parser;
use rsvp_pipeline::utils::logger;
use rsvp_pipeline::{CliConfig, ConsolePresenter, LoggingSink, RsvpError, RsvpPipeline};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting rsvp-pipeline CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let snapshot = config.snapshot();
    let presenter = ConsolePresenter;
    let sink = LoggingSink::with_latency(config.submit_latency_ms);
    let pipeline = RsvpPipeline::new(presenter, sink, &config);

    match pipeline.submit(&snapshot).await {
        Ok(view) => {
            tracing::info!("RSVP submission completed: {}", view.headline);
        }
        Err(RsvpError::Validation(errors)) => {
            // The presenter already rendered the batch; just set the exit code.
            tracing::warn!("submission rejected: {} invalid field(s)", errors.len());
            std::process::exit(1);
        }
        Err(e) => {
            tracing::error!("submission failed: {}", e);
            eprintln!("❌ Something went wrong, please try again. / আবার চেষ্টা করুন");
            std::process::exit(2);
        }
    }

    Ok(())
}
