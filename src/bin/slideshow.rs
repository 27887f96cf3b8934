//! Slideshow binary.
//!
//! Reads an item listing, plans a slide order and writes the output listing.
//! See [`slideshow_kernel::RunConfig`] for configuration.
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=slideshow_kernel=debug cargo run --bin slideshow -- photos.txt slides.txt
//! ```

use std::process::ExitCode;
use std::time::Instant;

use tracing::{error, info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use slideshow_kernel::config::LogFormat;
use slideshow_kernel::listing::{read_catalog, write_sequence_file};
use slideshow_kernel::{AssemblyStatus, RunConfig, SlideshowPlanner};

/// Initialize the tracing subscriber with JSON or pretty format
fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "slideshow=info,slideshow_kernel=info".into());

    match format {
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
                .init();
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_current_span(true)
                        .flatten_event(true)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    }
}

fn run(config: RunConfig) -> Result<(), Box<dyn std::error::Error>> {
    let start = Instant::now();

    let catalog = read_catalog(&config.input)?;
    info!(path = %config.input.display(), items = catalog.len(), "loaded catalog");

    let plan = SlideshowPlanner::new(config.policy).plan(&catalog);
    if let AssemblyStatus::Exhausted { placed, total } = plan.sequence.status {
        warn!(placed, total, "writing partial sequence");
    }

    write_sequence_file(&plan.sequence, &config.output)?;

    info!(
        path = %config.output.display(),
        slides = plan.sequence.len(),
        interest = plan.total_interest(),
        fingerprint = %plan.fingerprint,
        policy_id = %plan.policy_id,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "wrote sequence"
    );
    Ok(())
}

fn main() -> ExitCode {
    let config = match RunConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("slideshow: {e}");
            return ExitCode::from(2);
        }
    };

    init_tracing(config.log_format);

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "slideshow failed");
            ExitCode::FAILURE
        }
    }
}
