use std::io::Read;
use std::process::ExitCode;

use pokerhands::config::{OutputFormat, RunConfig};
use pokerhands::{tally, AppError};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokerhands=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = RunConfig::new();

    match run(&config) {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Batch failed");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &RunConfig) -> Result<String, AppError> {
    let input = match &config.input {
        Some(path) => {
            info!(path = %path.display(), "Reading deals from file");
            std::fs::read_to_string(path)?
        }
        None => {
            info!("Reading deals from stdin");
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let result = tally(input.lines())?;

    Ok(match config.output {
        OutputFormat::Count => result.player_one_wins.to_string(),
        OutputFormat::Json => serde_json::to_string(&result)?,
    })
}
