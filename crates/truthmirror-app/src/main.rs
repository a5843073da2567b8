use std::process::ExitCode;

use clap::Parser;
use truthmirror_infrastructure::config::AppConfig;
use truthmirror_infrastructure::logging;
use truthmirror_lib::presentation::bootstrap::build_app_state;
use truthmirror_lib::presentation::cli::Cli;
use truthmirror_lib::presentation::commands::dispatch;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Usage errors exit with status 2; --help and --version exit with 0
    let cli = Cli::parse();

    let config = AppConfig::from_env()?;

    match logging::init_logger(&config.log_dir) {
        Ok(_) => {
            tracing::info!("🚀 TruthMirror starting...");
            tracing::info!("📝 File logging initialized at: {}", config.log_dir.display());
        }
        Err(e) => {
            eprintln!("⚠️  Failed to initialize file logging: {}", e);
            eprintln!("   Falling back to console logging only");

            let _ = tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
                )
                .with_target(true)
                .with_writer(std::io::stderr)
                .try_init();
        }
    }

    let state = build_app_state(&config)?;

    match dispatch(&state, cli.command).await {
        Ok(output) => {
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            tracing::error!(code = e.code, recoverable = e.recoverable, "❌ {}", e.message);
            eprintln!("{}", serde_json::to_string_pretty(&e)?);
            Ok(ExitCode::FAILURE)
        }
    }
}
