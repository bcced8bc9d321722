// src/main.rs
use clap::Parser;
use highlights_feed::cli::Args;
use highlights_feed::{AppError, Config, commands, logging};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    if args.list_config {
        return match commands::handle_list_config_command().await {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            }
        };
    }

    // Load config before logging so a configured log path is honoured
    let config = Config::load()
        .await
        .map(|config| commands::apply_args(config, &args));

    let _guard = match logging::setup_logging(&args, config.as_ref().ok()).await {
        Ok((log_file_path, guard)) => {
            tracing::info!("Logs are being written to: {log_file_path}");
            Some(guard)
        }
        Err(e) => {
            eprintln!("{e}");
            None
        }
    };

    match run(&args, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Highlights run failed: {e}");
            eprintln!("Highlights run failed: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &Args, config: Result<Config, AppError>) -> Result<(), AppError> {
    let config = config?;
    commands::handle_run_command(args, &config).await?;
    Ok(())
}
