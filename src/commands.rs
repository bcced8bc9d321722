use crate::cli::Args;
use crate::config::Config;
use crate::data_fetcher::api::parse_date_arg;
use crate::data_fetcher::{RunSummary, run_highlights_job};
use crate::error::AppError;
use chrono::NaiveDate;

/// Validates command line arguments and returns the parsed `--date`, if any.
pub fn validate_args(args: &Args) -> Result<Option<NaiveDate>, AppError> {
    if let Some(output) = &args.output
        && output.trim().is_empty()
    {
        return Err(AppError::config_error("Output path cannot be empty"));
    }
    args.date.as_deref().map(parse_date_arg).transpose()
}

/// Applies command line overrides on top of the loaded configuration.
pub fn apply_args(mut config: Config, args: &Args) -> Config {
    if let Some(output) = &args.output {
        config.output_path = output.clone();
    }
    if let Some(log_file) = &args.log_file {
        config.log_file_path = Some(log_file.clone());
    }
    config
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles the default command: one highlights run, then the operator report.
pub async fn handle_run_command(args: &Args, config: &Config) -> Result<RunSummary, AppError> {
    let today = validate_args(args)?;
    let summary = run_highlights_job(config, today).await?;
    println!("{}", format_summary(&summary, &config.output_path));
    Ok(summary)
}

/// One-line operator report
pub fn format_summary(summary: &RunSummary, output_path: &str) -> String {
    let mut line = format!(
        "Done: {} highlights ({} priority) written to {output_path}",
        summary.total, summary.priority
    );
    if summary.highlight_failures > 0 {
        line.push_str(&format!(
            ", {} highlight lookups failed",
            summary.highlight_failures
        ));
    }
    line
}
