use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Football highlights feed generator
///
/// Looks up football matches that finished yesterday or today, finds a video
/// highlight for each one, ranks featured teams first and writes the result
/// as a JSON feed.
///
/// Without flags the job runs once with the configured defaults and exits.
#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Write the feed to this path instead of the configured one.
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<String>,

    /// Treat this YYYY-MM-DD date as "today". The day before is queried as well.
    #[arg(short = 'd', long = "date")]
    pub date: Option<String>,

    /// List current configuration settings and exit
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Log at debug level, including response previews.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Log to the log file only, not to the terminal.
    #[arg(short = 'q', long = "quiet", help_heading = "Debug")]
    pub quiet: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
