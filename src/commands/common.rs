//! Logging setup and output path helpers shared by the commands.

use camino::Utf8PathBuf;
use chrono::NaiveDateTime;
use clap::ValueEnum;
use directories::UserDirs;

/// Directory created below the user's documents folder when no output directory is configured
const OUTPUT_DIR_NAME: &str = "reel_insights";

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    None,

    /// Only error messages
    Error,

    /// Warning and error messages
    Warn,

    /// Info, warning, and error messages
    Info,

    /// Debug, info, warning, and error messages
    Debug,

    /// Trace, debug, info, warning, and error messages
    Trace,
}

pub(super) fn init_logging(log_level: LogLevel) {
    let level = match log_level {
        LogLevel::None => return,
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    };

    let env = env_logger::Env::default().filter_or("RUST_LOG", level);

    // a logger may already be installed when running more than once in-process
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(matches!(log_level, LogLevel::Debug | LogLevel::Trace))
        .try_init();
}

/// Name of an export file, e.g. `insights_2024-05-01-12-30-00.xlsx`.
///
/// Without `include_time` only the date is used, e.g. `follower_cities_2024-05-01.csv`.
#[must_use]
pub fn export_file_name(stem: &str, now: NaiveDateTime, include_time: bool, extension: &str) -> String {
    let stamp = if include_time {
        now.format("%Y-%m-%d-%H-%M-%S")
    } else {
        now.format("%Y-%m-%d")
    };

    format!("{stem}_{stamp}.{extension}")
}

/// Pick the output directory: the CLI value, then the configured one, then
/// `<Documents>/reel_insights`, then `./reel_insights`.
#[must_use]
pub fn resolve_output_dir(cli: Option<&Utf8PathBuf>, configured: Option<&Utf8PathBuf>) -> Utf8PathBuf {
    if let Some(dir) = cli.or(configured) {
        return dir.clone();
    }

    UserDirs::new()
        .and_then(|dirs| dirs.document_dir().map(|dir| dir.join(OUTPUT_DIR_NAME)))
        .and_then(|dir| Utf8PathBuf::from_path_buf(dir).ok())
        .unwrap_or_else(|| Utf8PathBuf::from(OUTPUT_DIR_NAME))
}
