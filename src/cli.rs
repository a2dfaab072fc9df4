use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Custom enum for log levels that can be used with clap's ValueEnum
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convert our custom LogLevel enum to log crate's LevelFilter
impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments structure using clap derive macros.
///
/// Every render option can also come from the environment, so
/// `WORKERS=4 MAX_SAMPLES=500 boxtrace` and `boxtrace --workers 4 -s 500`
/// are equivalent.
#[derive(Parser)]
#[command(name = "boxtrace")]
#[command(about = "A Cornell box path tracer in Rust")]
pub struct Args {
    /// Number of parallel worker threads
    #[arg(long, env = "WORKERS", default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub workers: u32,

    /// Image width in pixels
    #[arg(long, env = "IMAGE_WIDTH", default_value_t = 200)]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, env = "IMAGE_HEIGHT", default_value_t = 200)]
    pub height: u32,

    /// Total number of samples per pixel, across all workers
    #[arg(long, short = 's', env = "MAX_SAMPLES", default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..))]
    pub samples: u32,

    /// Maximum number of ray bounces
    #[arg(long, env = "MAX_DEPTH", default_value_t = 5)]
    pub max_depth: u32,

    /// Log per-sample render progress (diagnostic only)
    #[arg(long, env = "DEBUG")]
    pub debug: bool,

    /// Set the logging level (defaults to "info")
    #[arg(long, default_value = "info", help = "Set the logging level")]
    pub debug_level: LogLevel,

    /// Output file path
    #[arg(short, long, default_value = "output.png")]
    pub output: String,
}
