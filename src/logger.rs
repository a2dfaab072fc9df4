use log::LevelFilter;

use crate::cli::Args;

/// Initialize the logger; the debug flag forces debug level so per-sample
/// progress lines show up regardless of the configured level.
pub fn init_logger(args: &Args) {
    let level = if args.debug {
        LevelFilter::Debug
    } else {
        args.debug_level.clone().into()
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}
