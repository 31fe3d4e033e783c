//! Routes library diagnostics to stderr through `env_logger`.

use log::LevelFilter;

/// Picks the default log level from the global CLI flags.
///
/// `RUST_LOG` still takes precedence when set.
pub const fn level_for(verbose: bool, quiet: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Error
    } else if verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    }
}

/// Installs the process-wide logger. Safe to call more than once.
pub fn init(verbose: bool, quiet: bool) {
    let _ = env_logger::Builder::new()
        .filter_level(level_for(verbose, quiet))
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
