//! Logging setup for the forgebaker binary.

use log::LevelFilter;

/// Environment variable that overrides the level filter, e.g. `FORGEBAKER_LOG=trace`.
pub const LOG_ENV: &str = "FORGEBAKER_LOG";

/// Sets up env_logger; `verbose` lowers the filter from `Info` to `Debug`.
pub fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(level)
        .format_target(false)
        .format_timestamp(None)
        .parse_env(LOG_ENV)
        .init();
}
