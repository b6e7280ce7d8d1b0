//! General conversion functions and utilities.

/// Install `nih_log` as the global logger. Log output goes to STDERR unless the `NIH_LOG`
/// environment variable points somewhere else. Does nothing if a logger was already installed.
pub fn setup_logger(max_level: log::LevelFilter) {
    // This fails if another logger has already been set up, which is fine
    let _ = nih_log::LoggerBuilder::new(max_level).build_global();
}

/// Map a `-v` count to a log level, starting at warnings. The level never exceeds what was
/// compiled in, release builds stop at `Info`.
pub fn verbosity_to_level(verbosity: u8) -> log::LevelFilter {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    level.min(log::STATIC_MAX_LEVEL)
}
