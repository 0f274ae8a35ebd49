use log::LevelFilter;

/// Initialize logging for the CLI.
///
/// `verbose` selects debug output; `RUST_LOG`, when set, overrides it.
pub fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_target(false);

    // Let RUST_LOG override our defaults if explicitly set
    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    builder.init();
    log::debug!("Logger initialized at {level:?} level");
}
