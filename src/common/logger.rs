use std::sync::Once;

use env_logger::Builder;
use log::LevelFilter;

static INIT: Once = Once::new();

pub fn initialize_logger() {
    // Use call_once_force to recover if an earlier initialization attempt panicked.
    INIT.call_once_force(|_| {
        let mut builder = Builder::new();

        builder
            .filter_level(LevelFilter::Warn)
            .filter_module("chaintable", LevelFilter::Info)
            .filter_module("chaintable::container", LevelFilter::Info)
            .filter_module("chaintable::cli", LevelFilter::Info)
            .filter_module("rustyline", LevelFilter::Warn)
            .format_timestamp_millis()
            .parse_default_env();

        // Avoid panicking if the logger was already initialized elsewhere.
        let _ = builder.try_init();
    });
}
