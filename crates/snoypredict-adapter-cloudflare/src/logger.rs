use log::{LevelFilter, Log, Metadata, Record};
use snoypredict_core::manifest::ManifestLoader;
use worker::console_log;

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Writes log records to the Workers console.
pub struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            console_log!("[{}] {}: {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Install the console logger at the `[logging.cloudflare]` level of the embedded manifest.
///
/// Safe to call on every request; only the first call in an isolate installs anything.
pub fn init_logger() {
    if log::set_logger(&LOGGER).is_err() {
        return;
    }
    let level = ManifestLoader::load_from_str(crate::MANIFEST)
        .map(|loader| loader.manifest().logging_or_default("cloudflare").level_filter())
        .unwrap_or(LevelFilter::Info);
    log::set_max_level(level);
}
