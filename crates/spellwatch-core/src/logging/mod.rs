use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Crate targets that share the workspace log level.
const TARGETS: [&str; 3] = ["spellwatch", "spellwatch_core", "spellwatch_ui"];

fn level_filter(level: &str) -> EnvFilter {
    TARGETS.iter().fold(EnvFilter::from_default_env(), |filter, target| {
        filter.add_directive(
            format!("{}={}", target, level)
                .parse()
                .expect("Invalid log directive"),
        )
    })
}

/// Initialize logging with optional quiet mode.
///
/// When `quiet` is true, only error-level events are emitted.
/// When `quiet` is false, info-level and above events are emitted.
pub fn init_logging(quiet: bool) {
    let level = if quiet { "error" } else { "info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(level_filter(level))
        .init();
}

/// Initialize logging into a file instead of stderr.
///
/// The terminal dashboard owns the screen, so its events go to
/// `~/.spellwatch/ui.log` (or wherever the caller points). Falls back to
/// quiet stderr logging when the file cannot be opened.
pub fn init_file_logging(path: &Path) {
    if let Some(parent) = path.parent()
        && let Err(e) = std::fs::create_dir_all(parent)
    {
        eprintln!("Warning: could not create log directory {}: {}", parent.display(), e);
    }

    let file = match OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Warning: could not open log file {}: {}", path.display(), e);
            init_logging(true);
            return;
        }
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(Mutex::new(file))
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(level_filter("info"))
        .init();
}
