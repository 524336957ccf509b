//! Logging setup for the classprefix binary.
//!
//! Log output is diagnostic only. User-facing messages (warnings about patterns,
//! "no changes") go through `ui::output_format` instead, so the default filter is
//! kept at `error` unless `RUST_LOG` or an explicit level says otherwise.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initializes `env_logger`. An explicit `level` overrides `RUST_LOG`.
/// Calling this more than once is harmless.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("error"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.format_timestamp(None).format_target(true);
    let _ = builder.try_init();
}
