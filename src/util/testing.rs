//! Helpers for teldir's unit and integration tests
//!
//! Tests log through the `teldir` target at trace level and never see the
//! developer's own `teldir.toml` or `TELDIR_*` variables.

use std::env;
use std::path::PathBuf;
use std::process;
use std::sync::Once;

use tracing::debug;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

static LOGGING: Once = Once::new();
static CONFIG_ENV: Once = Once::new();

/// Route teldir's tracing output to the test harness, once per binary.
///
/// Honours `RUST_LOG`; otherwise everything under `teldir` is shown.
pub fn init_test_setup() {
    LOGGING.call_once(|| {
        let filter = env::var("RUST_LOG")
            .ok()
            .and_then(|directives| EnvFilter::try_new(directives).ok())
            .unwrap_or_else(|| EnvFilter::new("teldir=trace"));

        if tracing::dispatcher::has_been_set() {
            return;
        }
        let installed = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_test_writer()
                    .with_span_events(FmtSpan::CLOSE)
                    .with_filter(filter),
            )
            .try_init();
        if let Err(e) = installed {
            eprintln!("teldir test logging unavailable: {e}");
        }
    });
}

/// Hide the user's settings from `Settings::load`, once per binary.
///
/// Points `XDG_CONFIG_HOME` at an empty per-process directory, so no
/// global `teldir.toml` is found, and drops every `TELDIR_*` variable.
/// Call it before the first settings load; tests that set their own
/// `TELDIR_*` variables do so afterwards.
pub fn isolate_config_env() -> PathBuf {
    let config_home = env::temp_dir().join(format!("teldir-test-config-{}", process::id()));
    CONFIG_ENV.call_once(|| {
        env::set_var("XDG_CONFIG_HOME", &config_home);
        let inherited: Vec<String> = env::vars()
            .map(|(key, _)| key)
            .filter(|key| key.starts_with("TELDIR_"))
            .collect();
        for key in inherited {
            env::remove_var(key);
        }
        debug!("isolated config home: {}", config_home.display());
    });
    config_home
}
