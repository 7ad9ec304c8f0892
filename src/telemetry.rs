//! Optional tracing output (cargo feature `tracing`).
//!
//! Resolver and tmux spans are always emitted when the feature is compiled in;
//! they are only printed when MUXCODER_TRACING_FMT=1, filtered by RUST_LOG
//! (default "warn"). Output goes to stderr so captured stdout stays clean.

use std::env;

use once_cell::sync::OnceCell;

pub const ENV_TRACING_FMT: &str = "MUXCODER_TRACING_FMT";

static INIT: OnceCell<bool> = OnceCell::new();

fn fmt_enabled_env() -> bool {
    env::var(ENV_TRACING_FMT).ok().as_deref() == Some("1")
}

/// Install the stderr fmt subscriber once. Returns true when a subscriber from
/// this crate is active.
pub fn telemetry_init() -> bool {
    *INIT.get_or_init(|| {
        if !fmt_enabled_env() {
            return false;
        }
        install()
    })
}

#[cfg(feature = "tracing")]
fn install() -> bool {
    use tracing_subscriber::prelude::*;

    let filter = env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());
    let env_filter = tracing_subscriber::EnvFilter::new(filter);
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    if tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        eprintln!("muxcoder-bus: tracing init skipped (global subscriber already set)");
        return false;
    }
    true
}

#[cfg(not(feature = "tracing"))]
fn install() -> bool {
    false
}
