//! Logging setup for the `huangli` binary.

use tracing_subscriber::{EnvFilter, fmt};

/// Install the global subscriber, writing to stderr.
///
/// `RUST_LOG` wins when set; otherwise the level is `warn`, or `debug`
/// for the huangli crates when `verbose` is on.
pub fn init(verbose: bool) {
    let fallback = if verbose {
        "warn,huangli_base=debug,huangli_engine=debug,huangli_cli=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    // A second init (e.g. from tests) is harmless.
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
