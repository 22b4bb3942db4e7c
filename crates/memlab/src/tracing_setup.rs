//! Diagnostic logging, enabled through `RUST_LOG`.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the stderr subscriber once, only when `RUST_LOG` is set.
///
/// Output goes to stderr as an indented span tree so it never mixes with
/// the session on stdout.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    HierarchicalLayer::new(2)
                        .with_writer(std::io::stderr)
                        .with_targets(true),
                )
                .init();
        }
    });
}
