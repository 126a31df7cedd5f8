use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Installs the global tracing subscriber, writing to stderr.
///
/// Honors `RUST_LOG` and always enables this crate at `info`. Returns
/// `true` only on the call that performed the installation.
pub fn init_tracing() -> bool {
    let mut installed = false;
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let mut filter = EnvFilter::from_default_env();
        if let Ok(directive) = "expense_tracker=info".parse() {
            filter = filter.add_directive(directive);
        }

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
        installed = true;
    });
    installed
}
