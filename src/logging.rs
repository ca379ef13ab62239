use std::sync::Once;

static INIT: Once = Once::new();

/// Installs the process-wide `tracing` subscriber. Later calls do nothing.
pub fn init() {
    INIT.call_once(|| {
        if let Err(e) = tracing_subscriber::fmt().with_target(false).try_init() {
            eprintln!("logging already configured elsewhere: {e}");
        }
    });
}
