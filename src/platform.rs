//! Desktop platform glue: frame pacing and console logging.

use std::time::Duration;

use tracing_subscriber::EnvFilter;

/// Sleeps out the remainder of a frame. A focused window gets the precise
/// spin sleep; an unfocused one can tolerate OS timer slack.
pub fn sleep(duration: Duration, focused: bool) {
    if focused {
        spin_sleep::sleep(duration);
    } else {
        std::thread::sleep(duration);
    }
}

/// Installs the tracing subscriber. `RUST_LOG` overrides the default level.
pub fn init_console() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
