use tracing::{error, info};

use kickflip::app::App;
use kickflip::constants::LOOP_TIME;
use kickflip::platform;

/// The main entry point of the application.
///
/// Initializes logging and SDL, then drives the fixed-rate game loop until
/// the player exits.
pub fn main() {
    platform::init_console();

    let mut app = match App::new() {
        Ok(app) => app,
        Err(e) => {
            error!(error = %e, "Could not start the game");
            std::process::exit(1);
        }
    };

    info!(loop_time = ?LOOP_TIME, "Starting game loop");

    while app.run() {}

    info!("Exited cleanly");
}
