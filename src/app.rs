use std::time::{Duration, Instant};

use sdl2::{AudioSubsystem, Sdl};
use tracing::{debug, info};

use crate::constants::{CANVAS_SIZE, LOOP_TIME, SCALE};
use crate::error::{GameError, GameResult};
use crate::game::Game;
use crate::platform;

/// Main application wrapper that manages SDL initialization, window
/// lifecycle, and the game loop.
pub struct App {
    pub game: Game,
    focused: bool,
    // Keep SDL alive for the app lifetime so subsystems (audio) are not
    // shut down.
    _sdl_context: Sdl,
    _audio_subsystem: AudioSubsystem,
}

impl App {
    /// Initializes SDL subsystems, creates the game window, and sets up the
    /// game state.
    pub fn new() -> GameResult<Self> {
        info!("Initializing SDL2 application");
        let sdl_context = sdl2::init().map_err(GameError::Sdl)?;
        let video_subsystem = sdl_context.video().map_err(GameError::Sdl)?;
        let audio_subsystem = sdl_context.audio().map_err(GameError::Sdl)?;
        let event_pump = sdl_context.event_pump().map_err(GameError::Sdl)?;

        debug!(
            width = CANVAS_SIZE.x as f32 * SCALE,
            height = CANVAS_SIZE.y as f32 * SCALE,
            "Creating game window"
        );
        let window = video_subsystem
            .window(
                "Kickflip",
                (CANVAS_SIZE.x as f32 * SCALE).round() as u32,
                (CANVAS_SIZE.y as f32 * SCALE).round() as u32,
            )
            .resizable()
            .position_centered()
            .build()
            .map_err(|e| GameError::Sdl(e.to_string()))?;

        let mut canvas = window
            .into_canvas()
            .accelerated()
            .build()
            .map_err(|e| GameError::Sdl(e.to_string()))?;
        canvas
            .set_logical_size(CANVAS_SIZE.x, CANVAS_SIZE.y)
            .map_err(|e| GameError::Sdl(e.to_string()))?;
        debug!(renderer_info = ?canvas.info(), "Canvas renderer initialized");

        let texture_creator = canvas.texture_creator();
        let game = Game::new(canvas, &texture_creator, event_pump)?;

        info!("Application initialization completed");
        Ok(App {
            game,
            focused: true,
            _sdl_context: sdl_context,
            _audio_subsystem: audio_subsystem,
        })
    }

    /// Executes a single frame of the game loop with fixed-rate pacing.
    ///
    /// Returns `true` if the game should continue running, `false` if the
    /// game requested exit.
    pub fn run(&mut self) -> bool {
        let start = Instant::now();

        if self.game.tick() {
            return false;
        }

        // Sleep out whatever remains of the frame budget.
        let elapsed = start.elapsed();
        if elapsed < LOOP_TIME {
            let remaining = LOOP_TIME.saturating_sub(elapsed);
            if remaining != Duration::ZERO {
                platform::sleep(remaining, self.focused);
            }
        }

        true
    }
}
