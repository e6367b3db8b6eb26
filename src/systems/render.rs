use bevy_ecs::event::EventWriter;
use bevy_ecs::system::{NonSendMut, Query, Res};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture};
use sdl2::video::Window;

use crate::constants::{skater, tricks, CANVAS_SIZE, GROUND_Y};
use crate::error::GameError;
use crate::sprites::{self, BitSprite};
use crate::systems::audio::AudioState;
use crate::systems::components::{Locomotion, Obstacle, ObstacleKind, Particle, Skater, Trick};
use crate::systems::hud::Banner;
use crate::systems::state::{GameStage, HighScore, RunState};

/// A non-send resource for the backbuffer texture. The scene is drawn here
/// at logical resolution and scaled to the window on present.
pub struct BackbufferResource(pub Texture);

mod palette {
    use sdl2::pixels::Color;

    pub const SKY: Color = Color::RGB(24, 20, 37);
    pub const GROUND: Color = Color::RGB(52, 46, 66);
    pub const GROUND_LINE: Color = Color::RGB(139, 155, 180);
    pub const SKATER: Color = Color::RGB(238, 238, 238);
    pub const SHADOW: Color = Color::RGB(14, 12, 24);
    pub const HYDRANT: Color = Color::RGB(208, 70, 72);
    pub const RAIL: Color = Color::RGB(139, 155, 180);
    pub const BOX: Color = Color::RGB(180, 130, 70);
    pub const DRONE: Color = Color::RGB(90, 200, 220);
    pub const GUARD: Color = Color::RGB(88, 110, 200);
    pub const STAIRS: Color = Color::RGB(120, 110, 130);
    pub const TEXT: Color = Color::RGB(238, 238, 238);
    pub const BANNER: Color = Color::RGB(255, 210, 80);
}

#[allow(clippy::too_many_arguments)]
pub fn render_system(
    mut canvas: NonSendMut<Canvas<Window>>,
    mut backbuffer: NonSendMut<BackbufferResource>,
    stage: Res<GameStage>,
    run_state: Res<RunState>,
    high_score: Res<HighScore>,
    banner: Res<Banner>,
    audio_state: Res<AudioState>,
    skaters: Query<&Skater>,
    obstacles: Query<&Obstacle>,
    particles: Query<&Particle>,
    mut errors: EventWriter<GameError>,
) {
    let Ok(skater) = skaters.single() else {
        return;
    };

    let mut draw_result = Ok(());
    let result = canvas.with_texture_canvas(&mut backbuffer.0, |tc| {
        draw_result = draw_scene(
            tc,
            &stage,
            &run_state,
            &high_score,
            &banner,
            &audio_state,
            skater,
            &obstacles,
            &particles,
        );
    });

    if let Err(e) = result {
        errors.write(GameError::Sdl(e.to_string()));
    }
    if let Err(e) = draw_result {
        errors.write(GameError::Sdl(e));
    }
}

#[allow(clippy::too_many_arguments)]
fn draw_scene(
    tc: &mut Canvas<Window>,
    stage: &GameStage,
    run_state: &RunState,
    high_score: &HighScore,
    banner: &Banner,
    audio_state: &AudioState,
    skater: &Skater,
    obstacles: &Query<&Obstacle>,
    particles: &Query<&Particle>,
) -> Result<(), String> {
    tc.set_draw_color(palette::SKY);
    tc.clear();

    draw_ground(tc, run_state, obstacles)?;

    let anim = (run_state.distance / 4 % 2) as usize;
    for obstacle in obstacles.iter() {
        let (sprite, color): (&BitSprite, Color) = match obstacle.kind {
            ObstacleKind::Hydrant => (&sprites::HYDRANT, palette::HYDRANT),
            ObstacleKind::Rail => (&sprites::RAIL, palette::RAIL),
            ObstacleKind::Box => (&sprites::CRATE_BOX, palette::BOX),
            ObstacleKind::Drone => (&sprites::DRONE[anim], palette::DRONE),
            ObstacleKind::Guard => (&sprites::GUARD, palette::GUARD),
            ObstacleKind::Stairs => (&sprites::STAIRS, palette::STAIRS),
            // Drawn as a notch by the ground pass.
            ObstacleKind::Gap => continue,
        };
        sprite.blit(tc, obstacle.x as i32, obstacle.top() as i32, color)?;
    }

    draw_skater(tc, skater, obstacles)?;

    for particle in particles.iter() {
        let (r, g, b) = particle.color;
        tc.set_draw_color(Color::RGB(r, g, b));
        tc.fill_rect(Rect::new(particle.pos.x as i32, particle.pos.y as i32, 2, 2))?;
    }

    draw_hud(tc, stage, run_state, high_score, banner, audio_state)
}

fn draw_ground(tc: &mut Canvas<Window>, run_state: &RunState, obstacles: &Query<&Obstacle>) -> Result<(), String> {
    tc.set_draw_color(palette::GROUND);
    tc.fill_rect(Rect::new(
        0,
        GROUND_Y as i32,
        CANVAS_SIZE.x,
        CANVAS_SIZE.y - GROUND_Y as u32,
    ))?;

    tc.set_draw_color(palette::GROUND_LINE);
    tc.fill_rect(Rect::new(0, GROUND_Y as i32, CANVAS_SIZE.x, 1))?;

    // Pavement seams scrolling with the run.
    let offset = (run_state.distance * 3 % 24) as i32;
    let mut x = -offset;
    while x < CANVAS_SIZE.x as i32 {
        tc.fill_rect(Rect::new(x, GROUND_Y as i32 + 8, 6, 1))?;
        x += 24;
    }

    // Gaps cut through the ground down to the bottom of the screen.
    tc.set_draw_color(palette::SKY);
    for obstacle in obstacles.iter() {
        if obstacle.kind == ObstacleKind::Gap {
            tc.fill_rect(Rect::new(
                obstacle.x as i32,
                GROUND_Y as i32,
                obstacle.width() as u32,
                CANVAS_SIZE.y - GROUND_Y as u32,
            ))?;
        }
    }
    Ok(())
}

fn draw_skater(tc: &mut Canvas<Window>, skater: &Skater, obstacles: &Query<&Obstacle>) -> Result<(), String> {
    let x = skater::X as i32;
    let y = skater.y as i32;
    let (left, right) = skater.x_extent();
    let over_gap = obstacles
        .iter()
        .any(|o| o.kind == ObstacleKind::Gap && o.covers_x(left, right));

    if !over_gap {
        // Shadow narrows with altitude.
        let altitude = (GROUND_Y - skater.bottom()).max(0.0);
        let shrink = (altitude / 8.0) as u32;
        let width = (skater::WIDTH as u32).saturating_sub(shrink);
        if width > 2 {
            tc.set_draw_color(palette::SHADOW);
            tc.fill_rect(Rect::new(x + (skater::WIDTH as u32 - width) as i32 / 2, GROUND_Y as i32 + 1, width, 2))?;
        }
    }

    match skater.locomotion {
        Locomotion::Grounded => {
            if skater.ducking {
                sprites::SKATER_DUCK.blit(tc, x, y, palette::SKATER)?;
            } else {
                let frame = (skater.idle_frame / 8 % 2) as usize;
                sprites::SKATER_ROLL[frame].blit(tc, x, y, palette::SKATER)?;
            }
        }
        Locomotion::Grinding { .. } => {
            sprites::SKATER_GRIND.blit(tc, x, y, palette::SKATER)?;
        }
        Locomotion::Airborne { trick, .. } => {
            sprites::SKATER_AIR.blit(tc, x, y, palette::SKATER)?;

            let frame = (skater.trick_frame / (tricks::TRICK_CYCLE / 2) % 2) as usize;
            let board = match trick {
                Trick::Ollie => &sprites::BOARD_FLAT,
                Trick::PopShuvit => &sprites::BOARD_SHUVIT[frame],
                Trick::Kickflip => &sprites::BOARD_KICKFLIP[frame],
            };
            let board_y = y + skater::HEIGHT as i32 - (board.height() * sprites::PIXEL) as i32;
            board.blit(tc, x, board_y, palette::SKATER)?;
        }
    }
    Ok(())
}

fn draw_hud(
    tc: &mut Canvas<Window>,
    stage: &GameStage,
    run_state: &RunState,
    high_score: &HighScore,
    banner: &Banner,
    audio_state: &AudioState,
) -> Result<(), String> {
    let line = format!("SCORE {:04}  HI {:04}", run_state.score, high_score.0);
    sprites::draw_text(tc, &line, 4, 4, palette::TEXT)?;

    if audio_state.muted {
        sprites::draw_text(tc, "M", CANVAS_SIZE.x as i32 - 8, 4, palette::TEXT)?;
    }

    if banner.visible() {
        let x = (CANVAS_SIZE.x - sprites::text_width(&banner.line)) as i32 / 2;
        sprites::draw_text(tc, &banner.line, x, 44, palette::BANNER)?;
    }

    match stage {
        GameStage::Idle => draw_centered(tc, "TAP TO SKATE", 72, palette::TEXT)?,
        GameStage::GameOver => {
            draw_centered(tc, "GAME OVER", 64, palette::BANNER)?;
            draw_centered(tc, "TAP TO RETRY", 76, palette::TEXT)?;
        }
        GameStage::Playing => {}
    }
    Ok(())
}

fn draw_centered(tc: &mut Canvas<Window>, text: &str, y: i32, color: Color) -> Result<(), String> {
    let x = (CANVAS_SIZE.x - sprites::text_width(text)) as i32 / 2;
    sprites::draw_text(tc, text, x, y, color)
}

pub fn present_system(
    mut canvas: NonSendMut<Canvas<Window>>,
    backbuffer: NonSendMut<BackbufferResource>,
    mut errors: EventWriter<GameError>,
) {
    if let Err(e) = canvas.copy(&backbuffer.0, None, None) {
        errors.write(GameError::Sdl(e));
        return;
    }
    canvas.present();
}
