/// The render collaborator seam.
///
/// The core decides *what* is on screen each tick and asks a `Canvas` to
/// draw it; the canvas decides how.  The terminal front end implements it
/// with crossterm, tests implement it with a recorder.

use std::io;

use crate::constants::{BANNER_POS, LEVEL_POS, RESTART_HINT_POS, SCORE_POS};
use crate::entities::{Bullet, Enemy, GameState, Phase, Ship, Tint};

pub trait Canvas {
    fn clear(&mut self) -> io::Result<()>;
    fn draw_ship(&mut self, ship: &Ship) -> io::Result<()>;
    fn draw_enemy(&mut self, enemy: &Enemy) -> io::Result<()>;
    fn draw_bullet(&mut self, bullet: &Bullet) -> io::Result<()>;
    /// `(x, y)` is in play-field coordinates.
    fn draw_text(&mut self, x: f32, y: f32, text: &str, tint: Tint) -> io::Result<()>;
    /// Flip the finished frame onto the screen.
    fn present(&mut self) -> io::Result<()>;
}

pub const GAME_OVER_BANNER: &str = "Game over!";
pub const RESTART_HINT: &str = "Press R to restart!";

/// Render one complete frame for the current phase.
pub fn draw_frame<C: Canvas>(canvas: &mut C, state: &GameState) -> io::Result<()> {
    canvas.clear()?;
    match state.phase {
        Phase::Playing => {
            for enemy in state.enemies.values() {
                canvas.draw_enemy(enemy)?;
            }
            for bullet in state.bullets.values() {
                canvas.draw_bullet(bullet)?;
            }
            canvas.draw_ship(&state.ship)?;
            draw_hud(canvas, state, Tint::White)?;
        }
        Phase::GameOver => {
            draw_hud(canvas, state, Tint::Green)?;
            canvas.draw_text(BANNER_POS.0, BANNER_POS.1, GAME_OVER_BANNER, Tint::White)?;
            canvas.draw_text(RESTART_HINT_POS.0, RESTART_HINT_POS.1, RESTART_HINT, Tint::Gray)?;
        }
    }
    canvas.present()
}

fn draw_hud<C: Canvas>(canvas: &mut C, state: &GameState, tint: Tint) -> io::Result<()> {
    canvas.draw_text(SCORE_POS.0, SCORE_POS.1, &format!("Score: {}", state.score), tint)?;
    canvas.draw_text(LEVEL_POS.0, LEVEL_POS.1, &format!("Level: {}", state.level), tint)
}
