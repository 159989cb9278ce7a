// ── Play field ────────────────────────────────────────────────────────────────

pub const SCREEN_WIDTH: f32 = 1200.0;
pub const SCREEN_HEIGHT: f32 = 600.0;
pub const SCREEN_CENTER_X: f32 = 600.0;
pub const SCREEN_CENTER_Y: f32 = 300.0;

// ── Ship ──────────────────────────────────────────────────────────────────────

pub const SHIP_SIZE: f32 = 100.0;
/// Offset of the hitbox corner from the ship centre (`SHIP_SIZE // 5.5`).
pub const SHIP_HITBOX_OFFSET: f32 = 18.0;
/// Side of the square hitbox (`SHIP_SIZE // 3`).
pub const SHIP_HITBOX_SIZE: f32 = 33.0;
pub const ACCELERATION: f32 = 0.3;
pub const FRICTION: f32 = 0.98;

// ── Enemies ───────────────────────────────────────────────────────────────────

pub const ENEMY_SIZE: f32 = 70.0;
pub const NUM_ENEMY_TYPES: usize = 4;
pub const MAX_ROWS: u32 = 4;
pub const MAX_PER_ROW: u32 = 10;
/// Vertical distance between formation rows: `600 / 10 + 70 / 5`.
pub const ROWS_PROPORTION: f32 = 74.0;
/// Each live enemy fires with probability 1 / ENEMY_FIRE_ODDS per tick.
pub const ENEMY_FIRE_ODDS: u32 = 200;

/// Where the lone enemy of a fresh session sits.
pub const FIRST_ENEMY_X: f32 = SCREEN_CENTER_X - ENEMY_SIZE / 2.0;
pub const FIRST_ENEMY_Y: f32 = 50.0;

// ── Bullets ───────────────────────────────────────────────────────────────────

pub const BULLET_SPEED: f32 = 20.0;
pub const BULLET_WIDTH: f32 = 10.0;
pub const BULLET_HEIGHT: f32 = 15.0;

// ── Pacing & HUD ──────────────────────────────────────────────────────────────

pub const TARGET_FPS: u32 = 60;

pub const SCORE_POS: (f32, f32) = (10.0, 10.0);
pub const LEVEL_POS: (f32, f32) = (SCREEN_WIDTH - 105.0, 10.0);
pub const BANNER_POS: (f32, f32) = (SCREEN_CENTER_X - 50.0, SCREEN_CENTER_Y - 50.0);
pub const RESTART_HINT_POS: (f32, f32) = (SCREEN_CENTER_X - 85.0, SCREEN_CENTER_Y);
