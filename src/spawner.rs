/// Procedural wave generation and enemy fire.
///
/// All randomness comes through the injected `rng`, so a seeded `StdRng`
/// reproduces a wave exactly.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::constants::{
    ENEMY_FIRE_ODDS, ENEMY_SIZE, MAX_PER_ROW, MAX_ROWS, NUM_ENEMY_TYPES, ROWS_PROPORTION,
    SCREEN_WIDTH,
};
use crate::entities::{Bullet, Enemy, EnemyKind, IdGen, Tint, ENEMY_PALETTE};

/// Horizontal placement of one formation row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RowLayout {
    pub count: u32,
    /// Gap before the first and after the last sprite.
    pub margin: f32,
    /// Gap between neighbouring sprites (twice the margin).
    pub spacing: f32,
}

impl RowLayout {
    /// Centre `count` sprites across the screen width.
    pub fn centred(count: u32) -> Self {
        if count == 0 {
            return RowLayout {
                count,
                margin: 0.0,
                spacing: 0.0,
            };
        }
        let free_space = SCREEN_WIDTH - count as f32 * ENEMY_SIZE;
        let margin = free_space / (2.0 * count as f32);
        RowLayout {
            count,
            margin,
            spacing: margin * 2.0,
        }
    }

    pub fn x(&self, column: u32) -> f32 {
        self.margin + column as f32 * (ENEMY_SIZE + self.spacing)
    }
}

/// Vertical position of formation row `row` (rows count from 1).
pub fn row_y(row: u32) -> f32 {
    row as f32 * ROWS_PROPORTION
}

/// `min(rand(1, level), rand(1, cap))`, two independent inclusive draws.
pub fn capped_draw(rng: &mut impl Rng, level: u32, cap: u32) -> u32 {
    let by_level = rng.gen_range(1..=level.max(1));
    let by_cap = rng.gen_range(1..=cap.max(1));
    by_level.min(by_cap)
}

fn pick_kind(rng: &mut impl Rng, level: u32) -> EnemyKind {
    let highest = (level as usize).min(NUM_ENEMY_TYPES - 1);
    EnemyKind::from_index(rng.gen_range(0..=highest))
}

fn pick_tint(rng: &mut impl Rng) -> Tint {
    ENEMY_PALETTE.choose(rng).copied().unwrap_or(Tint::White)
}

/// Build a whole formation for `level`.  The caller is responsible for
/// bumping the level first; this only lays enemies out.
pub fn spawn_wave(level: u32, ids: &mut IdGen, rng: &mut impl Rng) -> Vec<Enemy> {
    let rows = capped_draw(rng, level, MAX_ROWS);
    let mut wave = Vec::new();

    for row in 1..=rows {
        let layout = RowLayout::centred(capped_draw(rng, level, MAX_PER_ROW));
        let y = row_y(row);
        for column in 0..layout.count {
            wave.push(Enemy {
                id: ids.next_id(),
                x: layout.x(column),
                y,
                kind: pick_kind(rng, level),
                tint: pick_tint(rng),
            });
        }
    }

    log::info!(
        "level {}: spawned {} enemies in {} rows",
        level,
        wave.len(),
        rows
    );
    wave
}

/// Each live enemy independently fires with 1-in-`ENEMY_FIRE_ODDS` odds
/// per tick.  There is no cooldown.
pub fn maybe_fire(enemy: &Enemy, ids: &mut IdGen, rng: &mut impl Rng) -> Option<Bullet> {
    if rng.gen_ratio(1, ENEMY_FIRE_ODDS) {
        let bullet = enemy.attack(ids.next_id());
        log::debug!("{} fired {}", enemy, bullet);
        Some(bullet)
    } else {
        None
    }
}
