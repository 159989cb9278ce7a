/// Game state machine.
///
/// Every public function takes an immutable reference to the current
/// `GameState` (and, where needed, the tick's `Controls` and an RNG handle)
/// and returns a brand-new `GameState`.  Side effects are limited to the
/// injected RNG and logging.

use std::collections::BTreeSet;

use rand::Rng;

use crate::collision::{enemy_hit, ship_hit, Hazard};
use crate::constants::{FIRST_ENEMY_X, FIRST_ENEMY_Y};
use crate::entities::{
    Bullet, Enemy, EnemyKind, EntityId, GameState, IdGen, Phase, Ship, Tint,
};
use crate::input::Controls;
use crate::movement::{advance_bullet, integrate_ship, move_enemy, off_screen};
use crate::spawner::{maybe_fire, spawn_wave};

// ── Constructors ─────────────────────────────────────────────────────────────

/// A fresh entity set: a ship at its spawn point and one white enemy
/// hovering at the top centre.
fn populate(ids: &mut IdGen) -> (Ship, Vec<Enemy>) {
    let first = Enemy {
        id: ids.next_id(),
        x: FIRST_ENEMY_X,
        y: FIRST_ENEMY_Y,
        kind: EnemyKind::from_index(0),
        tint: Tint::White,
    };
    (Ship::new(), vec![first])
}

/// Build the state for a brand-new session at level 1.
pub fn init_state() -> GameState {
    let mut ids = IdGen::new();
    let (ship, enemies) = populate(&mut ids);
    log::info!("new session");
    GameState {
        ship,
        enemies: enemies.into_iter().map(|e| (e.id, e)).collect(),
        bullets: Default::default(),
        score: 0,
        level: 1,
        phase: Phase::Playing,
        running: true,
        ids,
        frame: 0,
    }
}

/// Leave GameOver with a freshly constructed entity set.
///
/// The level restarts at 0 rather than 1: the lone opening enemy is placed
/// by hand, and clearing it bumps the level to 1 for the first real wave.
/// Ids keep counting from where the previous session stopped.
pub fn restart(state: &GameState) -> GameState {
    let mut ids = state.ids.clone();
    let (ship, enemies) = populate(&mut ids);
    log::info!("restart after scoring {} at level {}", state.score, state.level);
    GameState {
        ship,
        enemies: enemies.into_iter().map(|e| (e.id, e)).collect(),
        bullets: Default::default(),
        score: 0,
        level: 0,
        phase: Phase::Playing,
        ids,
        ..state.clone()
    }
}

// ── Input-driven transitions (pure) ──────────────────────────────────────────

/// Fire one player bullet from the ship's centre.
pub fn player_shoot(state: &GameState) -> GameState {
    let mut next = state.clone();
    let bullet = next.ship.attack(next.ids.next_id());
    log::debug!("player fired {}", bullet);
    next.add_bullet(bullet);
    next
}

/// Generate the next wave, but only once the formation is wiped out.
pub fn spawn_check(state: &GameState, rng: &mut impl Rng) -> GameState {
    if !state.enemies.is_empty() {
        return state.clone();
    }
    let mut next = state.clone();
    next.level += 1;
    for enemy in spawn_wave(next.level, &mut next.ids, rng) {
        next.add_enemy(enemy);
    }
    next
}

// ── Combat ───────────────────────────────────────────────────────────────────

/// What a combat pass decided, applied only after both sweeps finish.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Casualties {
    pub ship_died: bool,
    pub enemies: BTreeSet<EntityId>,
    pub bullets: BTreeSet<EntityId>,
    pub kills: u32,
}

/// Enemy sweep: move, ram check, maybe fire.  New enemy bullets join the
/// bullet set so they move in this same tick.
fn enemy_pass(state: &mut GameState, rng: &mut impl Rng, casualties: &mut Casualties) {
    let enemies: Vec<Enemy> = state.enemies.values().map(move_enemy).collect();
    for enemy in enemies {
        if ship_hit(&state.ship, Hazard::Enemy(&enemy)) {
            log::debug!("{} rammed the ship", enemy);
            casualties.ship_died = true;
        }
        if let Some(bullet) = maybe_fire(&enemy, &mut state.ids, rng) {
            state.add_bullet(bullet);
        }
        state.add_enemy(enemy);
    }
}

/// Bullet sweep: advance every bullet, then test it against the ship, the
/// live enemies and the screen bounds.  A player bullet is spent on the
/// first enemy it hits.
fn bullet_pass(state: &mut GameState, casualties: &mut Casualties) {
    let moved: Vec<Bullet> = state.bullets.values().map(advance_bullet).collect();
    for bullet in moved {
        if ship_hit(&state.ship, Hazard::Bullet(&bullet)) {
            log::debug!("{} struck the ship", bullet);
            casualties.ship_died = true;
        }

        let target = state
            .enemies
            .values()
            .filter(|e| !casualties.enemies.contains(&e.id))
            .find(|e| enemy_hit(e, &bullet))
            .map(|e| e.id);
        if let Some(enemy_id) = target {
            log::debug!("{} destroyed enemy #{}", bullet, enemy_id);
            casualties.enemies.insert(enemy_id);
            casualties.bullets.insert(bullet.id);
            casualties.kills += 1;
        }

        if off_screen(&bullet) {
            casualties.bullets.insert(bullet.id);
        }
        state.add_bullet(bullet);
    }
}

/// Run both combat sweeps and apply their results.  Ship death does not
/// short-circuit: kills made in the same tick still score.
pub fn resolve_combat(state: &GameState, rng: &mut impl Rng) -> (GameState, Casualties) {
    let mut next = state.clone();
    let mut casualties = Casualties::default();

    enemy_pass(&mut next, rng, &mut casualties);
    bullet_pass(&mut next, &mut casualties);

    for id in &casualties.enemies {
        next.remove_enemy(*id);
    }
    for id in &casualties.bullets {
        next.remove_bullet(*id);
    }
    next.score += casualties.kills;

    (next, casualties)
}

// ── Per-frame tick (nearly pure; RNG is injected) ────────────────────────────

/// Advance the session by one tick in whichever phase it is in.
pub fn tick(state: &GameState, controls: &Controls, rng: &mut impl Rng) -> GameState {
    let mut next = match state.phase {
        Phase::Playing => tick_playing(state, controls, rng),
        Phase::GameOver => tick_game_over(state, controls),
    };
    if controls.quit {
        log::info!("quit requested");
        next.running = false;
    }
    next.frame = state.frame + 1;
    next
}

fn tick_playing(state: &GameState, controls: &Controls, rng: &mut impl Rng) -> GameState {
    let mut next = GameState {
        ship: integrate_ship(&state.ship, controls),
        ..state.clone()
    };
    if controls.fire {
        next = player_shoot(&next);
    }
    next = spawn_check(&next, rng);

    let (mut next, casualties) = resolve_combat(&next, rng);
    if casualties.ship_died {
        log::info!("game over: score {} at level {}", next.score, next.level);
        next.phase = Phase::GameOver;
    }
    log::trace!(
        "frame {}: {} enemies, {} bullets, {}",
        next.frame,
        next.enemies.len(),
        next.bullets.len(),
        next.ship
    );
    next
}

fn tick_game_over(state: &GameState, controls: &Controls) -> GameState {
    if controls.restart && !controls.quit {
        restart(state)
    } else {
        state.clone()
    }
}
