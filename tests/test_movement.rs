use approx::assert_relative_eq;

use space_invaders::constants::*;
use space_invaders::entities::*;
use space_invaders::input::Controls;
use space_invaders::movement::*;

fn ship_at(x: f32, y: f32) -> Ship {
    Ship { x, y, vx: 0.0, vy: 0.0 }
}

// ── Ship ──────────────────────────────────────────────────────────────────────

#[test]
fn idle_ship_stays_put() {
    let ship = Ship::new();
    let next = integrate_ship(&ship, &Controls::idle());
    assert_eq!(next, ship);
}

#[test]
fn each_key_accelerates_its_axis() {
    let ship = Ship::new();
    let right = integrate_ship(&ship, &Controls { right: true, ..Controls::idle() });
    assert_relative_eq!(right.vx, ACCELERATION * FRICTION);
    assert_relative_eq!(right.vy, 0.0);
    assert_relative_eq!(right.x, ship.x + ACCELERATION * FRICTION);

    let up = integrate_ship(&ship, &Controls { up: true, ..Controls::idle() });
    assert_relative_eq!(up.vy, -ACCELERATION * FRICTION);
    assert_relative_eq!(up.y, ship.y - ACCELERATION * FRICTION);
}

#[test]
fn diagonal_accelerates_both_axes() {
    let ship = Ship::new();
    let next = integrate_ship(
        &ship,
        &Controls { down: true, left: true, ..Controls::idle() },
    );
    assert_relative_eq!(next.vx, -ACCELERATION * FRICTION);
    assert_relative_eq!(next.vy, ACCELERATION * FRICTION);
}

#[test]
fn opposite_keys_cancel() {
    let ship = Ship::new();
    let next = integrate_ship(
        &ship,
        &Controls { up: true, down: true, left: true, right: true, ..Controls::idle() },
    );
    assert_relative_eq!(next.vx, 0.0);
    assert_relative_eq!(next.vy, 0.0);
}

#[test]
fn velocity_accumulates_while_held() {
    let held = Controls { right: true, ..Controls::idle() };
    let mut ship = Ship::new();
    let mut previous = 0.0;
    for _ in 0..10 {
        ship = integrate_ship(&ship, &held);
        assert!(ship.vx > previous);
        previous = ship.vx;
    }
}

#[test]
fn friction_decays_without_stopping() {
    let mut ship = Ship { vx: 5.0, vy: -5.0, ..Ship::new() };
    for _ in 0..100 {
        ship = integrate_ship(&ship, &Controls::idle());
    }
    assert_relative_eq!(ship.vx, 5.0 * FRICTION.powi(100), max_relative = 1e-4);
    assert!(ship.vx > 0.0);
    assert!(ship.vy < 0.0);
}

#[test]
fn wrap_right_edge_to_zero() {
    let next = integrate_ship(&ship_at(SCREEN_WIDTH + 1.0, 300.0), &Controls::idle());
    assert_eq!(next.x, 0.0);
}

#[test]
fn wrap_left_edge_to_right() {
    let next = integrate_ship(&ship_at(-SHIP_SIZE - 1.0, 300.0), &Controls::idle());
    assert_eq!(next.x, SCREEN_WIDTH);
}

#[test]
fn wrap_bottom_edge_to_zero() {
    let next = integrate_ship(&ship_at(600.0, SCREEN_HEIGHT + 1.0), &Controls::idle());
    assert_eq!(next.y, 0.0);
}

#[test]
fn wrap_top_edge_to_bottom() {
    let next = integrate_ship(&ship_at(600.0, -SHIP_SIZE - 1.0), &Controls::idle());
    assert_eq!(next.y, SCREEN_HEIGHT);
}

#[test]
fn partly_offscreen_ship_is_not_wrapped() {
    let next = integrate_ship(&ship_at(-50.0, -50.0), &Controls::idle());
    assert_eq!((next.x, next.y), (-50.0, -50.0));
    let next = integrate_ship(&ship_at(SCREEN_WIDTH, SCREEN_HEIGHT), &Controls::idle());
    assert_eq!((next.x, next.y), (SCREEN_WIDTH, SCREEN_HEIGHT));
}

#[test]
fn wrap_keeps_velocity() {
    let ship = Ship { x: SCREEN_WIDTH, vx: 5.0, ..Ship::new() };
    let next = integrate_ship(&ship, &Controls::idle());
    assert_eq!(next.x, 0.0);
    assert_relative_eq!(next.vx, 5.0 * FRICTION);
}

// ── Bullets & enemies ─────────────────────────────────────────────────────────

#[test]
fn bullets_move_along_their_direction() {
    let up = Bullet::new(0, BulletOwner::Player, 100.0, 300.0);
    let down = Bullet::new(1, BulletOwner::Enemy, 100.0, 300.0);

    let up2 = advance_bullet(&up);
    let down2 = advance_bullet(&down);

    assert_eq!(up2.y, 300.0 - BULLET_SPEED);
    assert_eq!(down2.y, 300.0 + BULLET_SPEED);
    assert_eq!(up2.x, 100.0);
    assert_eq!(up2.id, up.id);
}

#[test]
fn bullet_bounds() {
    let at = |y| Bullet::new(0, BulletOwner::Player, 0.0, y);
    assert!(!off_screen(&at(0.0)));
    assert!(!off_screen(&at(SCREEN_HEIGHT)));
    assert!(!off_screen(&at(-BULLET_HEIGHT)));
    assert!(off_screen(&at(SCREEN_HEIGHT + 0.5)));
    assert!(off_screen(&at(-BULLET_HEIGHT - 0.5)));
}

#[test]
fn enemies_hold_position() {
    let enemy = Enemy { id: 3, x: 10.0, y: 74.0, kind: EnemyKind::Crab, tint: Tint::Cyan };
    assert_eq!(move_enemy(&enemy), enemy);
}
