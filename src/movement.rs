/// Movement integration for the ship, bullets and (eventually) enemies.
///
/// Like the rest of the core these are pure: each takes the entity by
/// reference and returns its next-tick value.

use crate::constants::{
    ACCELERATION, BULLET_HEIGHT, BULLET_SPEED, FRICTION, SCREEN_HEIGHT, SCREEN_WIDTH, SHIP_SIZE,
};
use crate::entities::{Bullet, Enemy, Ship};
use crate::input::Controls;

/// Velocity after applying the held directional keys, then friction.
/// Each key adds independently, so diagonals accelerate both axes and
/// opposite keys cancel.
pub fn accelerate(ship: &Ship, controls: &Controls) -> (f32, f32) {
    let mut vx = ship.vx;
    let mut vy = ship.vy;

    if controls.up {
        vy -= ACCELERATION;
    }
    if controls.down {
        vy += ACCELERATION;
    }
    if controls.left {
        vx -= ACCELERATION;
    }
    if controls.right {
        vx += ACCELERATION;
    }

    (vx * FRICTION, vy * FRICTION)
}

/// Wrap one coordinate around the field.  Past the far edge snaps to 0,
/// more than a ship's size past the near edge snaps to the far edge.
pub fn wrap(value: f32, extent: f32) -> f32 {
    if value > extent {
        0.0
    } else if value < -SHIP_SIZE {
        extent
    } else {
        value
    }
}

/// One tick of ship physics: accelerate, decay, move, wrap.
pub fn integrate_ship(ship: &Ship, controls: &Controls) -> Ship {
    let (vx, vy) = accelerate(ship, controls);
    Ship {
        x: wrap(ship.x + vx, SCREEN_WIDTH),
        y: wrap(ship.y + vy, SCREEN_HEIGHT),
        vx,
        vy,
    }
}

/// Bullets travel straight along their fixed direction.
pub fn advance_bullet(bullet: &Bullet) -> Bullet {
    Bullet {
        y: bullet.y + BULLET_SPEED * bullet.direction,
        ..bullet.clone()
    }
}

/// True once the bullet is entirely past the top or bottom edge.
pub fn off_screen(bullet: &Bullet) -> bool {
    bullet.y > SCREEN_HEIGHT || bullet.y < -BULLET_HEIGHT
}

/// Formations are static for now.
pub fn move_enemy(enemy: &Enemy) -> Enemy {
    enemy.clone()
}
