/// AABB hit tests.  Boxes are always rebuilt from the entities' current
/// positions, so there is nothing to keep in sync between ticks.

use crate::entities::{Bullet, BulletOwner, Enemy, Ship};

/// Anything the ship can run into.
#[derive(Clone, Copy, Debug)]
pub enum Hazard<'a> {
    Enemy(&'a Enemy),
    Bullet(&'a Bullet),
}

/// Does `hazard` kill the ship this tick?
///
/// Touching an enemy is always fatal.  Bullets only count when an enemy
/// fired them; the ship flies through its own shots.
pub fn ship_hit(ship: &Ship, hazard: Hazard<'_>) -> bool {
    let hitbox = ship.rect();
    match hazard {
        Hazard::Enemy(enemy) => hitbox.overlaps(&enemy.rect()),
        Hazard::Bullet(bullet) => match bullet.owner {
            BulletOwner::Enemy => hitbox.overlaps(&bullet.rect()),
            BulletOwner::Player => false,
        },
    }
}

/// Does `bullet` destroy `enemy`?  Enemy shots pass through their own side.
pub fn enemy_hit(enemy: &Enemy, bullet: &Bullet) -> bool {
    match bullet.owner {
        BulletOwner::Player => enemy.rect().overlaps(&bullet.rect()),
        BulletOwner::Enemy => false,
    }
}
