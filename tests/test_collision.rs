use space_invaders::collision::*;
use space_invaders::entities::*;

fn enemy_at(x: f32, y: f32) -> Enemy {
    Enemy { id: 0, x, y, kind: EnemyKind::Squid, tint: Tint::White }
}

#[test]
fn ramming_an_enemy_is_fatal() {
    let ship = Ship::new(); // hitbox 582..615 × 482..515
    assert!(ship_hit(&ship, Hazard::Enemy(&enemy_at(560.0, 450.0))));
    // approaching from below counts too
    assert!(ship_hit(&ship, Hazard::Enemy(&enemy_at(600.0, 510.0))));
    assert!(!ship_hit(&ship, Hazard::Enemy(&enemy_at(100.0, 74.0))));
}

#[test]
fn sprite_overlap_outside_hitbox_is_safe() {
    let ship = Ship::new();
    // Overlaps the 100×100 sprite but not the 33×33 hitbox
    let enemy = enemy_at(500.0, 430.0);
    assert!(Rect::new(550.0, 450.0, 100.0, 100.0).overlaps(&enemy.rect()));
    assert!(!ship_hit(&ship, Hazard::Enemy(&enemy)));
}

#[test]
fn enemy_bullet_kills_ship() {
    let ship = Ship::new();
    let bullet = Bullet::new(0, BulletOwner::Enemy, 600.0, 490.0);
    assert!(ship_hit(&ship, Hazard::Bullet(&bullet)));
}

#[test]
fn player_bullet_never_kills_ship() {
    let ship = Ship::new();
    let bullet = Bullet::new(0, BulletOwner::Player, ship.x, ship.y);
    assert!(ship.rect().overlaps(&bullet.rect()));
    assert!(!ship_hit(&ship, Hazard::Bullet(&bullet)));
}

#[test]
fn player_bullet_destroys_enemy() {
    let enemy = enemy_at(565.0, 50.0);
    let bullet = Bullet::new(0, BulletOwner::Player, 600.0, 100.0);
    assert!(enemy_hit(&enemy, &bullet));
}

#[test]
fn enemy_bullet_passes_through_enemies() {
    let enemy = enemy_at(565.0, 50.0);
    let bullet = Bullet::new(0, BulletOwner::Enemy, 600.0, 100.0);
    assert!(enemy.rect().overlaps(&bullet.rect()));
    assert!(!enemy_hit(&enemy, &bullet));
}

#[test]
fn near_misses_do_not_count() {
    let enemy = enemy_at(565.0, 50.0);
    // bullet top edge touching the enemy's bottom edge
    let below = Bullet::new(0, BulletOwner::Player, 600.0, 120.0);
    assert!(!enemy_hit(&enemy, &below));
    // just past the right edge
    let beside = Bullet::new(1, BulletOwner::Player, 635.0, 80.0);
    assert!(!enemy_hit(&enemy, &beside));
}
