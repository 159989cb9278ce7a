/// All game entity types: plain data plus the bounding boxes each one
/// derives from its current position.

use std::collections::BTreeMap;
use std::fmt;

use crate::constants::{
    BULLET_HEIGHT, BULLET_WIDTH, ENEMY_SIZE, NUM_ENEMY_TYPES, SCREEN_CENTER_X, SCREEN_HEIGHT,
    SHIP_HITBOX_OFFSET, SHIP_HITBOX_SIZE,
};

pub type EntityId = u64;

/// Hands out enemy and bullet ids.  Owned by the game state and carried
/// across restarts, so an id is never handed out twice.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IdGen {
    next: EntityId,
}

impl IdGen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> EntityId {
        let id = self.next;
        self.next += 1;
        id
    }

    /// The id the next call to `next_id` will return.
    pub fn peek(&self) -> EntityId {
        self.next
    }
}

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned rectangle, top-left corner plus size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Rect { x, y, w, h }
    }

    /// Strict overlap: rectangles that only share an edge do not collide.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && other.x < self.x + self.w
            && self.y < other.y + other.h
            && other.y < self.y + self.h
    }
}

// ── Colours & visual types ────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tint {
    Gray,
    White,
    Red,
    Yellow,
    Green,
    Cyan,
    Blue,
    Magenta,
}

/// Colours a spawned enemy can be tinted with.
pub const ENEMY_PALETTE: [Tint; 7] = [
    Tint::White,
    Tint::Red,
    Tint::Yellow,
    Tint::Green,
    Tint::Cyan,
    Tint::Blue,
    Tint::Magenta,
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EnemyKind {
    Squid,
    Crab,
    Octopus,
    Saucer,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; NUM_ENEMY_TYPES] = [
        EnemyKind::Squid,
        EnemyKind::Crab,
        EnemyKind::Octopus,
        EnemyKind::Saucer,
    ];

    /// Unknown indices fall back to the first kind.
    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or(EnemyKind::Squid)
    }
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BulletOwner {
    Player,
    Enemy,
}

impl BulletOwner {
    /// Vertical direction of travel: player shots go up, enemy shots down.
    pub fn direction(self) -> f32 {
        match self {
            BulletOwner::Player => -1.0,
            BulletOwner::Enemy => 1.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub id: EntityId,
    pub x: f32,
    pub y: f32,
    /// +1.0 downward, -1.0 upward.  Fixed at creation.
    pub direction: f32,
    pub owner: BulletOwner,
}

impl Bullet {
    pub fn new(id: EntityId, owner: BulletOwner, x: f32, y: f32) -> Self {
        Bullet {
            id,
            x,
            y,
            direction: owner.direction(),
            owner,
        }
    }

    pub fn is_player_shot(&self) -> bool {
        self.owner == BulletOwner::Player
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, BULLET_WIDTH, BULLET_HEIGHT)
    }
}

impl fmt::Display for Bullet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "bullet #{} ({:?}) at ({:.0}, {:.0})",
            self.id, self.owner, self.x, self.y
        )
    }
}

// ── Ship & enemy ──────────────────────────────────────────────────────────────

/// The player ship.  `(x, y)` is the centre of its sprite.
#[derive(Clone, Debug, PartialEq)]
pub struct Ship {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
}

impl Ship {
    /// A ship at rest at its spawn point, bottom centre of the field.
    pub fn new() -> Self {
        Ship {
            x: SCREEN_CENTER_X,
            y: SCREEN_HEIGHT - 100.0,
            vx: 0.0,
            vy: 0.0,
        }
    }

    /// Hitbox, a good deal smaller than the sprite.
    pub fn rect(&self) -> Rect {
        Rect::new(
            self.x - SHIP_HITBOX_OFFSET,
            self.y - SHIP_HITBOX_OFFSET,
            SHIP_HITBOX_SIZE,
            SHIP_HITBOX_SIZE,
        )
    }

    pub fn attack(&self, id: EntityId) -> Bullet {
        Bullet::new(id, BulletOwner::Player, self.x, self.y)
    }
}

impl Default for Ship {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ship at ({:.1}, {:.1}) moving ({:.2}, {:.2})",
            self.x, self.y, self.vx, self.vy
        )
    }
}

/// A formation enemy.  `(x, y)` is the top-left of its sprite.
#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub id: EntityId,
    pub x: f32,
    pub y: f32,
    pub kind: EnemyKind,
    pub tint: Tint,
}

impl Enemy {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, ENEMY_SIZE, ENEMY_SIZE)
    }

    /// Enemy shots leave from the middle of the sprite's top edge.
    pub fn attack(&self, id: EntityId) -> Bullet {
        Bullet::new(id, BulletOwner::Enemy, self.x + ENEMY_SIZE / 2.0, self.y)
    }
}

impl fmt::Display for Enemy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "enemy #{} {:?}/{:?} at ({:.0}, {:.0})",
            self.id, self.kind, self.tint, self.x, self.y
        )
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Playing,
    GameOver,
}

/// The whole session.  Cloneable so the update functions in `compute` can
/// return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub ship: Ship,
    /// Keyed by id; iteration order is creation order.
    pub enemies: BTreeMap<EntityId, Enemy>,
    pub bullets: BTreeMap<EntityId, Bullet>,
    pub score: u32,
    pub level: u32,
    pub phase: Phase,
    /// Cleared by a quit signal from either phase.
    pub running: bool,
    pub ids: IdGen,
    pub frame: u64,
}

impl GameState {
    pub fn add_enemy(&mut self, enemy: Enemy) {
        self.enemies.insert(enemy.id, enemy);
    }

    pub fn add_bullet(&mut self, bullet: Bullet) {
        self.bullets.insert(bullet.id, bullet);
    }

    /// Removing an enemy that is already gone is a no-op.
    pub fn remove_enemy(&mut self, id: EntityId) -> Option<Enemy> {
        self.enemies.remove(&id)
    }

    /// Removing a bullet that is already gone is a no-op.
    pub fn remove_bullet(&mut self, id: EntityId) -> Option<Bullet> {
        self.bullets.remove(&id)
    }
}
