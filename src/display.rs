/// Rendering layer: all terminal I/O lives here.
///
/// `TerminalCanvas` implements the core's `Canvas` by scaling the
/// 1200×600 play field onto whatever terminal it finds.  No game logic is
/// performed; this module only translates draw requests into terminal
/// commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};
use space_invaders::constants::{ENEMY_SIZE, SCREEN_HEIGHT, SCREEN_WIDTH};
use space_invaders::entities::{Bullet, BulletOwner, Enemy, EnemyKind, Ship, Tint};
use space_invaders::render::Canvas;

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_PLAYER: Color = Color::White;
const C_BULLET_PLAYER: Color = Color::Yellow;
const C_BULLET_ENEMY: Color = Color::Magenta;
const C_HINT: Color = Color::DarkGrey;

fn color_of(tint: Tint) -> Color {
    match tint {
        Tint::Gray => Color::DarkGrey,
        Tint::White => Color::White,
        Tint::Red => Color::Red,
        Tint::Yellow => Color::Yellow,
        Tint::Green => Color::Green,
        Tint::Cyan => Color::Cyan,
        Tint::Blue => Color::Blue,
        Tint::Magenta => Color::Magenta,
    }
}

/// Two-row sprite for each enemy kind.
fn enemy_sprite(kind: EnemyKind) -> (&'static str, &'static str) {
    match kind {
        EnemyKind::Squid => ("«▼»", "╚═╝"),
        EnemyKind::Crab => ("(◎)", "╰─╯"),
        EnemyKind::Octopus => ("{▓}", "/ \\"),
        EnemyKind::Saucer => ("<═>", "' '"),
    }
}

pub struct TerminalCanvas<W: Write> {
    out: W,
    width: u16,
    height: u16,
}

impl<W: Write> TerminalCanvas<W> {
    pub fn new(out: W) -> std::io::Result<Self> {
        let (width, height) = terminal::size()?;
        Ok(TerminalCanvas { out, width, height })
    }

    /// Map a play-field point to a cell inside the border (rows 1..h-2 and
    /// columns 1..w-2).  `None` when it falls outside the visible field.
    fn cell(&self, x: f32, y: f32) -> Option<(u16, u16)> {
        let inner_w = self.width.saturating_sub(2) as f32;
        let inner_h = self.height.saturating_sub(3) as f32;
        if !(0.0..SCREEN_WIDTH).contains(&x) || !(0.0..SCREEN_HEIGHT).contains(&y) {
            return None;
        }
        let col = 1 + (x / SCREEN_WIDTH * inner_w) as u16;
        let row = 2 + (y / SCREEN_HEIGHT * inner_h) as u16;
        Some((col, row))
    }

    fn put(&mut self, x: f32, y: f32, text: &str, color: Color) -> std::io::Result<()> {
        if let Some((col, row)) = self.cell(x, y) {
            let col = col.min(self.width.saturating_sub(1 + text.chars().count() as u16));
            self.out.queue(cursor::MoveTo(col, row))?;
            self.out.queue(style::SetForegroundColor(color))?;
            self.out.queue(Print(text))?;
        }
        Ok(())
    }

    fn draw_border(&mut self) -> std::io::Result<()> {
        let w = self.width as usize;
        let h = self.height;

        self.out.queue(style::SetForegroundColor(C_BORDER))?;

        // Row 1: top bar
        self.out.queue(cursor::MoveTo(0, 1))?;
        self.out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

        // Row h-1: bottom bar
        self.out.queue(cursor::MoveTo(0, h.saturating_sub(1)))?;
        self.out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

        for row in 2..h.saturating_sub(1) {
            self.out.queue(cursor::MoveTo(0, row))?;
            self.out.queue(Print("│"))?;
            self.out.queue(cursor::MoveTo(self.width.saturating_sub(1), row))?;
            self.out.queue(Print("│"))?;
        }

        Ok(())
    }

    fn draw_controls_hint(&mut self) -> std::io::Result<()> {
        let hint = "W A S D / arrows : Move   SPACE : Shoot   Q : Quit";
        let col = self
            .width
            .saturating_sub(hint.chars().count() as u16 + 1);
        self.out.queue(cursor::MoveTo(col, 0))?;
        self.out.queue(style::SetForegroundColor(C_HINT))?;
        self.out.queue(Print(hint))?;
        Ok(())
    }
}

impl<W: Write> Canvas for TerminalCanvas<W> {
    fn clear(&mut self) -> std::io::Result<()> {
        // Pick up resizes once per frame.
        let (width, height) = terminal::size()?;
        self.width = width;
        self.height = height;

        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        self.draw_border()?;
        self.draw_controls_hint()
    }

    fn draw_ship(&mut self, ship: &Ship) -> std::io::Result<()> {
        // Sprite (2 rows, 3 cols):
        //   ▲       ← tip
        //  /█\      ← fuselage + wings
        let (x, y) = (ship.x, ship.y);
        let row_h = SCREEN_HEIGHT / self.height.saturating_sub(3).max(1) as f32;
        let col_w = SCREEN_WIDTH / self.width.saturating_sub(2).max(1) as f32;
        self.put(x, y - row_h, "▲", C_PLAYER)?;
        self.put(x - col_w, y, "/█\\", C_PLAYER)
    }

    fn draw_enemy(&mut self, enemy: &Enemy) -> std::io::Result<()> {
        let (top, bottom) = enemy_sprite(enemy.kind);
        let color = color_of(enemy.tint);
        let mid = enemy.y + ENEMY_SIZE / 2.0;
        self.put(enemy.x, enemy.y, top, color)?;
        self.put(enemy.x, mid, bottom, color)
    }

    fn draw_bullet(&mut self, bullet: &Bullet) -> std::io::Result<()> {
        match bullet.owner {
            BulletOwner::Player => self.put(bullet.x, bullet.y, "║", C_BULLET_PLAYER),
            BulletOwner::Enemy => self.put(bullet.x, bullet.y, "↓", C_BULLET_ENEMY),
        }
    }

    fn draw_text(&mut self, x: f32, y: f32, text: &str, tint: Tint) -> std::io::Result<()> {
        self.put(x, y, text, color_of(tint))
    }

    fn present(&mut self) -> std::io::Result<()> {
        // Park cursor in a harmless spot and flush
        self.out.queue(style::ResetColor)?;
        self.out.queue(cursor::MoveTo(0, self.height.saturating_sub(1)))?;
        self.out.flush()
    }
}
