//! Rendering layer: all terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable snapshot of the
//! game. No game logic is performed; world pixels are scaled into the
//! bordered play area and turned into terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use alien_invasion::entities::Rect;
use alien_invasion::snapshot::{ExplosionView, Snapshot};
use alien_invasion::{Difficulty, SessionState};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_LIVES: Color = Color::Red;
const C_HUD_LEVEL: Color = Color::Cyan;
const C_PLAYER: Color = Color::White;
const C_INVADER: Color = Color::Green;
const C_BULLET: Color = Color::Cyan;
const C_EXPLOSION: Color = Color::Yellow;
const C_HINT: Color = Color::DarkGrey;

/// One glyph per explosion frame.
const EXPLOSION_FRAMES: [&str; 5] = ["*", "✶", "✷", "✸", "·"];

// ── World → terminal mapping ──────────────────────────────────────────────────

/// Bordered play area inside the terminal: rows 2 .. height-2, columns
/// 1 .. width-1.
struct Viewport {
    cols: u16,
    rows: u16,
    world_w: f32,
    world_h: f32,
}

impl Viewport {
    fn new(size: (u16, u16), screen: (f32, f32)) -> Self {
        Viewport {
            cols: size.0,
            rows: size.1,
            world_w: screen.0.max(1.0),
            world_h: screen.1.max(1.0),
        }
    }

    fn inner_cols(&self) -> f32 {
        self.cols.saturating_sub(2).max(1) as f32
    }

    fn inner_rows(&self) -> f32 {
        self.rows.saturating_sub(4).max(1) as f32
    }

    /// Terminal cell for a world point, clamped to the play area.
    fn cell(&self, x: f32, y: f32) -> (u16, u16) {
        let col = (x / self.world_w * self.inner_cols()).floor().max(0.0) as u16;
        let row = (y / self.world_h * self.inner_rows()).floor().max(0.0) as u16;
        let col = col.min(self.cols.saturating_sub(3));
        let row = row.min(self.rows.saturating_sub(5));
        (col + 1, row + 2)
    }

    fn center_cell(&self, rect: &Rect) -> (u16, u16) {
        let (cx, cy) = rect.center();
        self.cell(cx, cy)
    }

    fn last_play_row(&self) -> u16 {
        self.rows.saturating_sub(3)
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, snap: &Snapshot, size: (u16, u16)) -> std::io::Result<()> {
    let view = Viewport::new(size, snap.screen);
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, &view)?;
    draw_hud(out, snap, &view)?;

    for invader in &snap.invaders {
        draw_invader(out, invader, &view)?;
    }
    for projectile in &snap.projectiles {
        draw_projectile(out, projectile, &view)?;
    }
    for explosion in &snap.explosions {
        draw_explosion(out, explosion, &view)?;
    }

    if snap.player_alive {
        draw_player(out, &snap.player, &view)?;
    }
    draw_controls_hint(out, &view)?;

    match snap.state {
        SessionState::Destroyed { .. } => draw_banner(out, &view, "SHIP DESTROYED", Color::Red)?,
        SessionState::GameOver => draw_game_over(out, snap, &view)?,
        SessionState::Inactive | SessionState::Active => {}
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, view.rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    let w = view.cols as usize;
    let h = view.rows;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    // Row 1: top bar
    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    // Row h-2: bottom bar
    out.queue(cursor::MoveTo(0, h.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    // Side walls
    for row in 2..h.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(view.cols.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, snap: &Snapshot, view: &Viewport) -> std::io::Result<()> {
    // Score and high score: left
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!(
        "Score:{:>7}  Hi:{:>7}",
        snap.score, snap.high_score
    )))?;

    // Difficulty and level: centre
    let level_str = format!("[ {} · LV {} ]", difficulty_label(snap.difficulty), snap.level);
    let lx = (view.cols / 2).saturating_sub(level_str.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(lx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LEVEL))?;
    out.queue(Print(&level_str))?;

    // Ships: right
    let ships = format!("Ships:{}", "▲".repeat(snap.ships_left as usize));
    let rx = view.cols.saturating_sub(ships.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(rx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_LIVES))?;
    out.queue(Print(&ships))?;

    Ok(())
}

pub fn difficulty_label(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "EASY",
        Difficulty::Medium => "MEDIUM",
        Difficulty::Hard => "HARD",
    }
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_player<W: Write>(out: &mut W, craft: &Rect, view: &Viewport) -> std::io::Result<()> {
    //   ▲       ← tip
    //  /█\      ← fuselage + wings
    let (col, _) = view.center_cell(craft);
    let (_, row) = view.cell(craft.x, craft.top());
    let row = row.min(view.last_play_row().saturating_sub(1));
    out.queue(style::SetForegroundColor(C_PLAYER))?;

    out.queue(cursor::MoveTo(col, row))?;
    out.queue(Print("▲"))?;

    out.queue(cursor::MoveTo(col.saturating_sub(1).max(1), row + 1))?;
    out.queue(Print("/█\\"))?;

    Ok(())
}

fn draw_invader<W: Write>(out: &mut W, invader: &Rect, view: &Viewport) -> std::io::Result<()> {
    let (col, row) = view.center_cell(invader);
    out.queue(style::SetForegroundColor(C_INVADER))?;
    out.queue(cursor::MoveTo(col.saturating_sub(1).max(1), row))?;
    out.queue(Print("«▼»"))?;
    Ok(())
}

fn draw_projectile<W: Write>(
    out: &mut W,
    projectile: &Rect,
    view: &Viewport,
) -> std::io::Result<()> {
    let (col, row) = view.center_cell(projectile);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(C_BULLET))?;
    out.queue(Print("║"))?;
    Ok(())
}

fn draw_explosion<W: Write>(
    out: &mut W,
    explosion: &ExplosionView,
    view: &Viewport,
) -> std::io::Result<()> {
    let glyph = EXPLOSION_FRAMES
        .get(explosion.frame as usize)
        .copied()
        .unwrap_or("·");
    let (col, row) = view.cell(explosion.center.0, explosion.center.1);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(C_EXPLOSION))?;
    out.queue(Print(glyph))?;
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, view.rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → / A D : Move   SPACE : Shoot   Q : Quit"))?;
    Ok(())
}

// ── Overlays ──────────────────────────────────────────────────────────────────

fn draw_banner<W: Write>(
    out: &mut W,
    view: &Viewport,
    text: &str,
    color: Color,
) -> std::io::Result<()> {
    let col = (view.cols / 2).saturating_sub(text.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, view.rows / 2))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(text))?;
    Ok(())
}

fn draw_game_over<W: Write>(out: &mut W, snap: &Snapshot, view: &Viewport) -> std::io::Result<()> {
    let score_line = format!("Final Score: {:>7}", snap.score);
    let new_best = snap.score > 0 && snap.score >= snap.high_score;
    let best_line = if new_best {
        format!("★ NEW BEST: {:>7} ★", snap.high_score)
    } else {
        format!("Best Score:  {:>7}", snap.high_score)
    };

    let lines: &[(&str, Color)] = &[
        ("╔════════════════════╗", Color::Red),
        ("║    GAME  OVER      ║", Color::Red),
        ("╚════════════════════╝", Color::Red),
    ];
    let best_color = if new_best { Color::Yellow } else { Color::DarkGrey };

    let cx = view.cols / 2;
    let total_rows = lines.len() + 3; // 3 box lines + score + best + hint
    let start_row = (view.rows / 2).saturating_sub(total_rows as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    let rows: [(&str, Color); 3] = [
        (score_line.as_str(), Color::Yellow),
        (best_line.as_str(), best_color),
        ("R - Menu  Q - Quit", Color::White),
    ];
    for (i, (msg, color)) in rows.iter().enumerate() {
        let row = start_row + (lines.len() + i) as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    Ok(())
}
