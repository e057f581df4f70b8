/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable `Snapshot`.
/// No game logic is performed; world units are scaled onto the terminal
/// grid and drawn.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};

use crate::entities::{MotionState, ObstacleKind, ObstacleView, RunState, Snapshot};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_HUD_SCORE: Color = Color::Yellow;
const C_SUN: Color = Color::Yellow;
const C_GROUND: Color = Color::DarkYellow;
const C_DINO: Color = Color::Green;
const C_DINO_DEAD: Color = Color::DarkRed;
const C_CACTUS: Color = Color::DarkGreen;
const C_ROCK: Color = Color::Grey;
const C_HINT: Color = Color::DarkGrey;

const GROUND_PATTERN: &[char] = &['▀', '▀', '·', '▀', '▀', '▀', '.', '▀'];

/// Maps world coordinates onto terminal cells.  Row 0 is the HUD and the
/// last row is the controls hint; the field fills everything in between.
struct Viewport {
    cols: u16,
    rows: u16,
    sx: f32,
    sy: f32,
}

impl Viewport {
    fn new(snap: &Snapshot, cols: u16, rows: u16) -> Self {
        let field_rows = rows.saturating_sub(2).max(1);
        Self {
            cols,
            rows,
            sx: cols as f32 / snap.field_width,
            sy: field_rows as f32 / snap.field_height,
        }
    }

    fn col(&self, x: f32) -> i32 {
        (x * self.sx).floor() as i32
    }

    fn row(&self, y: f32) -> i32 {
        1 + (y * self.sy).floor() as i32
    }

    fn visible(&self, col: i32, row: i32) -> bool {
        col >= 0 && (col as u16) < self.cols && row >= 1 && (row as u16) < self.rows.saturating_sub(1)
    }

    /// Cell rectangle covered by a world box, at least one cell each way.
    fn cells(&self, x: f32, y: f32, w: f32, h: f32) -> (i32, i32, i32, i32) {
        let c0 = self.col(x);
        let r0 = self.row(y);
        let c1 = self.col(x + w).max(c0 + 1);
        let r1 = self.row(y + h).max(r0 + 1);
        (c0, r0, c1, r1)
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, snap: &Snapshot, cols: u16, rows: u16) -> std::io::Result<()> {
    let view = Viewport::new(snap, cols, rows);
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_sun(out, &view)?;
    draw_ground(out, snap, &view)?;
    for obstacle in &snap.obstacles {
        draw_obstacle(out, obstacle, &view)?;
    }
    draw_dino(out, snap, &view)?;
    draw_hud(out, snap)?;
    draw_controls_hint(out, &view)?;

    if snap.run_state == RunState::Ended && snap.game_over_visible {
        draw_game_over(out, snap, &view)?;
    }

    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

fn put<W: Write>(out: &mut W, view: &Viewport, col: i32, row: i32, text: &str) -> std::io::Result<()> {
    if view.visible(col, row) {
        out.queue(cursor::MoveTo(col as u16, row as u16))?;
        out.queue(Print(text))?;
    }
    Ok(())
}

fn centred<W: Write>(out: &mut W, view: &Viewport, row: u16, text: &str) -> std::io::Result<()> {
    let col = (view.cols / 2).saturating_sub(text.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(Print(text))?;
    Ok(())
}

// ── Scenery ───────────────────────────────────────────────────────────────────

fn draw_sun<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    out.queue(style::SetForegroundColor(C_SUN))?;
    put(out, view, view.cols as i32 - 5, 1, "\\|/")?;
    put(out, view, view.cols as i32 - 5, 2, "-O-")?;
    Ok(())
}

fn draw_ground<W: Write>(out: &mut W, snap: &Snapshot, view: &Viewport) -> std::io::Result<()> {
    let row = view.row(snap.ground_y);
    let shift = view.col(snap.ground_offset as f32).max(0) as usize;
    out.queue(style::SetForegroundColor(C_GROUND))?;
    let line: String = (0..view.cols as usize)
        .map(|c| GROUND_PATTERN[(c + shift) % GROUND_PATTERN.len()])
        .collect();
    put(out, view, 0, row, &line)?;
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_obstacle<W: Write>(out: &mut W, obstacle: &ObstacleView, view: &Viewport) -> std::io::Result<()> {
    let (glyph, color) = match obstacle.kind {
        ObstacleKind::Cactus => ("‡", C_CACTUS),
        ObstacleKind::Rock => ("▓", C_ROCK),
    };
    out.queue(style::SetForegroundColor(color))?;
    let (c0, r0, c1, r1) = view.cells(obstacle.x, obstacle.y, obstacle.width, obstacle.height);
    for row in r0..r1 {
        for col in c0..c1 {
            put(out, view, col, row, glyph)?;
        }
    }
    Ok(())
}

fn draw_dino<W: Write>(out: &mut W, snap: &Snapshot, view: &Viewport) -> std::io::Result<()> {
    let (head, legs, color) = match snap.motion {
        MotionState::Running => ("▄█▀", "╯ ╰", C_DINO),
        MotionState::Jumping => ("▄█▀", "╰─╯", C_DINO),
        MotionState::Falling => ("▄█▀", "╲ ╱", C_DINO),
        MotionState::Dying => ("x█x", "╳ ╳", C_DINO_DEAD),
    };
    out.queue(style::SetForegroundColor(color))?;
    let (c0, r0, c1, r1) = view.cells(snap.dino_x, snap.dino_y, snap.dino_width, snap.dino_height);
    let body_rows = (r1 - r0).max(2);
    for i in 0..body_rows {
        let row = r0 + i;
        let part = if i == body_rows - 1 { legs } else if i == 0 { head } else { "███" };
        let col = c0 + ((c1 - c0) - 3).max(0) / 2;
        put(out, view, col, row, part)?;
    }
    Ok(())
}

// ── HUD and overlays ──────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, snap: &Snapshot) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score: {:>6}   Speed: {:>5.2}", snap.score, snap.speed)))?;
    Ok(())
}

fn draw_controls_hint<W: Write>(out: &mut W, view: &Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, view.rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("↑ / W / SPACE : Jump   ↓ / S : Duck   Q : Quit"))?;
    Ok(())
}

fn draw_game_over<W: Write>(out: &mut W, snap: &Snapshot, view: &Viewport) -> std::io::Result<()> {
    let cy = view.rows / 3;
    out.queue(style::SetForegroundColor(Color::Red))?;
    centred(out, view, cy, "╔════════════════════╗")?;
    centred(out, view, cy + 1, "║    GAME  OVER      ║")?;
    centred(out, view, cy + 2, "╚════════════════════╝")?;
    out.queue(style::SetForegroundColor(Color::Yellow))?;
    centred(out, view, cy + 3, &format!("Score: {}", snap.score))?;
    out.queue(style::SetForegroundColor(Color::White))?;
    centred(out, view, cy + 4, "Click or press ENTER to play again")?;
    Ok(())
}
