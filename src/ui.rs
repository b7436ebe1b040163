//! Terminal presentation of a game in progress.
//!
//! The drawing code only consumes read-only views of the engine; it never
//! mutates core state. Turn-based play makes a full redraw per frame cheap
//! enough that no damage tracking is needed.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use crossterm::QueueableCommand;

use crate::common::{Cell, PlayerId};
use crate::game::GameEngine;
use crate::grid::Grid;

fn cell_face(cell: Cell) -> (&'static str, Color) {
    match cell {
        Cell::Wall => ("##", Color::DarkBlue),
        Cell::Path => ("  ", Color::Reset),
        Cell::Exit => ("EX", Color::Green),
        Cell::Bonus => (" .", Color::Yellow),
    }
}

/// Plain-text rendering with optional avatar overlays, for headless tools
/// and assertions on small grids.
pub fn render_to_string(
    grid: &Grid,
    p1: Option<(usize, usize)>,
    p2: Option<(usize, usize)>,
) -> String {
    let n = grid.size();
    let mut out = String::with_capacity(n * (n + 1));
    for r in 0..n {
        for c in 0..n {
            let glyph = if p1 == Some((r, c)) {
                '1'
            } else if p2 == Some((r, c)) {
                '2'
            } else {
                grid.at(r, c).glyph()
            };
            out.push(glyph);
        }
        if r + 1 < n {
            out.push('\n');
        }
    }
    out
}

/// Status line above the grid: elapsed time and per-player stats.
pub fn hud_line(engine: &GameEngine, elapsed_secs: u64) -> String {
    let mut hud = format!("Time: {}s", elapsed_secs);
    if let Some(p1) = engine.player(PlayerId::One) {
        hud.push_str(&format!(
            "  P1 Score: {} Moves: {}",
            p1.score(),
            p1.moves()
        ));
    }
    if let Some(p2) = engine.player(PlayerId::Two) {
        hud.push_str(&format!(
            "  P2 Score: {} Moves: {}",
            p2.score(),
            p2.moves()
        ));
    }
    hud.push_str("  (q to quit)");
    hud
}

/// Draw the whole scene: HUD plus the grid with avatar overlays.
pub fn draw(out: &mut impl Write, engine: &GameEngine, elapsed_secs: u64) -> io::Result<()> {
    let n = engine.size();
    let p1 = engine.player(PlayerId::One).map(|a| a.pos());
    let p2 = engine.player(PlayerId::Two).map(|a| a.pos());

    out.queue(MoveTo(0, 0))?;
    out.queue(Clear(ClearType::All))?;
    out.queue(SetForegroundColor(Color::White))?;
    out.queue(Print(hud_line(engine, elapsed_secs)))?;

    for r in 0..n {
        out.queue(MoveTo(0, r as u16 + 1))?;
        for c in 0..n {
            let (text, color) = if p1 == Some((r, c)) {
                ("P1", Color::Yellow)
            } else if p2 == Some((r, c)) {
                ("P2", Color::Cyan)
            } else {
                cell_face(engine.grid().at(r, c))
            };
            out.queue(SetForegroundColor(color))?;
            out.queue(Print(text))?;
        }
    }
    out.queue(ResetColor)?;
    out.flush()
}
