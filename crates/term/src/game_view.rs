//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::TILE_SIZE;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const FIELD_BG: Rgb = Rgb::new(20, 20, 28);
const FOOD: Rgb = Rgb::new(230, 60, 60);
const HEAD: Rgb = Rgb::new(80, 220, 100);
const BODY: Rgb = Rgb::new(235, 215, 70);

/// A lightweight terminal renderer for the snake game.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2 columns per cell compensates for the typical glyph aspect ratio.
        Self { cell_w: TILE_SIZE }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse one framebuffer across frames.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let field_w = snap.grid_width.saturating_mul(self.cell_w);
        let field_h = snap.grid_height;
        let frame_w = field_w.saturating_add(2);
        let frame_h = field_h.saturating_add(2);

        let origin_x = viewport.width.saturating_sub(frame_w) / 2;
        let origin_y = viewport.height.saturating_sub(frame_h) / 2;

        let field = CellStyle::new(FIELD_BG, FIELD_BG);
        fb.fill_rect(
            origin_x.saturating_add(1),
            origin_y.saturating_add(1),
            field_w,
            field_h,
            ' ',
            field,
        );
        draw_border(fb, origin_x, origin_y, frame_w, frame_h);

        if !snap.game_over() {
            if let Some(food) = snap.food {
                self.draw_cell(fb, origin_x, origin_y, snap, food.x, food.y, '●', FOOD);
            }
            // Tail first so the head wins on any overlap.
            for (i, c) in snap.snake.iter().enumerate().rev() {
                let color = if i == 0 { HEAD } else { BODY };
                self.draw_cell(fb, origin_x, origin_y, snap, c.x, c.y, '█', color);
            }
        } else {
            draw_game_over(fb, origin_x, origin_y, frame_w, frame_h, snap.score);
        }

        let panel_x = origin_x.saturating_add(frame_w).saturating_add(2);
        draw_side_panel(fb, snap, viewport, panel_x, origin_y);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_cell(
        &self,
        fb: &mut FrameBuffer,
        origin_x: u16,
        origin_y: u16,
        snap: &GameSnapshot,
        x: i32,
        y: i32,
        ch: char,
        fg: Rgb,
    ) {
        // The head can sit one step outside the grid on the collision tick.
        if x < 0 || y < 0 || x >= snap.grid_width as i32 || y >= snap.grid_height as i32 {
            return;
        }
        // Cells past the u16 coordinate range cannot be on screen.
        let px = (x as u16)
            .checked_mul(self.cell_w)
            .and_then(|v| v.checked_add(origin_x))
            .and_then(|v| v.checked_add(1));
        let py = (y as u16)
            .checked_add(origin_y)
            .and_then(|v| v.checked_add(1));
        let (Some(px), Some(py)) = (px, py) else {
            return;
        };
        fb.fill_rect(px, py, self.cell_w, 1, ch, CellStyle::new(fg, FIELD_BG).bold());
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    if w < 2 || h < 2 {
        return;
    }
    let style = CellStyle::new(Rgb::new(200, 200, 200), Rgb::BLACK);

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);
    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

fn draw_game_over(fb: &mut FrameBuffer, x: u16, y: u16, frame_w: u16, frame_h: u16, score: u32) {
    let style = CellStyle::new(Rgb::WHITE, FIELD_BG).bold();
    let mid_y = y.saturating_add(frame_h / 2);

    let title = "GAME OVER";
    let title_x = x.saturating_add(frame_w.saturating_sub(title.len() as u16) / 2);
    fb.put_str(title_x, mid_y.saturating_sub(1), title, style);

    // "Score: " plus the digits, centred as one run.
    let digits = digit_count(score);
    let line_w = 7 + digits;
    let line_x = x.saturating_add(frame_w.saturating_sub(line_w) / 2);
    fb.put_str(line_x, mid_y.saturating_add(1), "Score: ", style);
    fb.put_u32(line_x.saturating_add(7), mid_y.saturating_add(1), score, style);
}

fn draw_side_panel(fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, x: u16, y: u16) {
    if x >= viewport.width || viewport.width - x < 8 {
        return;
    }
    let label = CellStyle::new(Rgb::new(220, 220, 220), Rgb::BLACK).bold();
    let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::BLACK);

    fb.put_str(x, y, "SCORE", label);
    fb.put_u32(x, y.saturating_add(1), snap.score, value);

    fb.put_str(x, y.saturating_add(3), "LENGTH", label);
    fb.put_u32(x, y.saturating_add(4), snap.snake.len() as u32, value);

    fb.put_str(x, y.saturating_add(6), "HEADING", label);
    fb.put_str(x, y.saturating_add(7), snap.direction.as_str(), value);
}

fn digit_count(mut n: u32) -> u16 {
    let mut d = 1;
    while n >= 10 {
        n /= 10;
        d += 1;
    }
    d
}
