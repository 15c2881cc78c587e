//! GameView: maps board snapshots into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Every board is drawn at its own `x_offset` (in cells) with a one-line
//! header above its frame, so two boards sit side by side in a shared frame.

use crate::core::RenderState;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{ColorTag, Outcome, Player};

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

const BG: Rgb = Rgb::new(30, 30, 40);
const HEADER_ROWS: u16 = 1;

/// A lightweight terminal renderer for one or two boards.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Smallest viewport that shows every board in full
    pub fn required_size(&self, states: &[RenderState]) -> Viewport {
        let mut width = 0u16;
        let mut height = 0u16;
        for state in states {
            let (x, _, w, h) = self.frame_rect(state);
            width = width.max(x.saturating_add(w));
            height = height.max(HEADER_ROWS.saturating_add(h));
        }
        Viewport::new(width, height)
    }

    /// Render boards into an existing framebuffer.
    ///
    /// `states[i]` belongs to player `i + 1`. With `outcome` set, each board
    /// gets a WIN or LOSE overlay once the match is decided; without it a
    /// finished board shows GAME OVER.
    pub fn render_into(
        &self,
        states: &[RenderState],
        outcome: Option<Outcome>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        for (state, player) in states.iter().zip(Player::BOTH) {
            self.draw_board(fb, state, player);

            let overlay = match outcome {
                Some(o) if o.is_over() => Some(if o.winner() == Some(player) {
                    "WIN"
                } else {
                    "LOSE"
                }),
                _ if state.game_over => Some("GAME OVER"),
                _ => None,
            };
            if let Some(text) = overlay {
                self.draw_overlay_text(fb, state, text);
            }
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        states: &[RenderState],
        outcome: Option<Outcome>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(states, outcome, viewport, &mut fb);
        fb
    }

    /// Frame position and size (border included): `(x, y, w, h)`
    fn frame_rect(&self, state: &RenderState) -> (u16, u16, u16, u16) {
        let x = state.x_offset.saturating_mul(self.cell_w);
        let w = (state.width as u16).saturating_mul(self.cell_w).saturating_add(2);
        let h = (state.height as u16).saturating_mul(self.cell_h).saturating_add(2);
        (x, HEADER_ROWS, w, h)
    }

    fn draw_board(&self, fb: &mut FrameBuffer, state: &RenderState, player: Player) {
        let (start_x, start_y, frame_w, frame_h) = self.frame_rect(state);

        self.draw_header(fb, state, player, start_x);

        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        fb.fill_rect(
            start_x + 1,
            start_y + 1,
            frame_w - 2,
            frame_h - 2,
            ' ',
            CellStyle::new(Rgb::new(80, 80, 90), BG),
        );
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Locked cells.
        for (row, cells) in state.rows().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                match cell {
                    Some(color) => {
                        self.draw_block(fb, start_x, start_y, col as u16, row as u16, *color)
                    }
                    None => self.draw_empty_cell(fb, start_x, start_y, col as u16, row as u16),
                }
            }
        }

        // Falling piece; cells above the top row are not drawn.
        for &(row, col) in state.active.cells.iter() {
            if row >= 0 && col >= 0 && (row as usize) < state.height && (col as usize) < state.width
            {
                self.draw_block(
                    fb,
                    start_x,
                    start_y,
                    col as u16,
                    row as u16,
                    state.active.color,
                );
            }
        }
    }

    fn draw_header(&self, fb: &mut FrameBuffer, state: &RenderState, player: Player, x: u16) {
        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let mut cx = fb.put_str(x, 0, player.label(), label);
        cx = fb.put_str(cx, 0, "  L:", value);
        cx = fb.put_u32(cx, 0, state.lines_cleared, value);
        cx = fb.put_str(cx, 0, "  G:", value);
        fb.put_u32(cx, 0, state.garbage_received, value);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

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

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: u16, y: u16) {
        let style = CellStyle::new(Rgb::new(90, 90, 100), BG).dim();
        self.fill_cell_rect(fb, start_x, start_y, x, y, '·', style);
    }

    fn draw_block(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: u16,
        y: u16,
        color: ColorTag,
    ) {
        let style = CellStyle::new(color_rgb(color), BG);
        let style = if color.is_garbage() { style } else { style.bold() };
        self.fill_cell_rect(fb, start_x, start_y, x, y, '█', style);
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x
            .saturating_add(1)
            .saturating_add(cell_x.saturating_mul(self.cell_w));
        let py = start_y
            .saturating_add(1)
            .saturating_add(cell_y.saturating_mul(self.cell_h));
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, state: &RenderState, text: &str) {
        let (start_x, start_y, frame_w, frame_h) = self.frame_rect(state);
        let mid_y = start_y.saturating_add(frame_h / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_str_centered(start_x, mid_y, frame_w, text, style);
    }
}

/// Terminal color of a block
pub fn color_rgb(color: ColorTag) -> Rgb {
    match color {
        ColorTag::Red => Rgb::new(220, 80, 80),
        ColorTag::Green => Rgb::new(100, 220, 120),
        ColorTag::Blue => Rgb::new(80, 120, 220),
        ColorTag::Yellow => Rgb::new(240, 220, 80),
        ColorTag::Orange => Rgb::new(255, 165, 0),
        ColorTag::Gray => Rgb::new(128, 128, 128),
    }
}
