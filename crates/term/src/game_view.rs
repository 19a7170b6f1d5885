//! GameView: maps a core `GameSnapshot` into a terminal frame.
//!
//! This module is pure (no I/O), so it can be unit-tested by inspecting the
//! produced frame. It also owns the figure palette: the simulation deals in
//! color indices only, and this is where indices become actual colors.

use glassfall_core::GameSnapshot;
use glassfall_types::PALETTE_LEN;

use crate::fb::{Frame, Rgb, Style};

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

/// Map a palette index to its display color.
///
/// Magenta, green, yellow. Indices wrap so an out-of-range index still
/// renders rather than panicking.
pub fn palette_color(index: u8) -> Rgb {
    match index % PALETTE_LEN {
        0 => Rgb::new(255, 0, 255),
        1 => Rgb::new(0, 255, 0),
        _ => Rgb::new(255, 255, 0),
    }
}

/// Vertical anchoring of the glass within the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// A lightweight terminal view for the game.
pub struct GameView {
    /// Glass cell width in terminal columns.
    cell_w: u16,
    /// Glass cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w,
            cell_h,
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render a snapshot into an existing frame.
    ///
    /// This is the allocation-free hot path: callers reuse one frame across
    /// draws and it is only resized when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut Frame) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Style::default().glyph(' '));

        let glass_px_w = (snap.width as u16) * self.cell_w;
        let glass_px_h = (snap.height as u16) * self.cell_h;
        let frame_w = glass_px_w + 2;
        let frame_h = glass_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let bg = Style {
            fg: Rgb::new(80, 80, 90),
            bg: Rgb::new(30, 30, 40),
            bold: false,
            dim: false,
        };
        let border = Style {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        // Play area background and grid dots.
        fb.fill_rect(start_x + 1, start_y + 1, glass_px_w, glass_px_h, ' ', bg);
        for y in 0..snap.height as u16 {
            for x in 0..snap.width as u16 {
                self.draw_empty_cell(fb, start_x, start_y, x, y);
            }
        }

        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Locked cells, then the falling figure on top.
        for cell in &snap.locked {
            self.draw_glass_cell(fb, start_x, start_y, cell.x, cell.y, cell.color);
        }
        for cell in &snap.figure {
            self.draw_glass_cell(fb, start_x, start_y, cell.x, cell.y, cell.color);
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        if snap.game_over {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new frame.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> Frame {
        let mut fb = Frame::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut Frame, x: u16, y: u16, w: u16, h: u16, style: Style) {
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

    fn draw_empty_cell(&self, fb: &mut Frame, start_x: u16, start_y: u16, x: u16, y: u16) {
        let style = Style {
            fg: Rgb::new(90, 90, 100),
            bg: Rgb::new(30, 30, 40),
            bold: false,
            dim: true,
        };
        self.fill_cell_rect(fb, start_x, start_y, x, y, '·', style);
    }

    fn draw_glass_cell(&self, fb: &mut Frame, start_x: u16, start_y: u16, x: i8, y: i8, color: u8) {
        if x < 0 || y < 0 {
            return;
        }
        let style = Style {
            fg: palette_color(color),
            bg: Rgb::new(30, 30, 40),
            bold: true,
            dim: false,
        };
        self.fill_cell_rect(fb, start_x, start_y, x as u16, y as u16, '█', style);
    }

    fn fill_cell_rect(
        &self,
        fb: &mut Frame,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: Style,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut Frame,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = Style {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = Style {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);

        // Preview cells in their local grid, one panel row per cell row.
        for cell in &snap.preview {
            if cell.x < 0 || cell.y < 0 {
                continue;
            }
            let px = panel_x + (cell.x as u16) * self.cell_w;
            let py = y.saturating_add((cell.y as u16) * self.cell_h);
            if py >= viewport.height {
                continue;
            }
            let style = Style {
                fg: palette_color(cell.color),
                bg: Rgb::new(0, 0, 0),
                bold: false,
                dim: false,
            };
            fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut Frame,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = Style {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        fb.put_str(x, mid_y, text, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glassfall_core::Cell;

    fn frame_text(frame: &Frame) -> Vec<String> {
        (0..frame.height())
            .map(|y| {
                (0..frame.width())
                    .map(|x| frame.get(x, y).unwrap().ch)
                    .collect()
            })
            .collect()
    }

    fn sample_snapshot() -> GameSnapshot {
        let mut snap = GameSnapshot {
            width: 10,
            height: 20,
            score: 410,
            ..GameSnapshot::default()
        };
        snap.locked.push(Cell::new(0, 19, 0));
        snap.figure.push(Cell::new(4, 0, 1));
        snap.preview.push(Cell::new(0, 0, 2));
        snap.preview.push(Cell::new(1, 0, 2));
        snap
    }

    #[test]
    fn renders_border_and_panel() {
        let view = GameView::default();
        let frame = view.render(&sample_snapshot(), Viewport::new(60, 24));

        let text = frame_text(&frame);
        let all: String = text.join("\n");
        assert!(all.contains('┌'));
        assert!(all.contains('┘'));
        assert!(all.contains("SCORE"));
        assert!(all.contains("NEXT"));
        assert!(all.contains("410"));
        assert!(all.contains('█'));
    }

    #[test]
    fn game_over_overlay_is_drawn_only_when_flagged() {
        let view = GameView::default();
        let mut snap = sample_snapshot();

        let frame = view.render(&snap, Viewport::new(60, 24));
        assert!(!frame_text(&frame).join("\n").contains("GAME OVER"));

        snap.game_over = true;
        let frame = view.render(&snap, Viewport::new(60, 24));
        assert!(frame_text(&frame).join("\n").contains("GAME OVER"));
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let view = GameView::default();
        let _ = view.render(&sample_snapshot(), Viewport::new(5, 3));
    }

    #[test]
    fn palette_wraps_out_of_range_indices() {
        assert_eq!(palette_color(0), palette_color(PALETTE_LEN));
        assert_ne!(palette_color(0), palette_color(1));
    }
}
