//! MatrixView: paints the emulated board into a framebuffer.
//!
//! Pure (no I/O), so it can be unit-tested.

use crate::core::{GameSession, GameState};
use crate::display::{Screen, TermDisplay};
use crate::fb::{palette, CellStyle, FrameBuffer};
use crate::types::{COLS, ROWS};

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

/// Side panel figures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusView {
    pub state: GameState,
    pub lines: u32,
    pub level: u32,
    pub lamp: bool,
}

impl StatusView {
    pub fn new(session: &GameSession, lamp: bool) -> Self {
        Self {
            state: session.state(),
            lines: session.cleared_rows(),
            level: session.level(),
            lamp,
        }
    }
}

const HELP: &str = "arrows move  up/z rotate  enter start  q quit";

pub struct MatrixView {
    /// LED width in terminal columns.
    cell_w: u16,
    /// LED height in terminal rows.
    cell_h: u16,
}

impl Default for MatrixView {
    fn default() -> Self {
        // 2x1 roughly squares the LEDs on common terminal fonts.
        Self { cell_w: 2, cell_h: 1 }
    }
}

impl MatrixView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Top-left corner of the bezel for `viewport`
    pub fn origin(&self, viewport: Viewport) -> (u16, u16) {
        let (frame_w, frame_h) = self.frame_size();
        (
            viewport.width.saturating_sub(frame_w) / 2,
            viewport.height.saturating_sub(frame_h) / 2,
        )
    }

    fn frame_size(&self) -> (u16, u16) {
        (
            COLS as u16 * self.cell_w + 2,
            ROWS as u16 * self.cell_h + 2,
        )
    }

    /// Render into a reused framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        display: &TermDisplay,
        status: &StatusView,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Default::default());

        let (x0, y0) = self.origin(viewport);
        let (frame_w, frame_h) = self.frame_size();
        let bezel = CellStyle::new(palette::BEZEL, palette::BACKGROUND);
        draw_border(fb, x0, y0, frame_w, frame_h, bezel);

        for y in 0..ROWS {
            for x in 0..COLS {
                let lit = matches!(display.screen(), Screen::Grid(bitmap) if bitmap[y][x]);
                self.draw_led(fb, x0, y0, x as u16, y as u16, lit);
            }
        }

        if let Screen::Text(marquee) = display.screen() {
            let width = display.window().min((frame_w - 2) as usize);
            let row = y0 + 1 + (ROWS as u16 / 2) * self.cell_h;
            let style = CellStyle::new(palette::LED_ON, palette::PANEL).bold();
            for col in 0..width {
                fb.put_char(x0 + 1 + col as u16, row, marquee.char_at(col, width), style);
            }
        }

        self.draw_panel(fb, status, viewport, x0 + frame_w + 2, y0);

        let help_y = y0.saturating_add(frame_h).saturating_add(1);
        if help_y < viewport.height {
            let x = viewport.width.saturating_sub(HELP.len() as u16) / 2;
            fb.put_str(x, help_y, HELP, CellStyle::new(palette::LABEL, palette::BACKGROUND));
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, display: &TermDisplay, status: &StatusView, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(display, status, viewport, &mut fb);
        fb
    }

    fn draw_led(&self, fb: &mut FrameBuffer, x0: u16, y0: u16, x: u16, y: u16, lit: bool) {
        let (ch, fg) = if lit {
            ('█', palette::LED_ON)
        } else {
            ('·', palette::LED_OFF)
        };
        let px = x0 + 1 + x * self.cell_w;
        let py = y0 + 1 + y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, CellStyle::new(fg, palette::PANEL));
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, status: &StatusView, viewport: Viewport, x: u16, y0: u16) {
        if x.saturating_add(8) > viewport.width {
            return;
        }
        let label = CellStyle::new(palette::LABEL, palette::BACKGROUND).bold();
        let value = CellStyle::default();

        let mut y = y0;
        fb.put_str(x, y, "LINES", label);
        fb.put_u32(x, y + 1, status.lines, value);
        y += 3;
        fb.put_str(x, y, "LEVEL", label);
        fb.put_u32(x, y + 1, status.level, value);
        y += 3;
        fb.put_str(x, y, "LAMP", label);
        let lamp = if status.lamp {
            palette::LAMP_ON
        } else {
            palette::LAMP_OFF
        };
        fb.put_char(x, y + 1, '●', CellStyle::new(lamp, palette::BACKGROUND));
        y += 3;
        fb.put_str(x, y, status.state.as_str(), value);
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Display;

    fn status(lamp: bool) -> StatusView {
        StatusView {
            state: GameState::Playing,
            lines: 12,
            level: 1,
            lamp,
        }
    }

    #[test]
    fn test_lit_led_painted_at_cell() {
        let view = MatrixView::default();
        let viewport = Viewport::new(40, 12);
        let mut display = TermDisplay::default();
        let mut bitmap = [[false; COLS]; ROWS];
        bitmap[6][4] = true;
        display.draw(&bitmap);

        let fb = view.render(&display, &status(false), viewport);
        let (x0, y0) = view.origin(viewport);
        let lit = fb.get(x0 + 1 + 4 * 2, y0 + 1 + 6).map(|c| c.ch);
        let dark = fb.get(x0 + 1, y0 + 1).map(|c| c.ch);
        assert_eq!(lit, Some('█'));
        assert_eq!(dark, Some('·'));
        assert_eq!(fb.get(x0, y0).map(|c| c.ch), Some('┌'));
    }

    #[test]
    fn test_marquee_on_middle_row() {
        let view = MatrixView::default();
        let viewport = Viewport::new(40, 12);
        let mut display = TermDisplay::new(1, 10);
        display.show_scrolling_text("GO");
        for _ in 0..10 {
            display.advance_frame();
        }

        let fb = view.render(&display, &status(false), viewport);
        let (_, y0) = view.origin(viewport);
        assert!(fb.row_text(y0 + 1 + 3).contains("GO"));
    }

    #[test]
    fn test_panel_shows_lines_and_lamp() {
        let view = MatrixView::default();
        let viewport = Viewport::new(40, 12);
        let fb = view.render(&TermDisplay::default(), &status(true), viewport);
        let (x0, y0) = view.origin(viewport);
        let panel_x = x0 + 12 + 2;

        assert!(fb.row_text(y0 + 1).contains("12"));
        let lamp = fb.get(panel_x, y0 + 7);
        assert_eq!(lamp.map(|c| c.ch), Some('●'));
        assert_eq!(lamp.map(|c| c.style.fg), Some(palette::LAMP_ON));
    }

    #[test]
    fn test_tiny_viewport_does_not_panic() {
        let view = MatrixView::default();
        let fb = view.render(&TermDisplay::default(), &status(false), Viewport::new(3, 2));
        assert_eq!(fb.cells().len(), 6);
    }
}
