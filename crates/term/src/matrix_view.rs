//! MatrixView: maps a `core::RenderSnapshot` into a terminal framebuffer.
//!
//! Emulates an 8x8 RGB LED matrix: each LED becomes a small block of
//! terminal cells (2x1 by default, to compensate for glyph aspect ratio)
//! inside a border. This module is pure (no I/O) and can be unit-tested.

use crate::core::RenderSnapshot;
use crate::fb::{CellStyle, FrameBuffer};
use crate::types::{Rgb, VISIBLE_HEIGHT, WIDTH};

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

const GREY: Rgb = Rgb::new(180, 180, 180);
const RED: Rgb = Rgb::new(255, 0, 0);
const MATRIX_BG: Rgb = Rgb::new(20, 20, 26);

/// Attract-mode animation: "PR" / "ESS" / a blinking start button, one
/// second per image at the normal frame rate.
const ATTRACT_IMAGE_FRAMES: u32 = 10;
const ATTRACT_IMAGES: [[[u8; 8]; 8]; 3] = [
    // "PR"
    [
        [1, 1, 1, 0, 0, 0, 0, 0],
        [1, 0, 0, 1, 0, 0, 0, 0],
        [1, 0, 0, 1, 0, 1, 0, 1],
        [1, 1, 1, 0, 0, 1, 1, 0],
        [1, 0, 0, 0, 0, 1, 0, 0],
        [1, 0, 0, 0, 0, 1, 0, 0],
        [1, 0, 0, 0, 0, 1, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0],
    ],
    // "ESS"
    [
        [0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0],
        [1, 1, 0, 1, 1, 0, 1, 1],
        [1, 0, 0, 1, 0, 0, 1, 0],
        [1, 1, 0, 1, 1, 0, 1, 1],
        [1, 0, 0, 0, 1, 0, 0, 1],
        [1, 1, 0, 1, 1, 0, 1, 1],
        [0, 0, 0, 0, 0, 0, 0, 0],
    ],
    // Start button
    [
        [0, 0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 1, 1, 0, 0, 0],
        [0, 0, 0, 1, 1, 0, 0, 0],
        [0, 0, 0, 1, 1, 0, 0, 0],
        [0, 2, 2, 1, 1, 2, 2, 0],
        [2, 2, 2, 2, 2, 2, 2, 2],
        [0, 0, 2, 2, 2, 2, 0, 0],
        [0, 0, 0, 0, 0, 0, 0, 0],
    ],
];

/// A lightweight terminal view of the LED matrix.
pub struct MatrixView {
    /// LED width in terminal columns.
    led_w: u16,
    /// LED height in terminal rows.
    led_h: u16,
}

impl Default for MatrixView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self { led_w: 2, led_h: 1 }
    }
}

impl MatrixView {
    pub fn new(led_w: u16, led_h: u16) -> Self {
        Self { led_w, led_h }
    }

    fn frame_size(&self) -> (u16, u16) {
        (
            u16::from(WIDTH) * self.led_w + 2,
            u16::from(VISIBLE_HEIGHT) * self.led_h + 2,
        )
    }

    fn frame_origin(&self, viewport: Viewport) -> (u16, u16) {
        let (fw, fh) = self.frame_size();
        (
            viewport.width.saturating_sub(fw) / 2,
            // Leave two rows below the frame for score/prompt text.
            viewport.height.saturating_sub(fh + 2) / 2,
        )
    }

    /// Render the playfield snapshot into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(
        &self,
        snap: &RenderSnapshot,
        score: u32,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        self.render_matrix(viewport, fb, |x, y| snap.get(x, y));

        let (_, fh) = self.frame_size();
        let (start_x, start_y) = self.frame_origin(viewport);
        self.put_centered(fb, start_x, start_y + fh + 1, &score_line(score));
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &RenderSnapshot, score: u32, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, score, viewport, &mut fb);
        fb
    }

    /// Game-over screen: a red cross over the matrix plus the final score.
    pub fn render_game_over_into(&self, score: u32, viewport: Viewport, fb: &mut FrameBuffer) {
        self.render_matrix(viewport, fb, |x, y| {
            // Both diagonals of the 8x8 display.
            if x == y || u16::from(x) + u16::from(y) == u16::from(WIDTH) - 1 {
                Some(RED)
            } else {
                None
            }
        });

        let (_, fh) = self.frame_size();
        let (start_x, start_y) = self.frame_origin(viewport);
        self.put_centered(fb, start_x, start_y.saturating_sub(1), "GAME OVER");
        self.put_centered(fb, start_x, start_y + fh + 1, &score_line(score));
        self.put_centered(fb, start_x, start_y + fh + 2, "PRESS ANY KEY");
    }

    /// Attract screen: cycles the "PRESS"/button animation. `frame` is the
    /// caller's running frame counter.
    pub fn render_attract_into(&self, frame: u32, viewport: Viewport, fb: &mut FrameBuffer) {
        let image =
            &ATTRACT_IMAGES[((frame / ATTRACT_IMAGE_FRAMES) as usize) % ATTRACT_IMAGES.len()];
        self.render_matrix(viewport, fb, |x, y| match image[y as usize][x as usize] {
            1 => Some(GREY),
            2 => Some(RED),
            _ => None,
        });

        let (_, fh) = self.frame_size();
        let (start_x, start_y) = self.frame_origin(viewport);
        self.put_centered(fb, start_x, start_y + fh + 1, "PRESS ANY KEY TO START");
        self.put_centered(fb, start_x, start_y + fh + 2, "Q TO QUIT");
    }

    /// Shared scaffolding: clear, border, and one styled block per LED.
    fn render_matrix(
        &self,
        viewport: Viewport,
        fb: &mut FrameBuffer,
        pixel: impl Fn(u8, u8) -> Option<Rgb>,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (fw, fh) = self.frame_size();
        let (start_x, start_y) = self.frame_origin(viewport);

        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        draw_border(fb, start_x, start_y, fw, fh, border);

        for y in 0..VISIBLE_HEIGHT {
            for x in 0..WIDTH {
                let (style, ch) = match pixel(x, y) {
                    Some(color) => (
                        CellStyle {
                            fg: color,
                            bg: MATRIX_BG,
                            bold: false,
                            dim: false,
                        },
                        '█',
                    ),
                    None => (
                        CellStyle {
                            fg: Rgb::new(70, 70, 80),
                            bg: MATRIX_BG,
                            bold: false,
                            dim: true,
                        },
                        '·',
                    ),
                };
                fb.fill_rect(
                    start_x + 1 + u16::from(x) * self.led_w,
                    start_y + 1 + u16::from(y) * self.led_h,
                    self.led_w,
                    self.led_h,
                    ch,
                    style,
                );
            }
        }
    }

    fn put_centered(&self, fb: &mut FrameBuffer, frame_x: u16, y: u16, text: &str) {
        let (fw, _) = self.frame_size();
        let tx = frame_x + fw.saturating_sub(text.len() as u16) / 2;
        fb.put_str(tx, y, text, CellStyle::default());
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

fn score_line(score: u32) -> String {
    format!("SCORE {score}")
}

#[cfg(test)]
mod tests {
    use super::*;

    const VP: Viewport = Viewport {
        width: 60,
        height: 24,
    };

    fn lit_cells(fb: &FrameBuffer) -> usize {
        fb.cells().iter().filter(|c| c.ch == '█').count()
    }

    #[test]
    fn test_dark_snapshot_renders_all_leds_unlit() {
        let view = MatrixView::default();
        let snap = RenderSnapshot::default();
        let fb = view.render(&snap, 0, VP);
        assert_eq!(lit_cells(&fb), 0);
        // 8x8 LEDs at 2x1 cells each.
        assert_eq!(fb.cells().iter().filter(|c| c.ch == '·').count(), 128);
        assert!(contains_text(&fb, "SCORE 0"));
    }

    #[test]
    fn test_game_over_draws_red_cross() {
        let view = MatrixView::default();
        let mut fb = FrameBuffer::new(VP.width, VP.height);
        view.render_game_over_into(3, VP, &mut fb);

        // Two diagonals of 8 LEDs, 2 columns each, overlapping nowhere on
        // an even-sized matrix: 32 lit terminal cells.
        assert_eq!(lit_cells(&fb), 32);
        assert!(fb
            .cells()
            .iter()
            .filter(|c| c.ch == '█')
            .all(|c| c.style.fg == RED));
        assert!(contains_text(&fb, "GAME OVER"));
        assert!(contains_text(&fb, "SCORE 3"));
    }

    #[test]
    fn test_attract_cycles_three_images() {
        let view = MatrixView::default();
        let a = {
            let mut fb = FrameBuffer::new(VP.width, VP.height);
            view.render_attract_into(0, VP, &mut fb);
            fb
        };
        let b = {
            let mut fb = FrameBuffer::new(VP.width, VP.height);
            view.render_attract_into(10, VP, &mut fb);
            fb
        };
        let c = {
            let mut fb = FrameBuffer::new(VP.width, VP.height);
            view.render_attract_into(20, VP, &mut fb);
            fb
        };
        let wrapped = {
            let mut fb = FrameBuffer::new(VP.width, VP.height);
            view.render_attract_into(30, VP, &mut fb);
            fb
        };

        assert_ne!(a.cells(), b.cells());
        assert_ne!(b.cells(), c.cells());
        assert_eq!(a.cells(), wrapped.cells());
        assert!(contains_text(&a, "PRESS ANY KEY TO START"));
    }

    #[test]
    fn test_button_image_has_red_pixels() {
        let view = MatrixView::default();
        let mut fb = FrameBuffer::new(VP.width, VP.height);
        view.render_attract_into(20, VP, &mut fb);
        assert!(fb
            .cells()
            .iter()
            .any(|c| c.ch == '█' && c.style.fg == RED));
    }

    #[test]
    fn test_render_fits_small_viewport_without_panicking() {
        let view = MatrixView::default();
        let snap = RenderSnapshot::default();
        let fb = view.render(&snap, 0, Viewport::new(4, 3));
        assert_eq!((fb.width(), fb.height()), (4, 3));
    }

    fn contains_text(fb: &FrameBuffer, text: &str) -> bool {
        for y in 0..fb.height() {
            let row: String = (0..fb.width())
                .map(|x| fb.get(x, y).map(|c| c.ch).unwrap_or(' '))
                .collect();
            if row.contains(text) {
                return true;
            }
        }
        false
    }
}
