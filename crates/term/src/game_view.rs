//! GameView: maps a `GameSnapshot` plus presentation state into a framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{CellPos, GameSnapshot, PlacementPreview, Shape};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{ColorTag, GameStatus, BATCH_SIZE, BOARD_SIZE};

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

/// Presentation state layered over the snapshot.
///
/// None of this is authoritative; it only decides what gets highlighted.
#[derive(Debug, Clone, Copy, Default)]
pub struct HudView<'a> {
    /// Board cursor as `(row, col)`
    pub cursor: (u8, u8),
    /// Selected tray slot
    pub selected: Option<usize>,
    pub show_preview: bool,
    pub preview: Option<&'a PlacementPreview>,
    /// Cells cleared by the last turn that are still flashing
    pub flash: &'a [CellPos],
    pub toast: Option<&'a str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Width of one tray slot in board cells.
const SLOT_CELLS: u16 = 5;
const SLOT_GAP: u16 = 2;

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// A lightweight terminal renderer for the block grid.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2 columns per cell keeps cells roughly square.
        Self {
            cell_w: 2,
            anchor_y: AnchorY::Center,
        }
    }
}

/// Terminal positions of the board frame and the tray.
#[derive(Debug, Clone, Copy)]
struct Layout {
    x: u16,
    y: u16,
    frame_w: u16,
    frame_h: u16,
    tray_x: u16,
    tray_w: u16,
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        hud: &HudView<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::fg(Rgb::new(220, 220, 220)).into_cell(' '));

        let layout = self.layout(viewport);

        fb.fill_rect(
            layout.x + 1,
            layout.y + 1,
            layout.frame_w - 2,
            layout.frame_h - 2,
            ' ',
            CellStyle::fg(Rgb::new(80, 80, 90)).on(BOARD_BG),
        );
        draw_border(
            fb,
            layout,
            CellStyle::fg(Rgb::new(200, 200, 200)).on(PANEL_BG),
        );

        self.draw_board(fb, layout, snap, hud);
        self.draw_tray(fb, layout, snap, hud.selected);
        self.draw_side_panel(fb, layout, viewport, snap, hud);

        if snap.status == GameStatus::GameOver {
            draw_overlay(fb, layout, "GAME OVER", "R TO RESTART");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, hud: &HudView<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, hud, viewport, &mut fb);
        fb
    }

    /// Terminal position of board cell `(row, col)`.
    pub fn cell_origin(&self, viewport: Viewport, row: u8, col: u8) -> (u16, u16) {
        let layout = self.layout(viewport);
        self.cell_xy(layout, row, col)
    }

    fn layout(&self, viewport: Viewport) -> Layout {
        let frame_w = BOARD_SIZE as u16 * self.cell_w + 2;
        let frame_h = BOARD_SIZE as u16 + 2;
        // Board frame, tray label row and the tallest tray piece.
        let total_h = frame_h + 1 + SLOT_CELLS;

        let x = viewport.width.saturating_sub(frame_w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(total_h) / 2,
            AnchorY::Top => 0,
        };

        let slot_w = SLOT_CELLS * self.cell_w;
        let tray_w = BATCH_SIZE as u16 * slot_w + (BATCH_SIZE as u16 - 1) * SLOT_GAP;
        let tray_x = (x + frame_w / 2).saturating_sub(tray_w / 2);
        Layout {
            x,
            y,
            frame_w,
            frame_h,
            tray_x,
            tray_w,
        }
    }

    fn cell_xy(&self, layout: Layout, row: u8, col: u8) -> (u16, u16) {
        (
            layout.x + 1 + col as u16 * self.cell_w,
            layout.y + 1 + row as u16,
        )
    }

    fn paint_cell(&self, fb: &mut FrameBuffer, layout: Layout, row: u8, col: u8, ch: char, style: CellStyle) {
        let (x, y) = self.cell_xy(layout, row, col);
        fb.fill_rect(x, y, self.cell_w, 1, ch, style);
    }

    fn draw_board(&self, fb: &mut FrameBuffer, layout: Layout, snap: &GameSnapshot, hud: &HudView<'_>) {
        let preview = hud.preview.filter(|_| hud.show_preview);

        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let highlight = preview.is_some_and(|p| p.would_clear(row, col));
                match snap.board[row as usize][col as usize] {
                    Some(color) => {
                        let mut style = CellStyle::fg(color_rgb(color)).on(BOARD_BG);
                        if highlight {
                            style = style.on(Rgb::new(90, 90, 60)).bold();
                        }
                        self.paint_cell(fb, layout, row, col, '█', style);
                    }
                    None => {
                        let bg = if highlight { Rgb::new(60, 60, 40) } else { BOARD_BG };
                        let style = CellStyle::fg(Rgb::new(90, 90, 100)).on(bg).dim();
                        self.paint_cell(fb, layout, row, col, '·', style);
                    }
                }
            }
        }

        if let Some(p) = preview {
            let (ch, fg) = if p.valid {
                ('▓', Rgb::new(100, 220, 120))
            } else {
                ('░', Rgb::new(230, 70, 70))
            };
            for &(row, col) in &p.cells {
                self.paint_cell(fb, layout, row, col, ch, CellStyle::fg(fg).on(BOARD_BG));
            }
        }

        let flash = CellStyle::fg(Rgb::new(255, 255, 255)).on(BOARD_BG).bold();
        for &(row, col) in hud.flash {
            if row < BOARD_SIZE && col < BOARD_SIZE {
                self.paint_cell(fb, layout, row, col, '█', flash);
            }
        }

        if preview.is_none() && snap.status == GameStatus::Playing {
            let (row, col) = hud.cursor;
            if row < BOARD_SIZE && col < BOARD_SIZE {
                let (x, y) = self.cell_xy(layout, row, col);
                let style = CellStyle::fg(Rgb::new(250, 220, 80)).on(BOARD_BG).bold();
                fb.put_char(x, y, '[', style);
                fb.put_char(x + self.cell_w - 1, y, ']', style);
            }
        }
    }

    fn draw_tray(&self, fb: &mut FrameBuffer, layout: Layout, snap: &GameSnapshot, selected: Option<usize>) {
        let slot_w = SLOT_CELLS * self.cell_w;
        let label_y = layout.y + layout.frame_h;

        let label = CellStyle::fg(Rgb::new(160, 160, 170));
        for (i, shape) in snap.pieces.iter().enumerate() {
            let slot_x = layout.tray_x + i as u16 * (slot_w + SLOT_GAP);
            let n = i as u32 + 1;
            if selected == Some(i) {
                let style = CellStyle::fg(Rgb::new(250, 220, 80)).bold();
                fb.put_char(slot_x, label_y, '[', style);
                let end = fb.put_u32(slot_x + 1, label_y, n, style);
                fb.put_char(end, label_y, ']', style);
            } else {
                fb.put_u32(slot_x + 1, label_y, n, label);
            }
            self.draw_tray_piece(fb, slot_x, label_y + 1, shape);
        }
    }

    fn draw_tray_piece(&self, fb: &mut FrameBuffer, x: u16, y: u16, shape: &Shape) {
        let style = CellStyle::fg(color_rgb(shape.color));
        for &(dr, dc) in shape.cells() {
            let px = x + dc as u16 * self.cell_w;
            let py = y + dr as u16;
            fb.fill_rect(px, py, self.cell_w, 1, '█', style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        layout: Layout,
        viewport: Viewport,
        snap: &GameSnapshot,
        hud: &HudView<'_>,
    ) {
        let right = (layout.x + layout.frame_w).max(layout.tray_x + layout.tray_w);
        let panel_x = right.saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::fg(Rgb::new(220, 220, 220)).bold();
        let value = CellStyle::fg(Rgb::new(200, 200, 200));

        let mut y = layout.y;
        for (name, v) in [
            ("SCORE", snap.score),
            ("BEST", snap.high_score),
            ("STREAK", snap.streak),
            ("LINES", snap.lines_cleared),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y + 1, v, value);
            y = y.saturating_add(2);
        }

        fb.put_str(panel_x, y, "PREVIEW", label);
        fb.put_str(
            panel_x + 8,
            y,
            if hud.show_preview { "ON" } else { "OFF" },
            value.dim(),
        );
        y = y.saturating_add(2);

        if let Some(msg) = hud.toast {
            fb.put_str(panel_x, y, msg, CellStyle::fg(Rgb::new(250, 220, 80)).bold());
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, layout: Layout, style: CellStyle) {
    let Layout {
        x,
        y,
        frame_w: w,
        frame_h: h,
        ..
    } = layout;

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

fn draw_overlay(fb: &mut FrameBuffer, layout: Layout, title: &str, hint: &str) {
    let mid_y = layout.y + layout.frame_h / 2;
    let style = CellStyle::fg(Rgb::new(255, 255, 255)).on(PANEL_BG).bold();
    for (dy, text) in [(0, title), (1, hint)] {
        let text_w = text.chars().count() as u16;
        let x = layout.x + layout.frame_w.saturating_sub(text_w) / 2;
        fb.put_str(x, mid_y - 1 + dy, text, style);
    }
}

/// Display color for a cell tag.
pub fn color_rgb(color: ColorTag) -> Rgb {
    match color {
        ColorTag::Red => Rgb::new(220, 80, 80),
        ColorTag::Orange => Rgb::new(255, 165, 0),
        ColorTag::Yellow => Rgb::new(240, 220, 80),
        ColorTag::Green => Rgb::new(100, 220, 120),
        ColorTag::Cyan => Rgb::new(80, 220, 220),
        ColorTag::Blue => Rgb::new(80, 120, 220),
        ColorTag::Purple => Rgb::new(200, 120, 220),
    }
}
