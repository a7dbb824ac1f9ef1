//! BoardView: maps a `core::GameSnapshot` plus cursor state into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, top to bottom: column numbers, the framed 6x6 grid (row numbers on the left,
//! status panel on the right when there is room), the shape tray, a message line and a
//! key help line. The block is centered in the viewport.

use crate::core::{GameSnapshot, Shape, ShapeToken};
use crate::fb::{CellStyle, FrameBuffer};
use crate::palette;
use crate::types::{CellState, Coord, ShapeKind, GRID_HEIGHT, GRID_WIDTH, MAX_SHAPE_SIDE};

/// Columns reserved left of the frame for row numbers
const ROW_LABEL_W: u16 = 2;
const PANEL_GAP: u16 = 2;
const PANEL_W: u16 = 12;
/// Tray slot: two terminal columns per shape cell plus a gap
const TRAY_SLOT_W: u16 = (MAX_SHAPE_SIDE as u16) * 2 + 2;
const TRAY_H: u16 = 1 + MAX_SHAPE_SIDE as u16;
const HELP: &str = "arrows move  T S L D Z pick  [ ] rotate  enter place  N new  Q quit";

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

/// Front-end state drawn on top of the snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hud<'a> {
    /// Anchor under the cursor
    pub cursor: Coord,
    pub selected: ShapeKind,
    /// Whether the selected shape would be accepted at the cursor
    pub fits: bool,
    pub message: &'a str,
}

/// Screen positions derived from the viewport
#[derive(Debug, Clone, Copy)]
struct Layout {
    origin_x: u16,
    origin_y: u16,
    frame_x: u16,
    frame_y: u16,
    frame_w: u16,
    frame_h: u16,
}

/// Terminal renderer for the puzzle board.
pub struct BoardView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
}

impl Default for BoardView {
    fn default() -> Self {
        // 3x1 leaves room for a centered label and roughly squares the cells.
        Self {
            cell_w: 3,
            cell_h: 1,
        }
    }
}

impl BoardView {
    /// Size of the whole drawn block (width, height)
    pub fn content_size(&self) -> (u16, u16) {
        let (frame_w, frame_h) = self.frame_size();
        let board_w = ROW_LABEL_W + frame_w;
        let w = (board_w + PANEL_GAP + PANEL_W).max(TRAY_SLOT_W * ShapeKind::ALL.len() as u16);
        let h = 1 + frame_h + 1 + TRAY_H + 1 + 2;
        (w, h)
    }

    fn frame_size(&self) -> (u16, u16) {
        (
            GRID_WIDTH as u16 * self.cell_w + 2,
            GRID_HEIGHT as u16 * self.cell_h + 2,
        )
    }

    fn layout(&self, viewport: Viewport) -> Layout {
        let (content_w, content_h) = self.content_size();
        let (frame_w, frame_h) = self.frame_size();
        let origin_x = viewport.width.saturating_sub(content_w) / 2;
        let origin_y = viewport.height.saturating_sub(content_h) / 2;
        Layout {
            origin_x,
            origin_y,
            frame_x: origin_x + ROW_LABEL_W,
            frame_y: origin_y + 1,
            frame_w,
            frame_h,
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        hud: &Hud<'_>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(palette::BACKGROUND.cell(' '));

        let layout = self.layout(viewport);

        self.draw_headers(fb, &layout);
        draw_border(
            fb,
            layout.frame_x,
            layout.frame_y,
            layout.frame_w,
            layout.frame_h,
            palette::BORDER,
        );

        for (row, cells) in snap.board.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                self.draw_cell(fb, &layout, snap, row as u16, col as u16, *cell);
            }
        }

        if !snap.won() {
            self.draw_preview(fb, &layout, snap.shape(hud.selected), hud);
        }

        self.draw_panel(fb, &layout, snap, hud, viewport);

        let tray_y = layout.frame_y + layout.frame_h + 1;
        self.draw_tray(fb, layout.origin_x, tray_y, snap, hud.selected);

        let message_y = tray_y + TRAY_H + 1;
        fb.put_str(layout.origin_x, message_y, hud.message, palette::MESSAGE);
        fb.put_str(layout.origin_x, message_y + 1, HELP, palette::HELP);

        if snap.won() {
            draw_overlay_text(fb, &layout, "SOLVED!", 0);
            draw_overlay_text(fb, &layout, "press N", 1);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, hud: &Hud<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, hud, viewport, &mut fb);
        fb
    }

    fn draw_headers(&self, fb: &mut FrameBuffer, layout: &Layout) {
        for col in 0..GRID_WIDTH as u16 {
            let x = layout.frame_x + 1 + col * self.cell_w + self.cell_w / 2;
            fb.put_u32(x, layout.origin_y, col as u32, palette::HEADER);
        }
        for row in 0..GRID_HEIGHT as u16 {
            let y = layout.frame_y + 1 + row * self.cell_h + self.cell_h / 2;
            fb.put_u32(layout.origin_x, y, row as u32, palette::HEADER);
        }
    }

    fn draw_cell(
        &self,
        fb: &mut FrameBuffer,
        layout: &Layout,
        snap: &GameSnapshot,
        row: u16,
        col: u16,
        cell: CellState,
    ) {
        match cell {
            CellState::Empty => self.fill_cell(fb, layout, row, col, ' ', '·', palette::EMPTY),
            CellState::Obstacle => {
                self.fill_cell(fb, layout, row, col, '▓', '▓', palette::OBSTACLE)
            }
            CellState::Filled(kind) => {
                let style = palette::filled(snap.shape(kind).color());
                self.fill_cell(fb, layout, row, col, ' ', kind.label(), style);
            }
        }
    }

    fn draw_preview(&self, fb: &mut FrameBuffer, layout: &Layout, shape: &Shape, hud: &Hud<'_>) {
        let tint = if hud.fits {
            palette::PREVIEW_OK
        } else {
            palette::PREVIEW_BAD
        };
        let style = palette::CURSOR.on(tint);

        let mut covers_anchor = false;
        for (dr, dc) in shape.footprint() {
            covers_anchor |= dr == 0 && dc == 0;
            if let Some(coord) = hud.cursor.offset(dr as i32, dc as i32) {
                if coord.in_bounds() {
                    let (row, col) = (coord.row as u16, coord.col as u16);
                    self.fill_cell(fb, layout, row, col, ' ', shape.label(), style);
                }
            }
        }

        // Anchor corner of a footprint that leaves (0, 0) uncovered
        if !covers_anchor && hud.cursor.in_bounds() {
            let (x, y) = self.cell_center(layout, hud.cursor.row as u16, hud.cursor.col as u16);
            fb.put_char(x, y, '+', palette::CURSOR);
        }
    }

    fn draw_panel(
        &self,
        fb: &mut FrameBuffer,
        layout: &Layout,
        snap: &GameSnapshot,
        hud: &Hud<'_>,
        viewport: Viewport,
    ) {
        let panel_x = layout.frame_x + layout.frame_w + PANEL_GAP;
        if panel_x.saturating_add(PANEL_W) > viewport.width {
            return;
        }

        let mut y = layout.frame_y;
        let rows: [(&str, u32); 3] = [
            ("ROUND", snap.round),
            ("PLACED", snap.placements),
            ("EMPTY", snap.empty_count as u32),
        ];
        for (label, value) in rows {
            fb.put_str(panel_x, y, label, palette::LABEL);
            fb.put_u32(panel_x + 7, y, value, palette::VALUE);
            y += 1;
        }

        y += 1;
        fb.put_str(panel_x, y, "SHAPE", palette::LABEL);
        fb.put_char(panel_x + 7, y, hud.selected.label(), palette::VALUE);
        y += 1;
        fb.put_str(panel_x, y, "AT", palette::LABEL);
        put_coord(fb, panel_x + 7, y, hud.cursor);
    }

    fn draw_tray(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        snap: &GameSnapshot,
        selected: ShapeKind,
    ) {
        for (i, shape) in snap.shapes.iter().enumerate() {
            let slot_x = x + i as u16 * TRAY_SLOT_W;
            let kind = shape.kind();
            if kind == selected {
                fb.put_char(slot_x, y, '>', palette::VALUE);
                fb.put_char(slot_x + 1, y, kind.label(), palette::VALUE);
            } else {
                fb.put_char(slot_x + 1, y, kind.label(), palette::LABEL);
            }

            let block = CellStyle::new(palette::shape_rgb(shape.color()), palette::BACKGROUND.bg);
            for (r, row) in shape.rows().enumerate() {
                for (c, token) in row.enumerate() {
                    if let ShapeToken::Filled(_) = token {
                        let px = slot_x + 1 + c as u16 * 2;
                        let py = y + 1 + r as u16;
                        fb.put_str(px, py, "██", block);
                    }
                }
            }
        }
    }

    fn cell_center(&self, layout: &Layout, row: u16, col: u16) -> (u16, u16) {
        let px = layout.frame_x + 1 + col * self.cell_w;
        let py = layout.frame_y + 1 + row * self.cell_h;
        (px + self.cell_w / 2, py + self.cell_h / 2)
    }

    /// Fill one grid cell with `fill`, then put `glyph` at its center
    #[allow(clippy::too_many_arguments)]
    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        layout: &Layout,
        row: u16,
        col: u16,
        fill: char,
        glyph: char,
        style: CellStyle,
    ) {
        let px = layout.frame_x + 1 + col * self.cell_w;
        let py = layout.frame_y + 1 + row * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, fill, style);
        let (cx, cy) = self.cell_center(layout, row, col);
        fb.put_char(cx, cy, glyph, style);
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

/// Centered text on the frame, `line` rows below its middle
fn draw_overlay_text(fb: &mut FrameBuffer, layout: &Layout, text: &str, line: u16) {
    let y = layout.frame_y + layout.frame_h / 2 - 1 + line;
    let text_w = text.chars().count() as u16;
    let x = layout.frame_x + layout.frame_w.saturating_sub(text_w) / 2;
    fb.put_str(x, y, text, palette::OVERLAY);
}

fn put_coord(fb: &mut FrameBuffer, x: u16, y: u16, coord: Coord) {
    fb.put_u32(x, y, coord.row.max(0) as u32, palette::VALUE);
    fb.put_char(x + 1, y, ',', palette::VALUE);
    fb.put_u32(x + 2, y, coord.col.max(0) as u32, palette::VALUE);
}
