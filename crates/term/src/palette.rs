//! Colors and styles for the board view and the text renderer.

use crossterm::style::Color;

use crate::fb::{CellStyle, Rgb};
use crate::types::ColorTag;

pub const BACKGROUND: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0));
pub const BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
pub const HEADER: CellStyle = CellStyle::new(Rgb::new(130, 130, 140), Rgb::new(0, 0, 0));
pub const EMPTY: CellStyle = CellStyle::new(Rgb::new(80, 80, 90), Rgb::new(30, 30, 40));
pub const OBSTACLE: CellStyle = CellStyle::new(Rgb::new(150, 150, 150), Rgb::new(55, 55, 60));
pub const LABEL: CellStyle = CellStyle::new(Rgb::new(160, 160, 160), Rgb::new(0, 0, 0));
pub const VALUE: CellStyle = CellStyle::new(Rgb::new(240, 240, 240), Rgb::new(0, 0, 0)).bold();
pub const MESSAGE: CellStyle = CellStyle::new(Rgb::new(250, 210, 120), Rgb::new(0, 0, 0));
pub const HELP: CellStyle = CellStyle::new(Rgb::new(120, 120, 120), Rgb::new(0, 0, 0)).dim();
pub const CURSOR: CellStyle = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(30, 30, 40)).bold();
pub const OVERLAY: CellStyle = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();

/// Background tint for a preview cell that would be accepted
pub const PREVIEW_OK: Rgb = Rgb::new(40, 110, 60);

/// Background tint for a preview cell of a rejected placement
pub const PREVIEW_BAD: Rgb = Rgb::new(130, 40, 40);

/// Block color for a shape's tag
pub fn shape_rgb(tag: ColorTag) -> Rgb {
    match tag {
        ColorTag::Red => Rgb::new(220, 70, 70),
        ColorTag::Green => Rgb::new(80, 200, 90),
        ColorTag::Yellow => Rgb::new(230, 200, 60),
        ColorTag::Blue => Rgb::new(80, 130, 230),
        ColorTag::Magenta => Rgb::new(200, 90, 200),
    }
}

/// Style for a grid cell filled by a shape with the given tag
pub fn filled(tag: ColorTag) -> CellStyle {
    CellStyle::new(Rgb::new(15, 15, 15), shape_rgb(tag)).bold()
}

/// 16-color terminal equivalent of the tag, for line-mode output
pub fn ansi_color(tag: ColorTag) -> Color {
    match tag {
        ColorTag::Red => Color::DarkRed,
        ColorTag::Green => Color::DarkGreen,
        ColorTag::Yellow => Color::DarkYellow,
        ColorTag::Blue => Color::DarkBlue,
        ColorTag::Magenta => Color::DarkMagenta,
    }
}
