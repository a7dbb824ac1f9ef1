//! Terminal rendering module.
//!
//! This is a small, game-oriented rendering layer for terminal play.
//! It avoids widget/layout libraries and instead renders into a simple
//! framebuffer that can be flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep drawing pure: [`BoardView`] only maps a snapshot to cells
//! - Allow precise control over aspect ratio (3 chars wide per grid cell)
//!
//! [`text`] covers terminals driven line by line (the prompt front-end).

pub mod board_view;
pub mod fb;
pub mod palette;
pub mod renderer;
pub mod text;

pub use tui_blockfill_core as core;
pub use tui_blockfill_types as types;

pub use board_view::{BoardView, Hud, Viewport};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::TerminalRenderer;
pub use text::TextStyle;
