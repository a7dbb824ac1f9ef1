//! Input module.
//!
//! Two front-end flavors share the same vocabulary:
//!
//! - [`map`]: `crossterm` key events → [`crate::types::GameAction`] for the full-screen game
//! - [`command`]: typed lines → shape kinds, directions and coordinates for the prompt game
//!
//! Neither holds state; both just translate input into core requests.

pub mod command;
pub mod map;

pub use tui_blockfill_core as core;
pub use tui_blockfill_types as types;

pub use command::{parse_coordinate, parse_direction, parse_shape, parse_yes};
pub use map::{handle_key_event, should_quit};
