//! TUI Blockfill (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_blockfill::{core,input,term,types}` and holds the
//! pieces shared by both binaries: the cursor/selection [`app::App`], logging setup and
//! seed selection.

use std::time::{SystemTime, UNIX_EPOCH};

pub use tui_blockfill_core as core;
pub use tui_blockfill_input as input;
pub use tui_blockfill_term as term;
pub use tui_blockfill_types as types;

pub mod app;

/// Install `env_logger` on stderr; `RUST_LOG` overrides the default `warn` filter.
pub fn init_logging() {
    let env = env_logger::Env::default().default_filter_or("warn");
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}

/// Obstacle seed when `BLOCKFILL_SEED` is unset
pub fn seed_from_clock() -> u32 {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    (now.as_secs() as u32) ^ now.subsec_nanos()
}
