//! Terminal block-fill runner (default binary).
//!
//! Full-screen play: crossterm for input and the framebuffer-based renderer.
//! The loop blocks on the next terminal event; nothing happens between key presses.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use tui_blockfill::app::App;
use tui_blockfill::core::{Game, GameConfig};
use tui_blockfill::input::{handle_key_event, should_quit};
use tui_blockfill::term::{BoardView, FrameBuffer, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    tui_blockfill::init_logging();

    let config = GameConfig::from_env();
    let seed = config.seed.unwrap_or_else(tui_blockfill::seed_from_clock);
    info!("starting with seed {}", seed);
    let game = Game::with_config(config, seed);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, App::new(game));

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, mut app: App) -> Result<()> {
    let view = BoardView::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&app.snapshot(), &app.hud(), Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    app.apply(action);
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}
