//! Full-screen front-end state: the anchor cursor, the selected shape and the status line.
//!
//! `App` turns [`GameAction`]s into calls on [`Game`] and keeps the text shown under
//! the board. It performs no I/O, so key handling can be tested without a terminal.

use log::debug;

use crate::core::{Game, GameSnapshot};
use crate::term::Hud;
use crate::types::{Coord, Direction, GameAction, ShapeKind, GRID_HEIGHT, GRID_WIDTH};

pub struct App {
    game: Game,
    cursor: Coord,
    selected: ShapeKind,
    message: String,
}

impl App {
    pub fn new(game: Game) -> Self {
        let mut app = Self {
            game,
            cursor: Coord::new(0, 0),
            selected: ShapeKind::T,
            message: String::new(),
        };
        app.set_round_message();
        app
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    pub fn selected(&self) -> ShapeKind {
        self.selected
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether the selected shape would be accepted at the cursor
    pub fn fits(&self) -> bool {
        self.game.preview(self.selected, self.cursor).is_ok()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.game.snapshot()
    }

    pub fn hud(&self) -> Hud<'_> {
        Hud {
            cursor: self.cursor,
            selected: self.selected,
            fits: self.fits(),
            message: &self.message,
        }
    }

    pub fn apply(&mut self, action: GameAction) {
        debug!("action {}", action.as_str());
        match action {
            GameAction::CursorUp => self.move_cursor(-1, 0),
            GameAction::CursorDown => self.move_cursor(1, 0),
            GameAction::CursorLeft => self.move_cursor(0, -1),
            GameAction::CursorRight => self.move_cursor(0, 1),
            GameAction::Select(kind) => {
                self.selected = kind;
                self.message = format!("Selected {}", kind);
            }
            GameAction::RotateLeft => self.rotate(Direction::Left),
            GameAction::RotateRight => self.rotate(Direction::Right),
            GameAction::Place => self.place(),
            GameAction::NewRound => {
                self.game.new_round();
                self.cursor = Coord::new(0, 0);
                self.set_round_message();
            }
        }
    }

    fn move_cursor(&mut self, dr: i32, dc: i32) {
        self.cursor = Coord::new(
            (self.cursor.row + dr).clamp(0, GRID_HEIGHT as i32 - 1),
            (self.cursor.col + dc).clamp(0, GRID_WIDTH as i32 - 1),
        );
    }

    fn rotate(&mut self, direction: Direction) {
        self.game.rotate(self.selected, direction);
        self.message = format!("Rotated {} {}", self.selected, direction.as_str());
    }

    fn place(&mut self) {
        match self.game.place(self.selected, self.cursor) {
            Ok(placement) if self.game.is_won() => {
                self.message = format!(
                    "Grid complete after {} placements, you win! Press N for another round",
                    self.game.placements()
                );
                debug!("final placement {:?}", placement.cells);
            }
            Ok(placement) => {
                self.message = format!("Placed {} at {}", placement.kind, placement.anchor);
            }
            Err(err) => {
                self.message = format!("Cannot place {} there: {}", self.selected, err.message());
            }
        }
    }

    fn set_round_message(&mut self) {
        self.message = format!(
            "Round {}: cover every empty cell ({} obstacles)",
            self.game.round(),
            self.game.grid().obstacles().len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameConfig, Grid};
    use crate::types::CellState;

    fn app_with_obstacles(obstacles: &[(i32, i32)]) -> App {
        let grid = Grid::new(obstacles.iter().copied().map(Coord::from));
        App::new(Game::from_grid(grid, GameConfig::default(), 1))
    }

    #[test]
    fn cursor_is_clamped_to_grid() {
        let mut app = app_with_obstacles(&[]);
        app.apply(GameAction::CursorUp);
        app.apply(GameAction::CursorLeft);
        assert_eq!(app.cursor(), Coord::new(0, 0));
        for _ in 0..10 {
            app.apply(GameAction::CursorDown);
            app.apply(GameAction::CursorRight);
        }
        assert_eq!(app.cursor(), Coord::new(5, 5));
    }

    #[test]
    fn place_uses_selection_and_cursor() {
        let mut app = app_with_obstacles(&[(0, 0)]);
        app.apply(GameAction::Select(ShapeKind::D));
        assert!(!app.fits());
        app.apply(GameAction::Place);
        assert!(app.message().contains("Cannot place D"));

        app.apply(GameAction::CursorRight);
        assert!(app.fits());
        app.apply(GameAction::Place);
        assert_eq!(
            app.game().grid().get(Coord::new(0, 1)),
            Some(CellState::Filled(ShapeKind::D))
        );
        assert!(app.message().starts_with("Placed D"));
    }

    #[test]
    fn rotate_targets_selected_shape() {
        let mut app = app_with_obstacles(&[]);
        app.apply(GameAction::Select(ShapeKind::L));
        app.apply(GameAction::RotateRight);
        assert_eq!(app.game().shape(ShapeKind::L).height(), 3);
        assert_eq!(app.game().shape(ShapeKind::T).height(), 2);
    }

    #[test]
    fn new_round_resets_cursor() {
        let mut app = app_with_obstacles(&[]);
        app.apply(GameAction::CursorDown);
        app.apply(GameAction::NewRound);
        assert_eq!(app.cursor(), Coord::new(0, 0));
        assert_eq!(app.game().round(), 2);
        assert!(app.message().starts_with("Round 2"));
    }
}
