//! Command tests - prompt parsing and key bindings

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use tui_blockfill::core::{Game, GameConfig, GameError, Grid};
use tui_blockfill::input::{
    handle_key_event, parse_coordinate, parse_direction, parse_shape, parse_yes, should_quit,
};
use tui_blockfill::types::{Coord, Direction, GameAction, ShapeKind};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn test_parse_shape_accepts_any_case() {
    for (input, kind) in [
        ("T", ShapeKind::T),
        ("s\n", ShapeKind::S),
        (" l ", ShapeKind::L),
        ("d", ShapeKind::D),
        ("Z", ShapeKind::Z),
    ] {
        assert_eq!(parse_shape(input), Ok(kind), "input {:?}", input);
    }
    assert_eq!(parse_shape("TT"), Err(GameError::UnknownShape));
    assert_eq!(parse_shape("I"), Err(GameError::UnknownShape));
}

#[test]
fn test_parse_direction() {
    assert_eq!(parse_direction("L"), Ok(Some(Direction::Left)));
    assert_eq!(parse_direction("r\n"), Ok(Some(Direction::Right)));
    assert_eq!(parse_direction(""), Ok(None));
    assert_eq!(parse_direction("x"), Err(GameError::InvalidDirection));
}

#[test]
fn test_parse_coordinate() {
    assert_eq!(parse_coordinate("0,0"), Ok(Coord::new(0, 0)));
    assert_eq!(parse_coordinate(" 2 , 5 \n"), Ok(Coord::new(2, 5)));
    // Range is the grid's concern
    assert_eq!(parse_coordinate("9,-1"), Ok(Coord::new(9, -1)));

    for bad in ["", "1", "1 2", "a,b", "1,2,3", ",", "1,"] {
        assert_eq!(
            parse_coordinate(bad),
            Err(GameError::MalformedCoordinate),
            "input {:?}",
            bad
        );
    }
}

#[test]
fn test_parsed_coordinate_out_of_range_is_rejected_by_game() {
    let mut game = Game::from_grid(Grid::empty(), GameConfig::default(), 1);
    let result = parse_coordinate("6,0").and_then(|anchor| game.place(ShapeKind::D, anchor));
    assert_eq!(result, Err(GameError::OutOfBounds));
}

#[test]
fn test_huge_coordinate_is_out_of_bounds() {
    let mut game = Game::from_grid(Grid::empty(), GameConfig::default(), 1);
    for line in ["99999999999,0", "0,-99999999999", "3,2147483648"] {
        let result = parse_coordinate(line).and_then(|anchor| game.place(ShapeKind::S, anchor));
        assert_eq!(result, Err(GameError::OutOfBounds), "input {:?}", line);
    }
    assert_eq!(game.grid().filled_count(), 0);
}

#[test]
fn test_parse_yes() {
    assert!(parse_yes("y"));
    assert!(parse_yes("YES\n"));
    assert!(!parse_yes("n"));
    assert!(!parse_yes(""));
    assert!(!parse_yes("maybe"));
}

#[test]
fn test_key_bindings() {
    assert_eq!(handle_key_event(key(KeyCode::Up)), Some(GameAction::CursorUp));
    assert_eq!(handle_key_event(key(KeyCode::Left)), Some(GameAction::CursorLeft));
    assert_eq!(handle_key_event(key(KeyCode::Enter)), Some(GameAction::Place));
    assert_eq!(handle_key_event(key(KeyCode::Char(' '))), Some(GameAction::Place));
    assert_eq!(handle_key_event(key(KeyCode::Char('['))), Some(GameAction::RotateLeft));
    assert_eq!(handle_key_event(key(KeyCode::Char(']'))), Some(GameAction::RotateRight));
    assert_eq!(handle_key_event(key(KeyCode::Char('n'))), Some(GameAction::NewRound));
    assert_eq!(
        handle_key_event(key(KeyCode::Char('z'))),
        Some(GameAction::Select(ShapeKind::Z))
    );
    assert_eq!(handle_key_event(key(KeyCode::Char('x'))), None);
}

#[test]
fn test_quit_keys() {
    assert!(should_quit(key(KeyCode::Char('q'))));
    assert!(should_quit(key(KeyCode::Esc)));
    assert!(should_quit(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    assert!(!should_quit(key(KeyCode::Char('c'))));
}
