//! Integration tests for full level play

use same_game::core::{CellGrid, Level, LevelConfig, LevelError, SelectOutcome};
use same_game::types::{Cell, Element, ElementKind, LevelState, Point};

const A: Cell = Some(Element::new(ElementKind(0)));
const B: Cell = Some(Element::new(ElementKind(1)));
const C: Cell = Some(Element::new(ElementKind(2)));

fn layout(width: usize, height: usize, cells: Vec<Cell>) -> Level {
    Level::from_layout(LevelConfig::new(width, height, 3, 1), cells).unwrap()
}

fn at(level: &Level, index: usize) -> Point {
    level.grid().cell_center(index).unwrap()
}

#[test]
fn test_level_lifecycle() {
    let level = Level::new(LevelConfig::new(10, 10, 4, 12345)).unwrap();
    assert_eq!(level.score(), 0);
    assert_eq!(level.moves(), 0);
    assert_eq!(level.remaining_elements(), 100);
    assert_ne!(level.level_state(), LevelState::NoElementsLeft);
}

#[test]
fn test_empty_grid_never_matches() {
    let mut level = layout(3, 3, vec![None; 9]);
    assert_eq!(level.level_state(), LevelState::NoElementsLeft);
    for index in 0..9 {
        assert!(level.hover(at(&level, index)).is_empty());
        assert_eq!(level.select(at(&level, index)), SelectOutcome::NoMatch);
    }
    assert_eq!(level.score(), 0);
}

#[test]
fn test_row_scenario() {
    // [A, A, B, A]: the pair goes, B and A are left isolated.
    let mut level = layout(4, 1, vec![A, A, B, A]);
    assert_eq!(level.hover(at(&level, 0)).indices(), &[0, 1]);

    let outcome = level.select(at(&level, 0));
    assert_eq!(outcome.match_size(), Some(2));
    assert_eq!(level.score(), 0);
    assert_eq!(level.grid().cells(), &[None, None, B, A]);
    assert_eq!(level.level_state(), LevelState::NoMoreMovesPossible);
}

#[test]
fn test_square_scenario() {
    let mut level = layout(2, 2, vec![C; 4]);
    for index in 0..4 {
        assert_eq!(level.hover(at(&level, index)).indices(), &[0, 1, 2, 3]);
    }
    let outcome = level.select(at(&level, 2));
    assert_eq!(outcome, SelectOutcome::Matched { removed: 4, points: 4 });
    assert_eq!(level.score(), 4);
    assert_eq!(level.level_state(), LevelState::NoElementsLeft);
}

#[test]
fn test_removed_cells_report_absent() {
    let mut level = layout(3, 3, vec![A, A, B, A, C, B, A, B, B]);
    let group = level.hover(at(&level, 0));
    assert_eq!(group.indices(), &[0, 1, 3, 6]);

    level.select(at(&level, 0));
    for &index in &group {
        assert!(level.grid().element(index).is_none());
        assert!(level.hover_index(index).is_empty());
    }
    // Selecting the same spot again is a no-op.
    assert_eq!(level.select(at(&level, 0)), SelectOutcome::NoMatch);
    assert_eq!(level.score(), 4);
}

#[test]
fn test_score_accumulates_across_moves() {
    // Column of five A, column of three B, isolated C.
    let mut level = layout(
        3,
        5,
        vec![A, B, C, A, B, None, A, B, None, A, None, None, A, None, None],
    );
    let first = level.select_index(0);
    assert_eq!(first, SelectOutcome::Matched { removed: 5, points: 9 });
    let second = level.select_index(4);
    assert_eq!(second, SelectOutcome::Matched { removed: 3, points: 1 });
    assert_eq!(level.score(), 10);
    assert_eq!(level.moves(), 2);
    assert_eq!(level.level_state(), LevelState::NoMoreMovesPossible);
    assert_eq!(level.remaining_elements(), 1);
}

#[test]
fn test_play_to_the_end() {
    let mut level = Level::new(LevelConfig::new(8, 8, 3, 4242)).unwrap();
    let mut last_score = 0;

    while level.level_state() == LevelState::FurtherMovesPossible {
        let index = (0..64)
            .find(|&i| level.hover_index(i).is_removable())
            .expect("FurtherMovesPossible implies a removable group");
        let before = level.remaining_elements();
        let outcome = level.select_index(index);
        assert!(outcome.is_match());
        assert_eq!(level.remaining_elements(), before - outcome.match_size().unwrap());
        assert!(level.score() >= last_score);
        last_score = level.score();
    }

    assert!(level.level_state().is_terminal());
    assert!((0..64).all(|i| !level.hover_index(i).is_removable()));
}

#[test]
fn test_restart_reproduces_board() {
    let config = LevelConfig::new(6, 6, 3, 31337);
    let fresh = Level::new(config.clone()).unwrap();
    let mut level = Level::new(config).unwrap();

    let index = (0..36).find(|&i| level.hover_index(i).is_removable()).unwrap();
    level.select_index(index);
    assert_ne!(level.grid().cells(), fresh.grid().cells());

    level.restart().unwrap();
    assert_eq!(level.grid().cells(), fresh.grid().cells());
    assert_eq!(level.score(), 0);
    assert_eq!(level.episode_id(), 1);
}

#[test]
fn test_invalid_construction_is_fatal() {
    assert!(matches!(
        Level::new(LevelConfig::new(4, 0, 3, 1)),
        Err(LevelError::InvalidDimensions { width: 4, height: 0 })
    ));
    assert!(matches!(
        Level::new(LevelConfig::new(4, 4, 0, 1)),
        Err(LevelError::EmptyPalette)
    ));
    assert!(matches!(
        Level::from_layout(LevelConfig::new(2, 2, 3, 1), vec![A; 3]),
        Err(LevelError::CellCountMismatch { expected: 4, actual: 3 })
    ));
}

#[test]
fn test_level_from_toml_config() -> anyhow::Result<()> {
    let config = LevelConfig::from_toml_str("width = 4\nheight = 2\npalette_size = 2\nseed = 5")?;
    let level = Level::new(config)?;
    assert_eq!(level.remaining_elements(), 8);
    assert!(level
        .grid()
        .cells()
        .iter()
        .flatten()
        .all(|e| e.kind().id() < 2));
    Ok(())
}
