use std::collections::HashSet;

use boardgame::{CellState, Grid, GridError, GridId, MAX_GRID_SIZE};

#[test]
fn test_create_allocates_empty_cells_row_major() {
    let grid = Grid::create(3).unwrap();
    assert_eq!(grid.size(), 3);
    assert_eq!(grid.cells().len(), 9);
    for (i, cell) in grid.cells().iter().enumerate() {
        assert_eq!((cell.row(), cell.col()), (i / 3, i % 3));
        assert_eq!(cell.state(), CellState::Empty);
        assert!(!cell.is_occupied());
        assert!(!cell.is_hit());
    }
}

#[test]
fn test_create_rejects_non_positive_size() {
    assert_eq!(Grid::create(0).unwrap_err(), GridError::InvalidSize(0));
    assert_eq!(Grid::create(-5).unwrap_err(), GridError::InvalidSize(-5));
}

#[test]
fn test_create_rejects_oversized_board() {
    assert_eq!(
        Grid::create(MAX_GRID_SIZE + 1).unwrap_err(),
        GridError::InvalidSize(MAX_GRID_SIZE + 1)
    );
}

#[test]
fn test_labels() {
    let grid = Grid::create(10).unwrap();
    let cell = grid.cell_at(0, 0).unwrap();
    assert_eq!(cell.row_label(), "1");
    assert_eq!(cell.col_label(), "A");
    let cell = grid.cell_at(9, 9).unwrap();
    assert_eq!(cell.row_label(), "10");
    assert_eq!(cell.col_label(), "J");
}

#[test]
fn test_labels_past_twenty_six_columns() {
    let grid = Grid::create(28).unwrap();
    assert_eq!(grid.cell_at(0, 25).unwrap().col_label(), "Z");
    assert_eq!(grid.cell_at(0, 26).unwrap().col_label(), "AA");
    assert_eq!(grid.cell_at(0, 27).unwrap().col_label(), "AB");
}

#[test]
fn test_cell_at_out_of_bounds() {
    let grid = Grid::create(4).unwrap();
    assert!(grid.cell_at(3, 3).is_ok());
    assert_eq!(
        grid.cell_at(4, 0).unwrap_err(),
        GridError::OutOfBounds { row: 4, col: 0 }
    );
    assert_eq!(
        grid.cell_at(0, -1).unwrap_err(),
        GridError::OutOfBounds { row: 0, col: -1 }
    );
    assert!(!grid.contains(99, 0));
}

#[test]
fn test_coordinates_are_unique() {
    let grid = Grid::create(7).unwrap();
    let coords: HashSet<_> = grid.cells().iter().map(|c| (c.row(), c.col())).collect();
    assert_eq!(coords.len(), 49);
}

#[test]
fn test_ids() {
    let grid = Grid::create(2).unwrap();
    assert_eq!(grid.id(), &GridId::nil());

    let grid = Grid::with_id(GridId::new("board-1"), 2).unwrap();
    assert_eq!(grid.id().as_str(), "board-1");
    assert_eq!(grid.id().to_string(), "board-1");
}

#[test]
fn test_generated_ids_are_hyphenated_hex() {
    use rand::{rngs::SmallRng, SeedableRng};

    let mut rng = SmallRng::seed_from_u64(7);
    let a = GridId::generate(&mut rng);
    let b = GridId::generate(&mut rng);
    assert_ne!(a, b);
    let s = a.as_str();
    assert_eq!(s.len(), 36);
    let groups: Vec<usize> = s.split('-').map(str::len).collect();
    assert_eq!(groups, vec![8, 4, 4, 4, 12]);
    assert!(s.chars().all(|c| c == '-' || c.is_ascii_hexdigit()));
}

#[test]
fn test_error_display() {
    assert_eq!(
        GridError::InvalidSize(-5).to_string(),
        "Board cannot be created of size -5"
    );
    assert_eq!(
        GridError::OutOfBounds { row: 99, col: 0 }.to_string(),
        "Coordinate (99, 0) is outside the board"
    );
}
