use boardgame::{
    can_place, place, resolve, try_place, validate_placement, CellState, GameRules, Grid,
    Orientation, PlacementOutcome, PlacementRejection, ShipPlacement, StandardRules,
};

fn occupied(grid: &Grid) -> Vec<(usize, usize)> {
    grid.cells()
        .iter()
        .filter(|c| c.state() == CellState::Occupied)
        .map(|c| (c.row(), c.col()))
        .collect()
}

fn full_board(size: i32) -> Grid {
    let mut grid = Grid::create(size).unwrap();
    for row in 0..size {
        assert!(grid.place(&ShipPlacement::horizontal(size, row, 0)));
    }
    grid
}

#[test]
fn test_place_five_cells_from_origin() {
    let mut grid = Grid::create(10).unwrap();
    let ship = ShipPlacement::horizontal(5, 0, 0);
    assert!(can_place(Some(&grid), Some(&ship)));
    assert!(place(Some(&mut grid), Some(&ship)));
    assert_eq!(occupied(&grid), vec![(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)]);
}

#[test]
fn test_vertical_placement() {
    let mut grid = Grid::create(10).unwrap();
    let ship = ShipPlacement::vertical(3, 0, 4);
    assert!(grid.can_place(&ship));
    assert!(grid.place(&ship));
    assert_eq!(occupied(&grid), vec![(0, 4), (1, 4), (2, 4)]);
}

#[test]
fn test_too_long_is_rejected() {
    let grid = Grid::create(10).unwrap();
    let ship = ShipPlacement::horizontal(15, 0, 0);
    assert!(!can_place(Some(&grid), Some(&ship)));
    assert_eq!(
        validate_placement(Some(&grid), Some(&ship)),
        Err(PlacementRejection::OffGrid)
    );
}

#[test]
fn test_full_board_rejects_everything() {
    let grid = full_board(5);
    for length in 1..=5 {
        for orientation in [Orientation::Horizontal, Orientation::Vertical] {
            let ship = ShipPlacement::new(length, 0, 0, orientation);
            assert_eq!(
                validate_placement(Some(&grid), Some(&ship)),
                Err(PlacementRejection::Overlap)
            );
        }
    }
}

#[test]
fn test_hit_cells_block_placement() {
    let mut grid = Grid::create(5).unwrap();
    assert!(grid.place(&ShipPlacement::horizontal(1, 2, 0)));
    assert!(grid.resolve(2, 0));
    let ship = ShipPlacement::vertical(3, 0, 0);
    assert_eq!(
        validate_placement(Some(&grid), Some(&ship)),
        Err(PlacementRejection::Overlap)
    );
}

#[test]
fn test_absent_inputs() {
    let mut grid = Grid::create(5).unwrap();
    let ship = ShipPlacement::horizontal(3, 0, 0);
    let before = grid.clone();

    assert!(!can_place(None, Some(&ship)));
    assert!(!can_place(Some(&grid), None));
    assert!(!place(None, Some(&ship)));
    assert!(!place(Some(&mut grid), None));
    assert_eq!(grid, before);

    assert_eq!(
        validate_placement(None, Some(&ship)),
        Err(PlacementRejection::MissingGrid)
    );
    assert_eq!(
        validate_placement(Some(&grid), None),
        Err(PlacementRejection::MissingShip)
    );
}

#[test]
fn test_non_positive_length() {
    let grid = Grid::create(5).unwrap();
    for length in [0, -3] {
        let ship = ShipPlacement::horizontal(length, 0, 0);
        assert_eq!(
            validate_placement(Some(&grid), Some(&ship)),
            Err(PlacementRejection::NonPositiveLength)
        );
    }
}

#[test]
fn test_required_cells_run_from_offset_to_length() {
    // A start offset shortens the ship rather than shifting it.
    let ship = ShipPlacement::horizontal(5, 3, 2);
    assert_eq!(ship.required_cells(), vec![(3, 2), (3, 3), (3, 4)]);

    let ship = ShipPlacement::vertical(4, 1, 6);
    assert_eq!(ship.required_cells(), vec![(1, 6), (2, 6), (3, 6)]);

    let ship = ShipPlacement::horizontal(3, 0, 5);
    assert!(ship.required_cells().is_empty());
}

#[test]
fn test_offset_placement_occupies_derived_cells() {
    let mut grid = Grid::create(10).unwrap();
    let ship = ShipPlacement::horizontal(5, 3, 2);
    assert!(grid.can_place(&ship));
    assert!(grid.place(&ship));
    assert_eq!(occupied(&grid), vec![(3, 2), (3, 3), (3, 4)]);
}

#[test]
fn test_empty_required_list_is_rejected() {
    let grid = Grid::create(10).unwrap();
    let ship = ShipPlacement::horizontal(3, 0, 5);
    assert_eq!(
        validate_placement(Some(&grid), Some(&ship)),
        Err(PlacementRejection::NoCells)
    );
}

#[test]
fn test_negative_start_is_off_grid() {
    let mut grid = Grid::create(10).unwrap();
    let ship = ShipPlacement::horizontal(3, -1, 0);
    assert_eq!(
        validate_placement(Some(&grid), Some(&ship)),
        Err(PlacementRejection::OffGrid)
    );
    // The executor refuses to write off the board as well.
    assert!(!grid.place(&ship));
    assert_eq!(grid.occupied_count(), 0);
}

#[test]
fn test_place_does_not_revalidate_occupancy() {
    let mut grid = Grid::create(5).unwrap();
    let ship = ShipPlacement::horizontal(3, 0, 0);
    assert!(grid.place(&ship));
    assert!(!grid.can_place(&ship));
    assert!(grid.place(&ship));
    assert_eq!(grid.occupied_count(), 3);
}

#[test]
fn test_place_refuses_off_grid_without_partial_writes() {
    let mut grid = Grid::create(3).unwrap();
    assert!(!grid.place(&ShipPlacement::horizontal(5, 0, 0)));
    assert_eq!(grid.occupied_count(), 0);
}

#[test]
fn test_extreme_lengths_are_off_grid() {
    let mut grid = Grid::create(10).unwrap();
    for ship in [
        ShipPlacement::horizontal(i32::MAX, 0, 0),
        ShipPlacement::vertical(i32::MAX, 0, 0),
        ShipPlacement::horizontal(i32::MAX, i32::MAX, 0),
    ] {
        assert_eq!(
            validate_placement(Some(&grid), Some(&ship)),
            Err(PlacementRejection::OffGrid)
        );
        assert!(!grid.place(&ship));
    }
    assert_eq!(grid.occupied_count(), 0);
}

#[test]
fn test_extreme_negative_starts_are_off_grid() {
    let mut grid = Grid::create(10).unwrap();
    for ship in [
        ShipPlacement::horizontal(1, 0, i32::MIN),
        ShipPlacement::vertical(1, i32::MIN, 0),
        ShipPlacement::horizontal(3, i32::MIN, 0),
        ShipPlacement::vertical(3, 0, i32::MIN),
    ] {
        assert_eq!(
            validate_placement(Some(&grid), Some(&ship)),
            Err(PlacementRejection::OffGrid)
        );
        assert!(!grid.place(&ship));
    }
    assert_eq!(grid.occupied_count(), 0);
}

#[test]
fn test_extreme_start_past_length_places_nothing() {
    let mut grid = Grid::create(10).unwrap();
    let ship = ShipPlacement::horizontal(3, 0, i32::MAX);
    assert_eq!(
        validate_placement(Some(&grid), Some(&ship)),
        Err(PlacementRejection::NoCells)
    );
    assert!(grid.place(&ship));
    assert_eq!(grid.occupied_count(), 0);
}

#[test]
fn test_try_place() {
    let mut grid = Grid::create(6).unwrap();
    let ship = ShipPlacement::vertical(4, 0, 1);
    assert_eq!(grid.try_place(&ship), PlacementOutcome::Placed);
    assert_eq!(grid.occupied_count(), 4);
    assert_eq!(
        grid.try_place(&ship),
        PlacementOutcome::Rejected(PlacementRejection::Overlap)
    );
    assert_eq!(grid.occupied_count(), 4);
    assert_eq!(
        try_place(None, Some(&ship)),
        PlacementOutcome::Rejected(PlacementRejection::MissingGrid)
    );
    assert!(!PlacementOutcome::Rejected(PlacementRejection::NoCells).is_placed());
}

#[test]
fn test_resolve_hit_then_repeat() {
    let mut grid = Grid::create(10).unwrap();
    assert!(grid.place(&ShipPlacement::horizontal(5, 0, 0)));

    assert!(resolve(Some(&mut grid), 0, 0));
    assert_eq!(grid.hit_count(), 1);
    let cell = grid.cell_at(0, 0).unwrap();
    assert!(cell.is_hit());
    assert!(!cell.is_occupied());
    assert_eq!(cell.state(), CellState::Hit);

    assert!(!resolve(Some(&mut grid), 0, 0));
    assert_eq!(grid.hit_count(), 1);
    assert_eq!(grid.occupied_count(), 4);
}

#[test]
fn test_resolve_misses_mutate_nothing() {
    let mut grid = Grid::create(10).unwrap();
    assert!(grid.place(&ShipPlacement::horizontal(2, 0, 0)));
    let before = grid.clone();

    assert!(!grid.resolve(5, 5));
    assert!(!grid.resolve(99, 0));
    assert!(!grid.resolve(0, -1));
    assert!(!resolve(None, 0, 0));
    assert_eq!(grid, before);
}

#[test]
fn test_hit_cell_cannot_be_reoccupied_into_target() {
    let mut grid = Grid::create(4).unwrap();
    let ship = ShipPlacement::horizontal(1, 0, 0);
    assert!(grid.place(&ship));
    assert!(grid.resolve(0, 0));
    // Skipping the validator re-flags the cell, but it stays hit.
    assert!(grid.place(&ship));
    assert_eq!(grid.cell_at(0, 0).unwrap().state(), CellState::Hit);
    assert!(!grid.resolve(0, 0));
}

#[test]
fn test_standard_rules_trait() {
    let rules = StandardRules;
    let mut grid = Grid::create(4).unwrap();
    let ship = ShipPlacement::vertical(2, 0, 3);
    assert!(rules.can_place(Some(&grid), Some(&ship)));
    assert!(rules.place(Some(&mut grid), Some(&ship)));
    assert!(!rules.can_place(Some(&grid), Some(&ship)));
    assert!(rules.resolve(Some(&mut grid), 1, 3));
    assert!(!rules.resolve(Some(&mut grid), 1, 3));
}

#[test]
fn test_rejection_display() {
    assert_eq!(
        PlacementRejection::NonPositiveLength.to_string(),
        "Cannot add ship of empty size"
    );
    assert_eq!(
        PlacementRejection::OffGrid.to_string(),
        "Ship placement runs off the board"
    );
}
