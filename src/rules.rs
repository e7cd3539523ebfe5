//! Placement validation, placement execution and attack resolution.
//!
//! The free functions take `Option`s so an orchestrator can pass through
//! whatever it fetched; an absent board or ship is a plain `false`, never a
//! panic. `Grid` also gets method forms for callers that already hold a board.

use crate::common::{PlacementOutcome, PlacementRejection};
use crate::grid::{CellState, Grid};
use crate::ship::{Orientation, ShipPlacement};

/// Where the required cells of a placement fall, decided from the bounds alone.
enum Span {
    Empty,
    OffGrid,
    OnGrid,
}

/// The running axis covers `start..length` and the other axis stays fixed, so
/// the bounds are checked before a single cell is built.
fn span(grid: &Grid, ship: &ShipPlacement) -> Span {
    let (fixed, start, fixed_max, running_max) = match ship.orientation {
        Orientation::Horizontal => (
            ship.start_row,
            ship.start_col,
            grid.max_row(),
            grid.max_col(),
        ),
        Orientation::Vertical => (
            ship.start_col,
            ship.start_row,
            grid.max_col(),
            grid.max_row(),
        ),
    };
    if start >= ship.length {
        return Span::Empty;
    }
    // start < length, so length - 1 cannot overflow.
    if start < 0 || fixed < 0 || fixed > fixed_max || ship.length - 1 > running_max {
        Span::OffGrid
    } else {
        Span::OnGrid
    }
}

/// Check a placement and report why it is refused. Never mutates.
pub fn validate_placement(
    grid: Option<&Grid>,
    ship: Option<&ShipPlacement>,
) -> Result<(), PlacementRejection> {
    let grid = grid.ok_or(PlacementRejection::MissingGrid)?;
    let ship = ship.ok_or(PlacementRejection::MissingShip)?;
    if ship.length <= 0 {
        return Err(PlacementRejection::NonPositiveLength);
    }

    match span(grid, ship) {
        Span::Empty => return Err(PlacementRejection::NoCells),
        Span::OffGrid => return Err(PlacementRejection::OffGrid),
        Span::OnGrid => {}
    }

    let blocked = ship.required_cells().into_iter().any(|(r, c)| {
        grid.cell_at(r, c)
            .map(|cell| cell.state() != CellState::Empty)
            .unwrap_or(true)
    });
    if blocked {
        return Err(PlacementRejection::Overlap);
    }
    Ok(())
}

/// `true` when the ship may be placed on the board as it stands.
pub fn can_place(grid: Option<&Grid>, ship: Option<&ShipPlacement>) -> bool {
    validate_placement(grid, ship).is_ok()
}

/// Mark every required cell occupied.
///
/// Occupancy is not re-checked: callers validate first. A placement reaching
/// off the board is refused up front so nothing is half-written.
pub fn place(grid: Option<&mut Grid>, ship: Option<&ShipPlacement>) -> bool {
    let (Some(grid), Some(ship)) = (grid, ship) else {
        return false;
    };
    match span(grid, ship) {
        Span::Empty => return true,
        Span::OffGrid => return false,
        Span::OnGrid => {}
    }
    for (r, c) in ship.required_cells() {
        if let Ok(cell) = grid.cell_at_mut(r, c) {
            cell.mark_occupied();
        }
    }
    true
}

/// Validate and place under one borrow, leaving no gap between the two.
pub fn try_place(grid: Option<&mut Grid>, ship: Option<&ShipPlacement>) -> PlacementOutcome {
    let Some(grid) = grid else {
        return PlacementOutcome::Rejected(PlacementRejection::MissingGrid);
    };
    if let Err(reason) = validate_placement(Some(&*grid), ship) {
        return PlacementOutcome::Rejected(reason);
    }
    place(Some(grid), ship);
    PlacementOutcome::Placed
}

/// Fire at `(row, col)`. Returns `true` only when an occupied, unhit cell is
/// struck; that cell becomes `Hit` and can never be hit again.
pub fn resolve(grid: Option<&mut Grid>, row: i32, col: i32) -> bool {
    let Some(grid) = grid else {
        return false;
    };
    match grid.cell_at_mut(row, col) {
        Ok(cell) if cell.is_occupied() && !cell.is_hit() => {
            cell.mark_hit();
            true
        }
        _ => false,
    }
}

impl Grid {
    pub fn can_place(&self, ship: &ShipPlacement) -> bool {
        can_place(Some(self), Some(ship))
    }

    pub fn place(&mut self, ship: &ShipPlacement) -> bool {
        place(Some(self), Some(ship))
    }

    pub fn try_place(&mut self, ship: &ShipPlacement) -> PlacementOutcome {
        try_place(Some(self), Some(ship))
    }

    pub fn resolve(&mut self, row: i32, col: i32) -> bool {
        resolve(Some(self), row, col)
    }
}

/// The game-rule operations as a pluggable interface.
pub trait GameRules: Send + Sync {
    fn validate_placement(
        &self,
        grid: Option<&Grid>,
        ship: Option<&ShipPlacement>,
    ) -> Result<(), PlacementRejection>;

    fn place(&self, grid: Option<&mut Grid>, ship: Option<&ShipPlacement>) -> bool;

    fn resolve(&self, grid: Option<&mut Grid>, row: i32, col: i32) -> bool;

    fn can_place(&self, grid: Option<&Grid>, ship: Option<&ShipPlacement>) -> bool {
        self.validate_placement(grid, ship).is_ok()
    }
}

/// Rules exactly as implemented by the free functions in this module.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardRules;

impl GameRules for StandardRules {
    fn validate_placement(
        &self,
        grid: Option<&Grid>,
        ship: Option<&ShipPlacement>,
    ) -> Result<(), PlacementRejection> {
        validate_placement(grid, ship)
    }

    fn place(&self, grid: Option<&mut Grid>, ship: Option<&ShipPlacement>) -> bool {
        place(grid, ship)
    }

    fn resolve(&self, grid: Option<&mut Grid>, row: i32, col: i32) -> bool {
        resolve(grid, row, col)
    }
}
