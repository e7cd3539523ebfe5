//! Common types for the board engine: structural errors and placement outcomes.

/// Structural errors returned by `Grid` construction and addressing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Requested side length is not in `1..=MAX_GRID_SIZE`.
    InvalidSize(i32),
    /// Coordinate lies outside `[0, size)` on either axis.
    OutOfBounds { row: i32, col: i32 },
    /// Snapshot does not describe exactly one cell per coordinate.
    CorruptSnapshot,
}

impl core::fmt::Display for GridError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GridError::InvalidSize(size) => write!(f, "Board cannot be created of size {}", size),
            GridError::OutOfBounds { row, col } => {
                write!(f, "Coordinate ({}, {}) is outside the board", row, col)
            }
            GridError::CorruptSnapshot => write!(f, "Board snapshot is inconsistent"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GridError {}

/// Reason a ship placement was refused by the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementRejection {
    /// No board was supplied.
    MissingGrid,
    /// No ship descriptor was supplied.
    MissingShip,
    /// Ship length was zero or negative.
    NonPositiveLength,
    /// The descriptor derives no cells to occupy.
    NoCells,
    /// At least one required cell lies off the board.
    OffGrid,
    /// At least one required cell is already occupied or hit.
    Overlap,
}

impl core::fmt::Display for PlacementRejection {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PlacementRejection::MissingGrid => write!(f, "No board supplied"),
            PlacementRejection::MissingShip => write!(f, "No ship supplied"),
            PlacementRejection::NonPositiveLength => write!(f, "Cannot add ship of empty size"),
            PlacementRejection::NoCells => write!(f, "Ship placement covers no cells"),
            PlacementRejection::OffGrid => write!(f, "Ship placement runs off the board"),
            PlacementRejection::Overlap => {
                write!(f, "Ship placement overlaps an occupied or hit cell")
            }
        }
    }
}

/// Result of a combined validate-and-place call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementOutcome {
    /// Every required cell is now occupied.
    Placed,
    /// Nothing was mutated.
    Rejected(PlacementRejection),
}

impl PlacementOutcome {
    /// `true` for [`PlacementOutcome::Placed`].
    pub fn is_placed(&self) -> bool {
        matches!(self, PlacementOutcome::Placed)
    }
}
