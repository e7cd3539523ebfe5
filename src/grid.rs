//! Square game board made of labelled cells.

#[cfg(not(feature = "std"))]
use alloc::{format, string::String, vec::Vec};
use core::fmt;
use rand::Rng;

use crate::common::GridError;
use crate::config::MAX_GRID_SIZE;

/// Opaque board identifier, used as the persistence key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GridId(String);

impl GridId {
    /// Wrap a caller-assigned identifier.
    pub fn new(id: impl Into<String>) -> Self {
        GridId(id.into())
    }

    /// Draw a fresh 128-bit identifier, formatted as hyphenated hex.
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        let v: u128 = rng.random();
        GridId(format!(
            "{:08x}-{:04x}-{:04x}-{:04x}-{:012x}",
            (v >> 96) as u32,
            (v >> 80) as u16,
            (v >> 64) as u16,
            (v >> 48) as u16,
            v & 0xffff_ffff_ffff,
        ))
    }

    /// The all-zero identifier given to boards created without one.
    pub fn nil() -> Self {
        GridId(String::from("00000000-0000-0000-0000-000000000000"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GridId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Derived state of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Empty,
    Occupied,
    Hit,
}

/// One board position with its display labels and occupancy/hit flags.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    row: usize,
    col: usize,
    row_label: String,
    col_label: String,
    occupied: bool,
    hit: bool,
}

impl Cell {
    fn empty(row: usize, col: usize) -> Self {
        Cell {
            row,
            col,
            row_label: format!("{}", row + 1),
            col_label: column_label(col),
            occupied: false,
            hit: false,
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// 1-based row number as text.
    pub fn row_label(&self) -> &str {
        &self.row_label
    }

    /// Letter label for the column (`A` for column 0).
    pub fn col_label(&self) -> &str {
        &self.col_label
    }

    pub fn is_occupied(&self) -> bool {
        self.occupied
    }

    pub fn is_hit(&self) -> bool {
        self.hit
    }

    /// A hit cell reports `Hit` even if a later placement re-flagged it occupied.
    pub fn state(&self) -> CellState {
        if self.hit {
            CellState::Hit
        } else if self.occupied {
            CellState::Occupied
        } else {
            CellState::Empty
        }
    }

    pub(crate) fn mark_occupied(&mut self) {
        self.occupied = true;
    }

    pub(crate) fn mark_hit(&mut self) {
        self.hit = true;
        self.occupied = false;
    }
}

/// Spreadsheet-style column letters: `A`..`Z`, then `AA`, `AB`, ...
fn column_label(col: usize) -> String {
    let mut letters = Vec::new();
    let mut n = col;
    loop {
        letters.push(char::from(b'A' + (n % 26) as u8));
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    letters.iter().rev().collect()
}

/// Square board of `size * size` cells stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    id: GridId,
    size: i32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an empty board with the nil identifier.
    pub fn create(size: i32) -> Result<Self, GridError> {
        Self::with_id(GridId::nil(), size)
    }

    /// Create an empty board under the given identifier.
    pub fn with_id(id: GridId, size: i32) -> Result<Self, GridError> {
        if size <= 0 || size > MAX_GRID_SIZE {
            return Err(GridError::InvalidSize(size));
        }
        let n = size as usize;
        let mut cells = Vec::with_capacity(n * n);
        for row in 0..n {
            for col in 0..n {
                cells.push(Cell::empty(row, col));
            }
        }
        Ok(Grid { id, size, cells })
    }

    pub fn id(&self) -> &GridId {
        &self.id
    }

    /// Side length of the board.
    pub fn size(&self) -> i32 {
        self.size
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Largest valid row index.
    pub fn max_row(&self) -> i32 {
        self.size - 1
    }

    /// Largest valid column index.
    pub fn max_col(&self) -> i32 {
        self.size - 1
    }

    /// Whether `(row, col)` addresses a cell on this board.
    pub fn contains(&self, row: i32, col: i32) -> bool {
        self.index(row, col).is_some()
    }

    /// Cell at `(row, col)`.
    pub fn cell_at(&self, row: i32, col: i32) -> Result<&Cell, GridError> {
        self.index(row, col)
            .map(|i| &self.cells[i])
            .ok_or(GridError::OutOfBounds { row, col })
    }

    pub(crate) fn cell_at_mut(&mut self, row: i32, col: i32) -> Result<&mut Cell, GridError> {
        match self.index(row, col) {
            Some(i) => Ok(&mut self.cells[i]),
            None => Err(GridError::OutOfBounds { row, col }),
        }
    }

    /// Number of cells currently in the `Occupied` state.
    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|c| c.state() == CellState::Occupied)
            .count()
    }

    /// Number of cells that have been hit.
    pub fn hit_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_hit()).count()
    }

    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if row < 0 || col < 0 || row >= self.size || col >= self.size {
            return None;
        }
        Some(row as usize * self.size as usize + col as usize)
    }
}

/// Serializable board state for storing or sending a whole board.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GridSnapshot {
    pub id: GridId,
    pub size: i32,
    pub cells: Vec<Cell>,
}

impl From<&Grid> for GridSnapshot {
    fn from(grid: &Grid) -> Self {
        GridSnapshot {
            id: grid.id.clone(),
            size: grid.size,
            cells: grid.cells.clone(),
        }
    }
}

impl From<Grid> for GridSnapshot {
    fn from(grid: Grid) -> Self {
        GridSnapshot {
            id: grid.id,
            size: grid.size,
            cells: grid.cells,
        }
    }
}

impl TryFrom<GridSnapshot> for Grid {
    type Error = GridError;

    /// Accepts only snapshots holding exactly one cell per coordinate, row-major.
    fn try_from(snapshot: GridSnapshot) -> Result<Self, Self::Error> {
        if snapshot.size <= 0 || snapshot.size > MAX_GRID_SIZE {
            return Err(GridError::InvalidSize(snapshot.size));
        }
        let n = snapshot.size as usize;
        if snapshot.cells.len() != n * n {
            return Err(GridError::CorruptSnapshot);
        }
        let in_order = snapshot
            .cells
            .iter()
            .enumerate()
            .all(|(i, c)| c.row == i / n && c.col == i % n);
        if !in_order {
            return Err(GridError::CorruptSnapshot);
        }
        Ok(Grid {
            id: snapshot.id,
            size: snapshot.size,
            cells: snapshot.cells,
        })
    }
}
