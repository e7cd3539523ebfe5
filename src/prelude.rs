//! Commonly used types and utilities for ease of import.

pub use crate::{
    can_place, place, resolve, try_place, Cell, CellState, GameRules, Grid, GridError, GridId,
    GridSnapshot, Orientation, PlacementOutcome, PlacementRejection, ShipPlacement,
    StandardRules,
};

#[cfg(feature = "std")]
pub use crate::{
    ApiError, BoardApi, BoardService, BoardStore, InMemoryStore, InMemoryTransport, Skeleton,
    Stub, TcpTransport, Transport,
};
