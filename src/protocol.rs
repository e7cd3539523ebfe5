#![cfg(feature = "std")]

//! Request boundary: the board API trait, its error type and wire messages.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::grid::{GridId, GridSnapshot};
use crate::ship::ShipPlacement;

pub use crate::config::PROTOCOL_VERSION;

/// Failures surfaced at the request boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request was rejected as invalid for the current board state.
    BadRequest(String),
    /// No board exists under the requested identifier.
    NotFound(String),
    /// The persistence collaborator failed.
    Store(String),
    /// The connection to a remote service failed or misbehaved.
    Transport(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::Store(msg) => write!(f, "Store error: {}", msg),
            ApiError::Transport(msg) => write!(f, "Transport error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

/// Operations offered to clients, served locally by `BoardService` and
/// remotely through `Stub`.
#[async_trait::async_trait]
pub trait BoardApi: Send + Sync {
    /// Create an empty board and return its identifier.
    async fn create_board(&self, size: i32) -> Result<GridId, ApiError>;
    /// Fetch the full state of a board.
    async fn get_board(&self, id: &GridId) -> Result<GridSnapshot, ApiError>;
    /// Place a ship; `Ok(true)` once the board has been updated.
    async fn add_ship(&self, id: &GridId, ship: ShipPlacement) -> Result<bool, ApiError>;
    /// Fire at a cell; `Ok(true)` on a hit.
    async fn attack(&self, id: &GridId, row: i32, col: i32) -> Result<bool, ApiError>;
}

#[async_trait::async_trait]
impl<A: BoardApi + ?Sized> BoardApi for Arc<A> {
    async fn create_board(&self, size: i32) -> Result<GridId, ApiError> {
        (**self).create_board(size).await
    }

    async fn get_board(&self, id: &GridId) -> Result<GridSnapshot, ApiError> {
        (**self).get_board(id).await
    }

    async fn add_ship(&self, id: &GridId, ship: ShipPlacement) -> Result<bool, ApiError> {
        (**self).add_ship(id, ship).await
    }

    async fn attack(&self, id: &GridId, row: i32, col: i32) -> Result<bool, ApiError> {
        (**self).attack(id, row, col).await
    }
}

/// Client requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Request {
    CreateBoard { size: i32 },
    GetBoard { id: GridId },
    AddShip { id: GridId, ship: ShipPlacement },
    Attack { id: GridId, row: i32, col: i32 },
}

/// Server replies, one per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Response {
    Created(GridId),
    Board(GridSnapshot),
    ShipAdded(bool),
    AttackResult(bool),
    NotFound(String),
    BadRequest(String),
    StoreError(String),
    ProtocolError(String),
}

impl From<ApiError> for Response {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::BadRequest(msg) => Response::BadRequest(msg),
            ApiError::NotFound(msg) => Response::NotFound(msg),
            ApiError::Store(msg) => Response::StoreError(msg),
            ApiError::Transport(msg) => Response::ProtocolError(msg),
        }
    }
}

impl Response {
    /// Error for a reply that does not answer the request that was sent.
    pub(crate) fn into_error(self) -> ApiError {
        match self {
            Response::NotFound(msg) => ApiError::NotFound(msg),
            Response::BadRequest(msg) => ApiError::BadRequest(msg),
            Response::StoreError(msg) => ApiError::Store(msg),
            Response::ProtocolError(msg) => ApiError::Transport(msg),
            other => ApiError::Transport(format!("Unexpected response: {:?}", other)),
        }
    }
}

/// Frames exchanged over a `Transport`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Message {
    Request { version: u32, seq: u64, req: Request },
    Response { version: u32, seq: u64, resp: Response },
}
