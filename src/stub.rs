#![cfg(feature = "std")]

//! Client side of the request boundary.

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::Mutex;

use crate::grid::{GridId, GridSnapshot};
use crate::protocol::{ApiError, BoardApi, Message, Request, Response, PROTOCOL_VERSION};
use crate::ship::ShipPlacement;
use crate::transport::Transport;

/// `BoardApi` backed by a remote `Skeleton`.
pub struct Stub<T: Transport> {
    transport: Mutex<T>,
    seq: AtomicU64,
}

impl<T: Transport> Stub<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport: Mutex::new(transport),
            seq: AtomicU64::new(0),
        }
    }

    async fn call(&self, req: Request) -> Result<Response, ApiError> {
        let mut transport = self.transport.lock().await;
        let seq = self.seq.fetch_add(1, Ordering::SeqCst);
        transport
            .send(Message::Request {
                version: PROTOCOL_VERSION,
                seq,
                req,
            })
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        match transport
            .recv()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?
        {
            Message::Response {
                seq: resp_seq,
                resp,
                ..
            } if resp_seq == seq => Ok(resp),
            Message::Response { seq: resp_seq, .. } => Err(ApiError::Transport(format!(
                "Sequence mismatch: expected {}, got {}",
                seq, resp_seq
            ))),
            Message::Request { .. } => {
                Err(ApiError::Transport("Unexpected request from server".to_string()))
            }
        }
    }
}

#[async_trait::async_trait]
impl<T: Transport> BoardApi for Stub<T> {
    async fn create_board(&self, size: i32) -> Result<GridId, ApiError> {
        match self.call(Request::CreateBoard { size }).await? {
            Response::Created(id) => Ok(id),
            other => Err(other.into_error()),
        }
    }

    async fn get_board(&self, id: &GridId) -> Result<GridSnapshot, ApiError> {
        match self.call(Request::GetBoard { id: id.clone() }).await? {
            Response::Board(snapshot) => Ok(snapshot),
            other => Err(other.into_error()),
        }
    }

    async fn add_ship(&self, id: &GridId, ship: ShipPlacement) -> Result<bool, ApiError> {
        match self.call(Request::AddShip { id: id.clone(), ship }).await? {
            Response::ShipAdded(added) => Ok(added),
            other => Err(other.into_error()),
        }
    }

    async fn attack(&self, id: &GridId, row: i32, col: i32) -> Result<bool, ApiError> {
        let req = Request::Attack {
            id: id.clone(),
            row,
            col,
        };
        match self.call(req).await? {
            Response::AttackResult(hit) => Ok(hit),
            other => Err(other.into_error()),
        }
    }
}
