#![cfg(feature = "std")]

//! Server side of the request boundary.

use std::sync::Arc;

use log::{info, warn};
use tokio::net::TcpListener;

use crate::protocol::{BoardApi, Message, Request, Response, PROTOCOL_VERSION};
use crate::transport::{tcp::TcpTransport, Transport};

/// Reads requests from a transport, answers each through a `BoardApi`.
pub struct Skeleton<A: BoardApi, T: Transport> {
    api: A,
    transport: T,
}

impl<A: BoardApi, T: Transport> Skeleton<A, T> {
    pub fn new(api: A, transport: T) -> Self {
        Self { api, transport }
    }

    /// Serve until the peer goes away.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        while let Ok(msg) = self.transport.recv().await {
            let reply = match msg {
                Message::Request { version, seq, .. } if version != PROTOCOL_VERSION => {
                    warn!(
                        "Protocol version mismatch: expected {}, got {}",
                        PROTOCOL_VERSION, version
                    );
                    Response::ProtocolError(format!(
                        "Protocol version mismatch: expected {}, got {}",
                        PROTOCOL_VERSION, version
                    ))
                    .into_message(seq)
                }
                Message::Request { seq, req, .. } => self.dispatch(req).await.into_message(seq),
                Message::Response { seq, .. } => {
                    warn!("Unexpected response frame from client (seq {})", seq);
                    Response::ProtocolError("Expected a request".to_string()).into_message(seq)
                }
            };
            self.transport.send(reply).await?;
        }
        Ok(())
    }

    async fn dispatch(&self, req: Request) -> Response {
        let result = match req {
            Request::CreateBoard { size } => {
                self.api.create_board(size).await.map(Response::Created)
            }
            Request::GetBoard { id } => self.api.get_board(&id).await.map(Response::Board),
            Request::AddShip { id, ship } => {
                self.api.add_ship(&id, ship).await.map(Response::ShipAdded)
            }
            Request::Attack { id, row, col } => {
                self.api.attack(&id, row, col).await.map(Response::AttackResult)
            }
        };
        result.unwrap_or_else(Response::from)
    }
}

impl Response {
    fn into_message(self, seq: u64) -> Message {
        Message::Response {
            version: PROTOCOL_VERSION,
            seq,
            resp: self,
        }
    }
}

/// Accept connections forever, one skeleton task per client, all sharing `api`.
pub async fn serve_tcp<A>(listener: TcpListener, api: Arc<A>) -> anyhow::Result<()>
where
    A: BoardApi + 'static,
{
    loop {
        let (stream, addr) = listener.accept().await?;
        info!("Client connected from {}", addr);
        let api = Arc::clone(&api);
        tokio::spawn(async move {
            let mut skeleton = Skeleton::new(api, TcpTransport::new(stream));
            match skeleton.run().await {
                Ok(()) => info!("Client {} disconnected", addr),
                Err(e) => warn!("Session with {} ended with an error: {}", addr, e),
            }
        });
    }
}
