#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod common;
mod config;
mod grid;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod protocol;
pub mod prelude;
pub mod rules;
#[cfg(feature = "std")]
mod service;
mod ship;
#[cfg(feature = "std")]
pub mod skeleton;
#[cfg(feature = "std")]
pub mod store;
#[cfg(feature = "std")]
pub mod stub;
#[cfg(feature = "std")]
pub mod transport;
#[cfg(feature = "std")]
mod ui;

pub use common::*;
pub use config::*;
pub use grid::*;
pub use rules::{can_place, place, resolve, try_place, validate_placement, GameRules, StandardRules};
pub use ship::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use protocol::{ApiError, BoardApi, Message, Request, Response};
#[cfg(feature = "std")]
pub use service::BoardService;
#[cfg(feature = "std")]
pub use skeleton::*;
#[cfg(feature = "std")]
pub use store::{BoardStore, InMemoryStore};
#[cfg(feature = "std")]
pub use stub::*;
#[cfg(feature = "std")]
pub use transport::{in_memory::InMemoryTransport, tcp::TcpTransport, Transport};
#[cfg(feature = "std")]
pub use ui::*;
