#![cfg(feature = "std")]

//! Persistence of board snapshots keyed by board identifier.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::anyhow;
use log::{error, info};
use tokio::sync::RwLock;

use crate::grid::{GridId, GridSnapshot};

/// Storage capability for board snapshots.
///
/// Stores must be connected once before use. No versioning or compare-and-swap
/// is offered; callers that fetch, mutate and store must serialize per key.
#[async_trait::async_trait]
pub trait BoardStore: Send + Sync {
    /// Establish the backing connection.
    async fn connect(&self) -> anyhow::Result<()>;
    /// Snapshot stored under `key`, if any.
    async fn get(&self, key: &GridId) -> anyhow::Result<Option<GridSnapshot>>;
    /// Store `snapshot` under `key`, replacing any previous value.
    async fn set(&self, key: &GridId, snapshot: &GridSnapshot) -> anyhow::Result<bool>;
}

/// Process-local store holding bincode-encoded snapshots.
pub struct InMemoryStore {
    entries: RwLock<HashMap<GridId, Vec<u8>>>,
    connected: AtomicBool,
    refuse_connect: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            connected: AtomicBool::new(false),
            refuse_connect: false,
        }
    }

    /// A store whose `connect` always fails, for exercising startup errors.
    pub fn with_connect_failure() -> Self {
        Self {
            refuse_connect: true,
            ..Self::new()
        }
    }

    /// Number of stored snapshots.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    fn ensure_connected(&self) -> anyhow::Result<()> {
        if self.connected.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(anyhow!("Board store used before connect"))
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl BoardStore for InMemoryStore {
    async fn connect(&self) -> anyhow::Result<()> {
        if self.refuse_connect {
            error!("Error connecting to board store: backend unreachable");
            return Err(anyhow!("Board store backend unreachable"));
        }
        self.connected.store(true, Ordering::SeqCst);
        info!("Connected to in-memory board store");
        Ok(())
    }

    async fn get(&self, key: &GridId) -> anyhow::Result<Option<GridSnapshot>> {
        self.ensure_connected()?;
        let entries = self.entries.read().await;
        match entries.get(key) {
            Some(bytes) => {
                let snapshot = bincode::deserialize(bytes)
                    .map_err(|e| anyhow!("Deserialization error: {}", e))?;
                Ok(Some(snapshot))
            }
            None => Ok(None),
        }
    }

    async fn set(&self, key: &GridId, snapshot: &GridSnapshot) -> anyhow::Result<bool> {
        self.ensure_connected()?;
        let bytes =
            bincode::serialize(snapshot).map_err(|e| anyhow!("Serialization error: {}", e))?;
        self.entries.write().await.insert(key.clone(), bytes);
        Ok(true)
    }
}
