#![cfg(feature = "std")]

//! Orchestrates the rules engine against a `BoardStore`.

use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, info, warn};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::config::ServiceConfig;
use crate::grid::{Grid, GridId, GridSnapshot};
use crate::protocol::{ApiError, BoardApi};
use crate::rules::{GameRules, StandardRules};
use crate::ship::ShipPlacement;
use crate::store::BoardStore;

/// Board service: fetches a board, applies one rule operation, stores it back.
///
/// Every fetch/mutate/store cycle for a board runs under that board's own
/// lock, so validate-then-place and concurrent attacks never interleave.
pub struct BoardService<S: BoardStore, R: GameRules = StandardRules> {
    store: S,
    rules: R,
    config: ServiceConfig,
    rng: Mutex<SmallRng>,
    locks: Mutex<HashMap<GridId, Arc<Mutex<()>>>>,
}

impl<S: BoardStore> BoardService<S> {
    /// Service over `store` with default settings. The store must already be connected.
    pub fn new(store: S) -> Self {
        Self::with_config(store, ServiceConfig::default())
    }

    pub fn with_config(store: S, config: ServiceConfig) -> Self {
        Self::with_rules(store, StandardRules, config)
    }
}

impl<S: BoardStore, R: GameRules> BoardService<S, R> {
    pub fn with_rules(store: S, rules: R, config: ServiceConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            }
        };
        Self {
            store,
            rules,
            config,
            rng: Mutex::new(rng),
            locks: Mutex::new(HashMap::new()),
        }
    }

    /// The backing store.
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Number of boards with a lock entry. Entries live only while a request
    /// for that board is in flight.
    pub async fn locked_boards(&self) -> usize {
        self.locks.lock().await.len()
    }

    async fn lock_board(&self, id: &GridId) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().await;
            locks.entry(id.clone()).or_default().clone()
        };
        lock.lock_owned().await
    }

    /// Release a board lock and drop its entry once nobody else holds or waits on it.
    async fn unlock_board(&self, id: &GridId, guard: OwnedMutexGuard<()>) {
        drop(guard);
        let mut locks = self.locks.lock().await;
        // Clones are only taken under `locks`, so a count of one is stable here.
        if locks.get(id).is_some_and(|lock| Arc::strong_count(lock) == 1) {
            locks.remove(id);
        }
    }

    async fn load(&self, id: &GridId) -> Result<Option<Grid>, ApiError> {
        let snapshot = self
            .store
            .get(id)
            .await
            .map_err(|e| ApiError::Store(e.to_string()))?;
        match snapshot {
            Some(snapshot) => Grid::try_from(snapshot)
                .map(Some)
                .map_err(|e| ApiError::Store(format!("board {}: {}", id, e))),
            None => Ok(None),
        }
    }

    async fn save(&self, id: &GridId, snapshot: &GridSnapshot) -> Result<(), ApiError> {
        let stored = self
            .store
            .set(id, snapshot)
            .await
            .map_err(|e| ApiError::Store(e.to_string()))?;
        if stored {
            Ok(())
        } else {
            Err(ApiError::Store(format!("Store refused board {}", id)))
        }
    }

    async fn add_ship_locked(&self, id: &GridId, ship: ShipPlacement) -> Result<bool, ApiError> {
        let mut grid = self
            .load(id)
            .await?
            .ok_or_else(|| ApiError::BadRequest(unknown_board(id)))?;

        if let Err(reason) = self.rules.validate_placement(Some(&grid), Some(&ship)) {
            debug!("Placement {:?} on board {} rejected: {}", ship, id, reason);
            return Err(ApiError::BadRequest(format!(
                "Selected position is not available on board {}: {}",
                id, reason
            )));
        }

        let placed = self.rules.place(Some(&mut grid), Some(&ship));
        if placed {
            self.save(id, &GridSnapshot::from(grid)).await?;
            info!("Placed ship {:?} on board {}", ship, id);
        }
        Ok(placed)
    }

    async fn attack_locked(&self, id: &GridId, row: i32, col: i32) -> Result<bool, ApiError> {
        let mut grid = self
            .load(id)
            .await?
            .ok_or_else(|| ApiError::BadRequest(unknown_board(id)))?;

        let hit = self.rules.resolve(Some(&mut grid), row, col);
        if hit {
            self.save(id, &GridSnapshot::from(grid)).await?;
        }
        info!(
            "Attack on board {} at ({}, {}): {}",
            id,
            row,
            col,
            if hit { "hit" } else { "miss" }
        );
        Ok(hit)
    }
}

fn unknown_board(id: &GridId) -> String {
    format!("Unable to get board for request {}", id)
}

#[async_trait::async_trait]
impl<S: BoardStore, R: GameRules> BoardApi for BoardService<S, R> {
    async fn create_board(&self, size: i32) -> Result<GridId, ApiError> {
        if size <= 0 || size > self.config.max_size {
            warn!("Rejected board of size {}", size);
            return Err(ApiError::BadRequest(format!(
                "Board cannot be created of size {}",
                size
            )));
        }
        let id = {
            let mut rng = self.rng.lock().await;
            GridId::generate(&mut *rng)
        };
        let grid =
            Grid::with_id(id.clone(), size).map_err(|e| ApiError::BadRequest(e.to_string()))?;
        let guard = self.lock_board(&id).await;
        let saved = self.save(&id, &GridSnapshot::from(grid)).await;
        self.unlock_board(&id, guard).await;
        saved?;
        info!("Created board {} of size {}", id, size);
        Ok(id)
    }

    async fn get_board(&self, id: &GridId) -> Result<GridSnapshot, ApiError> {
        match self.load(id).await? {
            Some(grid) => Ok(GridSnapshot::from(grid)),
            None => Err(ApiError::NotFound(unknown_board(id))),
        }
    }

    async fn add_ship(&self, id: &GridId, ship: ShipPlacement) -> Result<bool, ApiError> {
        if ship.length <= 0 {
            return Err(ApiError::BadRequest("Cannot add ship of empty size".to_string()));
        }
        let guard = self.lock_board(id).await;
        let placed = self.add_ship_locked(id, ship).await;
        self.unlock_board(id, guard).await;
        placed
    }

    async fn attack(&self, id: &GridId, row: i32, col: i32) -> Result<bool, ApiError> {
        let guard = self.lock_board(id).await;
        let hit = self.attack_locked(id, row, col).await;
        self.unlock_board(id, guard).await;
        hit
    }
}
