/// Largest side length a board may be created with.
pub const MAX_GRID_SIZE: i32 = 1000;

/// Side length used by the demo and sim binaries.
pub const DEFAULT_GRID_SIZE: i32 = 10;

/// Version tag carried by every protocol envelope.
pub const PROTOCOL_VERSION: u32 = 1;

/// Default address the server binds to.
pub const DEFAULT_BIND: &str = "127.0.0.1:7878";

/// Default per-operation timeout for network transports, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum encoded message size accepted by the TCP transport (10 MB).
pub const MAX_MESSAGE_SIZE: u32 = 10_000_000;

/// Runtime settings for a `BoardService`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Upper bound on board side length accepted by `create_board`.
    pub max_size: i32,
    /// Fixed RNG seed for reproducible board identifiers.
    pub seed: Option<u64>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            max_size: MAX_GRID_SIZE,
            seed: None,
        }
    }
}

impl ServiceConfig {
    /// Same defaults with a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }
}
