//! Client configuration.
//!
//! All tunables live in one value constructed up front and handed to the
//! client; nothing here is process-global. The batch size in particular is
//! per-config, not a static, so two clients can batch differently.

use std::num::NonZeroUsize;
use std::time::Duration;

use crate::batch::MAX_BATCH_SIZE;
use crate::endpoint::Endpoint;

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.earthmc.net/v3";

/// Default per-request timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// The world (shard) a client addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum World {
    /// The main world.
    Aurora,
    /// Any other world, by its path segment.
    Custom(String),
}

impl World {
    /// The world's path segment under the base URL.
    pub fn path(&self) -> &str {
        match self {
            Self::Aurora => "aurora",
            Self::Custom(name) => name,
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::Aurora
    }
}

impl core::fmt::Display for World {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.path())
    }
}

/// Complete client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL, without a trailing slash.
    pub base_url: String,
    /// The world to address.
    pub world: World,
    /// Maximum keys per request; clamped to `[1, 100]` when batching.
    pub batch_size: usize,
    /// Per-request timeout on the underlying HTTP client.
    pub request_timeout: Duration,
    /// Deadline for one whole fetch across all its batches. `None` leaves
    /// only the per-request timeout in force.
    pub fetch_deadline: Option<Duration>,
    /// Maximum batch requests in flight at once.
    pub max_concurrent_requests: usize,
    /// User agent sent with every request.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            world: World::default(),
            batch_size: MAX_BATCH_SIZE,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            fetch_deadline: None,
            max_concurrent_requests: default_concurrency(),
            user_agent: concat!("townlink/", env!("CARGO_PKG_VERSION")).to_owned(),
        }
    }
}

impl ClientConfig {
    /// Set the API base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the world to address.
    pub fn with_world(mut self, world: World) -> Self {
        self.world = world;
        self
    }

    /// Set the maximum keys per request.
    pub const fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Set the per-request timeout.
    pub const fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Set the whole-fetch deadline.
    pub const fn with_fetch_deadline(mut self, deadline: Duration) -> Self {
        self.fetch_deadline = Some(deadline);
        self
    }

    /// Set the maximum batch requests in flight at once.
    pub const fn with_max_concurrent_requests(mut self, limit: usize) -> Self {
        self.max_concurrent_requests = limit;
        self
    }

    /// The URL of the world root (the server status document).
    pub fn world_url(&self) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), self.world.path())
    }

    /// The URL of a bulk endpoint under the configured world.
    pub fn endpoint_url(&self, endpoint: Endpoint) -> String {
        format!("{}/{}", self.world_url(), endpoint.path())
    }
}

/// Default request concurrency: the host's parallelism.
fn default_concurrency() -> usize {
    std::thread::available_parallelism().map_or(4, NonZeroUsize::get)
}
