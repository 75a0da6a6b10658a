//! Batched-fetch client for Towny-style map APIs.
//!
//! The engineered core is the bulk pipeline: an arbitrarily long key list
//! is split into request-sized batches, the batches run as concurrent POST
//! requests against the endpoint, each JSON array response is decoded with
//! unresolved keys kept as explicit `None` slots, and the per-batch results
//! are reassembled in batch order. The first hard failure aborts the whole
//! fetch; no partial results and no silently dropped or duplicated records.
//!
//! # Modules
//!
//! - [`client`] -- The typed fetch surface
//! - [`config`] -- Client configuration (base URL, world, batching, deadlines)
//! - [`endpoint`] -- The bulk endpoint table
//! - [`batch`] -- Splitting key lists into request-sized batches
//! - [`codec`] -- The `{"query": [...]}` wire envelope
//! - [`transport`] -- The HTTP seam, mockable in tests
//! - [`factory`] -- Raw payload to typed record, keyed by endpoint
//! - [`error`] -- The error taxonomy
//!
//! # Example
//!
//! ```no_run
//! use townlink_client::{Client, ClientConfig};
//!
//! # async fn demo() -> Result<(), townlink_client::ClientError> {
//! let client = Client::with_config(ClientConfig::default().with_batch_size(50))?;
//! let towns = client.towns(&["Harbor", "Cliffside"]).await?;
//! for slot in &towns {
//!     match slot {
//!         Some(town) => println!("{} has {} residents", town.name, town.stats.num_residents),
//!         None => println!("no such town"),
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod batch;
pub mod client;
pub mod codec;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod factory;
pub mod transport;

mod assemble;
mod dispatch;

pub use batch::{Batch, MAX_BATCH_SIZE, split};
pub use client::Client;
pub use config::{ClientConfig, DEFAULT_BASE_URL, World};
pub use endpoint::Endpoint;
pub use error::{ClientError, RemoteKind};
pub use factory::{BulkEntity, Record, build};
pub use transport::{HttpTransport, RawResponse, Transport};

/// Re-export of the record and identifier types crate.
pub use townlink_types as types;
