//! The client: typed fetch methods over the batched pipeline.
//!
//! Every bulk method runs the same pipeline: split the keys into batches,
//! dispatch the batches concurrently, concatenate the results in batch
//! order, then decode each slot into its record type. The caller gets back
//! either a complete, correctly ordered result or a single failure; an
//! unresolved key is `None` at its position, not an error.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::time::timeout;
use tracing::debug;
use uuid::Uuid;

use townlink_types::{
    DiscordLink, DiscordQuery, DiscordQueryKind, LocationInfo, Nation, NationIdentifier, Player,
    PlayerIdentifier, Quarter, QuarterIdentifier, ServerStatus, Town, TownIdentifier,
    decode_identifier_list,
};

use crate::assemble;
use crate::batch;
use crate::config::ClientConfig;
use crate::dispatch;
use crate::endpoint::Endpoint;
use crate::error::ClientError;
use crate::factory::BulkEntity;
use crate::transport::{HttpTransport, RawResponse, Transport};

/// The API client.
///
/// Cheap to clone; all clones share one transport (and therefore one HTTP
/// connection pool). Each fetch call owns its batches and results, so no
/// other state is shared between concurrent calls.
#[derive(Clone)]
pub struct Client {
    config: ClientConfig,
    transport: Arc<dyn Transport>,
}

impl Client {
    /// Create a client with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] if the HTTP transport cannot be
    /// constructed.
    pub fn new() -> Result<Self, ClientError> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client with a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] if the HTTP transport cannot be
    /// constructed.
    pub fn with_config(config: ClientConfig) -> Result<Self, ClientError> {
        let transport = Arc::new(HttpTransport::new(&config)?);
        Ok(Self { config, transport })
    }

    /// Create a client over a custom transport.
    ///
    /// The seam for tests and instrumentation; production callers use
    /// [`Client::with_config`].
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    /// The configuration this client was built with.
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    // -----------------------------------------------------------------------
    // Bulk fetches
    // -----------------------------------------------------------------------

    /// Fetch players by name or UUID string.
    ///
    /// One output slot per key, in key order; `None` marks a key the
    /// service could not resolve.
    pub async fn players<S: AsRef<str>>(
        &self,
        query: &[S],
    ) -> Result<Vec<Option<Player>>, ClientError> {
        self.fetch_bulk(&owned_keys(query)).await
    }

    /// Fetch towns by name or UUID string.
    pub async fn towns<S: AsRef<str>>(
        &self,
        query: &[S],
    ) -> Result<Vec<Option<Town>>, ClientError> {
        self.fetch_bulk(&owned_keys(query)).await
    }

    /// Fetch nations by name or UUID string.
    pub async fn nations<S: AsRef<str>>(
        &self,
        query: &[S],
    ) -> Result<Vec<Option<Nation>>, ClientError> {
        self.fetch_bulk(&owned_keys(query)).await
    }

    /// Fetch quarters by UUID string.
    pub async fn quarters<S: AsRef<str>>(
        &self,
        query: &[S],
    ) -> Result<Vec<Option<Quarter>>, ClientError> {
        self.fetch_bulk(&owned_keys(query)).await
    }

    /// Fetch discord links for a list of targets on one side of the link.
    pub async fn discord_links<S: AsRef<str>>(
        &self,
        kind: DiscordQueryKind,
        targets: &[S],
    ) -> Result<Vec<Option<DiscordLink>>, ClientError> {
        let queries: Vec<DiscordQuery> = targets
            .iter()
            .map(|target| DiscordQuery::new(kind, target.as_ref()))
            .collect();
        self.fetch_bulk(&queries).await
    }

    /// Look up what claims each `(x, z)` map coordinate.
    pub async fn location_info(
        &self,
        points: &[(i32, i32)],
    ) -> Result<Vec<Option<LocationInfo>>, ClientError> {
        self.fetch_bulk(points).await
    }

    // -----------------------------------------------------------------------
    // UUID and identifier conveniences
    // -----------------------------------------------------------------------

    /// Fetch players by UUID.
    pub async fn players_by_uuids(
        &self,
        query: &[Uuid],
    ) -> Result<Vec<Option<Player>>, ClientError> {
        self.players(&uuid_keys(query)).await
    }

    /// Fetch towns by UUID.
    pub async fn towns_by_uuids(&self, query: &[Uuid]) -> Result<Vec<Option<Town>>, ClientError> {
        self.towns(&uuid_keys(query)).await
    }

    /// Fetch nations by UUID.
    pub async fn nations_by_uuids(
        &self,
        query: &[Uuid],
    ) -> Result<Vec<Option<Nation>>, ClientError> {
        self.nations(&uuid_keys(query)).await
    }

    /// Fetch quarters by UUID.
    pub async fn quarters_by_uuids(
        &self,
        query: &[Uuid],
    ) -> Result<Vec<Option<Quarter>>, ClientError> {
        self.quarters(&uuid_keys(query)).await
    }

    /// Fetch players referenced by identifiers.
    ///
    /// Empty references query as the empty string, which the service
    /// resolves to `None`, so the output stays aligned with the input.
    pub async fn players_by_identifiers(
        &self,
        query: &[PlayerIdentifier],
    ) -> Result<Vec<Option<Player>>, ClientError> {
        let keys: Vec<String> = query.iter().map(|id| id.query_key().unwrap_or_default()).collect();
        self.players(&keys).await
    }

    /// Fetch towns referenced by identifiers.
    pub async fn towns_by_identifiers(
        &self,
        query: &[TownIdentifier],
    ) -> Result<Vec<Option<Town>>, ClientError> {
        let keys: Vec<String> = query.iter().map(|id| id.query_key().unwrap_or_default()).collect();
        self.towns(&keys).await
    }

    /// Fetch nations referenced by identifiers.
    pub async fn nations_by_identifiers(
        &self,
        query: &[NationIdentifier],
    ) -> Result<Vec<Option<Nation>>, ClientError> {
        let keys: Vec<String> = query.iter().map(|id| id.query_key().unwrap_or_default()).collect();
        self.nations(&keys).await
    }

    /// Fetch quarters referenced by identifiers.
    pub async fn quarters_by_identifiers(
        &self,
        query: &[QuarterIdentifier],
    ) -> Result<Vec<Option<Quarter>>, ClientError> {
        let keys: Vec<String> = query.iter().map(|id| id.query_key().unwrap_or_default()).collect();
        self.quarters(&keys).await
    }

    // -----------------------------------------------------------------------
    // Single lookups
    // -----------------------------------------------------------------------

    /// Fetch one player by name or UUID string.
    pub async fn player(&self, key: &str) -> Result<Option<Player>, ClientError> {
        Ok(self.players(&[key]).await?.into_iter().next().flatten())
    }

    /// Fetch one town by name or UUID string.
    pub async fn town(&self, key: &str) -> Result<Option<Town>, ClientError> {
        Ok(self.towns(&[key]).await?.into_iter().next().flatten())
    }

    /// Fetch one nation by name or UUID string.
    pub async fn nation(&self, key: &str) -> Result<Option<Nation>, ClientError> {
        Ok(self.nations(&[key]).await?.into_iter().next().flatten())
    }

    /// Fetch one quarter by UUID string.
    pub async fn quarter(&self, key: &str) -> Result<Option<Quarter>, ClientError> {
        Ok(self.quarters(&[key]).await?.into_iter().next().flatten())
    }

    /// Fetch one discord link.
    pub async fn discord_link(
        &self,
        kind: DiscordQueryKind,
        target: &str,
    ) -> Result<Option<DiscordLink>, ClientError> {
        Ok(self
            .discord_links(kind, &[target])
            .await?
            .into_iter()
            .next()
            .flatten())
    }

    /// Look up what claims one `(x, z)` map coordinate.
    pub async fn location_info_at(
        &self,
        x: i32,
        z: i32,
    ) -> Result<Option<LocationInfo>, ClientError> {
        Ok(self
            .location_info(&[(x, z)])
            .await?
            .into_iter()
            .next()
            .flatten())
    }

    // -----------------------------------------------------------------------
    // Listings and lookups outside the bulk engine
    // -----------------------------------------------------------------------

    /// List every player as a lightweight identifier.
    pub async fn all_player_identifiers(&self) -> Result<Vec<PlayerIdentifier>, ClientError> {
        self.identifier_list(self.config.endpoint_url(Endpoint::Players))
            .await
    }

    /// List every town as a lightweight identifier.
    pub async fn all_town_identifiers(&self) -> Result<Vec<TownIdentifier>, ClientError> {
        self.identifier_list(self.config.endpoint_url(Endpoint::Towns))
            .await
    }

    /// List every nation as a lightweight identifier.
    pub async fn all_nation_identifiers(&self) -> Result<Vec<NationIdentifier>, ClientError> {
        self.identifier_list(self.config.endpoint_url(Endpoint::Nations))
            .await
    }

    /// List every quarter as a lightweight identifier.
    pub async fn all_quarter_identifiers(&self) -> Result<Vec<QuarterIdentifier>, ClientError> {
        self.identifier_list(self.config.endpoint_url(Endpoint::Quarters))
            .await
    }

    /// Towns within `radius` town blocks of another town.
    pub async fn towns_nearby_town(
        &self,
        key: &str,
        radius: u32,
    ) -> Result<Vec<TownIdentifier>, ClientError> {
        let url = format!(
            "{}/nearby/town?town={key}&radius={radius}",
            self.config.world_url()
        );
        self.identifier_list(url).await
    }

    /// Towns within `radius` town blocks of a coordinate.
    pub async fn towns_nearby_coordinate(
        &self,
        x: i32,
        z: i32,
        radius: u32,
    ) -> Result<Vec<TownIdentifier>, ClientError> {
        let url = format!(
            "{}/nearby/coordinate?x={x}&z={z}&radius={radius}",
            self.config.world_url()
        );
        self.identifier_list(url).await
    }

    /// Fetch the world's server status document.
    pub async fn server(&self) -> Result<ServerStatus, ClientError> {
        let url = self.config.world_url();
        let raw = self.get_json(&url).await?;
        ServerStatus::from_raw(raw).map_err(|e| ClientError::Decode {
            url,
            offset: 0,
            reason: e.to_string(),
        })
    }

    // -----------------------------------------------------------------------
    // Pipeline
    // -----------------------------------------------------------------------

    /// The shared bulk pipeline: batch, dispatch, assemble, decode.
    ///
    /// An empty key list short-circuits to an empty result without any
    /// network call. When a whole-fetch deadline is configured, expiry
    /// cancels every in-flight batch request and surfaces
    /// [`ClientError::DeadlineExceeded`]; partial results are never
    /// returned.
    async fn fetch_bulk<K, T>(&self, keys: &[K]) -> Result<Vec<Option<T>>, ClientError>
    where
        K: Serialize + Clone,
        T: BulkEntity,
    {
        if keys.is_empty() {
            return Ok(Vec::new());
        }

        let endpoint = T::ENDPOINT;
        let url = self.config.endpoint_url(endpoint);
        let batches = batch::split(keys, self.config.batch_size);
        debug!(
            endpoint = %endpoint,
            keys = keys.len(),
            batches = batches.len(),
            "bulk fetch"
        );

        let pipeline = async {
            let per_batch = dispatch::dispatch(
                self.transport.as_ref(),
                &url,
                batches,
                self.config.max_concurrent_requests,
            )
            .await?;
            Ok::<_, ClientError>(assemble::concatenate(per_batch))
        };

        let slots = match self.config.fetch_deadline {
            Some(deadline) => timeout(deadline, pipeline)
                .await
                .map_err(|_| ClientError::DeadlineExceeded)??,
            None => pipeline.await?,
        };

        slots
            .into_iter()
            .enumerate()
            .map(|(offset, slot)| match slot {
                None => Ok(None),
                Some(raw) => T::from_raw(raw).map(Some).map_err(|e| ClientError::Decode {
                    url: url.clone(),
                    offset,
                    reason: e.to_string(),
                }),
            })
            .collect()
    }

    /// GET a URL and parse the body as JSON, mapping non-2xx to
    /// [`ClientError::Remote`].
    async fn get_json(&self, url: &str) -> Result<Value, ClientError> {
        let response = self.transport.get(url).await?;
        check_status(url, &response)?;
        serde_json::from_str(&response.body).map_err(|e| ClientError::Decode {
            url: url.to_owned(),
            offset: 0,
            reason: format!("response body is not valid JSON: {e}"),
        })
    }

    /// GET a URL expected to hold a JSON array of `{name, uuid}` objects.
    async fn identifier_list<T: DeserializeOwned>(
        &self,
        url: String,
    ) -> Result<Vec<T>, ClientError> {
        let parsed = self.get_json(&url).await?;
        let Value::Array(elements) = parsed else {
            return Err(ClientError::Decode {
                url,
                offset: 0,
                reason: "expected a top-level JSON array".to_owned(),
            });
        };
        Ok(decode_identifier_list(&elements))
    }
}

/// Map non-2xx responses to [`ClientError::Remote`] for non-batch requests.
fn check_status(url: &str, response: &RawResponse) -> Result<(), ClientError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ClientError::Remote {
        status: response.status,
        url: url.to_owned(),
        body: response.body.clone(),
        batch: None,
    })
}

/// Copy borrowed keys into owned strings for the pipeline.
fn owned_keys<S: AsRef<str>>(query: &[S]) -> Vec<String> {
    query.iter().map(|key| key.as_ref().to_owned()).collect()
}

/// Render UUIDs in their canonical text form.
fn uuid_keys(query: &[Uuid]) -> Vec<String> {
    query.iter().map(Uuid::to_string).collect()
}
