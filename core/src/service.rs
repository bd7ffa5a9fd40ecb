//! Operation dispatcher bound to a transport.
//!
//! `LakehouseService` pairs a `LakehouseClient` with a `Transport` and exposes
//! one async method per registered operation (generated alongside the
//! registry). Every call validates, builds, sends once and parses; nothing is
//! shared between calls except the read-only configuration.

use tracing::instrument;

use crate::client::LakehouseClient;
use crate::config::ClientConfig;
use crate::error::{ApiError, Result};
use crate::http::Transport;
use crate::operations::Operation;
use crate::params::Params;
use crate::response::{Payload, Response};

#[derive(Debug, Clone)]
pub struct LakehouseService<T> {
    client: LakehouseClient,
    transport: T,
}

impl<T: Transport> LakehouseService<T> {
    pub fn new(config: ClientConfig, transport: T) -> Result<Self> {
        Ok(Self::with_client(LakehouseClient::new(config)?, transport))
    }

    pub fn with_client(client: LakehouseClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &LakehouseClient {
        &self.client
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Invoke `operation` with `params`.
    ///
    /// Invalid parameters fail before the transport is called. Transport
    /// failures are returned as `ApiError::Transport` with their source intact.
    #[instrument(skip(self, operation, params), fields(operation = operation.id()))]
    pub async fn call(&self, operation: Operation, params: Params) -> Result<Response<Payload>> {
        let request = self.client.build(operation, &params)?;
        let response = self
            .transport
            .execute(request)
            .await
            .map_err(ApiError::Transport)?;
        self.client.parse(operation, response)
    }
}
