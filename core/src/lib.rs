//! Client core for the lakehouse data-platform API.
//!
//! # Overview
//! Exposes bucket, catalog, engine, table and policy management plus SQL
//! execution as typed calls. Each operation is described once in a static
//! registry; the client validates parameters against it, assembles the
//! request envelope and hands it to a caller-supplied `Transport`.
//!
//! # Design
//! - `LakehouseClient` is stateless and I/O-free: `build` produces an
//!   `HttpRequest`, `parse` consumes an `HttpResponse`.
//! - `LakehouseService<T: Transport>` adds the network hop and one async
//!   method per operation.
//! - Validation failures never reach the transport; transport failures are
//!   passed through untouched.
//!
//! # Example
//!
//! ```no_run
//! use lakehouse_core::{ClientConfig, LakehouseService, Params, Transport};
//!
//! # async fn run<T: Transport>(transport: T) -> Result<(), lakehouse_core::ApiError> {
//! let service = LakehouseService::new(ClientConfig::new("https://lakehouse.example.com/lakehouse/api/v1"), transport)?;
//! let users = service
//!     .get_engine_users(Params::new().set("engineId", "presto01"))
//!     .await?;
//! println!("{:?}", users.result);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod operations;
pub mod params;
pub mod response;
pub mod service;
pub mod validation;

pub use client::LakehouseClient;
pub use config::ClientConfig;
pub use error::{ApiError, ValidationError, ValidationErrorKind};
pub use http::{
    HttpMethod, HttpRequest, HttpResponse, RequestBody, ResponseType, Transport, TransportError,
};
pub use operations::{Field, Location, Operation, OperationDescriptor};
pub use params::Params;
pub use response::{Payload, Response};
pub use service::LakehouseService;
pub use validation::validate;
