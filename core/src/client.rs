//! Stateless request builder and response parser for the lakehouse API.
//!
//! # Design
//! `LakehouseClient` holds only a read-only `ClientConfig`. `build` turns an
//! `Operation` plus `Params` into an `HttpRequest` by reading the operation's
//! descriptor; `parse` turns the transport's `HttpResponse` into a
//! `Response<Payload>`. Neither touches the network, so both are
//! deterministic and the I/O boundary stays explicit.

use std::sync::Arc;

use serde_json::Map;
use tracing::{debug, warn};
use url::Url;

use crate::config::ClientConfig;
use crate::error::{ApiError, Result, ValidationError};
use crate::http::{merge_headers, HttpRequest, HttpResponse, RequestBody, ResponseType};
use crate::operations::{Location, Operation, OperationDescriptor};
use crate::params::{scalar_text, Params};
use crate::response::{Payload, Response};
use crate::validation::validate;

/// Builds request envelopes and parses responses for every registered
/// operation. Cloning is cheap; clones share the configuration.
#[derive(Debug, Clone)]
pub struct LakehouseClient {
    config: Arc<ClientConfig>,
    base: Url,
}

impl LakehouseClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let base = config.base_url()?;
        Ok(Self {
            config: Arc::new(config),
            base,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Validate `params` and assemble the request for `operation`.
    ///
    /// Validation failures are returned before anything else is computed.
    pub fn build(&self, operation: Operation, params: &Params) -> Result<HttpRequest> {
        let desc = operation.descriptor();
        validate(Some(params), &desc.required_fields(), &desc.accepted_fields())?;

        let url = self.endpoint(&resolve_path(desc, params)?);

        let query = desc
            .fields_at(Location::Query)
            .filter_map(|f| params.get(f.name).map(|v| (f.wire.to_string(), scalar_text(v))))
            .collect();

        let body = if desc.has_body() {
            let mut object = Map::new();
            for field in desc.fields_at(Location::Body) {
                if let Some(value) = params.get(field.name) {
                    object.insert(field.wire.to_string(), value.clone());
                }
            }
            let json = serde_json::to_string(&object)
                .map_err(|e| ApiError::Serialization(e.to_string()))?;
            Some(RequestBody::Json(json))
        } else if desc.has_form() {
            let fields = desc
                .fields_at(Location::Form)
                .filter_map(|f| params.get(f.name).map(|v| (f.wire.to_string(), scalar_text(v))))
                .collect();
            Some(RequestBody::Form(fields))
        } else {
            None
        };

        let headers = self.headers(desc, params, body.as_ref())?;

        let request = HttpRequest {
            method: desc.method,
            url,
            query,
            headers,
            body,
            response_type: desc.response_type,
        };
        debug!(
            operation = desc.id,
            method = %request.method,
            url = %request.url,
            query = request.query.len(),
            headers = request.headers.len(),
            "built request"
        );
        Ok(request)
    }

    /// Turn a transport response into the caller-facing envelope.
    ///
    /// Non-2xx statuses become `ApiError::Http` with the raw body. The body of
    /// a successful response is not inspected beyond JSON decoding.
    pub fn parse(&self, operation: Operation, response: HttpResponse) -> Result<Response<Payload>> {
        let desc = operation.descriptor();
        if !response.is_success() {
            warn!(operation = desc.id, status = response.status, "request failed");
            return Err(ApiError::Http {
                status: response.status,
                status_text: response.status_text,
                body: String::from_utf8_lossy(&response.body).into_owned(),
            });
        }

        let result = if response.body.is_empty() {
            Payload::Empty
        } else {
            match desc.response_type {
                ResponseType::Stream => Payload::Stream(response.body),
                ResponseType::Json => Payload::Json(
                    serde_json::from_slice(&response.body)
                        .map_err(|e| ApiError::Deserialization(e.to_string()))?,
                ),
            }
        };

        Ok(Response {
            result,
            status: response.status,
            status_text: response.status_text,
            headers: response.headers,
        })
    }

    /// Append an already-encoded operation path to the service URL's path.
    fn endpoint(&self, path: &str) -> String {
        let mut url = self.base.clone();
        url.set_path(&format!("{}{path}", self.base.path().trim_end_matches('/')));
        url.into()
    }

    /// Default headers, then operation headers, then caller overrides.
    fn headers(
        &self,
        desc: &OperationDescriptor,
        params: &Params,
        body: Option<&RequestBody>,
    ) -> Result<Vec<(String, String)>> {
        let mut headers = self.config.default_headers_for(desc.id);

        let mut operation_headers = Vec::new();
        if let Some(accept) = desc.accept {
            operation_headers.push(("Accept".to_string(), accept.to_string()));
        }
        if let Some(RequestBody::Json(_)) = body {
            operation_headers.push(("Content-Type".to_string(), "application/json".to_string()));
        }
        for field in desc.fields_at(Location::Header) {
            if let Some(value) = params.get(field.name) {
                operation_headers.push((field.wire.to_string(), scalar_text(value)));
            }
        }

        merge_headers(&mut headers, operation_headers);
        merge_headers(&mut headers, params.headers()?);
        Ok(headers)
    }
}

/// Substitute every placeholder, in template order, with its encoded value.
fn resolve_path(desc: &OperationDescriptor, params: &Params) -> Result<String> {
    let mut path = desc.path.to_string();
    for placeholder in desc.placeholders() {
        let value = desc
            .fields_at(Location::Path)
            .find(|f| f.wire == placeholder)
            .and_then(|f| params.get(f.name))
            .ok_or_else(|| ValidationError::missing(placeholder))?;
        path = path.replacen(
            &format!("{{{placeholder}}}"),
            &urlencoding::encode(&scalar_text(value)),
            1,
        );
    }
    Ok(path)
}
