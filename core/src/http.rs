//! HTTP transport types and the transport seam.
//!
//! # Design
//! Requests and responses are plain data. `LakehouseClient` builds an
//! `HttpRequest` and parses an `HttpResponse` without touching the network;
//! whoever implements `Transport` performs the exchange. Authentication,
//! pooling, TLS, retries and timeouts all belong to that implementation.
//!
//! All fields use owned types (`String`, `Vec`, `Bytes`) so envelopes can be
//! handed across threads and FFI boundaries without lifetime concerns.

use std::fmt;

use async_trait::async_trait;
use bytes::Bytes;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the transport should hand back the response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseType {
    /// The body is a JSON document (or empty).
    Json,
    /// The body is an opaque byte stream and must not be decoded.
    Stream,
}

/// Request payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBody {
    /// A serialized JSON object.
    Json(String),
    /// Form fields in declaration order. The transport picks the encoding.
    Form(Vec<(String, String)>),
}

impl RequestBody {
    pub fn as_json(&self) -> Option<&str> {
        match self {
            RequestBody::Json(s) => Some(s),
            RequestBody::Form(_) => None,
        }
    }

    pub fn as_form(&self) -> Option<&[(String, String)]> {
        match self {
            RequestBody::Json(_) => None,
            RequestBody::Form(fields) => Some(fields),
        }
    }
}

/// A fully assembled request envelope.
///
/// `url` is the service URL joined with the resolved path; query pairs are
/// kept separate so transports can hand them to their own encoder. Use
/// [`HttpRequest::full_url`] for the rendered form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<RequestBody>,
    pub response_type: ResponseType,
}

impl HttpRequest {
    /// The URL with the query string appended, percent-encoded.
    pub fn full_url(&self) -> String {
        if self.query.is_empty() {
            return self.url.clone();
        }
        format!("{}?{}", self.url, urlencode_pairs(&self.query))
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Percent-encode `k=v` pairs joined with `&`, as used for query strings
/// and form bodies.
pub fn urlencode_pairs(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// A response as returned by a `Transport`.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub headers: Vec<(String, String)>,
    pub body: Bytes,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Error produced by a transport. Passed through to callers untouched.
pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

/// Performs the network exchange for an assembled request.
///
/// Implementations own authentication, retries and timeouts. Dropping the
/// returned future cancels the call.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).execute(request).await
    }
}

/// Fold `incoming` into `headers`. An entry whose name matches an existing
/// one (ignoring case) replaces it in place, spelling included; new names are
/// appended.
pub(crate) fn merge_headers(headers: &mut Vec<(String, String)>, incoming: Vec<(String, String)>) {
    for (name, value) in incoming {
        match headers.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(&name)) {
            Some(slot) => *slot = (name, value),
            None => headers.push((name, value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(query: Vec<(&str, &str)>) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: "http://localhost:3000/tables".to_string(),
            query: query
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            headers: vec![("Accept".to_string(), "application/json".to_string())],
            body: None,
            response_type: ResponseType::Json,
        }
    }

    #[test]
    fn full_url_without_query_is_the_url() {
        assert_eq!(request(vec![]).full_url(), "http://localhost:3000/tables");
    }

    #[test]
    fn full_url_encodes_query_pairs() {
        let req = request(vec![("engine_id", "presto 01"), ("catalog_name", "a&b")]);
        assert_eq!(
            req.full_url(),
            "http://localhost:3000/tables?engine_id=presto%2001&catalog_name=a%26b"
        );
    }

    #[test]
    fn header_lookup_ignores_case() {
        let req = request(vec![]);
        assert_eq!(req.header("accept"), Some("application/json"));
        assert_eq!(req.header("content-type"), None);
    }

    #[test]
    fn method_renders_upper_case() {
        assert_eq!(HttpMethod::Patch.to_string(), "PATCH");
        assert_eq!(HttpMethod::Delete.as_str(), "DELETE");
    }

    #[test]
    fn merge_replaces_in_place_ignoring_case() {
        let mut headers = vec![
            ("User-Agent".to_string(), "a".to_string()),
            ("Accept".to_string(), "application/json".to_string()),
        ];
        merge_headers(
            &mut headers,
            vec![
                ("accept".to_string(), "text/csv".to_string()),
                ("X-Trace".to_string(), "1".to_string()),
                ("ACCEPT".to_string(), "text/plain".to_string()),
            ],
        );
        assert_eq!(
            headers,
            vec![
                ("User-Agent".to_string(), "a".to_string()),
                ("ACCEPT".to_string(), "text/plain".to_string()),
                ("X-Trace".to_string(), "1".to_string()),
            ]
        );
    }
}
