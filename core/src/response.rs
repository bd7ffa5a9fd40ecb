//! Response envelope handed back to callers.

use bytes::{Buf, Bytes};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiError;

/// Result of a successful call, as delivered by the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct Response<T> {
    pub result: T,
    pub status: u16,
    pub status_text: String,
    pub headers: Vec<(String, String)>,
}

impl<T> Response<T> {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Response<U> {
        Response {
            result: f(self.result),
            status: self.status,
            status_text: self.status_text,
            headers: self.headers,
        }
    }
}

impl Response<Payload> {
    /// Decode a JSON result into a caller-defined model.
    pub fn into_typed<U: DeserializeOwned>(self) -> Result<Response<U>, ApiError> {
        let value = match &self.result {
            Payload::Json(value) => value.clone(),
            Payload::Empty => Value::Null,
            Payload::Stream(bytes) => serde_json::from_slice(bytes)
                .map_err(|e| ApiError::Deserialization(e.to_string()))?,
        };
        let typed =
            serde_json::from_value(value).map_err(|e| ApiError::Deserialization(e.to_string()))?;
        Ok(self.map(|_| typed))
    }
}

/// Untyped result of an operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// A decoded JSON document.
    Json(Value),
    /// Raw bytes from an operation that returns an opaque stream.
    Stream(Bytes),
    /// The service sent no body.
    Empty,
}

impl Payload {
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Payload::Json(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Payload::Empty)
    }

    /// A reader over the payload bytes. JSON payloads are re-serialized.
    pub fn into_reader(self) -> impl std::io::Read {
        let bytes = match self {
            Payload::Stream(bytes) => bytes,
            Payload::Json(value) => Bytes::from(value.to_string()),
            Payload::Empty => Bytes::new(),
        };
        bytes.reader()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Read;

    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Engine {
        engine_id: String,
    }

    fn response(result: Payload) -> Response<Payload> {
        Response {
            result,
            status: 200,
            status_text: "OK".to_string(),
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
        }
    }

    #[test]
    fn into_typed_decodes_json() {
        let typed: Response<Engine> = response(Payload::Json(json!({"engine_id": "presto01"})))
            .into_typed()
            .unwrap();
        assert_eq!(typed.result.engine_id, "presto01");
        assert_eq!(typed.header("content-type"), Some("application/json"));
    }

    #[test]
    fn into_typed_reports_shape_mismatch() {
        let err = response(Payload::Json(json!({"id": 1})))
            .into_typed::<Engine>()
            .unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }

    #[test]
    fn into_typed_empty_as_unit() {
        let typed: Response<()> = response(Payload::Empty).into_typed().unwrap();
        assert_eq!(typed.status, 200);
    }

    #[test]
    fn stream_payload_is_readable() {
        let mut out = String::new();
        Payload::Stream(Bytes::from_static(b"engine accepted"))
            .into_reader()
            .read_to_string(&mut out)
            .unwrap();
        assert_eq!(out, "engine accepted");
    }
}
