//! `#[repr(C)]` types for the FFI boundary.
//!
//! # Design
//! Each type mirrors a core type but uses C-compatible representations:
//! `*mut c_char` instead of `String`, pointer plus length instead of `Vec`,
//! and tagged enums with explicit discriminants. Conversion functions live
//! here to keep `lib.rs` focused on the `extern "C"` surface.

use std::ffi::{c_void, CString};
use std::os::raw::c_char;

use lakehouse_core::http::{urlencode_pairs, HttpMethod, RequestBody, ResponseType};
use lakehouse_core::{ApiError, HttpRequest, Payload};

/// Opaque handle to a `LakehouseClient`. C callers receive a pointer to this
/// and pass it back into every FFI function.
pub struct FfiLakehouseClient {
    pub(crate) inner: lakehouse_core::LakehouseClient,
}

/// Copy `s` into a heap C string. Interior NUL bytes cannot cross the
/// boundary and are reported as a serialization failure.
pub(crate) fn c_string(s: impl Into<Vec<u8>>) -> Result<*mut c_char, ApiError> {
    CString::new(s)
        .map(CString::into_raw)
        .map_err(|e| ApiError::Serialization(format!("interior NUL byte at {}", e.nul_position())))
}

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// HTTP method as a C enum.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiHttpMethod {
    Get = 0,
    Post = 1,
    Put = 2,
    Patch = 3,
    Delete = 4,
}

impl From<HttpMethod> for FfiHttpMethod {
    fn from(m: HttpMethod) -> Self {
        match m {
            HttpMethod::Get => FfiHttpMethod::Get,
            HttpMethod::Post => FfiHttpMethod::Post,
            HttpMethod::Put => FfiHttpMethod::Put,
            HttpMethod::Patch => FfiHttpMethod::Patch,
            HttpMethod::Delete => FfiHttpMethod::Delete,
        }
    }
}

/// A single HTTP header as a key-value pair of C strings.
#[repr(C)]
pub struct FfiHeader {
    pub key: *mut c_char,
    pub value: *mut c_char,
}

/// An HTTP request described as C-compatible plain data.
///
/// `url` already carries the encoded query string. `body` is JSON text, or
/// an `application/x-www-form-urlencoded` string when `is_form` is set, or
/// null. When `is_stream` is set the response body must be handed back
/// unchanged, byte for byte.
#[repr(C)]
pub struct FfiHttpRequest {
    pub method: FfiHttpMethod,
    pub url: *mut c_char,
    pub headers: *mut FfiHeader,
    pub headers_len: u32,
    pub body: *mut c_char,
    pub is_form: bool,
    pub is_stream: bool,
}

impl FfiHttpRequest {
    /// Convert a core `HttpRequest` into a heap-allocated `FfiHttpRequest`.
    ///
    /// On error every string allocated so far is released again.
    pub(crate) fn from_core(req: HttpRequest) -> Result<*mut Self, ApiError> {
        let mut ffi = FfiHttpRequest {
            method: req.method.into(),
            url: std::ptr::null_mut(),
            headers: std::ptr::null_mut(),
            headers_len: 0,
            body: std::ptr::null_mut(),
            is_form: matches!(req.body, Some(RequestBody::Form(_))),
            is_stream: req.response_type == ResponseType::Stream,
        };
        match ffi.fill(&req) {
            Ok(()) => Ok(Box::into_raw(Box::new(ffi))),
            Err(e) => {
                // SAFETY: every pointer in `ffi` is either null or was
                // produced by `fill` through `CString::into_raw`.
                unsafe { ffi.release() };
                Err(e)
            }
        }
    }

    fn fill(&mut self, req: &HttpRequest) -> Result<(), ApiError> {
        self.url = c_string(req.full_url())?;
        self.body = match &req.body {
            Some(RequestBody::Json(json)) => c_string(json.as_str())?,
            Some(RequestBody::Form(fields)) => c_string(urlencode_pairs(fields))?,
            None => std::ptr::null_mut(),
        };

        let mut headers = Vec::with_capacity(req.headers.len());
        for (k, v) in &req.headers {
            let key = c_string(k.as_str());
            let value = c_string(v.as_str());
            match (key, value) {
                (Ok(key), Ok(value)) => headers.push(FfiHeader { key, value }),
                (key, value) => {
                    for ptr in [key.ok(), value.ok()].into_iter().flatten() {
                        // SAFETY: produced by `c_string` just above.
                        drop(unsafe { CString::from_raw(ptr) });
                    }
                    self.set_headers(headers)?;
                    return Err(ApiError::Serialization(format!("header {k} is not a C string")));
                }
            }
        }
        self.set_headers(headers)
    }

    /// Hand the header array over to this request. If the count does not fit
    /// `headers_len` the strings are freed here and nothing is attached.
    fn set_headers(&mut self, headers: Vec<FfiHeader>) -> Result<(), ApiError> {
        let len = match c_len(headers.len()) {
            Ok(len) => len,
            Err(e) => {
                for h in &headers {
                    free_c_string(h.key);
                    free_c_string(h.value);
                }
                return Err(e);
            }
        };
        self.headers_len = len;
        self.headers = if headers.is_empty() {
            std::ptr::null_mut()
        } else {
            Box::into_raw(headers.into_boxed_slice()) as *mut FfiHeader
        };
        Ok(())
    }

    /// Free every string and the header array owned by this request.
    ///
    /// # Safety
    /// All pointers must be null or come from `from_core`, and must not have
    /// been freed already.
    pub(crate) unsafe fn release(&mut self) {
        free_c_string(self.url);
        free_c_string(self.body);
        if !self.headers.is_null() && self.headers_len > 0 {
            let slice = std::ptr::slice_from_raw_parts_mut(self.headers, self.headers_len as usize);
            let headers = unsafe { Box::from_raw(slice) };
            for h in headers.iter() {
                free_c_string(h.key);
                free_c_string(h.value);
            }
        }
        self.url = std::ptr::null_mut();
        self.body = std::ptr::null_mut();
        self.headers = std::ptr::null_mut();
        self.headers_len = 0;
    }
}

/// A collection length as the `u32` the C side sees.
pub(crate) fn c_len(len: usize) -> Result<u32, ApiError> {
    u32::try_from(len)
        .map_err(|_| ApiError::Serialization(format!("{len} entries do not fit a u32 length")))
}

pub(crate) fn free_c_string(s: *mut c_char) {
    if !s.is_null() {
        // SAFETY: callers only pass pointers from `CString::into_raw`.
        drop(unsafe { CString::from_raw(s) });
    }
}

// ---------------------------------------------------------------------------
// Response input (caller-provided, not heap-allocated by us)
// ---------------------------------------------------------------------------

/// An HTTP response described as C-compatible plain data.
///
/// The C caller constructs this after executing the request, then passes a
/// pointer to `lh_parse_response`. The FFI layer copies but does not free
/// these fields. `body` may be null when `body_len` is zero, and
/// `status_text` may be null.
#[repr(C)]
pub struct FfiHttpResponse {
    pub status: u16,
    pub status_text: *const c_char,
    pub body: *const u8,
    pub body_len: usize,
}

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Error codes returned in `FfiLakehouseResult`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiErrorCode {
    Ok = 0,
    Validation = 1,
    Http = 2,
    Deserialization = 3,
    Serialization = 4,
    UnknownOperation = 5,
    Config = 6,
    Transport = 7,
    Panic = 8,
    NullArg = 9,
}

/// Tag that tells `lh_free_result` what `FfiLakehouseResult::data` points to.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiDataTag {
    None = 0,
    /// `data` is a `FfiHttpRequest*`.
    Request = 1,
    /// `data` is a NUL-terminated JSON document.
    Json = 2,
    /// `data` is a `FfiBytes*`.
    Bytes = 3,
}

/// An owned byte buffer, used for stream responses.
#[repr(C)]
pub struct FfiBytes {
    pub data: *mut u8,
    pub len: usize,
}

/// Result envelope for build and parse calls.
///
/// On success `error_code` is `Ok`, `error_message` is null, and `data`
/// points to the payload tagged by `data_tag` (`None` for empty bodies).
/// On failure `error_code` describes the category, `error_message` is a
/// human-readable C string, and `data` is null. `http_status` is set on
/// every parse result and on `Http` errors.
#[repr(C)]
pub struct FfiLakehouseResult {
    pub error_code: FfiErrorCode,
    pub error_message: *mut c_char,
    pub http_status: u16,
    pub data_tag: FfiDataTag,
    pub data: *mut c_void,
}

impl FfiLakehouseResult {
    fn boxed(
        error_code: FfiErrorCode,
        error_message: *mut c_char,
        http_status: u16,
        data_tag: FfiDataTag,
        data: *mut c_void,
    ) -> *mut Self {
        Box::into_raw(Box::new(FfiLakehouseResult {
            error_code,
            error_message,
            http_status,
            data_tag,
            data,
        }))
    }

    /// Build a success result carrying a request envelope.
    pub(crate) fn ok_request(req: HttpRequest) -> *mut Self {
        match FfiHttpRequest::from_core(req) {
            Ok(ptr) => Self::boxed(
                FfiErrorCode::Ok,
                std::ptr::null_mut(),
                0,
                FfiDataTag::Request,
                ptr as *mut c_void,
            ),
            Err(e) => Self::from_error(e),
        }
    }

    /// Build a success result carrying a parsed payload.
    pub(crate) fn ok_payload(status: u16, payload: Payload) -> *mut Self {
        let (tag, data) = match payload {
            Payload::Empty => (FfiDataTag::None, std::ptr::null_mut()),
            Payload::Json(value) => {
                let text = match serde_json::to_string(&value) {
                    Ok(text) => text,
                    Err(e) => return Self::from_error(ApiError::Serialization(e.to_string())),
                };
                match c_string(text) {
                    Ok(ptr) => (FfiDataTag::Json, ptr as *mut c_void),
                    Err(e) => return Self::from_error(e),
                }
            }
            Payload::Stream(bytes) => {
                let len = bytes.len();
                let data = Box::into_raw(bytes.to_vec().into_boxed_slice()) as *mut u8;
                let buf = Box::new(FfiBytes { data, len });
                (FfiDataTag::Bytes, Box::into_raw(buf) as *mut c_void)
            }
        };
        Self::boxed(FfiErrorCode::Ok, std::ptr::null_mut(), status, tag, data)
    }

    /// Build an error result from an `ApiError`.
    pub(crate) fn from_error(err: ApiError) -> *mut Self {
        let (error_code, http_status) = match &err {
            ApiError::Validation(_) => (FfiErrorCode::Validation, 0),
            ApiError::Http { status, .. } => (FfiErrorCode::Http, *status),
            ApiError::Deserialization(_) => (FfiErrorCode::Deserialization, 0),
            ApiError::Serialization(_) => (FfiErrorCode::Serialization, 0),
            ApiError::Config(_) => (FfiErrorCode::Config, 0),
            ApiError::Transport(_) => (FfiErrorCode::Transport, 0),
        };
        Self::error(error_code, http_status, &err.to_string())
    }

    pub(crate) fn unknown_operation(id: &str) -> *mut Self {
        Self::error(FfiErrorCode::UnknownOperation, 0, &format!("unknown operation: {id}"))
    }

    /// Build an error result for a null argument.
    pub(crate) fn null_arg(name: &str) -> *mut Self {
        Self::error(FfiErrorCode::NullArg, 0, &format!("null argument: {name}"))
    }

    /// Build an error result for a caught panic.
    pub(crate) fn panic(msg: &str) -> *mut Self {
        Self::error(FfiErrorCode::Panic, 0, msg)
    }

    fn error(code: FfiErrorCode, http_status: u16, msg: &str) -> *mut Self {
        let message = CString::new(msg.replace('\0', " "))
            .unwrap_or_default()
            .into_raw();
        Self::boxed(code, message, http_status, FfiDataTag::None, std::ptr::null_mut())
    }
}
