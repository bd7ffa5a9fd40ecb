//! C-ABI wrapper around `lakehouse-core`.
//!
//! # Overview
//! Exposes every registered lakehouse operation through a handful of
//! `extern "C"` functions so any language with a C FFI can build requests
//! and parse responses without linking Rust's async runtime. The host
//! performs the HTTP exchange itself.
//!
//! # Design
//! - Every `extern "C"` function wraps its body in `catch_unwind` so panics
//!   never cross the FFI boundary.
//! - Operations are addressed by their string id and parameters travel as
//!   JSON text, so one `lh_build_request` / `lh_parse_response` pair covers
//!   the whole registry.
//! - A single `FfiLakehouseResult` envelope with `FfiDataTag` + `void* data`
//!   conveys success payloads and errors uniformly.
//! - The C caller owns all returned pointers and must call the matching
//!   `lh_free_*` function to release them.

pub mod types;

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::panic::catch_unwind;

use lakehouse_core::{ClientConfig, HttpResponse, LakehouseClient, Operation, Params};

use types::*;

// ---------------------------------------------------------------------------
// Client lifecycle
// ---------------------------------------------------------------------------

/// Create a new client bound to `base_url`.
///
/// Returns null if `base_url` is null, not UTF-8, not an http(s) URL, or if
/// an internal panic occurs. The caller must free the returned pointer with
/// `lh_client_free`.
#[unsafe(no_mangle)]
pub extern "C" fn lh_client_new(base_url: *const c_char) -> *mut FfiLakehouseClient {
    catch_unwind(|| {
        if base_url.is_null() {
            return std::ptr::null_mut();
        }
        let Ok(url) = unsafe { CStr::from_ptr(base_url) }.to_str() else {
            return std::ptr::null_mut();
        };
        match LakehouseClient::new(ClientConfig::new(url)) {
            Ok(client) => Box::into_raw(Box::new(FfiLakehouseClient { inner: client })),
            Err(_) => std::ptr::null_mut(),
        }
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Free a client created by `lh_client_new`. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn lh_client_free(client: *mut FfiLakehouseClient) {
    if !client.is_null() {
        let _ = catch_unwind(|| {
            drop(unsafe { Box::from_raw(client) });
        });
    }
}

// ---------------------------------------------------------------------------
// Build / parse
// ---------------------------------------------------------------------------

/// Read a C string argument, mapping invalid UTF-8 to a serialization error.
fn read_str<'a>(ptr: *const c_char, name: &str) -> Result<&'a str, *mut FfiLakehouseResult> {
    unsafe { CStr::from_ptr(ptr) }.to_str().map_err(|_| {
        FfiLakehouseResult::from_error(lakehouse_core::ApiError::Serialization(format!(
            "{name} is not valid UTF-8"
        )))
    })
}

/// Validate `params_json` and build the request for `operation_id`.
///
/// `params_json` may be null or empty, meaning no parameters. On success the
/// result carries `data_tag = Request` and `data` points to an
/// `FfiHttpRequest`. Validation failures use `error_code = Validation` and
/// name the offending field in `error_message`.
#[unsafe(no_mangle)]
pub extern "C" fn lh_build_request(
    client: *const FfiLakehouseClient,
    operation_id: *const c_char,
    params_json: *const c_char,
) -> *mut FfiLakehouseResult {
    catch_unwind(|| {
        if client.is_null() {
            return FfiLakehouseResult::null_arg("client");
        }
        if operation_id.is_null() {
            return FfiLakehouseResult::null_arg("operation_id");
        }
        let client = unsafe { &*client };
        let id = match read_str(operation_id, "operation_id") {
            Ok(id) => id,
            Err(result) => return result,
        };
        let Some(operation) = Operation::from_id(id) else {
            return FfiLakehouseResult::unknown_operation(id);
        };

        let params = if params_json.is_null() {
            Ok(Params::new())
        } else {
            match read_str(params_json, "params_json") {
                Ok(json) => Params::from_json_str(json),
                Err(result) => return result,
            }
        };

        match params.and_then(|params| client.inner.build(operation, &params)) {
            Ok(req) => FfiLakehouseResult::ok_request(req),
            Err(e) => FfiLakehouseResult::from_error(e),
        }
    })
    .unwrap_or_else(|_| FfiLakehouseResult::panic("panic in lh_build_request"))
}

/// Parse the response to a request built for `operation_id`.
///
/// Success results carry `data_tag = Json` (a JSON C string), `Bytes` (for
/// stream operations) or `None` (empty body). Non-2xx statuses use
/// `error_code = Http` with the status in `http_status` and the body text in
/// `error_message`.
#[unsafe(no_mangle)]
pub extern "C" fn lh_parse_response(
    client: *const FfiLakehouseClient,
    operation_id: *const c_char,
    response: *const FfiHttpResponse,
) -> *mut FfiLakehouseResult {
    catch_unwind(|| {
        if client.is_null() {
            return FfiLakehouseResult::null_arg("client");
        }
        if operation_id.is_null() {
            return FfiLakehouseResult::null_arg("operation_id");
        }
        if response.is_null() {
            return FfiLakehouseResult::null_arg("response");
        }
        let client = unsafe { &*client };
        let resp = unsafe { &*response };
        let id = match read_str(operation_id, "operation_id") {
            Ok(id) => id,
            Err(result) => return result,
        };
        let Some(operation) = Operation::from_id(id) else {
            return FfiLakehouseResult::unknown_operation(id);
        };

        let status = resp.status;
        match client.inner.parse(operation, ffi_response_to_core(resp)) {
            Ok(parsed) => FfiLakehouseResult::ok_payload(status, parsed.result),
            Err(e) => FfiLakehouseResult::from_error(e),
        }
    })
    .unwrap_or_else(|_| FfiLakehouseResult::panic("panic in lh_parse_response"))
}

/// Copy a caller-owned `FfiHttpResponse` into a core `HttpResponse`.
fn ffi_response_to_core(resp: &FfiHttpResponse) -> HttpResponse {
    let body = if resp.body.is_null() || resp.body_len == 0 {
        Vec::new()
    } else {
        unsafe { std::slice::from_raw_parts(resp.body, resp.body_len) }.to_vec()
    };
    let status_text = if resp.status_text.is_null() {
        String::new()
    } else {
        unsafe { CStr::from_ptr(resp.status_text) }
            .to_string_lossy()
            .into_owned()
    };
    HttpResponse {
        status: resp.status,
        status_text,
        headers: Vec::new(),
        body: body.into(),
    }
}

// ---------------------------------------------------------------------------
// Ownership
// ---------------------------------------------------------------------------

/// Detach the request from a successful `lh_build_request` result.
///
/// Returns null unless `data_tag` is `Request`. Afterwards the result no
/// longer owns the request: free the result with `lh_free_result` and the
/// request with `lh_free_request`.
#[unsafe(no_mangle)]
pub extern "C" fn lh_result_take_request(result: *mut FfiLakehouseResult) -> *mut FfiHttpRequest {
    catch_unwind(|| {
        if result.is_null() {
            return std::ptr::null_mut();
        }
        let result = unsafe { &mut *result };
        if result.data_tag != FfiDataTag::Request {
            return std::ptr::null_mut();
        }
        let req = result.data as *mut FfiHttpRequest;
        result.data = std::ptr::null_mut();
        result.data_tag = FfiDataTag::None;
        req
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Free a request detached with `lh_result_take_request`. Safe to call with
/// null.
#[unsafe(no_mangle)]
pub extern "C" fn lh_free_request(req: *mut FfiHttpRequest) {
    if req.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let mut req = unsafe { Box::from_raw(req) };
        unsafe { req.release() };
    });
}

/// Free a result returned by `lh_build_request` or `lh_parse_response`,
/// including whatever `data` points to. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn lh_free_result(result: *mut FfiLakehouseResult) {
    if result.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let result = unsafe { Box::from_raw(result) };
        free_c_string(result.error_message);
        if result.data.is_null() {
            return;
        }
        match result.data_tag {
            FfiDataTag::Request => lh_free_request(result.data as *mut FfiHttpRequest),
            FfiDataTag::Json => free_c_string(result.data as *mut c_char),
            FfiDataTag::Bytes => {
                let buf = unsafe { Box::from_raw(result.data as *mut FfiBytes) };
                if !buf.data.is_null() {
                    let slice = std::ptr::slice_from_raw_parts_mut(buf.data, buf.len);
                    drop(unsafe { Box::from_raw(slice) });
                }
            }
            FfiDataTag::None => {}
        }
    });
}

/// Free a C string allocated by this library. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn lh_free_string(s: *mut c_char) {
    if !s.is_null() {
        let _ = catch_unwind(|| {
            drop(unsafe { CString::from_raw(s) });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;

    fn new_client() -> *mut FfiLakehouseClient {
        let url = CString::new("http://localhost:3000").unwrap();
        let client = lh_client_new(url.as_ptr());
        assert!(!client.is_null());
        client
    }

    fn build(client: *mut FfiLakehouseClient, op: &str, params: &str) -> *mut FfiLakehouseResult {
        let op = CString::new(op).unwrap();
        let params = CString::new(params).unwrap();
        let result = lh_build_request(client, op.as_ptr(), params.as_ptr());
        assert!(!result.is_null());
        result
    }

    fn parse(
        client: *mut FfiLakehouseClient,
        op: &str,
        status: u16,
        body: &[u8],
    ) -> *mut FfiLakehouseResult {
        let op = CString::new(op).unwrap();
        let response = FfiHttpResponse {
            status,
            status_text: std::ptr::null(),
            body: body.as_ptr(),
            body_len: body.len(),
        };
        let result = lh_parse_response(client, op.as_ptr(), &response);
        assert!(!result.is_null());
        result
    }

    fn c_str<'a>(ptr: *const c_char) -> &'a str {
        unsafe { CStr::from_ptr(ptr) }.to_str().unwrap()
    }

    fn headers(req: &FfiHttpRequest) -> Vec<(String, String)> {
        (0..req.headers_len as usize)
            .map(|i| {
                let h = unsafe { &*req.headers.add(i) };
                (c_str(h.key).to_string(), c_str(h.value).to_string())
            })
            .collect()
    }

    fn request<'a>(result: *mut FfiLakehouseResult) -> &'a FfiHttpRequest {
        let result = unsafe { &*result };
        assert_eq!(result.error_code, FfiErrorCode::Ok);
        assert_eq!(result.data_tag, FfiDataTag::Request);
        unsafe { &*(result.data as *const FfiHttpRequest) }
    }

    // --- client lifecycle ---

    #[test]
    fn client_new_and_free() {
        let client = new_client();
        lh_client_free(client);
    }

    #[test]
    fn client_new_null_returns_null() {
        assert!(lh_client_new(std::ptr::null()).is_null());
    }

    #[test]
    fn client_new_rejects_non_http_url() {
        let url = CString::new("ftp://lakehouse").unwrap();
        assert!(lh_client_new(url.as_ptr()).is_null());
    }

    #[test]
    fn client_free_null_is_safe() {
        lh_client_free(std::ptr::null_mut());
    }

    // --- build ---

    #[test]
    fn build_path_operation() {
        let client = new_client();
        let result = build(client, "getEngineUsers", r#"{"engineId":"presto01"}"#);
        let req = request(result);

        assert_eq!(req.method, FfiHttpMethod::Get);
        assert_eq!(c_str(req.url), "http://localhost:3000/access/engines/presto01");
        assert!(req.body.is_null());
        assert!(!req.is_form);
        assert!(!req.is_stream);
        let headers = headers(req);
        assert!(headers.contains(&("Accept".to_string(), "application/json".to_string())));
        assert!(headers.iter().any(|(k, v)| k == "X-SDK-Analytics" && v.ends_with("operation_id=getEngineUsers")));

        lh_free_result(result);
        lh_client_free(client);
    }

    #[test]
    fn build_patch_with_query_and_body() {
        let client = new_client();
        let result = build(
            client,
            "updateTable",
            r#"{"engineId":"presto01","catalogName":"iceberg_data","schemaName":"sales","tableName":"orders","newTableName":"orders_v2"}"#,
        );
        let req = request(result);

        assert_eq!(req.method, FfiHttpMethod::Patch);
        assert_eq!(
            c_str(req.url),
            "http://localhost:3000/tables/table?engine_id=presto01&catalog_name=iceberg_data&schema_name=sales&table_name=orders"
        );
        let body: serde_json::Value = serde_json::from_str(c_str(req.body)).unwrap();
        assert_eq!(body, serde_json::json!({"new_table_name": "orders_v2"}));

        lh_free_result(result);
        lh_client_free(client);
    }

    #[test]
    fn build_form_operation_encodes_body() {
        let client = new_client();
        let result = build(
            client,
            "postQuery",
            r#"{"engine":"presto01","catalog":"iceberg_data","schema":"sales","sqlQuery":"SELECT 1"}"#,
        );
        let req = request(result);

        assert!(req.is_form);
        assert_eq!(c_str(req.url), "http://localhost:3000/query?engine=presto01");
        assert_eq!(
            c_str(req.body),
            "catalog=iceberg_data&schema=sales&sqlQuery=SELECT%201"
        );

        lh_free_result(result);
        lh_client_free(client);
    }

    #[test]
    fn build_stream_operation_sets_flag() {
        let client = new_client();
        let result = build(client, "createEngine", r#"{"origin":"native","type":"presto"}"#);
        assert!(request(result).is_stream);
        lh_free_result(result);
        lh_client_free(client);
    }

    #[test]
    fn build_null_params_means_none() {
        let client = new_client();
        let op = CString::new("testLHConsole").unwrap();
        let result = lh_build_request(client, op.as_ptr(), std::ptr::null());
        assert_eq!(c_str(request(result).url), "http://localhost:3000/ready");
        lh_free_result(result);
        lh_client_free(client);
    }

    #[test]
    fn build_missing_field_reports_validation() {
        let client = new_client();
        let result = build(client, "getEngineUsers", "{}");
        let r = unsafe { &*result };
        assert_eq!(r.error_code, FfiErrorCode::Validation);
        assert!(r.data.is_null());
        assert!(c_str(r.error_message).contains("missing required parameter: engineId"));
        lh_free_result(result);
        lh_client_free(client);
    }

    #[test]
    fn build_rejects_non_object_headers() {
        let client = new_client();
        let result = build(client, "getEngines", r#"{"headers":"Accept: text/plain"}"#);
        let r = unsafe { &*result };
        assert_eq!(r.error_code, FfiErrorCode::Serialization);
        assert!(r.data.is_null());
        assert!(c_str(r.error_message).contains("headers must be an object"));
        lh_free_result(result);
        lh_client_free(client);
    }

    #[test]
    fn client_new_rejects_unparseable_url() {
        let url = CString::new("http://host:notaport").unwrap();
        assert!(lh_client_new(url.as_ptr()).is_null());
    }

    #[test]
    fn generated_header_is_written_outside_the_source_tree() {
        let Some(path) = option_env!("LAKEHOUSE_FFI_HEADER") else {
            return;
        };
        let path = std::path::Path::new(path);
        assert!(!path.starts_with(env!("CARGO_MANIFEST_DIR")), "{}", path.display());
        let header = std::fs::read_to_string(path).unwrap();
        assert!(header.contains("lh_build_request"));
    }

    #[test]
    fn build_unknown_field_reports_validation() {
        let client = new_client();
        let result = build(client, "getBuckets", r#"{"bucketId":"b1"}"#);
        let r = unsafe { &*result };
        assert_eq!(r.error_code, FfiErrorCode::Validation);
        assert!(c_str(r.error_message).contains("unrecognized parameter: bucketId"));
        lh_free_result(result);
        lh_client_free(client);
    }

    #[test]
    fn build_unknown_operation() {
        let client = new_client();
        let result = build(client, "dropEverything", "{}");
        let r = unsafe { &*result };
        assert_eq!(r.error_code, FfiErrorCode::UnknownOperation);
        assert_eq!(c_str(r.error_message), "unknown operation: dropEverything");
        lh_free_result(result);
        lh_client_free(client);
    }

    #[test]
    fn build_rejects_non_object_params() {
        let client = new_client();
        let result = build(client, "getBuckets", "[1, 2]");
        assert_eq!(unsafe { &*result }.error_code, FfiErrorCode::Serialization);
        lh_free_result(result);
        lh_client_free(client);
    }

    #[test]
    fn build_null_client_reports_null_arg() {
        let op = CString::new("getBuckets").unwrap();
        let result = lh_build_request(std::ptr::null(), op.as_ptr(), std::ptr::null());
        let r = unsafe { &*result };
        assert_eq!(r.error_code, FfiErrorCode::NullArg);
        assert_eq!(c_str(r.error_message), "null argument: client");
        lh_free_result(result);
    }

    #[test]
    fn take_request_detaches_ownership() {
        let client = new_client();
        let result = build(client, "getBuckets", "");
        let req = lh_result_take_request(result);
        assert!(!req.is_null());
        assert_eq!(unsafe { &*result }.data_tag, FfiDataTag::None);
        assert!(lh_result_take_request(result).is_null());
        lh_free_result(result);

        assert_eq!(c_str(unsafe { &*req }.url), "http://localhost:3000/buckets");
        lh_free_request(req);
        lh_client_free(client);
    }

    // --- parse ---

    #[test]
    fn parse_json_body() {
        let client = new_client();
        let result = parse(client, "getBuckets", 200, br#"{"buckets":[]}"#);
        let r = unsafe { &*result };
        assert_eq!(r.error_code, FfiErrorCode::Ok);
        assert_eq!(r.http_status, 200);
        assert_eq!(r.data_tag, FfiDataTag::Json);
        assert_eq!(c_str(r.data as *const c_char), r#"{"buckets":[]}"#);
        lh_free_result(result);
        lh_client_free(client);
    }

    #[test]
    fn parse_stream_body_keeps_bytes() {
        let client = new_client();
        let body = b"engine e1 provisioning\x00\xff";
        let result = parse(client, "scaleEngine", 202, body);
        let r = unsafe { &*result };
        assert_eq!(r.data_tag, FfiDataTag::Bytes);
        let buf = unsafe { &*(r.data as *const FfiBytes) };
        assert_eq!(unsafe { std::slice::from_raw_parts(buf.data, buf.len) }, body);
        lh_free_result(result);
        lh_client_free(client);
    }

    #[test]
    fn parse_empty_body() {
        let client = new_client();
        let result = parse(client, "unregisterBucket", 204, b"");
        let r = unsafe { &*result };
        assert_eq!(r.error_code, FfiErrorCode::Ok);
        assert_eq!(r.http_status, 204);
        assert_eq!(r.data_tag, FfiDataTag::None);
        assert!(r.data.is_null());
        lh_free_result(result);
        lh_client_free(client);
    }

    #[test]
    fn parse_error_status() {
        let client = new_client();
        let result = parse(client, "getEngineUsers", 404, br#"{"message":"not found"}"#);
        let r = unsafe { &*result };
        assert_eq!(r.error_code, FfiErrorCode::Http);
        assert_eq!(r.http_status, 404);
        assert!(c_str(r.error_message).contains("not found"));
        lh_free_result(result);
        lh_client_free(client);
    }

    #[test]
    fn parse_malformed_json() {
        let client = new_client();
        let result = parse(client, "getBuckets", 200, b"not json");
        assert_eq!(unsafe { &*result }.error_code, FfiErrorCode::Deserialization);
        lh_free_result(result);
        lh_client_free(client);
    }

    #[test]
    fn parse_null_response_reports_null_arg() {
        let client = new_client();
        let op = CString::new("getBuckets").unwrap();
        let result = lh_parse_response(client, op.as_ptr(), std::ptr::null());
        assert_eq!(unsafe { &*result }.error_code, FfiErrorCode::NullArg);
        lh_free_result(result);
        lh_client_free(client);
    }

    // --- free ---

    #[test]
    fn free_functions_accept_null() {
        lh_free_request(std::ptr::null_mut());
        lh_free_result(std::ptr::null_mut());
        lh_free_string(std::ptr::null_mut());
        assert!(lh_result_take_request(std::ptr::null_mut()).is_null());
    }
}
