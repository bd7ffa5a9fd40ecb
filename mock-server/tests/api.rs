use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, Bucket, SavedQuery};
use serde_json::Value;
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

const REGISTER: &str = r#"{
    "bucket_details": {"bucket_name": "sales-data", "endpoint": "https://s3.example.com"},
    "description": "sales bucket",
    "table_type": "iceberg",
    "bucket_type": "amazon_s3",
    "catalog_name": "iceberg_data",
    "managed_by": "customer",
    "bucket_display_name": "sales"
}"#;

// --- readiness ---

#[tokio::test]
async fn ready_reports_status() {
    let resp = app().oneshot(get("/ready")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = body_json(resp).await;
    assert_eq!(body["status"], "ready");
}

// --- buckets ---

#[tokio::test]
async fn list_buckets_empty() {
    let resp = app().oneshot(get("/buckets")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = body_json(resp).await;
    assert_eq!(body["buckets"], serde_json::json!([]));
}

#[tokio::test]
async fn register_bucket_returns_201() {
    let resp = app()
        .oneshot(json_request("POST", "/buckets/bucket", REGISTER))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = body_json(resp).await;
    let bucket: Bucket = serde_json::from_value(body["bucket"].clone()).unwrap();
    assert_eq!(bucket.bucket_display_name, "sales");
    assert_eq!(bucket.catalog_name, "iceberg_data");
    assert_eq!(bucket.state, "active");
}

#[tokio::test]
async fn register_bucket_missing_field_returns_422() {
    let resp = app()
        .oneshot(json_request("POST", "/buckets/bucket", r#"{"description":"x"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn unregister_unknown_bucket_returns_404() {
    let resp = app()
        .oneshot(json_request("DELETE", "/buckets/bucket", r#"{"bucket_id":"nope"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn activate_unknown_bucket_returns_404() {
    let resp = app()
        .oneshot(json_request(
            "POST",
            "/buckets/bucket/activate",
            r#"{"bucket_id":"nope"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- engines ---

#[tokio::test]
async fn create_engine_returns_opaque_body() {
    let resp = app()
        .oneshot(json_request(
            "POST",
            "/engines/engine",
            r#"{"origin":"native","type":"presto"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::ACCEPTED);
    assert_eq!(
        resp.headers()[http::header::CONTENT_TYPE],
        "application/octet-stream"
    );
    let body = body_bytes(resp).await;
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert!(text.contains("(presto) provisioning"));
}

#[tokio::test]
async fn create_engine_without_type_returns_400() {
    let resp = app()
        .oneshot(json_request("POST", "/engines/engine", r#"{"origin":"native"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn engine_users_not_found() {
    let resp = app()
        .oneshot(get("/access/engines/presto01"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- echo fallback ---

#[tokio::test]
async fn unrouted_requests_are_echoed() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("PATCH")
                .uri("/tables/table?engine_id=presto01&table_name=orders")
                .header(http::header::CONTENT_TYPE, "application/json")
                .header("LHInstanceId", "lh-1")
                .body(r#"{"new_table_name":"orders_v2"}"#.to_string())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let echo: Value = body_json(resp).await;
    assert_eq!(echo["method"], "PATCH");
    assert_eq!(echo["path"], "/tables/table");
    assert_eq!(
        echo["query"],
        serde_json::json!([["engine_id", "presto01"], ["table_name", "orders"]])
    );
    assert_eq!(echo["headers"]["lhinstanceid"], "lh-1");
    assert_eq!(echo["body"]["new_table_name"], "orders_v2");
}

#[tokio::test]
async fn echo_keeps_non_json_body_as_text() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/parse/csv")
                .body("engine=presto01&file_type=csv".to_string())
                .unwrap(),
        )
        .await
        .unwrap();
    let echo: Value = body_json(resp).await;
    assert_eq!(echo["body"], "engine=presto01&file_type=csv");
    assert_eq!(echo["query"], serde_json::json!([]));
}

// --- full lifecycle ---

#[tokio::test]
async fn bucket_and_query_lifecycle() {
    use tower::Service;

    let mut app = app().into_service();

    // register
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("POST", "/buckets/bucket", REGISTER))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = body_json(resp).await;
    let id = body["bucket"]["bucket_id"].as_str().unwrap().to_string();

    // deactivate
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "POST",
            "/buckets/bucket/deactivate",
            &format!(r#"{{"bucket_id":"{id}"}}"#),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = body_json(resp).await;
    assert_eq!(body["bucket"]["state"], "inactive");

    // list shows the one bucket
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get("/buckets"))
        .await
        .unwrap();
    let body: Value = body_json(resp).await;
    assert_eq!(body["buckets"].as_array().unwrap().len(), 1);

    // unregister
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "DELETE",
            "/buckets/bucket",
            &format!(r#"{{"bucket_id":"{id}"}}"#),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(resp).await.is_empty());

    // save a query
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "POST",
            "/queries/daily_orders",
            r#"{"created_by":"admin","description":"orders per day","query_string":"SELECT 1"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let saved: SavedQuery = body_json(resp).await;
    assert_eq!(saved.query_name, "daily_orders");

    // saving the same name again conflicts
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "POST",
            "/queries/daily_orders",
            r#"{"created_by":"admin","description":"dup","query_string":"SELECT 2"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    // grant and read engine users
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "PATCH",
            "/access/engines/presto01",
            r#"{"users":[{"id":"alice","permission":"can_use"}]}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get("/access/engines/presto01"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = body_json(resp).await;
    assert_eq!(body["users"][0]["id"], "alice");

    // delete the query, then again
    for expected in [StatusCode::NO_CONTENT, StatusCode::NOT_FOUND] {
        let resp = ServiceExt::ready(&mut app)
            .await
            .unwrap()
            .call(
                Request::builder()
                    .method("DELETE")
                    .uri("/queries/daily_orders")
                    .body(String::new())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), expected);
    }
}
