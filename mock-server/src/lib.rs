use std::{collections::HashMap, sync::Arc};

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Bucket {
    pub bucket_id: String,
    pub bucket_display_name: String,
    pub bucket_type: String,
    pub catalog_name: String,
    pub description: String,
    pub managed_by: String,
    pub table_type: String,
    pub state: String,
}

#[derive(Deserialize)]
pub struct RegisterBucket {
    pub bucket_details: Value,
    pub description: String,
    pub table_type: String,
    pub bucket_type: String,
    pub catalog_name: String,
    pub managed_by: String,
    pub bucket_display_name: Option<String>,
}

#[derive(Deserialize)]
pub struct BucketRef {
    pub bucket_id: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SavedQuery {
    pub query_name: String,
    pub created_by: String,
    pub description: String,
    pub query_string: String,
    pub engine_id: Option<String>,
}

#[derive(Deserialize)]
pub struct SaveQuery {
    pub created_by: String,
    pub description: String,
    pub query_string: String,
    pub engine_id: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct EngineUsers {
    #[serde(default)]
    pub groups: Vec<Value>,
    #[serde(default)]
    pub users: Vec<Value>,
}

#[derive(Default)]
pub struct Store {
    buckets: HashMap<String, Bucket>,
    queries: HashMap<String, SavedQuery>,
    engine_users: HashMap<String, EngineUsers>,
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/ready", get(ready))
        .route("/buckets", get(list_buckets))
        .route("/buckets/bucket", post(register_bucket).delete(unregister_bucket))
        .route("/buckets/bucket/activate", post(activate_bucket))
        .route("/buckets/bucket/deactivate", post(deactivate_bucket))
        .route("/queries", get(list_queries))
        .route("/queries/{query_name}", post(save_query).delete(delete_query))
        .route(
            "/access/engines/{engine_id}",
            get(get_engine_users).patch(update_engine_users),
        )
        .route("/engines/engine", post(create_engine))
        .fallback(echo)
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn ready() -> Json<Value> {
    Json(json!({"status": "ready"}))
}

async fn list_buckets(State(db): State<Db>) -> Json<Value> {
    let store = db.read().await;
    let mut buckets: Vec<Bucket> = store.buckets.values().cloned().collect();
    buckets.sort_by(|a, b| a.bucket_display_name.cmp(&b.bucket_display_name));
    Json(json!({ "buckets": buckets }))
}

async fn register_bucket(
    State(db): State<Db>,
    Json(input): Json<RegisterBucket>,
) -> Result<(StatusCode, Json<Value>), StatusCode> {
    if !input.bucket_details.is_object() {
        return Err(StatusCode::BAD_REQUEST);
    }
    let bucket_id = Uuid::new_v4().to_string();
    let bucket = Bucket {
        bucket_display_name: input.bucket_display_name.unwrap_or_else(|| bucket_id.clone()),
        bucket_id,
        bucket_type: input.bucket_type,
        catalog_name: input.catalog_name,
        description: input.description,
        managed_by: input.managed_by,
        table_type: input.table_type,
        state: "active".to_string(),
    };
    db.write()
        .await
        .buckets
        .insert(bucket.bucket_id.clone(), bucket.clone());
    Ok((StatusCode::CREATED, Json(json!({ "bucket": bucket }))))
}

async fn unregister_bucket(
    State(db): State<Db>,
    Json(input): Json<BucketRef>,
) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    store
        .buckets
        .remove(&input.bucket_id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn set_bucket_state(db: Db, bucket_id: &str, state: &str) -> Result<Json<Value>, StatusCode> {
    let mut store = db.write().await;
    let bucket = store.buckets.get_mut(bucket_id).ok_or(StatusCode::NOT_FOUND)?;
    bucket.state = state.to_string();
    Ok(Json(json!({ "bucket": bucket.clone() })))
}

async fn activate_bucket(
    State(db): State<Db>,
    Json(input): Json<BucketRef>,
) -> Result<Json<Value>, StatusCode> {
    set_bucket_state(db, &input.bucket_id, "active").await
}

async fn deactivate_bucket(
    State(db): State<Db>,
    Json(input): Json<BucketRef>,
) -> Result<Json<Value>, StatusCode> {
    set_bucket_state(db, &input.bucket_id, "inactive").await
}

async fn list_queries(State(db): State<Db>) -> Json<Value> {
    let store = db.read().await;
    let mut queries: Vec<SavedQuery> = store.queries.values().cloned().collect();
    queries.sort_by(|a, b| a.query_name.cmp(&b.query_name));
    Json(json!({ "queries": queries }))
}

async fn save_query(
    State(db): State<Db>,
    Path(query_name): Path<String>,
    Json(input): Json<SaveQuery>,
) -> Result<(StatusCode, Json<SavedQuery>), StatusCode> {
    let mut store = db.write().await;
    if store.queries.contains_key(&query_name) {
        return Err(StatusCode::CONFLICT);
    }
    let query = SavedQuery {
        query_name: query_name.clone(),
        created_by: input.created_by,
        description: input.description,
        query_string: input.query_string,
        engine_id: input.engine_id,
    };
    store.queries.insert(query_name, query.clone());
    Ok((StatusCode::CREATED, Json(query)))
}

async fn delete_query(
    State(db): State<Db>,
    Path(query_name): Path<String>,
) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    store
        .queries
        .remove(&query_name)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn get_engine_users(
    State(db): State<Db>,
    Path(engine_id): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    let store = db.read().await;
    let users = store.engine_users.get(&engine_id).ok_or(StatusCode::NOT_FOUND)?;
    Ok(Json(json!({
        "engine_id": engine_id,
        "groups": users.groups,
        "users": users.users,
    })))
}

async fn update_engine_users(
    State(db): State<Db>,
    Path(engine_id): Path<String>,
    Json(input): Json<EngineUsers>,
) -> Json<Value> {
    let mut store = db.write().await;
    let entry = store.engine_users.entry(engine_id.clone()).or_default();
    entry.groups.extend(input.groups);
    entry.users.extend(input.users);
    Json(json!({
        "engine_id": engine_id,
        "groups": entry.groups,
        "users": entry.users,
    }))
}

/// Engine creation answers with an opaque body rather than JSON.
async fn create_engine(Json(input): Json<Value>) -> Result<impl IntoResponse, StatusCode> {
    let engine_type = input
        .get("type")
        .and_then(Value::as_str)
        .ok_or(StatusCode::BAD_REQUEST)?;
    let body = format!("engine {} ({engine_type}) provisioning", Uuid::new_v4());
    Ok((
        StatusCode::ACCEPTED,
        [(header::CONTENT_TYPE, "application/octet-stream")],
        body,
    ))
}

/// Reflect any unrouted request so callers can inspect what was sent.
async fn echo(method: Method, uri: Uri, headers: HeaderMap, body: Bytes) -> Json<Value> {
    let query: Vec<(String, String)> = uri
        .query()
        .map(|q| {
            q.split('&')
                .filter(|pair| !pair.is_empty())
                .map(|pair| match pair.split_once('=') {
                    Some((k, v)) => (k.to_string(), v.to_string()),
                    None => (pair.to_string(), String::new()),
                })
                .collect()
        })
        .unwrap_or_default();
    let headers: serde_json::Map<String, Value> = headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                Value::String(value.to_str().unwrap_or_default().to_string()),
            )
        })
        .collect();
    let body = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&body).into_owned()))
    };
    Json(json!({
        "method": method.as_str(),
        "path": uri.path(),
        "query": query,
        "headers": headers,
        "body": body,
    }))
}
