use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Map, Value};

use crate::errors::AppError;
use crate::resume::models::{Kind, Record};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct IndexQuery {
    index: Option<i64>,
}

fn resolve_kind(segment: &str) -> Result<Kind, AppError> {
    Kind::from_path(segment).ok_or(AppError::NotFound)
}

/// Response body `{"id": <index>, "<kind>": <record>}` shared by POST and PUT.
fn keyed(kind: Kind, id: usize, record: Value) -> Value {
    let mut body = Map::new();
    body.insert("id".to_string(), json!(id));
    body.insert(kind.key().to_string(), record);
    Value::Object(body)
}

/// GET /resume/:kind
///
/// Without `index`, the full ordered collection. With an in-range `index`,
/// the single record at that position. An out-of-range or negative index
/// falls back to the full collection rather than an error.
pub async fn handle_list(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Query(query): Query<IndexQuery>,
) -> Result<Json<Value>, AppError> {
    let kind = resolve_kind(&kind)?;
    let store = state.store.read().await;

    if let Some(index) = query.index {
        let record = usize::try_from(index)
            .ok()
            .and_then(|i| store.get_at(kind, i));
        if let Some(record) = record {
            return Ok(Json(record.to_json()));
        }
    }

    let records: Vec<Value> = store.get_all(kind).iter().map(Record::to_json).collect();
    Ok(Json(Value::Array(records)))
}

/// POST /resume/:kind
///
/// Validates required fields, then appends the record. Answers 201 with the
/// created record and its index as `id`.
pub async fn handle_create(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let kind = resolve_kind(&kind)?;
    let Json(body) = body.map_err(|rejection| AppError::Validation(rejection.body_text()))?;

    let record = kind.parse_record(body)?;
    let echoed = record.to_json();

    let mut store = state.store.write().await;
    let id = store.append(kind, record);

    Ok((StatusCode::CREATED, Json(keyed(kind, id, echoed))))
}

/// PUT /resume/:kind
///
/// Body is `{"id": n, "<kind>": {...}}` with `index` accepted as an alias
/// for `id`. A missing or out-of-range id answers 404 before the payload is
/// examined; an in-range id with an invalid payload answers 400. Neither
/// mutates the collection.
pub async fn handle_update(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let kind = resolve_kind(&kind)?;
    let Json(body) = body.map_err(|rejection| AppError::Validation(rejection.body_text()))?;

    let payload = match body {
        Value::Object(map) => map,
        _ => {
            return Err(AppError::Validation(
                "request body must be a JSON object".to_string(),
            ))
        }
    };

    let index = payload
        .get("id")
        .or_else(|| payload.get("index"))
        .and_then(Value::as_u64)
        .and_then(|id| usize::try_from(id).ok())
        .ok_or(AppError::NotFound)?;

    let mut store = state.store.write().await;
    if index >= store.len(kind) {
        return Err(AppError::NotFound);
    }

    let replacement = payload.get(kind.key()).cloned().ok_or_else(|| {
        AppError::Validation(format!("missing '{}' object in request body", kind.key()))
    })?;

    let record = kind.parse_record(replacement)?;
    let stored = store
        .replace_at(kind, index, record)
        .ok_or(AppError::NotFound)?;

    Ok(Json(keyed(kind, index, stored.to_json())))
}

/// DELETE /resume/:kind?index=n
///
/// Removes the record at `index`, shifting every later record down by one,
/// and echoes the removed record. A missing or invalid index answers 404
/// without mutating the collection.
pub async fn handle_remove(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Query(query): Query<IndexQuery>,
) -> Result<Json<Value>, AppError> {
    let kind = resolve_kind(&kind)?;
    let index = query
        .index
        .and_then(|i| usize::try_from(i).ok())
        .ok_or(AppError::NotFound)?;

    let mut store = state.store.write().await;
    let removed = store.remove_at(kind, index).ok_or(AppError::NotFound)?;

    Ok(Json(removed.to_json()))
}
