//! Handlers for the bearer-gated admin CRUD surface.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/api/records` | `?search_by=id\|full_name&query=&page=` |
//! | `POST`   | `/api/records` | Body: full record; 409 on duplicate id |
//! | `PUT`    | `/api/records/{nik}` | Body: partial fields; 404 unknown id |
//! | `DELETE` | `/api/records/{nik}` | 204; 404 unknown id |

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use serde::Deserialize;
use serde_json::Value;
use warga_core::{
  query::{AdminField, AdminQuery},
  record::{Nik, Record, RecordPatch},
  store::RecordStore,
  validate,
};

use crate::{AppState, auth::Bearer, error::ApiError, search::PageBody};

fn parse_nik(raw: &str) -> Result<Nik, ApiError> {
  raw
    .parse::<Nik>()
    .map_err(|e| ApiError::BadRequest(e.to_string()))
}

/// Deserialise a JSON body by hand so shape errors come back as 400, not as
/// axum's extractor rejection.
fn from_body<T: serde::de::DeserializeOwned>(body: Value) -> Result<T, ApiError> {
  serde_json::from_value(body).map_err(|e| ApiError::BadRequest(e.to_string()))
}

// ─── List ────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ListParams {
  pub search_by: Option<String>,
  pub query:     Option<String>,
  pub page:      Option<usize>,
}

/// `GET /api/records` — ten rows per page; an empty query lists everything.
pub async fn list<S>(
  _session: Bearer,
  State(state): State<AppState<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<PageBody>, ApiError>
where
  S: RecordStore + Clone + Send + Sync + 'static,
{
  let field = match params.search_by.as_deref() {
    None => AdminField::FullName,
    Some(raw) => {
      AdminField::parse(raw).map_err(|e| ApiError::BadRequest(e.to_string()))?
    }
  };
  let query = AdminQuery::new(
    field,
    params.query.as_deref().unwrap_or(""),
    params.page.unwrap_or(1),
  );

  let page = state.store.list(&query).await.map_err(ApiError::from_store)?;
  Ok(Json(page.into()))
}

// ─── Create ──────────────────────────────────────────────────────────────────

/// `POST /api/records`
pub async fn create<S>(
  _session: Bearer,
  State(state): State<AppState<S>>,
  Json(body): Json<Value>,
) -> Result<impl IntoResponse, ApiError>
where
  S: RecordStore + Clone + Send + Sync + 'static,
{
  let record: Record = from_body(body)?;
  validate::new_record(&record).map_err(|e| ApiError::BadRequest(e.to_string()))?;

  let record = state
    .store
    .insert(record)
    .await
    .map_err(ApiError::from_store)?;
  Ok((StatusCode::CREATED, Json(record)))
}

// ─── Update ──────────────────────────────────────────────────────────────────

/// `PUT /api/records/{nik}`
pub async fn update<S>(
  _session: Bearer,
  State(state): State<AppState<S>>,
  Path(nik): Path<String>,
  Json(body): Json<Value>,
) -> Result<Json<Record>, ApiError>
where
  S: RecordStore + Clone + Send + Sync + 'static,
{
  let nik = parse_nik(&nik)?;
  let patch: RecordPatch = from_body(body)?;

  let record = state
    .store
    .update(nik, patch)
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(record))
}

// ─── Delete ──────────────────────────────────────────────────────────────────

/// `DELETE /api/records/{nik}`
pub async fn remove<S>(
  _session: Bearer,
  State(state): State<AppState<S>>,
  Path(nik): Path<String>,
) -> Result<StatusCode, ApiError>
where
  S: RecordStore + Clone + Send + Sync + 'static,
{
  let nik = parse_nik(&nik)?;
  state
    .store
    .delete(nik)
    .await
    .map_err(ApiError::from_store)?;
  Ok(StatusCode::NO_CONTENT)
}
