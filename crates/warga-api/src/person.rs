//! Handlers for the public detail and family lookups.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/api/person/{nik}` | 404 if not found |
//! | `GET`  | `/api/family/{kk}` | Optional `?exclude=<nik>` |

use axum::{
  Json,
  extract::{Path, Query, State},
};
use serde::Deserialize;
use warga_core::{
  record::{FamilyMember, Nik, Record},
  store::RecordStore,
};

use crate::{AppState, error::ApiError};

fn parse_nik(raw: &str) -> Result<Nik, ApiError> {
  raw
    .parse::<Nik>()
    .map_err(|e| ApiError::BadRequest(e.to_string()))
}

// ─── Person ──────────────────────────────────────────────────────────────────

/// `GET /api/person/{nik}`
pub async fn get_one<S>(
  State(state): State<AppState<S>>,
  Path(nik): Path<String>,
) -> Result<Json<Record>, ApiError>
where
  S: RecordStore + Clone + Send + Sync + 'static,
{
  let nik = parse_nik(&nik)?;
  let record = state
    .store
    .get(nik.clone())
    .await
    .map_err(ApiError::from_store)?
    .ok_or_else(|| ApiError::NotFound(format!("no record with id {nik}")))?;
  Ok(Json(record))
}

// ─── Family ──────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct FamilyParams {
  /// NIK to leave out of the listing, usually the subject being viewed.
  pub exclude: Option<String>,
}

/// `GET /api/family/{kk}[?exclude=<nik>]`
pub async fn family<S>(
  State(state): State<AppState<S>>,
  Path(kk): Path<String>,
  Query(params): Query<FamilyParams>,
) -> Result<Json<Vec<FamilyMember>>, ApiError>
where
  S: RecordStore + Clone + Send + Sync + 'static,
{
  let household_id = parse_nik(&kk)?;
  let excluding = params.exclude.as_deref().map(parse_nik).transpose()?;

  let members = state
    .store
    .family(household_id, excluding)
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(members))
}
