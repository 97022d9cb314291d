//! Handlers for login, logout, and the client bootstrap config.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/api/login` | Body: `{"password":"…"}`, username optional |
//! | `POST` | `/api/logout` | Revokes the presented bearer token |
//! | `GET`  | `/api/config` | App name and the search-mode labels |

use axum::{Json, extract::State};
use serde::Deserialize;
use serde_json::{Value, json};
use warga_core::store::RecordStore;

use crate::{
  AppState,
  auth::{self, Bearer},
  error::ApiError,
};

/// Search-mode labels the client shows, in [`warga_core::query::SearchField`]
/// wire order.
pub const FEATURES: [&str; 6] = [
  "Pencarian Nama",
  "Pencarian NIK",
  "Pencarian Nomor KK",
  "Pencarian Bulan Lahir",
  "Pencarian Tahun Lahir",
  "Pencarian Kecamatan",
];

// ─── Login ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct LoginBody {
  /// The public tool sends a password only; the admin pair includes this.
  #[serde(default)]
  pub username: Option<String>,
  pub password: String,
}

/// `POST /api/login`
pub async fn login<S>(
  State(state): State<AppState<S>>,
  Json(body): Json<LoginBody>,
) -> Result<Json<Value>, ApiError>
where
  S: RecordStore + Clone + Send + Sync + 'static,
{
  if let Some(username) = &body.username
    && username != &state.auth.username
  {
    return Err(ApiError::Unauthorized);
  }
  auth::verify_password(&body.password, &state.auth)?;

  let token = state.sessions.issue();
  Ok(Json(json!({ "success": true, "token": token })))
}

// ─── Logout ──────────────────────────────────────────────────────────────────

/// `POST /api/logout` — the extractor already rejected unknown tokens.
pub async fn logout<S>(
  State(state): State<AppState<S>>,
  session: Bearer,
) -> Result<Json<Value>, ApiError>
where
  S: RecordStore + Clone + Send + Sync + 'static,
{
  state.sessions.revoke(&session.0);
  Ok(Json(json!({ "success": true })))
}

// ─── Config ──────────────────────────────────────────────────────────────────

/// `GET /api/config`
pub async fn app_config<S>(State(state): State<AppState<S>>) -> Json<Value>
where
  S: RecordStore + Clone + Send + Sync + 'static,
{
  Json(json!({
    "app_name": state.config.app_name,
    "features": FEATURES,
    "image_base": state.config.image_base_url,
  }))
}
