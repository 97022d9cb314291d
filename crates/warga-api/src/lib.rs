//! JSON REST API for the Warga population registry.
//!
//! Exposes an axum [`Router`] backed by any [`warga_core::store::RecordStore`].
//! The public surface (login, config, search, person, family) is open; the
//! admin CRUD surface requires a bearer token issued by `POST /api/login`.

pub mod auth;
pub mod error;
pub mod person;
pub mod records;
pub mod search;
pub mod session;

pub use error::ApiError;

use std::{path::PathBuf, sync::Arc};

use axum::{
  Router,
  routing::{delete, get, post, put},
};
use serde::Deserialize;
use tower_http::trace::TraceLayer;
use warga_core::store::RecordStore;

use auth::{AuthConfig, SessionTokens};

// ─── Configuration ───────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml`.
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
  pub host:               String,
  pub port:               u16,
  /// Display name served by `GET /api/config`.
  pub app_name:           String,
  pub store_path:         PathBuf,
  /// Image-host base for photo references, see [`warga_core::photo`].
  pub image_base_url:     String,
  pub auth_username:      String,
  pub auth_password_hash: String,
}

// ─── Application state ───────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState<S: RecordStore> {
  pub store:    Arc<S>,
  pub config:   Arc<ServerConfig>,
  pub auth:     Arc<AuthConfig>,
  pub sessions: Arc<SessionTokens>,
}

// ─── Router ──────────────────────────────────────────────────────────────────

/// Build the axum [`Router`] for the registry API.
pub fn router<S>(state: AppState<S>) -> Router
where
  S: RecordStore + Clone + Send + Sync + 'static,
{
  Router::new()
    // Public surface
    .route("/api/login",        post(session::login::<S>))
    .route("/api/logout",       post(session::logout::<S>))
    .route("/api/config",       get(session::app_config::<S>))
    .route("/api/search",       post(search::search::<S>))
    .route("/api/person/{nik}", get(person::get_one::<S>))
    .route("/api/family/{kk}",  get(person::family::<S>))
    // Admin surface, bearer-gated per handler
    .route("/api/records",       get(records::list::<S>).post(records::create::<S>))
    .route("/api/records/{nik}", put(records::update::<S>).delete(records::remove::<S>))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

// ─── Integration tests ───────────────────────────────────────────────────────
