//! Async HTTP client wrapping the warga JSON API.

use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use reqwest::Client;
use serde::Deserialize;
use warga_core::{
  query::SearchField,
  record::{FamilyMember, Nik, Record},
};

/// Connection settings for the warga API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
  pub base_url: String,
  pub password: String,
}

/// Server-provided bootstrap info from `GET /api/config`.
#[derive(Debug, Clone, Deserialize)]
pub struct AppInfo {
  pub app_name:   String,
  #[serde(default)]
  pub features:   Vec<String>,
  #[serde(default)]
  pub image_base: String,
}

/// One page of search results as served by `POST /api/search`.
#[derive(Debug, Deserialize)]
pub struct SearchPage {
  pub data:        Vec<Record>,
  pub total:       usize,
  pub page:        usize,
  pub total_pages: usize,
}

/// Async HTTP client for the warga JSON REST API.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct ApiClient {
  client: Client,
  config: ApiConfig,
  token:  Option<String>,
}

impl ApiClient {
  pub fn new(config: ApiConfig) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(30))
      .build()
      .context("failed to build HTTP client")?;
    Ok(Self { client, config, token: None })
  }

  fn url(&self, path: &str) -> String {
    format!(
      "{}/api{}",
      self.config.base_url.trim_end_matches('/'),
      path
    )
  }

  // ── Session ───────────────────────────────────────────────────────────────

  /// `POST /api/login` — verifies the configured password and stores the
  /// session token for the lifetime of this client.
  pub async fn login(&mut self) -> Result<()> {
    let resp = self
      .client
      .post(self.url("/login"))
      .json(&serde_json::json!({ "password": self.config.password }))
      .send()
      .await
      .context("POST /login failed")?;

    if resp.status() == reqwest::StatusCode::UNAUTHORIZED {
      return Err(anyhow!("wrong password"));
    }
    if !resp.status().is_success() {
      return Err(anyhow!("POST /login → {}", resp.status()));
    }

    let body: serde_json::Value =
      resp.json().await.context("deserialising login response")?;
    self.token = body["token"].as_str().map(str::to_string);
    Ok(())
  }

  /// `POST /api/logout` — best-effort revocation of the session token.
  pub async fn logout(&self) -> Result<()> {
    let Some(token) = &self.token else { return Ok(()) };
    self
      .client
      .post(self.url("/logout"))
      .bearer_auth(token)
      .send()
      .await
      .context("POST /logout failed")?;
    Ok(())
  }

  /// `GET /api/config`
  pub async fn app_info(&self) -> Result<AppInfo> {
    let resp = self
      .client
      .get(self.url("/config"))
      .send()
      .await
      .context("GET /config failed")?;

    if !resp.status().is_success() {
      return Err(anyhow!("GET /config → {}", resp.status()));
    }
    resp.json().await.context("deserialising app info")
  }

  // ── Search ────────────────────────────────────────────────────────────────

  /// `POST /api/search`
  pub async fn search(
    &self,
    field: SearchField,
    term: &str,
    page: usize,
  ) -> Result<SearchPage> {
    let resp = self
      .client
      .post(self.url("/search"))
      .json(&serde_json::json!({
        "search_type": field.as_str(),
        "search_term": term,
        "page": page,
      }))
      .send()
      .await
      .context("POST /search failed")?;

    if resp.status() == reqwest::StatusCode::BAD_REQUEST {
      let body: serde_json::Value = resp.json().await.unwrap_or_default();
      let msg = body["message"].as_str().unwrap_or("invalid search").to_string();
      return Err(anyhow!(msg));
    }
    if !resp.status().is_success() {
      return Err(anyhow!("POST /search → {}", resp.status()));
    }
    resp.json().await.context("deserialising search page")
  }

  // ── Detail ────────────────────────────────────────────────────────────────

  /// `GET /api/person/{nik}`
  pub async fn person(&self, nik: &Nik) -> Result<Record> {
    let resp = self
      .client
      .get(self.url(&format!("/person/{nik}")))
      .send()
      .await
      .context("GET /person failed")?;

    if resp.status() == reqwest::StatusCode::NOT_FOUND {
      return Err(anyhow!("record {nik} not found"));
    }
    if !resp.status().is_success() {
      return Err(anyhow!("GET /person → {}", resp.status()));
    }
    resp.json().await.context("deserialising record")
  }

  /// `GET /api/family/{kk}?exclude=<nik>`
  pub async fn family(&self, kk: &Nik, exclude: &Nik) -> Result<Vec<FamilyMember>> {
    let resp = self
      .client
      .get(self.url(&format!("/family/{kk}")))
      .query(&[("exclude", exclude.as_str())])
      .send()
      .await
      .context("GET /family failed")?;

    if !resp.status().is_success() {
      return Err(anyhow!("GET /family → {}", resp.status()));
    }
    resp.json().await.context("deserialising family members")
  }
}
