//! Handler for the public search endpoint.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/api/search` | Body: `{"search_type","search_term","page"}` |

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use warga_core::{
  query::{Page, RecordQuery, SearchField},
  record::Record,
  store::RecordStore,
};

use crate::{AppState, error::ApiError};

// ─── Envelope ────────────────────────────────────────────────────────────────

/// The page envelope both search surfaces serve.
#[derive(Debug, Serialize)]
pub struct PageBody {
  pub success:     bool,
  pub data:        Vec<Record>,
  pub total:       usize,
  pub page:        usize,
  pub total_pages: usize,
}

impl From<Page<Record>> for PageBody {
  fn from(page: Page<Record>) -> Self {
    Self {
      success:     true,
      data:        page.items,
      total:       page.total_count,
      page:        page.page,
      total_pages: page.total_pages,
    }
  }
}

// ─── Search ──────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SearchBody {
  pub search_type: String,
  pub search_term: String,
  #[serde(default = "default_page")]
  pub page:        usize,
}

fn default_page() -> usize {
  1
}

/// `POST /api/search` — twelve results per page.
pub async fn search<S>(
  State(state): State<AppState<S>>,
  Json(body): Json<SearchBody>,
) -> Result<Json<PageBody>, ApiError>
where
  S: RecordStore + Clone + Send + Sync + 'static,
{
  let field = SearchField::parse(&body.search_type)
    .map_err(|e| ApiError::BadRequest(e.to_string()))?;
  let query = RecordQuery::new(field, &body.search_term, body.page)
    .map_err(|e| ApiError::BadRequest(e.to_string()))?;

  let page = state
    .store
    .search(&query)
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(page.into()))
}
