//! Application state machine and event dispatcher.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use warga_core::{
  query::SearchField,
  record::{FamilyMember, Record},
};

use crate::client::ApiClient;

/// Search modes in display order, matching the server's feature list.
pub const SEARCH_FIELDS: [(SearchField, &str); 6] = [
  (SearchField::FullName, "Nama"),
  (SearchField::Id, "NIK"),
  (SearchField::HouseholdId, "Nomor KK"),
  (SearchField::BirthMonth, "Bulan Lahir"),
  (SearchField::BirthYear, "Tahun Lahir"),
  (SearchField::District, "Kecamatan"),
];

// ─── Screen ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
  /// Centred search form; the entry point.
  SearchForm,
  /// Paged result list for the last search.
  Results,
  /// One record, with the family section below it.
  Detail,
}

// ─── App ──────────────────────────────────────────────────────────────────────

/// Top-level application state.
pub struct App {
  /// Current screen / keyboard focus.
  pub screen: Screen,

  /// Display name served by the API, e.g. "Data Warga".
  pub app_name: String,

  /// Image-host base for photo URL resolution.
  pub image_base: String,

  /// Index into [`SEARCH_FIELDS`].
  pub field_idx: usize,

  /// Search term being typed into the form.
  pub term: String,

  /// The field and term that produced the current results. Paging re-runs
  /// these, not whatever is sitting in the form.
  pub active_query: Option<(SearchField, String)>,

  /// Current page of results.
  pub results: Vec<Record>,
  pub total: usize,
  /// 1-based.
  pub page: usize,
  pub total_pages: usize,

  /// Cursor position within `results`.
  pub list_cursor: usize,

  /// Record shown on the detail screen.
  pub detail: Option<Record>,

  /// Other members of the detail record's household.
  pub family: Vec<FamilyMember>,

  /// Per-field mask toggles. Reset whenever the detail closes.
  pub show_mother: bool,
  pub show_father: bool,

  /// Scroll offset within the detail pane.
  pub detail_scroll: usize,

  /// One-line status message shown in the status bar.
  pub status_msg: String,

  /// Shared HTTP client.
  pub client: Arc<ApiClient>,
}

impl App {
  /// Create an [`App`] on the search form with no results.
  pub fn new(client: ApiClient, app_name: String, image_base: String) -> Self {
    Self {
      screen: Screen::SearchForm,
      app_name,
      image_base,
      field_idx: 0,
      term: String::new(),
      active_query: None,
      results: Vec::new(),
      total: 0,
      page: 1,
      total_pages: 0,
      list_cursor: 0,
      detail: None,
      family: Vec::new(),
      show_mother: false,
      show_father: false,
      detail_scroll: 0,
      status_msg: String::new(),
      client: Arc::new(client),
    }
  }

  /// The search field currently selected on the form.
  pub fn field(&self) -> SearchField {
    SEARCH_FIELDS[self.field_idx].0
  }

  /// The record under the list cursor, if any.
  pub fn cursor_record(&self) -> Option<&Record> {
    self.results.get(self.list_cursor)
  }

  // ── Data loading ──────────────────────────────────────────────────────────

  /// Run the form's query and land on the results screen.
  async fn run_search(&mut self) -> anyhow::Result<()> {
    let field = self.field();
    let term = self.term.clone();
    self.status_msg = "Mencari…".into();
    match self.client.search(field, &term, 1).await {
      Ok(page) => {
        self.results = page.data;
        self.total = page.total;
        self.page = page.page;
        self.total_pages = page.total_pages;
        self.list_cursor = 0;
        self.active_query = Some((field, term));
        self.screen = Screen::Results;
        self.status_msg = if self.results.is_empty() {
          "Data tidak ditemukan.".into()
        } else {
          String::new()
        };
      }
      Err(e) => {
        self.status_msg = format!("Error: {e}");
      }
    }
    Ok(())
  }

  /// Fetch `page` of the active query. Out-of-range pages are ignored by the
  /// callers, so a failure here is a transport problem, not a pager bug.
  async fn goto_page(&mut self, page: usize) {
    let Some((field, term)) = self.active_query.clone() else { return };
    match self.client.search(field, &term, page).await {
      Ok(p) => {
        self.results = p.data;
        self.total = p.total;
        self.page = p.page;
        self.total_pages = p.total_pages;
        self.list_cursor = 0;
        self.status_msg = String::new();
      }
      Err(e) => {
        self.status_msg = format!("Error: {e}");
      }
    }
  }

  /// Transition to `Detail` for the record under the cursor.
  ///
  /// The family lookup is best-effort: the detail still opens when it fails,
  /// with a note in the status bar instead of a member list.
  async fn open_detail(&mut self) -> anyhow::Result<()> {
    let Some(record) = self.cursor_record().cloned() else {
      return Ok(());
    };
    self.status_msg = "Memuat…".into();

    let record = match self.client.person(&record.id).await {
      Ok(r) => r,
      Err(e) => {
        self.status_msg = format!("Error: {e}");
        return Ok(());
      }
    };

    self.family = match self
      .client
      .family(&record.household_id, &record.id)
      .await
    {
      Ok(members) => {
        self.status_msg = String::new();
        members
      }
      Err(e) => {
        tracing::warn!(error = %e, "family lookup failed");
        self.status_msg = "Anggota keluarga tidak dapat dimuat.".into();
        Vec::new()
      }
    };

    self.detail = Some(record);
    self.show_mother = false;
    self.show_father = false;
    self.detail_scroll = 0;
    self.screen = Screen::Detail;
    Ok(())
  }

  /// Leave the detail screen, dropping everything it loaded.
  fn close_detail(&mut self) {
    self.screen = Screen::Results;
    self.detail = None;
    self.family.clear();
    self.show_mother = false;
    self.show_father = false;
    self.detail_scroll = 0;
  }

  // ── Key handling ──────────────────────────────────────────────────────────

  /// Process a key event. Returns `true` to continue, `false` to quit.
  pub async fn handle_key(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
    // Global: Ctrl-C quits from anywhere.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
      return Ok(false);
    }

    match self.screen {
      Screen::SearchForm => self.handle_form_key(key).await,
      Screen::Results => self.handle_results_key(key).await,
      Screen::Detail => self.handle_detail_key(key).await,
    }
  }

  async fn handle_form_key(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
    match key.code {
      // Quit
      KeyCode::Esc => return Ok(false),

      // Cycle the search field
      KeyCode::Tab | KeyCode::Down => {
        self.field_idx = (self.field_idx + 1) % SEARCH_FIELDS.len();
      }
      KeyCode::BackTab | KeyCode::Up => {
        self.field_idx = (self.field_idx + SEARCH_FIELDS.len() - 1) % SEARCH_FIELDS.len();
      }

      // Run the search
      KeyCode::Enter => {
        if self.term.trim().is_empty() {
          self.status_msg = "Kata kunci tidak boleh kosong.".into();
        } else {
          self.run_search().await?;
        }
      }

      // Edit the term
      KeyCode::Backspace => {
        self.term.pop();
      }
      KeyCode::Char(c) => {
        self.term.push(c);
      }

      _ => {}
    }
    Ok(true)
  }

  async fn handle_results_key(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
    match key.code {
      // Quit
      KeyCode::Char('q') => return Ok(false),

      // Back to the form
      KeyCode::Esc | KeyCode::Char('/') => {
        self.screen = Screen::SearchForm;
        self.status_msg = String::new();
      }

      // Navigation
      KeyCode::Down | KeyCode::Char('j') => {
        if !self.results.is_empty() && self.list_cursor + 1 < self.results.len() {
          self.list_cursor += 1;
        }
      }
      KeyCode::Up | KeyCode::Char('k') => {
        if self.list_cursor > 0 {
          self.list_cursor -= 1;
        }
      }

      // Paging
      KeyCode::Right | KeyCode::Char('n') => {
        if self.page < self.total_pages {
          self.goto_page(self.page + 1).await;
        }
      }
      KeyCode::Left | KeyCode::Char('p') => {
        if self.page > 1 {
          self.goto_page(self.page - 1).await;
        }
      }

      // Open detail
      KeyCode::Enter | KeyCode::Char('l') => {
        self.open_detail().await?;
      }

      _ => {}
    }
    Ok(true)
  }

  async fn handle_detail_key(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
    match key.code {
      // Quit
      KeyCode::Char('q') => return Ok(false),

      // Back to results
      KeyCode::Esc | KeyCode::Left | KeyCode::Char('h') => {
        self.close_detail();
      }

      // Reveal / re-mask the parent names
      KeyCode::Char('m') => {
        self.show_mother = !self.show_mother;
      }
      KeyCode::Char('f') => {
        self.show_father = !self.show_father;
      }

      // Scroll
      KeyCode::Down | KeyCode::Char('j') => {
        self.detail_scroll += 1;
      }
      KeyCode::Up | KeyCode::Char('k') => {
        self.detail_scroll = self.detail_scroll.saturating_sub(1);
      }

      _ => {}
    }
    Ok(true)
  }
}
