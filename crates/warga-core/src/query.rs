//! Query translation — from raw wire parameters to store predicates.
//!
//! Every search arrives as a field name, a term, and a 1-based page number.
//! Translation normalises the term, rejects what it cannot interpret, and
//! fixes the page arithmetic in one place.

use crate::{Error, Result};

// ─── Page sizes ──────────────────────────────────────────────────────────────

/// Results per page on the public search surface.
pub const PUBLIC_PAGE_SIZE: usize = 12;

/// Results per page on the admin list surface.
pub const ADMIN_PAGE_SIZE: usize = 10;

// ─── Public search ───────────────────────────────────────────────────────────

/// The column a public search filters on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
  FullName,
  Id,
  HouseholdId,
  BirthMonth,
  BirthYear,
  District,
}

impl SearchField {
  /// Parse the wire name. An unknown name is rejected, never treated as an
  /// unfiltered match-all.
  pub fn parse(raw: &str) -> Result<Self> {
    match raw {
      "full_name" => Ok(Self::FullName),
      "id" => Ok(Self::Id),
      "household_id" => Ok(Self::HouseholdId),
      "birth_month" => Ok(Self::BirthMonth),
      "birth_year" => Ok(Self::BirthYear),
      "district" => Ok(Self::District),
      other => Err(Error::Validation(format!(
        "unknown search field: {other:?}"
      ))),
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::FullName => "full_name",
      Self::Id => "id",
      Self::HouseholdId => "household_id",
      Self::BirthMonth => "birth_month",
      Self::BirthYear => "birth_year",
      Self::District => "district",
    }
  }
}

/// Parameters for [`crate::store::RecordStore::search`].
#[derive(Debug, Clone)]
pub struct RecordQuery {
  pub field: SearchField,
  pub term:  String,
  /// 1-based.
  pub page:  usize,
}

impl RecordQuery {
  /// Validate and normalise the raw wire values.
  ///
  /// The term must be non-empty after trimming. A one-digit birth-month term
  /// is left-padded so `"3"` matches March.
  pub fn new(field: SearchField, term: &str, page: usize) -> Result<Self> {
    let term = term.trim();
    if term.is_empty() {
      return Err(Error::Validation("search term must not be empty".into()));
    }
    let term = match field {
      SearchField::BirthMonth if term.len() == 1 => format!("0{term}"),
      _ => term.to_string(),
    };
    Ok(Self { field, term, page: page.max(1) })
  }

  pub fn offset(&self) -> usize {
    (self.page - 1) * PUBLIC_PAGE_SIZE
  }
}

// ─── Admin list ──────────────────────────────────────────────────────────────

/// The column an admin list search filters on. Both are substring matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminField {
  Id,
  FullName,
}

impl AdminField {
  pub fn parse(raw: &str) -> Result<Self> {
    match raw {
      "id" => Ok(Self::Id),
      "full_name" => Ok(Self::FullName),
      other => Err(Error::Validation(format!(
        "unknown search field: {other:?}"
      ))),
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Id => "id",
      Self::FullName => "full_name",
    }
  }
}

/// Parameters for [`crate::store::RecordStore::list`]. An empty term matches
/// every record, which is how the admin surface lists the whole registry.
#[derive(Debug, Clone)]
pub struct AdminQuery {
  pub field: AdminField,
  pub term:  String,
  /// 1-based.
  pub page:  usize,
}

impl AdminQuery {
  pub fn new(field: AdminField, term: &str, page: usize) -> Self {
    Self {
      field,
      term: term.trim().to_string(),
      page: page.max(1),
    }
  }

  pub fn offset(&self) -> usize {
    (self.page - 1) * ADMIN_PAGE_SIZE
  }
}

// ─── Page ────────────────────────────────────────────────────────────────────

/// One page of results plus the arithmetic the pager needs.
#[derive(Debug, Clone)]
pub struct Page<T> {
  pub items:       Vec<T>,
  pub total_count: usize,
  /// The 1-based page number that produced this page.
  pub page:        usize,
  pub total_pages: usize,
}

impl<T> Page<T> {
  /// Assemble a page, deriving `total_pages = ceil(total_count / limit)`.
  pub fn new(items: Vec<T>, total_count: usize, page: usize, limit: usize) -> Self {
    Self {
      items,
      total_count,
      page,
      total_pages: total_count.div_ceil(limit),
    }
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn unknown_field_is_an_error() {
    assert!(SearchField::parse("full_name").is_ok());
    assert!(SearchField::parse("nama").is_err());
    assert!(SearchField::parse("").is_err());
    assert!(AdminField::parse("household_id").is_err());
  }

  #[test]
  fn empty_term_is_an_error() {
    assert!(RecordQuery::new(SearchField::FullName, "  ", 1).is_err());
  }

  #[test]
  fn birth_month_term_is_zero_padded() {
    let q = RecordQuery::new(SearchField::BirthMonth, "3", 1).unwrap();
    assert_eq!(q.term, "03");
    let q = RecordQuery::new(SearchField::BirthMonth, "11", 1).unwrap();
    assert_eq!(q.term, "11");
  }

  #[test]
  fn page_is_clamped_to_one() {
    let q = RecordQuery::new(SearchField::Id, "3201011503900001", 0).unwrap();
    assert_eq!(q.page, 1);
    assert_eq!(q.offset(), 0);
  }

  #[test]
  fn offsets_follow_the_surface_page_size() {
    let q = RecordQuery::new(SearchField::FullName, "budi", 3).unwrap();
    assert_eq!(q.offset(), 24);
    let a = AdminQuery::new(AdminField::FullName, "budi", 3);
    assert_eq!(a.offset(), 20);
  }

  #[test]
  fn total_pages_rounds_up() {
    assert_eq!(Page::<u8>::new(vec![], 0, 1, 12).total_pages, 0);
    assert_eq!(Page::<u8>::new(vec![], 12, 1, 12).total_pages, 1);
    assert_eq!(Page::<u8>::new(vec![], 25, 1, 12).total_pages, 3);
  }
}
