//! Encoding and decoding helpers between domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! NIKs and sexes are stored as their wire strings; birth dates as ISO 8601
//! calendar dates (`YYYY-MM-DD`), which keeps the month and year predicates
//! simple LIKE patterns.

use chrono::NaiveDate;
use warga_core::record::{Nik, Record, Sex};

use crate::{Error, Result};

// ─── Scalar columns ──────────────────────────────────────────────────────────

pub fn encode_date(date: NaiveDate) -> String {
  date.format("%Y-%m-%d").to_string()
}

pub fn decode_date(s: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(s, "%Y-%m-%d")
    .map_err(|e| Error::DateParse(format!("{s:?}: {e}")))
}

pub fn decode_nik(s: &str) -> Result<Nik> {
  Ok(s.parse::<Nik>()?)
}

pub fn decode_sex(s: &str) -> Result<Sex> {
  Ok(s.parse::<Sex>()?)
}

// ─── Row type ────────────────────────────────────────────────────────────────

/// Column list shared by every SELECT; the order matches
/// [`RawRecord::from_row`].
pub const COLUMNS: &str = "id, household_id, full_name, sex, birth_place, \
                           birth_date, mother_name, father_name, family_role, \
                           occupation, address, district, sub_district, \
                           photo_reference";

/// Raw strings read directly from a `records` row.
pub struct RawRecord {
  pub id:              String,
  pub household_id:    String,
  pub full_name:       String,
  pub sex:             String,
  pub birth_place:     String,
  pub birth_date:      Option<String>,
  pub mother_name:     Option<String>,
  pub father_name:     Option<String>,
  pub family_role:     Option<String>,
  pub occupation:      Option<String>,
  pub address:         Option<String>,
  pub district:        Option<String>,
  pub sub_district:    Option<String>,
  pub photo_reference: Option<String>,
}

impl RawRecord {
  /// Flatten a record into the column strings shared by INSERT and UPDATE.
  pub fn from_record(record: &Record) -> Self {
    Self {
      id:              record.id.as_str().to_owned(),
      household_id:    record.household_id.as_str().to_owned(),
      full_name:       record.full_name.clone(),
      sex:             record.sex.as_str().to_owned(),
      birth_place:     record.birth_place.clone(),
      birth_date:      record.birth_date.map(encode_date),
      mother_name:     record.mother_name.clone(),
      father_name:     record.father_name.clone(),
      family_role:     record.family_role.clone(),
      occupation:      record.occupation.clone(),
      address:         record.address.clone(),
      district:        record.district.clone(),
      sub_district:    record.sub_district.clone(),
      photo_reference: record.photo_reference.clone(),
    }
  }

  /// Read one row in [`COLUMNS`] order.
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:              row.get(0)?,
      household_id:    row.get(1)?,
      full_name:       row.get(2)?,
      sex:             row.get(3)?,
      birth_place:     row.get(4)?,
      birth_date:      row.get(5)?,
      mother_name:     row.get(6)?,
      father_name:     row.get(7)?,
      family_role:     row.get(8)?,
      occupation:      row.get(9)?,
      address:         row.get(10)?,
      district:        row.get(11)?,
      sub_district:    row.get(12)?,
      photo_reference: row.get(13)?,
    })
  }

  pub fn into_record(self) -> Result<Record> {
    Ok(Record {
      id:              decode_nik(&self.id)?,
      household_id:    decode_nik(&self.household_id)?,
      full_name:       self.full_name,
      sex:             decode_sex(&self.sex)?,
      birth_place:     self.birth_place,
      birth_date:      self.birth_date.as_deref().map(decode_date).transpose()?,
      mother_name:     self.mother_name,
      father_name:     self.father_name,
      family_role:     self.family_role,
      occupation:      self.occupation,
      address:         self.address,
      district:        self.district,
      sub_district:    self.sub_district,
      photo_reference: self.photo_reference,
    })
  }
}
