//! Record — one row of the population registry.
//!
//! A record is keyed by its NIK (the national identity number). Members of
//! the same family share a household number (`household_id`), which is the
//! pivot of the family lookup.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{Error, Result, validate};

// ─── Nik ─────────────────────────────────────────────────────────────────────

/// A national identity number: exactly sixteen ASCII digits.
///
/// Both record ids and household ids are NIKs. The shape is validated once at
/// construction; everything downstream can trust it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Nik(String);

impl Nik {
  pub fn new(raw: impl Into<String>) -> Result<Self> {
    let raw = raw.into();
    if validate::is_nik_shaped(&raw) {
      Ok(Self(raw))
    } else {
      Err(Error::Validation(format!(
        "a NIK is exactly 16 digits, got {raw:?}"
      )))
    }
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl TryFrom<String> for Nik {
  type Error = Error;

  fn try_from(raw: String) -> Result<Self> {
    Self::new(raw)
  }
}

impl From<Nik> for String {
  fn from(nik: Nik) -> Self {
    nik.0
  }
}

impl std::str::FromStr for Nik {
  type Err = Error;

  fn from_str(raw: &str) -> Result<Self> {
    Self::new(raw)
  }
}

impl std::fmt::Display for Nik {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(&self.0)
  }
}

// ─── Sex ─────────────────────────────────────────────────────────────────────

/// Sex as recorded on the identity card. The serialised names are the exact
/// strings stored and served on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
  #[serde(rename = "LAKI-LAKI")]
  Male,
  #[serde(rename = "PEREMPUAN")]
  Female,
}

impl Sex {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Male => "LAKI-LAKI",
      Self::Female => "PEREMPUAN",
    }
  }
}

impl std::str::FromStr for Sex {
  type Err = Error;

  fn from_str(raw: &str) -> Result<Self> {
    match raw {
      "LAKI-LAKI" => Ok(Self::Male),
      "PEREMPUAN" => Ok(Self::Female),
      other => Err(Error::Validation(format!("unknown sex value: {other:?}"))),
    }
  }
}

// ─── Record ──────────────────────────────────────────────────────────────────

/// One citizen's registry entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
  pub id:              Nik,
  pub household_id:    Nik,
  pub full_name:       String,
  pub sex:             Sex,
  pub birth_place:     String,
  #[serde(default)]
  pub birth_date:      Option<NaiveDate>,
  /// Masked by default on every client surface.
  #[serde(default)]
  pub mother_name:     Option<String>,
  /// Masked by default on every client surface.
  #[serde(default)]
  pub father_name:     Option<String>,
  /// Position within the household, e.g. "KEPALA KELUARGA" or "ANAK".
  #[serde(default)]
  pub family_role:     Option<String>,
  #[serde(default)]
  pub occupation:      Option<String>,
  #[serde(default)]
  pub address:         Option<String>,
  /// Kecamatan.
  #[serde(default)]
  pub district:        Option<String>,
  /// Kelurahan.
  #[serde(default)]
  pub sub_district:    Option<String>,
  /// Opaque image id resolved by [`crate::photo::photo_url`].
  #[serde(default)]
  pub photo_reference: Option<String>,
}

// ─── FamilyMember ────────────────────────────────────────────────────────────

/// The projection served by the family lookup: enough to draw one member
/// row, nothing sensitive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FamilyMember {
  pub id:              Nik,
  pub full_name:       String,
  pub sex:             Sex,
  #[serde(default)]
  pub birth_date:      Option<NaiveDate>,
  #[serde(default)]
  pub family_role:     Option<String>,
  #[serde(default)]
  pub photo_reference: Option<String>,
}

// ─── RecordPatch ─────────────────────────────────────────────────────────────

/// A partial update to an existing record. `None` leaves the stored field
/// unchanged; the id itself is never patched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordPatch {
  pub household_id:    Option<Nik>,
  pub full_name:       Option<String>,
  pub sex:             Option<Sex>,
  pub birth_place:     Option<String>,
  pub birth_date:      Option<NaiveDate>,
  pub mother_name:     Option<String>,
  pub father_name:     Option<String>,
  pub family_role:     Option<String>,
  pub occupation:      Option<String>,
  pub address:         Option<String>,
  pub district:        Option<String>,
  pub sub_district:    Option<String>,
  pub photo_reference: Option<String>,
}

impl RecordPatch {
  /// Fold the patch into `record`, field by field.
  pub fn apply(self, record: &mut Record) {
    if let Some(v) = self.household_id {
      record.household_id = v;
    }
    if let Some(v) = self.full_name {
      record.full_name = v;
    }
    if let Some(v) = self.sex {
      record.sex = v;
    }
    if let Some(v) = self.birth_place {
      record.birth_place = v;
    }
    if let Some(v) = self.birth_date {
      record.birth_date = Some(v);
    }
    if let Some(v) = self.mother_name {
      record.mother_name = Some(v);
    }
    if let Some(v) = self.father_name {
      record.father_name = Some(v);
    }
    if let Some(v) = self.family_role {
      record.family_role = Some(v);
    }
    if let Some(v) = self.occupation {
      record.occupation = Some(v);
    }
    if let Some(v) = self.address {
      record.address = Some(v);
    }
    if let Some(v) = self.district {
      record.district = Some(v);
    }
    if let Some(v) = self.sub_district {
      record.sub_district = Some(v);
    }
    if let Some(v) = self.photo_reference {
      record.photo_reference = Some(v);
    }
  }
}

impl Record {
  /// Project the fields the family lookup serves.
  pub fn into_family_member(self) -> FamilyMember {
    FamilyMember {
      id:              self.id,
      full_name:       self.full_name,
      sex:             self.sex,
      birth_date:      self.birth_date,
      family_role:     self.family_role,
      photo_reference: self.photo_reference,
    }
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn nik_accepts_sixteen_digits() {
    let nik = Nik::new("3201011503900001").unwrap();
    assert_eq!(nik.as_str(), "3201011503900001");
  }

  #[test]
  fn nik_rejects_wrong_length_and_non_digits() {
    assert!(Nik::new("320101150390000").is_err());
    assert!(Nik::new("32010115039000011").is_err());
    assert!(Nik::new("32010115O3900001").is_err());
    assert!(Nik::new("").is_err());
  }

  #[test]
  fn nik_serde_round_trip_validates() {
    let nik: Nik = serde_json::from_str("\"3201011503900001\"").unwrap();
    assert_eq!(serde_json::to_string(&nik).unwrap(), "\"3201011503900001\"");
    assert!(serde_json::from_str::<Nik>("\"not-a-nik\"").is_err());
  }

  #[test]
  fn sex_uses_card_spelling_on_the_wire() {
    assert_eq!(serde_json::to_string(&Sex::Male).unwrap(), "\"LAKI-LAKI\"");
    let sex: Sex = serde_json::from_str("\"PEREMPUAN\"").unwrap();
    assert_eq!(sex, Sex::Female);
    assert!("laki-laki".parse::<Sex>().is_err());
  }

  #[test]
  fn record_deserialises_without_optional_fields() {
    let record: Record = serde_json::from_str(
      r#"{
        "id": "3201011503900001",
        "household_id": "3201010000000001",
        "full_name": "BUDI SANTOSO",
        "sex": "LAKI-LAKI",
        "birth_place": "BOGOR"
      }"#,
    )
    .unwrap();
    assert_eq!(record.full_name, "BUDI SANTOSO");
    assert!(record.birth_date.is_none());
    assert!(record.mother_name.is_none());
  }

  #[test]
  fn patch_overwrites_only_present_fields() {
    let mut record: Record = serde_json::from_str(
      r#"{
        "id": "3201011503900001",
        "household_id": "3201010000000001",
        "full_name": "BUDI SANTOSO",
        "sex": "LAKI-LAKI",
        "birth_place": "BOGOR",
        "occupation": "PETANI"
      }"#,
    )
    .unwrap();

    let patch = RecordPatch {
      full_name: Some("BUDI SANTOSA".into()),
      address: Some("JL. MERDEKA 1".into()),
      ..RecordPatch::default()
    };
    patch.apply(&mut record);

    assert_eq!(record.full_name, "BUDI SANTOSA");
    assert_eq!(record.address.as_deref(), Some("JL. MERDEKA 1"));
    assert_eq!(record.occupation.as_deref(), Some("PETANI"));
  }
}
