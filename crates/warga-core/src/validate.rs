//! Input validation shared by the domain constructors and the API surface.

use crate::{Error, Result, record::Record};

/// True when `raw` is exactly sixteen ASCII digits — the shape of every NIK
/// and household number.
pub fn is_nik_shaped(raw: &str) -> bool {
  raw.len() == 16 && raw.bytes().all(|b| b.is_ascii_digit())
}

/// Checks a record about to be inserted. The 16-digit fields are already
/// validated by [`crate::record::Nik`]; what remains is that the name
/// carries text.
pub fn new_record(record: &Record) -> Result<()> {
  if record.full_name.trim().is_empty() {
    return Err(Error::Validation("full_name must not be empty".into()));
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::record::{Nik, Sex};

  fn record(full_name: &str) -> Record {
    Record {
      id:              Nik::new("3201011503900001").unwrap(),
      household_id:    Nik::new("3201010000000001").unwrap(),
      full_name:       full_name.into(),
      sex:             Sex::Male,
      birth_place:     "BOGOR".into(),
      birth_date:      None,
      mother_name:     None,
      father_name:     None,
      family_role:     None,
      occupation:      None,
      address:         None,
      district:        None,
      sub_district:    None,
      photo_reference: None,
    }
  }

  #[test]
  fn nik_shape() {
    assert!(is_nik_shaped("3201011503900001"));
    assert!(!is_nik_shaped("3201-11503900001"));
    assert!(!is_nik_shaped("32010115039000"));
  }

  #[test]
  fn blank_name_is_rejected() {
    assert!(new_record(&record("BUDI")).is_ok());
    assert!(new_record(&record("   ")).is_err());
  }
}
