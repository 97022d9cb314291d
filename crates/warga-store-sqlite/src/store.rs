//! [`SqliteStore`] — the SQLite implementation of [`RecordStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;

use warga_core::{
  query::{ADMIN_PAGE_SIZE, AdminField, AdminQuery, Page, PUBLIC_PAGE_SIZE, RecordQuery, SearchField},
  record::{FamilyMember, Nik, Record, RecordPatch},
  store::RecordStore,
};

use crate::{
  Error, Result,
  encode::{COLUMNS, RawRecord},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A registry store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Run one filtered page plus a COUNT over the same predicate, the shape
  /// both search surfaces share.
  async fn page_query(
    &self,
    cond: &'static str,
    param: String,
    page: usize,
    limit: usize,
  ) -> Result<Page<Record>> {
    let limit_val = limit as i64;
    let offset_val = ((page - 1) * limit) as i64;

    let (raws, total): (Vec<RawRecord>, i64) = self
      .conn
      .call(move |conn| {
        let total: i64 = conn.query_row(
          &format!("SELECT COUNT(*) FROM records WHERE {cond}"),
          rusqlite::params![param],
          |row| row.get(0),
        )?;

        let sql = format!(
          "SELECT {COLUMNS} FROM records WHERE {cond}
           ORDER BY full_name, id
           LIMIT ?2 OFFSET ?3"
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(
            rusqlite::params![param, limit_val, offset_val],
            |row| RawRecord::from_row(row),
          )?
          .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok((rows, total))
      })
      .await?;

    let items = raws
      .into_iter()
      .map(RawRecord::into_record)
      .collect::<Result<Vec<_>>>()?;

    Ok(Page::new(items, total as usize, page, limit))
  }
}

/// Translate a public search field into a WHERE condition and its parameter.
///
/// Birth dates are stored as `YYYY-MM-DD`, so the month and year predicates
/// are plain LIKE patterns over the text column.
fn predicate(field: SearchField, term: &str) -> (&'static str, String) {
  match field {
    SearchField::FullName => ("full_name LIKE ?1", format!("%{term}%")),
    SearchField::Id => ("id = ?1", term.to_string()),
    SearchField::HouseholdId => ("household_id = ?1", term.to_string()),
    SearchField::BirthMonth => ("birth_date LIKE ?1", format!("%-{term}-%")),
    SearchField::BirthYear => ("birth_date LIKE ?1", format!("{term}-%")),
    SearchField::District => ("district LIKE ?1", format!("%{term}%")),
  }
}

/// Map a primary-key violation on insert to [`Error::DuplicateId`].
fn map_insert_err(err: tokio_rusqlite::Error, id: Nik) -> Error {
  match &err {
    tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(e, _))
      if e.code == rusqlite::ErrorCode::ConstraintViolation =>
    {
      Error::DuplicateId(id)
    }
    _ => Error::Database(err),
  }
}

// ─── RecordStore impl ────────────────────────────────────────────────────────

impl RecordStore for SqliteStore {
  type Error = Error;

  // ── Writes ────────────────────────────────────────────────────────────────

  async fn insert(&self, record: Record) -> Result<Record> {
    let id = record.id.clone();
    let row = RawRecord::from_record(&record);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO records (
             id, household_id, full_name, sex, birth_place, birth_date,
             mother_name, father_name, family_role, occupation, address,
             district, sub_district, photo_reference
           ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)",
          rusqlite::params![
            row.id,
            row.household_id,
            row.full_name,
            row.sex,
            row.birth_place,
            row.birth_date,
            row.mother_name,
            row.father_name,
            row.family_role,
            row.occupation,
            row.address,
            row.district,
            row.sub_district,
            row.photo_reference,
          ],
        )?;
        Ok(())
      })
      .await
      .map_err(|e| map_insert_err(e, id))?;

    Ok(record)
  }

  async fn update(&self, id: Nik, patch: RecordPatch) -> Result<Record> {
    // Read-modify-write; concurrent updates are last-write-wins.
    let mut record = self
      .get(id.clone())
      .await?
      .ok_or_else(|| Error::RecordNotFound(id.clone()))?;
    patch.apply(&mut record);

    let row = RawRecord::from_record(&record);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "UPDATE records SET
             household_id = ?2, full_name = ?3, sex = ?4, birth_place = ?5,
             birth_date = ?6, mother_name = ?7, father_name = ?8,
             family_role = ?9, occupation = ?10, address = ?11,
             district = ?12, sub_district = ?13, photo_reference = ?14
           WHERE id = ?1",
          rusqlite::params![
            row.id,
            row.household_id,
            row.full_name,
            row.sex,
            row.birth_place,
            row.birth_date,
            row.mother_name,
            row.father_name,
            row.family_role,
            row.occupation,
            row.address,
            row.district,
            row.sub_district,
            row.photo_reference,
          ],
        )?;
        Ok(())
      })
      .await?;

    Ok(record)
  }

  async fn delete(&self, id: Nik) -> Result<()> {
    let id_str = id.as_str().to_owned();

    let affected = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "DELETE FROM records WHERE id = ?1",
          rusqlite::params![id_str],
        )?)
      })
      .await?;

    if affected == 0 {
      return Err(Error::RecordNotFound(id));
    }
    Ok(())
  }

  // ── Reads ─────────────────────────────────────────────────────────────────

  async fn get(&self, id: Nik) -> Result<Option<Record>> {
    let id_str = id.as_str().to_owned();

    let raw: Option<RawRecord> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {COLUMNS} FROM records WHERE id = ?1"),
              rusqlite::params![id_str],
              |row| RawRecord::from_row(row),
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawRecord::into_record).transpose()
  }

  async fn search(&self, query: &RecordQuery) -> Result<Page<Record>> {
    let (cond, param) = predicate(query.field, &query.term);
    self.page_query(cond, param, query.page, PUBLIC_PAGE_SIZE).await
  }

  async fn list(&self, query: &AdminQuery) -> Result<Page<Record>> {
    // Substring on either column; an empty term degenerates to match-all.
    let cond = match query.field {
      AdminField::Id => "id LIKE ?1",
      AdminField::FullName => "full_name LIKE ?1",
    };
    let param = format!("%{}%", query.term);
    self.page_query(cond, param, query.page, ADMIN_PAGE_SIZE).await
  }

  async fn family(&self, household_id: Nik, excluding: Option<Nik>) -> Result<Vec<FamilyMember>> {
    let household_str = household_id.as_str().to_owned();
    let excluding_str = excluding.map(|nik| nik.as_str().to_owned());

    let raws: Vec<RawRecord> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {COLUMNS} FROM records
           WHERE household_id = ?1 AND (?2 IS NULL OR id != ?2)"
        ))?;
        let rows = stmt
          .query_map(rusqlite::params![household_str, excluding_str], |row| {
            RawRecord::from_row(row)
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws
      .into_iter()
      .map(|raw| Ok(raw.into_record()?.into_family_member()))
      .collect()
  }
}
