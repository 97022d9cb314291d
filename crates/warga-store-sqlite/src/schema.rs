//! SQL schema for the Warga SQLite store.
//!
//! Executed once at connection startup via `PRAGMA user_version`. Future
//! migrations will be gated on that version number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS records (
    id              TEXT PRIMARY KEY,  -- 16-digit NIK
    household_id    TEXT NOT NULL,     -- 16-digit household number, shared by family members
    full_name       TEXT NOT NULL,
    sex             TEXT NOT NULL,     -- 'LAKI-LAKI' | 'PEREMPUAN'
    birth_place     TEXT NOT NULL,
    birth_date      TEXT,              -- ISO 8601 calendar date
    mother_name     TEXT,
    father_name     TEXT,
    family_role     TEXT,
    occupation      TEXT,
    address         TEXT,
    district        TEXT,
    sub_district    TEXT,
    photo_reference TEXT
);

CREATE INDEX IF NOT EXISTS records_household_idx  ON records(household_id);
CREATE INDEX IF NOT EXISTS records_birth_date_idx ON records(birth_date);

PRAGMA user_version = 1;
";
