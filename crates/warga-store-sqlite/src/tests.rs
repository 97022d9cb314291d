//! Integration tests for `SqliteStore` against an in-memory database.

use chrono::NaiveDate;
use warga_core::{
  query::{AdminField, AdminQuery, RecordQuery, SearchField},
  record::{Nik, Record, RecordPatch, Sex},
  store::RecordStore,
};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn nik(s: &str) -> Nik {
  s.parse().expect("valid NIK")
}

fn record(id: &str, household: &str, name: &str) -> Record {
  Record {
    id:              nik(id),
    household_id:    nik(household),
    full_name:       name.into(),
    sex:             Sex::Male,
    birth_place:     "BOGOR".into(),
    birth_date:      NaiveDate::from_ymd_opt(1990, 3, 15),
    mother_name:     Some("SITI AMINAH".into()),
    father_name:     Some("HASAN BASRI".into()),
    family_role:     Some("KEPALA KELUARGA".into()),
    occupation:      Some("PETANI".into()),
    address:         Some("JL. MERDEKA NO. 1".into()),
    district:        Some("BOGOR SELATAN".into()),
    sub_district:    Some("CIPAKU".into()),
    photo_reference: None,
  }
}

// ─── Insert / get ────────────────────────────────────────────────────────────

#[tokio::test]
async fn insert_and_get() {
  let s = store().await;

  let inserted = s
    .insert(record("3201011503900001", "3201010000000001", "BUDI SANTOSO"))
    .await
    .unwrap();

  let fetched = s.get(inserted.id.clone()).await.unwrap().unwrap();
  assert_eq!(fetched.full_name, "BUDI SANTOSO");
  assert_eq!(fetched.household_id, inserted.household_id);
  assert_eq!(fetched.birth_date, NaiveDate::from_ymd_opt(1990, 3, 15));
  assert_eq!(fetched.mother_name.as_deref(), Some("SITI AMINAH"));
}

#[tokio::test]
async fn get_missing_returns_none() {
  let s = store().await;
  let result = s.get(nik("9999999999999999")).await.unwrap();
  assert!(result.is_none());
}

#[tokio::test]
async fn duplicate_insert_is_rejected() {
  let s = store().await;

  s.insert(record("3201011503900001", "3201010000000001", "BUDI SANTOSO"))
    .await
    .unwrap();
  let err = s
    .insert(record("3201011503900001", "3201010000000002", "BUDI LAIN"))
    .await
    .unwrap_err();

  assert!(matches!(err, crate::Error::DuplicateId(_)));
}

// ─── Update / delete ─────────────────────────────────────────────────────────

#[tokio::test]
async fn update_patches_only_given_fields() {
  let s = store().await;
  s.insert(record("3201011503900001", "3201010000000001", "BUDI SANTOSO"))
    .await
    .unwrap();

  let patch = RecordPatch {
    full_name: Some("BUDI SANTOSA".into()),
    occupation: Some("PEDAGANG".into()),
    ..RecordPatch::default()
  };
  let updated = s.update(nik("3201011503900001"), patch).await.unwrap();

  assert_eq!(updated.full_name, "BUDI SANTOSA");
  assert_eq!(updated.occupation.as_deref(), Some("PEDAGANG"));
  // Untouched fields survive.
  assert_eq!(updated.birth_place, "BOGOR");
  assert_eq!(updated.mother_name.as_deref(), Some("SITI AMINAH"));

  let fetched = s.get(nik("3201011503900001")).await.unwrap().unwrap();
  assert_eq!(fetched.full_name, "BUDI SANTOSA");
}

#[tokio::test]
async fn update_unknown_id_errors() {
  let s = store().await;
  let err = s
    .update(nik("9999999999999999"), RecordPatch::default())
    .await
    .unwrap_err();
  assert!(matches!(err, crate::Error::RecordNotFound(_)));
}

#[tokio::test]
async fn delete_removes_the_row_and_nothing_else() {
  let s = store().await;
  s.insert(record("3201011503900001", "3201010000000001", "BUDI SANTOSO"))
    .await
    .unwrap();
  s.insert(record("3201011503900002", "3201010000000001", "SITI RAHAYU"))
    .await
    .unwrap();

  s.delete(nik("3201011503900001")).await.unwrap();

  assert!(s.get(nik("3201011503900001")).await.unwrap().is_none());
  // The other household member is untouched.
  assert!(s.get(nik("3201011503900002")).await.unwrap().is_some());
}

#[tokio::test]
async fn delete_unknown_id_errors() {
  let s = store().await;
  let err = s.delete(nik("9999999999999999")).await.unwrap_err();
  assert!(matches!(err, crate::Error::RecordNotFound(_)));
}

// ─── Public search ───────────────────────────────────────────────────────────

#[tokio::test]
async fn search_by_name_is_substring_and_case_insensitive() {
  let s = store().await;
  s.insert(record("3201011503900001", "3201010000000001", "BUDI SANTOSO"))
    .await
    .unwrap();
  s.insert(record("3201011503900002", "3201010000000002", "SITI RAHAYU"))
    .await
    .unwrap();

  let q = RecordQuery::new(SearchField::FullName, "santo", 1).unwrap();
  let page = s.search(&q).await.unwrap();

  assert_eq!(page.total_count, 1);
  assert_eq!(page.items[0].full_name, "BUDI SANTOSO");
}

#[tokio::test]
async fn search_by_id_is_exact() {
  let s = store().await;
  s.insert(record("3201011503900001", "3201010000000001", "BUDI SANTOSO"))
    .await
    .unwrap();

  let q = RecordQuery::new(SearchField::Id, "3201011503900001", 1).unwrap();
  assert_eq!(s.search(&q).await.unwrap().total_count, 1);

  // A prefix is not a match.
  let q = RecordQuery::new(SearchField::Id, "3201011503900000", 1).unwrap();
  assert_eq!(s.search(&q).await.unwrap().total_count, 0);
}

#[tokio::test]
async fn search_by_household_groups_members() {
  let s = store().await;
  s.insert(record("3201011503900001", "3201010000000001", "BUDI SANTOSO"))
    .await
    .unwrap();
  s.insert(record("3201011503900002", "3201010000000001", "SITI RAHAYU"))
    .await
    .unwrap();
  s.insert(record("3201011503900003", "3201010000000002", "AGUS WIJAYA"))
    .await
    .unwrap();

  let q = RecordQuery::new(SearchField::HouseholdId, "3201010000000001", 1).unwrap();
  assert_eq!(s.search(&q).await.unwrap().total_count, 2);
}

#[tokio::test]
async fn search_birth_month_matches_single_digit_terms() {
  let s = store().await;
  let mut march = record("3201011503900001", "3201010000000001", "BUDI SANTOSO");
  march.birth_date = NaiveDate::from_ymd_opt(1990, 3, 15);
  let mut november = record("3201011503900002", "3201010000000002", "SITI RAHAYU");
  november.birth_date = NaiveDate::from_ymd_opt(1985, 11, 2);
  s.insert(march).await.unwrap();
  s.insert(november).await.unwrap();

  // "3" is zero-padded by the query translation and matches March only.
  let q = RecordQuery::new(SearchField::BirthMonth, "3", 1).unwrap();
  let page = s.search(&q).await.unwrap();
  assert_eq!(page.total_count, 1);
  assert_eq!(page.items[0].full_name, "BUDI SANTOSO");

  let q = RecordQuery::new(SearchField::BirthMonth, "11", 1).unwrap();
  assert_eq!(s.search(&q).await.unwrap().total_count, 1);
}

#[tokio::test]
async fn search_birth_year_matches_the_year_prefix() {
  let s = store().await;
  let mut a = record("3201011503900001", "3201010000000001", "BUDI SANTOSO");
  a.birth_date = NaiveDate::from_ymd_opt(1990, 3, 15);
  let mut b = record("3201011503900002", "3201010000000002", "SITI RAHAYU");
  b.birth_date = NaiveDate::from_ymd_opt(1985, 11, 2);
  s.insert(a).await.unwrap();
  s.insert(b).await.unwrap();

  let q = RecordQuery::new(SearchField::BirthYear, "1985", 1).unwrap();
  let page = s.search(&q).await.unwrap();
  assert_eq!(page.total_count, 1);
  assert_eq!(page.items[0].full_name, "SITI RAHAYU");
}

#[tokio::test]
async fn search_by_district_is_substring() {
  let s = store().await;
  s.insert(record("3201011503900001", "3201010000000001", "BUDI SANTOSO"))
    .await
    .unwrap();

  let q = RecordQuery::new(SearchField::District, "selatan", 1).unwrap();
  assert_eq!(s.search(&q).await.unwrap().total_count, 1);
}

#[tokio::test]
async fn search_paginates_at_twelve_per_page() {
  let s = store().await;
  for i in 0..15 {
    s.insert(record(
      &format!("32010115039000{i:02}"),
      "3201010000000001",
      &format!("BUDI {i:02}"),
    ))
    .await
    .unwrap();
  }

  let q = RecordQuery::new(SearchField::FullName, "budi", 1).unwrap();
  let first = s.search(&q).await.unwrap();
  assert_eq!(first.items.len(), 12);
  assert_eq!(first.total_count, 15);
  assert_eq!(first.total_pages, 2);

  let q = RecordQuery::new(SearchField::FullName, "budi", 2).unwrap();
  let second = s.search(&q).await.unwrap();
  assert_eq!(second.items.len(), 3);

  // Past the last page: empty, not an error.
  let q = RecordQuery::new(SearchField::FullName, "budi", 3).unwrap();
  let third = s.search(&q).await.unwrap();
  assert!(third.items.is_empty());
  assert_eq!(third.total_pages, 2);
}

// ─── Admin list ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_matches_substrings_on_id_or_name() {
  let s = store().await;
  s.insert(record("3201011503900001", "3201010000000001", "BUDI SANTOSO"))
    .await
    .unwrap();
  s.insert(record("3301011503900002", "3301010000000002", "SITI RAHAYU"))
    .await
    .unwrap();

  let by_id = AdminQuery::new(AdminField::Id, "3301", 1);
  let page = s.list(&by_id).await.unwrap();
  assert_eq!(page.total_count, 1);
  assert_eq!(page.items[0].full_name, "SITI RAHAYU");

  let by_name = AdminQuery::new(AdminField::FullName, "budi", 1);
  assert_eq!(s.list(&by_name).await.unwrap().total_count, 1);
}

#[tokio::test]
async fn list_with_empty_term_pages_through_everything() {
  let s = store().await;
  for i in 0..12 {
    s.insert(record(
      &format!("32010115039000{i:02}"),
      "3201010000000001",
      &format!("WARGA {i:02}"),
    ))
    .await
    .unwrap();
  }

  let q = AdminQuery::new(AdminField::FullName, "", 1);
  let first = s.list(&q).await.unwrap();
  assert_eq!(first.items.len(), 10);
  assert_eq!(first.total_count, 12);
  assert_eq!(first.total_pages, 2);

  let q = AdminQuery::new(AdminField::FullName, "", 2);
  assert_eq!(s.list(&q).await.unwrap().items.len(), 2);
}

// ─── Family lookup ───────────────────────────────────────────────────────────

#[tokio::test]
async fn family_excludes_the_subject_and_other_households() {
  let s = store().await;
  s.insert(record("3201011503900001", "3201010000000001", "BUDI SANTOSO"))
    .await
    .unwrap();
  let mut child = record("3201011503900002", "3201010000000001", "ANDI SANTOSO");
  child.family_role = Some("ANAK".into());
  s.insert(child).await.unwrap();
  s.insert(record("3201011503900003", "3201010000000002", "AGUS WIJAYA"))
    .await
    .unwrap();

  let members = s
    .family(nik("3201010000000001"), Some(nik("3201011503900001")))
    .await
    .unwrap();

  assert_eq!(members.len(), 1);
  assert_eq!(members[0].full_name, "ANDI SANTOSO");
  assert_eq!(members[0].family_role.as_deref(), Some("ANAK"));

  let everyone = s.family(nik("3201010000000001"), None).await.unwrap();
  assert_eq!(everyone.len(), 2);
}

#[tokio::test]
async fn family_of_a_lone_household_is_empty() {
  let s = store().await;
  s.insert(record("3201011503900001", "3201010000000001", "BUDI SANTOSO"))
    .await
    .unwrap();

  let members = s
    .family(nik("3201010000000001"), Some(nik("3201011503900001")))
    .await
    .unwrap();
  assert!(members.is_empty());
}
