//! Indonesian-locale date formatting for client surfaces.

use chrono::{Datelike, NaiveDate};

/// Day names, Sunday first, indexed by `Datelike::weekday()
/// .num_days_from_sunday()`.
const DAYS: [&str; 7] = [
  "Minggu", "Senin", "Selasa", "Rabu", "Kamis", "Jumat", "Sabtu",
];

const MONTHS: [&str; 12] = [
  "Januari", "Februari", "Maret", "April", "Mei", "Juni", "Juli", "Agustus",
  "September", "Oktober", "November", "Desember",
];

/// `DD/MM/YYYY`.
pub fn short(date: NaiveDate) -> String {
  date.format("%d/%m/%Y").to_string()
}

/// `<Hari>, <D> <Bulan> <YYYY>`, e.g. `Senin, 12 Januari 1978`.
pub fn long(date: NaiveDate) -> String {
  let day = DAYS[date.weekday().num_days_from_sunday() as usize];
  let month = MONTHS[date.month0() as usize];
  format!("{day}, {} {month} {}", date.day(), date.year())
}

/// Short-format raw date text; text that does not parse as an ISO date is
/// returned unchanged.
pub fn short_or_raw(raw: &str) -> String {
  match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
    Ok(date) => short(date),
    Err(_) => raw.to_string(),
  }
}

/// Long-format raw date text, falling back to [`short_or_raw`] when it does
/// not parse.
pub fn long_or_raw(raw: &str) -> String {
  match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
    Ok(date) => long(date),
    Err(_) => short_or_raw(raw),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
  }

  #[test]
  fn short_is_day_month_year() {
    assert_eq!(short(date(1978, 1, 12)), "12/01/1978");
  }

  #[test]
  fn long_names_the_day_and_month() {
    // 1978-01-12 was a Thursday.
    assert_eq!(long(date(1978, 1, 12)), "Kamis, 12 Januari 1978");
    assert_eq!(long(date(2024, 12, 1)), "Minggu, 1 Desember 2024");
  }

  #[test]
  fn unparseable_text_is_passed_through() {
    assert_eq!(short_or_raw("1978-01-12"), "12/01/1978");
    assert_eq!(short_or_raw("12 Jan 78"), "12 Jan 78");
    assert_eq!(long_or_raw("1978-01-12"), "Kamis, 12 Januari 1978");
    assert_eq!(long_or_raw("12 Jan 78"), "12 Jan 78");
  }
}
