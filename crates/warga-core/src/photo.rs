//! Photo URL resolution.
//!
//! A record's `photo_reference` is an opaque image-host id. One builder
//! serves every surface; thumbnails and full-size renditions differ only in
//! the size suffix the host understands.

use crate::record::Sex;

/// Default image-host base; overridable through server configuration.
pub const DEFAULT_IMAGE_BASE: &str = "https://lh3.googleusercontent.com/d";

/// Placeholder assets for records without a photo reference.
pub const MALE_PLACEHOLDER: &str = "assets/male-placeholder.jpg";
pub const FEMALE_PLACEHOLDER: &str = "assets/female-placeholder.jpg";

/// The rendition a client asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoSize {
  /// 100 px, centre-cropped. List rows and member chips.
  Thumbnail,
  /// Capped at 800 px wide. Detail panes.
  Full,
}

impl PhotoSize {
  fn suffix(self) -> &'static str {
    match self {
      Self::Thumbnail => "=s100-c",
      Self::Full => "=w800",
    }
  }
}

/// Resolve a photo reference to a fetchable URL.
///
/// A reference that is already an absolute `http(s)` URL passes through
/// untouched. A missing or empty reference resolves to a deterministic
/// sex-keyed placeholder.
pub fn photo_url(
  base: &str,
  reference: Option<&str>,
  sex: Sex,
  size: PhotoSize,
) -> String {
  match reference {
    None | Some("") => placeholder(sex).to_string(),
    Some(r) if r.starts_with("http") => r.to_string(),
    Some(r) => format!("{}/{r}{}", base.trim_end_matches('/'), size.suffix()),
  }
}

fn placeholder(sex: Sex) -> &'static str {
  match sex {
    Sex::Male => MALE_PLACEHOLDER,
    Sex::Female => FEMALE_PLACEHOLDER,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn missing_reference_falls_back_to_sex_keyed_placeholder() {
    assert_eq!(
      photo_url(DEFAULT_IMAGE_BASE, None, Sex::Male, PhotoSize::Thumbnail),
      MALE_PLACEHOLDER
    );
    assert_eq!(
      photo_url(DEFAULT_IMAGE_BASE, Some(""), Sex::Female, PhotoSize::Full),
      FEMALE_PLACEHOLDER
    );
  }

  #[test]
  fn absolute_urls_pass_through() {
    let url = "https://example.com/foto.jpg";
    assert_eq!(
      photo_url(DEFAULT_IMAGE_BASE, Some(url), Sex::Male, PhotoSize::Full),
      url
    );
  }

  #[test]
  fn references_get_the_size_suffix() {
    assert_eq!(
      photo_url(DEFAULT_IMAGE_BASE, Some("abc123"), Sex::Male, PhotoSize::Thumbnail),
      "https://lh3.googleusercontent.com/d/abc123=s100-c"
    );
    assert_eq!(
      photo_url(DEFAULT_IMAGE_BASE, Some("abc123"), Sex::Male, PhotoSize::Full),
      "https://lh3.googleusercontent.com/d/abc123=w800"
    );
  }

  #[test]
  fn trailing_slash_on_the_base_is_tolerated() {
    assert_eq!(
      photo_url("https://img.test/", Some("x"), Sex::Female, PhotoSize::Full),
      "https://img.test/x=w800"
    );
  }
}
