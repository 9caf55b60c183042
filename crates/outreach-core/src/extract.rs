//! Contact extraction from free text.
//!
//! Output keeps the order in which identifiers appear and may contain
//! duplicates; deduplication belongs to [`ContactSet`](crate::contact_set::ContactSet).

use std::sync::LazyLock;

use regex::Regex;

use crate::filter::ContactKind;

static GMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"[a-zA-Z0-9._%+-]+@gmail\.com").expect("gmail pattern compiles")
});

// Maximal digit runs. A run only qualifies when it is exactly ten digits
// long, so a ten-digit prefix of a longer number never matches.
static DIGIT_RUN: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"\d+").expect("digit pattern compiles"));

const MOBILE_DIGITS: usize = 10;

impl ContactKind {
  /// Return every identifier of this kind found in `text`.
  pub fn extract(self, text: &str) -> Vec<String> {
    match self {
      ContactKind::Gmail => GMAIL_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_owned())
        .collect(),
      ContactKind::Mobile => DIGIT_RUN
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|run| run.chars().count() == MOBILE_DIGITS)
        .map(str::to_owned)
        .collect(),
      ContactKind::Unsupported => Vec::new(),
    }
  }
}

/// Extract identifiers of the (case-insensitive) `contact_type` from `text`.
///
/// Unknown contact types yield an empty vector rather than an error.
pub fn extract(text: &str, contact_type: &str) -> Vec<String> {
  ContactKind::parse(contact_type).extract(text)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn gmail_addresses_in_order() {
    assert_eq!(
      extract("a@gmail.com b@gmail.com", "gmail"),
      vec!["a@gmail.com", "b@gmail.com"]
    );
  }

  #[test]
  fn gmail_keeps_case_and_duplicates() {
    let text = "Reach me: John.Doe+jobs@gmail.com or john.doe@gmail.com, \
                again John.Doe+jobs@gmail.com";
    assert_eq!(
      extract(text, "GMAIL"),
      vec![
        "John.Doe+jobs@gmail.com",
        "john.doe@gmail.com",
        "John.Doe+jobs@gmail.com",
      ]
    );
  }

  #[test]
  fn gmail_ignores_other_domains() {
    assert!(extract("x@yahoo.com y@gmail.co", "gmail").is_empty());
  }

  #[test]
  fn mobile_exact_ten_digits() {
    assert_eq!(extract("call 9876543210 now", "mobile"), vec!["9876543210"]);
  }

  #[test]
  fn mobile_eleven_digits_do_not_match() {
    assert!(extract("12345678901", "mobile").is_empty());
  }

  #[test]
  fn mobile_nine_digits_do_not_match() {
    assert!(extract("phone: 987654321", "mobile").is_empty());
  }

  #[test]
  fn mobile_punctuation_is_a_boundary() {
    assert_eq!(
      extract("(9876543210)-12 / 9123456780.", "mobile"),
      vec!["9876543210", "9123456780"]
    );
  }

  #[test]
  fn unknown_type_yields_nothing() {
    assert!(extract("a@gmail.com 9876543210", "unknown").is_empty());
  }

  #[test]
  fn empty_text_yields_nothing() {
    assert!(extract("", "gmail").is_empty());
    assert!(extract("", "mobile").is_empty());
  }

  #[test]
  fn extraction_is_repeatable() {
    let text = "a@gmail.com 9876543210 b@gmail.com";
    assert_eq!(extract(text, "gmail"), extract(text, "gmail"));
    assert_eq!(extract(text, "mobile"), extract(text, "mobile"));
  }

  #[test]
  fn padded_contact_type_extracts_nothing() {
    assert!(extract("a@gmail.com", " gmail").is_empty());
    assert!(extract("9876543210", "mobile\n").is_empty());
  }
}
