//! Search filter: the caller-supplied criteria for one contact search.
//!
//! Both enums parse leniently: unknown platforms fall back to LinkedIn and
//! unknown contact types become [`ContactKind::Unsupported`], which matches
//! nothing. Matching ignores case but not surrounding whitespace. Parsing
//! never fails.

// ─── Profile platform ────────────────────────────────────────────────────────

/// The social platform whose pages the search is scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Profile {
  #[default]
  LinkedIn,
  Instagram,
  YouTube,
}

impl Profile {
  /// Case-insensitive; anything unrecognised resolves to LinkedIn.
  pub fn parse(s: &str) -> Self {
    match s.to_lowercase().as_str() {
      "instagram" => Profile::Instagram,
      "youtube" => Profile::YouTube,
      _ => Profile::LinkedIn,
    }
  }

  /// Host used in the `site:` operator.
  pub fn host(self) -> &'static str {
    match self {
      Profile::LinkedIn => "linkedin.com",
      Profile::Instagram => "instagram.com",
      Profile::YouTube => "youtube.com",
    }
  }
}

// ─── Contact kind ────────────────────────────────────────────────────────────

/// Which kind of contact identifier to look for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
  Gmail,
  Mobile,
  /// Any other requested type. Extraction yields nothing and the query is
  /// left unnarrowed.
  Unsupported,
}

impl ContactKind {
  pub fn parse(s: &str) -> Self {
    match s.to_lowercase().as_str() {
      "gmail" => ContactKind::Gmail,
      "mobile" => ContactKind::Mobile,
      _ => ContactKind::Unsupported,
    }
  }
}

// ─── Filter ──────────────────────────────────────────────────────────────────

/// Immutable per-request search criteria.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFilter {
  pub role:         String,
  pub country:      String,
  pub profile:      Profile,
  pub contact_kind: ContactKind,
}

impl SearchFilter {
  /// Build a filter from the raw strings a client sends.
  pub fn new(
    role: impl Into<String>,
    country: impl Into<String>,
    profile: &str,
    contact_type: &str,
  ) -> Self {
    Self {
      role:         role.into(),
      country:      country.into(),
      profile:      Profile::parse(profile),
      contact_kind: ContactKind::parse(contact_type),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn profile_parse_is_case_insensitive() {
    assert_eq!(Profile::parse("LinkedIn"), Profile::LinkedIn);
    assert_eq!(Profile::parse("INSTAGRAM"), Profile::Instagram);
    assert_eq!(Profile::parse("YouTube"), Profile::YouTube);
  }

  #[test]
  fn unknown_profile_defaults_to_linkedin() {
    assert_eq!(Profile::parse("unknown-platform"), Profile::LinkedIn);
    assert_eq!(Profile::parse(""), Profile::LinkedIn);
    assert_eq!(Profile::parse("other").host(), "linkedin.com");
  }

  #[test]
  fn contact_kind_parse() {
    assert_eq!(ContactKind::parse("Gmail"), ContactKind::Gmail);
    assert_eq!(ContactKind::parse("MOBILE"), ContactKind::Mobile);
    assert_eq!(ContactKind::parse("fax"), ContactKind::Unsupported);
  }

  #[test]
  fn padded_values_are_not_recognised() {
    assert_eq!(ContactKind::parse(" gmail"), ContactKind::Unsupported);
    assert_eq!(ContactKind::parse("mobile\n"), ContactKind::Unsupported);
    assert_eq!(Profile::parse(" youtube"), Profile::LinkedIn);
    assert_eq!(Profile::parse("instagram "), Profile::LinkedIn);
  }
}
