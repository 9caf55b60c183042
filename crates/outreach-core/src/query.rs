//! Site-scoped search query construction.

use crate::filter::{ContactKind, SearchFilter};

const GMAIL_CLAUSE: &str = r#"("@gmail.com" OR "gmail.com")"#;
const MOBILE_CLAUSE: &str = r#"("contact number" OR "phone" OR "mobile")"#;

/// Build the query string sent to the search provider.
///
/// Shape: `site:<host> "<role>" "<country>"`, followed by a disjunctive
/// narrowing clause for the `gmail` and `mobile` contact kinds.
pub fn build_query(filter: &SearchFilter) -> String {
  let mut query = format!(
    r#"site:{} "{}" "{}""#,
    filter.profile.host(),
    filter.role,
    filter.country
  );

  match filter.contact_kind {
    ContactKind::Gmail => {
      query.push(' ');
      query.push_str(GMAIL_CLAUSE);
    }
    ContactKind::Mobile => {
      query.push(' ');
      query.push_str(MOBILE_CLAUSE);
    }
    ContactKind::Unsupported => {}
  }

  query
}
