//! The `SearchProvider` seam and the paginated fetch-extract-dedup loop.
//!
//! [`ContactSearch`] owns a provider handle and the paging limits. One call to
//! [`ContactSearch::search`] builds the query, pages through the provider,
//! extracts identifiers from every result item and accumulates them into a
//! [`ContactSet`] until the cap is reached or the provider runs dry.

use std::{future::Future, sync::Arc};

use serde::{Deserialize, Serialize};

use crate::{contact_set::ContactSet, filter::SearchFilter, query::build_query};

// ─── Provider types ──────────────────────────────────────────────────────────

/// One entry of a search response page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultItem {
  #[serde(default)]
  pub title:   String,
  #[serde(default)]
  pub snippet: String,
  #[serde(default)]
  pub link:    String,
}

impl ResultItem {
  /// The text block extraction runs over: title, snippet and link, one per
  /// line.
  pub fn text_block(&self) -> String {
    format!("{}\n{}\n{}", self.title, self.snippet, self.link)
  }
}

/// One batch of results at a given offset.
#[derive(Debug, Clone, Default)]
pub struct SearchPage {
  pub items: Vec<ResultItem>,
}

/// Abstraction over an external web-search backend.
///
/// Implementations issue exactly one upstream request per call and fail with
/// their own error type when the upstream answers with a non-success status.
pub trait SearchProvider: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Fetch up to `page_size` results for `query`, starting at offset `start`.
  fn fetch_page<'a>(
    &'a self,
    query: &'a str,
    start: usize,
    page_size: usize,
  ) -> impl Future<Output = Result<SearchPage, Self::Error>> + Send + 'a;
}

impl<P: SearchProvider> SearchProvider for Arc<P> {
  type Error = P::Error;

  fn fetch_page<'a>(
    &'a self,
    query: &'a str,
    start: usize,
    page_size: usize,
  ) -> impl Future<Output = Result<SearchPage, Self::Error>> + Send + 'a {
    (**self).fetch_page(query, start, page_size)
  }
}

// ─── Limits ──────────────────────────────────────────────────────────────────

/// Paging limits for one search request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchLimits {
  /// Maximum number of distinct identifiers returned.
  pub cap:        usize,
  /// Offsets at or beyond this value are never requested.
  pub page_limit: usize,
  /// Items requested per page; also the offset increment.
  pub page_size:  usize,
}

impl Default for SearchLimits {
  fn default() -> Self {
    Self {
      cap:        7,
      page_limit: 30,
      page_size:  5,
    }
  }
}

// ─── Orchestration ───────────────────────────────────────────────────────────

/// Runs contact searches against a [`SearchProvider`].
#[derive(Debug, Clone)]
pub struct ContactSearch<P> {
  provider: P,
  limits:   SearchLimits,
}

impl<P: SearchProvider> ContactSearch<P> {
  pub fn new(provider: P, limits: SearchLimits) -> Self {
    Self { provider, limits }
  }

  pub fn provider(&self) -> &P { &self.provider }

  /// Page through the provider and collect at most `cap` distinct
  /// identifiers matching `filter.contact_kind`.
  ///
  /// A provider error aborts the search; identifiers gathered from earlier
  /// pages are discarded.
  pub async fn search(&self, filter: &SearchFilter) -> Result<Vec<String>, P::Error> {
    let query = build_query(filter);
    let SearchLimits { cap, page_limit, page_size } = self.limits;
    let mut contacts = ContactSet::new(cap);
    let mut start = 0;

    tracing::debug!(%query, cap, page_limit, page_size, "starting contact search");

    // A zero page size would never advance the offset.
    if page_size == 0 {
      return Ok(contacts.into_vec());
    }

    while !contacts.is_full() && start < page_limit {
      let page = self.provider.fetch_page(&query, start, page_size).await?;
      if page.items.is_empty() {
        tracing::debug!(start, "search provider exhausted");
        break;
      }

      'items: for item in &page.items {
        for contact in filter.contact_kind.extract(&item.text_block()) {
          contacts.insert(contact);
          if contacts.is_full() {
            break 'items;
          }
        }
      }

      tracing::debug!(start, items = page.items.len(), found = contacts.len(), "page processed");
      start += page_size;
    }

    Ok(contacts.into_vec())
  }
}
