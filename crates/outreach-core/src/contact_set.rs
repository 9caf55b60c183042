//! Bounded, insertion-ordered, duplicate-free collection of identifiers.

use std::collections::HashSet;

/// Accumulates contact identifiers for a single search request.
///
/// Never holds more than `cap` entries and never holds two equal strings.
#[derive(Debug, Clone)]
pub struct ContactSet {
  cap:   usize,
  seen:  HashSet<String>,
  items: Vec<String>,
}

impl ContactSet {
  pub fn new(cap: usize) -> Self {
    Self {
      cap,
      seen: HashSet::new(),
      items: Vec::new(),
    }
  }

  /// Insert `contact` if it is new and the set still has room.
  ///
  /// Returns `true` if the contact was added.
  pub fn insert(&mut self, contact: String) -> bool {
    if self.is_full() || self.seen.contains(&contact) {
      return false;
    }
    self.seen.insert(contact.clone());
    self.items.push(contact);
    true
  }

  pub fn is_full(&self) -> bool { self.items.len() >= self.cap }

  pub fn len(&self) -> usize { self.items.len() }

  pub fn is_empty(&self) -> bool { self.items.is_empty() }

  pub fn as_slice(&self) -> &[String] { &self.items }

  pub fn into_vec(self) -> Vec<String> { self.items }
}
