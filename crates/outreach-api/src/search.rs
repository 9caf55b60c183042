//! Handler for `POST /search`.
//!
//! Body: `{"role", "country", "profile", "contact_type"}`; all four are plain
//! strings and unknown `profile`/`contact_type` values are accepted.

use axum::{
  Json,
  extract::{State, rejection::JsonRejection},
};
use outreach_core::{
  filter::SearchFilter, mail::MailTransport, search::SearchProvider, sender::SenderStore,
};
use serde::{Deserialize, Serialize};

use crate::{AppState, error::ApiError};

#[derive(Debug, Deserialize)]
pub struct SearchBody {
  pub role:         String,
  pub country:      String,
  pub profile:      String,
  pub contact_type: String,
}

impl From<&SearchBody> for SearchFilter {
  fn from(b: &SearchBody) -> Self {
    SearchFilter::new(b.role.clone(), b.country.clone(), &b.profile, &b.contact_type)
  }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponse {
  pub contacts: Vec<String>,
}

/// `POST /search`: returns at most `cap` distinct identifiers.
pub async fn handler<P, M, S>(
  State(state): State<AppState<P, M, S>>,
  payload: Result<Json<SearchBody>, JsonRejection>,
) -> Result<Json<SearchResponse>, ApiError>
where
  P: SearchProvider,
  M: MailTransport,
  S: SenderStore,
{
  let Json(body) = payload?;
  let filter = SearchFilter::from(&body);
  let contacts = state
    .search
    .search(&filter)
    .await
    .map_err(|e| ApiError::SearchProvider(Box::new(e)))?;

  tracing::info!(count = contacts.len(), ?contacts, "extracted contacts");
  Ok(Json(SearchResponse { contacts }))
}
