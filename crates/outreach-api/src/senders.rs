//! Handler for `GET /senders`.

use axum::{Json, extract::State};
use outreach_core::{
  mail::MailTransport,
  search::SearchProvider,
  sender::{SenderRecord, SenderStore},
};

use crate::{AppState, error::ApiError};

/// `GET /senders`: every recorded sender address, oldest first.
pub async fn list<P, M, S>(
  State(state): State<AppState<P, M, S>>,
) -> Result<Json<Vec<SenderRecord>>, ApiError>
where
  P: SearchProvider,
  M: MailTransport,
  S: SenderStore,
{
  let senders = state
    .senders
    .list_senders()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(senders))
}
