//! JSON REST API for the outreach service.
//!
//! Exposes an axum [`Router`] generic over the three seams defined in
//! `outreach-core`: a [`SearchProvider`], a [`MailTransport`] and a
//! [`SenderStore`]. CORS, TLS and body limits are the caller's
//! responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", outreach_api::api_router(state))
//! ```

pub mod error;
pub mod search;
pub mod send;
pub mod senders;
pub mod templates;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use outreach_core::{
  mail::MailTransport,
  search::{ContactSearch, SearchProvider},
  sender::SenderStore,
};

pub use error::ApiError;

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all handlers.
pub struct AppState<P, M, S> {
  pub search:  Arc<ContactSearch<P>>,
  pub mailer:  Arc<M>,
  pub senders: Arc<S>,
}

impl<P, M, S> AppState<P, M, S> {
  pub fn new(search: ContactSearch<P>, mailer: M, senders: S) -> Self {
    Self {
      search:  Arc::new(search),
      mailer:  Arc::new(mailer),
      senders: Arc::new(senders),
    }
  }
}

impl<P, M, S> Clone for AppState<P, M, S> {
  fn clone(&self) -> Self {
    Self {
      search:  Arc::clone(&self.search),
      mailer:  Arc::clone(&self.mailer),
      senders: Arc::clone(&self.senders),
    }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build a fully-materialised API router for `state`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<P, M, S>(state: AppState<P, M, S>) -> Router<()>
where
  P: SearchProvider + 'static,
  M: MailTransport + 'static,
  S: SenderStore + 'static,
{
  Router::new()
    .route("/search", post(search::handler::<P, M, S>))
    .route("/templates", get(templates::handler).post(templates::handler))
    .route("/send_email_with_attachment", post(send::smtp::<P, M, S>))
    .route("/send_email_with_attachment_oauth", post(send::oauth::<P, M, S>))
    .route("/senders", get(senders::list::<P, M, S>))
    .with_state(state)
}
