//! Handlers for the bulk-send endpoints.
//!
//! | Method | Path | Mode |
//! |--------|------|------|
//! | `POST` | `/send_email_with_attachment` | SMTP |
//! | `POST` | `/send_email_with_attachment_oauth` | OAuth; requires `gmail_token` |
//!
//! Both take `multipart/form-data` with the text fields `emails`
//! (comma-separated), `subject`, `body`, `sender_email` and an optional file
//! field `attachment`. Both answer `{"message", "sent", "failed"}`.

use axum::{
  Json,
  extract::{Multipart, State},
};
use outreach_core::{
  Error as CoreError,
  mail::{Attachment, BulkMail, DeliveryMode, MailTransport, SendReport, send_bulk},
  search::SearchProvider,
  sender::SenderStore,
};
use serde::{Deserialize, Serialize};

use crate::{AppState, error::ApiError};

#[derive(Debug, Serialize, Deserialize)]
pub struct SendResponse {
  pub message: String,
  pub sent:    usize,
  pub failed:  usize,
}

impl From<SendReport> for SendResponse {
  fn from(r: SendReport) -> Self {
    SendResponse {
      message: r.message(),
      sent:    r.sent,
      failed:  r.failed,
    }
  }
}

// ─── Form parsing ────────────────────────────────────────────────────────────

#[derive(Debug, Default)]
struct SendForm {
  emails:       Option<String>,
  subject:      Option<String>,
  body:         Option<String>,
  sender_email: Option<String>,
  gmail_token:  Option<String>,
  attachment:   Option<Attachment>,
}

fn bad_multipart(e: impl std::fmt::Display) -> ApiError {
  ApiError::BadRequest(format!("malformed multipart body: {e}"))
}

async fn read_form(mut multipart: Multipart) -> Result<SendForm, ApiError> {
  let mut form = SendForm::default();

  while let Some(field) = multipart.next_field().await.map_err(bad_multipart)? {
    let name = field.name().unwrap_or_default().to_owned();
    match name.as_str() {
      "attachment" => {
        let filename = field.file_name().unwrap_or_default().to_owned();
        let content_type = field.content_type().map(str::to_owned);
        let content = field.bytes().await.map_err(bad_multipart)?.to_vec();
        // Browsers submit an empty part when no file was chosen.
        if !filename.is_empty() || !content.is_empty() {
          form.attachment = Some(Attachment {
            filename: if filename.is_empty() { "attachment".to_owned() } else { filename },
            content_type,
            content,
          });
        }
      }
      "emails" => form.emails = Some(field.text().await.map_err(bad_multipart)?),
      "subject" => form.subject = Some(field.text().await.map_err(bad_multipart)?),
      "body" => form.body = Some(field.text().await.map_err(bad_multipart)?),
      "sender_email" => form.sender_email = Some(field.text().await.map_err(bad_multipart)?),
      "gmail_token" => form.gmail_token = Some(field.text().await.map_err(bad_multipart)?),
      other => tracing::debug!(field = other, "ignoring unknown form field"),
    }
  }

  Ok(form)
}

impl SendForm {
  fn into_bulk_mail(self, mode: DeliveryMode) -> Result<BulkMail, ApiError> {
    let emails = self.emails.ok_or(CoreError::MissingField("emails"))?;
    let subject = self.subject.ok_or(CoreError::MissingField("subject"))?;
    let body = self.body.ok_or(CoreError::MissingField("body"))?;
    let sender = self.sender_email.ok_or(CoreError::MissingField("sender_email"))?;

    let mut mail = BulkMail::new(sender, &emails, subject, body)?.with_attachment(self.attachment);
    if mode == DeliveryMode::OAuth {
      let token = self.gmail_token.ok_or(CoreError::MissingField("gmail_token"))?;
      mail = mail.with_access_token(token);
    }
    Ok(mail)
  }
}

// ─── Handlers ────────────────────────────────────────────────────────────────

async fn send<P, M, S>(
  state: AppState<P, M, S>,
  mode: DeliveryMode,
  multipart: Multipart,
) -> Result<Json<SendResponse>, ApiError>
where
  P: SearchProvider,
  M: MailTransport,
  S: SenderStore,
{
  let mail = read_form(multipart).await?.into_bulk_mail(mode)?;
  let report = send_bulk(state.mailer.as_ref(), mode, &mail).await;
  tracing::info!(%mode, sent = report.sent, failed = report.failed, "bulk send finished");

  // Recording the sender never affects the response.
  if let Err(e) = state.senders.record_sender(&mail.sender).await {
    tracing::warn!(sender = %mail.sender, error = %e, "failed to record sender");
  }

  Ok(Json(report.into()))
}

/// `POST /send_email_with_attachment`
pub async fn smtp<P, M, S>(
  State(state): State<AppState<P, M, S>>,
  multipart: Multipart,
) -> Result<Json<SendResponse>, ApiError>
where
  P: SearchProvider,
  M: MailTransport,
  S: SenderStore,
{
  send(state, DeliveryMode::Smtp, multipart).await
}

/// `POST /send_email_with_attachment_oauth`
pub async fn oauth<P, M, S>(
  State(state): State<AppState<P, M, S>>,
  multipart: Multipart,
) -> Result<Json<SendResponse>, ApiError>
where
  P: SearchProvider,
  M: MailTransport,
  S: SenderStore,
{
  send(state, DeliveryMode::OAuth, multipart).await
}
