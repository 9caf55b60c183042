//! Bulk mail: request types, the `MailTransport` seam and the send loop.
//!
//! The loop sends one message per recipient and never aborts early: a failed
//! recipient is logged and counted, and the next one is attempted.

use std::{fmt, future::Future};

use crate::{Error, Result};

// ─── Request types ───────────────────────────────────────────────────────────

/// How a message leaves the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryMode {
  /// Direct SMTP with server-side credentials.
  Smtp,
  /// Mail-provider REST API authorised by a caller-supplied bearer token.
  OAuth,
}

impl fmt::Display for DeliveryMode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      DeliveryMode::Smtp => f.write_str("smtp"),
      DeliveryMode::OAuth => f.write_str("oauth"),
    }
  }
}

/// A single file attached to every message of a bulk send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
  pub filename:     String,
  pub content_type: Option<String>,
  pub content:      Vec<u8>,
}

/// A validated bulk-send request.
#[derive(Debug, Clone)]
pub struct BulkMail {
  pub sender:       String,
  pub recipients:   Vec<String>,
  pub subject:      String,
  pub body:         String,
  pub attachment:   Option<Attachment>,
  /// Bearer token for [`DeliveryMode::OAuth`]; passed through unchecked.
  pub access_token: Option<String>,
}

impl BulkMail {
  /// Build a request from the raw comma-separated recipient list.
  pub fn new(
    sender: impl Into<String>,
    recipients: &str,
    subject: impl Into<String>,
    body: impl Into<String>,
  ) -> Result<Self> {
    let sender: String = sender.into();
    let sender = sender.trim().to_owned();
    if sender.is_empty() {
      return Err(Error::EmptySender);
    }
    let recipients = parse_recipients(recipients);
    if recipients.is_empty() {
      return Err(Error::NoRecipients);
    }
    Ok(Self {
      sender,
      recipients,
      subject: subject.into(),
      body: body.into(),
      attachment: None,
      access_token: None,
    })
  }

  pub fn with_attachment(mut self, attachment: Option<Attachment>) -> Self {
    self.attachment = attachment;
    self
  }

  pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
    self.access_token = Some(token.into());
    self
  }

  fn envelope<'a>(&'a self, recipient: &'a str) -> Envelope<'a> {
    Envelope {
      sender: &self.sender,
      recipient,
      subject: &self.subject,
      body: &self.body,
      attachment: self.attachment.as_ref(),
      access_token: self.access_token.as_deref(),
    }
  }
}

/// Split a comma-separated recipient list, trimming and dropping blanks.
pub fn parse_recipients(raw: &str) -> Vec<String> {
  raw
    .split(',')
    .map(str::trim)
    .filter(|s| !s.is_empty())
    .map(str::to_owned)
    .collect()
}

/// Everything a transport needs to deliver one message.
#[derive(Debug, Clone, Copy)]
pub struct Envelope<'a> {
  pub sender:       &'a str,
  pub recipient:    &'a str,
  pub subject:      &'a str,
  pub body:         &'a str,
  pub attachment:   Option<&'a Attachment>,
  pub access_token: Option<&'a str>,
}

// ─── Report ──────────────────────────────────────────────────────────────────

/// Outcome of a bulk send.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SendReport {
  pub sent:   usize,
  pub failed: usize,
}

impl SendReport {
  pub fn message(&self) -> String {
    format!("Emails sent: {}, failed: {}", self.sent, self.failed)
  }
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over the outbound mail channels.
pub trait MailTransport: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Deliver one message to `envelope.recipient` via `mode`.
  fn deliver<'a>(
    &'a self,
    mode: DeliveryMode,
    envelope: Envelope<'a>,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;
}

/// Send `mail` to each recipient in order, counting successes and failures.
pub async fn send_bulk<T: MailTransport>(
  transport: &T,
  mode: DeliveryMode,
  mail: &BulkMail,
) -> SendReport {
  let mut report = SendReport::default();

  for recipient in &mail.recipients {
    match transport.deliver(mode, mail.envelope(recipient)).await {
      Ok(()) => {
        tracing::info!(%mode, %recipient, "email sent");
        report.sent += 1;
      }
      Err(e) => {
        tracing::warn!(%mode, %recipient, error = %e, "email failed");
        report.failed += 1;
      }
    }
  }

  report
}

#[cfg(test)]
mod tests {
  use std::sync::Mutex;

  use super::*;

  #[derive(Debug, thiserror::Error)]
  #[error("mailbox unavailable")]
  struct Rejected;

  #[derive(Default)]
  struct RecordingTransport {
    reject:    Vec<&'static str>,
    delivered: Mutex<Vec<(DeliveryMode, String, bool)>>,
  }

  impl MailTransport for RecordingTransport {
    type Error = Rejected;

    async fn deliver(&self, mode: DeliveryMode, envelope: Envelope<'_>) -> Result<(), Rejected> {
      self.delivered.lock().unwrap().push((
        mode,
        envelope.recipient.to_owned(),
        envelope.attachment.is_some(),
      ));
      if self.reject.iter().any(|r| *r == envelope.recipient) {
        Err(Rejected)
      } else {
        Ok(())
      }
    }
  }

  #[test]
  fn parse_recipients_trims_and_drops_blanks() {
    assert_eq!(
      parse_recipients(" a@gmail.com, ,b@gmail.com ,,"),
      vec!["a@gmail.com", "b@gmail.com"]
    );
  }

  #[test]
  fn bulk_mail_requires_recipients_and_sender() {
    assert!(matches!(
      BulkMail::new("me@gmail.com", " , ", "s", "b"),
      Err(Error::NoRecipients)
    ));
    assert!(matches!(
      BulkMail::new("  ", "a@gmail.com", "s", "b"),
      Err(Error::EmptySender)
    ));
  }

  #[tokio::test]
  async fn failures_are_counted_not_fatal() {
    let transport = RecordingTransport {
      reject: vec!["bad@gmail.com"],
      ..Default::default()
    };
    let mail = BulkMail::new("me@gmail.com", "a@gmail.com,bad@gmail.com,c@gmail.com", "Hi", "Body")
      .unwrap()
      .with_attachment(Some(Attachment {
        filename:     "cv.pdf".into(),
        content_type: None,
        content:      b"%PDF".to_vec(),
      }));

    let report = send_bulk(&transport, DeliveryMode::Smtp, &mail).await;
    assert_eq!(report, SendReport { sent: 2, failed: 1 });
    assert_eq!(report.message(), "Emails sent: 2, failed: 1");

    let delivered = transport.delivered.lock().unwrap();
    let order: Vec<&str> = delivered.iter().map(|(_, r, _)| r.as_str()).collect();
    assert_eq!(order, ["a@gmail.com", "bad@gmail.com", "c@gmail.com"]);
    assert!(delivered.iter().all(|(m, _, attached)| *m == DeliveryMode::Smtp && *attached));
  }
}
