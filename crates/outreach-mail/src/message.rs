//! RFC 5322 message assembly.

use lettre::{
  Message,
  message::{Attachment as MimeAttachment, Mailbox, MultiPart, SinglePart, header::ContentType},
};
use outreach_core::mail::Envelope;

use crate::{Error, Result};

const DEFAULT_ATTACHMENT_TYPE: &str = "application/octet-stream";

/// Build the `multipart/mixed` message for one recipient: a `text/plain` body
/// part and, if present, one attachment part.
pub fn build_message(envelope: &Envelope<'_>) -> Result<Message> {
  let from: Mailbox = envelope.sender.parse()?;
  let to: Mailbox = envelope.recipient.parse()?;

  let mut parts = MultiPart::mixed().singlepart(SinglePart::plain(envelope.body.to_owned()));

  if let Some(attachment) = envelope.attachment {
    let content_type = attachment
      .content_type
      .as_deref()
      .filter(|ct| !ct.trim().is_empty())
      .unwrap_or(DEFAULT_ATTACHMENT_TYPE);
    let content_type =
      ContentType::parse(content_type).map_err(|e| Error::ContentType(e.to_string()))?;
    parts = parts.singlepart(
      MimeAttachment::new(attachment.filename.clone()).body(attachment.content.clone(), content_type),
    );
  }

  let message = Message::builder()
    .from(from)
    .to(to)
    .subject(envelope.subject)
    .multipart(parts)?;
  Ok(message)
}
