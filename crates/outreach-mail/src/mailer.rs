//! [`Mailer`] dispatches each envelope to the channel its mode names.

use outreach_core::mail::{DeliveryMode, Envelope, MailTransport};

use crate::{Error, GmailClient, Result, SmtpRelay, message::build_message};

#[derive(Clone)]
pub struct Mailer {
  smtp:  Option<SmtpRelay>,
  gmail: GmailClient,
}

impl Mailer {
  /// `smtp` is optional; without it every SMTP-mode delivery fails with
  /// [`Error::SmtpNotConfigured`].
  pub fn new(smtp: Option<SmtpRelay>, gmail: GmailClient) -> Self { Self { smtp, gmail } }
}

impl MailTransport for Mailer {
  type Error = Error;

  async fn deliver(&self, mode: DeliveryMode, envelope: Envelope<'_>) -> Result<()> {
    match mode {
      DeliveryMode::Smtp => {
        let relay = self.smtp.as_ref().ok_or(Error::SmtpNotConfigured)?;
        let message = build_message(&envelope)?;
        relay.send(envelope.sender, message).await
      }
      DeliveryMode::OAuth => {
        let token = envelope
          .access_token
          .filter(|t| !t.is_empty())
          .ok_or(Error::MissingAccessToken)?;
        let message = build_message(&envelope)?;
        self.gmail.send(token, &message).await.map(|_| ())
      }
    }
  }
}
