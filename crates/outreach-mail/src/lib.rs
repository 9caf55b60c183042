//! Outbound mail for the outreach service.
//!
//! [`Mailer`] implements [`MailTransport`](outreach_core::mail::MailTransport)
//! over two channels:
//!
//! | Mode | Channel |
//! |------|---------|
//! | `Smtp`  | implicit-TLS SMTP relay via `lettre`, server-side password |
//! | `OAuth` | Gmail REST `users.messages.send`, caller-supplied bearer token |
//!
//! Both channels share the same RFC 5322 message built by
//! [`message::build_message`].

mod gmail;
mod mailer;
mod smtp;

pub mod error;
pub mod message;

pub use error::{Error, Result};
pub use gmail::{GmailClient, GmailConfig};
pub use mailer::Mailer;
pub use smtp::{SmtpConfig, SmtpRelay};
