//! Core types and trait definitions for the outreach service.
//!
//! This crate is deliberately free of HTTP, SMTP and database dependencies.
//! It owns the contact-search pipeline (query building, extraction, the
//! paginated dedup loop) and the seams the outer crates implement:
//! [`search::SearchProvider`], [`mail::MailTransport`] and
//! [`sender::SenderStore`].

pub mod contact_set;
pub mod error;
pub mod extract;
pub mod filter;
pub mod mail;
pub mod query;
pub mod search;
pub mod sender;
pub mod template;

pub use error::{Error, Result};
