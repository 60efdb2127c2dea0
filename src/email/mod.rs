//! Outbound email dispatch.
//!
//! Message construction and SMTP handoff are built on lettre; the relay
//! orchestration layer only sees the [`Mailer`] port so tests can swap in a
//! recording mock.

mod service;
mod template;
mod types;

pub use service::{EmailService, Mailer};
pub use template::TemplateRenderer;
pub use types::{EmailError, SmtpConfig};
