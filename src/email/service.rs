use async_trait::async_trait;
use chrono::Utc;
use lettre::{
  message::header::ContentType, transport::smtp::authentication::Credentials, AsyncSmtpTransport, AsyncTransport,
  Message, Tokio1Executor,
};

use crate::domains::relay::model::ContactFormRequest;
use crate::email::template::TemplateRenderer;
use crate::email::types::{EmailError, SmtpConfig};

const PRODUCT_NAME: &str = "EchoMail";

/// Port for handing composed messages to the upstream relay.
#[async_trait]
pub trait Mailer: Send + Sync {
  /// Sends one plaintext message from the configured relay identity.
  async fn send_raw(&self, to: &str, subject: &str, body: &str) -> Result<(), EmailError>;

  /// Renders a contact submission and sends it as HTML to `destination`.
  ///
  /// The From header is taken from the submission as supplied by the caller,
  /// without verification. That spoofing surface is part of the endpoint's
  /// contract; do not add verification here.
  async fn send_contact_form(&self, submission: &ContactFormRequest, destination: &str) -> Result<(), EmailError>;
}

pub struct EmailService {
  smtp_config: SmtpConfig,
  renderer: TemplateRenderer,
}

impl EmailService {
  pub fn new(smtp_config: SmtpConfig, renderer: TemplateRenderer) -> Self {
    EmailService { smtp_config, renderer }
  }

  // One fresh session per send, no pooling. Throughput is bounded by relay
  // handshake latency, acceptable for a low-volume relay.
  fn transport(&self) -> Result<AsyncSmtpTransport<Tokio1Executor>, EmailError> {
    let creds = Credentials::new(self.smtp_config.username.clone(), self.smtp_config.password.clone());

    let transport = if self.smtp_config.host == "localhost" || self.smtp_config.host == "mailhog" {
      AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&self.smtp_config.host)
        .credentials(creds)
        .port(self.smtp_config.port)
        .build()
    } else {
      AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&self.smtp_config.host)?
        .credentials(creds)
        .port(self.smtp_config.port)
        .build()
    };

    Ok(transport)
  }
}

#[async_trait]
impl Mailer for EmailService {
  async fn send_raw(&self, to: &str, subject: &str, body: &str) -> Result<(), EmailError> {
    let email = Message::builder()
      .from(self.smtp_config.from_email.parse()?)
      .to(to.parse()?)
      .subject(subject)
      .header(ContentType::TEXT_PLAIN)
      .body(body.to_string())?;

    self.transport()?.send(email).await?;

    Ok(())
  }

  async fn send_contact_form(&self, submission: &ContactFormRequest, destination: &str) -> Result<(), EmailError> {
    let subject = format!("Message from {} via {}", submission.name, PRODUCT_NAME);
    let body = self.renderer.render(submission, Utc::now()).await?;

    let email = Message::builder()
      .from(submission.email.parse()?)
      .to(destination.parse()?)
      .subject(subject)
      .header(ContentType::TEXT_HTML)
      .body(body)?;

    self.transport()?.send(email).await?;

    Ok(())
  }
}
