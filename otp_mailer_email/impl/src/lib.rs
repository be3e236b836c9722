//! Email providers backing [`EmailService`].
//!
//! The provider is picked once at startup; [`EmailServiceImpl`] forwards every
//! call to whichever one was configured.

use otp_mailer_email_contracts::{Email, EmailService};

pub use crate::{
    sendgrid::{SendgridEmailService, SendgridEmailServiceConfig},
    smtp::SmtpEmailService,
};

mod http;
pub mod sendgrid;
pub mod smtp;

#[derive(Debug, Clone)]
pub enum EmailServiceImpl {
    Sendgrid(SendgridEmailService),
    Smtp(SmtpEmailService),
}

impl EmailServiceImpl {
    pub fn provider_name(&self) -> &'static str {
        match self {
            Self::Sendgrid(_) => "sendgrid",
            Self::Smtp(_) => "smtp",
        }
    }
}

impl From<SendgridEmailService> for EmailServiceImpl {
    fn from(value: SendgridEmailService) -> Self {
        Self::Sendgrid(value)
    }
}

impl From<SmtpEmailService> for EmailServiceImpl {
    fn from(value: SmtpEmailService) -> Self {
        Self::Smtp(value)
    }
}

impl EmailService for EmailServiceImpl {
    async fn send(&self, email: Email) -> anyhow::Result<()> {
        match self {
            Self::Sendgrid(sendgrid) => sendgrid.send(email).await,
            Self::Smtp(smtp) => smtp.send(email).await,
        }
    }

    async fn ping(&self) -> anyhow::Result<()> {
        match self {
            Self::Sendgrid(sendgrid) => sendgrid.ping().await,
            Self::Smtp(smtp) => smtp.ping().await,
        }
    }
}
