use anyhow::{anyhow, ensure};
use lettre::{message::header, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use otp_mailer_email_contracts::{Email, EmailService};
use otp_mailer_utils::trace_instrument;

#[derive(Debug, Clone)]
pub struct SmtpEmailService {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpEmailService {
    /// Creates a transport from an `smtp://` or `smtps://` url.
    ///
    /// No connection is opened until the first message is sent or
    /// [`EmailService::ping`] is called.
    pub fn new(url: &str) -> anyhow::Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::from_url(url)?.build();

        Ok(Self { transport })
    }
}

impl EmailService for SmtpEmailService {
    #[trace_instrument(skip(self, email), fields(recipient = %email.recipient))]
    async fn send(&self, email: Email) -> anyhow::Result<()> {
        let message = Message::builder()
            .from(email.sender.parse()?)
            .to(email.recipient.parse()?)
            .subject(email.subject)
            .header(header::ContentType::TEXT_PLAIN)
            .body(email.body)?;

        let response = self.transport.send(message).await?;
        ensure!(
            response.is_positive(),
            "smtp server did not accept the message ({})",
            response.code()
        );

        Ok(())
    }

    #[trace_instrument(skip(self))]
    async fn ping(&self) -> anyhow::Result<()> {
        self.transport
            .test_connection()
            .await?
            .then_some(())
            .ok_or_else(|| anyhow!("Failed to ping smtp server"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_url() {
        assert!(SmtpEmailService::new("not a url").is_err());
    }

    #[tokio::test]
    async fn invalid_sender_is_rejected_before_connecting() {
        // nothing listens on the discard port, so a connection attempt would
        // produce a different error
        let sut = SmtpEmailService::new("smtp://127.0.0.1:9").unwrap();

        let result = sut
            .send(Email {
                recipient: "bad".into(),
                sender: "bad".into(),
                subject: "Your OTP Code".into(),
                body: "Your OTP code is: 000000".into(),
            })
            .await;

        let err = result.unwrap_err();
        assert!(err.downcast_ref::<lettre::address::AddressError>().is_some());
    }
}
