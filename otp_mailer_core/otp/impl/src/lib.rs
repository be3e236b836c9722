use otp_mailer_core_otp_contracts::OtpEmailService;
use otp_mailer_email_contracts::{Email, EmailService};
use otp_mailer_models::otp::{OtpEmailRequest, OtpEmailResult};
use otp_mailer_utils::trace_instrument;
use tracing::{info, warn};

pub const OTP_EMAIL_SUBJECT: &str = "Your OTP Code";

#[derive(Debug, Clone)]
pub struct OtpEmailServiceImpl<Email> {
    email: Email,
}

impl<EmailS> OtpEmailServiceImpl<EmailS> {
    pub fn new(email: EmailS) -> Self {
        Self { email }
    }
}

impl<EmailS> OtpEmailService for OtpEmailServiceImpl<EmailS>
where
    EmailS: EmailService,
{
    #[trace_instrument(skip(self))]
    async fn send_otp_email(&self, request: OtpEmailRequest) -> OtpEmailResult {
        // The sender has to be authorized with the provider, which an
        // arbitrary user address usually is not.
        let email = Email {
            recipient: request.email.clone(),
            sender: request.email,
            subject: OTP_EMAIL_SUBJECT.into(),
            body: otp_email_body(&request.otp),
        };

        match self.email.send(email).await {
            Ok(()) => {
                info!("otp email accepted by provider");
                OtpEmailResult::success()
            }
            Err(err) => {
                warn!("failed to send otp email: {err:#}");
                OtpEmailResult::failure(err.to_string())
            }
        }
    }
}

fn otp_email_body(otp: &str) -> String {
    format!("Your OTP code is: {otp}")
}

#[cfg(test)]
mod tests {
    use otp_mailer_email_contracts::MockEmailService;
    use pretty_assertions::assert_eq;

    use super::*;

    fn request(email: &str, otp: &str) -> OtpEmailRequest {
        OtpEmailRequest {
            email: email.into(),
            otp: otp.to_owned().into(),
        }
    }

    fn expected_email(address: &str, otp: &str) -> Email {
        Email {
            recipient: address.into(),
            sender: address.into(),
            subject: "Your OTP Code".into(),
            body: format!("Your OTP code is: {otp}"),
        }
    }

    #[tokio::test]
    async fn ok() {
        // Arrange
        let email = MockEmailService::new().with_send(expected_email("a@b.com", "123456"));
        let sut = OtpEmailServiceImpl::new(email);

        // Act
        let result = sut.send_otp_email(request("a@b.com", "123456")).await;

        // Assert
        assert_eq!(result, OtpEmailResult::success());
    }

    #[tokio::test]
    async fn provider_error() {
        // Arrange
        let email = MockEmailService::new()
            .with_send_error(expected_email("bad", "000000"), "invalid recipient");
        let sut = OtpEmailServiceImpl::new(email);

        // Act
        let result = sut.send_otp_email(request("bad", "000000")).await;

        // Assert
        assert_eq!(result, OtpEmailResult::failure("invalid recipient"));
    }

    #[tokio::test]
    async fn otp_is_not_transformed() {
        // Arrange
        let otp = " 0x<b>ä€ &amp;\n";
        let email = MockEmailService::new().with_send(expected_email("", otp));
        let sut = OtpEmailServiceImpl::new(email);

        // Act
        let result = sut.send_otp_email(request("", otp)).await;

        // Assert
        assert_eq!(result, OtpEmailResult::success());
    }

    #[tokio::test]
    async fn error_message_is_outermost_context() {
        // Arrange
        let mut email = MockEmailService::new();
        email.expect_send().once().return_once(|_| {
            Box::pin(std::future::ready(Err(
                anyhow::anyhow!("connection refused").context("error sending request")
            )))
        });
        let sut = OtpEmailServiceImpl::new(email);

        // Act
        let result = sut.send_otp_email(request("a@b.com", "1")).await;

        // Assert
        assert_eq!(result.error(), Some("error sending request"));
    }

    #[test]
    fn body_contains_otp_verbatim() {
        for otp in ["123456", "", "  spaced  ", "ünïcödé"] {
            assert!(otp_email_body(otp).ends_with(otp));
            assert!(otp_email_body(otp).contains(otp));
        }
    }
}
