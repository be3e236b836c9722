use anyhow::{anyhow, Context};
use otp_mailer_config::{EmailConfig, EmailProvider};
use otp_mailer_email_impl::{
    EmailServiceImpl, SendgridEmailService, SendgridEmailServiceConfig, SmtpEmailService,
};

/// Build the email provider selected in the config.
pub fn connect(config: &EmailConfig) -> anyhow::Result<EmailServiceImpl> {
    match config.provider {
        EmailProvider::Sendgrid => {
            let sendgrid = config.sendgrid.as_ref().ok_or_else(|| {
                anyhow!("email.provider is sendgrid, but email.sendgrid is missing")
            })?;
            let config = SendgridEmailServiceConfig::new(
                (*sendgrid.api_key).clone(),
                sendgrid.endpoint_override.clone(),
                sendgrid.timeout.map(Into::into),
            )?;
            SendgridEmailService::new(config)
                .map(Into::into)
                .context("Failed to create sendgrid client")
        }
        EmailProvider::Smtp => {
            let smtp = config
                .smtp
                .as_ref()
                .ok_or_else(|| anyhow!("email.provider is smtp, but email.smtp is missing"))?;
            SmtpEmailService::new(&smtp.url)
                .map(Into::into)
                .context("Failed to create smtp transport")
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use otp_mailer_config::DEFAULT_CONFIG_PATH;

    use super::*;

    fn email_config(overrides: &[&str]) -> EmailConfig {
        otp_mailer_config::load_with_override(&[Path::new(DEFAULT_CONFIG_PATH)], overrides)
            .unwrap()
            .email
    }

    #[test]
    fn sendgrid() {
        let email = connect(&email_config(&[])).unwrap();
        assert_eq!(email.provider_name(), "sendgrid");
    }

    #[tokio::test]
    async fn smtp() {
        let email = connect(&email_config(&[
            "email.provider = \"smtp\"",
            "email.smtp.url = \"smtp://127.0.0.1:2525\"",
        ]))
        .unwrap();
        assert_eq!(email.provider_name(), "smtp");
    }

    #[test]
    fn missing_provider_section() {
        assert!(connect(&email_config(&["email.provider = \"smtp\""])).is_err());
    }
}
