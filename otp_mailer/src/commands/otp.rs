use anyhow::ensure;
use clap::Subcommand;
use otp_mailer_config::Config;
use otp_mailer_core_otp_contracts::OtpEmailService;
use otp_mailer_models::otp::OtpEmailRequest;
use serde_json::json;

use crate::{email, environment};

#[derive(Debug, Subcommand)]
pub enum OtpCommand {
    /// Send a one-time password email, exactly like a call to the server would
    Send { email: String, otp: String },
}

impl OtpCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            OtpCommand::Send { email, otp } => send(config, email, otp).await,
        }
    }
}

async fn send(config: Config, email: String, otp: String) -> anyhow::Result<()> {
    let service = environment::otp_email(email::connect(&config.email)?);

    let result = service
        .send_otp_email(OtpEmailRequest {
            email,
            otp: otp.into(),
        })
        .await;

    let output = match result.error() {
        None => json!({"success": true}),
        Some(error) => json!({"success": false, "error": error}),
    };
    println!("{output}");

    ensure!(result.is_success(), "Failed to send otp email");

    Ok(())
}
