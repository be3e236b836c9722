use clap::Subcommand;
use otp_mailer_config::Config;
use otp_mailer_email_contracts::{Email, EmailService};

use crate::email;

#[derive(Debug, Subcommand)]
pub enum EmailCommand {
    /// Test email deliverability
    Test {
        recipient: String,
        /// Sender address, defaults to the recipient
        #[arg(long)]
        sender: Option<String>,
    },
}

impl EmailCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            EmailCommand::Test { recipient, sender } => test(config, recipient, sender).await,
        }
    }
}

async fn test(config: Config, recipient: String, sender: Option<String>) -> anyhow::Result<()> {
    let email_service = email::connect(&config.email)?;

    email_service
        .send(Email {
            sender: sender.unwrap_or_else(|| recipient.clone()),
            recipient,
            subject: "Email Deliverability Test".into(),
            body: "Email deliverability seems to be working!".into(),
        })
        .await
}
