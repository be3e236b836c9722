use otp_mailer_config::Config;
use otp_mailer_email_contracts::EmailService;
use tracing::info;

use crate::{email, environment};

pub async fn serve(config: Config) -> anyhow::Result<()> {
    let email = email::connect(&config.email)?;
    info!("Checking {} email provider", email.provider_name());
    email.ping().await?;

    let server = environment::server(email);
    info!(
        "Starting http server on {}:{}",
        config.http.host, config.http.port
    );
    server.serve(config.http.host, config.http.port).await
}
