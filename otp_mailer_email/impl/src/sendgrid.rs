use std::{sync::Arc, time::Duration};

use anyhow::anyhow;
use otp_mailer_email_contracts::{Email, EmailService};
use otp_mailer_models::Sensitive;
use otp_mailer_utils::trace_instrument;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::http::HttpClient;

const SENDGRID_ENDPOINT: &str = "https://api.sendgrid.com/";
const MAIL_SEND_PATH: &str = "v3/mail/send";
const SCOPES_PATH: &str = "v3/scopes";

/// Delivers emails through the SendGrid v3 web api.
#[derive(Debug, Clone)]
pub struct SendgridEmailService {
    config: SendgridEmailServiceConfig,
    http: HttpClient,
}

#[derive(Debug, Clone)]
pub struct SendgridEmailServiceConfig {
    api_key: Arc<Sensitive<String>>,
    endpoint: Arc<Url>,
    timeout: Option<Duration>,
}

impl SendgridEmailServiceConfig {
    /// `endpoint_override` replaces the public SendGrid api and must end with
    /// a `/`, since the api paths are joined onto it.
    pub fn new(
        api_key: String,
        endpoint_override: Option<Url>,
        timeout: Option<Duration>,
    ) -> anyhow::Result<Self> {
        let endpoint = match endpoint_override {
            Some(endpoint) => endpoint,
            None => SENDGRID_ENDPOINT.parse()?,
        };

        Ok(Self {
            api_key: Arc::new(api_key.into()),
            endpoint: endpoint.into(),
            timeout,
        })
    }
}

impl SendgridEmailService {
    pub fn new(config: SendgridEmailServiceConfig) -> anyhow::Result<Self> {
        let http = HttpClient::new(config.timeout)?;
        Ok(Self { config, http })
    }
}

impl EmailService for SendgridEmailService {
    #[trace_instrument(skip(self, email), fields(recipient = %email.recipient))]
    async fn send(&self, email: Email) -> anyhow::Result<()> {
        let response = self
            .http
            .post(self.config.endpoint.join(MAIL_SEND_PATH)?)
            .bearer_auth(&**self.config.api_key)
            .json(&MailSendRequest::new(&email))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let errors = response
            .json::<ErrorResponse>()
            .await
            .map(|body| body.errors)
            .unwrap_or_default();

        Err(anyhow!(error_message(status, errors)))
    }

    #[trace_instrument(skip(self))]
    async fn ping(&self) -> anyhow::Result<()> {
        self.http
            .get(self.config.endpoint.join(SCOPES_PATH)?)
            .bearer_auth(&**self.config.api_key)
            .send()
            .await?
            .error_for_status()
            .map(|_| ())
            .map_err(Into::into)
    }
}

/// The message of the first reported error, falling back to the status line.
///
/// The official `@sendgrid/mail` client always reports the status text
/// (`"Bad Request"`) and leaves the error list in the response body; here the
/// provider's own message (`"invalid recipient"`) is preferred.
fn error_message(status: StatusCode, errors: Vec<ErrorDetail>) -> String {
    errors
        .into_iter()
        .find_map(|err| err.message)
        .or_else(|| status.canonical_reason().map(Into::into))
        .unwrap_or_else(|| status.as_str().into())
}

#[derive(Serialize)]
struct MailSendRequest<'a> {
    personalizations: [Personalization<'a>; 1],
    from: Address<'a>,
    subject: &'a str,
    content: [Content<'a>; 1],
}

impl<'a> MailSendRequest<'a> {
    fn new(email: &'a Email) -> Self {
        Self {
            personalizations: [Personalization {
                to: [Address {
                    email: &email.recipient,
                }],
            }],
            from: Address {
                email: &email.sender,
            },
            subject: &email.subject,
            content: [Content {
                content_type: "text/plain",
                value: &email.body,
            }],
        }
    }
}

#[derive(Serialize)]
struct Personalization<'a> {
    to: [Address<'a>; 1],
}

#[derive(Serialize)]
struct Address<'a> {
    email: &'a str,
}

#[derive(Serialize)]
struct Content<'a> {
    #[serde(rename = "type")]
    content_type: &'a str,
    value: &'a str,
}

#[derive(Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    errors: Vec<ErrorDetail>,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: Option<String>,
}
