use std::{ops::Deref, time::Duration};

use otp_mailer_utils::Apply;
use reqwest::ClientBuilder;

const USER_AGENT: &str = concat!("otp-mailer/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct HttpClient(reqwest::Client);

impl HttpClient {
    pub fn new(timeout: Option<Duration>) -> anyhow::Result<Self> {
        reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .apply_map(timeout, ClientBuilder::timeout)
            .build()
            .map(Self)
            .map_err(Into::into)
    }
}

impl Deref for HttpClient {
    type Target = reqwest::Client;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
