use std::{
    net::IpAddr,
    path::{Path, PathBuf},
};

use anyhow::Context;
use config::{Environment, File, FileFormat};
use otp_mailer_models::Sensitive;
use serde::Deserialize;
use url::Url;

pub use duration::Duration;

mod duration;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Colon separated list of additional config files, applied in order.
pub const CONFIG_PATH_ENV: &str = "OTP_MAILER_CONFIG";

const ENV_PREFIX: &str = "OTP_MAILER";
const ENV_SEPARATOR: &str = "__";

/// Load the default config file, the files listed in [`CONFIG_PATH_ENV`] and
/// any `OTP_MAILER__*` environment variables, in that order.
pub fn load() -> anyhow::Result<Config> {
    let mut paths = vec![PathBuf::from(DEFAULT_CONFIG_PATH)];
    if let Some(extra) = std::env::var_os(CONFIG_PATH_ENV) {
        paths.extend(std::env::split_paths(&extra));
    }

    load_with_override(&paths, &[])
}

/// Like [`load`], but with an explicit list of config files and additional
/// inline TOML snippets which are applied after them.
pub fn load_with_override(
    paths: &[impl AsRef<Path>],
    overrides: &[&str],
) -> anyhow::Result<Config> {
    load_from(paths, overrides, None)
}

/// `environment` replaces the process environment when set.
fn load_from(
    paths: &[impl AsRef<Path>],
    overrides: &[&str],
    environment: Option<config::Map<String, String>>,
) -> anyhow::Result<Config> {
    let builder = paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?;

    overrides
        .iter()
        .fold(builder, |builder, snippet| {
            builder.add_source(File::from_str(snippet, FileFormat::Toml))
        })
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator(ENV_SEPARATOR)
                .separator(ENV_SEPARATOR)
                .source(environment),
        )
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub email: EmailConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub host: IpAddr,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct EmailConfig {
    pub provider: EmailProvider,
    pub sendgrid: Option<SendgridConfig>,
    pub smtp: Option<SmtpConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailProvider {
    Sendgrid,
    Smtp,
}

#[derive(Debug, Deserialize)]
pub struct SendgridConfig {
    pub api_key: Sensitive<String>,
    pub endpoint_override: Option<Url>,
    pub timeout: Option<Duration>,
}

#[derive(Debug, Deserialize)]
pub struct SmtpConfig {
    pub url: Sensitive<String>,
}
