use std::fmt::{Debug, Formatter};
use std::time::Duration;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File};
use serde::Deserialize;
use crate::transport::{http::{parse_timeout, DEFAULT_BASE_URL}, Credentials};

#[derive(Deserialize)]
pub struct Settings {
    pub api_user: String,
    pub api_key: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Skip TLS certificate verification.
    #[serde(default)]
    pub accept_invalid_certs: bool,
    /// Request timeout, e.g. `30s`.
    pub timeout: Option<String>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_owned()
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let user_config = shellexpand::tilde("~/.config/mofh-client/config");

        Self::from_builder(Config::builder()
            .add_source(File::with_name("mofh").required(false))
            .add_source(File::with_name(&user_config).required(false))
            .add_source(config::Environment::with_prefix("MOFH")))
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder.build()?.try_deserialize()
    }

    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.api_user.as_str(), self.api_key.as_str())
    }

    pub fn timeout(&self) -> Result<Option<Duration>, humantime::DurationError> {
        self.timeout.as_deref().map(parse_timeout).transpose()
    }
}

impl Debug for Settings {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("api_user", &self.api_user)
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("accept_invalid_certs", &self.accept_invalid_certs)
            .field("timeout", &self.timeout)
            .finish()
    }
}
