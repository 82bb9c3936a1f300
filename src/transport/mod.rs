use std::fmt::{Debug, Formatter};

pub mod http;

/// Reseller API credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_user: String,
    pub api_key: String,
}

impl Credentials {
    pub fn new(api_user: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_user: api_user.into(),
            api_key: api_key.into(),
        }
    }
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_user", &self.api_user)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// A form-encoded POST against one API endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormRequest {
    pub endpoint: &'static str,
    pub form: Vec<(&'static str, String)>,
    pub basic_auth: Option<Credentials>,
}

impl FormRequest {
    /// Value of the first form field named `name`.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.form.iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }
}

#[cfg_attr(test, mockall::automock(type Error = std::io::Error;))]
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    type Error: std::error::Error + Send;

    /// Sends `request`, returning the body or `None` when there was none.
    /// Blank bodies may be returned as-is; normalization treats them as absent.
    async fn post(&self, request: FormRequest) -> Result<Option<String>, Self::Error>;
}
