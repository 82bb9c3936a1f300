use tracing::{debug, error, warn};
use crate::envelope::Envelope;
use crate::operation::{
    self,
    account::{AccountStatus, PasswordStatus, SuspensionStatus},
    listing::DomainEntry,
    AuthMode, CheckAvailability, CreateAccount, ListDomains, Operation, ResetPassword,
    SuspendAccount, UnsuspendAccount,
};
use crate::settings::Settings;
use crate::transport::{
    http::{HttpError, HttpTransport},
    Credentials, FormRequest, Transport,
};

/// Client for the reseller account API.
///
/// Every operation returns an [`Envelope`]; failures are reported in it rather
/// than as an `Err`.
#[derive(Debug)]
pub struct MofhClient<T: Transport> {
    credentials: Credentials,
    transport: T,
}

impl MofhClient<HttpTransport> {
    pub fn from_settings(settings: &Settings) -> Result<Self, HttpError> {
        Ok(Self::new(settings.credentials(), HttpTransport::from_settings(settings)?))
    }
}

impl<T: Transport> MofhClient<T> {
    pub fn new(credentials: Credentials, transport: T) -> Self {
        Self { credentials, transport }
    }

    /// Lists a user's domains with their status.
    #[tracing::instrument(skip(self))]
    pub async fn list_domains(&self, username: &str) -> Envelope<Vec<DomainEntry>> {
        self.call::<ListDomains>(vec![("username", username.to_owned())]).await
    }

    /// Checks whether `domain` can be used for a new account. The message is
    /// `1` when it can.
    #[tracing::instrument(skip(self))]
    pub async fn check_availability(&self, domain: &str) -> Envelope<u8> {
        self.call::<CheckAvailability>(vec![("domain", domain.to_owned())]).await
    }

    /// Creates a hosting account on `plan`.
    #[tracing::instrument(skip(self, password))]
    pub async fn create_account(
        &self,
        username: &str,
        password: &str,
        email: &str,
        domain: &str,
        plan: &str,
    ) -> Envelope<AccountStatus> {
        self.call::<CreateAccount>(vec![
            ("username", username.to_owned()),
            ("password", password.to_owned()),
            ("contactemail", email.to_owned()),
            ("domain", domain.to_owned()),
            ("plan", plan.to_owned()),
        ]).await
    }

    /// Changes an account's password. Setting the current password again
    /// succeeds.
    #[tracing::instrument(skip(self, password))]
    pub async fn reset_password(&self, username: &str, password: &str) -> Envelope<PasswordStatus> {
        self.call::<ResetPassword>(vec![
            ("user", username.to_owned()),
            ("pass", password.to_owned()),
        ]).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn suspend_account(&self, username: &str, reason: &str) -> Envelope<SuspensionStatus> {
        self.call::<SuspendAccount>(vec![
            ("user", username.to_owned()),
            ("reason", reason.to_owned()),
        ]).await
    }

    #[tracing::instrument(skip(self))]
    pub async fn unsuspend_account(&self, username: &str) -> Envelope<SuspensionStatus> {
        self.call::<UnsuspendAccount>(vec![("user", username.to_owned())]).await
    }

    async fn call<O: Operation>(&self, fields: Vec<(&'static str, String)>) -> Envelope<O::Message> {
        let request = match O::AUTH {
            AuthMode::Form => {
                let mut form = vec![
                    ("api_user", self.credentials.api_user.clone()),
                    ("api_key", self.credentials.api_key.clone()),
                ];
                form.extend(fields);
                FormRequest { endpoint: O::ENDPOINT, form, basic_auth: None }
            }
            AuthMode::Basic => FormRequest {
                endpoint: O::ENDPOINT,
                form: fields,
                basic_auth: Some(self.credentials.clone()),
            },
        };

        let envelope = match self.transport.post(request).await {
            Ok(raw) => operation::normalize::<O>(raw.as_deref()),
            Err(e) => {
                error!(operation = O::NAME, "request failed: {}", e);
                operation::transport_failure::<O>(e.to_string())
            }
        };

        if envelope.success {
            debug!(operation = O::NAME, ?envelope, "operation succeeded");
        } else {
            warn!(operation = O::NAME, error = %envelope.error, "operation failed");
        }
        envelope
    }
}
