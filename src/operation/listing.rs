use serde::{Deserialize, Serialize};
use crate::envelope::{Failure, MofhError};
use super::{AuthMode, Operation};

/// Bodies containing this marker are upstream errors.
const ERROR_MARKER: &str = "ERROR";

/// A `[status, domain]` pair as returned by `getuserdomains`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainEntry(pub String, pub String);

impl DomainEntry {
    /// Upstream status, e.g. `ACTIVE`.
    pub fn status(&self) -> &str {
        &self.0
    }

    pub fn domain(&self) -> &str {
        &self.1
    }
}

pub struct ListDomains;

impl Operation for ListDomains {
    type Message = Vec<DomainEntry>;

    const NAME: &'static str = "list-domains";
    const ENDPOINT: &'static str = "getuserdomains.php";
    const AUTH: AuthMode = AuthMode::Form;

    fn failure_message(_detail: &str) -> Self::Message {
        Vec::new()
    }

    fn parse(body: &str) -> Result<Self::Message, Failure<Self::Message>> {
        if body.contains(ERROR_MARKER) {
            return Err(Failure::new(Vec::new(), MofhError::Upstream(body.to_owned())));
        }
        serde_json::from_str(body.trim()).map_err(|_| {
            Failure::new(Vec::new(), MofhError::Malformed {
                operation: Self::NAME,
                body: body.to_owned(),
            })
        })
    }
}

/// The message is the integer `0` or `1`, not the upstream's raw text.
pub struct CheckAvailability;

impl Operation for CheckAvailability {
    /// `1` when the domain can be registered.
    type Message = u8;

    const NAME: &'static str = "check-availability";
    const ENDPOINT: &'static str = "checkavailable.php";
    const AUTH: AuthMode = AuthMode::Form;

    fn failure_message(_detail: &str) -> Self::Message {
        0
    }

    fn parse(body: &str) -> Result<Self::Message, Failure<Self::Message>> {
        if body.contains(ERROR_MARKER) {
            return Err(Failure::new(0, MofhError::Upstream(body.to_owned())));
        }
        match body.trim() {
            "0" => Ok(0),
            "1" => Ok(1),
            _ => Err(Failure::new(0, MofhError::Malformed {
                operation: Self::NAME,
                body: body.to_owned(),
            })),
        }
    }
}
