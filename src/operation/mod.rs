//! Per-operation request shapes and response rules.

use std::fmt::Debug;
use serde::Serialize;
use crate::envelope::{Envelope, Failure, MofhError};

pub mod account;
pub mod listing;

pub use account::{CreateAccount, ResetPassword, SuspendAccount, UnsuspendAccount};
pub use listing::{CheckAvailability, ListDomains};

/// Where the reseller credentials travel for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// `api_user` / `api_key` form fields.
    Form,
    /// HTTP basic auth.
    Basic,
}

/// One upstream API action.
pub trait Operation {
    type Message: Serialize + Debug + Send;

    const NAME: &'static str;
    /// Path relative to the API base url.
    const ENDPOINT: &'static str;
    const AUTH: AuthMode;

    /// Message reported when the call failed before any body could be read.
    fn failure_message(detail: &str) -> Self::Message;

    /// Applies this operation's decision table to a present body.
    fn parse(body: &str) -> Result<Self::Message, Failure<Self::Message>>;
}

/// Normalizes a raw upstream body into an envelope for `O`.
///
/// Blank bodies and a bare JSON `null` count as no body at all.
pub fn normalize<O: Operation>(raw: Option<&str>) -> Envelope<O::Message> {
    match raw.filter(|body| !is_absent(body)) {
        Some(body) => O::parse(body).into(),
        None => {
            let error = MofhError::NullResponse;
            Failure::new(O::failure_message(&error.to_string()), error).into()
        }
    }
}

fn is_absent(body: &str) -> bool {
    let body = body.trim();
    body.is_empty() || body == "null"
}

/// Envelope for a call that failed in transport.
pub fn transport_failure<O: Operation>(description: String) -> Envelope<O::Message> {
    Failure::new(O::failure_message(&description), MofhError::Transport(description)).into()
}
