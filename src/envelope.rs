use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Marker reported when the upstream gave no body at all.
pub const NULL_RESPONSE: &str = "null/undefined response";

/// The `{success, message, error}` shape every operation returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope<M> {
    pub success: bool,
    pub message: M,
    pub error: String,
}

impl<M> Envelope<M> {
    pub fn success(message: M) -> Self {
        Self {
            success: true,
            message,
            error: String::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn to_json(&self) -> serde_json::Result<String>
    where
        M: Serialize,
    {
        serde_json::to_string(self)
    }
}

impl<M> From<Failure<M>> for Envelope<M> {
    fn from(failure: Failure<M>) -> Self {
        Self {
            success: false,
            message: failure.message,
            error: failure.error.to_string(),
        }
    }
}

impl<M> From<Result<M, Failure<M>>> for Envelope<M> {
    fn from(result: Result<M, Failure<M>>) -> Self {
        match result {
            Ok(message) => Envelope::success(message),
            Err(failure) => failure.into(),
        }
    }
}

/// A failed operation: the message to show alongside the typed cause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure<M> {
    pub message: M,
    pub error: MofhError,
}

impl<M> Failure<M> {
    pub fn new(message: M, error: MofhError) -> Self {
        Self { message, error }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MofhError {
    #[error("null/undefined response")]
    NullResponse,
    /// Password change refused because the account is suspended, reactivating
    /// or closing. Displays the null-response marker, which existing callers
    /// match on.
    #[error("null/undefined response")]
    AccountInactive,
    #[error("{0}")]
    Upstream(String),
    #[error("{0}")]
    UnexpectedBody(String),
    #[error("malformed {operation} response: {body}")]
    Malformed {
        operation: &'static str,
        body: String,
    },
    #[error("{0}")]
    Transport(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_has_empty_error() {
        let envelope = Envelope::success(1u8);
        assert!(envelope.is_success());
        assert_eq!(envelope.to_json().unwrap(), r#"{"success":true,"message":1,"error":""}"#);
    }

    #[test]
    fn failure_carries_error_text() {
        let result: Result<Vec<String>, _> = Err(Failure::new(
            Vec::new(),
            MofhError::Upstream("ERROR: no such user".to_owned()),
        ));
        let envelope = Envelope::from(result);

        assert!(!envelope.is_success());
        assert_eq!(envelope.error, "ERROR: no such user");
        assert_eq!(envelope.to_json().unwrap(), r#"{"success":false,"message":[],"error":"ERROR: no such user"}"#);
    }

    #[test]
    fn inactive_account_reports_null_marker() {
        assert_eq!(MofhError::AccountInactive.to_string(), NULL_RESPONSE);
        assert_eq!(MofhError::NullResponse.to_string(), NULL_RESPONSE);
    }

    #[test]
    fn malformed_names_operation() {
        let err = MofhError::Malformed {
            operation: "check-availability",
            body: "maybe".to_owned(),
        };
        assert_eq!(err.to_string(), "malformed check-availability response: maybe");
    }
}
