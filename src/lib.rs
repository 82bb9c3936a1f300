//! Client for the MyOwnFreeHost reseller XML API.
//!
//! Each call performs a single POST and folds the upstream reply, whatever its
//! shape, into an [`Envelope`] of `{success, message, error}`.

pub mod client;
pub mod envelope;
pub mod operation;
pub mod settings;
pub mod transport;
mod xml;

pub use client::MofhClient;
pub use envelope::{Envelope, Failure, MofhError, NULL_RESPONSE};
pub use operation::{
    account::{AccountStatus, PasswordStatus, SuspensionStatus},
    listing::DomainEntry,
};
pub use settings::Settings;
pub use transport::{http::HttpTransport, Credentials, Transport};
