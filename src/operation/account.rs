use serde::{Deserialize, Serialize};
use crate::envelope::{Failure, MofhError};
use crate::xml::parse_document;
use super::{AuthMode, Operation};

const NO_VPUSERNAME: &str = "none";

/// `statusmsg` prefix sent when the account is suspended, reactivating or closing.
const ACCOUNT_INACTIVE: &str =
    "This account currently not active, the account must be active to change the password";
/// `statusmsg` sent when the new password equals the current one.
const PASSWORD_UNCHANGED: &str = "An error occured changing this password.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountStatus {
    pub status: u8,
    pub statusmsg: String,
    /// Control panel login, `none` unless the account was created.
    pub vpusername: String,
}

impl AccountStatus {
    fn failed(statusmsg: String) -> Self {
        Self {
            status: 0,
            statusmsg,
            vpusername: NO_VPUSERNAME.to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordStatus {
    pub status: u8,
    pub statusmsg: String,
}

impl PasswordStatus {
    fn changed() -> Self {
        Self {
            status: 1,
            statusmsg: "Success".to_owned(),
        }
    }

    fn failed(statusmsg: String) -> Self {
        Self { status: 0, statusmsg }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuspensionStatus {
    pub status: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statusmsg: Option<String>,
}

impl SuspensionStatus {
    fn done() -> Self {
        Self { status: 1, statusmsg: None }
    }

    fn failed(statusmsg: String) -> Self {
        Self {
            status: 0,
            statusmsg: Some(statusmsg),
        }
    }
}

// Upstream elements may repeat; only the first of each is read.
#[derive(Debug, Deserialize)]
struct ResultDocument {
    #[serde(default)]
    result: Vec<ResultElement>,
}

#[derive(Debug, Deserialize)]
struct PasswdDocument {
    #[serde(default)]
    passwd: Vec<ResultElement>,
}

#[derive(Debug, Deserialize)]
struct ResultElement {
    #[serde(default)]
    status: Vec<String>,
    #[serde(default)]
    statusmsg: Vec<String>,
    #[serde(default)]
    options: Vec<OptionsElement>,
}

impl ResultElement {
    fn succeeded(&self) -> bool {
        self.status.first().map(String::as_str) == Some("1")
    }

    fn has_status(&self) -> bool {
        !self.status.is_empty()
    }

    fn statusmsg(&mut self) -> Option<String> {
        first(&mut self.statusmsg)
    }

    fn vpusername(&mut self) -> Option<String> {
        self.options.first_mut().and_then(|o| first(&mut o.vpusername))
    }
}

#[derive(Debug, Deserialize)]
struct OptionsElement {
    #[serde(default)]
    vpusername: Vec<String>,
}

fn first<T>(values: &mut Vec<T>) -> Option<T> {
    if values.is_empty() {
        None
    } else {
        Some(values.swap_remove(0))
    }
}

/// Failure detail for a refusal; a blank `statusmsg` reports the body instead.
fn refusal_detail(statusmsg: String, body: &str) -> String {
    if statusmsg.trim().is_empty() {
        body.to_owned()
    } else {
        statusmsg
    }
}

pub struct CreateAccount;

impl Operation for CreateAccount {
    type Message = AccountStatus;

    const NAME: &'static str = "create-account";
    const ENDPOINT: &'static str = "createacct.php";
    const AUTH: AuthMode = AuthMode::Basic;

    fn failure_message(detail: &str) -> Self::Message {
        AccountStatus::failed(detail.to_owned())
    }

    fn parse(body: &str) -> Result<Self::Message, Failure<Self::Message>> {
        let unexpected = || {
            Failure::new(
                Self::failure_message(body),
                MofhError::UnexpectedBody(body.to_owned()),
            )
        };

        let mut result = parse_document::<ResultDocument>(body, "createacct")
            .and_then(|mut d| first(&mut d.result))
            .ok_or_else(unexpected)?;
        let statusmsg = result.statusmsg().ok_or_else(unexpected)?;

        if !result.succeeded() {
            let detail = refusal_detail(statusmsg, body);
            return Err(Failure::new(
                AccountStatus::failed(detail.clone()),
                MofhError::Upstream(detail),
            ));
        }

        let vpusername = result.vpusername().ok_or_else(unexpected)?;
        Ok(AccountStatus {
            status: 1,
            statusmsg,
            vpusername,
        })
    }
}

pub struct ResetPassword;

impl Operation for ResetPassword {
    type Message = PasswordStatus;

    const NAME: &'static str = "reset-password";
    const ENDPOINT: &'static str = "passwd.php";
    const AUTH: AuthMode = AuthMode::Basic;

    fn failure_message(detail: &str) -> Self::Message {
        PasswordStatus::failed(detail.to_owned())
    }

    fn parse(body: &str) -> Result<Self::Message, Failure<Self::Message>> {
        let unexpected = || {
            Failure::new(
                Self::failure_message(body),
                MofhError::UnexpectedBody(body.to_owned()),
            )
        };

        let mut result = parse_document::<PasswdDocument>(body, "passwd")
            .and_then(|mut d| first(&mut d.passwd))
            .ok_or_else(unexpected)?;
        let statusmsg = result.statusmsg().ok_or_else(unexpected)?;

        // Checked in this order: an inactive account wins over the other rules.
        if statusmsg.contains(ACCOUNT_INACTIVE) {
            Err(Failure::new(PasswordStatus::failed(statusmsg), MofhError::AccountInactive))
        } else if statusmsg.contains(PASSWORD_UNCHANGED) || result.succeeded() {
            Ok(PasswordStatus::changed())
        } else {
            let detail = refusal_detail(statusmsg, body);
            Err(Failure::new(
                PasswordStatus::failed(detail.clone()),
                MofhError::Upstream(detail),
            ))
        }
    }
}

pub struct SuspendAccount;

impl Operation for SuspendAccount {
    type Message = SuspensionStatus;

    const NAME: &'static str = "suspend-account";
    const ENDPOINT: &'static str = "suspendacct.php";
    const AUTH: AuthMode = AuthMode::Basic;

    fn failure_message(detail: &str) -> Self::Message {
        SuspensionStatus::failed(detail.to_owned())
    }

    fn parse(body: &str) -> Result<Self::Message, Failure<Self::Message>> {
        parse_suspension(body, "suspendacct")
    }
}

pub struct UnsuspendAccount;

impl Operation for UnsuspendAccount {
    type Message = SuspensionStatus;

    const NAME: &'static str = "unsuspend-account";
    const ENDPOINT: &'static str = "unsuspendacct.php";
    const AUTH: AuthMode = AuthMode::Basic;

    fn failure_message(detail: &str) -> Self::Message {
        SuspensionStatus::failed(detail.to_owned())
    }

    fn parse(body: &str) -> Result<Self::Message, Failure<Self::Message>> {
        parse_suspension(body, "unsuspendacct")
    }
}

fn parse_suspension(body: &str, root: &str) -> Result<SuspensionStatus, Failure<SuspensionStatus>> {
    let result = parse_document::<ResultDocument>(body, root)
        .and_then(|mut d| first(&mut d.result))
        .filter(ResultElement::has_status);
    let Some(mut result) = result else {
        return Err(Failure::new(
            SuspensionStatus::failed(body.to_owned()),
            MofhError::UnexpectedBody(body.to_owned()),
        ));
    };

    if result.succeeded() {
        return Ok(SuspensionStatus::done());
    }

    let detail = refusal_detail(result.statusmsg().unwrap_or_default(), body);
    Err(Failure::new(
        SuspensionStatus::failed(detail.clone()),
        MofhError::Upstream(detail),
    ))
}
