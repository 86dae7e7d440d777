//! User account records as served by `/api/admin/users`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Route prefix of the user-management screens.
pub const USER_MANAGEMENT_BASE: &str = "/admin/user-management";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Option<i64>,
    pub login: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub activated: bool,
    pub lang_key: Option<String>,
    #[serde(default)]
    pub authorities: Vec<String>,
    pub created_by: Option<String>,
    pub created_date: Option<DateTime<Utc>>,
    pub last_modified_by: Option<String>,
    pub last_modified_date: Option<DateTime<Utc>>,
}

impl User {
    /// Same record with `activated` inverted.
    pub fn with_activation_toggled(&self) -> Self {
        Self {
            activated: !self.activated,
            ..self.clone()
        }
    }
}

/// The signed-in account, from `/api/account`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub login: String,
    #[serde(default)]
    pub authorities: Vec<String>,
}

/// Links rendered by the users table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRoute<'a> {
    View(&'a str),
    Edit(&'a str),
    Delete(&'a str),
    New,
}

impl UserRoute<'_> {
    pub fn path(&self, base: &str) -> String {
        match self {
            Self::View(login) => format!("{base}/{login}"),
            Self::Edit(login) => format!("{base}/{login}/edit"),
            Self::Delete(login) => format!("{base}/{login}/delete"),
            Self::New => format!("{base}/new"),
        }
    }
}

/// Nobody may delete the account they are signed in with.
pub fn can_delete(account_login: Option<&str>, user: &User) -> bool {
    account_login != Some(user.login.as_str())
}
