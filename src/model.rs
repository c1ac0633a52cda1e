use std::fmt;

use serde::{Deserialize, Serialize};

/// Role value that unlocks the all-profiles listing.
pub const ADMIN_ROLE: &str = "admin";

/// Which of the three screens is currently shown. Derived from session
/// state, never stored on its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewMode {
    Login,
    Profile,
    AllUsers,
}

/// The authenticated user's display record, as returned by
/// `GET /api/profile`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: String,
}

impl Profile {
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }
}

/// One entry of the admin listing: a profile plus the identifier the API
/// keys records by. Some deployments send numeric ids, some strings.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct UserRecord {
    #[serde(rename = "_id", default)]
    pub id: Option<RecordId>,
    #[serde(flatten)]
    pub profile: Profile,
}

impl UserRecord {
    /// Stable key for list rendering. Falls back to the row position when
    /// the record carries no id.
    pub fn display_key(&self, index: usize) -> String {
        match &self.id {
            Some(id) => id.to_string(),
            None => format!("row-{index}"),
        }
    }

    /// Uppercased first letter of the name, used as the avatar glyph.
    pub fn avatar_initial(&self) -> String {
        self.profile
            .name
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_default()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(u64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{n}"),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

/// Body of `POST /api/login`.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Success payload of `POST /api/login`.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}
