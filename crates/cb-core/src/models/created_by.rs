use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Structured user profile attached to newer case records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub metadata: Option<Value>,
}

/// Creator attribution on a case record
///
/// Older records carry a plain string (usually an email); newer ones a
/// structured profile. The untagged representation accepts both wire shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CreatedBy {
    User(UserProfile),
    Legacy(String),
}

impl CreatedBy {
    /// Best-effort display name for card rendering
    pub fn display_name(&self) -> &str {
        match self {
            Self::Legacy(s) => s,
            Self::User(profile) => profile
                .first_name
                .as_deref()
                .filter(|s| !s.is_empty())
                .unwrap_or(&profile.email),
        }
    }

    pub fn email(&self) -> &str {
        match self {
            Self::Legacy(s) => s,
            Self::User(profile) => &profile.email,
        }
    }
}
