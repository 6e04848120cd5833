use crate::models::created_by::CreatedBy;

use serde::{Deserialize, Serialize};

/// Minimal attribution sent with a status update for audit purposes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Actor {
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl Actor {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            first_name: None,
            last_name: None,
            avatar_url: None,
        }
    }
}

impl From<&CreatedBy> for Actor {
    fn from(created_by: &CreatedBy) -> Self {
        match created_by {
            CreatedBy::Legacy(email) => Actor::new(email.clone()),
            CreatedBy::User(profile) => Actor {
                email: profile.email.clone(),
                first_name: profile.first_name.clone(),
                last_name: profile.last_name.clone(),
                avatar_url: profile.avatar_url.clone(),
            },
        }
    }
}
