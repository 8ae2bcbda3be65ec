//! Authenticated user descriptor.

use serde::{Deserialize, Serialize};

/// The user returned alongside a token pair.
///
/// The token endpoint may omit the user entirely, in which case only the
/// username used to log in is known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_staff: Option<bool>,
}

impl User {
    /// Creates a descriptor that only knows the username.
    pub fn from_username(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            id: None,
            email: None,
            first_name: None,
            last_name: None,
            role: None,
            is_active: None,
            is_staff: None,
        }
    }
}
