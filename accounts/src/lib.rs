//! Shared user model for the gateway and the front-end.
//!
//! This crate owns the wire shape of the session user so the mock session
//! provider and the client's store deserialize the same type. Field names are
//! snake_case; optional profile fields are omitted when absent.


use serde::{Deserialize, Serialize};

/// Account category; drives the post-sign-in landing page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Regular,
    Company,
    Admin,
}

/// Authenticated user profile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub user_type: UserType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl User {
    /// Name shown in page headers.
    #[must_use]
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() {
            self.username.clone().unwrap_or_else(|| self.email.clone())
        } else {
            full.to_owned()
        }
    }
}
