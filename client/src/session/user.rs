//! The signed-in user record and its construction paths.

#[cfg(test)]
#[path = "user_test.rs"]
mod user_test;

use serde::{Deserialize, Serialize};

/// Reserved credentials for the single built-in admin account. Every other
/// credential pair produces a regular user.
pub const ADMIN_EMAIL: &str = "cpnow2@yahoo.com";
pub const ADMIN_PASSWORD: &str = "Passw0rd101";

const ADMIN_ID: &str = "admin-1";
const ADMIN_NAME: &str = "Admin User";
const PLACEHOLDER_AVATAR: &str = "/placeholder.svg?height=40&width=40";

/// Access role gating administrative views.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl Role {
    /// Lowercase label as shown in tables and badges.
    pub fn label(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }
}

/// A signed-in user as held in memory and persisted across reloads.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Opaque identifier; random for generated accounts, fixed for the admin.
    pub id: String,
    /// Display name.
    pub name: String,
    pub email: String,
    pub role: Role,
    /// Avatar URI; always a placeholder in this build.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl User {
    /// The fixed admin identity produced by the reserved credential pair.
    pub fn admin() -> Self {
        Self {
            id: ADMIN_ID.to_owned(),
            name: ADMIN_NAME.to_owned(),
            email: ADMIN_EMAIL.to_owned(),
            role: Role::Admin,
            avatar: Some(PLACEHOLDER_AVATAR.to_owned()),
        }
    }

    /// Regular user synthesized from a sign-in email; the display name is the
    /// local part before `@`.
    pub fn from_email(email: &str) -> Self {
        let name = email.split('@').next().unwrap_or(email);
        Self {
            id: generated_id(),
            name: name.to_owned(),
            email: email.to_owned(),
            role: Role::User,
            avatar: Some(PLACEHOLDER_AVATAR.to_owned()),
        }
    }

    /// Regular user created by the sign-up form.
    pub fn from_signup(name: &str, email: &str) -> Self {
        Self {
            id: generated_id(),
            name: name.to_owned(),
            email: email.to_owned(),
            role: Role::User,
            avatar: Some(PLACEHOLDER_AVATAR.to_owned()),
        }
    }

    /// Regular user synthesized by a social provider handshake.
    pub fn from_social(provider: SocialProvider) -> Self {
        Self {
            id: generated_id(),
            name: format!("{} User", provider.display_name()),
            email: format!("user@{}.example.com", provider.slug()),
            role: Role::User,
            avatar: Some(PLACEHOLDER_AVATAR.to_owned()),
        }
    }
}

fn generated_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Supported social sign-in providers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SocialProvider {
    Google,
    Apple,
}

impl SocialProvider {
    /// Capitalized name for button labels and toasts.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Google => "Google",
            Self::Apple => "Apple",
        }
    }

    /// Lowercase tag used in synthesized addresses.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Apple => "apple",
        }
    }
}
