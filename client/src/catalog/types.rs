//! Catalog domain types shared by cards, tables, and the detail page.

use crate::session::user::Role;

/// A reusable prompt as shown in cards, lists, and the detail page.
#[derive(Clone, Debug, PartialEq)]
pub struct Prompt {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub tags: Vec<String>,
    /// Template text; `{placeholders}` mark user-supplied variables.
    pub template: String,
    pub author: String,
    pub favorites: u32,
    pub uses: u32,
    /// Worked example shown on the detail page, when one exists.
    pub example: Option<String>,
}

/// Moderation status of a published catalog entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PromptStatus {
    Published,
    Draft,
}

impl PromptStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Published => "published",
            Self::Draft => "draft",
        }
    }
}

/// Row in the admin prompts table.
#[derive(Clone, Debug, PartialEq)]
pub struct PromptRow {
    pub id: String,
    pub title: String,
    pub category: String,
    pub author: String,
    pub status: PromptStatus,
    pub date: String,
}

/// Row in the admin pending-approval table.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingRow {
    pub id: String,
    pub title: String,
    pub category: String,
    pub author: String,
    pub submitted: String,
}

/// Account activity status in the admin users table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccountStatus {
    Active,
    Inactive,
}

impl AccountStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

/// Row in the admin users table.
#[derive(Clone, Debug, PartialEq)]
pub struct UserRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: AccountStatus,
    pub joined: String,
}

/// A prompt category with usage count.
#[derive(Clone, Debug, PartialEq)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub count: u32,
    pub created: String,
}

/// A tag with usage count for the sidebar.
#[derive(Clone, Debug, PartialEq)]
pub struct TagCount {
    pub name: String,
    pub count: u32,
}

/// A reader comment on the detail page.
#[derive(Clone, Debug, PartialEq)]
pub struct Comment {
    pub id: String,
    pub author: String,
    pub avatar: String,
    pub date: String,
    pub content: String,
}

/// Compact link to a related prompt.
#[derive(Clone, Debug, PartialEq)]
pub struct SimilarPrompt {
    pub id: String,
    pub title: String,
    pub description: String,
}
