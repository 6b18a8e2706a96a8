use serde::{Deserialize, Serialize};

use crate::models::macros::str_opt_ref;

/// The profile of the member owning the current token.
///
/// Most fields are filled in by the member themselves and may be absent
/// or empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    /// The numeric member ID.
    id: u64,

    /// The member's username.
    username: String,

    /// URL of the member's profile page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    url: Option<String>,

    /// The member's personal website.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    website: Option<String>,

    /// The member's Twitter handle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    twitter: Option<String>,

    /// The member's PSN ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    psn: Option<String>,

    /// The member's GitHub username.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    github: Option<String>,

    /// The member's Bitcoin address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    btc: Option<String>,

    /// The member's location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    location: Option<String>,

    /// The member's tagline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tagline: Option<String>,

    /// The member's bio.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    bio: Option<String>,

    /// URL of the small avatar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    avatar_mini: Option<String>,

    /// URL of the medium avatar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    avatar_normal: Option<String>,

    /// URL of the large avatar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    avatar_large: Option<String>,

    /// UNIX timestamp (seconds since epoch) of account creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    created: Option<i64>,

    /// UNIX timestamp of the last profile modification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_modified: Option<i64>,
}

impl Member {
    /// Returns the numeric member ID.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the member's username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the URL of the member's profile page (if present).
    pub fn url(&self) -> Option<&str> {
        str_opt_ref!(self.url)
    }

    /// Returns the member's personal website (if present).
    pub fn website(&self) -> Option<&str> {
        str_opt_ref!(self.website)
    }

    /// Returns the member's Twitter handle (if present).
    pub fn twitter(&self) -> Option<&str> {
        str_opt_ref!(self.twitter)
    }

    /// Returns the member's PSN ID (if present).
    pub fn psn(&self) -> Option<&str> {
        str_opt_ref!(self.psn)
    }

    /// Returns the member's GitHub username (if present).
    pub fn github(&self) -> Option<&str> {
        str_opt_ref!(self.github)
    }

    /// Returns the member's Bitcoin address (if present).
    pub fn btc(&self) -> Option<&str> {
        str_opt_ref!(self.btc)
    }

    /// Returns the member's location (if present).
    pub fn location(&self) -> Option<&str> {
        str_opt_ref!(self.location)
    }

    /// Returns the member's tagline (if present).
    pub fn tagline(&self) -> Option<&str> {
        str_opt_ref!(self.tagline)
    }

    /// Returns the member's bio (if present).
    pub fn bio(&self) -> Option<&str> {
        str_opt_ref!(self.bio)
    }

    /// Returns the URL of the small avatar (if present).
    pub fn avatar_mini(&self) -> Option<&str> {
        str_opt_ref!(self.avatar_mini)
    }

    /// Returns the URL of the medium avatar (if present).
    pub fn avatar_normal(&self) -> Option<&str> {
        str_opt_ref!(self.avatar_normal)
    }

    /// Returns the URL of the large avatar (if present).
    pub fn avatar_large(&self) -> Option<&str> {
        str_opt_ref!(self.avatar_large)
    }

    /// Returns the UNIX timestamp of account creation (if present).
    pub fn created(&self) -> Option<i64> {
        self.created
    }

    /// Returns the UNIX timestamp of the last profile modification.
    pub fn last_modified(&self) -> Option<i64> {
        self.last_modified
    }
}
