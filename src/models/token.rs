use serde::{Deserialize, Serialize};

use crate::models::macros::str_opt_ref;

/// Introspection data for the token used to authenticate the request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    /// The token string itself.
    token: String,

    /// The scope the token was created with (e.g. `everything`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    scope: Option<String>,

    /// Lifetime of the token in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    expiration: Option<u64>,

    /// Lifetime of the token in days.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    good_for_days: Option<u32>,

    /// Number of times the token has been used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    total_used: Option<u64>,

    /// UNIX timestamp (seconds since epoch) of the token's last use.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_used: Option<i64>,

    /// UNIX timestamp (seconds since epoch) of token creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    created: Option<i64>,
}

impl Token {
    /// Returns the token string.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the scope the token was created with (if present).
    pub fn scope(&self) -> Option<&str> {
        str_opt_ref!(self.scope)
    }

    /// Returns the lifetime of the token in seconds (if present).
    pub fn expiration(&self) -> Option<u64> {
        self.expiration
    }

    /// Returns the lifetime of the token in days (if present).
    pub fn good_for_days(&self) -> Option<u32> {
        self.good_for_days
    }

    /// Returns the number of times the token has been used (if present).
    pub fn total_used(&self) -> Option<u64> {
        self.total_used
    }

    /// Returns the UNIX timestamp of the token's last use (if present).
    pub fn last_used(&self) -> Option<i64> {
        self.last_used
    }

    /// Returns the UNIX timestamp of token creation (if present).
    pub fn created(&self) -> Option<i64> {
        self.created
    }
}
