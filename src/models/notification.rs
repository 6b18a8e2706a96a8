use serde::{Deserialize, Serialize};

use crate::models::macros::str_opt_ref;

/// A notification addressed to the member owning the current token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    /// The numeric notification ID.
    id: u64,

    /// The ID of the member that triggered the notification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    member_id: Option<u64>,

    /// The ID of the member the notification is for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    for_member_id: Option<u64>,

    /// The notification text, in HTML-escaped format.
    text: String,

    /// The raw payload of the notification, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    payload: Option<String>,

    /// The rendered payload of the notification, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    payload_rendered: Option<String>,

    /// UNIX timestamp (seconds since epoch) of notification creation.
    created: i64,
}

impl Notification {
    /// Returns the numeric notification ID.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the ID of the member that triggered the notification.
    pub fn member_id(&self) -> Option<u64> {
        self.member_id
    }

    /// Returns the ID of the member the notification is for.
    pub fn for_member_id(&self) -> Option<u64> {
        self.for_member_id
    }

    /// Returns the notification text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the raw payload (if present).
    pub fn payload(&self) -> Option<&str> {
        str_opt_ref!(self.payload)
    }

    /// Returns the rendered payload (if present).
    pub fn payload_rendered(&self) -> Option<&str> {
        str_opt_ref!(self.payload_rendered)
    }

    /// Returns the UNIX timestamp when the notification was created.
    pub fn created(&self) -> i64 {
        self.created
    }
}
