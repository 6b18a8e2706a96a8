//! Models for the classic API's hot and latest topic listings.
//!
//! The classic endpoints predate the v2 API: they require no
//! credentials, return a bare JSON array instead of an envelope, and
//! embed the author and node inline with slightly different shapes than
//! their v2 counterparts.

use serde::{Deserialize, Serialize};

use crate::models::macros::str_opt_ref;

/// A topic as returned by the classic hot/latest listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassicTopic {
    /// The numeric topic ID.
    id: u64,

    /// The title of the topic.
    title: String,

    /// URL of the topic's page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    url: Option<String>,

    /// The raw content of the opening post.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    content: Option<String>,

    /// The rendered content of the opening post.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    content_rendered: Option<String>,

    /// Number of replies to the topic.
    #[serde(default)]
    replies: u32,

    /// The member who opened the topic.
    member: ClassicMember,

    /// The node the topic belongs to.
    node: ClassicNode,

    /// UNIX timestamp (seconds since epoch) of topic creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    created: Option<i64>,

    /// UNIX timestamp of the last topic modification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_modified: Option<i64>,

    /// UNIX timestamp of the last activity on the topic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_touched: Option<i64>,
}

impl ClassicTopic {
    /// Returns the numeric topic ID.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the title of the topic.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the URL of the topic's page (if present).
    pub fn url(&self) -> Option<&str> {
        str_opt_ref!(self.url)
    }

    /// Returns the raw content of the opening post (if present).
    pub fn content(&self) -> Option<&str> {
        str_opt_ref!(self.content)
    }

    /// Returns the rendered content of the opening post (if present).
    pub fn content_rendered(&self) -> Option<&str> {
        str_opt_ref!(self.content_rendered)
    }

    /// Returns the number of replies to the topic.
    pub fn replies(&self) -> u32 {
        self.replies
    }

    /// Returns the member who opened the topic.
    pub fn member(&self) -> &ClassicMember {
        &self.member
    }

    /// Returns the node the topic belongs to.
    pub fn node(&self) -> &ClassicNode {
        &self.node
    }

    /// Returns the UNIX timestamp of topic creation (if present).
    pub fn created(&self) -> Option<i64> {
        self.created
    }

    /// Returns the UNIX timestamp of the last topic modification.
    pub fn last_modified(&self) -> Option<i64> {
        self.last_modified
    }

    /// Returns the UNIX timestamp of the last activity on the topic.
    pub fn last_touched(&self) -> Option<i64> {
        self.last_touched
    }
}

/// The author embedded in a classic topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassicMember {
    /// The numeric member ID.
    id: u64,

    /// The member's username.
    username: String,

    /// URL of the member's profile page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    url: Option<String>,

    /// URL of the member's medium avatar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    avatar_normal: Option<String>,
}

impl ClassicMember {
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

    /// Returns the URL of the member's medium avatar (if present).
    pub fn avatar_normal(&self) -> Option<&str> {
        str_opt_ref!(self.avatar_normal)
    }
}

/// The node embedded in a classic topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassicNode {
    /// The numeric node ID.
    id: u64,

    /// The short name of the node.
    name: String,

    /// The readable title of the node.
    title: String,

    /// URL of the node's page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    url: Option<String>,

    /// Number of topics in the node.
    #[serde(default)]
    topics: u64,
}

impl ClassicNode {
    /// Returns the numeric node ID.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the short name of the node.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the readable title of the node.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the URL of the node's page (if present).
    pub fn url(&self) -> Option<&str> {
        str_opt_ref!(self.url)
    }

    /// Returns the number of topics in the node.
    pub fn topics(&self) -> u64 {
        self.topics
    }
}
