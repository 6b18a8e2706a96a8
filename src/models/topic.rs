use serde::{Deserialize, Serialize};

use crate::models::{macros::str_opt_ref, member::Member, node::Node};

/// A discussion thread belonging to a node.
///
/// The topic detail endpoint embeds the author and the node; the node
/// topic listing omits both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topic {
    /// The numeric topic ID.
    id: u64,

    /// The title of the topic.
    title: String,

    /// The raw content of the opening post.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    content: Option<String>,

    /// The rendered content of the opening post.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    content_rendered: Option<String>,

    /// Markup syntax of the content: 0 for default, 1 for Markdown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    syntax: Option<u8>,

    /// URL of the topic's page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    url: Option<String>,

    /// Number of replies to the topic.
    #[serde(default)]
    replies: u32,

    /// Username of the member who replied last.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_reply_by: Option<String>,

    /// UNIX timestamp (seconds since epoch) of topic creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    created: Option<i64>,

    /// UNIX timestamp of the last topic modification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_modified: Option<i64>,

    /// UNIX timestamp of the last activity on the topic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_touched: Option<i64>,

    /// The member who opened the topic. Detail endpoint only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    member: Option<Member>,

    /// The node the topic belongs to. Detail endpoint only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    node: Option<Node>,
}

impl Topic {
    /// Returns the numeric topic ID.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the title of the topic.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the raw content of the opening post (if present).
    pub fn content(&self) -> Option<&str> {
        str_opt_ref!(self.content)
    }

    /// Returns the rendered content of the opening post (if present).
    pub fn content_rendered(&self) -> Option<&str> {
        str_opt_ref!(self.content_rendered)
    }

    /// Returns the markup syntax of the content (if present).
    pub fn syntax(&self) -> Option<u8> {
        self.syntax
    }

    /// Returns the URL of the topic's page (if present).
    pub fn url(&self) -> Option<&str> {
        str_opt_ref!(self.url)
    }

    /// Returns the number of replies to the topic.
    pub fn replies(&self) -> u32 {
        self.replies
    }

    /// Returns the username of the member who replied last (if present).
    pub fn last_reply_by(&self) -> Option<&str> {
        str_opt_ref!(self.last_reply_by)
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

    /// Returns the member who opened the topic (detail endpoint only).
    pub fn member(&self) -> Option<&Member> {
        self.member.as_ref()
    }

    /// Returns the node the topic belongs to (detail endpoint only).
    pub fn node(&self) -> Option<&Node> {
        self.node.as_ref()
    }
}

/// A single reply within a topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicReply {
    /// The numeric reply ID.
    id: u64,

    /// The raw content of the reply.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    content: Option<String>,

    /// The rendered content of the reply.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    content_rendered: Option<String>,

    /// UNIX timestamp (seconds since epoch) of reply creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    created: Option<i64>,

    /// The member who wrote the reply.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    member: Option<Member>,
}

impl TopicReply {
    /// Returns the numeric reply ID.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the raw content of the reply (if present).
    pub fn content(&self) -> Option<&str> {
        str_opt_ref!(self.content)
    }

    /// Returns the rendered content of the reply (if present).
    pub fn content_rendered(&self) -> Option<&str> {
        str_opt_ref!(self.content_rendered)
    }

    /// Returns the UNIX timestamp of reply creation (if present).
    pub fn created(&self) -> Option<i64> {
        self.created
    }

    /// Returns the member who wrote the reply (if present).
    pub fn member(&self) -> Option<&Member> {
        self.member.as_ref()
    }
}
