use serde::{Deserialize, Serialize};

use crate::models::macros::str_opt_ref;

/// A topical forum category on V2EX, identified by a short name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// The numeric node ID.
    id: u64,

    /// The short name of the node (e.g. `programmer`).
    name: String,

    /// The readable title of the node.
    title: String,

    /// URL of the node's page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    url: Option<String>,

    /// Text shown above the node's topic list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    header: Option<String>,

    /// Text shown below the node's topic list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    footer: Option<String>,

    /// URL of the node's avatar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    avatar: Option<String>,

    /// Number of topics in the node.
    #[serde(default)]
    topics: u64,

    /// UNIX timestamp (seconds since epoch) of node creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    created: Option<i64>,

    /// UNIX timestamp of the last node modification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_modified: Option<i64>,
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Node {
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

    /// Returns the text shown above the node's topic list (if present).
    pub fn header(&self) -> Option<&str> {
        str_opt_ref!(self.header)
    }

    /// Returns the text shown below the node's topic list (if present).
    pub fn footer(&self) -> Option<&str> {
        str_opt_ref!(self.footer)
    }

    /// Returns the URL of the node's avatar (if present).
    pub fn avatar(&self) -> Option<&str> {
        str_opt_ref!(self.avatar)
    }

    /// Returns the number of topics in the node.
    pub fn topics(&self) -> u64 {
        self.topics
    }

    /// Returns the UNIX timestamp of node creation (if present).
    pub fn created(&self) -> Option<i64> {
        self.created
    }

    /// Returns the UNIX timestamp of the last node modification.
    pub fn last_modified(&self) -> Option<i64> {
        self.last_modified
    }
}
