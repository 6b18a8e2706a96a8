#![deny(clippy::all, clippy::pedantic)]
#![deny(missing_docs)]
#![allow(clippy::must_use_candidate, clippy::module_name_repetitions)]
//! # v2ex
//!
//! v2ex is a convenient wrapper library around the V2EX forum's REST API.
//!
//! This library can fetch:
//! - [`Notification`]s, with deletion support
//! - [`Member`] and [`Token`] details for the active token
//! - [`Node`]s and their [`Topic`]s, along with topic [`TopicReply`] lists
//! - Hot and latest topics from the unauthenticated classic API
//!
//! While handling:
//! - `Authorization: Bearer` credentials, taken explicitly or from the
//!   `V2EX_TOKEN` environment variable.
//! - The `{success, message, result}` response envelope of the v2 API and
//!   the bare-array responses of the classic API.
//! - `X-Rate-Limit-*` headers, surfaced on every [`Reply`] and on rate
//!   limit errors.
//!
//! The client never retries, caches, or backs off on its own; those are
//! caller-side policies.
//!
//! ## Example: Printing the title of a node.
//!
//! ```no_run
//! use v2ex::Client;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), v2ex::Error> {
//!     let client = Client::from_env()?;
//!     let node = client.node("programmer").await?;
//!
//!     println!("{}: {} topics", node.title(), node.topics());
//!     if let Some(remaining) = node.rate_limit().remaining() {
//!         println!("{remaining} requests left in this window");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! [`Notification`]: crate::models::notification::Notification
//! [`Member`]:       crate::models::member::Member
//! [`Token`]:        crate::models::token::Token
//! [`Node`]:         crate::models::node::Node
//! [`Topic`]:        crate::models::topic::Topic
//! [`TopicReply`]:   crate::models::topic::TopicReply

/// Client module contains [`Client`] for requesting data.
pub mod client;

/// Contains [`Error`]s that can be thrown by the library.
///
/// [`Error`]: crate::error::Error
pub mod error;

pub(crate) mod models;

pub(crate) mod result;

pub use client::{Client, ClientBuilder, RateLimit, Reply};
pub use error::{ApiFailure, Error};
pub use models::*;
