pub mod classic;

/// Contains the [`Member`] profile model.
///
/// [`Member`]: crate::models::member::Member
pub mod member;

/// Contains the [`Node`] model.
///
/// [`Node`]: crate::models::node::Node
pub mod node;

/// Contains the [`Notification`] model.
///
/// [`Notification`]: crate::models::notification::Notification
pub mod notification;

/// Contains the [`Token`] introspection model.
///
/// [`Token`]: crate::models::token::Token
pub mod token;

/// Contains the [`Topic`] and [`TopicReply`] models.
///
/// [`Topic`]: crate::models::topic::Topic
/// [`TopicReply`]: crate::models::topic::TopicReply
pub mod topic;

use serde::Deserialize;

use crate::{client::RateLimit, error::Error, result::Result};

/// The `{success, message, result}` wrapper around every v2 payload.
///
/// The classic endpoints do not use it; their bodies decode directly.
/// A missing `result` field deserializes as `None` on its own; no
/// `default` attribute, as that would demand `T: Default`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Envelope<T> {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    result: Option<T>,
}

impl<T> Envelope<T> {
    /// Unwraps the payload of a fetch response.
    ///
    /// Failures keep the rate limit counters of the response they came
    /// from.
    pub(crate) fn into_result(self, rate_limit: &RateLimit) -> Result<T> {
        if !self.success {
            return Err(Error::Rejected {
                message: self.message.unwrap_or_else(|| {
                    String::from("no message in response envelope")
                }),
                rate_limit: rate_limit.clone(),
            });
        }
        self.result.ok_or_else(|| Error::MissingResult {
            rate_limit: rate_limit.clone(),
        })
    }

    /// Checks the `success` flag of a response that carries no payload.
    pub(crate) fn into_ack(self, rate_limit: &RateLimit) -> Result<()> {
        if self.success {
            Ok(())
        } else {
            Err(Error::Rejected {
                message: self.message.unwrap_or_else(|| {
                    String::from("no message in response envelope")
                }),
                rate_limit: rate_limit.clone(),
            })
        }
    }

    pub(crate) fn into_message(self) -> Option<String> {
        self.message
    }
}

pub(crate) mod macros {
    macro_rules! str_opt_ref {
        ($x:expr) => {
            $x.as_ref().map(|x| x.as_ref())
        };
    }

    pub(crate) use str_opt_ref;
}
