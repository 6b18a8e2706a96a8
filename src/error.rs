use std::fmt::{Display, Formatter};

use reqwest::StatusCode;
use thiserror::Error;

use crate::client::RateLimit;

/// All errors that can be produced by the client.
///
/// Non-2xx statuses map onto dedicated variants so callers can branch on
/// the failure class instead of inspecting raw status codes. Every
/// status-mapped variant carries an [`ApiFailure`] with the original
/// status, the server's message when one was decodable, and the rate
/// limit counters from the failing response.
#[derive(Debug, Error)]
pub enum Error {
    /// An auth-required call was attempted without a token. Raised before
    /// any request is sent.
    #[error("no API token available; pass one explicitly or set V2EX_TOKEN")]
    MissingToken,

    /// The underlying HTTP client could not be constructed.
    #[error("could not start up the client")]
    ClientFormation(#[source] reqwest::Error),

    /// 401: the token is missing, invalid or expired. Retrying without a
    /// new token will not help.
    #[error("authentication failed: {0}")]
    Authentication(ApiFailure),

    /// 403: the token lacks permission for this resource.
    #[error("insufficient permission: {0}")]
    Authorization(ApiFailure),

    /// 404: the resource does not exist.
    #[error("resource not found: {0}")]
    NotFound(ApiFailure),

    /// 429: rate limit exceeded. The carried [`ApiFailure`] holds the
    /// window reset timestamp; callers should back off until then.
    #[error("rate limit exceeded: {0}")]
    RateLimited(ApiFailure),

    /// 5xx: transient server-side failure.
    #[error("server error: {0}")]
    Server(ApiFailure),

    /// Any other non-2xx status.
    #[error("unexpected status: {0}")]
    UnexpectedStatus(ApiFailure),

    /// A 2xx response whose envelope reported `success: false`.
    #[error("request rejected: {message}")]
    Rejected {
        /// The message from the response envelope.
        message: String,
        /// Rate limit counters read from the rejecting response.
        rate_limit: RateLimit,
    },

    /// A successful envelope arrived without its result payload.
    #[error("response envelope is missing its result payload")]
    MissingResult {
        /// Rate limit counters read from the response.
        rate_limit: RateLimit,
    },

    /// The request could not be completed at the transport level
    /// (connect failure, timeout, protocol error).
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// The response body did not match the expected JSON shape.
    #[error("malformed response body: {source}")]
    Decode {
        /// The underlying deserialization failure.
        #[source]
        source: serde_json::Error,
        /// Rate limit counters read from the undecodable response.
        rate_limit: RateLimit,
    },
}

impl Error {
    /// Returns the HTTP status this error was classified from, if any.
    pub fn status(&self) -> Option<StatusCode> {
        self.failure().map(|f| f.status)
    }

    /// Returns the rate limit counters of the failing response, if any.
    pub fn rate_limit(&self) -> Option<&RateLimit> {
        match self {
            Error::Rejected { rate_limit, .. }
            | Error::MissingResult { rate_limit }
            | Error::Decode { rate_limit, .. } => Some(rate_limit),
            _ => self.failure().map(|f| &f.rate_limit),
        }
    }

    fn failure(&self) -> Option<&ApiFailure> {
        match self {
            Error::Authentication(f)
            | Error::Authorization(f)
            | Error::NotFound(f)
            | Error::RateLimited(f)
            | Error::Server(f)
            | Error::UnexpectedStatus(f) => Some(f),
            _ => None,
        }
    }
}

/// Details of a request the API answered with a non-2xx status.
#[derive(Debug, Clone)]
pub struct ApiFailure {
    pub(crate) status: StatusCode,
    pub(crate) message: Option<String>,
    pub(crate) rate_limit: RateLimit,
}

impl ApiFailure {
    /// Returns the original HTTP status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns the message from the response envelope, if one decoded.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Returns the rate limit counters read from the failing response.
    pub fn rate_limit(&self) -> &RateLimit {
        &self.rate_limit
    }
}

impl Display for ApiFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.status)?;
        if let Some(message) = &self.message {
            write!(f, " ({message})")?;
        }
        if let Some(reset) = self.rate_limit.reset() {
            write!(f, ", window resets at {reset}")?;
        }
        Ok(())
    }
}
