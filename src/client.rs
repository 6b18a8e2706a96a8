use std::{env, ops::Deref, str::FromStr, time::Duration};

use reqwest::{header::HeaderMap, Client as ReqwestClient, StatusCode};
use serde::de::DeserializeOwned;

use crate::{
    error::{ApiFailure, Error},
    models::{
        classic::ClassicTopic,
        member::Member,
        node::Node,
        notification::Notification,
        token::Token,
        topic::{Topic, TopicReply},
        Envelope,
    },
    result::Result,
};

const API_BASE: &str = "https://www.v2ex.com/api/v2";
const CLASSIC_BASE: &str = "https://www.v2ex.com/api";
const TOKEN_VAR: &str = "V2EX_TOKEN";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_USER_AGENT: &str = "V2exClient/1.0";

/// The main end user interface to the V2EX API.
///
/// Holds the HTTP transport, the base URLs of both API generations and an
/// optional bearer token. The client is immutable after construction and
/// can be shared freely between tasks. Construction never performs
/// network I/O.
#[derive(Debug)]
pub struct Client {
    http: ReqwestClient,
    token: Option<String>,
    api_base: String,
    classic_base: String,
}

impl Client {
    /// Starts building a client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Constructs a client authenticated with the given token.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::builder().token(token).build()
    }

    /// Constructs a client, taking the token from the `V2EX_TOKEN`
    /// environment variable if it is set.
    ///
    /// A missing variable is not an error here; calls that require
    /// authentication will fail with [`Error::MissingToken`] instead.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn from_env() -> Result<Self> {
        let mut builder = Self::builder();
        if let Ok(token) = env::var(TOKEN_VAR) {
            builder = builder.token(token);
        }
        builder.build()
    }

    /// Constructs a client without credentials.
    ///
    /// Only the classic endpoints ([`hot_topics`] and [`latest_topics`])
    /// are usable on such a client.
    ///
    /// [`hot_topics`]: Client::hot_topics
    /// [`latest_topics`]: Client::latest_topics
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn anonymous() -> Result<Self> {
        Self::builder().build()
    }

    /// Fetches a page of the current member's notifications.
    ///
    /// Pages start at 1.
    ///
    /// # Errors
    ///
    /// Returns an error if no token is held, the request fails, or the
    /// response cannot be decoded.
    pub async fn notifications(&self, page: u32) -> Result<Reply<Vec<Notification>>> {
        self.get_v2("notifications", Some(page)).await
    }

    /// Deletes a notification by its id.
    ///
    /// Deleting an id that does not exist fails with [`Error::NotFound`].
    ///
    /// # Errors
    ///
    /// Returns an error if no token is held, the request fails, or the
    /// API rejects the deletion.
    pub async fn delete_notification(&self, id: u64) -> Result<Reply<()>> {
        self.delete_v2(&format!("notifications/{id}")).await
    }

    /// Fetches the profile of the member owning the current token.
    ///
    /// # Errors
    ///
    /// Returns an error if no token is held, the request fails, or the
    /// response cannot be decoded.
    pub async fn member(&self) -> Result<Reply<Member>> {
        self.get_v2("member", None).await
    }

    /// Introspects the current token.
    ///
    /// # Errors
    ///
    /// Returns an error if no token is held, the request fails, or the
    /// response cannot be decoded.
    pub async fn token(&self) -> Result<Reply<Token>> {
        self.get_v2("token", None).await
    }

    /// Fetches a node by its short name.
    ///
    /// # Errors
    ///
    /// Returns an error if no token is held, the node does not exist,
    /// the request fails, or the response cannot be decoded.
    pub async fn node(&self, name: &str) -> Result<Reply<Node>> {
        self.get_v2(&format!("nodes/{name}"), None).await
    }

    /// Fetches a page of a node's topics.
    ///
    /// Pages start at 1.
    ///
    /// # Errors
    ///
    /// Returns an error if no token is held, the node does not exist,
    /// the request fails, or the response cannot be decoded.
    pub async fn node_topics(&self, name: &str, page: u32) -> Result<Reply<Vec<Topic>>> {
        self.get_v2(&format!("nodes/{name}/topics"), Some(page)).await
    }

    /// Fetches a topic by its id.
    ///
    /// # Errors
    ///
    /// Returns an error if no token is held, the topic does not exist,
    /// the request fails, or the response cannot be decoded.
    pub async fn topic(&self, id: u64) -> Result<Reply<Topic>> {
        self.get_v2(&format!("topics/{id}"), None).await
    }

    /// Fetches a page of a topic's replies.
    ///
    /// Pages start at 1.
    ///
    /// # Errors
    ///
    /// Returns an error if no token is held, the topic does not exist,
    /// the request fails, or the response cannot be decoded.
    pub async fn topic_replies(&self, id: u64, page: u32) -> Result<Reply<Vec<TopicReply>>> {
        self.get_v2(&format!("topics/{id}/replies"), Some(page)).await
    }

    /// Fetches the current hot topics from the classic API.
    ///
    /// No credentials are sent; the response is a bare array.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// decoded.
    pub async fn hot_topics(&self) -> Result<Reply<Vec<ClassicTopic>>> {
        self.get_classic("topics/hot.json").await
    }

    /// Fetches the latest topics from the classic API.
    ///
    /// No credentials are sent; the response is a bare array.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// decoded.
    pub async fn latest_topics(&self) -> Result<Reply<Vec<ClassicTopic>>> {
        self.get_classic("topics/latest.json").await
    }

    fn bearer(&self) -> Result<&str> {
        self.token.as_deref().ok_or(Error::MissingToken)
    }

    async fn get_v2<T>(&self, path: &str, page: Option<u32>) -> Result<Reply<T>>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}/{path}", self.api_base);
        let token = self.bearer()?;
        let mut builder = self.http.get(&url).bearer_auth(token);
        if let Some(page) = page {
            builder = builder.query(&[("p", page)]);
        }
        log::info!("request for {url} dispatched");
        let response = builder.send().await?;

        let status = response.status();
        let rate_limit = RateLimit::from_headers(response.headers());
        let body = response.bytes().await?;
        log::debug!("response status for {url}: {status}");

        if !status.is_success() {
            return Err(classify(status, rate_limit, &body));
        }
        let envelope: Envelope<T> = decode(&body, &rate_limit)?;
        let inner = envelope.into_result(&rate_limit)?;
        Ok(Reply { inner, rate_limit })
    }

    async fn delete_v2(&self, path: &str) -> Result<Reply<()>> {
        let url = format!("{}/{path}", self.api_base);
        let token = self.bearer()?;
        log::info!("delete request for {url} dispatched");
        let response = self.http.delete(&url).bearer_auth(token).send().await?;

        let status = response.status();
        let rate_limit = RateLimit::from_headers(response.headers());
        let body = response.bytes().await?;
        log::debug!("response status for {url}: {status}");

        if !status.is_success() {
            return Err(classify(status, rate_limit, &body));
        }
        // deletion acknowledgements carry no result payload
        let envelope: Envelope<serde_json::Value> = decode(&body, &rate_limit)?;
        envelope.into_ack(&rate_limit)?;
        Ok(Reply {
            inner: (),
            rate_limit,
        })
    }

    async fn get_classic<T>(&self, path: &str) -> Result<Reply<T>>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}/{path}", self.classic_base);
        log::info!("request for {url} dispatched");
        let response = self.http.get(&url).send().await?;

        let status = response.status();
        let rate_limit = RateLimit::from_headers(response.headers());
        let body = response.bytes().await?;
        log::debug!("response status for {url}: {status}");

        if !status.is_success() {
            return Err(classify(status, rate_limit, &body));
        }
        let inner = decode(&body, &rate_limit)?;
        Ok(Reply { inner, rate_limit })
    }
}

/// Decodes a 2xx body, keeping the response's rate limit counters on
/// the error when the shape does not match.
fn decode<T: DeserializeOwned>(body: &[u8], rate_limit: &RateLimit) -> Result<T> {
    serde_json::from_slice(body).map_err(|source| Error::Decode {
        source,
        rate_limit: rate_limit.clone(),
    })
}

fn classify(status: StatusCode, rate_limit: RateLimit, body: &[u8]) -> Error {
    // failure bodies are usually enveloped, but not reliably so
    let message = serde_json::from_slice::<Envelope<serde_json::Value>>(body)
        .ok()
        .and_then(Envelope::into_message);
    let failure = ApiFailure {
        status,
        message,
        rate_limit,
    };
    match status {
        StatusCode::UNAUTHORIZED => Error::Authentication(failure),
        StatusCode::FORBIDDEN => Error::Authorization(failure),
        StatusCode::NOT_FOUND => Error::NotFound(failure),
        StatusCode::TOO_MANY_REQUESTS => Error::RateLimited(failure),
        code if code.is_server_error() => Error::Server(failure),
        _ => Error::UnexpectedStatus(failure),
    }
}

/// Builder for [`Client`].
#[derive(Debug)]
pub struct ClientBuilder {
    token: Option<String>,
    api_base: String,
    classic_base: String,
    timeout: Duration,
    user_agent: String,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self {
            token: None,
            api_base: API_BASE.to_string(),
            classic_base: CLASSIC_BASE.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientBuilder {
    /// Sets the bearer token used on v2 calls.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Overrides the v2 API base URL.
    pub fn api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    /// Overrides the classic API base URL.
    pub fn classic_base(mut self, base: impl Into<String>) -> Self {
        self.classic_base = base.into();
        self
    }

    /// Sets the per-request timeout. Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the `User-Agent` header sent with every request.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }

    /// Builds the [`Client`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::ClientFormation`] if the underlying HTTP client
    /// cannot be constructed.
    pub fn build(self) -> Result<Client> {
        let http = ReqwestClient::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent)
            .build()
            .map_err(Error::ClientFormation)?;

        Ok(Client {
            http,
            token: self.token,
            api_base: trim_base(&self.api_base),
            classic_base: trim_base(&self.classic_base),
        })
    }
}

fn trim_base(base: &str) -> String {
    base.trim_end_matches('/').to_string()
}

/// A successful response: the decoded payload together with the rate
/// limit counters read from that response's headers.
///
/// Dereferences to the payload.
#[derive(Debug, Clone)]
pub struct Reply<T> {
    inner: T,
    rate_limit: RateLimit,
}

impl<T> Reply<T> {
    /// Returns the rate limit counters of this response.
    pub fn rate_limit(&self) -> &RateLimit {
        &self.rate_limit
    }

    /// Consumes the reply, returning the payload.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T> Deref for Reply<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

/// Rate limit counters read from the `X-Rate-Limit-*` response headers.
///
/// Every field is optional: classic responses do not carry the headers,
/// and CDN-served responses do not decrement `remaining`, so callers
/// must not assume a monotonic decrease per call.
#[derive(Debug, Clone, Default)]
pub struct RateLimit {
    limit: Option<u32>,
    remaining: Option<u32>,
    reset: Option<u64>,
}

impl RateLimit {
    pub(crate) fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            limit: header_num(headers, "x-rate-limit-limit"),
            remaining: header_num(headers, "x-rate-limit-remaining"),
            reset: header_num(headers, "x-rate-limit-reset"),
        }
    }

    /// Returns the total number of requests allowed in the window.
    pub fn limit(&self) -> Option<u32> {
        self.limit
    }

    /// Returns the number of requests left in the window.
    pub fn remaining(&self) -> Option<u32> {
        self.remaining
    }

    /// Returns the Unix timestamp at which the window resets.
    pub fn reset(&self) -> Option<u64> {
        self.reset
    }
}

fn header_num<N: FromStr>(headers: &HeaderMap, name: &str) -> Option<N> {
    headers.get(name)?.to_str().ok()?.trim().parse().ok()
}
