use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::api_models::{Clan, ClientError, Player};
use crate::config::Config;
use crate::decode::{self, ModelError};

pub const API_BASE_URL: &str = "https://api.clashofclans.com/v1";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("No API token was provided")]
    NoTokens,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Bad request: {}", reason(.0))]
    BadRequest(Option<ClientError>),

    /// Invalid token, or a token not allowed from the caller's IP.
    #[error("Access denied: {}", reason(.0))]
    AccessDenied(Option<ClientError>),

    #[error("Resource not found: {}", reason(.0))]
    NotFound(Option<ClientError>),

    #[error("Request was throttled: {}", reason(.0))]
    RateLimited(Option<ClientError>),

    #[error("API is under maintenance: {}", reason(.0))]
    Maintenance(Option<ClientError>),

    #[error("Unexpected status {status}: {}", reason(.body))]
    Unknown {
        status: u16,
        body: Option<ClientError>,
    },

    #[error("Could not decode response: {0}")]
    Decode(#[from] ModelError),
}

fn reason(body: &Option<ClientError>) -> &str {
    body.as_ref()
        .and_then(ClientError::reason)
        .unwrap_or("no reason given")
}

impl ApiError {
    fn from_status(status: StatusCode, body: &str) -> Self {
        // The error body is informative only; a body that does not decode is dropped.
        let body = decode::from_str::<ClientError>(body).ok();

        match status {
            StatusCode::BAD_REQUEST => ApiError::BadRequest(body),
            StatusCode::FORBIDDEN => ApiError::AccessDenied(body),
            StatusCode::NOT_FOUND => ApiError::NotFound(body),
            StatusCode::TOO_MANY_REQUESTS => ApiError::RateLimited(body),
            StatusCode::SERVICE_UNAVAILABLE => ApiError::Maintenance(body),
            status => ApiError::Unknown {
                status: status.as_u16(),
                body,
            },
        }
    }
}

/// API tokens used in turn, one per request.
///
/// Clones share the rotation index.
#[derive(Clone, Debug)]
pub struct TokenList {
    tokens: Arc<[String]>,
    next: Arc<AtomicUsize>,
}

impl TokenList {
    /// Blank tokens are skipped. Fails if no token is left.
    pub fn new<I, S>(tokens: I) -> Result<Self, ApiError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens: Arc<[String]> = tokens
            .into_iter()
            .map(|token| {
                let token: String = token.into();
                token.trim().to_string()
            })
            .filter(|token| !token.is_empty())
            .collect();

        if tokens.is_empty() {
            return Err(ApiError::NoTokens);
        }

        Ok(TokenList {
            tokens,
            next: Arc::new(AtomicUsize::new(0)),
        })
    }

    /// Returns the next token, wrapping around after the last one.
    pub fn get(&self) -> &str {
        let index = self.next.fetch_add(1, Ordering::Relaxed) % self.tokens.len();
        &self.tokens[index]
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Async client for the Clash of Clans API.
#[derive(Clone, Debug)]
pub struct ClashClient {
    client: Client,
    base_url: String,
    tokens: TokenList,
}

impl ClashClient {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        Self::with_tokens(&config.api_url, config.api_keys.iter().cloned())
    }

    /// Builds a client against `base_url`, e.g. [`API_BASE_URL`].
    pub fn with_tokens<I, S>(base_url: &str, tokens: I) -> Result<Self, ApiError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens = TokenList::new(tokens)?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder().default_headers(headers).build()?;

        Ok(ClashClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            tokens,
        })
    }

    /// Fetches the profile of a player. The tag may include its leading '#'.
    pub async fn get_player(&self, player_tag: &str) -> Result<Player, ApiError> {
        self.get(&format!("/players/{}", encode_tag(player_tag)))
            .await
    }

    /// Fetches the profile of a clan, member list included.
    pub async fn get_clan(&self, clan_tag: &str) -> Result<Clan, ApiError> {
        self.get(&format!("/clans/{}", encode_tag(clan_tag))).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request_url = format!("{}{}", self.base_url, path);
        debug!("Fetching data from: {}", request_url);

        let response = self
            .client
            .get(&request_url)
            .bearer_auth(self.tokens.get())
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            debug!("{} answered {}", request_url, status);
            return Err(ApiError::from_status(status, &body));
        }

        Ok(decode::from_str(&body)?)
    }
}

/// Tags in the URL must be URL-encoded, the '#' in particular becomes '%23'.
fn encode_tag(tag: &str) -> String {
    tag.trim().replace('#', "%23")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_rotate() {
        let tokens = TokenList::new(["a", " ", "b"]).unwrap();
        assert_eq!(tokens.len(), 2);

        let shared = tokens.clone();
        assert_eq!(tokens.get(), "a");
        assert_eq!(shared.get(), "b");
        assert_eq!(tokens.get(), "a");
    }

    #[test]
    fn no_tokens() {
        assert!(matches!(
            TokenList::new(Vec::<String>::new()),
            Err(ApiError::NoTokens)
        ));
        assert!(matches!(
            ClashClient::with_tokens(API_BASE_URL, [""]),
            Err(ApiError::NoTokens)
        ));
    }

    #[test]
    fn tag_encoding() {
        assert_eq!(encode_tag("#2PP"), "%232PP");
        assert_eq!(encode_tag(" #QL9 "), "%23QL9");
    }

    #[test]
    fn status_mapping() {
        let err = ApiError::from_status(StatusCode::NOT_FOUND, r#"{"reason":"notFound"}"#);
        assert!(matches!(&err, ApiError::NotFound(Some(body)) if body.reason() == Some("notFound")));
        assert_eq!(err.to_string(), "Resource not found: notFound");

        let err = ApiError::from_status(StatusCode::SERVICE_UNAVAILABLE, "<html>");
        assert!(matches!(err, ApiError::Maintenance(None)));

        let err = ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR, "");
        assert!(matches!(err, ApiError::Unknown { status: 500, body: None }));
    }
}
