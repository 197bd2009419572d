use chrono::Utc;
use reqwest::{Client, StatusCode, Url, header};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::{config::Credentials, sign};

/// Production gateway for the bike open-data resources.
pub const DEFAULT_BASE_URL: &str = "https://ptx.transportdata.tw/MOTC/v2/Bike/";

/// A data fetch that did not produce usable records.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid request path {path:?}: {detail}")]
    Path { path: String, detail: String },

    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} failed with status {status}: {body}")]
    Http { url: String, status: StatusCode, body: String },

    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Authenticated GET client bound to one gateway base URL.
#[derive(Debug, Clone)]
pub struct BikeClient {
    credentials: Credentials,
    base_url: Url,
    http: Client,
}

impl BikeClient {
    pub fn new(credentials: Credentials) -> Self {
        let base_url = Url::parse(DEFAULT_BASE_URL).expect("default base URL is well-formed");
        Self::with_base_url(credentials, base_url)
    }

    /// Point the client at a different gateway, e.g. a local test server.
    /// `base_url` should end in `/` so relative paths append to it.
    pub fn with_base_url(credentials: Credentials, base_url: Url) -> Self {
        Self { credentials, base_url, http: Client::new() }
    }

    /// GET `path` relative to the base URL and decode the JSON body.
    ///
    /// The authorization header is signed from the wall clock on every call.
    /// The gateway rejects signatures older than its signing window, so a
    /// header minted once at construction time would go stale between calls.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = self.base_url.join(path).map_err(|e| FetchError::Path {
            path: path.to_string(),
            detail: e.to_string(),
        })?;

        let auth = sign::auth_header(&self.credentials, Utc::now());

        let res = self
            .http
            .get(url.clone())
            .header(header::AUTHORIZATION, auth.authorization)
            .header("X-Date", auth.x_date)
            .send()
            .await
            .map_err(|source| FetchError::Network { url: url.to_string(), source })?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|source| FetchError::Network { url: url.to_string(), source })?;

        if !status.is_success() {
            return Err(FetchError::Http {
                url: url.to_string(),
                status,
                body: truncate_body(&body),
            });
        }

        serde_json::from_str(&body)
            .map_err(|source| FetchError::Decode { url: url.to_string(), source })
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        // Back off to a char boundary; the gateway serves multibyte
        // Chinese-language error bodies.
        let mut cut = MAX;
        while !body.is_char_boundary(cut) {
            cut -= 1;
        }
        format!("{}...", &body[..cut])
    } else {
        body.to_string()
    }
}
