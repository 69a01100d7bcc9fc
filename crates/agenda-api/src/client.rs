// Async HTTP client for the Voice Agenda analytics API.
//
// One unauthenticated GET per call: no retry, no caching, no query
// parameters. Paths are appended to the configured base URL, so a base of
// `https://host/backend` sends `/api/kpis` to `https://host/backend/api/kpis`.

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::Error;
use crate::endpoints::{self, Endpoint};
use crate::transport::TransportConfig;
use crate::types::HealthResponse;

/// Longest body excerpt embedded in an error message.
const PREVIEW_LEN: usize = 200;

// ── Client ───────────────────────────────────────────────────────────

/// Async client for the analytics backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    // ── Constructors ─────────────────────────────────────────────────

    /// Build from a base URL and transport config.
    pub fn new(base_url: &str, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Self::from_reqwest(base_url, http)
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        let base_url = Self::normalize_base_url(base_url)?;
        Ok(Self { http, base_url })
    }

    /// Ensure the base path ends with `/` so relative joins append to it.
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;
        let path = url.path().trim_end_matches('/').to_owned();
        url.set_path(&format!("{path}/"));
        url.set_query(None);
        url.set_fragment(None);
        Ok(url)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Append an absolute API path (e.g. `"/api/kpis"`) to the base URL.
    pub fn url(&self, path: &str) -> Result<Url, Error> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    // ── Requests ─────────────────────────────────────────────────────

    /// GET `path` and parse the body as untyped JSON.
    pub async fn fetch_json(&self, path: &str) -> Result<Value, Error> {
        let url = self.url(path)?;
        debug!("GET {url}");

        let resp = self.http.get(url).send().await?;
        Self::handle_response(resp).await
    }

    /// GET an endpoint and deserialize it into its response type.
    ///
    /// Malformed JSON is an [`Error::Parse`]; valid JSON with missing or
    /// mistyped fields is an [`Error::Shape`].
    pub async fn get<E: Endpoint>(&self) -> Result<E::Response, Error> {
        let value = self.fetch_json(E::PATH).await?;
        E::Response::deserialize(&value).map_err(|e| {
            let body = value.to_string();
            Error::Shape {
                message: format!("{}: {e} (body preview: {:?})", E::PATH, preview(&body)),
                body,
            }
        })
    }

    /// Probe `GET /api/health`.
    pub async fn health(&self) -> Result<HealthResponse, Error> {
        self.get::<endpoints::Health>().await
    }

    // ── Response handling ────────────────────────────────────────────

    async fn handle_response(resp: reqwest::Response) -> Result<Value, Error> {
        let status = resp.status();
        debug!(status = status.as_u16(), "response");

        let body = resp.text().await?;
        if !status.is_success() {
            return Err(Error::Http {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| Error::Parse {
            message: format!("{e} (body preview: {:?})", preview(&body)),
            body,
        })
    }
}

/// First `PREVIEW_LEN` bytes of `body`, cut on a char boundary.
fn preview(body: &str) -> &str {
    if body.len() <= PREVIEW_LEN {
        return body;
    }
    let mut end = PREVIEW_LEN;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}
