//! Session endpoint access and the load-on-mount identity contract.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use reqwest::Client;

use crate::error::SessionError;
use crate::identity::{IdentitySnapshot, MeResponse};

/// Path of the session identity endpoint.
pub const ME_PATH: &str = "/api/me";

/// Path of the logout endpoint.
pub const LOGOUT_PATH: &str = "/api/logout";

/// Calls the sidebar makes against the application server.
#[async_trait]
pub trait SessionApi: Send + Sync {
    /// Fetches the identity behind the current session.
    async fn fetch_identity(&self) -> Result<MeResponse, SessionError>;

    /// Ends the current session. The response body is ignored.
    async fn log_out(&self) -> Result<(), SessionError>;
}

/// [`SessionApi`] over HTTP.
#[derive(Clone, Debug)]
pub struct HttpSessionClient {
    client: Client,
    base_url: String,
}

impl HttpSessionClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, SessionError> {
        let client = Client::builder().timeout(Duration::from_secs(15)).build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Uses an already configured `reqwest` client.
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn get_uncached(&self, path: &str) -> Result<reqwest::Response, SessionError> {
        let url = self.endpoint(path);
        let response = self
            .client
            .get(&url)
            .header(CACHE_CONTROL, "no-store")
            .header(PRAGMA, "no-cache")
            .send()
            .await
            .inspect_err(|e| tracing::debug!(%url, error = %e, "session request failed"))?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(%url, status = status.as_u16(), "session request rejected");
            return Err(SessionError::Status {
                status: status.as_u16(),
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl SessionApi for HttpSessionClient {
    async fn fetch_identity(&self) -> Result<MeResponse, SessionError> {
        let body = self.get_uncached(ME_PATH).await?.bytes().await?;
        let parsed: MeResponse = serde_json::from_slice(&body)
            .inspect_err(|e| tracing::debug!(error = %e, "malformed session body"))?;
        Ok(parsed)
    }

    async fn log_out(&self) -> Result<(), SessionError> {
        self.get_uncached(LOGOUT_PATH).await?;
        Ok(())
    }
}

/// Guard telling an in-flight load whether its view is still mounted.
///
/// Clones share the same flag. Revoking is permanent.
#[derive(Clone, Debug)]
pub struct Liveness(Arc<AtomicBool>);

impl Liveness {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Marks the owning view as torn down.
    pub fn revoke(&self) {
        self.0.store(false, Ordering::Release);
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetches the session identity once and converts it into a snapshot.
///
/// Any failure, an `ok: false` body, or a revoked `liveness` yields `None`.
/// Nothing is retried.
pub async fn load_identity(
    api: &dyn SessionApi,
    file_base: &str,
    liveness: &Liveness,
) -> Option<IdentitySnapshot> {
    let response = api.fetch_identity().await.ok()?;
    if !liveness.is_alive() {
        return None;
    }
    IdentitySnapshot::from_response(response, file_base)
}

/// Session access shared with the sidebar through Dioxus context.
#[derive(Clone)]
pub struct SessionHandle {
    api: Arc<dyn SessionApi>,
    file_base: String,
}

impl SessionHandle {
    pub fn new(api: Arc<dyn SessionApi>, file_base: impl Into<String>) -> Self {
        Self {
            api,
            file_base: file_base.into(),
        }
    }

    pub fn api(&self) -> &dyn SessionApi {
        self.api.as_ref()
    }

    pub fn file_base(&self) -> &str {
        &self.file_base
    }
}
