//! Client configuration loaded from the environment (with `.env` support).

use std::fmt;
use std::time::Duration;

use url::Url;

use crate::{HelixError, ScopeSet};

pub const DEFAULT_API_BASE: &str = "https://api.twitch.tv/helix";
pub const DEFAULT_ID_BASE: &str = "https://id.twitch.tv/oauth2";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Everything needed to build a [`crate::CredentialContext`] and [`crate::HelixClient`].
#[derive(Clone)]
pub struct HelixConfig {
    pub client_id: String,
    pub client_secret: String,
    /// Token obtained earlier, if the application persisted one.
    pub access_token: Option<String>,
    /// Scopes the application requests and assumes granted.
    pub scopes: ScopeSet,
    pub api_base: String,
    pub id_base: String,
    pub request_timeout: Duration,
}

impl HelixConfig {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            access_token: None,
            scopes: ScopeSet::new(),
            api_base: DEFAULT_API_BASE.into(),
            id_base: DEFAULT_ID_BASE.into(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    pub fn with_scopes(mut self, scopes: ScopeSet) -> Self {
        self.scopes = scopes;
        self
    }

    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    pub fn with_id_base(mut self, base: impl Into<String>) -> Self {
        self.id_base = base.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Load from process environment, reading `.env` first if present.
    pub fn from_env() -> Result<Self, HelixError> {
        if dotenvy::dotenv().is_ok() {
            tracing::debug!("Loaded .env file");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, HelixError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let g = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let client_id = g("HELIX_CLIENT_ID")
            .ok_or_else(|| HelixError::Config("HELIX_CLIENT_ID is not set".into()))?;
        let client_secret = g("HELIX_CLIENT_SECRET")
            .ok_or_else(|| HelixError::Config("HELIX_CLIENT_SECRET is not set".into()))?;

        let mut config = Self::new(client_id, client_secret);
        config.access_token = g("HELIX_ACCESS_TOKEN");

        if let Some(scopes) = g("HELIX_SCOPES") {
            config.scopes = scopes.parse()?;
        }
        if let Some(base) = g("HELIX_API_BASE") {
            config.api_base = normalize_base(&base)?;
        }
        if let Some(base) = g("HELIX_ID_BASE") {
            config.id_base = normalize_base(&base)?;
        }
        if let Some(secs) = g("HELIX_TIMEOUT_SECS") {
            let secs = secs.parse::<u64>().map_err(|_| {
                HelixError::Config(format!("HELIX_TIMEOUT_SECS is not a number: {secs}"))
            })?;
            config.request_timeout = Duration::from_secs(secs.max(1));
        }

        Ok(config)
    }
}

impl fmt::Debug for HelixConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HelixConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .field("scopes", &self.scopes)
            .field("api_base", &self.api_base)
            .field("id_base", &self.id_base)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

fn normalize_base(raw: &str) -> Result<String, HelixError> {
    let url = Url::parse(raw)?;
    Ok(url.as_str().trim_end_matches('/').to_string())
}
