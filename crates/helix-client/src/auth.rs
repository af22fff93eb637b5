//! Client credentials and app token lifecycle.
//!
//! Handles client-credentials token acquisition and revocation against the
//! Twitch identity service. State moves `Unauthenticated -> Authenticated
//! -> Revoked`; acquisition is allowed again from any state.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::{HelixConfig, HelixError, ScopeSet};

/// Token endpoint response.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(default)]
    access_token: Option<String>,
    #[serde(default)]
    expires_in: Option<i64>,
    #[serde(default)]
    scope: Option<Vec<String>>,
}

/// Identity service error response.
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    status: Option<u16>,
    #[serde(default)]
    message: Option<String>,
}

/// An app access token issued by the identity service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    /// Unix seconds; `None` when the token was supplied by the caller.
    pub expires_at: Option<i64>,
    /// Scopes the identity service reported as granted, if it said.
    pub scopes: Vec<String>,
}

impl Token {
    /// Wrap a token obtained elsewhere.
    pub fn from_access_token(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            expires_at: None,
            scopes: Vec::new(),
        }
    }

    /// True if the token expires within `margin`. Unknown expiry is never expiring.
    pub fn expires_within(&self, margin: Duration) -> bool {
        match self.expires_at {
            Some(at) => Utc::now().timestamp() >= at - margin.num_seconds(),
            None => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenState {
    Unauthenticated,
    Authenticated(Token),
    Revoked,
}

impl TokenState {
    pub fn token(&self) -> Option<&Token> {
        match self {
            TokenState::Authenticated(token) => Some(token),
            _ => None,
        }
    }
}

/// Client id, secret and the current token.
///
/// Share it behind an `Arc`; acquisition and revocation take the write
/// lock, header building only reads.
pub struct CredentialContext {
    client_id: String,
    client_secret: String,
    id_base: String,
    http: reqwest::Client,
    state: RwLock<TokenState>,
}

impl CredentialContext {
    /// Create a context against the production identity service.
    ///
    /// A supplied token starts the context as authenticated. Requests use the
    /// default timeout; build from [`HelixConfig`] to change it.
    pub fn new(
        client_id: String,
        client_secret: String,
        token: Option<String>,
    ) -> Result<Self, HelixError> {
        let mut config = HelixConfig::new(client_id, client_secret);
        config.access_token = token;
        Self::from_config(&config)
    }

    /// Create a context from configuration, applying the request timeout.
    pub fn from_config(config: &HelixConfig) -> Result<Self, HelixError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        let state = match config.access_token.as_deref().filter(|t| !t.is_empty()) {
            Some(t) => TokenState::Authenticated(Token::from_access_token(t)),
            None => TokenState::Unauthenticated,
        };
        Ok(Self {
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            id_base: config.id_base.clone(),
            http,
            state: RwLock::new(state),
        })
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub async fn state(&self) -> TokenState {
        self.state.read().await.clone()
    }

    /// Current bearer token string, if authenticated.
    pub async fn bearer_token(&self) -> Option<String> {
        self.state
            .read()
            .await
            .token()
            .map(|t| t.access_token.clone())
    }

    /// Request an app access token with the given scopes and store it.
    ///
    /// On any failure the stored state is left untouched.
    pub async fn acquire_token(&self, scopes: &ScopeSet) -> Result<Token, HelixError> {
        tracing::info!(scopes = %scopes.to_query_string(), "Requesting app access token");

        let scope_str = scopes.to_query_string();
        let mut params = vec![
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("grant_type", "client_credentials"),
        ];
        if !scope_str.is_empty() {
            params.push(("scope", scope_str.as_str()));
        }

        let resp = self
            .http
            .post(format!("{}/token", self.id_base))
            .form(&params)
            .send()
            .await?;

        let token = parse_token_response(resp).await?;
        warn_ungranted_scopes(scopes, &token);

        *self.state.write().await = TokenState::Authenticated(token.clone());
        tracing::info!(expires_at = ?token.expires_at, "App access token acquired");
        Ok(token)
    }

    /// Revoke `token` at the identity service.
    ///
    /// If `token` is the stored token, the context moves to `Revoked` and the
    /// token is dropped. Revoking some other token leaves state alone.
    pub async fn revoke_token(&self, token: &str) -> Result<(), HelixError> {
        let params = [("client_id", self.client_id.as_str()), ("token", token)];

        let resp = self
            .http
            .post(format!("{}/revoke", self.id_base))
            .form(&params)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await?;
            return Err(identity_error(status, &body));
        }

        let mut state = self.state.write().await;
        if state.token().is_some_and(|t| t.access_token == token) {
            *state = TokenState::Revoked;
            tracing::info!("Stored app access token revoked");
        } else {
            tracing::info!("Revoked a token that is not the stored one");
        }
        Ok(())
    }

    /// Not supported: app access tokens have no refresh token.
    ///
    /// Call [`Self::acquire_token`] again once [`Token::expires_within`] says so.
    pub async fn refresh_token(&self) -> Result<Token, HelixError> {
        Err(HelixError::RefreshUnsupported)
    }
}

async fn parse_token_response(resp: reqwest::Response) -> Result<Token, HelixError> {
    let status = resp.status();
    let body = resp.text().await?;

    if !status.is_success() {
        return Err(identity_error(status, &body));
    }

    let token_resp: TokenResponse = serde_json::from_str(&body).map_err(|e| {
        HelixError::IdentityService(format!("failed to parse token response: {e}"))
    })?;

    let access_token = token_resp
        .access_token
        .filter(|t| !t.is_empty())
        .ok_or_else(|| HelixError::IdentityService("response missing access_token".into()))?;

    Ok(Token {
        access_token,
        expires_at: token_resp
            .expires_in
            .map(|secs| Utc::now().timestamp() + secs),
        scopes: token_resp.scope.unwrap_or_default(),
    })
}

fn identity_error(status: reqwest::StatusCode, body: &str) -> HelixError {
    let err: ErrorResponse = serde_json::from_str(body).unwrap_or(ErrorResponse {
        status: Some(status.as_u16()),
        message: Some(body.to_string()),
    });
    HelixError::IdentityService(format!(
        "{}: {}",
        err.status.unwrap_or(status.as_u16()),
        err.message.unwrap_or_default()
    ))
}

/// Scope checks use configuration, not the grant; flag where they disagree.
fn warn_ungranted_scopes(requested: &ScopeSet, token: &Token) {
    if token.scopes.is_empty() {
        return;
    }
    for scope in requested.iter() {
        if !token.scopes.iter().any(|s| s == scope.as_str()) {
            tracing::warn!(%scope, "Configured scope was not granted by the identity service");
        }
    }
}
