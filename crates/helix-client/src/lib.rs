//! Twitch Helix client library.
//!
//! Provides client-credentials token management, scope/token guards that
//! run before any network call, and thin Helix endpoint wrappers that
//! hand the raw HTTP response back to the caller.

pub mod api;
pub mod auth;
pub mod config;
pub mod guard;
pub mod scope;

pub use api::{HelixClient, HelixRequest, MAX_LOOKUP, Pagination, QueryParams, check_status};
pub use auth::{CredentialContext, Token, TokenState};
pub use config::HelixConfig;
pub use guard::{AuthRequirement, Guard, require_scope, require_token};
pub use scope::{Scope, ScopeSet};

/// Unified error type for the helix-client crate.
#[derive(Debug, thiserror::Error)]
pub enum HelixError {
    #[error("{}", .requirement.missing_message())]
    MissingToken { requirement: AuthRequirement },

    #[error("missing required scope: {0}")]
    MissingScope(Scope),

    #[error("identity service error: {0}")]
    IdentityService(String),

    #[error("token refresh is not supported; acquire a new token instead")]
    RefreshUnsupported,

    #[error("unknown scope: {0}")]
    UnknownScope(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("unprocessable entity: {0}")]
    UnprocessableEntity(String),

    #[error("rate limited (reset at {reset_at:?}): {message}")]
    RateLimited {
        reset_at: Option<String>,
        message: String,
    },

    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Twitch server error (status {status}): {message}")]
    ServerError { status: u16, message: String },

    #[error("Twitch API error (status {status}): {message}")]
    Api { status: u16, message: String },
}
