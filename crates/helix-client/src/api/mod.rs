//! Twitch Helix REST API client.
//!
//! Each wrapper shapes a [`HelixRequest`], runs its [`Guard`] against the
//! current token and the configured scopes, and returns the raw
//! `reqwest::Response` without looking at it.

mod analytics;
mod bits;
mod channels;
mod clips;
mod games;
mod hypetrain;
mod moderation;
mod request;
mod status;
mod streams;
mod subscriptions;
mod users;
mod videos;
mod webhooks;

use std::sync::Arc;

pub use analytics::AnalyticsQuery;
pub use channels::ChannelUpdate;
pub use clips::ClipsQuery;
pub use request::{HelixRequest, MAX_LOOKUP, Pagination, QueryParams};
pub use status::check_status;
pub use streams::StreamsQuery;
pub use videos::VideosQuery;

use crate::config::DEFAULT_API_BASE;
use crate::{AuthRequirement, CredentialContext, Guard, HelixConfig, HelixError, Scope, ScopeSet};

/// Helix API client with auth header injection and scope gating.
pub struct HelixClient {
    pub(super) ctx: Arc<CredentialContext>,
    pub(super) scopes: ScopeSet,
    pub(super) api_base: String,
}

impl HelixClient {
    /// Wrap an existing credential context. `scopes` is what the app assumes granted.
    pub fn new(ctx: Arc<CredentialContext>, scopes: ScopeSet) -> Self {
        Self {
            ctx,
            scopes,
            api_base: DEFAULT_API_BASE.into(),
        }
    }

    /// Build the credential context and client from configuration.
    pub fn from_config(config: &HelixConfig) -> Result<Self, HelixError> {
        let ctx = Arc::new(CredentialContext::from_config(config)?);
        Ok(Self {
            ctx,
            scopes: config.scopes.clone(),
            api_base: config.api_base.clone(),
        })
    }

    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    pub fn credentials(&self) -> &Arc<CredentialContext> {
        &self.ctx
    }

    pub fn scopes(&self) -> &ScopeSet {
        &self.scopes
    }

    /// Acquire a token for the configured scopes.
    pub async fn authenticate(&self) -> Result<crate::Token, HelixError> {
        self.ctx.acquire_token(&self.scopes).await
    }
}
