//! Precondition checks evaluated before an endpoint touches the network.
//!
//! Every wrapper builds a [`Guard`] and runs it first. Checks are pure:
//! they read a token snapshot and the configured [`ScopeSet`] and nothing
//! else. Token presence is always checked before scopes so the reported
//! error is deterministic.

use crate::{HelixError, Scope, ScopeSet};

/// Which kind of token an endpoint expects.
///
/// The client cannot tell a user token from an app token locally, so every
/// variant except `None` is a presence check; the tag picks the error text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthRequirement {
    None,
    OAuth,
    AppAccess,
    OAuthOrAppAccess,
}

impl AuthRequirement {
    pub(crate) fn missing_message(&self) -> &'static str {
        match self {
            AuthRequirement::None => "no token required",
            AuthRequirement::OAuth => "An OAuth token is required",
            AuthRequirement::AppAccess => "An app access token is required",
            AuthRequirement::OAuthOrAppAccess => {
                "Either an OAuth or an app access token is required"
            }
        }
    }
}

/// Fails with [`HelixError::MissingToken`] when a token is required but absent.
pub fn require_token(
    token: Option<&str>,
    requirement: AuthRequirement,
) -> Result<(), HelixError> {
    match (requirement, token) {
        (AuthRequirement::None, _) => Ok(()),
        (_, Some(t)) if !t.is_empty() => Ok(()),
        _ => Err(HelixError::MissingToken { requirement }),
    }
}

/// Fails with [`HelixError::MissingScope`] when `scope` was not configured.
pub fn require_scope(scope: Scope, granted: &ScopeSet) -> Result<(), HelixError> {
    if granted.contains(scope) {
        Ok(())
    } else {
        Err(HelixError::MissingScope(scope))
    }
}

/// A token requirement plus zero or more scope requirements.
#[derive(Debug, Clone)]
pub struct Guard {
    requirement: AuthRequirement,
    scopes: Vec<Scope>,
}

impl Guard {
    pub fn new(requirement: AuthRequirement) -> Self {
        Self {
            requirement,
            scopes: Vec::new(),
        }
    }

    /// Add a required scope. Scopes are checked in the order they are added.
    pub fn scope(mut self, scope: Scope) -> Self {
        self.scopes.push(scope);
        self
    }

    pub fn requirement(&self) -> AuthRequirement {
        self.requirement
    }

    pub fn scopes(&self) -> &[Scope] {
        &self.scopes
    }

    /// Run every check, token first, and hand back the token to send (if any).
    pub fn check<'a>(
        &self,
        token: Option<&'a str>,
        granted: &ScopeSet,
    ) -> Result<Option<&'a str>, HelixError> {
        require_token(token, self.requirement)?;
        self.scopes
            .iter()
            .try_for_each(|scope| require_scope(*scope, granted))?;
        Ok(token.filter(|t| !t.is_empty()))
    }
}
