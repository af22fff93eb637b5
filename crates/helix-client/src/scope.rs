//! OAuth scopes understood by the Helix wrappers.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::HelixError;

/// A named permission granted to a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Scope {
    #[serde(rename = "analytics:read:extensions")]
    AnalyticsReadExtensions,
    #[serde(rename = "analytics:read:games")]
    AnalyticsReadGames,
    #[serde(rename = "bits:read")]
    BitsRead,
    #[serde(rename = "channel:edit:commercial")]
    ChannelEditCommercial,
    #[serde(rename = "channel:read:hype_train")]
    ChannelReadHypeTrain,
    #[serde(rename = "channel:read:stream_key")]
    ChannelReadStreamKey,
    #[serde(rename = "channel:read:subscriptions")]
    ChannelReadSubscriptions,
    #[serde(rename = "clips:edit")]
    ClipsEdit,
    #[serde(rename = "moderation:read")]
    ModerationRead,
    #[serde(rename = "user:edit")]
    UserEdit,
    #[serde(rename = "user:edit:broadcast")]
    UserEditBroadcast,
    #[serde(rename = "user:edit:follows")]
    UserEditFollows,
    #[serde(rename = "user:read:broadcast")]
    UserReadBroadcast,
    #[serde(rename = "user:read:email")]
    UserReadEmail,
}

impl Scope {
    pub const ALL: &'static [Scope] = &[
        Scope::AnalyticsReadExtensions,
        Scope::AnalyticsReadGames,
        Scope::BitsRead,
        Scope::ChannelEditCommercial,
        Scope::ChannelReadHypeTrain,
        Scope::ChannelReadStreamKey,
        Scope::ChannelReadSubscriptions,
        Scope::ClipsEdit,
        Scope::ModerationRead,
        Scope::UserEdit,
        Scope::UserEditBroadcast,
        Scope::UserEditFollows,
        Scope::UserReadBroadcast,
        Scope::UserReadEmail,
    ];

    /// Wire name as used by the identity service.
    pub fn as_str(self) -> &'static str {
        match self {
            Scope::AnalyticsReadExtensions => "analytics:read:extensions",
            Scope::AnalyticsReadGames => "analytics:read:games",
            Scope::BitsRead => "bits:read",
            Scope::ChannelEditCommercial => "channel:edit:commercial",
            Scope::ChannelReadHypeTrain => "channel:read:hype_train",
            Scope::ChannelReadStreamKey => "channel:read:stream_key",
            Scope::ChannelReadSubscriptions => "channel:read:subscriptions",
            Scope::ClipsEdit => "clips:edit",
            Scope::ModerationRead => "moderation:read",
            Scope::UserEdit => "user:edit",
            Scope::UserEditBroadcast => "user:edit:broadcast",
            Scope::UserEditFollows => "user:edit:follows",
            Scope::UserReadBroadcast => "user:read:broadcast",
            Scope::UserReadEmail => "user:read:email",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scope {
    type Err = HelixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scope::ALL
            .iter()
            .copied()
            .find(|scope| scope.as_str() == s)
            .ok_or_else(|| HelixError::UnknownScope(s.to_string()))
    }
}

/// The set of scopes the application was configured with.
///
/// This is static configuration handed to [`crate::HelixClient`]; it is not
/// re-validated against the live token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeSet(BTreeSet<Scope>);

impl ScopeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, scope: Scope) -> bool {
        self.0.contains(&scope)
    }

    pub fn insert(&mut self, scope: Scope) -> bool {
        self.0.insert(scope)
    }

    pub fn iter(&self) -> impl Iterator<Item = Scope> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Space-separated form expected by the token endpoint.
    pub fn to_query_string(&self) -> String {
        self.iter().map(Scope::as_str).collect::<Vec<_>>().join(" ")
    }
}

impl FromIterator<Scope> for ScopeSet {
    fn from_iter<I: IntoIterator<Item = Scope>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl FromStr for ScopeSet {
    type Err = HelixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace().map(str::parse::<Scope>).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_round_trips_through_wire_name() {
        for scope in Scope::ALL {
            assert_eq!(scope.as_str().parse::<Scope>().unwrap(), *scope);
        }
    }

    #[test]
    fn unknown_scope_is_rejected() {
        let err = "chat:read:everything".parse::<Scope>().unwrap_err();
        assert!(matches!(err, HelixError::UnknownScope(s) if s == "chat:read:everything"));
    }

    #[test]
    fn scope_set_parses_space_separated_list() {
        let set: ScopeSet = "  user:read:email   clips:edit\n".parse().unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains(Scope::UserReadEmail));
        assert!(set.contains(Scope::ClipsEdit));
        assert!(!set.contains(Scope::BitsRead));
    }

    #[test]
    fn empty_string_is_empty_set() {
        let set: ScopeSet = "".parse().unwrap();
        assert!(set.is_empty());
        assert_eq!(set.to_query_string(), "");
    }

    #[test]
    fn query_string_is_ordered_and_deduplicated() {
        let set: ScopeSet = [Scope::UserEdit, Scope::BitsRead, Scope::UserEdit]
            .into_iter()
            .collect();
        assert_eq!(set.to_query_string(), "bits:read user:edit");
    }

    #[test]
    fn scope_serializes_as_wire_name() {
        let json = serde_json::to_string(&Scope::ChannelReadHypeTrain).unwrap();
        assert_eq!(json, "\"channel:read:hype_train\"");
    }
}
