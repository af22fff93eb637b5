use serde::Serialize;

use super::*;

/// Filters for GET /streams. Each list is capped at [`MAX_LOOKUP`] entries on its own.
#[derive(Debug, Clone, Default)]
pub struct StreamsQuery {
    pub user_ids: Vec<String>,
    pub user_logins: Vec<String>,
    pub game_ids: Vec<String>,
    pub languages: Vec<String>,
    pub page: Pagination,
}

#[derive(Serialize)]
struct MarkerBody<'a> {
    user_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
}

pub(super) fn get_streams_request(query: &StreamsQuery) -> HelixRequest {
    HelixRequest::get("/streams", Guard::new(AuthRequirement::OAuthOrAppAccess)).query(
        QueryParams::new()
            .push_all("user_id", &query.user_ids)
            .push_all("user_login", &query.user_logins)
            .push_all("game_id", &query.game_ids)
            .push_all("language", &query.languages)
            .page(&query.page),
    )
}

impl HelixClient {
    /// Get live streams, most viewers first.
    ///
    /// List entries past [`MAX_LOOKUP`] are dropped, not sent in a second call.
    pub async fn get_streams(&self, query: &StreamsQuery) -> Result<reqwest::Response, HelixError> {
        self.send(get_streams_request(query)).await
    }

    pub async fn get_stream_key(
        &self,
        broadcaster_id: &str,
    ) -> Result<reqwest::Response, HelixError> {
        let request = HelixRequest::get(
            "/streams/key",
            Guard::new(AuthRequirement::OAuth).scope(Scope::ChannelReadStreamKey),
        )
        .query(QueryParams::new().push("broadcaster_id", broadcaster_id));
        self.send(request).await
    }

    /// Mark the current position of a live stream.
    ///
    /// The description is trimmed and cut to its first 140 characters; a blank
    /// one is left out of the body.
    pub async fn create_stream_marker(
        &self,
        user_id: &str,
        description: Option<&str>,
    ) -> Result<reqwest::Response, HelixError> {
        let description = description
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(|d| match d.char_indices().nth(140) {
                Some((idx, _)) => &d[..idx],
                None => d,
            });
        let request = HelixRequest::post(
            "/streams/markers",
            Guard::new(AuthRequirement::OAuth).scope(Scope::UserEditBroadcast),
        )
        .json(&MarkerBody {
            user_id,
            description,
        })?;
        self.send(request).await
    }
}
