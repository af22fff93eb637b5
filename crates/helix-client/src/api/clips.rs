use super::*;

/// Clip lookup. Helix wants exactly one of `broadcaster_id`, `game_id` or `clip_ids`.
///
/// Only the first [`MAX_LOOKUP`] `clip_ids` are sent.
#[derive(Debug, Clone, Default)]
pub struct ClipsQuery {
    pub broadcaster_id: Option<String>,
    pub game_id: Option<String>,
    pub clip_ids: Vec<String>,
    /// RFC 3339 window.
    pub started_at: Option<String>,
    pub ended_at: Option<String>,
    pub page: Pagination,
}

pub(super) fn get_clips_request(query: &ClipsQuery) -> HelixRequest {
    HelixRequest::get("/clips", Guard::new(AuthRequirement::OAuthOrAppAccess)).query(
        QueryParams::new()
            .push_opt("broadcaster_id", query.broadcaster_id.as_deref())
            .push_opt("game_id", query.game_id.as_deref())
            .push_all("id", &query.clip_ids)
            .push_opt("started_at", query.started_at.as_deref())
            .push_opt("ended_at", query.ended_at.as_deref())
            .page(&query.page),
    )
}

impl HelixClient {
    /// Create a clip from the broadcaster's live stream.
    pub async fn create_clip(
        &self,
        broadcaster_id: &str,
        has_delay: bool,
    ) -> Result<reqwest::Response, HelixError> {
        let request = HelixRequest::post(
            "/clips",
            Guard::new(AuthRequirement::OAuth).scope(Scope::ClipsEdit),
        )
        .query(
            QueryParams::new()
                .push("broadcaster_id", broadcaster_id)
                .push("has_delay", has_delay),
        );
        self.send(request).await
    }

    /// Get clips, sorted by view count descending.
    pub async fn get_clips(&self, query: &ClipsQuery) -> Result<reqwest::Response, HelixError> {
        self.send(get_clips_request(query)).await
    }
}
