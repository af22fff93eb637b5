use super::*;

/// Video lookup. Helix wants exactly one of `video_ids`, `user_id` or `game_id`.
///
/// Only the first [`MAX_LOOKUP`] `video_ids` are sent.
#[derive(Debug, Clone, Default)]
pub struct VideosQuery {
    pub video_ids: Vec<String>,
    pub user_id: Option<String>,
    pub game_id: Option<String>,
    pub language: Option<String>,
    /// `all`, `day`, `week` or `month`.
    pub period: Option<String>,
    /// `time`, `trending` or `views`.
    pub sort: Option<String>,
    /// `all`, `archive`, `highlight` or `upload`.
    pub video_type: Option<String>,
    pub page: Pagination,
}

impl HelixClient {
    pub async fn get_videos(&self, query: &VideosQuery) -> Result<reqwest::Response, HelixError> {
        let request = HelixRequest::get("/videos", Guard::new(AuthRequirement::OAuthOrAppAccess))
            .query(
                QueryParams::new()
                    .push_all("id", &query.video_ids)
                    .push_opt("user_id", query.user_id.as_deref())
                    .push_opt("game_id", query.game_id.as_deref())
                    .push_opt("language", query.language.as_deref())
                    .push_opt("period", query.period.as_deref())
                    .push_opt("sort", query.sort.as_deref())
                    .push_opt("type", query.video_type.as_deref())
                    .page(&query.page),
            );
        self.send(request).await
    }
}
