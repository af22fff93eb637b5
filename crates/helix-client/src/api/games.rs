use super::*;

pub(super) fn get_games_request(game_ids: &[String], names: &[String]) -> HelixRequest {
    HelixRequest::get("/games", Guard::new(AuthRequirement::OAuthOrAppAccess))
        .query(QueryParams::new().push_shared(&[("id", game_ids), ("name", names)]))
}

impl HelixClient {
    /// Get games sorted by current viewers.
    pub async fn get_top_games(&self, page: &Pagination) -> Result<reqwest::Response, HelixError> {
        let request = HelixRequest::get(
            "/games/top",
            Guard::new(AuthRequirement::OAuthOrAppAccess),
        )
        .query(QueryParams::new().page(page));
        self.send(request).await
    }

    /// Get games by id and/or exact name.
    ///
    /// Ids and names share one budget of [`MAX_LOOKUP`] values, ids first;
    /// anything past it is not sent.
    pub async fn get_games(
        &self,
        game_ids: &[String],
        names: &[String],
    ) -> Result<reqwest::Response, HelixError> {
        let request = get_games_request(game_ids, names);
        self.send(request).await
    }
}
