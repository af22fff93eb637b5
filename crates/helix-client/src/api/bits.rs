use super::*;

impl HelixClient {
    /// Get cheermotes, optionally including a broadcaster's custom ones.
    pub async fn get_cheermotes(
        &self,
        broadcaster_id: Option<&str>,
    ) -> Result<reqwest::Response, HelixError> {
        let request = HelixRequest::get(
            "/bits/cheermotes",
            Guard::new(AuthRequirement::OAuthOrAppAccess),
        )
        .query(QueryParams::new().push_opt("broadcaster_id", broadcaster_id));
        self.send(request).await
    }

    /// Get the bits leaderboard for the token's broadcaster.
    ///
    /// `period` is one of `day`, `week`, `month`, `year`, `all`.
    pub async fn get_bits_leaderboard(
        &self,
        count: Option<u32>,
        period: Option<&str>,
        started_at: Option<&str>,
        user_id: Option<&str>,
    ) -> Result<reqwest::Response, HelixError> {
        let request = HelixRequest::get(
            "/bits/leaderboard",
            Guard::new(AuthRequirement::OAuth).scope(Scope::BitsRead),
        )
        .query(
            QueryParams::new()
                .push_opt("count", count.map(|c| c.clamp(1, 100)))
                .push_opt("period", period)
                .push_opt("started_at", started_at)
                .push_opt("user_id", user_id),
        );
        self.send(request).await
    }
}
