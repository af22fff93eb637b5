use super::*;

impl HelixClient {
    /// Get a broadcaster's subscribers, optionally filtered to specific users.
    ///
    /// At most [`MAX_LOOKUP`] `user_ids` are sent.
    pub async fn get_broadcaster_subscriptions(
        &self,
        broadcaster_id: &str,
        user_ids: &[String],
        page: &Pagination,
    ) -> Result<reqwest::Response, HelixError> {
        let request = HelixRequest::get(
            "/subscriptions",
            Guard::new(AuthRequirement::OAuth).scope(Scope::ChannelReadSubscriptions),
        )
        .query(
            QueryParams::new()
                .push("broadcaster_id", broadcaster_id)
                .push_all("user_id", user_ids)
                .page(page),
        );
        self.send(request).await
    }
}
