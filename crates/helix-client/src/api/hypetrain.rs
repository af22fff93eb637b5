use super::*;

impl HelixClient {
    /// Get the most recent hype train events for a broadcaster.
    pub async fn get_hype_train_events(
        &self,
        broadcaster_id: &str,
        first: Option<u32>,
        event_id: Option<&str>,
        cursor: Option<&str>,
    ) -> Result<reqwest::Response, HelixError> {
        let request = HelixRequest::get(
            "/hypetrain/events",
            Guard::new(AuthRequirement::OAuthOrAppAccess).scope(Scope::ChannelReadHypeTrain),
        )
        .query(
            QueryParams::new()
                .push("broadcaster_id", broadcaster_id)
                .push_opt("first", first.map(request::clamp_first))
                .push_opt("id", event_id)
                .push_opt("cursor", cursor.filter(|c| !c.is_empty())),
        );
        self.send(request).await
    }
}
