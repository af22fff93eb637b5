use super::*;

impl HelixClient {
    /// List webhook subscriptions owned by the app token, soonest expiry first.
    pub async fn get_webhook_subscriptions(
        &self,
        page: &Pagination,
    ) -> Result<reqwest::Response, HelixError> {
        let request = HelixRequest::get(
            "/webhooks/subscriptions",
            Guard::new(AuthRequirement::AppAccess),
        )
        .query(
            QueryParams::new()
                .push_opt("after", page.after.as_deref())
                .push_opt("first", page.first.map(request::clamp_first)),
        );
        self.send(request).await
    }
}
