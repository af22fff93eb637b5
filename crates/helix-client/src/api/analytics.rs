use super::*;

/// Filters shared by the analytics report endpoints.
#[derive(Debug, Clone, Default)]
pub struct AnalyticsQuery {
    pub after: Option<String>,
    pub first: Option<u32>,
    /// RFC 3339; must be paired with `ended_at`.
    pub started_at: Option<String>,
    pub ended_at: Option<String>,
    pub report_type: Option<String>,
}

impl AnalyticsQuery {
    fn into_params(self, id_key: &'static str, id: Option<&str>) -> QueryParams {
        QueryParams::new()
            .push_opt(id_key, id)
            .push_opt("after", self.after.filter(|c| !c.is_empty()))
            .push_opt("first", self.first.map(request::clamp_first))
            .push_opt("started_at", self.started_at)
            .push_opt("ended_at", self.ended_at)
            .push_opt("type", self.report_type)
    }
}

impl HelixClient {
    /// Get download URLs for extension analytics reports.
    ///
    /// Gated on scope only; the token is sent if one is held.
    pub async fn get_extension_analytics(
        &self,
        extension_id: Option<&str>,
        query: AnalyticsQuery,
    ) -> Result<reqwest::Response, HelixError> {
        let request = HelixRequest::get(
            "/analytics/extensions",
            Guard::new(AuthRequirement::None).scope(Scope::AnalyticsReadExtensions),
        )
        .query(query.into_params("extension_id", extension_id));
        self.send(request).await
    }

    /// Get download URLs for game analytics reports.
    pub async fn get_game_analytics(
        &self,
        game_id: Option<&str>,
        query: AnalyticsQuery,
    ) -> Result<reqwest::Response, HelixError> {
        let request = HelixRequest::get(
            "/analytics/games",
            Guard::new(AuthRequirement::OAuth).scope(Scope::AnalyticsReadGames),
        )
        .query(query.into_params("game_id", game_id));
        self.send(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_type_is_sent_as_type() {
        let query = AnalyticsQuery {
            report_type: Some("overview_v2".into()),
            first: Some(250),
            ..Default::default()
        };
        let params = query.into_params("game_id", Some("493057"));
        assert_eq!(params.get("type"), Some("overview_v2"));
        assert_eq!(params.get("first"), Some("100"));
        assert_eq!(params.get("game_id"), Some("493057"));
        assert_eq!(params.len(), 3);
    }
}
