use serde::Serialize;

use super::*;

#[derive(Serialize)]
struct AutomodMessage<'a> {
    msg_id: &'a str,
    msg_text: &'a str,
    user_id: &'a str,
}

#[derive(Serialize)]
struct AutomodRequest<'a> {
    data: [AutomodMessage<'a>; 1],
}

fn moderation_read() -> Guard {
    Guard::new(AuthRequirement::OAuth).scope(Scope::ModerationRead)
}

impl HelixClient {
    /// Check whether a message would pass the channel's AutoMod settings.
    pub async fn check_automod_status(
        &self,
        broadcaster_id: &str,
        msg_id: &str,
        msg_text: &str,
        user_id: &str,
    ) -> Result<reqwest::Response, HelixError> {
        let request = HelixRequest::post("/moderation/enforcements/status", moderation_read())
            .query(QueryParams::new().push("broadcaster_id", broadcaster_id))
            .json(&AutomodRequest {
                data: [AutomodMessage {
                    msg_id,
                    msg_text,
                    user_id,
                }],
            })?;
        self.send(request).await
    }

    /// Get banned and timed-out users. At most [`MAX_LOOKUP`] `user_ids` are sent.
    pub async fn get_banned_users(
        &self,
        broadcaster_id: &str,
        user_ids: &[String],
        page: &Pagination,
    ) -> Result<reqwest::Response, HelixError> {
        let request = HelixRequest::get("/moderation/banned", moderation_read()).query(
            QueryParams::new()
                .push("broadcaster_id", broadcaster_id)
                .push_all("user_id", user_ids)
                .page(page),
        );
        self.send(request).await
    }

    /// Get a channel's moderators. At most [`MAX_LOOKUP`] `user_ids` are sent.
    pub async fn get_moderators(
        &self,
        broadcaster_id: &str,
        user_ids: &[String],
        after: Option<&str>,
    ) -> Result<reqwest::Response, HelixError> {
        let request = HelixRequest::get("/moderation/moderators", moderation_read()).query(
            QueryParams::new()
                .push("broadcaster_id", broadcaster_id)
                .push_all("user_id", user_ids)
                .push_opt("after", after.filter(|c| !c.is_empty())),
        );
        self.send(request).await
    }
}
