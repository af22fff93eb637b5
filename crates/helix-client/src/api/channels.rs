use serde::Serialize;

use super::*;

/// Fields to change on a channel. Unset fields are left as they are.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ChannelUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub broadcaster_language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[derive(Serialize)]
struct CommercialBody<'a> {
    broadcaster_id: &'a str,
    length: u32,
}

pub(super) fn modify_channel_information_request(
    broadcaster_id: &str,
    update: &ChannelUpdate,
) -> Result<HelixRequest, HelixError> {
    HelixRequest::patch(
        "/channels",
        Guard::new(AuthRequirement::OAuth).scope(Scope::UserEditBroadcast),
    )
    .query(QueryParams::new().push("broadcaster_id", broadcaster_id))
    .json(update)
}

impl HelixClient {
    /// Start a commercial. Helix accepts lengths of 30 to 180 seconds in steps of 30.
    pub async fn start_commercial(
        &self,
        broadcaster_id: &str,
        length: u32,
    ) -> Result<reqwest::Response, HelixError> {
        let request = HelixRequest::post(
            "/channels/commercial",
            Guard::new(AuthRequirement::None).scope(Scope::ChannelEditCommercial),
        )
        .json(&CommercialBody {
            broadcaster_id,
            length,
        })?;
        self.send(request).await
    }

    pub async fn get_channel_information(
        &self,
        broadcaster_id: &str,
    ) -> Result<reqwest::Response, HelixError> {
        let request = HelixRequest::get(
            "/channels",
            Guard::new(AuthRequirement::OAuthOrAppAccess),
        )
        .query(QueryParams::new().push("broadcaster_id", broadcaster_id));
        self.send(request).await
    }

    /// Change title, game and/or language of a channel.
    pub async fn modify_channel_information(
        &self,
        broadcaster_id: &str,
        update: &ChannelUpdate,
    ) -> Result<reqwest::Response, HelixError> {
        self.send(modify_channel_information_request(broadcaster_id, update)?)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modify_channel_sends_only_set_fields() {
        let update = ChannelUpdate {
            title: Some("Speedrun night".into()),
            ..Default::default()
        };
        let req = modify_channel_information_request("1234", &update).unwrap();

        assert_eq!(req.method, reqwest::Method::PATCH);
        assert_eq!(req.query.get("broadcaster_id"), Some("1234"));
        assert_eq!(
            req.body,
            Some(serde_json::json!({ "title": "Speedrun night" }))
        );
    }
}
