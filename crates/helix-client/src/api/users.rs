use serde::Serialize;

use super::*;

#[derive(Serialize)]
struct FollowBody<'a> {
    from_id: &'a str,
    to_id: &'a str,
    allow_notifications: bool,
}

pub(super) fn get_users_request(user_id: Option<&str>, login: Option<&str>) -> HelixRequest {
    HelixRequest::get(
        "/users",
        Guard::new(AuthRequirement::OAuth).scope(Scope::UserReadEmail),
    )
    .query(
        QueryParams::new()
            .push_opt("id", user_id)
            .push_opt("login", login),
    )
}

pub(super) fn get_users_follows_request(
    from_id: Option<&str>,
    to_id: Option<&str>,
    page: &Pagination,
) -> HelixRequest {
    HelixRequest::get(
        "/users/follows",
        Guard::new(AuthRequirement::OAuthOrAppAccess),
    )
    .query(
        QueryParams::new()
            .push_opt("from_id", from_id)
            .push_opt("to_id", to_id)
            .page(page),
    )
}

impl HelixClient {
    /// Get users by id and/or login. With neither, Helix returns the token's user.
    pub async fn get_users(
        &self,
        user_id: Option<&str>,
        login: Option<&str>,
    ) -> Result<reqwest::Response, HelixError> {
        self.send(get_users_request(user_id, login)).await
    }

    /// Get follow relationships, most recent first.
    pub async fn get_users_follows(
        &self,
        from_id: Option<&str>,
        to_id: Option<&str>,
        page: &Pagination,
    ) -> Result<reqwest::Response, HelixError> {
        self.send(get_users_follows_request(from_id, to_id, page))
            .await
    }

    /// Make `from_id` follow `to_id`.
    pub async fn create_user_follows(
        &self,
        from_id: &str,
        to_id: &str,
        allow_notifications: bool,
    ) -> Result<reqwest::Response, HelixError> {
        let request = HelixRequest::post(
            "/users/follows",
            Guard::new(AuthRequirement::OAuth).scope(Scope::UserEditFollows),
        )
        .json(&FollowBody {
            from_id,
            to_id,
            allow_notifications,
        })?;
        self.send(request).await
    }

    pub async fn delete_user_follows(
        &self,
        from_id: &str,
        to_id: &str,
    ) -> Result<reqwest::Response, HelixError> {
        let request = HelixRequest::delete(
            "/users/follows",
            Guard::new(AuthRequirement::OAuth).scope(Scope::UserEditFollows),
        )
        .query(
            QueryParams::new()
                .push("from_id", from_id)
                .push("to_id", to_id),
        );
        self.send(request).await
    }

    /// Update the description of the token's user.
    pub async fn update_user(
        &self,
        description: Option<&str>,
    ) -> Result<reqwest::Response, HelixError> {
        let request = HelixRequest::put(
            "/users",
            Guard::new(AuthRequirement::OAuth).scope(Scope::UserEdit),
        )
        .query(QueryParams::new().push_opt("description", description));
        self.send(request).await
    }
}
