use reqwest::StatusCode;

use super::*;

/// Pass a 2xx response through; turn anything else into a classified error.
///
/// Endpoint wrappers never call this themselves; callers opt in.
pub async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, HelixError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let reset_at = resp
        .headers()
        .get("Ratelimit-Reset")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = resp.text().await?;

    if status == StatusCode::TOO_MANY_REQUESTS {
        tracing::warn!(reset_at = reset_at.as_deref(), "Helix rate limit hit");
    }

    Err(classify(status, body, reset_at))
}

pub(super) fn classify(status: StatusCode, message: String, reset_at: Option<String>) -> HelixError {
    match status {
        StatusCode::BAD_REQUEST => HelixError::BadRequest(message),
        StatusCode::UNAUTHORIZED => HelixError::Unauthorized(message),
        StatusCode::UNPROCESSABLE_ENTITY => HelixError::UnprocessableEntity(message),
        StatusCode::TOO_MANY_REQUESTS => HelixError::RateLimited { reset_at, message },
        StatusCode::SERVICE_UNAVAILABLE => HelixError::ServiceUnavailable(message),
        s if s.is_server_error() => HelixError::ServerError {
            status: s.as_u16(),
            message,
        },
        s => HelixError::Api {
            status: s.as_u16(),
            message,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_known_statuses() {
        assert!(matches!(
            classify(StatusCode::BAD_REQUEST, "missing id".into(), None),
            HelixError::BadRequest(m) if m == "missing id"
        ));
        assert!(matches!(
            classify(StatusCode::UNAUTHORIZED, String::new(), None),
            HelixError::Unauthorized(_)
        ));
        assert!(matches!(
            classify(StatusCode::UNPROCESSABLE_ENTITY, String::new(), None),
            HelixError::UnprocessableEntity(_)
        ));
        assert!(matches!(
            classify(StatusCode::SERVICE_UNAVAILABLE, String::new(), None),
            HelixError::ServiceUnavailable(_)
        ));
    }

    #[test]
    fn rate_limit_keeps_reset_header() {
        let err = classify(
            StatusCode::TOO_MANY_REQUESTS,
            "slow down".into(),
            Some("1700000000".into()),
        );
        assert!(matches!(
            err,
            HelixError::RateLimited { reset_at: Some(r), .. } if r == "1700000000"
        ));
    }

    #[test]
    fn other_5xx_is_server_error_and_rest_is_api() {
        assert!(matches!(
            classify(StatusCode::BAD_GATEWAY, String::new(), None),
            HelixError::ServerError { status: 502, .. }
        ));
        assert!(matches!(
            classify(StatusCode::NOT_FOUND, String::new(), None),
            HelixError::Api { status: 404, .. }
        ));
    }
}
