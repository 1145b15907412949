//! Shared HTTP response checks for provider clients.

use kw_core::enums::AiModel;

use crate::error::AiError;

/// Check a provider response for quota and status errors.
///
/// - **429 Too Many Requests** → [`AiError::QuotaExceeded`]
/// - **Non-success with a quota body** (`quota`, `RESOURCE_EXHAUSTED`) →
///   [`AiError::QuotaExceeded`]
/// - **Other non-success** → [`AiError::Api`] with the response body
pub async fn check_response(
    provider: AiModel,
    resp: reqwest::Response,
) -> Result<reqwest::Response, AiError> {
    let status = resp.status();
    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(AiError::QuotaExceeded { provider });
    }
    if !status.is_success() {
        let message = resp.text().await.unwrap_or_default();
        if mentions_quota(&message) {
            return Err(AiError::QuotaExceeded { provider });
        }
        return Err(AiError::Api {
            provider,
            status: status.as_u16(),
            message,
        });
    }
    Ok(resp)
}

fn mentions_quota(body: &str) -> bool {
    body.contains("RESOURCE_EXHAUSTED") || body.to_ascii_lowercase().contains("quota")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, body: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body.to_string())
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn success_passes_through() {
        let resp = check_response(AiModel::Gemini, mock_response(200, "{}"))
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
    }

    #[tokio::test]
    async fn too_many_requests_is_quota() {
        let err = check_response(AiModel::Gemini, mock_response(429, ""))
            .await
            .unwrap_err();
        assert!(matches!(err, AiError::QuotaExceeded { provider: AiModel::Gemini }));
    }

    #[tokio::test]
    async fn resource_exhausted_body_is_quota() {
        let body = r#"{"error":{"code":403,"status":"RESOURCE_EXHAUSTED"}}"#;
        let err = check_response(AiModel::Gemini, mock_response(403, body))
            .await
            .unwrap_err();
        assert!(matches!(err, AiError::QuotaExceeded { .. }));
    }

    #[tokio::test]
    async fn other_failures_keep_status_and_body() {
        let err = check_response(AiModel::DeepSeek, mock_response(401, "invalid key"))
            .await
            .unwrap_err();
        match err {
            AiError::Api {
                provider,
                status,
                message,
            } => {
                assert_eq!(provider, AiModel::DeepSeek);
                assert_eq!(status, 401);
                assert_eq!(message, "invalid key");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn quota_detection_is_case_insensitive() {
        assert!(mentions_quota("Quota exceeded for metric"));
        assert!(!mentions_quota("invalid argument"));
    }
}
