use std::future::Future;
use std::time::Duration;

use kw_config::SpeechConfig;
use kw_core::voice::Voice;
use reqwest::StatusCode;

use crate::error::SpeechError;
use crate::ssml::build_ssml;

/// Text and a voice in, audio bytes out.
pub trait Synthesizer {
    fn synthesize(
        &self,
        text: &str,
        voice: Voice,
    ) -> impl Future<Output = Result<Vec<u8>, SpeechError>> + Send;
}

pub struct SpeechClient {
    http: reqwest::Client,
    key: String,
    url: String,
    output_format: String,
}

impl SpeechClient {
    /// # Errors
    ///
    /// Returns [`SpeechError::NotConfigured`] without a key and region (or
    /// endpoint), or [`SpeechError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &SpeechConfig, timeout: Duration) -> Result<Self, SpeechError> {
        if !config.is_configured() {
            return Err(SpeechError::NotConfigured);
        }
        Ok(Self {
            http: reqwest::Client::builder()
                .user_agent("kewen/0.1")
                .timeout(timeout)
                .build()?,
            key: config.key.clone(),
            url: config.synthesis_url(),
            output_format: config.output_format.clone(),
        })
    }
}

impl Synthesizer for SpeechClient {
    async fn synthesize(&self, text: &str, voice: Voice) -> Result<Vec<u8>, SpeechError> {
        tracing::debug!(voice = voice.id(), chars = text.chars().count(), "speech synthesis");
        let resp = self
            .http
            .post(&self.url)
            .header("Ocp-Apim-Subscription-Key", &self.key)
            .header(reqwest::header::CONTENT_TYPE, "application/ssml+xml")
            .header("X-Microsoft-OutputFormat", &self.output_format)
            .body(build_ssml(text, voice))
            .send()
            .await?;
        let resp = check_response(resp).await?;

        let audio = resp.bytes().await?;
        if audio.is_empty() {
            return Err(SpeechError::Canceled {
                reason: "no audio returned".into(),
            });
        }
        Ok(audio.to_vec())
    }
}

/// Map refusal statuses to [`SpeechError::Canceled`] with a readable reason.
async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, SpeechError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    let reason = match status {
        StatusCode::BAD_REQUEST => format!("invalid request {}", body.trim()),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            "authentication failed; check the subscription key and region".to_string()
        }
        StatusCode::TOO_MANY_REQUESTS => "too many requests; try again later".to_string(),
        _ => {
            return Err(SpeechError::Api {
                status: status.as_u16(),
                message: body,
            });
        }
    };
    Err(SpeechError::Canceled {
        reason: reason.trim().to_string(),
    })
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

    #[test]
    fn requires_key_and_region() {
        let config = SpeechConfig {
            key: "k".into(),
            ..Default::default()
        };
        assert!(matches!(
            SpeechClient::new(&config, Duration::from_secs(5)),
            Err(SpeechError::NotConfigured)
        ));
    }

    #[test]
    fn url_comes_from_region() {
        let config = SpeechConfig {
            key: "k".into(),
            region: "eastasia".into(),
            ..Default::default()
        };
        let client = SpeechClient::new(&config, Duration::from_secs(5)).unwrap();
        assert_eq!(
            client.url,
            "https://eastasia.tts.speech.microsoft.com/cognitiveservices/v1"
        );
        assert_eq!(client.output_format, "riff-24khz-16bit-mono-pcm");
    }

    #[tokio::test]
    async fn auth_failure_is_canceled() {
        let err = check_response(mock_response(401, "")).await.unwrap_err();
        match err {
            SpeechError::Canceled { reason } => assert!(reason.starts_with("authentication")),
            other => panic!("expected Canceled, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn server_error_keeps_status() {
        let err = check_response(mock_response(502, "bad gateway")).await.unwrap_err();
        assert!(matches!(err, SpeechError::Api { status: 502, .. }));
    }

    #[tokio::test]
    async fn success_passes_through() {
        assert!(check_response(mock_response(200, "RIFF")).await.is_ok());
    }
}
