//! Gemini image service
//!
//! Issues one `generateContent` POST per request and pulls the first inline
//! image out of the response.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::error::{GenerationError, GenerationResult, GENERIC_API_FAILURE};
use super::traits::{GeneratedImage, ImageRequest, ImageService};
use crate::config::ImageServiceSettings;
use crate::images::ImageRef;
use crate::logging::SharedLogger;

// Request body

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    generation_config: GenerationConfig<'a>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<TextPart<'a>>,
}

#[derive(Debug, Serialize)]
struct TextPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_modalities: [&'static str; 1],
    image_config: ImageConfig<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ImageConfig<'a> {
    aspect_ratio: &'a str,
    image_size: &'a str,
}

impl<'a> GenerateContentRequest<'a> {
    fn new(request: &'a ImageRequest) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![TextPart { text: &request.prompt }],
            }],
            generation_config: GenerationConfig {
                response_modalities: ["Image"],
                image_config: ImageConfig {
                    aspect_ratio: &request.aspect_ratio,
                    image_size: &request.image_size,
                },
            },
        }
    }
}

// Response bodies. Every field is optional on the wire.

#[derive(Debug, Default, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponsePart {
    #[serde(default)]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    #[serde(default)]
    mime_type: String,
    #[serde(default)]
    data: String,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    error: Option<ErrorDetail>,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    message: Option<String>,
}

/// Pull the first inline image out of a success body
fn extract_image(body: &GenerateContentResponse) -> GenerationResult<ImageRef> {
    let inline = body
        .candidates
        .first()
        .and_then(|c| c.content.as_ref())
        .and_then(|content| content.parts.iter().find_map(|p| p.inline_data.as_ref()))
        .filter(|inline| !inline.data.is_empty())
        .ok_or(GenerationError::NoImageData)?;

    Ok(ImageRef::inline(&inline.mime_type, &inline.data))
}

/// Message for a non-success response, falling back to a generic one
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(|e| e.error)
        .and_then(|e| e.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| GENERIC_API_FAILURE.to_string())
}

/// Remote backend talking to the Gemini `generateContent` endpoint
pub struct GeminiImageService {
    client: reqwest::Client,
    api_key: String,
    settings: ImageServiceSettings,
    logger: SharedLogger,
}

impl GeminiImageService {
    /// Create a service bound to one API key
    ///
    /// Every request is bounded by `settings.request_timeout_secs`.
    pub fn new(
        api_key: impl Into<String>,
        settings: ImageServiceSettings,
        logger: SharedLogger,
    ) -> GenerationResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(settings.request_timeout())
            .build()
            .map_err(|e| GenerationError::Other(format!("Could not build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            settings,
            logger,
        })
    }
}

#[async_trait]
impl ImageService for GeminiImageService {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate_image(&self, request: &ImageRequest) -> GenerationResult<GeneratedImage> {
        let url = self.settings.generate_url();
        self.logger.info(&format!(
            "[GeminiImageService] POST {} (model={}, aspect={}, size={})",
            url, self.settings.model, request.aspect_ratio, request.image_size
        ));

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&GenerateContentRequest::new(request))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = error_message(&body);
            self.logger.warn(&format!(
                "[GeminiImageService] Request failed ({}): {}",
                status.as_u16(),
                message
            ));
            return Err(GenerationError::api_error(status.as_u16(), message));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&body)?;
        let image = extract_image(&parsed)?;
        self.logger.info("[GeminiImageService] Received inline image");

        Ok(GeneratedImage {
            image_url: image.to_url(),
            simulated: false,
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::logging::NoOpLogger;
    use serde_json::json;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    /// Raw request seen by the fake server
    pub(crate) struct CapturedRequest {
        pub head: String,
        pub body: serde_json::Value,
    }

    /// Serve exactly one canned HTTP response on a random local port
    ///
    /// Returns the base URL to use as `api_base` and the captured request.
    pub(crate) async fn serve_once(
        status: u16,
        response_body: String,
    ) -> (String, oneshot::Receiver<CapturedRequest>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = Vec::new();
            let mut chunk = [0u8; 4096];

            let header_end = loop {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    return;
                }
                buf.extend_from_slice(&chunk[..n]);
                if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                    break pos + 4;
                }
            };
            let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
            let content_length = head
                .lines()
                .filter_map(|line| line.split_once(':'))
                .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
                .and_then(|(_, value)| value.trim().parse::<usize>().ok())
                .unwrap_or(0);
            while buf.len() < header_end + content_length {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..n]);
            }
            let end = buf.len().min(header_end + content_length);
            let body = serde_json::from_slice(&buf[header_end..end])
                .unwrap_or(serde_json::Value::Null);

            let response = format!(
                "HTTP/1.1 {} Canned\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                status,
                response_body.len(),
                response_body
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
            let _ = tx.send(CapturedRequest { head, body });
        });

        (format!("http://{}/v1beta/models", addr), rx)
    }

    pub(crate) fn settings_for(api_base: &str) -> ImageServiceSettings {
        ImageServiceSettings {
            api_base: api_base.to_string(),
            model: "test-image-model".to_string(),
            request_timeout_secs: 5,
        }
    }

    fn request() -> ImageRequest {
        ImageRequest {
            prompt: "render HELLO".to_string(),
            aspect_ratio: "16:9".to_string(),
            image_size: "4K".to_string(),
        }
    }

    fn service(api_base: &str) -> GeminiImageService {
        GeminiImageService::new("test-key", settings_for(api_base), NoOpLogger::shared()).unwrap()
    }

    #[test]
    fn test_request_body_shape() {
        let request = request();
        let body = serde_json::to_value(GenerateContentRequest::new(&request)).unwrap();
        assert_eq!(
            body,
            json!({
                "contents": [{ "parts": [{ "text": "render HELLO" }] }],
                "generationConfig": {
                    "responseModalities": ["Image"],
                    "imageConfig": { "aspectRatio": "16:9", "imageSize": "4K" }
                }
            })
        );
    }

    #[test]
    fn test_extract_image_skips_text_parts() {
        let body: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{
                "content": {
                    "parts": [
                        { "text": "Here is your render" },
                        { "inlineData": { "mimeType": "image/png", "data": "iVBORw0KGgo=" } }
                    ]
                }
            }]
        }))
        .unwrap();

        let image = extract_image(&body).unwrap();
        assert_eq!(image.to_url(), "data:image/png;base64,iVBORw0KGgo=");
    }

    #[test]
    fn test_extract_image_missing() {
        let no_candidates = GenerateContentResponse::default();
        assert!(matches!(extract_image(&no_candidates), Err(GenerationError::NoImageData)));

        let text_only: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{ "content": { "parts": [{ "text": "I cannot draw that" }] } }]
        }))
        .unwrap();
        assert!(matches!(extract_image(&text_only), Err(GenerationError::NoImageData)));
    }

    #[test]
    fn test_error_message_fallback() {
        assert_eq!(
            error_message(r#"{"error":{"code":400,"message":"API key not valid."}}"#),
            "API key not valid."
        );
        assert_eq!(error_message(r#"{"error":{}}"#), GENERIC_API_FAILURE);
        assert_eq!(error_message("<html>bad gateway</html>"), GENERIC_API_FAILURE);
    }

    #[tokio::test]
    async fn test_generate_image_success() {
        let body = json!({
            "candidates": [{
                "content": { "parts": [{ "inlineData": { "mimeType": "image/jpeg", "data": "/9j/4AAQ" } }] }
            }]
        });
        let (base, captured) = serve_once(200, body.to_string()).await;

        let image = service(&base).generate_image(&request()).await.unwrap();
        assert_eq!(image.image_url, "data:image/jpeg;base64,/9j/4AAQ");
        assert!(!image.simulated);

        let captured = captured.await.unwrap();
        assert!(captured
            .head
            .starts_with("POST /v1beta/models/test-image-model:generateContent?key=test-key "));
        assert_eq!(captured.body["generationConfig"]["imageConfig"]["imageSize"], "4K");
        assert_eq!(captured.body["contents"][0]["parts"][0]["text"], "render HELLO");
    }

    #[tokio::test]
    async fn test_generate_image_api_error() {
        let body = json!({ "error": { "code": 403, "message": "Permission denied" } });
        let (base, _captured) = serve_once(403, body.to_string()).await;

        let err = service(&base).generate_image(&request()).await.unwrap_err();
        assert!(matches!(err, GenerationError::Api { status: 403, .. }));
        assert_eq!(err.user_message(), "Permission denied");
    }

    #[tokio::test]
    async fn test_generate_image_without_inline_data() {
        let body = json!({ "candidates": [{ "content": { "parts": [{ "text": "no" }] } }] });
        let (base, _captured) = serve_once(200, body.to_string()).await;

        let err = service(&base).generate_image(&request()).await.unwrap_err();
        assert_eq!(err.user_message(), "No image data received");
    }

    #[tokio::test]
    async fn test_generate_image_unparseable_success_body() {
        let (base, _captured) = serve_once(200, "not json".to_string()).await;

        let err = service(&base).generate_image(&request()).await.unwrap_err();
        assert!(matches!(err, GenerationError::Json(_)));
        assert!(!err.user_message().is_empty());
    }
}
