//! Typography renderer
//!
//! Builds a narrative prompt from the form and renders it either through the
//! simulated service (no API key) or the remote one.

use std::sync::Arc;

use super::create_image_service;
use super::error::{GenerationError, GenerationResult};
use super::traits::{ImageRequest, ImageService};
use crate::config::AppConfig;
use crate::logging::SharedLogger;
use crate::types::{CancellationToken, TypographyInput, TypographyOutput};

/// Appended to the prompt of simulated renders
pub const SIMULATED_SUFFIX: &str = " (SIMULATED)";

/// Background phrase used when the background field is empty
pub const DEFAULT_BACKGROUND: &str = "a neutral, clean studio setting to emphasize the text";

/// Assemble the natural-language prompt for an input
pub fn build_prompt(input: &TypographyInput) -> String {
    let background = if input.background.is_empty() {
        DEFAULT_BACKGROUND
    } else {
        input.background.as_str()
    };

    format!(
        "A photorealistic high-fidelity 3D render of the word \"{text}\". \
         The letters are formed using a {font} typography style, constructed entirely out of {material}. \
         The texture of the {material} is highly detailed, showing realistic surface properties. \
         The background features {background}. \
         The lighting is cinematic, accentuating the material's depth and form.",
        text = input.text,
        font = input.font_style,
        material = input.material,
        background = background,
    )
}

/// Detached unit of work produced by [`TypographyRenderer::start`]
pub struct TypographyJob {
    prompt: String,
    request: ImageRequest,
    service: Arc<dyn ImageService>,
    cancel: CancellationToken,
}

impl TypographyJob {
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Name of the backend this job will use
    pub fn service_name(&self) -> &str {
        self.service.name()
    }

    pub async fn run(self) -> GenerationResult<TypographyOutput> {
        let generated = self
            .cancel
            .run_until_cancelled(self.service.generate_image(&self.request))
            .await
            .ok_or(GenerationError::Cancelled)??;

        let prompt_used = if generated.simulated {
            format!("{}{}", self.prompt, SIMULATED_SUFFIX)
        } else {
            self.prompt
        };

        Ok(TypographyOutput {
            image_url: generated.image_url,
            prompt_used,
        })
    }
}

/// What the results panel shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderPhase<'a> {
    Idle,
    Generating,
    Ready(&'a TypographyOutput),
    Failed(&'a str),
}

/// Form and result state of one mounted typography renderer
pub struct TypographyRenderer {
    input: TypographyInput,
    generating: bool,
    result: Option<TypographyOutput>,
    error: Option<String>,
    in_flight: Option<CancellationToken>,
    config: AppConfig,
    logger: SharedLogger,
}

impl TypographyRenderer {
    pub fn new(config: AppConfig, logger: SharedLogger) -> Self {
        Self {
            input: TypographyInput::default(),
            generating: false,
            result: None,
            error: None,
            in_flight: None,
            config,
            logger,
        }
    }

    pub fn input(&self) -> &TypographyInput {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut TypographyInput {
        &mut self.input
    }

    pub fn is_generating(&self) -> bool {
        self.generating
    }

    pub fn result(&self) -> Option<&TypographyOutput> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The render action is enabled only for a complete form and no job in flight
    pub fn can_generate(&self) -> bool {
        self.input.is_complete() && !self.generating
    }

    pub fn phase(&self) -> RenderPhase<'_> {
        if self.generating {
            RenderPhase::Generating
        } else if let Some(error) = &self.error {
            RenderPhase::Failed(error)
        } else if let Some(result) = &self.result {
            RenderPhase::Ready(result)
        } else {
            RenderPhase::Idle
        }
    }

    /// Enter `Generating` and hand back the job to run
    ///
    /// Clears the previous result and error. Returns `None` when the action is
    /// disabled, or when the remote client could not be built (the renderer is
    /// then already in `Failed`).
    pub fn start(&mut self) -> Option<TypographyJob> {
        if !self.can_generate() {
            return None;
        }

        self.result = None;
        self.error = None;

        let service = match create_image_service(&self.input.api_key, &self.config, Arc::clone(&self.logger)) {
            Ok(service) => service,
            Err(e) => {
                self.logger.error(&format!("[TypographyRenderer] Could not create image service: {}", e));
                self.error = Some(e.user_message());
                return None;
            }
        };

        let prompt = build_prompt(&self.input);
        let cancel = CancellationToken::new();
        self.in_flight = Some(cancel.clone());
        self.generating = true;
        self.logger.info(&format!(
            "[TypographyRenderer] Rendering '{}' via {}",
            self.input.text,
            service.name()
        ));

        Some(TypographyJob {
            request: ImageRequest {
                prompt: prompt.clone(),
                aspect_ratio: self.input.aspect_ratio.clone(),
                image_size: self.input.image_size.clone(),
            },
            prompt,
            service,
            cancel,
        })
    }

    /// Record the job's outcome; always leaves `Generating`
    pub fn complete(&mut self, outcome: GenerationResult<TypographyOutput>) {
        self.generating = false;
        self.in_flight = None;

        match outcome {
            Ok(output) => {
                self.logger.info("[TypographyRenderer] Render ready");
                self.result = Some(output);
            }
            Err(GenerationError::Cancelled) => {
                self.logger.debug("[TypographyRenderer] Render cancelled");
            }
            Err(e) => {
                self.logger.warn(&format!("[TypographyRenderer] Render failed: {}", e));
                self.error = Some(e.user_message());
            }
        }
    }

    /// Abandon the in-flight job, if any
    pub fn cancel(&mut self) {
        if let Some(token) = self.in_flight.take() {
            token.cancel();
        }
    }

    /// Run a whole generation in place. Returns false if nothing was started.
    pub async fn generate(&mut self) -> bool {
        let Some(job) = self.start() else {
            return false;
        };
        let outcome = job.run().await;
        self.complete(outcome);
        true
    }
}

impl Drop for TypographyRenderer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::gemini::tests::serve_once;
    use crate::generators::simulated::PLACEHOLDER_IMAGE_URL;
    use crate::logging::NoOpLogger;
    use serde_json::json;
    use std::time::Duration;

    fn config() -> AppConfig {
        let mut config = AppConfig::default();
        config.simulation.delay_ms = 0;
        config
    }

    fn hello_input() -> TypographyInput {
        TypographyInput {
            text: "HELLO".to_string(),
            font_style: "Calligraphy".to_string(),
            material: "Bananas".to_string(),
            background: "Dark galaxy".to_string(),
            aspect_ratio: "16:9".to_string(),
            image_size: "4K".to_string(),
            thinking_level: "HIGH".to_string(),
            api_key: String::new(),
        }
    }

    fn renderer_with(input: TypographyInput, config: AppConfig) -> TypographyRenderer {
        let mut renderer = TypographyRenderer::new(config, NoOpLogger::shared());
        *renderer.input_mut() = input;
        renderer
    }

    #[test]
    fn test_prompt_uses_material_twice() {
        let prompt = build_prompt(&hello_input());
        assert!(prompt.contains("\"HELLO\""));
        assert!(prompt.contains("Calligraphy"));
        assert_eq!(prompt.matches("Bananas").count(), 2);
        assert!(prompt.contains("The letters are formed using"));
    }

    #[test]
    fn test_background_placeholder_iff_empty() {
        let mut input = hello_input();
        let prompt = build_prompt(&input);
        assert!(prompt.contains("Dark galaxy"));
        assert!(!prompt.contains(DEFAULT_BACKGROUND));

        input.background.clear();
        let prompt = build_prompt(&input);
        assert!(prompt.contains(DEFAULT_BACKGROUND));
    }

    #[tokio::test]
    async fn test_simulated_end_to_end() {
        let mut renderer = renderer_with(hello_input(), config());
        assert!(renderer.generate().await);

        assert!(!renderer.is_generating());
        let result = renderer.result().expect("ready");
        assert_eq!(result.image_url, PLACEHOLDER_IMAGE_URL);
        assert!(result.prompt_used.contains("\"HELLO\""));
        assert!(result.prompt_used.contains("Calligraphy"));
        assert_eq!(result.prompt_used.matches("Bananas").count(), 2);
        assert!(result.prompt_used.contains("Dark galaxy"));
        assert!(result.prompt_used.ends_with(SIMULATED_SUFFIX));
        assert!(matches!(renderer.phase(), RenderPhase::Ready(_)));
    }

    #[test]
    fn test_disabled_without_required_fields() {
        let mut input = hello_input();
        input.text.clear();
        let mut renderer = renderer_with(input, config());
        assert!(!renderer.can_generate());
        assert!(renderer.start().is_none());
        assert_eq!(renderer.phase(), RenderPhase::Idle);
    }

    #[test]
    fn test_start_picks_backend_from_api_key() {
        let mut renderer = renderer_with(hello_input(), config());
        let job = renderer.start().unwrap();
        assert_eq!(job.service_name(), "simulated");
        renderer.complete(Err(GenerationError::Cancelled));

        renderer.input_mut().api_key = "key".to_string();
        let job = renderer.start().unwrap();
        assert_eq!(job.service_name(), "gemini");
        assert!(renderer.start().is_none(), "one job in flight at a time");
    }

    #[tokio::test]
    async fn test_remote_success() {
        let body = json!({
            "candidates": [{ "content": { "parts": [{ "inlineData": { "mimeType": "image/png", "data": "iVBORw0KGgo=" } }] } }]
        });
        let (base, _captured) = serve_once(200, body.to_string()).await;
        let mut config = config();
        config.image_service.api_base = base;

        let mut input = hello_input();
        input.api_key = "test-key".to_string();
        let mut renderer = renderer_with(input, config);
        renderer.generate().await;

        let result = renderer.result().expect("ready");
        assert_eq!(result.image_url, "data:image/png;base64,iVBORw0KGgo=");
        assert_eq!(result.prompt_used, build_prompt(renderer.input()));
        assert!(!result.prompt_used.ends_with(SIMULATED_SUFFIX));
    }

    #[tokio::test]
    async fn test_remote_failure_surfaces_message_and_clears_flag() {
        let body = json!({ "error": { "message": "Quota exceeded" } });
        let (base, _captured) = serve_once(429, body.to_string()).await;
        let mut config = config();
        config.image_service.api_base = base;

        let mut input = hello_input();
        input.api_key = "test-key".to_string();
        let mut renderer = renderer_with(input, config);
        renderer.generate().await;

        assert!(!renderer.is_generating());
        assert!(renderer.result().is_none());
        assert_eq!(renderer.phase(), RenderPhase::Failed("Quota exceeded"));
    }

    #[tokio::test]
    async fn test_network_failure_is_recoverable() {
        // Nothing listens on this port once the listener is dropped
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let mut config = config();
        config.image_service.api_base = format!("http://{}/v1beta/models", addr);
        let mut input = hello_input();
        input.api_key = "test-key".to_string();
        let mut renderer = renderer_with(input, config);

        renderer.generate().await;
        assert!(matches!(renderer.phase(), RenderPhase::Failed(msg) if !msg.is_empty()));

        // Resubmitting without a key takes the simulated path and succeeds
        renderer.input_mut().api_key.clear();
        renderer.generate().await;
        assert!(renderer.error().is_none());
        assert!(matches!(renderer.phase(), RenderPhase::Ready(_)));
    }

    #[tokio::test]
    async fn test_network_failure_hides_api_key() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let mut config = config();
        config.image_service.api_base = format!("http://{}/v1beta/models", addr);
        let mut input = hello_input();
        input.api_key = "SUPER-SECRET-KEY".to_string();
        let mut renderer = renderer_with(input, config);

        renderer.generate().await;
        let message = renderer.error().expect("failed");
        assert!(!message.is_empty());
        assert!(!message.contains("SUPER-SECRET-KEY"), "key leaked: {}", message);
    }

    #[tokio::test]
    async fn test_unresponsive_service_times_out() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        // Accept and hold the connection without ever answering
        let server = tokio::spawn(async move {
            let (socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(30)).await;
            drop(socket);
        });

        let mut config = config();
        config.image_service.api_base = format!("http://{}/v1beta/models", addr);
        config.image_service.request_timeout_secs = 1;
        let mut input = hello_input();
        input.api_key = "test-key".to_string();
        let mut renderer = renderer_with(input, config);

        let started = std::time::Instant::now();
        renderer.generate().await;
        assert!(started.elapsed() < Duration::from_secs(10));
        assert!(!renderer.is_generating());
        assert!(matches!(renderer.phase(), RenderPhase::Failed(_)));
        assert!(renderer.result().is_none());
        server.abort();
    }

    #[tokio::test]
    async fn test_cancelled_job_leaves_no_error() {
        let mut config = config();
        config.simulation.delay_ms = 60_000;
        let mut renderer = renderer_with(hello_input(), config);

        let job = renderer.start().unwrap();
        renderer.cancel();
        let outcome = job.run().await;
        assert!(matches!(outcome, Err(GenerationError::Cancelled)));

        renderer.complete(outcome);
        assert_eq!(renderer.phase(), RenderPhase::Idle);
    }
}
