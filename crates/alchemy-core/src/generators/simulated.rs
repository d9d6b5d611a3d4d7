//! Simulated image service
//!
//! Stands in for the remote service when no API key is supplied. It cannot fail.

use async_trait::async_trait;
use std::time::Duration;

use super::error::GenerationResult;
use super::traits::{GeneratedImage, ImageRequest, ImageService};
use crate::logging::SharedLogger;

/// Abstract 3D art used as the simulated render
pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1618005182384-a83a8bd57fbe?auto=format&fit=crop&w=800&q=80";

/// Fake backend: sleeps for the configured delay and returns the placeholder
pub struct SimulatedImageService {
    delay: Duration,
    logger: SharedLogger,
}

impl SimulatedImageService {
    pub fn new(delay: Duration, logger: SharedLogger) -> Self {
        Self { delay, logger }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait]
impl ImageService for SimulatedImageService {
    fn name(&self) -> &str {
        "simulated"
    }

    async fn generate_image(&self, request: &ImageRequest) -> GenerationResult<GeneratedImage> {
        self.logger.debug(&format!(
            "[SimulatedImageService] Simulating {} render ({}) after {:?}",
            request.image_size, request.aspect_ratio, self.delay
        ));

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        Ok(GeneratedImage {
            image_url: PLACEHOLDER_IMAGE_URL.to_string(),
            simulated: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::NoOpLogger;

    #[tokio::test(start_paused = true)]
    async fn test_waits_then_returns_placeholder() {
        let service = SimulatedImageService::new(Duration::from_secs(2), NoOpLogger::shared());
        let request = ImageRequest {
            prompt: "anything".to_string(),
            aspect_ratio: "1:1".to_string(),
            image_size: "1K".to_string(),
        };

        let started = tokio::time::Instant::now();
        let image = service.generate_image(&request).await.unwrap();

        assert!(started.elapsed() >= Duration::from_secs(2));
        assert_eq!(image.image_url, PLACEHOLDER_IMAGE_URL);
        assert!(image.simulated);
    }
}
