//! Generators behind the built-in tools
//!
//! ## Architecture
//!
//! ```text
//! AdGenerator ──────────── local simulation (delay + templates)
//!
//! TypographyRenderer ──┬── SimulatedImageService   (no API key)
//!                      └── GeminiImageService      (API key, one POST)
//! ```
//!
//! Each tool splits a generation into `start()` (validate, enter
//! Generating, snapshot the form into a job), the job's `run()` future, and
//! `complete()`, which always leaves Generating.

mod traits;
mod error;
mod simulated;
mod gemini;
mod ad;
mod typography;

pub use traits::{GeneratedImage, ImageRequest, ImageService};
pub use error::{GenerationError, GenerationResult, GENERIC_API_FAILURE, GENERIC_FAILURE, NO_IMAGE_DATA};
pub use simulated::{SimulatedImageService, PLACEHOLDER_IMAGE_URL};
pub use gemini::GeminiImageService;
pub use ad::{compose_ads, AdGenerator, AdJob, AdPhase, AD_IMAGE_URLS};
pub use typography::{
    build_prompt, RenderPhase, TypographyJob, TypographyRenderer, DEFAULT_BACKGROUND,
    SIMULATED_SUFFIX,
};

use std::sync::Arc;

use crate::config::AppConfig;
use crate::logging::SharedLogger;

/// Pick the image backend for an API key
///
/// A blank key selects the simulated service; anything else the remote one.
pub fn create_image_service(
    api_key: &str,
    config: &AppConfig,
    logger: SharedLogger,
) -> GenerationResult<Arc<dyn ImageService>> {
    let api_key = api_key.trim();
    if api_key.is_empty() {
        return Ok(Arc::new(SimulatedImageService::new(config.simulation.delay(), logger)));
    }

    Ok(Arc::new(GeminiImageService::new(
        api_key,
        config.image_service.clone(),
        logger,
    )?))
}
