//! Personalized ad generator
//!
//! A fully local simulation: after a fixed delay two ad variants are derived
//! from the form input. There is no failure path.

use std::time::Duration;

use crate::logging::SharedLogger;
use crate::types::{AdInput, AdOutput};

/// Stock visuals paired with the two variants
pub const AD_IMAGE_URLS: [&str; 2] = [
    "https://images.unsplash.com/photo-1542291026-7eec264c27ff?auto=format&fit=crop&w=800&q=80",
    "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?auto=format&fit=crop&w=800&q=80",
];

fn or_default<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

/// Derive the two ad variants for an input
pub fn compose_ads(input: &AdInput) -> Vec<AdOutput> {
    let product = input.product_name.as_str();
    let audience = input.target_audience.as_str();

    vec![
        AdOutput {
            id: "1".to_string(),
            headline: format!("Discover the Future of {}", or_default(product, "Innovation")),
            body_copy: format!(
                "Experience unparalleled quality with our latest {}. Designed for {}, this is the upgrade you've been waiting for.",
                product,
                or_default(audience, "visionaries")
            ),
            image_url: AD_IMAGE_URLS[0].to_string(),
            cta: "Shop Now".to_string(),
        },
        AdOutput {
            id: "2".to_string(),
            headline: format!("Elevate Your Lifestyle with {}", or_default(product, "Style")),
            body_copy: format!(
                "Join thousands of happy customers who have transformed their daily routine. Perfect for {}, it's time to make a statement.",
                or_default(audience, "everyone")
            ),
            image_url: AD_IMAGE_URLS[1].to_string(),
            cta: "Learn More".to_string(),
        },
    ]
}

/// Detached unit of work produced by [`AdGenerator::start`]
#[derive(Debug, Clone)]
pub struct AdJob {
    input: AdInput,
    delay: Duration,
}

impl AdJob {
    pub async fn run(self) -> Vec<AdOutput> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        compose_ads(&self.input)
    }
}

/// What the results panel shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdPhase<'a> {
    Idle,
    Generating,
    Ready(&'a [AdOutput]),
}

/// Form and result state of one mounted ad generator
pub struct AdGenerator {
    input: AdInput,
    generating: bool,
    results: Vec<AdOutput>,
    delay: Duration,
    logger: SharedLogger,
}

impl AdGenerator {
    pub fn new(delay: Duration, logger: SharedLogger) -> Self {
        Self {
            input: AdInput::default(),
            generating: false,
            results: Vec::new(),
            delay,
            logger,
        }
    }

    pub fn input(&self) -> &AdInput {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut AdInput {
        &mut self.input
    }

    pub fn is_generating(&self) -> bool {
        self.generating
    }

    pub fn results(&self) -> &[AdOutput] {
        &self.results
    }

    /// The generate action is enabled only for a complete form and no job in flight
    pub fn can_generate(&self) -> bool {
        self.input.is_complete() && !self.generating
    }

    pub fn phase(&self) -> AdPhase<'_> {
        if self.generating {
            AdPhase::Generating
        } else if self.results.is_empty() {
            AdPhase::Idle
        } else {
            AdPhase::Ready(&self.results)
        }
    }

    /// Enter `Generating` and hand back the job to run, if generation is allowed
    pub fn start(&mut self) -> Option<AdJob> {
        if !self.can_generate() {
            return None;
        }

        self.generating = true;
        self.logger.info(&format!(
            "[AdGenerator] Generating ads for '{}'",
            self.input.product_name
        ));
        Some(AdJob {
            input: self.input.clone(),
            delay: self.delay,
        })
    }

    /// Store the job's results and leave `Generating`
    pub fn complete(&mut self, results: Vec<AdOutput>) {
        self.logger.debug(&format!("[AdGenerator] {} variants ready", results.len()));
        self.results = results;
        self.generating = false;
    }

    /// Run a whole generation in place. Returns false if the action was disabled.
    pub async fn generate(&mut self) -> bool {
        let Some(job) = self.start() else {
            return false;
        };
        let results = job.run().await;
        self.complete(results);
        true
    }
}
