//! Ad generator request and result types

use serde::{Deserialize, Serialize};

/// Form input of the ad generator
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdInput {
    pub product_name: String,
    pub description: String,
    pub target_audience: String,
}

impl AdInput {
    pub fn new(
        product_name: impl Into<String>,
        description: impl Into<String>,
        target_audience: impl Into<String>,
    ) -> Self {
        Self {
            product_name: product_name.into(),
            description: description.into(),
            target_audience: target_audience.into(),
        }
    }

    /// All three fields are required
    pub fn is_complete(&self) -> bool {
        !self.product_name.is_empty()
            && !self.description.is_empty()
            && !self.target_audience.is_empty()
    }
}

/// One generated ad variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdOutput {
    pub id: String,
    pub headline: String,
    pub body_copy: String,
    pub image_url: String,
    /// Call-to-action label
    pub cta: String,
}
