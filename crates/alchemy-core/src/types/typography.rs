//! Typography renderer request and result types

use serde::{Deserialize, Serialize};

/// Maximum length of the text to render
pub const MAX_TEXT_LEN: usize = 50;

pub const FONT_STYLES: &[&str] = &[
    "Calligraphy",
    "Cursive",
    "Graffiti",
    "Bold Sans-Serif",
    "Serif",
    "Handwriting",
    "Gothic",
    "Neon",
    "Bubble",
    "Cyberpunk",
];

pub const ASPECT_RATIOS: &[&str] = &["1:1", "16:9", "9:16", "4:3", "3:4"];

pub const IMAGE_SIZES: &[&str] = &["1K", "2K", "4K"];

pub const THINKING_LEVELS: &[&str] = &["LOW", "HIGH"];

/// Form input of the typography renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyInput {
    pub text: String,
    pub font_style: String,
    pub material: String,
    /// Optional; an empty value selects the neutral studio background
    pub background: String,
    pub aspect_ratio: String,
    /// Resolution tier ("1K", "2K", "4K")
    pub image_size: String,
    pub thinking_level: String,
    /// Empty means the simulated path
    #[serde(default, skip_serializing)]
    pub api_key: String,
}

impl Default for TypographyInput {
    fn default() -> Self {
        Self {
            text: String::new(),
            font_style: "Calligraphy".to_string(),
            material: "Gold".to_string(),
            background: String::new(),
            aspect_ratio: "1:1".to_string(),
            image_size: "1K".to_string(),
            thinking_level: "HIGH".to_string(),
            api_key: String::new(),
        }
    }
}

impl TypographyInput {
    /// Text, font style and material are required
    pub fn is_complete(&self) -> bool {
        !self.text.is_empty() && !self.font_style.is_empty() && !self.material.is_empty()
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// File name offered by the download action
    pub fn download_file_name(&self) -> String {
        let stem: String = self
            .text
            .chars()
            .map(|c| match c {
                '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
                c => c,
            })
            .collect();
        format!("typography-{}.png", stem)
    }
}

/// A rendered image together with the prompt that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyOutput {
    /// Remote URL or `data:` URI
    pub image_url: String,
    pub prompt_used: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_come_from_choice_lists() {
        let input = TypographyInput::default();
        assert!(FONT_STYLES.contains(&input.font_style.as_str()));
        assert!(ASPECT_RATIOS.contains(&input.aspect_ratio.as_str()));
        assert!(IMAGE_SIZES.contains(&input.image_size.as_str()));
        assert!(THINKING_LEVELS.contains(&input.thinking_level.as_str()));
        assert!(!input.is_complete(), "text starts empty");
    }

    #[test]
    fn test_required_fields() {
        let mut input = TypographyInput {
            text: "HELLO".to_string(),
            ..Default::default()
        };
        assert!(input.is_complete());

        input.material.clear();
        assert!(!input.is_complete());

        input.material = "Ice".to_string();
        input.background.clear();
        assert!(input.is_complete(), "background is optional");
    }

    #[test]
    fn test_download_file_name() {
        let input = TypographyInput {
            text: "HELLO".to_string(),
            ..Default::default()
        };
        assert_eq!(input.download_file_name(), "typography-HELLO.png");

        let input = TypographyInput {
            text: "A/B".to_string(),
            ..Default::default()
        };
        assert_eq!(input.download_file_name(), "typography-A_B.png");
    }
}
