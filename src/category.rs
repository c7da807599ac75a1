use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

use crate::errors::PromptError;

// Define prompt categories
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum PromptCategory {
    #[default]
    ImageGeneration,
    Writing,
    WebDesign,
    Coding,
    LogoDesign,
    ResearchTrending,
}

impl PromptCategory {
    /// Stable identifier used by forms and in persisted history
    pub fn id(&self) -> &'static str {
        match self {
            PromptCategory::ImageGeneration => "image-generation",
            PromptCategory::Writing => "writing",
            PromptCategory::WebDesign => "web-design",
            PromptCategory::Coding => "coding",
            PromptCategory::LogoDesign => "logo-design",
            PromptCategory::ResearchTrending => "research-trending",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PromptCategory::ImageGeneration => "Image Generation",
            PromptCategory::Writing => "Writing",
            PromptCategory::WebDesign => "Web Design",
            PromptCategory::Coding => "Coding",
            PromptCategory::LogoDesign => "Logo Design",
            PromptCategory::ResearchTrending => "Research & Trending",
        }
    }

    /// Name of the labeling template used for the category
    pub fn framework(&self) -> &'static str {
        match self {
            PromptCategory::ImageGeneration => "Descriptive + Parameters",
            PromptCategory::Writing => "RACE",
            PromptCategory::WebDesign => "CO-STAR",
            PromptCategory::Coding => "CRISPE",
            PromptCategory::LogoDesign => "CO-STAR",
            PromptCategory::ResearchTrending => "Research",
        }
    }

    pub fn all_categories() -> Vec<PromptCategory> {
        vec![
            PromptCategory::ImageGeneration,
            PromptCategory::Writing,
            PromptCategory::WebDesign,
            PromptCategory::Coding,
            PromptCategory::LogoDesign,
            PromptCategory::ResearchTrending,
        ]
    }

    /// Lenient lookup: unknown ids fall back to image generation.
    pub fn resolve(id: &str) -> PromptCategory {
        match id.parse() {
            Ok(category) => category,
            Err(_) => {
                warn!("Unknown prompt category '{}', falling back to image-generation", id);
                PromptCategory::ImageGeneration
            }
        }
    }
}

impl fmt::Display for PromptCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for PromptCategory {
    type Err = PromptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PromptCategory::all_categories()
            .into_iter()
            .find(|category| category.id() == s.trim())
            .ok_or_else(|| PromptError::UnknownCategory(s.to_string()))
    }
}
