use tracing::{debug, warn};

use crate::category::PromptCategory;
use crate::config::GeneratorConfig;
use crate::errors::{PromptError, PromptResult};
use crate::fields::{FieldSet, SelectionGroups};
use crate::forms::{CodingFields, ImageFields, LogoFields, ResearchFields, WebDesignFields, WritingFields};
use crate::frameworks::{
    assemble_coding_prompt, assemble_logo_prompt, assemble_research_prompt, assemble_web_design_prompt,
    assemble_writing_prompt,
};
use crate::sections::ImageSections;
use crate::validator::validate_prompt;

const DESCRIPTIVE_SEPARATOR: &str = ", ";
const DIRECTIVE_SEPARATOR: &str = " ";

/// Join image sections: descriptive fragments form one comma separated
/// sentence, directive tokens follow separated by spaces.
pub fn assemble_image_prompt(sections: &ImageSections) -> String {
    let descriptive = join_non_empty(&sections.descriptive(), DESCRIPTIVE_SEPARATOR);
    let directives = join_non_empty(&sections.directives(), DIRECTIVE_SEPARATOR);

    join_non_empty(&[descriptive.as_str(), directives.as_str()], DIRECTIVE_SEPARATOR)
        .trim()
        .to_string()
}

fn join_non_empty(parts: &[&str], separator: &str) -> String {
    parts
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Check the fields a category cannot do without. Only image generation has
/// required fields; every problem is reported at once.
pub fn validate_required(category: PromptCategory, fields: &FieldSet) -> PromptResult<()> {
    if category != PromptCategory::ImageGeneration {
        return Ok(());
    }

    let missing = ImageFields::from_field_set(fields).missing_required();
    if missing.is_empty() {
        Ok(())
    } else {
        debug!("Image form is missing {} required fields", missing.len());
        Err(PromptError::MissingRequiredFields(missing))
    }
}

/// Turns a field set into prompt text for one category
#[derive(Debug, Clone, Default)]
pub struct PromptAssembler {
    config: GeneratorConfig,
}

impl PromptAssembler {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Assemble the prompt without validating it
    pub fn assemble(&self, category: PromptCategory, fields: &FieldSet, selections: &SelectionGroups) -> String {
        match category {
            PromptCategory::ImageGeneration => {
                let image = ImageFields::from_field_set(fields);
                let sections = ImageSections::build(
                    &image,
                    selections.styles(),
                    selections.lighting(),
                    &self.config.image_directives,
                );
                assemble_image_prompt(&sections)
            }
            PromptCategory::Writing => assemble_writing_prompt(&WritingFields::from_field_set(fields)),
            PromptCategory::WebDesign => assemble_web_design_prompt(&WebDesignFields::from_field_set(fields)),
            PromptCategory::Coding => assemble_coding_prompt(&CodingFields::from_field_set(fields)),
            PromptCategory::LogoDesign => assemble_logo_prompt(&LogoFields::from_field_set(fields)),
            PromptCategory::ResearchTrending => assemble_research_prompt(&ResearchFields::from_field_set(fields)),
        }
    }

    /// Assemble and validate. Degenerate output yields `None`.
    pub fn generate_prompt(
        &self,
        category: PromptCategory,
        fields: &FieldSet,
        selections: &SelectionGroups,
    ) -> Option<String> {
        let prompt = self.assemble(category, fields, selections);
        if validate_prompt(Some(&prompt), self.config.min_prompt_length) {
            Some(prompt)
        } else {
            warn!("Discarded degenerate {} prompt", category);
            None
        }
    }

    /// Same as [`generate_prompt`](Self::generate_prompt) for a raw category
    /// id; unknown ids are treated as image generation.
    pub fn generate_for_id(&self, category_id: &str, fields: &FieldSet, selections: &SelectionGroups) -> Option<String> {
        self.generate_prompt(PromptCategory::resolve(category_id), fields, selections)
    }
}
