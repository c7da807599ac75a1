use tracing::info;

use crate::assembler::{validate_required, PromptAssembler};
use crate::category::PromptCategory;
use crate::config::GeneratorConfig;
use crate::errors::{PromptError, PromptResult};
use crate::fields::{FieldSet, SelectionGroups};
use crate::history::{GeneratedPrompt, HistoryStore};
use crate::store::KeyValueStore;

/// Prompt assembly plus the history of accepted prompts
pub struct PromptGenerator<S: KeyValueStore> {
    assembler: PromptAssembler,
    history: HistoryStore<S>,
}

impl<S: KeyValueStore> PromptGenerator<S> {
    /// Build a generator and restore any persisted history
    pub fn new(config: GeneratorConfig, store: S) -> Self {
        let mut history = HistoryStore::new(store, config.history_capacity, config.history_key.clone());
        history.load();

        Self {
            assembler: PromptAssembler::new(config),
            history,
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        self.assembler.config()
    }

    pub fn generate_prompt(
        &self,
        category: PromptCategory,
        fields: &FieldSet,
        selections: &SelectionGroups,
    ) -> Option<String> {
        self.assembler.generate_prompt(category, fields, selections)
    }

    /// Generate from a raw category id; unknown ids produce an image prompt
    pub fn generate_for_id(
        &self,
        category_id: &str,
        fields: &FieldSet,
        selections: &SelectionGroups,
    ) -> Option<String> {
        self.assembler.generate_for_id(category_id, fields, selections)
    }

    /// Validate required fields, generate and record the result
    pub fn generate_and_record(
        &mut self,
        category: PromptCategory,
        fields: &FieldSet,
        selections: &SelectionGroups,
    ) -> PromptResult<GeneratedPrompt> {
        validate_required(category, fields)?;

        let text = self
            .assembler
            .generate_prompt(category, fields, selections)
            .ok_or(PromptError::DegenerateOutput {
                min_length: self.config().min_prompt_length,
            })?;

        let entry = self.history.record(text, category);
        info!("Generated {} prompt {}", category, entry.id);
        Ok(entry)
    }

    pub fn record_prompt(&mut self, text: impl Into<String>, category: PromptCategory) -> GeneratedPrompt {
        self.history.record(text, category)
    }

    pub fn history(&self) -> &[GeneratedPrompt] {
        self.history.list()
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}
