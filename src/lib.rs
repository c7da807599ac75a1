// This file exposes the modules as public modules in the crate

pub mod assembler;
pub mod catalog;
pub mod category;
pub mod config;
pub mod errors;
pub mod fields;
pub mod forms;
pub mod frameworks;
pub mod generator;
pub mod history;
pub mod logging;
pub mod principles;
pub mod random_prompts;
pub mod sections;
pub mod store;
pub mod trending;
pub mod validator;

pub use assembler::{PromptAssembler, assemble_image_prompt, validate_required};
pub use catalog::{DEFAULT_CATALOG, OptionDescriptor, ReferenceCatalog};
pub use category::PromptCategory;
pub use config::{ConfigManager, GeneratorConfig, ImageDirectives};
pub use errors::{PromptError, PromptResult, StoreError};
pub use fields::{FieldSet, FieldValue, SelectedOptions, SelectionGroups};
pub use generator::PromptGenerator;
pub use history::{GeneratedPrompt, HistoryStore};
pub use logging::init_tracing;
pub use random_prompts::random_prompt;
pub use store::{FileStore, KeyValueStore, MemoryStore};
pub use trending::{TrendingCache, extract_parameters, import_prompt, time_ago};
pub use validator::{is_valid_prompt, validate_prompt};
