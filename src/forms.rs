// Typed per-category views over a FieldSet, extracted once at the boundary.
// Every member holds a trimmed, non-blank value or None.

use serde::{Deserialize, Serialize};

use crate::fields::FieldSet;

pub const MISSING_SUBJECT_MESSAGE: &str = "Please select or enter a main subject";
pub const MISSING_ACTION_MESSAGE: &str = "Please select or enter an action/pose";

/// Fields of the image generation form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageFields {
    /// Main subject; a custom subject overrides the preset one
    pub subject: Option<String>,
    /// Action or pose; a custom action overrides the preset one
    pub action: Option<String>,
    pub setting: Option<String>,

    pub texture: Option<String>,
    pub material: Option<String>,
    pub age: Option<String>,
    pub condition: Option<String>,

    pub style: Option<String>,

    pub mood: Option<String>,
    pub emotion: Option<String>,
    pub atmosphere: Option<String>,

    pub shot_type: Option<String>,
    pub angle: Option<String>,
    pub perspective: Option<String>,

    pub shot_view: Option<String>,
    pub lens_type: Option<String>,

    pub composition: Option<String>,
    pub depth_of_field: Option<String>,
    pub focus_point: Option<String>,

    pub color_scheme: Option<String>,
    pub dominant_color: Option<String>,
    pub color_temperature: Option<String>,

    pub aspect_ratio: Option<String>,
    pub cref_url: Option<String>,
    pub char_weight: Option<String>,
    pub negative_prompt: Option<String>,
}

impl ImageFields {
    pub fn from_field_set(fields: &FieldSet) -> Self {
        Self {
            subject: fields.text_any(&["custom-subject", "custom_subject", "subject"]),
            action: fields.text_any(&["custom-action", "custom_action", "action"]),
            setting: fields.text("setting"),
            texture: fields.text("texture"),
            material: fields.text("material"),
            age: fields.text("age"),
            condition: fields.text("condition"),
            style: fields.text("style"),
            mood: fields.text("mood"),
            emotion: fields.text("emotion"),
            atmosphere: fields.text("atmosphere"),
            shot_type: fields.text("shot_type"),
            angle: fields.text("angle"),
            perspective: fields.text("perspective"),
            shot_view: fields.text("shot-view"),
            lens_type: fields.text("lens-type"),
            composition: fields.text("composition"),
            depth_of_field: fields.text("depth_of_field"),
            focus_point: fields.text("focus_point"),
            color_scheme: fields.text("color_scheme"),
            dominant_color: fields.text("dominant_color"),
            color_temperature: fields.text("color_temperature"),
            aspect_ratio: fields.text("aspect-ratio"),
            cref_url: fields.text("cref-url"),
            char_weight: fields.text("char-weight"),
            negative_prompt: fields.text_any(&["negative_prompt", "negative-prompt"]),
        }
    }

    /// Messages for every missing required field, in form order
    pub fn missing_required(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.subject.is_none() {
            errors.push(MISSING_SUBJECT_MESSAGE.to_string());
        }
        if self.action.is_none() {
            errors.push(MISSING_ACTION_MESSAGE.to_string());
        }
        errors
    }
}

/// Fields of the writing form (RACE)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WritingFields {
    pub role: Option<String>,
    pub action: Option<String>,
    pub context: Option<String>,
    pub expectation: Option<String>,

    pub topic: Option<String>,
    pub goal: Option<String>,
    pub target_audience: Option<String>,
    pub word_count: Option<String>,
    pub style: Option<String>,
    pub tone: Option<String>,
    pub format: Option<String>,
    pub language: Option<String>,
    pub constraints: Option<String>,
    pub examples: Option<String>,
    pub background: Option<String>,
    pub exclusions: Option<String>,
    pub chain_of_thought: bool,
    pub iterative_improvement: bool,
}

impl WritingFields {
    pub fn from_field_set(fields: &FieldSet) -> Self {
        Self {
            role: fields.text("role"),
            action: fields.text("action"),
            context: fields.text("context"),
            expectation: fields.text("expectation"),
            topic: fields.text("topic"),
            goal: fields.text("goal"),
            target_audience: fields.text("target_audience"),
            word_count: fields.text("word_count"),
            style: fields.text("style"),
            tone: fields.text("tone"),
            format: fields.text("format"),
            language: fields.text("language"),
            constraints: fields.text("constraints"),
            examples: fields.text("examples"),
            background: fields.text("background"),
            exclusions: fields.text("exclusions"),
            chain_of_thought: fields.is_true("chain_of_thought"),
            iterative_improvement: fields.is_true("iterative_improvement"),
        }
    }
}

/// Fields of the web design form (CO-STAR)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebDesignFields {
    pub context: Option<String>,
    pub objective: Option<String>,
    pub style: Option<String>,
    pub tone: Option<String>,
    pub audience: Option<String>,
    pub response: Option<String>,

    pub page_section: Option<String>,
    pub purpose: Option<String>,
    pub key_elements: Option<String>,
    pub visual_aesthetics: Option<String>,
    pub color_palette: Option<String>,
    pub industry_type: Option<String>,
    pub placement: Option<String>,
    pub ux_optimization: Option<String>,
    pub accessibility: Option<String>,
    pub website_type: Option<String>,
    pub features: Option<String>,
    pub colors: Option<String>,
    pub layout: Option<String>,
    pub pages: Option<String>,
}

impl WebDesignFields {
    pub fn from_field_set(fields: &FieldSet) -> Self {
        Self {
            context: fields.text("context"),
            objective: fields.text("objective"),
            style: fields.text("style"),
            tone: fields.text("tone"),
            audience: fields.text("audience"),
            response: fields.text("response"),
            page_section: fields.text("page_section"),
            purpose: fields.text("purpose"),
            key_elements: fields.text("key_elements"),
            visual_aesthetics: fields.text("visual_aesthetics"),
            color_palette: fields.text("color_palette"),
            industry_type: fields.text("industry_type"),
            placement: fields.text("placement"),
            ux_optimization: fields.text("ux_optimization"),
            accessibility: fields.text("accessibility"),
            website_type: fields.text("website_type"),
            features: fields.text("features"),
            colors: fields.text("colors"),
            layout: fields.text("layout"),
            pages: fields.text("pages"),
        }
    }
}

/// Fields of the coding form (CRISPE)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodingFields {
    pub capacity: Option<String>,
    pub role: Option<String>,
    pub insight: Option<String>,
    pub statement: Option<String>,
    pub personality: Option<String>,
    pub experiment: Option<String>,

    pub functionality: Option<String>,
    pub language: Option<String>,
    pub framework: Option<String>,
    pub key_requirements: Option<String>,
    pub code_structure: Option<String>,
    pub output_details: Option<String>,
    pub existing_code: Option<String>,
    pub security: Option<String>,
    pub project_type: Option<String>,
    pub requirements: Option<String>,
    pub complexity: Option<String>,
    pub error_handling: Option<String>,
    pub performance: Option<String>,
    pub testing: Option<String>,
}

impl CodingFields {
    pub fn from_field_set(fields: &FieldSet) -> Self {
        Self {
            capacity: fields.text("capacity"),
            role: fields.text("role"),
            insight: fields.text("insight"),
            statement: fields.text("statement"),
            personality: fields.text("personality"),
            experiment: fields.text("experiment"),
            functionality: fields.text("functionality"),
            language: fields.text("language"),
            framework: fields.text("framework"),
            key_requirements: fields.text("key_requirements"),
            code_structure: fields.text("code_structure"),
            output_details: fields.text("output_details"),
            existing_code: fields.text("existing_code"),
            security: fields.text("security"),
            project_type: fields.text("project_type"),
            requirements: fields.text("requirements"),
            complexity: fields.text("complexity"),
            error_handling: fields.text("error_handling"),
            performance: fields.text("performance"),
            testing: fields.text("testing"),
        }
    }
}

/// Fields of the logo design form (CO-STAR)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoFields {
    pub context: Option<String>,
    pub objective: Option<String>,
    pub style: Option<String>,
    pub tone: Option<String>,
    pub audience: Option<String>,
    pub response: Option<String>,

    pub company_name: Option<String>,
    pub industry: Option<String>,
    pub core_values: Option<String>,
    pub visual_style: Option<String>,
    pub imagery: Option<String>,
    pub color_scheme: Option<String>,
    pub font_style: Option<String>,
    pub application: Option<String>,
    pub logo_type: Option<String>,
    pub colors: Option<String>,
    pub typography: Option<String>,
    pub design_elements: Option<String>,
    pub symbolism: Option<String>,
    pub competitors: Option<String>,
}

impl LogoFields {
    pub fn from_field_set(fields: &FieldSet) -> Self {
        Self {
            context: fields.text("context"),
            objective: fields.text("objective"),
            style: fields.text("style"),
            tone: fields.text("tone"),
            audience: fields.text("audience"),
            response: fields.text("response"),
            company_name: fields.text("company_name"),
            industry: fields.text("industry"),
            core_values: fields.text("core_values"),
            visual_style: fields.text("visual_style"),
            imagery: fields.text("imagery"),
            color_scheme: fields.text("color_scheme"),
            font_style: fields.text("font_style"),
            application: fields.text("application"),
            logo_type: fields.text("logo_type"),
            colors: fields.text("colors"),
            typography: fields.text("typography"),
            design_elements: fields.text("design_elements"),
            symbolism: fields.text("symbolism"),
            competitors: fields.text("competitors"),
        }
    }
}

/// Fields of the research form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchFields {
    pub central_concept: Option<String>,
    pub desired_output: Option<String>,
    pub role_play: Option<String>,
    pub specific_viewpoints: Option<String>,
    pub time_anchored_role: Option<String>,
    pub methodology: Option<String>,
    pub research_type: Option<String>,
    pub scope: Option<String>,
    pub domain: Option<String>,
    pub depth: Option<String>,

    pub dilemma_scenario: Option<String>,
    pub breakdown_elements: Option<String>,
    pub evidence_support: Option<String>,
    pub web_search: Option<String>,
    pub critical_thinking: Option<String>,
    pub decomposition: Option<String>,
    pub reflection: Option<String>,
    pub iterative_learning: Option<String>,
    pub data_sources: Option<String>,
    pub output_format: Option<String>,
    pub timeframe: Option<String>,
    pub audience: Option<String>,
    pub objectives: Option<String>,
}

impl ResearchFields {
    pub fn from_field_set(fields: &FieldSet) -> Self {
        Self {
            central_concept: fields.text("central_concept"),
            desired_output: fields.text("desired_output"),
            role_play: fields.text("role_play"),
            specific_viewpoints: fields.text("specific_viewpoints"),
            time_anchored_role: fields.text("time_anchored_role"),
            methodology: fields.text("methodology"),
            research_type: fields.text("research_type"),
            scope: fields.text("scope"),
            domain: fields.text("domain"),
            depth: fields.text("depth"),
            dilemma_scenario: fields.text("dilemma_scenario"),
            breakdown_elements: fields.text("breakdown_elements"),
            evidence_support: fields.text("evidence_support"),
            web_search: fields.text("web_search"),
            critical_thinking: fields.text("critical_thinking"),
            decomposition: fields.text("decomposition"),
            reflection: fields.text("reflection"),
            iterative_learning: fields.text("iterative_learning"),
            data_sources: fields.text("data_sources"),
            output_format: fields.text("output_format"),
            timeframe: fields.text("timeframe"),
            audience: fields.text("audience"),
            objectives: fields.text("objectives"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_subject_overrides_preset() {
        let fields = FieldSet::new()
            .with("subject", "Portrait of a person")
            .with("custom-subject", "a clockwork owl")
            .with("action", "flying")
            .with("custom-action", "  ");

        let image = ImageFields::from_field_set(&fields);
        assert_eq!(image.subject.as_deref(), Some("a clockwork owl"));
        assert_eq!(image.action.as_deref(), Some("flying"));
    }

    #[test]
    fn test_missing_required_collects_all_messages() {
        let image = ImageFields::from_field_set(&FieldSet::new().with("subject", ""));
        let errors = image.missing_required();

        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("main subject"));
        assert!(errors[1].contains("action/pose"));
    }

    #[test]
    fn test_hyphenated_identifiers() {
        let fields = FieldSet::new()
            .with("cref-url", "https://example.com/ref.png")
            .with("char-weight", "80")
            .with("shot-view", "close-up")
            .with("lens-type", "85mm lens")
            .with("aspect-ratio", "16:9")
            .with("negative_prompt", "hands");

        let image = ImageFields::from_field_set(&fields);
        assert_eq!(image.cref_url.as_deref(), Some("https://example.com/ref.png"));
        assert_eq!(image.char_weight.as_deref(), Some("80"));
        assert_eq!(image.shot_view.as_deref(), Some("close-up"));
        assert_eq!(image.lens_type.as_deref(), Some("85mm lens"));
        assert_eq!(image.aspect_ratio.as_deref(), Some("16:9"));
        assert_eq!(image.negative_prompt.as_deref(), Some("hands"));
    }

    #[test]
    fn test_writing_flags() {
        let fields = FieldSet::new()
            .with("chain_of_thought", "true")
            .with("iterative_improvement", "false");

        let writing = WritingFields::from_field_set(&fields);
        assert!(writing.chain_of_thought);
        assert!(!writing.iterative_improvement);
        assert_eq!(writing.role, None);
    }
}
