// Labeled-line templates for the non-image categories.
// Core fields fall back to a default when empty; extension fields only
// produce a line when filled in.

use crate::forms::{CodingFields, LogoFields, ResearchFields, WebDesignFields, WritingFields};

const LINE_SEPARATOR: &str = "\n\n";

// Writing (RACE) defaults
pub const DEFAULT_WRITING_ROLE: &str = "Expert Writer";
pub const DEFAULT_WRITING_ACTION: &str = "Create content";
pub const DEFAULT_WRITING_CONTEXT: &str = "General purpose";
pub const DEFAULT_WRITING_EXPECTATION: &str = "High quality output";

// Web design (CO-STAR) defaults
pub const DEFAULT_WEB_CONTEXT: &str = "Modern website";
pub const DEFAULT_WEB_OBJECTIVE: &str = "Create engaging user experience";
pub const DEFAULT_WEB_STYLE: &str = "Clean and modern";
pub const DEFAULT_WEB_TONE: &str = "Professional";
pub const DEFAULT_WEB_AUDIENCE: &str = "General users";
pub const DEFAULT_WEB_RESPONSE: &str = "Responsive design";

// Coding (CRISPE) defaults
pub const DEFAULT_CODING_CAPACITY: &str = "Senior Developer";
pub const DEFAULT_CODING_ROLE: &str = "Problem solver";
pub const DEFAULT_CODING_INSIGHT: &str = "Best practices";
pub const DEFAULT_CODING_STATEMENT: &str = "Implement feature";
pub const DEFAULT_CODING_PERSONALITY: &str = "Efficient";
pub const DEFAULT_CODING_EXPERIMENT: &str = "Test thoroughly";

// Logo design (CO-STAR) defaults
pub const DEFAULT_LOGO_CONTEXT: &str = "Modern business";
pub const DEFAULT_LOGO_OBJECTIVE: &str = "Create memorable brand identity";
pub const DEFAULT_LOGO_STYLE: &str = "Modern and clean";
pub const DEFAULT_LOGO_TONE: &str = "Professional";
pub const DEFAULT_LOGO_AUDIENCE: &str = "Target customers";
pub const DEFAULT_LOGO_RESPONSE: &str = "Scalable vector design";

// Research defaults
pub const DEFAULT_RESEARCH_METHODOLOGY: &str = "Systematic approach";
pub const DEFAULT_RESEARCH_TYPE: &str = "Comprehensive analysis";
pub const DEFAULT_RESEARCH_SCOPE: &str = "Focused investigation";
pub const DEFAULT_RESEARCH_DOMAIN: &str = "Subject area";
pub const DEFAULT_RESEARCH_DEPTH: &str = "Thorough examination";

const WRITING_APPROACH: &str = "Think step by step and explain your reasoning process";
const WRITING_PROCESS: &str =
    "Draft your response, then critique it, and provide an improved version based on your critique";
const LOGO_NOTE: &str =
    "Provide multiple concept variations and be prepared for iteration and refinement";
const RESEARCH_DECOMPOSITION: &str = "Break down complex problems, explore distinct solution branches, evaluate quality, and justify choices";
const RESEARCH_REFLECTION: &str = "Provide your analysis, then identify potential flaws or limitations, and offer an improved perspective";
const RESEARCH_WEB_SEARCH: &str =
    "Use recent, contextual, and search-friendly terms. Focus on latest developments and trends";

/// Ordered collection of `**Label:** value` lines
#[derive(Debug, Default)]
struct LabeledLines {
    lines: Vec<String>,
}

impl LabeledLines {
    fn line(&mut self, label: &str, value: impl AsRef<str>) -> &mut Self {
        let value = value.as_ref();
        // Block values start on their own line
        if value.starts_with('\n') {
            self.lines.push(format!("**{}:**{}", label, value));
        } else {
            self.lines.push(format!("**{}:** {}", label, value));
        }
        self
    }

    fn optional(&mut self, label: &str, value: &Option<String>) -> &mut Self {
        if let Some(value) = value {
            self.line(label, value);
        }
        self
    }

    fn optional_with(
        &mut self,
        label: &str,
        value: &Option<String>,
        render: impl FnOnce(&str) -> String,
    ) -> &mut Self {
        if let Some(value) = value {
            self.line(label, render(value));
        }
        self
    }

    fn flag(&mut self, label: &str, enabled: bool, text: &str) -> &mut Self {
        if enabled {
            self.line(label, text);
        }
        self
    }

    fn finish(&mut self) -> String {
        std::mem::take(&mut self.lines).join(LINE_SEPARATOR)
    }
}

fn or_default<'a>(value: &'a Option<String>, default: &'a str) -> &'a str {
    value.as_deref().unwrap_or(default)
}

/// Writing prompt (RACE: Role, Action, Context, Expectation)
pub fn assemble_writing_prompt(fields: &WritingFields) -> String {
    let role = or_default(&fields.role, DEFAULT_WRITING_ROLE);
    let action = or_default(&fields.action, DEFAULT_WRITING_ACTION);
    let context = or_default(&fields.context, DEFAULT_WRITING_CONTEXT);
    let expectation = or_default(&fields.expectation, DEFAULT_WRITING_EXPECTATION);

    LabeledLines::default()
        .line("Role", format!("Act as a {}", role))
        .flag("Approach", fields.chain_of_thought, WRITING_APPROACH)
        .line("Task", format!("{} for {}", action, context))
        .optional("Goal", &fields.goal)
        .optional("Topic", &fields.topic)
        .optional("Target Audience", &fields.target_audience)
        .optional("Background Information", &fields.background)
        .optional_with("Length", &fields.word_count, |n| format!("{} words", n))
        .optional("Style", &fields.style)
        .optional("Tone", &fields.tone)
        .optional("Language/Terminology", &fields.language)
        .optional("Format", &fields.format)
        .optional("Constraints", &fields.constraints)
        .optional("Exclusions", &fields.exclusions)
        .optional("Examples/References", &fields.examples)
        .line("Expectation", format!("The output should be {}", expectation))
        .flag("Process", fields.iterative_improvement, WRITING_PROCESS)
        .finish()
}

/// Web design prompt (CO-STAR)
pub fn assemble_web_design_prompt(fields: &WebDesignFields) -> String {
    LabeledLines::default()
        .line("Context", format!("Design a {}", or_default(&fields.context, DEFAULT_WEB_CONTEXT)))
        .line("Objective", or_default(&fields.objective, DEFAULT_WEB_OBJECTIVE))
        .optional("Page/Section Focus", &fields.page_section)
        .optional("Purpose", &fields.purpose)
        .optional("Key Elements", &fields.key_elements)
        .line("Style", or_default(&fields.style, DEFAULT_WEB_STYLE))
        .optional("Visual Aesthetics", &fields.visual_aesthetics)
        .optional("Color Palette", &fields.color_palette)
        .line("Tone", or_default(&fields.tone, DEFAULT_WEB_TONE))
        .line("Audience", or_default(&fields.audience, DEFAULT_WEB_AUDIENCE))
        .optional("Industry/Business Type", &fields.industry_type)
        .optional("Website Type", &fields.website_type)
        .optional("Key Features", &fields.features)
        .optional("Color Scheme", &fields.colors)
        .optional("Layout", &fields.layout)
        .optional("Pages", &fields.pages)
        .optional("Placement/Application", &fields.placement)
        .optional("UX Optimization", &fields.ux_optimization)
        .optional("Accessibility", &fields.accessibility)
        .line("Expected Response", or_default(&fields.response, DEFAULT_WEB_RESPONSE))
        .finish()
}

/// Coding prompt (CRISPE: Capacity, Role, Insight, Statement, Personality, Experiment)
pub fn assemble_coding_prompt(fields: &CodingFields) -> String {
    let capacity = or_default(&fields.capacity, DEFAULT_CODING_CAPACITY);
    let role = or_default(&fields.role, DEFAULT_CODING_ROLE);
    let insight = or_default(&fields.insight, DEFAULT_CODING_INSIGHT);
    let personality = or_default(&fields.personality, DEFAULT_CODING_PERSONALITY);

    LabeledLines::default()
        .line("Capacity", format!("Act as a {}", capacity))
        .line("Role", format!("Your role is as a {}", role))
        .line("Insight", format!("Focus on {}", insight))
        .line("Statement", or_default(&fields.statement, DEFAULT_CODING_STATEMENT))
        .line("Personality", format!("Approach this with a {} mindset", personality))
        .optional("Specific Functionality", &fields.functionality)
        .optional("Programming Language", &fields.language)
        .optional("Framework/Library", &fields.framework)
        .optional("Key Requirements", &fields.key_requirements)
        .optional("Code Structure", &fields.code_structure)
        .optional("Project Type", &fields.project_type)
        .optional("Requirements", &fields.requirements)
        .optional("Complexity Level", &fields.complexity)
        .optional("Error Handling", &fields.error_handling)
        .optional("Performance", &fields.performance)
        .optional("Security", &fields.security)
        .optional("Testing", &fields.testing)
        .optional("Output Details", &fields.output_details)
        .optional_with("Existing Code", &fields.existing_code, |code| {
            format!("\n```\n{}\n```", code)
        })
        .line("Experiment", or_default(&fields.experiment, DEFAULT_CODING_EXPERIMENT))
        .finish()
}

/// Logo design prompt (CO-STAR)
pub fn assemble_logo_prompt(fields: &LogoFields) -> String {
    LabeledLines::default()
        .line(
            "Context",
            format!("Design a logo for {}", or_default(&fields.context, DEFAULT_LOGO_CONTEXT)),
        )
        .line("Objective", or_default(&fields.objective, DEFAULT_LOGO_OBJECTIVE))
        .optional("Company Name", &fields.company_name)
        .optional("Industry/Business Type", &fields.industry)
        .optional("Core Values/Concept", &fields.core_values)
        .line("Style", or_default(&fields.style, DEFAULT_LOGO_STYLE))
        .optional("Visual Style/Aesthetic", &fields.visual_style)
        .optional("Imagery/Elements", &fields.imagery)
        .line("Tone", or_default(&fields.tone, DEFAULT_LOGO_TONE))
        .line("Audience", or_default(&fields.audience, DEFAULT_LOGO_AUDIENCE))
        .optional("Logo Type", &fields.logo_type)
        .optional("Color Scheme/Hues", &fields.color_scheme)
        .optional("Color Palette", &fields.colors)
        .optional("Font Style", &fields.font_style)
        .optional("Typography", &fields.typography)
        .optional("Design Elements", &fields.design_elements)
        .optional("Application/Usage", &fields.application)
        .optional("Symbolism", &fields.symbolism)
        .optional("Competitor Considerations", &fields.competitors)
        .line("Expected Response", or_default(&fields.response, DEFAULT_LOGO_RESPONSE))
        .line("Note", LOGO_NOTE)
        .finish()
}

/// Research prompt; the leading perspective lines are all conditional
pub fn assemble_research_prompt(fields: &ResearchFields) -> String {
    LabeledLines::default()
        .optional("Central Concept/Topic", &fields.central_concept)
        .optional("Desired Output", &fields.desired_output)
        .optional_with("Role-Play", &fields.role_play, |role| {
            format!("Assume the role of a {}", role)
        })
        .optional("Analysis Perspective", &fields.specific_viewpoints)
        .optional("Time-Anchored Perspective", &fields.time_anchored_role)
        .line("Research Methodology", or_default(&fields.methodology, DEFAULT_RESEARCH_METHODOLOGY))
        .line("Research Type", or_default(&fields.research_type, DEFAULT_RESEARCH_TYPE))
        .line("Scope", or_default(&fields.scope, DEFAULT_RESEARCH_SCOPE))
        .line("Domain", or_default(&fields.domain, DEFAULT_RESEARCH_DOMAIN))
        .line("Depth", or_default(&fields.depth, DEFAULT_RESEARCH_DEPTH))
        .optional("Dilemma/Scenario", &fields.dilemma_scenario)
        .optional("Breakdown Elements", &fields.breakdown_elements)
        .optional("Evidence/Support", &fields.evidence_support)
        .optional("Data Sources", &fields.data_sources)
        .optional("Output Format", &fields.output_format)
        .optional("Timeframe", &fields.timeframe)
        .optional("Target Audience", &fields.audience)
        .optional("Research Objectives", &fields.objectives)
        .optional("Critical Thinking", &fields.critical_thinking)
        .flag("Approach", fields.decomposition.is_some(), RESEARCH_DECOMPOSITION)
        .flag("Process", fields.reflection.is_some(), RESEARCH_REFLECTION)
        .optional("Learning Approach", &fields.iterative_learning)
        .flag("Research Focus", fields.web_search.is_some(), RESEARCH_WEB_SEARCH)
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writing_with_only_topic() {
        let fields = WritingFields {
            topic: Some("Ocean conservation".to_string()),
            ..Default::default()
        };
        let prompt = assemble_writing_prompt(&fields);

        assert!(prompt.contains("**Role:** Act as a Expert Writer"));
        assert!(prompt.contains("**Topic:** Ocean conservation"));
        assert!(prompt.contains("**Task:** Create content for General purpose"));
        assert!(prompt.ends_with("**Expectation:** The output should be High quality output"));
        assert!(!prompt.contains("**Tone:**"));
        assert!(!prompt.contains("**Approach:**"));
    }

    #[test]
    fn test_writing_line_order_and_flags() {
        let fields = WritingFields {
            role: Some("Copywriter".to_string()),
            tone: Some("Playful".to_string()),
            word_count: Some("500".to_string()),
            chain_of_thought: true,
            iterative_improvement: true,
            ..Default::default()
        };
        let prompt = assemble_writing_prompt(&fields);
        let lines: Vec<&str> = prompt.split("\n\n").collect();

        assert_eq!(lines[0], "**Role:** Act as a Copywriter");
        assert!(lines[1].starts_with("**Approach:**"));
        assert!(lines[2].starts_with("**Task:**"));
        assert_eq!(lines[3], "**Length:** 500 words");
        assert_eq!(lines[4], "**Tone:** Playful");
        assert!(lines[5].starts_with("**Expectation:**"));
        assert!(lines[6].starts_with("**Process:** Draft your response"));
    }

    #[test]
    fn test_web_design_defaults() {
        let prompt = assemble_web_design_prompt(&WebDesignFields::default());
        let lines: Vec<&str> = prompt.split("\n\n").collect();

        assert_eq!(
            lines,
            vec![
                "**Context:** Design a Modern website",
                "**Objective:** Create engaging user experience",
                "**Style:** Clean and modern",
                "**Tone:** Professional",
                "**Audience:** General users",
                "**Expected Response:** Responsive design",
            ]
        );
    }

    #[test]
    fn test_coding_existing_code_is_fenced() {
        let fields = CodingFields {
            language: Some("Rust".to_string()),
            existing_code: Some("fn main() {}".to_string()),
            ..Default::default()
        };
        let prompt = assemble_coding_prompt(&fields);

        assert!(prompt.starts_with("**Capacity:** Act as a Senior Developer"));
        assert!(prompt.contains("**Programming Language:** Rust"));
        assert!(prompt.contains("**Existing Code:**\n```\nfn main() {}\n```"));
        assert!(prompt.ends_with("**Experiment:** Test thoroughly"));
    }

    #[test]
    fn test_logo_ends_with_note() {
        let fields = LogoFields {
            company_name: Some("Acme".to_string()),
            ..Default::default()
        };
        let prompt = assemble_logo_prompt(&fields);

        assert!(prompt.starts_with("**Context:** Design a logo for Modern business"));
        assert!(prompt.contains("**Company Name:** Acme"));
        assert!(prompt.ends_with(&format!("**Note:** {}", LOGO_NOTE)));
    }

    #[test]
    fn test_research_conditional_lines() {
        let fields = ResearchFields {
            central_concept: Some("Quantum networking".to_string()),
            role_play: Some("futurist".to_string()),
            web_search: Some("on".to_string()),
            ..Default::default()
        };
        let prompt = assemble_research_prompt(&fields);
        let lines: Vec<&str> = prompt.split("\n\n").collect();

        assert_eq!(lines[0], "**Central Concept/Topic:** Quantum networking");
        assert_eq!(lines[1], "**Role-Play:** Assume the role of a futurist");
        assert_eq!(lines[2], "**Research Methodology:** Systematic approach");
        assert!(lines.last().unwrap().starts_with("**Research Focus:**"));
        assert!(!prompt.contains("**Desired Output:**"));
        assert!(!prompt.contains("**Process:**"));
    }
}
