use rand::Rng;

use crate::catalog::ReferenceCatalog;
use crate::category::PromptCategory;

fn pick<'a, R: Rng + ?Sized>(catalog: &'a ReferenceCatalog, category: &str, field: &str, rng: &mut R) -> &'a str {
    catalog
        .random_option(category, Some(field), rng)
        .map(|option| option.name.as_str())
        .unwrap_or_default()
}

/// Quick one-line prompt built from random catalog options. Research has no
/// option lists of its own and gets an image prompt.
pub fn random_prompt<R: Rng + ?Sized>(category: PromptCategory, catalog: &ReferenceCatalog, rng: &mut R) -> String {
    match category {
        PromptCategory::ImageGeneration | PromptCategory::ResearchTrending => {
            let subject = pick(catalog, "imageGeneration", "subjects", rng);
            let action = pick(catalog, "imageGeneration", "actions", rng);
            let setting = pick(catalog, "imageGeneration", "settings", rng);
            let style = pick(catalog, "imageGeneration", "styles", rng);
            let lighting = pick(catalog, "imageGeneration", "lighting", rng);
            format!(
                "{} {} {}, {} style, {} lighting, highly detailed --v6 --ar 16:9",
                subject, action, setting, style, lighting
            )
        }
        PromptCategory::Writing => {
            let role = pick(catalog, "writing", "role", rng);
            let action = pick(catalog, "writing", "action", rng);
            let context = pick(catalog, "writing", "context", rng);
            let expectation = pick(catalog, "writing", "expectation", rng);
            format!(
                "As a {}, {} for {}. The content should be {}.",
                role, action, context, expectation
            )
        }
        PromptCategory::WebDesign => {
            let context = pick(catalog, "webDesign", "context", rng);
            let objective = pick(catalog, "webDesign", "objective", rng);
            let style = pick(catalog, "webDesign", "style", rng);
            let audience = pick(catalog, "webDesign", "audience", rng);
            format!(
                "Design a {} to {}. Style should be {} targeting {}.",
                context, objective, style, audience
            )
        }
        PromptCategory::Coding => {
            let capacity = pick(catalog, "coding", "capacity", rng);
            let statement = pick(catalog, "coding", "statement", rng);
            let insight = pick(catalog, "coding", "insight", rng);
            format!("As a {}, {} while considering {}.", capacity, statement, insight)
        }
        PromptCategory::LogoDesign => {
            let context = pick(catalog, "logoDesign", "context", rng);
            let style = pick(catalog, "logoDesign", "style", rng);
            let tone = pick(catalog, "logoDesign", "tone", rng);
            format!("Design a logo for a {} with a {} style and {} tone.", context, style, tone)
        }
    }
}
