// Section builders for image generation prompts.
// Each builder returns an empty string when it has nothing to contribute.

use crate::config::ImageDirectives;
use crate::forms::ImageFields;

const SEPARATOR: &str = ", ";

const SPECIFICITY_SUFFIX: &str = ", highly detailed and specific";
const ARTSTATION_SUFFIX: &str = ", trending on ArtStation";
const CAMERA_QUALITY: &str = "professional photography";
const LENS_PREFIX: &str = "shot with";
const TECHNICAL_DESCRIPTORS: [&str; 5] = [
    "ultra detailed",
    "highly detailed",
    "sharp focus",
    "professional quality",
    "8k resolution",
];

/// Append `suffix` unless `keyword` already occurs in `text`.
///
/// Containment is a plain case-sensitive substring check, so "Lifestyle"
/// also counts as containing "style".
fn append_unless_contains(text: &mut String, keyword: &str, suffix: &str) {
    if !text.is_empty() && !text.contains(keyword) {
        text.push_str(suffix);
    }
}

fn join_present<I>(parts: I) -> String
where
    I: IntoIterator<Item = Option<String>>,
{
    parts.into_iter().flatten().collect::<Vec<_>>().join(SEPARATOR)
}

/// `<subject> <action> in <setting>`, with a specificity hint
pub fn build_subject_section(fields: &ImageFields) -> String {
    let mut section = fields.subject.clone().unwrap_or_default();

    if let Some(action) = &fields.action {
        section.push(' ');
        section.push_str(action);
    }
    if let Some(setting) = &fields.setting {
        section.push_str(" in ");
        section.push_str(setting);
    }

    let mut section = section.trim().to_string();
    if !section.is_empty() && !section.contains("detailed") && !section.contains("specific") {
        section.push_str(SPECIFICITY_SUFFIX);
    }
    section
}

pub fn build_details_section(fields: &ImageFields) -> String {
    join_present([
        fields.texture.as_ref().map(|t| format!("{} texture", t)),
        fields.material.as_ref().map(|m| format!("made of {}", m)),
        fields.age.as_ref().map(|a| format!("{} appearance", a)),
        fields.condition.as_ref().map(|c| format!("{} condition", c)),
    ])
}

/// Main style followed by the selected style tags
pub fn build_style_section(fields: &ImageFields, selected_styles: &[String]) -> String {
    let styles: Vec<&str> = fields
        .style
        .as_deref()
        .into_iter()
        .chain(selected_styles.iter().map(|s| s.trim()))
        .filter(|s| !s.is_empty())
        .collect();

    if styles.is_empty() {
        return String::new();
    }

    let mut section = styles.join(SEPARATOR);
    append_unless_contains(&mut section, "style", " style");

    if section.contains("digital") || section.contains("art") {
        section.push_str(ARTSTATION_SUFFIX);
    }
    section
}

pub fn build_lighting_section(selected_lighting: &[String]) -> String {
    let mut section = selected_lighting
        .iter()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join(SEPARATOR);

    append_unless_contains(&mut section, "lighting", " lighting");
    section
}

pub fn build_mood_section(fields: &ImageFields) -> String {
    let elements = join_present([
        fields.mood.clone(),
        fields.emotion.clone(),
        fields.atmosphere.clone(),
    ]);

    if elements.is_empty() {
        elements
    } else {
        format!("{} atmosphere", elements)
    }
}

pub fn build_framing_section(fields: &ImageFields) -> String {
    join_present([
        fields.shot_type.clone(),
        fields.angle.clone(),
        fields.perspective.clone(),
    ])
}

/// Shot view, then the lens as `shot with <lens>`
pub fn build_camera_section(fields: &ImageFields) -> String {
    let lens = fields.lens_type.as_ref().map(|lens| {
        let has_prefix = lens
            .get(..LENS_PREFIX.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(LENS_PREFIX));
        if has_prefix {
            lens.clone()
        } else {
            format!("{} {}", LENS_PREFIX, lens)
        }
    });

    let mut elements: Vec<String> = [fields.shot_view.clone(), lens].into_iter().flatten().collect();
    if !elements.is_empty() {
        elements.push(CAMERA_QUALITY.to_string());
    }
    elements.join(SEPARATOR)
}

pub fn build_composition_section(fields: &ImageFields) -> String {
    join_present([
        fields.composition.clone(),
        fields.depth_of_field.clone(),
        fields.focus_point.as_ref().map(|f| format!("focus on {}", f)),
    ])
}

pub fn build_color_section(fields: &ImageFields) -> String {
    join_present([
        fields.color_scheme.as_ref().map(|c| format!("{} color scheme", c)),
        fields.dominant_color.as_ref().map(|c| format!("dominant {}", c)),
        fields.color_temperature.as_ref().map(|c| format!("{} tones", c)),
    ])
}

/// Fixed quality descriptors closing the descriptive sentence
pub fn build_technical_section() -> String {
    TECHNICAL_DESCRIPTORS.join(SEPARATOR)
}

/// `--cref <url> --cw <weight>`, only when a reference is supplied
pub fn build_character_section(fields: &ImageFields, directives: &ImageDirectives) -> String {
    match &fields.cref_url {
        Some(reference) => {
            let weight = fields
                .char_weight
                .as_deref()
                .unwrap_or(&directives.default_character_weight);
            format!("--cref {} --cw {}", reference, weight)
        }
        None => String::new(),
    }
}

/// Version, optional aspect ratio, quality and style mode, in that order
pub fn build_quality_section(fields: &ImageFields, directives: &ImageDirectives) -> String {
    let aspect_ratio = fields.aspect_ratio.as_ref().map(|ar| format!("--ar {}", ar));

    [
        Some(directives.model_version.clone()),
        aspect_ratio,
        Some(directives.quality.clone()),
        Some(directives.style_mode.clone()),
    ]
    .into_iter()
    .flatten()
    .filter(|p| !p.trim().is_empty())
    .collect::<Vec<_>>()
    .join(" ")
}

/// Default defect terms plus the user's comma-separated extras
pub fn build_negative_section(fields: &ImageFields, directives: &ImageDirectives) -> String {
    let mut negatives: Vec<&str> = directives
        .default_negative_terms
        .iter()
        .map(String::as_str)
        .collect();

    if let Some(custom) = &fields.negative_prompt {
        negatives.extend(custom.split(',').map(str::trim).filter(|t| !t.is_empty()));
    }

    if negatives.is_empty() {
        String::new()
    } else {
        format!("--no {}", negatives.join(SEPARATOR))
    }
}

/// All section fragments of one image prompt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageSections {
    pub subject: String,
    pub details: String,
    pub style: String,
    pub lighting: String,
    pub mood: String,
    pub framing: String,
    pub camera: String,
    pub composition: String,
    pub colors: String,
    pub technical: String,
    pub character: String,
    pub quality: String,
    pub negative: String,
}

impl ImageSections {
    pub fn build(
        fields: &ImageFields,
        selected_styles: &[String],
        selected_lighting: &[String],
        directives: &ImageDirectives,
    ) -> Self {
        Self {
            subject: build_subject_section(fields),
            details: build_details_section(fields),
            style: build_style_section(fields, selected_styles),
            lighting: build_lighting_section(selected_lighting),
            mood: build_mood_section(fields),
            framing: build_framing_section(fields),
            camera: build_camera_section(fields),
            composition: build_composition_section(fields),
            colors: build_color_section(fields),
            technical: build_technical_section(),
            character: build_character_section(fields, directives),
            quality: build_quality_section(fields, directives),
            negative: build_negative_section(fields, directives),
        }
    }

    /// Descriptive fragments in sentence order
    pub fn descriptive(&self) -> [&str; 10] {
        [
            self.subject.as_str(),
            self.details.as_str(),
            self.style.as_str(),
            self.lighting.as_str(),
            self.mood.as_str(),
            self.framing.as_str(),
            self.camera.as_str(),
            self.composition.as_str(),
            self.colors.as_str(),
            self.technical.as_str(),
        ]
    }

    /// Directive fragments in token order
    pub fn directives(&self) -> [&str; 3] {
        [self.character.as_str(), self.quality.as_str(), self.negative.as_str()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(configure: impl FnOnce(&mut ImageFields)) -> ImageFields {
        let mut fields = ImageFields::default();
        configure(&mut fields);
        fields
    }

    #[test]
    fn test_subject_section() {
        let fields = image(|f| {
            f.subject = Some("a dragon".to_string());
            f.action = Some("flying".to_string());
            f.setting = Some("a storm".to_string());
        });

        assert_eq!(
            build_subject_section(&fields),
            "a dragon flying in a storm, highly detailed and specific"
        );
    }

    #[test]
    fn test_subject_section_skips_specificity_when_present() {
        let fields = image(|f| f.subject = Some("a detailed map".to_string()));
        assert_eq!(build_subject_section(&fields), "a detailed map");
        assert_eq!(build_subject_section(&ImageFields::default()), "");
    }

    #[test]
    fn test_style_suffix_rule() {
        let cinematic = image(|f| f.style = Some("Cinematic".to_string()));
        assert_eq!(build_style_section(&cinematic, &[]), "Cinematic style");

        let anime = image(|f| f.style = Some("Anime style".to_string()));
        assert_eq!(build_style_section(&anime, &[]), "Anime style");
    }

    #[test]
    fn test_style_suffix_substring_quirk() {
        // "Lifestyle" already contains "style", so no suffix is added
        let lifestyle = image(|f| f.style = Some("Lifestyle".to_string()));
        assert_eq!(build_style_section(&lifestyle, &[]), "Lifestyle");
    }

    #[test]
    fn test_style_section_with_selected_tags_and_artstation() {
        let fields = image(|f| f.style = Some("Cinematic".to_string()));
        let selected = vec!["Digital Art".to_string(), "digital painting".to_string()];

        assert_eq!(
            build_style_section(&fields, &selected),
            "Cinematic, Digital Art, digital painting style, trending on ArtStation"
        );
        assert_eq!(build_style_section(&ImageFields::default(), &[]), "");
    }

    #[test]
    fn test_lighting_section() {
        assert_eq!(
            build_lighting_section(&["Golden Hour".to_string(), "Rim Light".to_string()]),
            "Golden Hour, Rim Light lighting"
        );
        assert_eq!(
            build_lighting_section(&["Studio lighting".to_string()]),
            "Studio lighting"
        );
        assert_eq!(build_lighting_section(&[]), "");
    }

    #[test]
    fn test_details_mood_framing_and_colors() {
        let fields = image(|f| {
            f.texture = Some("rough".to_string());
            f.material = Some("bronze".to_string());
            f.condition = Some("weathered".to_string());
            f.mood = Some("eerie".to_string());
            f.atmosphere = Some("foggy".to_string());
            f.angle = Some("low angle".to_string());
            f.color_scheme = Some("complementary".to_string());
            f.color_temperature = Some("warm".to_string());
        });

        assert_eq!(build_details_section(&fields), "rough texture, made of bronze, weathered condition");
        assert_eq!(build_mood_section(&fields), "eerie, foggy atmosphere");
        assert_eq!(build_framing_section(&fields), "low angle");
        assert_eq!(build_color_section(&fields), "complementary color scheme, warm tones");
        assert_eq!(build_mood_section(&ImageFields::default()), "");
    }

    #[test]
    fn test_camera_section() {
        let fields = image(|f| {
            f.shot_view = Some("close-up".to_string());
            f.lens_type = Some("85mm lens".to_string());
        });
        assert_eq!(
            build_camera_section(&fields),
            "close-up, shot with 85mm lens, professional photography"
        );

        let verbatim = image(|f| f.lens_type = Some("shot with a fisheye".to_string()));
        assert_eq!(
            build_camera_section(&verbatim),
            "shot with a fisheye, professional photography"
        );

        let capitalized = image(|f| f.lens_type = Some("Shot with 85mm".to_string()));
        assert_eq!(
            build_camera_section(&capitalized),
            "Shot with 85mm, professional photography"
        );

        assert_eq!(build_camera_section(&ImageFields::default()), "");
    }

    #[test]
    fn test_composition_section() {
        let fields = image(|f| {
            f.composition = Some("rule of thirds".to_string());
            f.focus_point = Some("the eyes".to_string());
        });
        assert_eq!(build_composition_section(&fields), "rule of thirds, focus on the eyes");
    }

    #[test]
    fn test_character_section() {
        let directives = ImageDirectives::default();
        let fields = image(|f| f.cref_url = Some("https://example.com/c.png".to_string()));
        assert_eq!(
            build_character_section(&fields, &directives),
            "--cref https://example.com/c.png --cw 100"
        );

        let weighted = image(|f| {
            f.cref_url = Some("ref".to_string());
            f.char_weight = Some("40".to_string());
        });
        assert_eq!(build_character_section(&weighted, &directives), "--cref ref --cw 40");
        assert_eq!(build_character_section(&ImageFields::default(), &directives), "");
    }

    #[test]
    fn test_quality_section_order() {
        let directives = ImageDirectives::default();
        assert_eq!(
            build_quality_section(&ImageFields::default(), &directives),
            "--v6 --q 2 --style raw"
        );

        let fields = image(|f| f.aspect_ratio = Some("16:9".to_string()));
        assert_eq!(
            build_quality_section(&fields, &directives),
            "--v6 --ar 16:9 --q 2 --style raw"
        );
    }

    #[test]
    fn test_negative_section() {
        let directives = ImageDirectives::default();
        assert_eq!(
            build_negative_section(&ImageFields::default(), &directives),
            "--no blurry, low quality, distorted, deformed, bad anatomy, watermark, signature, text"
        );

        let fields = image(|f| f.negative_prompt = Some(" extra fingers ,, cropped ".to_string()));
        assert_eq!(
            build_negative_section(&fields, &directives),
            "--no blurry, low quality, distorted, deformed, bad anatomy, watermark, signature, text, extra fingers, cropped"
        );
    }

    #[test]
    fn test_builders_are_idempotent() {
        let fields = image(|f| {
            f.subject = Some("a fox".to_string());
            f.style = Some("Watercolor".to_string());
            f.negative_prompt = Some("noise".to_string());
        });
        let lighting = vec!["Soft".to_string()];
        let directives = ImageDirectives::default();

        let first = ImageSections::build(&fields, &[], &lighting, &directives);
        let second = ImageSections::build(&fields, &[], &lighting, &directives);
        assert_eq!(first, second);
    }
}
