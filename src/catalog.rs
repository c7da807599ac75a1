// Read-only reference catalog of form options and keyword metadata.
// The bundled data is embedded at compile time and parsed once into
// DEFAULT_CATALOG, keyed by catalog names (styles, cameraLens, imageGeneration, ...)

use lazy_static::lazy_static;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{error, info};

const BUNDLED_CATALOG: &str = include_str!("../data/catalog.json");

lazy_static! {
    pub static ref DEFAULT_CATALOG: ReferenceCatalog = ReferenceCatalog::bundled();
}

/// Catalog entry as stored: a bare name or a detailed object
#[derive(Deserialize)]
#[serde(untagged)]
enum RawOption {
    Simple(String),
    Detailed {
        name: String,
        #[serde(default)]
        description: Option<String>,
        #[serde(default)]
        example: Option<String>,
        #[serde(default, rename = "visualRef")]
        visual_ref: Option<String>,
    },
}

// Define an option descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawOption")]
pub struct OptionDescriptor {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(rename = "visualRef", skip_serializing_if = "Option::is_none")]
    pub visual_ref: Option<String>,
}

impl From<RawOption> for OptionDescriptor {
    fn from(raw: RawOption) -> Self {
        match raw {
            RawOption::Simple(name) => OptionDescriptor::named(name),
            RawOption::Detailed {
                name,
                description,
                example,
                visual_ref,
            } => OptionDescriptor {
                name,
                description,
                example,
                visual_ref,
            },
        }
    }
}

impl OptionDescriptor {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            example: None,
            visual_ref: None,
        }
    }

    /// Detailed entries carry a description
    pub fn is_detailed(&self) -> bool {
        self.description.is_some()
    }
}

/// One search hit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogMatch<'a> {
    pub category: &'a str,
    pub subcategory: &'a str,
    pub option: &'a OptionDescriptor,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryStats {
    pub total: usize,
    pub subcategories: BTreeMap<String, usize>,
}

/// Names drawn from the keyword categories for a quick inspiration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordCombination {
    pub style: String,
    pub camera: String,
    pub lens: String,
    pub pov: String,
    pub angle: String,
    pub mood: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferenceCatalog {
    categories: BTreeMap<String, BTreeMap<String, Vec<OptionDescriptor>>>,
}

impl ReferenceCatalog {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parse the embedded catalog; a broken bundle yields an empty catalog
    pub fn bundled() -> Self {
        match Self::from_json(BUNDLED_CATALOG) {
            Ok(catalog) => {
                info!(
                    "Loaded reference catalog: {} categories, {} options",
                    catalog.categories.len(),
                    catalog.iter().count()
                );
                catalog
            }
            Err(e) => {
                error!("Failed to parse bundled reference catalog: {}", e);
                ReferenceCatalog::default()
            }
        }
    }

    pub fn categories(&self) -> Vec<&str> {
        self.categories.keys().map(String::as_str).collect()
    }

    pub fn subcategories(&self, category: &str) -> Vec<&str> {
        self.categories
            .get(category)
            .map(|subs| subs.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn options(&self, category: &str, subcategory: &str) -> &[OptionDescriptor] {
        self.categories
            .get(category)
            .and_then(|subs| subs.get(subcategory))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Every entry with its category and subcategory, in catalog order
    pub fn iter(&self) -> impl Iterator<Item = CatalogMatch<'_>> {
        self.categories.iter().flat_map(|(category, subs)| {
            subs.iter().flat_map(move |(subcategory, options)| {
                options.iter().map(move |option| CatalogMatch {
                    category: category.as_str(),
                    subcategory: subcategory.as_str(),
                    option,
                })
            })
        })
    }

    /// Case-insensitive substring search over option names
    pub fn search(&self, term: &str, category: Option<&str>) -> Vec<CatalogMatch<'_>> {
        let needle = term.to_lowercase();
        self.iter()
            .filter(|hit| category.is_none_or(|c| hit.category == c))
            .filter(|hit| hit.option.name.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn details(&self, category: &str, subcategory: &str, name: &str) -> Option<&OptionDescriptor> {
        self.options(category, subcategory)
            .iter()
            .find(|option| option.name == name)
    }

    pub fn stats(&self) -> BTreeMap<String, CategoryStats> {
        self.categories
            .iter()
            .map(|(category, subs)| {
                let subcategories: BTreeMap<String, usize> = subs
                    .iter()
                    .map(|(name, options)| (name.clone(), options.len()))
                    .collect();
                let total = subcategories.values().sum();
                (category.clone(), CategoryStats { total, subcategories })
            })
            .collect()
    }

    /// Random entry from a subcategory, or from the whole category when the
    /// subcategory is not given or unknown
    pub fn random_option<R: Rng + ?Sized>(
        &self,
        category: &str,
        subcategory: Option<&str>,
        rng: &mut R,
    ) -> Option<&OptionDescriptor> {
        let subs = self.categories.get(category)?;

        if let Some(options) = subcategory.and_then(|s| subs.get(s)) {
            return options.choose(rng);
        }

        let all: Vec<&OptionDescriptor> = subs.values().flatten().collect();
        all.choose(rng).copied()
    }

    pub fn random_combination<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<KeywordCombination> {
        let mut pick = |category: &str| self.random_option(category, None, rng).map(|o| o.name.clone());

        Some(KeywordCombination {
            style: pick("styles")?,
            camera: pick("camera")?,
            lens: pick("cameraLens")?,
            pov: pick("povs")?,
            angle: pick("cameraAngles")?,
            mood: pick("moods")?,
        })
    }

    /// `Category,Subcategory,Keyword,Description,Example` rows
    pub fn to_csv(&self) -> String {
        let mut csv = String::from("Category,Subcategory,Keyword,Description,Example\n");
        for hit in self.iter() {
            csv.push_str(&format!(
                "{},{},{},{},{}\n",
                hit.category,
                hit.subcategory,
                quote_csv(&hit.option.name),
                quote_csv(hit.option.description.as_deref().unwrap_or_default()),
                quote_csv(hit.option.example.as_deref().unwrap_or_default()),
            ));
        }
        csv
    }
}

fn quote_csv(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_bundled_catalog_loads() {
        let catalog = &*DEFAULT_CATALOG;
        let categories = catalog.categories();
        for expected in ["styles", "camera", "cameraLens", "povs", "cameraAngles", "moods", "imageGeneration", "writing"] {
            assert!(categories.contains(&expected), "missing {}", expected);
        }
        assert!(catalog.subcategories("styles").contains(&"artMovements"));
        assert!(catalog.subcategories("unknown").is_empty());
    }

    #[test]
    fn test_simple_and_detailed_entries() {
        let impressionism = DEFAULT_CATALOG
            .details("styles", "artMovements", "Impressionism")
            .unwrap();
        assert!(impressionism.is_detailed());
        assert!(impressionism.visual_ref.is_some());

        let dadaism = DEFAULT_CATALOG.details("styles", "artMovements", "Dadaism").unwrap();
        assert!(!dadaism.is_detailed());
        assert_eq!(dadaism, &OptionDescriptor::named("Dadaism"));

        assert!(DEFAULT_CATALOG.details("styles", "artMovements", "Nope").is_none());
    }

    #[test]
    fn test_quality_presets_are_named_by_tier() {
        let high = DEFAULT_CATALOG
            .details("imageGeneration", "qualityPresets", "High Quality")
            .unwrap();
        assert_eq!(high.description.as_deref(), Some("Better quality, slower generation"));
        assert_eq!(high.example.as_deref(), Some("--q 2"));

        let ultra = DEFAULT_CATALOG
            .details("imageGeneration", "qualityPresets", "Ultra Quality")
            .unwrap();
        assert_eq!(ultra.example.as_deref(), Some("--q 2 --chaos 0"));
        assert!(DEFAULT_CATALOG.details("imageGeneration", "qualityPresets", "--q 2").is_none());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let hits = DEFAULT_CATALOG.search("CYBERPUNK", Some("styles"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].subcategory, "digitalAesthetics");
        assert!(hits[0].option.is_detailed());

        let everywhere = DEFAULT_CATALOG.search("cyberpunk", None);
        assert!(everywhere.len() > 1);
        assert!(DEFAULT_CATALOG.search("zzzz-no-match", None).is_empty());
    }

    #[test]
    fn test_stats_sum_subcategories() {
        let stats = DEFAULT_CATALOG.stats();
        let styles = &stats["styles"];
        assert_eq!(styles.total, styles.subcategories.values().sum::<usize>());
        assert_eq!(
            styles.subcategories["artMovements"],
            DEFAULT_CATALOG.options("styles", "artMovements").len()
        );
    }

    #[test]
    fn test_random_helpers_are_seedable() {
        let mut rng = StdRng::seed_from_u64(7);
        let option = DEFAULT_CATALOG.random_option("povs", Some("heightBased"), &mut rng).unwrap();
        assert!(DEFAULT_CATALOG.options("povs", "heightBased").contains(option));

        // Unknown subcategory draws from the whole category
        assert!(DEFAULT_CATALOG.random_option("povs", Some("missing"), &mut rng).is_some());
        assert!(DEFAULT_CATALOG.random_option("missing", None, &mut rng).is_none());

        let first = DEFAULT_CATALOG.random_combination(&mut StdRng::seed_from_u64(42)).unwrap();
        let second = DEFAULT_CATALOG.random_combination(&mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(first, second);
        assert!(ReferenceCatalog::default().random_combination(&mut rng).is_none());
    }

    #[test]
    fn test_csv_export() {
        let catalog = ReferenceCatalog::from_json(
            r#"{"styles": {"art": [{"name": "Noir", "description": "Dark \"moody\" look"}, "Pop Art"]}}"#,
        )
        .unwrap();

        assert_eq!(
            catalog.to_csv(),
            "Category,Subcategory,Keyword,Description,Example\n\
             styles,art,\"Noir\",\"Dark \"\"moody\"\" look\",\"\"\n\
             styles,art,\"Pop Art\",\"\",\"\"\n"
        );
    }
}
