// Trending prompt feed backed by bundled samples, cached through a
// KeyValueStore for six hours

use chrono::{DateTime, Duration, Utc};
use lazy_static::lazy_static;
use rand::Rng;
use rand::seq::SliceRandom;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::ops::Range;
use tracing::{debug, info, warn};

use crate::store::KeyValueStore;

pub const TRENDING_CACHE_KEY: &str = "monsterPromptGenerator_trending";
pub const TRENDING_TTL_HOURS: i64 = 6;

/// Category filter value matching every prompt
pub const ALL_CATEGORIES: &str = "all";

const MAX_LIKES_JITTER: u32 = 20;

lazy_static! {
    static ref VERSION_RE: Regex = Regex::new(r"--v(\d+)").expect("version pattern is valid");
    static ref ASPECT_RATIO_RE: Regex = Regex::new(r"--ar (\d+:\d+)").expect("aspect ratio pattern is valid");
    static ref QUALITY_RE: Regex = Regex::new(r"--q (\d+)").expect("quality pattern is valid");
    static ref NEGATIVE_RE: Regex = Regex::new(r"--no (.+?)(?:--|\s*$)").expect("negative pattern is valid");
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendingPrompt {
    pub id: u32,
    pub prompt: String,
    pub category: String,
    pub likes: u32,
    pub source: String,
    pub timestamp: DateTime<Utc>,
    pub tags: Vec<String>,
    pub author: String,
}

impl TrendingPrompt {
    #[allow(clippy::too_many_arguments)]
    fn sample(
        id: u32,
        prompt: &str,
        category: &str,
        likes: u32,
        source: &str,
        age_minutes: i64,
        tags: &[&str],
        author: &str,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            prompt: prompt.to_string(),
            category: category.to_string(),
            likes,
            source: source.to_string(),
            timestamp: now - Duration::minutes(age_minutes),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            author: author.to_string(),
        }
    }

    fn matches(&self, needle: &str) -> bool {
        self.prompt.to_lowercase().contains(needle)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
            || self.category.to_lowercase().contains(needle)
    }
}

/// Demo feed, aged relative to `now`
pub fn sample_prompts(now: DateTime<Utc>) -> Vec<TrendingPrompt> {
    vec![
        TrendingPrompt::sample(
            1,
            "A majestic dragon perched on a crystal mountain peak, cinematic lighting, golden hour, shot with 85mm lens, photorealistic, ultra detailed --v6 --ar 16:9",
            "Fantasy",
            342,
            "Community",
            30,
            &["dragon", "fantasy", "mountain", "cinematic"],
            "PromptMaster_AI",
            now,
        ),
        TrendingPrompt::sample(
            2,
            "Cyberpunk street scene with neon reflections on wet pavement, dramatic lighting, wide angle shot, blade runner style, highly detailed --v6 --ar 21:9",
            "Sci-Fi",
            287,
            "Reddit",
            45,
            &["cyberpunk", "neon", "street", "sci-fi"],
            "NeonDreamer",
            now,
        ),
        TrendingPrompt::sample(
            3,
            "Portrait of a wise elderly wizard with a long flowing beard, soft natural lighting, painted in oil painting style, renaissance art, masterpiece --v6 --ar 4:5",
            "Portrait",
            198,
            "Discord",
            60,
            &["wizard", "portrait", "oil painting", "fantasy"],
            "ArtisticVisions",
            now,
        ),
        TrendingPrompt::sample(
            4,
            "Underwater coral reef teeming with colorful fish, volumetric lighting, national geographic style, ultra realistic, 8K resolution --v6 --ar 16:9",
            "Nature",
            156,
            "Community",
            90,
            &["underwater", "coral reef", "nature", "photography"],
            "OceanExplorer",
            now,
        ),
        TrendingPrompt::sample(
            5,
            "Minimalist modern living room with floor-to-ceiling windows, Scandinavian design, natural lighting, architectural photography --v6 --ar 3:2",
            "Architecture",
            134,
            "Reddit",
            120,
            &["interior", "minimalist", "scandinavian", "architecture"],
            "DesignPro",
            now,
        ),
        TrendingPrompt::sample(
            6,
            "Steampunk airship floating above Victorian city, golden hour lighting, detailed mechanical elements, fantasy art style --v6 --ar 16:9",
            "Steampunk",
            289,
            "Community",
            180,
            &["steampunk", "airship", "victorian", "mechanical"],
            "SteamCraftAI",
            now,
        ),
    ]
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CachedFeed {
    data: Vec<TrendingPrompt>,
    timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendingStats {
    pub total_prompts: usize,
    pub categories: usize,
    pub total_likes: u64,
    pub sources: Vec<String>,
    pub last_update: Option<DateTime<Utc>>,
}

pub struct TrendingCache<S: KeyValueStore> {
    store: S,
    ttl: Duration,
    data: Vec<TrendingPrompt>,
    updated_at: Option<DateTime<Utc>>,
    samples: Vec<TrendingPrompt>,
}

impl<S: KeyValueStore> TrendingCache<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            ttl: Duration::hours(TRENDING_TTL_HOURS),
            data: Vec::new(),
            updated_at: None,
            samples: sample_prompts(Utc::now()),
        }
    }

    /// Adopt the stored feed if it is younger than the TTL
    pub fn load(&mut self) -> bool {
        let raw = match self.store.get(TRENDING_CACHE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return false,
            Err(e) => {
                warn!("Failed to load trending prompts cache: {}", e);
                return false;
            }
        };

        let cached: CachedFeed = match serde_json::from_str(&raw) {
            Ok(cached) => cached,
            Err(e) => {
                warn!("Failed to parse trending prompts cache: {}", e);
                return false;
            }
        };

        if Utc::now() - cached.timestamp >= self.ttl {
            debug!("Trending prompts cache expired at {}", cached.timestamp + self.ttl);
            return false;
        }

        self.data = cached.data;
        self.updated_at = Some(cached.timestamp);
        true
    }

    /// Reshuffle the samples with fresh likes and ages, then persist
    pub fn refresh<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &[TrendingPrompt] {
        let now = Utc::now();
        let window_ms = self.ttl.num_milliseconds().max(1);

        let mut updated = self.samples.clone();
        updated.shuffle(rng);
        for prompt in &mut updated {
            prompt.likes += rng.gen_range(0..MAX_LIKES_JITTER);
            prompt.timestamp = now - Duration::milliseconds(rng.gen_range(0..window_ms));
        }

        self.data = updated;
        self.updated_at = Some(now);
        self.save();
        info!("Refreshed {} trending prompts", self.data.len());

        &self.data
    }

    fn save(&self) {
        let Some(timestamp) = self.updated_at else {
            return;
        };
        let cached = CachedFeed {
            data: self.data.clone(),
            timestamp,
        };
        match serde_json::to_string(&cached) {
            Ok(serialized) => {
                if let Err(e) = self.store.set(TRENDING_CACHE_KEY, &serialized) {
                    warn!("Failed to save trending prompts cache: {}", e);
                }
            }
            Err(e) => warn!("Failed to serialize trending prompts cache: {}", e),
        }
    }

    /// Cached feed, or the samples when nothing was fetched yet
    pub fn prompts(&self) -> &[TrendingPrompt] {
        if self.data.is_empty() { &self.samples } else { &self.data }
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    pub fn filter_by_category(&self, category: &str) -> Vec<&TrendingPrompt> {
        self.prompts()
            .iter()
            .filter(|p| category == ALL_CATEGORIES || p.category.eq_ignore_ascii_case(category))
            .collect()
    }

    /// Case-insensitive match over prompt text, tags and category
    pub fn search(&self, query: &str) -> Vec<&TrendingPrompt> {
        let needle = query.to_lowercase();
        self.prompts().iter().filter(|p| p.matches(&needle)).collect()
    }

    pub fn stats(&self) -> TrendingStats {
        let prompts = self.prompts();
        let categories: BTreeSet<&str> = prompts.iter().map(|p| p.category.as_str()).collect();

        let mut sources: Vec<String> = Vec::new();
        for prompt in prompts {
            if !sources.contains(&prompt.source) {
                sources.push(prompt.source.clone());
            }
        }

        TrendingStats {
            total_prompts: prompts.len(),
            categories: categories.len(),
            total_likes: prompts.iter().map(|p| u64::from(p.likes)).sum(),
            sources,
            last_update: self.updated_at,
        }
    }

    pub fn clear(&mut self) {
        self.data.clear();
        self.updated_at = None;
        if let Err(e) = self.store.remove(TRENDING_CACHE_KEY) {
            warn!("Failed to remove trending prompts cache: {}", e);
        }
    }
}

/// `<m>m ago` under an hour, `<h>h ago` under a day, `<d>d ago` beyond
pub fn time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = (now - timestamp).max(Duration::zero());
    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();

    if minutes < 60 {
        format!("{}m ago", minutes)
    } else if hours < 24 {
        format!("{}h ago", hours)
    } else {
        format!("{}d ago", elapsed.num_days())
    }
}

/// Directive tokens found in a prompt, each in its canonical form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptParameters {
    pub version: Option<String>,
    pub aspect_ratio: Option<String>,
    pub quality: Option<String>,
    pub negative: Option<String>,
}

impl PromptParameters {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        [&self.version, &self.aspect_ratio, &self.quality, &self.negative]
            .into_iter()
            .filter_map(|p| p.as_deref())
    }
}

/// Matched directive: the byte span it covers in the prompt and its value
fn find_directive(re: &Regex, prompt: &str) -> Option<(Range<usize>, String)> {
    let caps = re.captures(prompt)?;
    let whole = caps.get(0)?;
    let value = caps.get(1)?;
    // The span stops at the value, leaving any `--` terminator in place
    Some((whole.start()..value.end(), value.as_str().trim().to_string()))
}

fn find_parameters(prompt: &str) -> (PromptParameters, Vec<Range<usize>>) {
    let mut spans = Vec::new();
    let mut directive = |re: &Regex, prefix: &str| {
        find_directive(re, prompt).map(|(span, value)| {
            spans.push(span);
            format!("{}{}", prefix, value)
        })
    };

    let parameters = PromptParameters {
        version: directive(&*VERSION_RE, "--v"),
        aspect_ratio: directive(&*ASPECT_RATIO_RE, "--ar "),
        quality: directive(&*QUALITY_RE, "--q "),
        negative: directive(&*NEGATIVE_RE, "--no "),
    };
    (parameters, spans)
}

pub fn extract_parameters(prompt: &str) -> PromptParameters {
    find_parameters(prompt).0
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportedPrompt {
    pub description: String,
    pub parameters: PromptParameters,
}

/// Split a prompt into its description and its directive parameters
pub fn import_prompt(prompt: &str) -> ImportedPrompt {
    let (parameters, mut spans) = find_parameters(prompt);
    spans.sort_by_key(|span| span.start);

    let mut description = String::with_capacity(prompt.len());
    let mut cursor = 0;
    for span in spans {
        if span.start > cursor {
            description.push_str(&prompt[cursor..span.start]);
        }
        cursor = cursor.max(span.end);
    }
    description.push_str(&prompt[cursor..]);
    let description = description.split_whitespace().collect::<Vec<_>>().join(" ");

    ImportedPrompt {
        description,
        parameters,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn create_test_cache() -> TrendingCache<MemoryStore> {
        TrendingCache::new(MemoryStore::new())
    }

    #[test]
    fn test_samples_used_before_refresh() {
        let cache = create_test_cache();
        assert_eq!(cache.prompts().len(), 6);
        assert_eq!(cache.prompts()[0].author, "PromptMaster_AI");
        assert!(cache.updated_at().is_none());
    }

    #[test]
    fn test_refresh_jitters_and_persists() {
        let mut cache = create_test_cache();
        let originals = sample_prompts(Utc::now());
        let mut rng = StdRng::seed_from_u64(3);

        let refreshed = cache.refresh(&mut rng).to_vec();
        assert_eq!(refreshed.len(), originals.len());

        let now = Utc::now();
        for prompt in &refreshed {
            let original = originals.iter().find(|o| o.id == prompt.id).unwrap();
            assert!(prompt.likes >= original.likes);
            assert!(prompt.likes < original.likes + MAX_LIKES_JITTER);
            assert!(now - prompt.timestamp <= Duration::hours(TRENDING_TTL_HOURS) + Duration::seconds(5));
        }

        let mut reloaded = TrendingCache::new(MemoryStore::new());
        let raw = cache.store.get(TRENDING_CACHE_KEY).unwrap().unwrap();
        reloaded.store.set(TRENDING_CACHE_KEY, &raw).unwrap();
        assert!(reloaded.load());
        assert_eq!(reloaded.prompts(), refreshed.as_slice());
    }

    #[test]
    fn test_expired_cache_is_ignored() {
        let store = MemoryStore::new();
        let stale = CachedFeed {
            data: sample_prompts(Utc::now()),
            timestamp: Utc::now() - Duration::hours(7),
        };
        store
            .set(TRENDING_CACHE_KEY, &serde_json::to_string(&stale).unwrap())
            .unwrap();

        let mut cache = TrendingCache::new(store);
        assert!(!cache.load());
        assert!(cache.updated_at().is_none());
    }

    #[test]
    fn test_corrupt_cache_is_ignored() {
        let store = MemoryStore::new();
        store.set(TRENDING_CACHE_KEY, "not json").unwrap();
        assert!(!TrendingCache::new(store).load());
    }

    #[test]
    fn test_clear_resets_feed() {
        let mut cache = create_test_cache();
        cache.refresh(&mut StdRng::seed_from_u64(5));
        cache.clear();

        assert!(cache.updated_at().is_none());
        assert_eq!(cache.store.get(TRENDING_CACHE_KEY).unwrap(), None);
        assert_eq!(cache.prompts().len(), 6);
    }

    #[test]
    fn test_filter_and_search() {
        let cache = create_test_cache();
        assert_eq!(cache.filter_by_category(ALL_CATEGORIES).len(), 6);
        assert_eq!(cache.filter_by_category("sci-fi").len(), 1);
        assert!(cache.filter_by_category("Underwater").is_empty());

        let fantasy: Vec<u32> = cache.search("FANTASY").iter().map(|p| p.id).collect();
        assert_eq!(fantasy, vec![1, 3, 6]);
        assert_eq!(cache.search("coral")[0].id, 4);
    }

    #[test]
    fn test_stats() {
        let stats = create_test_cache().stats();
        assert_eq!(stats.total_prompts, 6);
        assert_eq!(stats.categories, 6);
        assert_eq!(stats.total_likes, 342 + 287 + 198 + 156 + 134 + 289);
        assert_eq!(stats.sources, vec!["Community", "Reddit", "Discord"]);
        assert!(stats.last_update.is_none());
    }

    #[test]
    fn test_time_ago() {
        let now = Utc::now();
        assert_eq!(time_ago(now - Duration::minutes(30), now), "30m ago");
        assert_eq!(time_ago(now - Duration::minutes(59), now), "59m ago");
        assert_eq!(time_ago(now - Duration::minutes(60), now), "1h ago");
        assert_eq!(time_ago(now - Duration::hours(23), now), "23h ago");
        assert_eq!(time_ago(now - Duration::hours(49), now), "2d ago");
        assert_eq!(time_ago(now + Duration::minutes(5), now), "0m ago");
    }

    #[test]
    fn test_extract_parameters() {
        let params = extract_parameters("a castle --v6 --ar 16:9 --q 2 --no blurry, text --style raw");
        assert_eq!(params.version.as_deref(), Some("--v6"));
        assert_eq!(params.aspect_ratio.as_deref(), Some("--ar 16:9"));
        assert_eq!(params.quality.as_deref(), Some("--q 2"));
        assert_eq!(params.negative.as_deref(), Some("--no blurry, text"));

        let trailing = extract_parameters("a castle --no fog, rain");
        assert_eq!(trailing.negative.as_deref(), Some("--no fog, rain"));
        assert_eq!(extract_parameters("plain text"), PromptParameters::default());
    }

    #[test]
    fn test_import_prompt() {
        let imported = import_prompt(
            "Steampunk airship floating above Victorian city, golden hour lighting --v6 --ar 16:9",
        );
        assert_eq!(
            imported.description,
            "Steampunk airship floating above Victorian city, golden hour lighting"
        );
        assert_eq!(imported.parameters.iter().collect::<Vec<_>>(), vec!["--v6", "--ar 16:9"]);
    }

    #[test]
    fn test_import_prompt_with_irregular_spacing() {
        let imported = import_prompt("a castle --no  fog, rain --v6");
        assert_eq!(imported.description, "a castle");
        assert_eq!(imported.parameters.negative.as_deref(), Some("--no fog, rain"));
        assert_eq!(imported.parameters.version.as_deref(), Some("--v6"));

        let trailing = import_prompt("misty harbor --ar 3:2 --no   boats  ");
        assert_eq!(trailing.description, "misty harbor");
        assert_eq!(trailing.parameters.negative.as_deref(), Some("--no boats"));
    }
}
