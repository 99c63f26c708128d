//! Resource resolver - canonical help-center references per topic

use crate::topic::Topic;
use std::collections::BTreeMap;

/// Reference URLs bound to one topic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceSet {
    /// Topic the references explain
    pub topic: Topic,

    /// Human-readable title
    pub title: String,

    /// Absolute http(s) URLs, never empty
    pub urls: Vec<String>,
}

impl ResourceSet {
    /// Create a resource set from literals
    pub fn new(topic: Topic, title: &str, urls: &[&str]) -> Self {
        Self {
            topic,
            title: title.to_string(),
            urls: urls.iter().map(|u| u.to_string()).collect(),
        }
    }

    /// First URL of the set
    pub fn primary_url(&self) -> &str {
        // `ResourceResolver::new` rejects empty sets
        self.urls.first().map(String::as_str).unwrap_or_default()
    }
}

/// Maps a topic to its [`ResourceSet`], falling back to `general`
///
/// # Examples
///
/// ```
/// use primer_domain::{ResourceResolver, Topic};
///
/// let resolver = ResourceResolver::default();
/// let set = resolver.resolve(Topic::Catalog);
/// assert_eq!(set.topic, Topic::Catalog);
/// assert!(!set.urls.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct ResourceResolver {
    sets: BTreeMap<Topic, ResourceSet>,
    general: ResourceSet,
}

impl ResourceResolver {
    /// Build a resolver from a list of resource sets
    ///
    /// The list must include a `general` set; every set needs at least one
    /// absolute http(s) URL; a topic may appear only once.
    pub fn new(sets: Vec<ResourceSet>) -> Result<Self, String> {
        let mut map = BTreeMap::new();
        for set in sets {
            if set.urls.is_empty() {
                return Err(format!("resource set for '{}' has no URLs", set.topic));
            }
            for url in &set.urls {
                if !is_absolute_http_url(url) {
                    return Err(format!(
                        "resource set for '{}' has invalid URL '{}'",
                        set.topic, url
                    ));
                }
            }
            let topic = set.topic;
            if map.insert(topic, set).is_some() {
                return Err(format!("duplicate resource set for '{}'", topic));
            }
        }
        let general = map
            .remove(&Topic::General)
            .ok_or_else(|| "resource sets must include 'general'".to_string())?;
        Ok(Self { sets: map, general })
    }

    /// Resolve a topic to its references
    pub fn resolve(&self, topic: Topic) -> &ResourceSet {
        match topic {
            Topic::General => &self.general,
            other => self.sets.get(&other).unwrap_or(&self.general),
        }
    }

    /// Whether the topic has its own (non-fallback) set
    pub fn has_dedicated(&self, topic: Topic) -> bool {
        topic == Topic::General || self.sets.contains_key(&topic)
    }

    /// All configured sets, ordered by topic
    pub fn sets(&self) -> impl Iterator<Item = &ResourceSet> {
        self.sets.values().chain(std::iter::once(&self.general))
    }
}

impl Default for ResourceResolver {
    fn default() -> Self {
        let mut sets: BTreeMap<Topic, ResourceSet> = default_resource_sets()
            .into_iter()
            .map(|set| (set.topic, set))
            .collect();
        let general = sets.remove(&Topic::General).unwrap_or_else(|| {
            ResourceSet::new(
                Topic::General,
                "WhatsApp Business",
                &["https://faq.whatsapp.com/641572844337957"],
            )
        });
        Self { sets, general }
    }
}

/// Verified help-center articles for every topic in the taxonomy
pub fn default_resource_sets() -> Vec<ResourceSet> {
    const BUSINESS_FEATURES: &str = "https://faq.whatsapp.com/1623293708131281";

    vec![
        ResourceSet::new(
            Topic::BusinessProfile,
            "Business Profile",
            &[
                "https://faq.whatsapp.com/577829787429875",
                "https://faq.whatsapp.com/665179381840568",
            ],
        ),
        ResourceSet::new(
            Topic::Catalog,
            "Catalog",
            &[
                "https://faq.whatsapp.com/2929318000711140",
                "http://faq.whatsapp.com/487917009931629",
            ],
        ),
        ResourceSet::new(Topic::QuickReplies, "Quick Replies", &[BUSINESS_FEATURES]),
        ResourceSet::new(Topic::Labels, "Labels", &[BUSINESS_FEATURES]),
        ResourceSet::new(Topic::GreetingMessage, "Greeting Messages", &[BUSINESS_FEATURES]),
        ResourceSet::new(Topic::AwayMessage, "Away Messages", &[BUSINESS_FEATURES]),
        ResourceSet::new(Topic::Statistics, "Statistics", &[BUSINESS_FEATURES]),
        ResourceSet::new(Topic::Broadcast, "Broadcast Lists", &[BUSINESS_FEATURES]),
        ResourceSet::new(
            Topic::Ads,
            "Advertising",
            &[
                "https://faq.whatsapp.com/512723604104492",
                "https://faq.whatsapp.com/337473702666585",
            ],
        ),
        ResourceSet::new(
            Topic::ShortLinks,
            "Short Links",
            &["https://faq.whatsapp.com/502291734918768"],
        ),
        ResourceSet::new(
            Topic::Verified,
            "Verification",
            &[
                "https://faq.whatsapp.com/2613314448830863",
                "https://faq.whatsapp.com/7508793019154580",
            ],
        ),
        ResourceSet::new(
            Topic::Channels,
            "Channels",
            &["https://faq.whatsapp.com/794229125227200"],
        ),
        ResourceSet::new(
            Topic::General,
            "WhatsApp Business",
            &["https://faq.whatsapp.com/641572844337957"],
        ),
    ]
}

fn is_absolute_http_url(url: &str) -> bool {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));
    match rest {
        Some(rest) => {
            let host = rest.split('/').next().unwrap_or_default();
            !host.is_empty() && !rest.contains(char::is_whitespace)
        }
        None => false,
    }
}
