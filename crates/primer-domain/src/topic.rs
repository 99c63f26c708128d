//! Topic taxonomy - the closed set of subjects an answer can be about
//!
//! The taxonomy and its keyword rules live in one place so that the
//! classifier and the resource resolver can never disagree about which
//! topics exist.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Subject of an assistant response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    /// Product catalog and collections
    Catalog,
    /// Chat labels
    Labels,
    /// Saved quick replies
    QuickReplies,
    /// Automatic greeting message
    GreetingMessage,
    /// Automatic away message
    AwayMessage,
    /// Business profile details
    BusinessProfile,
    /// Message statistics
    Statistics,
    /// Broadcast lists
    Broadcast,
    /// Click-to-WhatsApp and Status ads
    Ads,
    /// wa.me and short links
    ShortLinks,
    /// Verification badges
    Verified,
    /// Channels
    Channels,
    /// Anything else
    General,
}

impl Topic {
    /// Every topic, in declaration order
    pub const ALL: [Topic; 13] = [
        Topic::Catalog,
        Topic::Labels,
        Topic::QuickReplies,
        Topic::GreetingMessage,
        Topic::AwayMessage,
        Topic::BusinessProfile,
        Topic::Statistics,
        Topic::Broadcast,
        Topic::Ads,
        Topic::ShortLinks,
        Topic::Verified,
        Topic::Channels,
        Topic::General,
    ];

    /// Get the topic label as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::Catalog => "catalog",
            Topic::Labels => "labels",
            Topic::QuickReplies => "quick_replies",
            Topic::GreetingMessage => "greeting_message",
            Topic::AwayMessage => "away_message",
            Topic::BusinessProfile => "business_profile",
            Topic::Statistics => "statistics",
            Topic::Broadcast => "broadcast",
            Topic::Ads => "ads",
            Topic::ShortLinks => "short_links",
            Topic::Verified => "verified",
            Topic::Channels => "channels",
            Topic::General => "general",
        }
    }

    /// Parse a topic label (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        let lowered = s.trim().to_lowercase();
        Topic::ALL.into_iter().find(|t| t.as_str() == lowered)
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Topic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid topic: {}", s))
    }
}

/// One row of the classifier's decision table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicRule {
    /// Lowercase substrings; any one of them triggers the rule
    ///
    /// A keyword with a leading space only matches at the start of a word:
    /// at the start of the text or after a non-alphanumeric character.
    pub keywords: Vec<String>,

    /// Topic returned when the rule fires
    pub topic: Topic,

    /// Position in the table; lower is examined first
    pub priority: u32,
}

impl TopicRule {
    /// Create a rule from keyword literals
    pub fn new(topic: Topic, priority: u32, keywords: &[&str]) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            topic,
            priority,
        }
    }

    /// Whether any keyword occurs in already-lowercased text
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| keyword_matches(lowered, k))
    }
}

fn keyword_matches(lowered: &str, keyword: &str) -> bool {
    let word = keyword.trim_start_matches(' ');
    if word.len() == keyword.len() || word.is_empty() {
        return lowered.contains(keyword);
    }
    lowered.match_indices(word).any(|(idx, _)| {
        lowered[..idx]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric())
    })
}

/// The default decision table
///
/// Product-feature nouns come first and broad category nouns last; `general`
/// has no rule because it is the classifier's fallback.
pub fn default_rules() -> Vec<TopicRule> {
    vec![
        TopicRule::new(Topic::Catalog, 0, &["catalog", "product"]),
        TopicRule::new(Topic::Labels, 1, &["label"]),
        TopicRule::new(Topic::QuickReplies, 2, &["quick repl"]),
        TopicRule::new(Topic::GreetingMessage, 3, &["greeting message"]),
        TopicRule::new(Topic::AwayMessage, 4, &["away message"]),
        TopicRule::new(Topic::Statistics, 5, &["statistic"]),
        TopicRule::new(Topic::Broadcast, 6, &["broadcast"]),
        TopicRule::new(Topic::BusinessProfile, 7, &["business profile", "profile"]),
        TopicRule::new(
            Topic::Ads,
            8,
            &["advertis", "click-to-whatsapp", "ctwa", " ads", "ads manager"],
        ),
        TopicRule::new(
            Topic::ShortLinks,
            9,
            &["short link", "wa.me", "whatsapp link", "business link"],
        ),
        TopicRule::new(Topic::Verified, 10, &["verified", "green checkmark", "badge"]),
        TopicRule::new(Topic::Channels, 11, &["channel"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_round_trip() {
        for topic in Topic::ALL {
            assert_eq!(Topic::parse(topic.as_str()), Some(topic));
        }
        assert_eq!(Topic::parse("CATALOG"), Some(Topic::Catalog));
        assert_eq!(Topic::parse("whatsapp_web"), None);
    }

    #[test]
    fn test_default_rules_are_ordered() {
        let rules = default_rules();
        for pair in rules.windows(2) {
            assert!(pair[0].priority < pair[1].priority);
        }
    }

    #[test]
    fn test_default_rules_cover_every_topic_but_general() {
        let rules = default_rules();
        for topic in Topic::ALL {
            let covered = rules.iter().any(|r| r.topic == topic);
            assert_eq!(covered, topic != Topic::General, "{}", topic);
        }
    }

    #[test]
    fn test_default_keywords_are_lowercase() {
        for rule in default_rules() {
            for keyword in &rule.keywords {
                assert_eq!(keyword, &keyword.to_lowercase());
                assert!(!keyword.is_empty());
            }
        }
    }

    #[test]
    fn test_word_start_keyword() {
        let rule = TopicRule::new(Topic::Ads, 0, &[" ads"]);
        assert!(rule.matches("ads on facebook bring customers"));
        assert!(rule.matches("step one:\nads drive traffic"));
        assert!(rule.matches("try status (ads) today"));
        assert!(rule.matches("run ads"));
        assert!(!rule.matches("capture new leads"));
        assert!(!rule.matches("download the uploads"));
    }

    #[test]
    fn test_topic_serializes_snake_case() {
        let json = serde_json::to_string(&Topic::QuickReplies).unwrap();
        assert_eq!(json, "\"quick_replies\"");
    }
}
