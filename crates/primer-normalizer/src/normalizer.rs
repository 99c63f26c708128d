//! Record normalizer - canonical output schema with optional citations

use crate::citation::{append_block, strip_block, CitationStyle};
use crate::validator::{parse_record, ParsedRecord};
use crate::{NormalizeConfig, NormalizeError};
use primer_domain::{ResourceResolver, Role, Topic, TopicClassifier, TrainingExample};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One message in the output schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedMessage {
    /// Speaker
    pub role: Role,

    /// Text, possibly with an inline citation block
    pub content: String,

    /// Classified topic (`metadata_urls` style)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<Topic>,

    /// Every reference for the topic (`metadata_urls` style)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_center_urls: Option<Vec<String>>,

    /// First reference for the topic (`metadata_primary` style)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_center_url: Option<String>,
}

impl NormalizedMessage {
    fn plain(role: Role, content: String) -> Self {
        Self {
            role,
            content,
            topic: None,
            help_center_urls: None,
            help_center_url: None,
        }
    }
}

/// A record in the output schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    /// Conversation turns
    pub messages: Vec<NormalizedMessage>,

    /// Top-level fields kept when metadata stripping is off
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NormalizedRecord {
    /// Serialize as one JSONL line (without the trailing newline)
    pub fn to_json_line(&self) -> Result<String, NormalizeError> {
        serde_json::to_string(self).map_err(|e| NormalizeError::Serialize(e.to_string()))
    }
}

/// A normalized record plus what normalization did to it
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    /// The output record
    pub record: NormalizedRecord,

    /// Number of top-level fields dropped
    pub fields_stripped: usize,

    /// Topics of the assistant messages that received citations
    pub cited_topics: Vec<Topic>,

    /// Whether the system prompt policy changed the conversation
    pub system_prompt_changed: bool,
}

/// Converts records to the canonical output schema
///
/// # Examples
///
/// ```
/// use primer_normalizer::{CitationStyle, NormalizeConfig, Normalizer};
///
/// let config = NormalizeConfig::default().with_citations(CitationStyle::MetadataPrimary);
/// let normalizer = Normalizer::new(config).unwrap();
/// let raw = r#"{"messages":[{"role":"user","content":"Catalog?"},{"role":"assistant","content":"Open your catalog."}]}"#;
/// let record = normalizer.normalize(raw, 1).unwrap();
/// assert_eq!(
///     record.messages[1].help_center_url.as_deref(),
///     Some("https://faq.whatsapp.com/2929318000711140")
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Normalizer {
    config: NormalizeConfig,
    classifier: TopicClassifier,
    resolver: ResourceResolver,
}

impl Normalizer {
    /// Create a normalizer with the default topic table and references
    pub fn new(config: NormalizeConfig) -> Result<Self, NormalizeError> {
        Self::with_lookup(config, TopicClassifier::default(), ResourceResolver::default())
    }

    /// Create a normalizer with a custom classifier and resolver
    pub fn with_lookup(
        config: NormalizeConfig,
        classifier: TopicClassifier,
        resolver: ResourceResolver,
    ) -> Result<Self, NormalizeError> {
        config.validate().map_err(NormalizeError::Config)?;
        Ok(Self {
            config,
            classifier,
            resolver,
        })
    }

    /// Active configuration
    pub fn config(&self) -> &NormalizeConfig {
        &self.config
    }

    /// Normalize one raw JSONL line
    pub fn normalize(&self, raw: &str, line: usize) -> Result<NormalizedRecord, NormalizeError> {
        self.normalize_detailed(raw, line).map(|n| n.record)
    }

    /// Normalize one raw JSONL line, reporting what changed
    pub fn normalize_detailed(&self, raw: &str, line: usize) -> Result<Normalized, NormalizeError> {
        let ParsedRecord { example, extra } = parse_record(raw, line)?;
        self.finish(example, extra)
    }

    /// Normalize an in-memory example
    pub fn normalize_example(&self, example: &TrainingExample) -> Result<Normalized, NormalizeError> {
        self.finish(example.clone(), Map::new())
    }

    fn finish(
        &self,
        example: TrainingExample,
        extra: Map<String, Value>,
    ) -> Result<Normalized, NormalizeError> {
        let mut messages = example.messages;
        let system_prompt_changed = self
            .config
            .system_prompt
            .apply(&mut messages)
            .map_err(NormalizeError::Config)?;

        let mut cited_topics = Vec::new();
        let messages = messages
            .into_iter()
            .map(|message| {
                if message.role != Role::Assistant {
                    return NormalizedMessage::plain(message.role, message.content);
                }
                let (normalized, topic) = self.cite(message.content);
                cited_topics.extend(topic);
                normalized
            })
            .collect();

        let (extra, fields_stripped) = if self.config.strip_metadata {
            let stripped = extra.len();
            (Map::new(), stripped)
        } else {
            (extra, 0)
        };

        Ok(Normalized {
            record: NormalizedRecord { messages, extra },
            fields_stripped,
            cited_topics,
            system_prompt_changed,
        })
    }

    fn cite(&self, content: String) -> (NormalizedMessage, Option<Topic>) {
        if !self.config.attach_resources {
            return (NormalizedMessage::plain(Role::Assistant, content), None);
        }

        let body = strip_block(&content);
        if let Some(phrase) = &self.config.attach_only_when {
            if !body.to_lowercase().contains(&phrase.to_lowercase()) {
                return (NormalizedMessage::plain(Role::Assistant, content), None);
            }
        }

        let topic = self.classifier.classify(body);
        let resources = self.resolver.resolve(topic);
        let mut message = NormalizedMessage::plain(Role::Assistant, String::new());
        match self.config.citation_style {
            CitationStyle::MetadataUrls => {
                message.topic = Some(topic);
                message.help_center_urls = Some(resources.urls.clone());
                message.content = content;
            }
            CitationStyle::MetadataPrimary => {
                message.help_center_url = Some(resources.primary_url().to_string());
                message.content = content;
            }
            CitationStyle::Inline => {
                message.content = append_block(&content, &resources.urls);
            }
        }
        (message, Some(topic))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::SystemPromptPolicy;

    const CATALOG: &str = r#"{"messages":[{"role":"user","content":"How do I set up a catalog?"},{"role":"assistant","content":"Go to Business Tools and open Catalog."}],"metadata":{"category":"products","source":"curated"}}"#;

    #[test]
    fn test_default_strips_metadata_only() {
        let normalizer = Normalizer::new(NormalizeConfig::default()).unwrap();
        let normalized = normalizer.normalize_detailed(CATALOG, 1).unwrap();
        assert!(normalized.record.extra.is_empty());
        assert_eq!(normalized.fields_stripped, 1);
        assert!(normalized.cited_topics.is_empty());
        let json = normalized.record.to_json_line().unwrap();
        assert!(!json.contains("metadata"));
        assert!(!json.contains("help_center"));
    }

    #[test]
    fn test_metadata_kept_when_not_stripping() {
        let config = NormalizeConfig {
            strip_metadata: false,
            ..Default::default()
        };
        let record = Normalizer::new(config).unwrap().normalize(CATALOG, 1).unwrap();
        assert!(record.extra.contains_key("metadata"));
        let json = record.to_json_line().unwrap();
        assert!(json.starts_with("{\"messages\":"));
        assert!(json.contains("\"metadata\":{"));
    }

    #[test]
    fn test_metadata_urls_style() {
        let config = NormalizeConfig::default().with_citations(CitationStyle::MetadataUrls);
        let record = Normalizer::new(config).unwrap().normalize(CATALOG, 1).unwrap();
        let assistant = &record.messages[1];
        assert_eq!(assistant.topic, Some(Topic::Catalog));
        assert_eq!(assistant.help_center_urls.as_ref().unwrap().len(), 2);
        assert!(assistant.help_center_url.is_none());
        assert!(record.messages[0].topic.is_none());
    }

    #[test]
    fn test_inline_style() {
        let config = NormalizeConfig::default().with_citations(CitationStyle::Inline);
        let record = Normalizer::new(config).unwrap().normalize(CATALOG, 1).unwrap();
        let content = &record.messages[1].content;
        assert!(content.ends_with(
            "📚 Learn more:\n• https://faq.whatsapp.com/2929318000711140\n• http://faq.whatsapp.com/487917009931629"
        ));
        assert!(record.messages[1].topic.is_none());
    }

    #[test]
    fn test_prior_message_fields_are_rederived() {
        let raw = r#"{"messages":[{"role":"user","content":"Hi"},{"role":"assistant","content":"Use labels to sort chats.","topic":"catalog","help_center_url":"https://example.com"}]}"#;
        let config = NormalizeConfig::default().with_citations(CitationStyle::MetadataUrls);
        let record = Normalizer::new(config).unwrap().normalize(raw, 1).unwrap();
        assert_eq!(record.messages[1].topic, Some(Topic::Labels));
        assert!(record.messages[1].help_center_url.is_none());
    }

    #[test]
    fn test_attach_only_when_phrase_present() {
        let mut config = NormalizeConfig::default().with_citations(CitationStyle::MetadataPrimary);
        config.attach_only_when = Some("WhatsApp Business".to_string());
        let normalizer = Normalizer::new(config).unwrap();

        let plain = normalizer.normalize(CATALOG, 1).unwrap();
        assert!(plain.messages[1].help_center_url.is_none());

        let raw = r#"{"messages":[{"role":"user","content":"Catalog?"},{"role":"assistant","content":"In whatsapp business, open Catalog."}]}"#;
        let cited = normalizer.normalize(raw, 2).unwrap();
        assert!(cited.messages[1].help_center_url.is_some());
    }

    #[test]
    fn test_system_prompt_replaced() {
        let raw = r#"{"messages":[{"role":"system","content":"old"},{"role":"user","content":"Hi"},{"role":"assistant","content":"Hello"}]}"#;
        let config = NormalizeConfig {
            system_prompt: SystemPromptPolicy::Replace("new".to_string()),
            ..Default::default()
        };
        let normalized = Normalizer::new(config)
            .unwrap()
            .normalize_detailed(raw, 1)
            .unwrap();
        assert!(normalized.system_prompt_changed);
        assert_eq!(normalized.record.messages[0].content, "new");
    }

    #[test]
    fn test_normalize_example() {
        let example = TrainingExample::pair("Labels?", "Use labels to sort chats.").unwrap();
        let config = NormalizeConfig::default().with_citations(CitationStyle::MetadataUrls);
        let normalized = Normalizer::new(config)
            .unwrap()
            .normalize_example(&example)
            .unwrap();
        assert_eq!(normalized.cited_topics, vec![Topic::Labels]);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = NormalizeConfig {
            attach_only_when: Some("x".to_string()),
            ..Default::default()
        };
        assert!(matches!(Normalizer::new(config), Err(NormalizeError::Config(_))));
    }
}
