//! Topic classifier - ordered keyword rules over response text

use crate::topic::{default_rules, Topic, TopicRule};

/// Maps free text to exactly one [`Topic`]
///
/// Rules are examined in priority order and the first one with a matching
/// keyword wins. Text matching no rule is `general`, so classification is
/// total.
///
/// # Examples
///
/// ```
/// use primer_domain::{TopicClassifier, Topic};
///
/// let classifier = TopicClassifier::default();
/// assert_eq!(classifier.classify("Add a label to the catalog"), Topic::Catalog);
/// assert_eq!(classifier.classify("Hello there"), Topic::General);
/// ```
#[derive(Debug, Clone)]
pub struct TopicClassifier {
    rules: Vec<TopicRule>,
}

impl TopicClassifier {
    /// Build a classifier from a custom decision table
    ///
    /// The table must be in strictly increasing priority order, must not
    /// contain a rule for `general`, and every keyword must be non-empty
    /// lowercase text.
    pub fn new(rules: Vec<TopicRule>) -> Result<Self, String> {
        for pair in rules.windows(2) {
            if pair[0].priority >= pair[1].priority {
                return Err(format!(
                    "rule for '{}' (priority {}) is not ahead of rule for '{}' (priority {})",
                    pair[0].topic, pair[0].priority, pair[1].topic, pair[1].priority
                ));
            }
        }
        for rule in &rules {
            if rule.topic == Topic::General {
                return Err("'general' is the fallback and cannot have a rule".to_string());
            }
            if rule.keywords.is_empty() {
                return Err(format!("rule for '{}' has no keywords", rule.topic));
            }
            for keyword in &rule.keywords {
                if keyword.is_empty() || *keyword != keyword.to_lowercase() {
                    return Err(format!(
                        "rule for '{}' has invalid keyword '{}'",
                        rule.topic, keyword
                    ));
                }
            }
        }
        Ok(Self { rules })
    }

    /// Classify text into a topic
    pub fn classify(&self, text: &str) -> Topic {
        self.matching_rule(text)
            .map(|rule| rule.topic)
            .unwrap_or(Topic::General)
    }

    /// The rule that decided the classification, if any
    pub fn matching_rule(&self, text: &str) -> Option<&TopicRule> {
        let lowered = text.to_lowercase();
        self.rules.iter().find(|rule| rule.matches(&lowered))
    }

    /// The active decision table
    pub fn rules(&self) -> &[TopicRule] {
        &self.rules
    }
}

impl Default for TopicClassifier {
    fn default() -> Self {
        Self {
            rules: default_rules(),
        }
    }
}
