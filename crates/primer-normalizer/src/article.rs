//! Help-center article conversion

use crate::config::ValidationMode;
use crate::validator::RejectionReason;
use crate::NormalizeError;
use primer_domain::TrainingExample;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::warn;

/// A scraped help-center article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Article title, used as the question
    pub title: String,

    /// Article body, used as the answer
    pub content: String,

    /// Where the article was scraped from
    pub url: String,
}

impl Article {
    /// Convert to a conversation, optionally with a system prompt
    pub fn to_example(&self, system_prompt: Option<&str>) -> Result<TrainingExample, String> {
        if self.title.trim().is_empty() {
            return Err("article title is empty".to_string());
        }
        if self.content.trim().is_empty() {
            return Err("article content is empty".to_string());
        }
        match system_prompt {
            Some(prompt) => TrainingExample::with_system(prompt, self.title.trim(), self.content.trim()),
            None => TrainingExample::pair(self.title.trim(), self.content.trim()),
        }
    }

    /// JSONL record carrying the example and its source metadata
    pub fn to_record(&self, example: &TrainingExample) -> Value {
        json!({
            "messages": example.messages,
            "metadata": { "source": "help_center", "url": self.url },
        })
    }
}

/// Parse a JSON array of articles
pub fn parse_articles(json: &str) -> Result<Vec<Article>, NormalizeError> {
    serde_json::from_str(json).map_err(|e| NormalizeError::Validation {
        line: 1,
        reason: RejectionReason::InvalidJson(e.to_string()),
    })
}

/// Convert articles to examples
///
/// Positions in errors and skip lists are 1-based indexes into the array.
pub fn convert_articles<'a>(
    articles: &'a [Article],
    system_prompt: Option<&str>,
    mode: ValidationMode,
) -> Result<(Vec<(TrainingExample, &'a Article)>, Vec<(usize, String)>), NormalizeError> {
    let mut converted = Vec::with_capacity(articles.len());
    let mut skipped = Vec::new();

    for (idx, article) in articles.iter().enumerate() {
        match article.to_example(system_prompt) {
            Ok(example) => converted.push((example, article)),
            Err(issue) => match mode {
                ValidationMode::Strict => {
                    return Err(NormalizeError::Validation {
                        line: idx + 1,
                        reason: RejectionReason::Conversation(issue),
                    })
                }
                ValidationMode::Lenient => {
                    warn!("Skipping article {} ({}): {}", idx + 1, article.url, issue);
                    skipped.push((idx + 1, issue));
                }
            },
        }
    }
    Ok((converted, skipped))
}
