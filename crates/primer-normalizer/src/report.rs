//! Normalization run report

use primer_domain::Topic;
use serde::Serialize;
use std::collections::BTreeMap;

/// Counts collected while normalizing a stream
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NormalizeReport {
    /// Non-blank input lines seen
    pub processed: usize,

    /// Records written
    pub written: usize,

    /// Records skipped in lenient mode
    pub skipped: usize,

    /// Records that had top-level fields removed
    pub metadata_stripped: usize,

    /// Assistant messages that received citations
    pub citations_attached: usize,

    /// Records whose system prompt was changed
    pub system_prompts_changed: usize,

    /// Cited assistant messages per topic
    pub by_topic: BTreeMap<Topic, usize>,

    /// Line and reason of every skipped record
    pub rejections: Vec<(usize, String)>,
}

impl NormalizeReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a citation for a topic
    pub fn record_citation(&mut self, topic: Topic) {
        self.citations_attached += 1;
        *self.by_topic.entry(topic).or_insert(0) += 1;
    }

    /// Record a skipped line
    pub fn record_skip(&mut self, line: usize, reason: impl Into<String>) {
        self.skipped += 1;
        self.rejections.push((line, reason.into()));
    }

    /// Generate a summary report
    pub fn summary(&self) -> String {
        let mut lines = vec![
            "Normalization Summary".to_string(),
            "=====================".to_string(),
            format!("Processed: {}", self.processed),
            format!("Written: {}", self.written),
            format!("Skipped: {}", self.skipped),
            format!("Metadata stripped: {}", self.metadata_stripped),
            format!("Citations attached: {}", self.citations_attached),
        ];
        if self.system_prompts_changed > 0 {
            lines.push(format!("System prompts changed: {}", self.system_prompts_changed));
        }

        if !self.by_topic.is_empty() {
            lines.push(String::new());
            lines.push("Citations by topic:".to_string());
            for (topic, count) in &self.by_topic {
                lines.push(format!("  {}: {}", topic, count));
            }
        }

        if !self.rejections.is_empty() {
            lines.push(String::new());
            lines.push("Skipped lines:".to_string());
            for (line, reason) in &self.rejections {
                lines.push(format!("  line {}: {}", line, reason));
            }
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_citation() {
        let mut report = NormalizeReport::new();
        report.record_citation(Topic::Catalog);
        report.record_citation(Topic::Catalog);
        report.record_citation(Topic::Labels);
        assert_eq!(report.citations_attached, 3);
        assert_eq!(report.by_topic[&Topic::Catalog], 2);
        assert_eq!(report.by_topic.values().sum::<usize>(), report.citations_attached);
    }

    #[test]
    fn test_summary_lists_skips() {
        let mut report = NormalizeReport::new();
        report.processed = 2;
        report.written = 1;
        report.record_skip(2, "missing 'messages'");
        let summary = report.summary();
        assert!(summary.contains("Skipped: 1"));
        assert!(summary.contains("line 2: missing 'messages'"));
    }
}
