//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use primer_composer::CompositionStats;
use primer_domain::{ResourceResolver, ResourceSet, Topic, TopicRule};
use primer_normalizer::NormalizeReport;
use serde_json::json;
use std::collections::BTreeMap;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format per-category counts of a generated file.
    pub fn category_counts(&self, source: &str, counts: &BTreeMap<String, usize>) -> Result<String> {
        let total: usize = counts.values().sum();
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                "source": source,
                "total": total,
                "categories": counts,
            }))?),
            OutputFormat::Quiet => Ok(total.to_string()),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Category", "Examples"]);
                for (category, count) in counts {
                    builder.push_record([category.clone(), count.to_string()]);
                }
                builder.push_record(["total".to_string(), total.to_string()]);
                Ok(format!(
                    "{}\n{}",
                    self.success(&format!("Generated {} examples from {}", total, source)),
                    render(builder)
                ))
            }
        }
    }

    /// Format a normalization report.
    pub fn normalize_report(&self, report: &NormalizeReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Quiet => Ok(report.written.to_string()),
            OutputFormat::Table => {
                let mut out = vec![report.summary()];
                for (line, reason) in &report.rejections {
                    out.push(self.warning(&format!("line {}: {}", line, reason)));
                }
                Ok(out.join("\n"))
            }
        }
    }

    /// Format composition statistics.
    pub fn composition(&self, stats: &CompositionStats) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(stats)?),
            OutputFormat::Quiet => Ok(stats.final_size.to_string()),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Source", "Ratio", "Requested", "Drawn", "Shortfall"]);
                for source in &stats.sources {
                    builder.push_record([
                        source.name.clone(),
                        format!("{:.3}", source.ratio),
                        source.requested.to_string(),
                        source.drawn.to_string(),
                        source.shortfall.to_string(),
                    ]);
                }

                let mut out = vec![
                    self.success(&format!(
                        "Composed {} of {} examples (seed {}, {} padded)",
                        stats.final_size, stats.target_size, stats.seed, stats.padded
                    )),
                    render(builder),
                ];

                let mut categories = Builder::default();
                categories.push_record(["Category", "Examples"]);
                for (category, count) in &stats.category_counts {
                    categories.push_record([category.clone(), count.to_string()]);
                }
                out.push(render(categories));

                for warning in stats.warnings() {
                    out.push(self.warning(&warning));
                }
                Ok(out.join("\n"))
            }
        }
    }

    /// Format the outcome of an article conversion.
    pub fn article_conversion(
        &self,
        converted: usize,
        total: usize,
        skipped: &[(usize, String)],
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                "total": total,
                "converted": converted,
                "skipped": skipped
                    .iter()
                    .map(|(index, reason)| json!({ "index": index, "reason": reason }))
                    .collect::<Vec<_>>(),
            }))?),
            OutputFormat::Quiet => Ok(converted.to_string()),
            OutputFormat::Table => {
                let mut out = vec![self.success(&format!(
                    "Converted {} of {} articles",
                    converted, total
                ))];
                for (index, reason) in skipped {
                    out.push(self.warning(&format!("article {}: {}", index, reason)));
                }
                Ok(out.join("\n"))
            }
        }
    }

    /// Format a classification result.
    pub fn classification(
        &self,
        topic: Topic,
        rule: Option<&TopicRule>,
        resources: &ResourceSet,
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                "topic": topic,
                "matched_keywords": rule.map(|r| r.keywords.clone()),
                "title": resources.title,
                "urls": resources.urls,
            }))?),
            OutputFormat::Quiet => Ok(topic.to_string()),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Topic", "Rule", "Title", "URLs"]);
                builder.push_record([
                    self.colorize(topic.as_str(), "cyan"),
                    rule.map(|r| format!("#{}", r.priority))
                        .unwrap_or_else(|| "fallback".to_string()),
                    resources.title.clone(),
                    resources.urls.join("\n"),
                ]);
                Ok(render(builder))
            }
        }
    }

    /// Format the topic taxonomy.
    pub fn topics(&self, rules: &[TopicRule], resolver: &ResourceResolver) -> Result<String> {
        let mut rows: Vec<(Option<u32>, Topic, Vec<String>)> = rules
            .iter()
            .map(|r| (Some(r.priority), r.topic, r.keywords.clone()))
            .collect();
        for topic in Topic::ALL {
            if !rules.iter().any(|r| r.topic == topic) {
                rows.push((None, topic, Vec::new()));
            }
        }

        match self.format {
            OutputFormat::Json => {
                let entries: Vec<_> = rows
                    .iter()
                    .map(|(priority, topic, keywords)| {
                        let set = resolver.resolve(*topic);
                        json!({
                            "priority": priority,
                            "topic": topic,
                            "keywords": keywords,
                            "title": set.title,
                            "urls": set.urls,
                            "dedicated": resolver.has_dedicated(*topic),
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&entries)?)
            }
            OutputFormat::Quiet => Ok(rows
                .iter()
                .map(|(_, topic, _)| topic.to_string())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Priority", "Topic", "Keywords", "Primary URL"]);
                for (priority, topic, keywords) in &rows {
                    builder.push_record([
                        priority.map(|p| p.to_string()).unwrap_or_else(|| "-".to_string()),
                        topic.to_string(),
                        keywords.join(", "),
                        resolver.resolve(*topic).primary_url().to_string(),
                    ]);
                }
                Ok(render(builder))
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

fn render(builder: Builder) -> String {
    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use primer_composer::SourceStats;
    use primer_domain::{default_rules, TopicClassifier};

    fn stats() -> CompositionStats {
        CompositionStats {
            target_size: 10,
            seed: 42,
            sources: vec![SourceStats {
                name: "curated".to_string(),
                ratio: 1.0,
                requested: 10,
                drawn: 8,
                shortfall: 2,
            }],
            padded: 2,
            residual_shortfall: 0,
            final_size: 10,
            category_counts: BTreeMap::from([("general".to_string(), 10)]),
        }
    }

    #[test]
    fn test_composition_table() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.composition(&stats()).unwrap();
        assert!(output.contains("Shortfall"));
        assert!(output.contains("curated"));
        assert!(output.contains("⚠ source 'curated' supplied 8 of 10"));
    }

    #[test]
    fn test_composition_json_and_quiet() {
        let json = Formatter::new(OutputFormat::Json, false)
            .composition(&stats())
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["padded"], 2);

        let quiet = Formatter::new(OutputFormat::Quiet, false)
            .composition(&stats())
            .unwrap();
        assert_eq!(quiet, "10");
    }

    #[test]
    fn test_classification_formats() {
        let classifier = TopicClassifier::default();
        let resolver = ResourceResolver::default();
        let text = "Add each product to your catalog";
        let topic = classifier.classify(text);
        let rule = classifier.matching_rule(text);

        let quiet = Formatter::new(OutputFormat::Quiet, false)
            .classification(topic, rule, resolver.resolve(topic))
            .unwrap();
        assert_eq!(quiet, "catalog");

        let json = Formatter::new(OutputFormat::Json, false)
            .classification(topic, rule, resolver.resolve(topic))
            .unwrap();
        assert!(json.contains("\"topic\": \"catalog\""));
    }

    #[test]
    fn test_topics_lists_every_topic() {
        let output = Formatter::new(OutputFormat::Quiet, false)
            .topics(&default_rules(), &ResourceResolver::default())
            .unwrap();
        assert_eq!(output.lines().count(), Topic::ALL.len());
        assert!(output.lines().any(|l| l == "general"));
    }

    #[test]
    fn test_normalize_report_table() {
        let mut report = NormalizeReport::new();
        report.processed = 2;
        report.written = 1;
        report.record_skip(2, "messages is empty");
        let output = Formatter::new(OutputFormat::Table, false)
            .normalize_report(&report)
            .unwrap();
        assert!(output.contains("line 2: messages is empty"));
    }

    #[test]
    fn test_category_counts() {
        let counts = BTreeMap::from([("growth".to_string(), 3), ("sales".to_string(), 2)]);
        let output = Formatter::new(OutputFormat::Table, false)
            .category_counts("business_questions", &counts)
            .unwrap();
        assert!(output.contains("Generated 5 examples from business_questions"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
    }
}
