//! Statistics returned alongside a composed corpus

use serde::Serialize;
use std::collections::BTreeMap;

/// What one source contributed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceStats {
    /// Source name
    pub name: String,

    /// Normalized share of the target size
    pub ratio: f64,

    /// Quota apportioned to the source
    pub requested: usize,

    /// Examples actually drawn
    pub drawn: usize,

    /// `requested - drawn`
    pub shortfall: usize,
}

/// Summary of one composition run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CompositionStats {
    /// Requested corpus size
    pub target_size: usize,

    /// Seed that drove sampling, shuffling and padding
    pub seed: u64,

    /// Per-source contributions, in source order
    pub sources: Vec<SourceStats>,

    /// Duplicates added by padding
    pub padded: usize,

    /// Examples still missing after padding
    pub residual_shortfall: usize,

    /// Final corpus size
    pub final_size: usize,

    /// Examples per originating category
    pub category_counts: BTreeMap<String, usize>,
}

impl CompositionStats {
    /// Shortfall summed over all sources, before padding
    pub fn total_shortfall(&self) -> usize {
        self.sources.iter().map(|s| s.shortfall).sum()
    }

    /// Examples drawn from sources, before padding
    pub fn total_drawn(&self) -> usize {
        self.sources.iter().map(|s| s.drawn).sum()
    }

    /// Human-readable warnings for undersupplied sources and unfilled gaps
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings: Vec<String> = self
            .sources
            .iter()
            .filter(|s| s.shortfall > 0)
            .map(|s| {
                format!(
                    "source '{}' supplied {} of {} requested examples",
                    s.name, s.drawn, s.requested
                )
            })
            .collect();
        if self.residual_shortfall > 0 {
            warnings.push(format!(
                "corpus is {} examples short of the target size {}",
                self.residual_shortfall, self.target_size
            ));
        }
        warnings
    }

    /// Generate a summary report
    pub fn summary(&self) -> String {
        let mut lines = vec![
            "Composition Summary".to_string(),
            "===================".to_string(),
            format!("Target size: {}", self.target_size),
            format!("Final size: {}", self.final_size),
            format!("Seed: {}", self.seed),
            format!("Padded duplicates: {}", self.padded),
        ];

        if self.residual_shortfall > 0 {
            lines.push(format!("Residual shortfall: {}", self.residual_shortfall));
        }

        lines.push(String::new());
        lines.push("Sources:".to_string());
        for source in &self.sources {
            let mut line = format!(
                "  {}: {}/{} ({:.1}%)",
                source.name,
                source.drawn,
                source.requested,
                source.ratio * 100.0
            );
            if source.shortfall > 0 {
                line.push_str(&format!(", short {}", source.shortfall));
            }
            lines.push(line);
        }

        if !self.category_counts.is_empty() {
            lines.push(String::new());
            lines.push("Categories:".to_string());
            for (category, count) in &self.category_counts {
                lines.push(format!("  {}: {}", category, count));
            }
        }

        lines.join("\n")
    }
}
