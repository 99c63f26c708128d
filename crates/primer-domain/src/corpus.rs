//! Corpus module - the assembled sequence of examples

use crate::example::{TaggedExample, TrainingExample};
use std::collections::BTreeMap;

/// The full, ordered set of examples ready for normalization
///
/// `category_counts` is derived from the example tags whenever the corpus is
/// built, so `sum(category_counts) == examples.len()` always holds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Corpus {
    examples: Vec<TaggedExample>,
    category_counts: BTreeMap<String, usize>,
}

impl Corpus {
    /// Build a corpus, tallying categories from the tags
    pub fn from_examples(examples: Vec<TaggedExample>) -> Self {
        let category_counts = tally(&examples);
        Self {
            examples,
            category_counts,
        }
    }

    /// Examples in corpus order
    pub fn examples(&self) -> &[TaggedExample] {
        &self.examples
    }

    /// Number of examples per originating category
    pub fn category_counts(&self) -> &BTreeMap<String, usize> {
        &self.category_counts
    }

    /// Count for one category (zero when absent)
    pub fn count_for(&self, category: &str) -> usize {
        self.category_counts.get(category).copied().unwrap_or(0)
    }

    /// Number of examples
    pub fn len(&self) -> usize {
        self.examples.len()
    }

    /// Whether the corpus is empty
    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    /// Drop the category tags, keeping corpus order
    pub fn into_examples(self) -> Vec<TrainingExample> {
        self.examples.into_iter().map(|t| t.example).collect()
    }

    /// Consume the corpus, keeping the tags
    pub fn into_tagged(self) -> Vec<TaggedExample> {
        self.examples
    }
}

fn tally(examples: &[TaggedExample]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for tagged in examples {
        *counts.entry(tagged.category.clone()).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagged(category: &str) -> TaggedExample {
        TaggedExample::new(TrainingExample::pair("Q", "A").unwrap(), category)
    }

    #[test]
    fn test_counts_match_length() {
        let corpus = Corpus::from_examples(vec![
            tagged("growth"),
            tagged("sales"),
            tagged("growth"),
        ]);
        assert_eq!(corpus.len(), 3);
        assert_eq!(corpus.count_for("growth"), 2);
        assert_eq!(corpus.count_for("sales"), 1);
        assert_eq!(corpus.count_for("pricing"), 0);
        assert_eq!(corpus.category_counts().values().sum::<usize>(), corpus.len());
    }

    #[test]
    fn test_empty_corpus() {
        let corpus = Corpus::from_examples(Vec::new());
        assert!(corpus.is_empty());
        assert!(corpus.category_counts().is_empty());
    }

    #[test]
    fn test_into_examples_preserves_order() {
        let first = TaggedExample::new(TrainingExample::pair("1", "a").unwrap(), "x");
        let second = TaggedExample::new(TrainingExample::pair("2", "b").unwrap(), "y");
        let corpus = Corpus::from_examples(vec![first, second]);
        let examples = corpus.into_examples();
        assert_eq!(examples[0].first_user(), Some("1"));
        assert_eq!(examples[1].first_user(), Some("2"));
    }
}
