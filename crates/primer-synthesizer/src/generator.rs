//! Question generator - pairs bank questions with synthesized answers

use crate::config::SynthesizerConfig;
use crate::error::SynthesizerError;
use crate::questions::{fill, has_placeholder, templates_for, BUSINESS_TYPES};
use crate::synthesizer::Synthesizer;
use crate::template::TemplateRegistry;
use primer_domain::{ExampleGenerator, QuestionCategory, TaggedExample, TrainingExample};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::info;

/// Source name used when the generator is handed to the composer
pub const QUESTION_SOURCE_NAME: &str = "business_questions";

/// Generates question/answer examples tagged with their question category
///
/// Examples are produced round-robin across the selected categories so that
/// any prefix of the output is spread evenly over them. Asking for more than
/// [`ExampleGenerator::natural_size`] cycles the bank again with fresh
/// business types and feature draws.
#[derive(Debug, Clone)]
pub struct QuestionGenerator {
    name: String,
    synthesizer: Synthesizer,
    categories: Vec<QuestionCategory>,
    variations_per_template: usize,
    system_prompt: Option<String>,
}

impl QuestionGenerator {
    /// Create a generator over every category with builtin templates
    pub fn new(config: &SynthesizerConfig) -> Result<Self, SynthesizerError> {
        Self::with_registry(config, TemplateRegistry::builtin()?)
    }

    /// Create a generator over custom templates
    pub fn with_registry(
        config: &SynthesizerConfig,
        registry: TemplateRegistry,
    ) -> Result<Self, SynthesizerError> {
        config.validate().map_err(SynthesizerError::Config)?;
        Ok(Self {
            name: QUESTION_SOURCE_NAME.to_string(),
            synthesizer: Synthesizer::new(registry, config.product_name.clone()),
            categories: QuestionCategory::ALL.to_vec(),
            variations_per_template: config.variations_per_template,
            system_prompt: config.system_prompt.clone(),
        })
    }

    /// Restrict generation to a subset of categories
    pub fn with_categories(
        mut self,
        categories: Vec<QuestionCategory>,
    ) -> Result<Self, SynthesizerError> {
        if categories.is_empty() {
            return Err(SynthesizerError::Config(
                "at least one question category is required".to_string(),
            ));
        }
        for category in &categories {
            self.synthesizer.registry().get(category.family())?;
        }
        self.categories = categories;
        Ok(self)
    }

    /// Rename the source
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Categories in generation order
    pub fn categories(&self) -> &[QuestionCategory] {
        &self.categories
    }

    /// Generate the full bank once
    pub fn generate_all(&self, seed: u64) -> Result<Vec<TaggedExample>, SynthesizerError> {
        self.generate_examples(self.natural_size(), seed)
    }

    /// Generate `count` examples
    pub fn generate_examples(
        &self,
        count: usize,
        seed: u64,
    ) -> Result<Vec<TaggedExample>, SynthesizerError> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut examples = Vec::with_capacity(count);
        for index in 0..count {
            examples.push(self.example_at(index, &mut rng)?);
        }
        info!(
            "Generated {} question examples across {} categories",
            examples.len(),
            self.categories.len()
        );
        Ok(examples)
    }

    fn example_at<R: Rng>(
        &self,
        index: usize,
        rng: &mut R,
    ) -> Result<TaggedExample, SynthesizerError> {
        let category = self.categories[index % self.categories.len()];
        let round = index / self.categories.len();
        let templates = templates_for(category);
        let template = templates[round % templates.len()];

        let question = if has_placeholder(template) {
            let business_type = BUSINESS_TYPES.choose(rng).copied().unwrap_or("business");
            fill(template, business_type)
        } else {
            template.to_string()
        };
        let answer = self.synthesizer.synthesize_with(category, rng)?;

        let example = match &self.system_prompt {
            Some(prompt) => TrainingExample::with_system(prompt.clone(), question, answer),
            None => TrainingExample::pair(question, answer),
        }
        .map_err(SynthesizerError::InvalidExample)?;

        Ok(TaggedExample::new(example, category.as_str()))
    }
}

impl ExampleGenerator for QuestionGenerator {
    fn name(&self) -> &str {
        &self.name
    }

    fn natural_size(&self) -> usize {
        self.categories
            .iter()
            .map(|c| templates_for(*c).len() * self.variations_per_template)
            .sum()
    }

    fn generate(&self, count: usize, seed: u64) -> Result<Vec<TaggedExample>, String> {
        self.generate_examples(count, seed).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn generator() -> QuestionGenerator {
        QuestionGenerator::new(&SynthesizerConfig::default()).unwrap()
    }

    #[test]
    fn test_natural_size_matches_bank() {
        // 23 categories x 10 templates x 5 variations
        assert_eq!(generator().natural_size(), 1150);
    }

    #[test]
    fn test_exact_count_and_tags() {
        let examples = generator().generate(46, 1).unwrap();
        assert_eq!(examples.len(), 46);

        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for tagged in &examples {
            *counts.entry(tagged.category.as_str()).or_insert(0) += 1;
        }
        assert_eq!(counts.len(), 23);
        assert!(counts.values().all(|&n| n == 2));
    }

    #[test]
    fn test_placeholders_are_filled() {
        for tagged in generator().generate(230, 5).unwrap() {
            let question = tagged.example.first_user().unwrap();
            assert!(!question.contains("{business_type}"), "{}", question);
        }
    }

    #[test]
    fn test_answers_follow_category_family() {
        let examples = generator()
            .with_categories(vec![QuestionCategory::Payments])
            .unwrap()
            .generate(3, 2)
            .unwrap();
        for tagged in examples {
            assert_eq!(tagged.category, "payments");
            let answer = tagged.example.first_assistant().unwrap();
            assert!(answer.starts_with("Here's how to increase sales"));
        }
    }

    #[test]
    fn test_same_seed_same_output() {
        let a = generator().generate(20, 11).unwrap();
        let b = generator().generate(20, 11).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_cycles_beyond_natural_size() {
        let config = SynthesizerConfig {
            variations_per_template: 1,
            ..Default::default()
        };
        let generator = QuestionGenerator::new(&config)
            .unwrap()
            .with_categories(vec![QuestionCategory::Sales])
            .unwrap();
        assert_eq!(generator.natural_size(), 10);
        let examples = generator.generate(25, 0).unwrap();
        assert_eq!(examples.len(), 25);
        assert_eq!(
            examples[0].example.first_user(),
            examples[10].example.first_user()
        );
    }

    #[test]
    fn test_system_prompt_is_prepended() {
        let config = SynthesizerConfig::default().with_system_prompt("You help businesses.");
        let examples = QuestionGenerator::new(&config).unwrap().generate(2, 0).unwrap();
        for tagged in examples {
            assert_eq!(tagged.example.system_prompt(), Some("You help businesses."));
        }
    }

    #[test]
    fn test_empty_category_list_rejected() {
        assert!(generator().with_categories(Vec::new()).is_err());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = SynthesizerConfig {
            variations_per_template: 0,
            ..Default::default()
        };
        assert!(matches!(
            QuestionGenerator::new(&config),
            Err(SynthesizerError::Config(_))
        ));
    }
}
