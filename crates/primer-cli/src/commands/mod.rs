//! Command implementations.

pub mod articles;
pub mod classify;
pub mod compose;
pub mod config;
pub mod generate;
pub mod normalize;
pub mod topics;

pub use self::articles::execute_articles;
pub use self::classify::execute_classify;
pub use self::compose::execute_compose;
pub use self::config::execute_config;
pub use self::generate::execute_generate;
pub use self::normalize::execute_normalize;
pub use self::topics::execute_topics;

use crate::cli::GeneratorArg;
use crate::error::{CliError, Result};
use primer_composer::Source;
use primer_domain::QuestionCategory;
use primer_synthesizer::{CuratedSource, QuestionGenerator, SynthesizerConfig};

/// Parse question category names.
pub fn parse_categories(names: &[String]) -> Result<Vec<QuestionCategory>> {
    names
        .iter()
        .map(|name| {
            QuestionCategory::parse(name.trim())
                .ok_or_else(|| CliError::InvalidInput(format!("Unknown category '{}'", name)))
        })
        .collect()
}

/// Build the question generator, optionally limited to some categories.
pub fn question_generator(
    config: &SynthesizerConfig,
    categories: Vec<QuestionCategory>,
) -> Result<QuestionGenerator> {
    let generator = QuestionGenerator::new(config)?;
    if categories.is_empty() {
        Ok(generator)
    } else {
        Ok(generator.with_categories(categories)?)
    }
}

/// Composer source for a built-in generator.
pub fn generator_source(arg: GeneratorArg, config: &SynthesizerConfig) -> Result<Source> {
    match arg.curated() {
        Some(set) => Ok(Source::generator(CuratedSource::new(set))),
        None => Ok(Source::generator(question_generator(config, Vec::new())?)),
    }
}
