//! Generate command implementation.

use super::{parse_categories, question_generator};
use crate::cli::GenerateArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::io::{create_output, write_tagged};
use crate::output::Formatter;
use primer_domain::{Corpus, ExampleGenerator, TaggedExample};
use primer_synthesizer::CuratedSource;
use tracing::{info, warn};

/// Execute the generate command.
pub fn execute_generate(args: GenerateArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let (source, examples) = generate(&args, config)?;
    let written = write_tagged(create_output(&args.output)?, &examples, Some(&source))?;
    info!("Wrote {} examples to {}", written, args.output.display());

    let corpus = Corpus::from_examples(examples);
    println!("{}", formatter.category_counts(&source, corpus.category_counts())?);
    Ok(())
}

/// Produce the examples; returns the source name alongside them.
pub fn generate(args: &GenerateArgs, config: &Config) -> Result<(String, Vec<TaggedExample>)> {
    let seed = args.seed.or(config.composer.seed).unwrap_or_else(rand::random);

    match args.source.curated() {
        Some(set) => {
            if !args.categories.is_empty() {
                return Err(CliError::InvalidInput(
                    "--categories only applies to the question bank".to_string(),
                ));
            }
            if args.system_prompt.is_some() || args.product.is_some() || args.variations.is_some() {
                warn!("Synthesis options are ignored for curated set '{}'", set);
            }

            let source = CuratedSource::new(set);
            let count = args.count.unwrap_or_else(|| source.natural_size());
            let examples = source.generate(count, seed).map_err(CliError::Generation)?;
            Ok((source.name().to_string(), examples))
        }
        None => {
            let mut synthesizer = config.synthesizer.clone();
            if let Some(variations) = args.variations {
                synthesizer.variations_per_template = variations;
            }
            if let Some(product) = &args.product {
                synthesizer.product_name = product.clone();
            }
            if let Some(prompt) = &args.system_prompt {
                synthesizer.system_prompt = Some(prompt.clone());
            }

            let generator = question_generator(&synthesizer, parse_categories(&args.categories)?)?;
            let count = args.count.unwrap_or_else(|| generator.natural_size());
            let examples = generator.generate_examples(count, seed)?;
            Ok((generator.name().to_string(), examples))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::GeneratorArg;
    use std::path::PathBuf;

    fn args(source: GeneratorArg) -> GenerateArgs {
        GenerateArgs {
            output: PathBuf::from("unused.jsonl"),
            source,
            count: None,
            seed: Some(9),
            categories: Vec::new(),
            variations: None,
            product: None,
            system_prompt: None,
        }
    }

    #[test]
    fn test_question_bank_natural_size() {
        let mut a = args(GeneratorArg::Questions);
        a.variations = Some(1);
        let (source, examples) = generate(&a, &Config::default()).unwrap();
        assert_eq!(source, "business_questions");
        assert_eq!(examples.len(), 230);
    }

    #[test]
    fn test_categories_and_product() {
        let mut a = args(GeneratorArg::Questions);
        a.categories = vec!["pricing".to_string()];
        a.count = Some(4);
        a.product = Some("Acme Chat".to_string());
        let (_, examples) = generate(&a, &Config::default()).unwrap();
        assert_eq!(examples.len(), 4);
        assert!(examples.iter().all(|t| t.category == "pricing"));
        assert!(examples
            .iter()
            .all(|t| t.example.first_assistant().unwrap_or_default().contains("Acme Chat")));
    }

    #[test]
    fn test_curated_set() {
        let mut a = args(GeneratorArg::General);
        a.count = Some(5);
        let (source, examples) = generate(&a, &Config::default()).unwrap();
        assert_eq!(source, "general");
        assert_eq!(examples.len(), 5);
    }

    #[test]
    fn test_curated_rejects_categories() {
        let mut a = args(GeneratorArg::FeatureWalkthrough);
        a.categories = vec!["growth".to_string()];
        assert!(matches!(
            generate(&a, &Config::default()),
            Err(CliError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_seed_reproducible() {
        let mut a = args(GeneratorArg::Questions);
        a.count = Some(10);
        let first = generate(&a, &Config::default()).unwrap().1;
        let second = generate(&a, &Config::default()).unwrap().1;
        assert_eq!(first, second);
    }
}
