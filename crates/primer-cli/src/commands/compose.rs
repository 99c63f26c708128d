//! Compose command implementation.

use super::generator_source;
use crate::cli::{split_pair, ComposeArgs};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::io::{create_output, read_tagged, write_tagged};
use crate::output::Formatter;
use primer_composer::{Composer, ComposerConfig, Composition, PaddingPolicy, Source};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::info;

/// Execute the compose command.
pub fn execute_compose(args: ComposeArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let composition = compose(&args, config)?;
    let written = write_tagged(
        create_output(&args.output)?,
        composition.corpus.examples(),
        None,
    )?;
    info!("Wrote {} examples to {}", written, args.output.display());

    println!("{}", formatter.composition(&composition.stats)?);
    Ok(())
}

/// Load the sources and compose them.
pub fn compose(args: &ComposeArgs, config: &Config) -> Result<Composition> {
    let mut sources = Vec::with_capacity(args.inputs.len() + args.generators.len());

    for raw in &args.inputs {
        let (name, path) = input_source(raw)?;
        let examples = read_tagged(&path, &name)?;
        info!("Loaded {} examples from {}", examples.len(), path.display());
        sources.push(Source::examples(name, examples));
    }
    for generator in &args.generators {
        sources.push(generator_source(*generator, &config.synthesizer)?);
    }
    if sources.is_empty() {
        return Err(CliError::InvalidInput(
            "at least one --input or --generator is required".to_string(),
        ));
    }

    let ratios = parse_ratios(&args.ratios)?;
    let composer = Composer::new(composer_config(args, &config.composer))?;
    Ok(composer.compose(sources, &ratios, args.size)?)
}

/// Apply command-line overrides to the configured composer settings.
pub fn composer_config(args: &ComposeArgs, base: &ComposerConfig) -> ComposerConfig {
    let mut config = base.clone();
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }

    if let Some(padding) = args.padding {
        config.padding = padding.into();
    }
    if let Some(fraction) = args.max_duplicates {
        config.max_duplicate_fraction = fraction;
        if args.padding.is_none() {
            config.padding = PaddingPolicy::WithReplacement;
        }
    }
    config
}

/// Parse `NAME=VALUE` ratio arguments.
pub fn parse_ratios(raw: &[String]) -> Result<BTreeMap<String, f64>> {
    let mut ratios = BTreeMap::new();
    for entry in raw {
        let (name, value) = split_pair(entry)
            .ok_or_else(|| CliError::InvalidInput(format!("Expected NAME=VALUE, got '{}'", entry)))?;
        let value: f64 = value
            .parse()
            .map_err(|_| CliError::InvalidInput(format!("Invalid ratio '{}' for '{}'", value, name)))?;
        if ratios.insert(name.to_string(), value).is_some() {
            return Err(CliError::InvalidInput(format!("Ratio for '{}' given twice", name)));
        }
    }
    Ok(ratios)
}

fn input_source(raw: &str) -> Result<(String, PathBuf)> {
    if let Some((name, path)) = split_pair(raw) {
        return Ok((name.to_string(), PathBuf::from(path)));
    }
    let path = PathBuf::from(raw);
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .map(str::to_string)
        .ok_or_else(|| CliError::InvalidInput(format!("Cannot derive a source name from '{}'", raw)))?;
    Ok((name, path))
}
