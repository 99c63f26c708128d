//! Normalize command implementation.

use crate::cli::NormalizeArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::io::{open_input, write_atomic};
use crate::output::Formatter;
use primer_normalizer::{
    NormalizeConfig, NormalizeReport, Normalizer, SystemPromptPolicy, ValidationMode,
    ASSISTANT_SYSTEM_PROMPT,
};

/// Execute the normalize command.
pub fn execute_normalize(args: NormalizeArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let report = normalize(&args, config)?;
    println!("{}", formatter.normalize_report(&report)?);
    Ok(())
}

/// Stream the input file through the normalizer into the output file.
///
/// The output file is only created when the whole run succeeds.
pub fn normalize(args: &NormalizeArgs, config: &Config) -> Result<NormalizeReport> {
    if args.input == args.output {
        return Err(CliError::InvalidInput(
            "input and output must be different files".to_string(),
        ));
    }

    let normalizer = Normalizer::new(normalize_config(args, &config.normalizer))?;
    let reader = open_input(&args.input)?;
    write_atomic(&args.output, |writer| {
        Ok(normalizer.normalize_stream(reader, writer)?)
    })
}

/// Apply command-line overrides to the configured normalizer settings.
pub fn normalize_config(args: &NormalizeArgs, base: &NormalizeConfig) -> NormalizeConfig {
    let mut config = base.clone();
    if args.lenient {
        config.mode = ValidationMode::Lenient;
    }
    if args.keep_metadata {
        config.strip_metadata = false;
    }
    if args.attach_resources {
        config.attach_resources = true;
    }
    if let Some(style) = args.citation_style {
        config.attach_resources = true;
        config.citation_style = style.into();
    }
    if let Some(phrase) = &args.attach_only_when {
        config.attach_resources = true;
        config.attach_only_when = Some(phrase.clone());
    }

    let prompt = &args.system_prompt;
    if let Some(text) = &prompt.replace_system {
        config.system_prompt = SystemPromptPolicy::Replace(text.clone());
    } else if let Some(text) = &prompt.ensure_system {
        config.system_prompt = SystemPromptPolicy::Ensure(text.clone());
    } else if prompt.drop_system {
        config.system_prompt = SystemPromptPolicy::Drop;
    } else if prompt.default_system {
        config.system_prompt = SystemPromptPolicy::Ensure(ASSISTANT_SYSTEM_PROMPT.to_string());
    }
    config
}
