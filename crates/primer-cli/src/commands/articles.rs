//! Articles command implementation.

use crate::cli::ArticlesArgs;
use crate::error::Result;
use crate::io::{create_output, write_values};
use crate::output::Formatter;
use primer_normalizer::{convert_articles, parse_articles, ValidationMode, ARTICLE_SYSTEM_PROMPT};
use serde_json::Value;
use std::fs;
use tracing::info;

/// Result of converting an article file.
#[derive(Debug)]
pub struct Conversion {
    /// Intermediate JSONL records
    pub records: Vec<Value>,

    /// Articles in the input
    pub total: usize,

    /// 1-based index and reason of every skipped article
    pub skipped: Vec<(usize, String)>,
}

/// Execute the articles command.
pub fn execute_articles(args: ArticlesArgs, formatter: &Formatter) -> Result<()> {
    let conversion = convert(&args)?;
    let written = write_values(create_output(&args.output)?, &conversion.records)?;
    info!("Wrote {} article examples to {}", written, args.output.display());

    println!(
        "{}",
        formatter.article_conversion(written, conversion.total, &conversion.skipped)?
    );
    Ok(())
}

/// Read and convert the article file.
pub fn convert(args: &ArticlesArgs) -> Result<Conversion> {
    let json = fs::read_to_string(&args.input)?;
    let articles = parse_articles(&json)?;

    let prompt = if args.no_system_prompt {
        None
    } else {
        Some(args.system_prompt.as_deref().unwrap_or(ARTICLE_SYSTEM_PROMPT))
    };
    let mode = if args.lenient {
        ValidationMode::Lenient
    } else {
        ValidationMode::Strict
    };

    let (converted, skipped) = convert_articles(&articles, prompt, mode)?;
    let records = converted
        .iter()
        .map(|(example, article)| article.to_record(example))
        .collect();

    Ok(Conversion {
        records,
        total: articles.len(),
        skipped,
    })
}
