//! Classify command implementation.

use crate::cli::ClassifyArgs;
use crate::error::Result;
use crate::output::Formatter;
use primer_domain::{ResourceResolver, TopicClassifier};
use tracing::debug;

/// Execute the classify command.
pub fn execute_classify(args: ClassifyArgs, formatter: &Formatter) -> Result<()> {
    let text = args.text.join(" ");
    let classifier = TopicClassifier::default();
    let resolver = ResourceResolver::default();

    let topic = classifier.classify(&text);
    let rule = classifier.matching_rule(&text);
    debug!("Classified {} characters as {}", text.len(), topic);

    println!(
        "{}",
        formatter.classification(topic, rule, resolver.resolve(topic))?
    );
    Ok(())
}
