//! Topics command implementation.

use crate::error::Result;
use crate::output::Formatter;
use primer_domain::{ResourceResolver, TopicClassifier};

/// Execute the topics command.
pub fn execute_topics(formatter: &Formatter) -> Result<()> {
    let classifier = TopicClassifier::default();
    let resolver = ResourceResolver::default();
    println!("{}", formatter.topics(classifier.rules(), &resolver)?);
    Ok(())
}
