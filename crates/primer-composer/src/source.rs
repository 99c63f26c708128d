//! Composition sources

use primer_domain::{ExampleGenerator, TaggedExample};
use std::fmt;

/// A named supply of examples
pub enum Source {
    /// Pre-built examples, sampled without replacement
    Examples {
        /// Source name used in ratios and statistics
        name: String,
        /// The examples
        examples: Vec<TaggedExample>,
    },
    /// Examples produced on demand
    Generator(Box<dyn ExampleGenerator>),
}

impl Source {
    /// Source over pre-built examples
    pub fn examples(name: impl Into<String>, examples: Vec<TaggedExample>) -> Self {
        Source::Examples {
            name: name.into(),
            examples,
        }
    }

    /// Source over a generator
    pub fn generator<G: ExampleGenerator + 'static>(generator: G) -> Self {
        Source::Generator(Box::new(generator))
    }

    /// Source name
    pub fn name(&self) -> &str {
        match self {
            Source::Examples { name, .. } => name,
            Source::Generator(generator) => generator.name(),
        }
    }

    /// Distinct examples the source can supply before repeating
    pub fn natural_size(&self) -> usize {
        match self {
            Source::Examples { examples, .. } => examples.len(),
            Source::Generator(generator) => generator.natural_size(),
        }
    }
}

impl fmt::Debug for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Examples { name, examples } => f
                .debug_struct("Examples")
                .field("name", name)
                .field("len", &examples.len())
                .finish(),
            Source::Generator(generator) => f
                .debug_struct("Generator")
                .field("name", &generator.name())
                .field("natural_size", &generator.natural_size())
                .finish(),
        }
    }
}
