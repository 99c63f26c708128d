//! CLI command definitions and argument parsing.

use clap::{Args, Parser, Subcommand};
use primer_composer::PaddingPolicy;
use primer_normalizer::CitationStyle;
use primer_synthesizer::CuratedSet;
use std::path::PathBuf;

/// Primer - build WhatsApp Business instruction-tuning corpora.
#[derive(Debug, Parser)]
#[command(name = "primer")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "PRIMER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (bare values only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate examples from the question bank or a curated set
    Generate(GenerateArgs),

    /// Mix several sources into one corpus at target ratios
    Compose(ComposeArgs),

    /// Normalize a JSONL file into the output schema
    Normalize(NormalizeArgs),

    /// Classify text into a topic and show its references
    Classify(ClassifyArgs),

    /// List the topic taxonomy
    Topics,

    /// Convert scraped help-center articles into examples
    Articles(ArticlesArgs),

    /// Inspect or create the configuration file
    Config(ConfigArgs),
}

/// Built-in example generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum GeneratorArg {
    /// Question bank with synthesized answers
    Questions,
    /// Greetings, thanks and small talk
    General,
    /// Step-by-step feature walkthroughs
    FeatureWalkthrough,
    /// Soft business-growth answers
    BusinessGrowth,
}

impl GeneratorArg {
    /// The curated set behind this generator, if any
    pub fn curated(&self) -> Option<CuratedSet> {
        match self {
            GeneratorArg::Questions => None,
            GeneratorArg::General => Some(CuratedSet::General),
            GeneratorArg::FeatureWalkthrough => Some(CuratedSet::FeatureWalkthrough),
            GeneratorArg::BusinessGrowth => Some(CuratedSet::BusinessGrowth),
        }
    }
}

/// Arguments for the generate command.
#[derive(Debug, Parser)]
pub struct GenerateArgs {
    /// Output JSONL file
    #[arg(short, long)]
    pub output: PathBuf,

    /// Generator to run
    #[arg(short, long, value_enum, default_value = "questions")]
    pub source: GeneratorArg,

    /// Number of examples (defaults to the generator's natural size)
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Restrict the question bank to these categories
    #[arg(long, value_delimiter = ',')]
    pub categories: Vec<String>,

    /// Variations per question template
    #[arg(long)]
    pub variations: Option<usize>,

    /// Product named in synthesized answers
    #[arg(long)]
    pub product: Option<String>,

    /// System prompt prepended to every generated conversation
    #[arg(long)]
    pub system_prompt: Option<String>,
}

/// Arguments for the compose command.
#[derive(Debug, Parser)]
pub struct ComposeArgs {
    /// Output JSONL file
    #[arg(short, long)]
    pub output: PathBuf,

    /// JSONL source as NAME=PATH (the file stem names a bare PATH)
    #[arg(short, long = "input")]
    pub inputs: Vec<String>,

    /// Built-in generator source
    #[arg(short, long = "generator", value_enum)]
    pub generators: Vec<GeneratorArg>,

    /// Target proportion as NAME=VALUE
    #[arg(short, long = "ratio")]
    pub ratios: Vec<String>,

    /// Target corpus size (defaults to the combined natural size)
    #[arg(short = 'n', long)]
    pub size: Option<usize>,

    /// Random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Shortfall handling
    #[arg(long, value_enum)]
    pub padding: Option<PaddingArg>,

    /// Padding ceiling as a fraction of the target size
    #[arg(long)]
    pub max_duplicates: Option<f64>,
}

/// Padding policy argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PaddingArg {
    /// Resample with replacement up to the ceiling
    Replace,
    /// Never pad
    Off,
    /// Fail when sources fall short
    Fail,
}

/// Arguments for the normalize command.
#[derive(Debug, Parser)]
pub struct NormalizeArgs {
    /// Input JSONL file
    pub input: PathBuf,

    /// Output JSONL file
    #[arg(short, long)]
    pub output: PathBuf,

    /// Skip invalid records instead of aborting
    #[arg(long)]
    pub lenient: bool,

    /// Keep top-level fields other than messages
    #[arg(long)]
    pub keep_metadata: bool,

    /// Attach help-center references to assistant messages
    #[arg(short, long)]
    pub attach_resources: bool,

    /// Citation placement (implies --attach-resources)
    #[arg(long, value_enum)]
    pub citation_style: Option<CitationArg>,

    /// Only cite assistant messages mentioning this phrase (implies --attach-resources)
    #[arg(long)]
    pub attach_only_when: Option<String>,

    #[command(flatten)]
    pub system_prompt: SystemPromptArgs,
}

/// System prompt policy flags.
#[derive(Debug, Args)]
#[group(multiple = false)]
pub struct SystemPromptArgs {
    /// Replace the content of the leading system message
    #[arg(long)]
    pub replace_system: Option<String>,

    /// Insert a system message when a conversation has none
    #[arg(long)]
    pub ensure_system: Option<String>,

    /// Remove system messages
    #[arg(long)]
    pub drop_system: bool,

    /// Insert the default assistant prompt when a conversation has none
    #[arg(long)]
    pub default_system: bool,
}

/// Citation style argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CitationArg {
    /// `help_center_urls` and `topic` fields
    Urls,
    /// A single `help_center_url` field
    Primary,
    /// Trailing block in the content
    Inline,
}

/// Arguments for the classify command.
#[derive(Debug, Parser)]
pub struct ClassifyArgs {
    /// Text to classify
    #[arg(required = true)]
    pub text: Vec<String>,
}

/// Arguments for the articles command.
#[derive(Debug, Parser)]
pub struct ArticlesArgs {
    /// JSON array of {title, content, url}
    pub input: PathBuf,

    /// Output JSONL file
    #[arg(short, long)]
    pub output: PathBuf,

    /// System prompt for converted conversations
    #[arg(long, conflicts_with = "no_system_prompt")]
    pub system_prompt: Option<String>,

    /// Convert without a system prompt
    #[arg(long)]
    pub no_system_prompt: bool,

    /// Skip unusable articles instead of aborting
    #[arg(long)]
    pub lenient: bool,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the configuration file path
    Path,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<CitationArg> for CitationStyle {
    fn from(style: CitationArg) -> Self {
        match style {
            CitationArg::Urls => CitationStyle::MetadataUrls,
            CitationArg::Primary => CitationStyle::MetadataPrimary,
            CitationArg::Inline => CitationStyle::Inline,
        }
    }
}

impl From<PaddingArg> for PaddingPolicy {
    fn from(padding: PaddingArg) -> Self {
        match padding {
            PaddingArg::Replace => PaddingPolicy::WithReplacement,
            PaddingArg::Off => PaddingPolicy::Disabled,
            PaddingArg::Fail => PaddingPolicy::FailOnShortfall,
        }
    }
}

/// Split `NAME=VALUE`
pub fn split_pair(raw: &str) -> Option<(&str, &str)> {
    let (name, value) = raw.split_once('=')?;
    let (name, value) = (name.trim(), value.trim());
    if name.is_empty() || value.is_empty() {
        return None;
    }
    Some((name, value))
}
