//! Primer CLI - build WhatsApp Business instruction-tuning corpora.

use clap::Parser;
use primer_cli::commands;
use primer_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr so JSONL and report output on stdout stay clean.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> primer_cli::Result<()> {
    // Load config file (or defaults)
    let config = Config::load(cli.config.as_deref())?;

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Generate(args) => commands::execute_generate(args, &config, &formatter)?,
        Command::Compose(args) => commands::execute_compose(args, &config, &formatter)?,
        Command::Normalize(args) => commands::execute_normalize(args, &config, &formatter)?,
        Command::Classify(args) => commands::execute_classify(args, &formatter)?,
        Command::Topics => commands::execute_topics(&formatter)?,
        Command::Articles(args) => commands::execute_articles(args, &formatter)?,
        Command::Config(args) => {
            commands::execute_config(args, &config, cli.config.as_deref(), format, &formatter)?
        }
    }

    Ok(())
}
