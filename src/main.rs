// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{info, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;

use word_collector::app_config::{self, Config};
use word_collector::app_controller::{open_repository, Controller};
use word_collector::ranking::{TopWordsRanker, DEFAULT_LIMIT};
use word_collector::day;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Harvest today's articles, translate new words and write the report (default command)
    Run(RunArgs),

    /// Print the top words of a day from the word store
    Top(TopArgs),

    /// Print word store statistics
    Stats,

    /// Generate shell completions for word-collector
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug, Default)]
struct RunArgs {
    /// Dictionary API key (overrides the configuration)
    #[arg(long, env = "YANDEX_DICTIONARY_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// RSS feed to harvest (overrides the configuration)
    #[arg(long)]
    feed_url: Option<String>,

    /// Report output file (overrides the configuration)
    #[arg(short, long)]
    output: Option<String>,
}

#[derive(Parser, Debug)]
struct TopArgs {
    /// Day to rank (YYYY-MM-DD), today by default
    #[arg(short, long)]
    date: Option<String>,

    /// Grammatical category to keep (e.g. 'noun'), the configured one by default
    #[arg(long, conflicts_with = "all")]
    category: Option<String>,

    /// Rank words of every category
    #[arg(short, long)]
    all: bool,

    /// Number of words to print
    #[arg(short = 'n', long, default_value_t = DEFAULT_LIMIT)]
    limit: usize,
}

/// word-collector - daily vocabulary from the news
///
/// Harvests the articles of an RSS feed, counts their words, translates the
/// most frequent ones once and ranks them per day.
#[derive(Parser, Debug)]
#[command(name = "word-collector")]
#[command(version)]
#[command(about = "Daily vocabulary from news articles")]
#[command(long_about = "word-collector harvests news articles, counts their words and keeps dictionary translations of the most frequent ones.

EXAMPLES:
    word-collector                              # Harvest today's articles using conf.json
    word-collector run --api-key KEY            # Harvest with an explicit dictionary key
    word-collector top                          # Today's top nouns from the store
    word-collector top -d 2024-05-01 --all -n 20
    word-collector stats                        # Word store statistics
    word-collector completions bash > word-collector.bash

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default one
    will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json", global = true)]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum, global = true)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Emoji and ANSI color for log level
    fn decoration_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("❌ ", "1;31"),
            Level::Warn => ("🚧 ", "1;33"),
            Level::Info => (" ", "1;32"),
            Level::Debug => ("🔍 ", "1;36"),
            Level::Trace => ("📋 ", "1;35"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (emoji, color) = Self::decoration_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {} {}\x1B[0m",
                color, now, emoji, record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // The logger accepts everything; the effective level is set through max_level
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    if let Some(Commands::Completions { shell }) = &cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(*shell, &mut cmd, "word-collector", &mut std::io::stdout());
        return Ok(());
    }

    let mut config = Config::load_or_create(&cli.config_path)
        .with_context(|| format!("Failed to load configuration from {}", cli.config_path))?;

    // Command line log level wins over the configured one
    if let Some(log_level) = cli.log_level.clone() {
        config.log_level = log_level.into();
    }
    log::set_max_level(config.log_level.to_level_filter());

    match cli.command {
        Some(Commands::Run(args)) => run_harvest(config, args).await,
        None => run_harvest(config, RunArgs::default()).await,
        Some(Commands::Top(args)) => print_top(&config, args).await,
        Some(Commands::Stats) => print_stats(&config).await,
        Some(Commands::Completions { .. }) => Ok(()),
    }
}

async fn run_harvest(mut config: Config, args: RunArgs) -> Result<()> {
    if let Some(api_key) = args.api_key {
        config.dictionary.api_key = api_key;
    }
    if let Some(feed_url) = args.feed_url {
        config.feed.url = feed_url;
    }
    if let Some(output) = args.output {
        config.report.output_path = output;
    }

    config.validate().context("Configuration validation failed")?;

    let controller = Controller::with_config(config)?;
    let report_path = controller.run().await?;

    info!("Success: {:?}", report_path);
    Ok(())
}

async fn print_top(config: &Config, args: TopArgs) -> Result<()> {
    let date = match args.date {
        Some(date) => day::parse_day(&date)?,
        None => day::today(),
    };
    let category = if args.all {
        None
    } else {
        args.category.as_deref().or_else(|| config.report_category())
    };

    let ranker = TopWordsRanker::new(open_repository(config)?);
    let top = ranker.top_words(&date, category, args.limit).await?;

    if top.is_empty() {
        println!("No translated words recorded for {}", date);
        return Ok(());
    }

    for (rank, entry) in top.iter().enumerate() {
        let senses = entry
            .translation
            .translations
            .iter()
            .map(|sense| sense.text.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        println!(
            "{:>3}. {} ({}) x{}: {}",
            rank + 1,
            entry.translation.original,
            entry.category().unwrap_or("-"),
            entry.count,
            senses
        );
    }

    Ok(())
}

async fn print_stats(config: &Config) -> Result<()> {
    let repository = open_repository(config)?;

    println!("Store: {:?}", repository.connection().path());
    println!("{}", repository.stats().await?);

    let days = repository.known_days().await?;
    if let (Some(first), Some(last)) = (days.first(), days.last()) {
        println!("Days: {} .. {}", first, last);
    }

    Ok(())
}
