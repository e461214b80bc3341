//! Command line argument parsing for lexsieve CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::cleaner::FilterConfiguration;
use crate::error::Result;

/// lexsieve - A configurable token filter for cleaning text documents
#[derive(Parser, Debug, Clone)]
#[command(name = "lexsieve")]
#[command(about = "A configurable token filter for cleaning text documents")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "lexsieve Contributors")]
#[command(long_about = None)]
pub struct LexsieveArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LexsieveArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// Default log filter directive for the effective verbosity.
    pub fn log_filter(&self) -> &'static str {
        match self.verbosity() {
            0 => "error",
            1 => "warn",
            2 => "info",
            _ => "debug",
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Clean documents, one per input line
    Clean(CleanArgs),

    /// Show the decision taken for every token of a text
    Explain(ExplainArgs),

    /// Print the effective filter configuration as JSON
    Config(ConfigArgs),
}

/// Options that build a filter configuration.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterOptions {
    /// Filter configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Emit surface forms instead of lemmas
    #[arg(long)]
    pub no_lemmatize: bool,

    /// Keep the original case of tokens
    #[arg(long)]
    pub no_lowercase: bool,

    /// Token to always drop (repeatable, replaces the configured list)
    #[arg(long = "blacklist", value_name = "TOKEN")]
    pub blacklist: Vec<String>,

    /// Language code to keep (repeatable, replaces the configured list)
    #[arg(long = "whitelist", value_name = "LANG")]
    pub whitelist: Vec<String>,

    /// Also drop positive and negative sentiment words
    #[arg(long)]
    pub filter_sentiment: bool,

    /// Positive sentiment word list
    #[arg(long, value_name = "FILE")]
    pub positive_words: Option<PathBuf>,

    /// Negative sentiment word list
    #[arg(long, value_name = "FILE")]
    pub negative_words: Option<PathBuf>,

    /// Documents per tokenization batch
    #[arg(long)]
    pub batch_size: Option<usize>,

    /// Tokenization threads (default: number of CPUs)
    #[arg(short = 't', long)]
    pub threads: Option<usize>,
}

impl FilterOptions {
    /// Resolve the configuration: file (or defaults), then command line
    /// overrides.
    pub fn resolve(&self) -> Result<FilterConfiguration> {
        let mut config = match &self.config {
            Some(path) => FilterConfiguration::from_json_file(path)?,
            None => FilterConfiguration::default(),
        };

        if self.no_lemmatize {
            config.lemmatize = false;
        }
        if self.no_lowercase {
            config.lowercase = false;
        }
        if !self.blacklist.is_empty() {
            config.token_blacklist = self.blacklist.clone();
        }
        if !self.whitelist.is_empty() {
            config.language_whitelist = self.whitelist.clone();
        }
        if self.filter_sentiment {
            config.filter_sentiment_words = true;
        }
        if let Some(path) = &self.positive_words {
            config.positive_words_path = path.clone();
        }
        if let Some(path) = &self.negative_words {
            config.negative_words_path = path.clone();
        }
        if let Some(batch_size) = self.batch_size {
            config.batch.batch_size = batch_size;
        }
        if let Some(threads) = self.threads {
            config.batch.num_threads = Some(threads);
        }

        Ok(config)
    }
}

/// Arguments for cleaning documents
#[derive(Parser, Debug, Clone)]
pub struct CleanArgs {
    /// Input file with one document per line (default: stdin)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Print cleaning statistics to stderr
    #[arg(long)]
    pub stats: bool,

    #[command(flatten)]
    pub filter: FilterOptions,
}

/// Arguments for explaining token decisions
#[derive(Parser, Debug, Clone)]
pub struct ExplainArgs {
    /// Text to analyze
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Only show dropped tokens
    #[arg(long)]
    pub dropped_only: bool,

    #[command(flatten)]
    pub filter: FilterOptions,
}

/// Arguments for printing the configuration
#[derive(Parser, Debug, Clone)]
pub struct ConfigArgs {
    #[command(flatten)]
    pub filter: FilterOptions,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
    /// Tab-separated output
    Tsv,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_clean_command() {
        let args = LexsieveArgs::try_parse_from([
            "lexsieve",
            "clean",
            "tweets.txt",
            "--output",
            "cleaned.txt",
            "--no-lemmatize",
            "--blacklist",
            "rt",
            "--blacklist",
            "via",
            "--threads",
            "4",
        ])
        .unwrap();

        if let Command::Clean(clean_args) = args.command {
            assert_eq!(clean_args.input, Some(PathBuf::from("tweets.txt")));
            assert_eq!(clean_args.output, Some(PathBuf::from("cleaned.txt")));
            assert!(clean_args.filter.no_lemmatize);
            assert_eq!(clean_args.filter.blacklist, vec!["rt", "via"]);
            assert_eq!(clean_args.filter.threads, Some(4));
        } else {
            panic!("Expected Clean command");
        }
    }

    #[test]
    fn test_clean_reads_stdin_by_default() {
        let args = LexsieveArgs::try_parse_from(["lexsieve", "clean"]).unwrap();

        if let Command::Clean(clean_args) = args.command {
            assert!(clean_args.input.is_none());
            assert!(clean_args.output.is_none());
        } else {
            panic!("Expected Clean command");
        }
    }

    #[test]
    fn test_explain_command() {
        let args = LexsieveArgs::try_parse_from([
            "lexsieve",
            "explain",
            "RT this post",
            "--dropped-only",
            "--format",
            "tsv",
        ])
        .unwrap();

        assert_eq!(args.output_format, OutputFormat::Tsv);
        if let Command::Explain(explain_args) = args.command {
            assert_eq!(explain_args.text, "RT this post");
            assert!(explain_args.dropped_only);
        } else {
            panic!("Expected Explain command");
        }
    }

    #[test]
    fn test_verbosity_levels() {
        // Default verbosity
        let args = LexsieveArgs::try_parse_from(["lexsieve", "config"]).unwrap();
        assert_eq!(args.verbosity(), 1);
        assert_eq!(args.log_filter(), "warn");

        // Multiple verbose flags
        let args = LexsieveArgs::try_parse_from(["lexsieve", "-vv", "config"]).unwrap();
        assert_eq!(args.verbosity(), 2);
        assert_eq!(args.log_filter(), "info");

        let args = LexsieveArgs::try_parse_from(["lexsieve", "-vvv", "config"]).unwrap();
        assert_eq!(args.log_filter(), "debug");

        // Quiet flag
        let args = LexsieveArgs::try_parse_from(["lexsieve", "config", "--quiet"]).unwrap();
        assert_eq!(args.verbosity(), 0);
        assert_eq!(args.log_filter(), "error");
    }

    #[test]
    fn test_resolve_overrides() {
        let options = FilterOptions {
            no_lowercase: true,
            whitelist: vec!["de".to_string()],
            filter_sentiment: true,
            positive_words: Some(PathBuf::from("pos.txt")),
            batch_size: Some(64),
            ..Default::default()
        };
        let config = options.resolve().unwrap();

        assert!(!config.lowercase);
        assert!(config.lemmatize);
        assert_eq!(config.language_whitelist, vec!["de"]);
        assert_eq!(config.token_blacklist, vec!["rt", "oc"]);
        assert!(config.filter_sentiment_words);
        assert_eq!(config.positive_words_path, PathBuf::from("pos.txt"));
        assert_eq!(config.batch.batch_size, 64);
    }

    #[test]
    fn test_resolve_missing_config_file() {
        let options = FilterOptions {
            config: Some(PathBuf::from("/nonexistent/lexsieve.json")),
            ..Default::default()
        };
        assert!(options.resolve().is_err());
    }
}
