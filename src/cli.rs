use crate::matcher::{MatchOptions, OffsetUnit};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Cli {
    #[clap(long, global = true, value_parser, default_value_t = false)]
    pub verbose: bool,

    #[clap(long, global = true, value_parser)]
    pub log: Option<PathBuf>,

    #[clap(long, global = true, value_parser)]
    pub config: Option<PathBuf>,

    #[clap(long, global = true, value_enum)]
    pub color: Option<ColorChoice>,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the ranges of CONTENT that QUERY highlights, as JSON
    Match {
        content: String,

        query: String,

        #[clap(flatten)]
        matching: MatchArgs,

        #[clap(long, value_enum)]
        offsets: Option<OffsetUnit>,
    },
    /// Highlight QUERY in files (or stdin) line by line
    Search {
        query: String,

        files: Vec<PathBuf>,

        #[clap(flatten)]
        matching: MatchArgs,

        #[clap(short, long, value_enum)]
        format: Option<OutputFormat>,

        #[clap(short = 'n', long, value_parser, default_value_t = false)]
        line_numbers: bool,

        #[clap(short = 'o', long, value_parser, default_value_t = false)]
        only_matching: bool,

        #[clap(long, value_parser, default_value_t = false)]
        summary: bool,
    },
    /// Generate shell completion scripts
    Completions {
        #[clap(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Matching flags shared by every subcommand that runs the engine.
#[derive(Args, Debug, Clone, Default)]
pub struct MatchArgs {
    /// Allow matches that start in the middle of a word
    #[clap(short = 'w', long, value_parser, default_value_t = false)]
    pub inside_words: bool,

    /// Report every occurrence rather than the first per token
    #[clap(short, long, value_parser, default_value_t = false)]
    pub all: bool,

    /// Report nothing unless every query token matches
    #[clap(short, long, value_parser, default_value_t = false)]
    pub require_all: bool,
}

impl MatchArgs {
    /// Flags only ever switch options on over the configured defaults.
    pub fn apply(&self, base: MatchOptions) -> MatchOptions {
        MatchOptions {
            inside_words: base.inside_words || self.inside_words,
            find_all_occurrences: base.find_all_occurrences || self.all,
            require_match_all: base.require_match_all || self.require_all,
            offset_unit: base.offset_unit,
        }
    }
}

#[derive(ValueEnum, Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Html,
    Markdown,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Html => write!(f, "html"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}

#[derive(ValueEnum, Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn enabled(self) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => is_terminal::is_terminal(std::io::stdout()),
        }
    }
}
