//! Highlight matching for free-text search boxes.
//!
//! The core is [`find_matches`]: given some content and a query, it returns
//! the `[start, end)` ranges of the content to highlight. Everything else in
//! the crate (line processing, renderers, the `texthl` binary) is built on it.
pub mod cli;
pub mod config;
pub mod error;
pub mod matcher;
pub mod output;
pub mod processor;

pub use crate::error::{Result, TexthlError};
pub use clap::Parser;
pub use cli::{Cli, ColorChoice, Commands, OutputFormat};
pub use config::Config;
pub use matcher::{
    find_matches, merge_overlapping, segments, tokenize, MatchOptions, MatchOptionsBuilder,
    MatchRange, Matcher, OffsetUnit, Segment,
};
pub use processor::{highlight_file, highlight_reader, LineMatch};
