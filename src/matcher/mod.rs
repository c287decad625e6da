//! Highlight match engine
//!
//! Given some content and a free-text query, works out which substrings of
//! the content should be highlighted. The query is split into tokens on
//! whitespace and each token is searched for literally and
//! case-insensitively.
mod fold;
pub mod ranges;
pub mod tokenize;

use fold::{fold_str, FoldedText, Position};
use log::{debug, trace};
use memchr::memmem::Finder;
use serde::{Deserialize, Serialize};

pub use ranges::{merge_overlapping, segments, MatchRange, Segment};
pub use tokenize::tokenize;

/// Unit in which returned range offsets are expressed.
#[derive(clap::ValueEnum, Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OffsetUnit {
    /// UTF-16 code units, as a browser would index the string.
    #[default]
    Utf16,
    /// UTF-8 bytes; always valid `&str` slice boundaries.
    Byte,
    /// Unicode scalar values.
    Char,
}

impl OffsetUnit {
    fn pick(self, p: Position) -> usize {
        match self {
            OffsetUnit::Utf16 => p.utf16,
            OffsetUnit::Byte => p.byte,
            OffsetUnit::Char => p.char,
        }
    }
}

/// Options controlling which occurrences are reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchOptions {
    /// Accept matches that start in the middle of a word.
    pub inside_words: bool,
    /// Report every occurrence of every token instead of the first one.
    pub find_all_occurrences: bool,
    /// Report nothing unless every token matched at least once.
    pub require_match_all: bool,
    /// Unit of the returned offsets; UTF-16 code units unless set.
    pub offset_unit: OffsetUnit,
}

impl MatchOptions {
    /// Start from the defaults: every flag off, UTF-16 offsets.
    pub fn builder() -> MatchOptionsBuilder {
        MatchOptionsBuilder::default()
    }
}

/// Builder for [`MatchOptions`]; fields left unset keep their defaults.
///
/// ```
/// use texthl::{MatchOptions, OffsetUnit};
///
/// let options = MatchOptions::builder()
///     .find_all_occurrences(true)
///     .offset_unit(OffsetUnit::Byte)
///     .build();
/// assert!(options.find_all_occurrences);
/// assert!(!options.inside_words);
/// ```
#[derive(Debug, Default)]
pub struct MatchOptionsBuilder {
    options: MatchOptions,
}

impl MatchOptionsBuilder {
    /// See [`MatchOptions::inside_words`].
    pub fn inside_words(mut self, value: bool) -> Self {
        self.options.inside_words = value;
        self
    }

    /// See [`MatchOptions::find_all_occurrences`].
    pub fn find_all_occurrences(mut self, value: bool) -> Self {
        self.options.find_all_occurrences = value;
        self
    }

    /// See [`MatchOptions::require_match_all`].
    pub fn require_match_all(mut self, value: bool) -> Self {
        self.options.require_match_all = value;
        self
    }

    /// See [`MatchOptions::offset_unit`].
    pub fn offset_unit(mut self, unit: OffsetUnit) -> Self {
        self.options.offset_unit = unit;
        self
    }

    /// Finish building.
    pub fn build(self) -> MatchOptions {
        self.options
    }
}

/// One folded query token and its prebuilt substring finder.
#[derive(Debug, Clone)]
struct Token {
    text: String,
    finder: Finder<'static>,
}

impl Token {
    fn new(raw: &str) -> Self {
        let text = fold_str(raw);
        let finder = Finder::new(text.as_bytes()).into_owned();
        Self { text, finder }
    }
}

/// A query prepared once and applied to any number of contents.
///
/// ```
/// use texthl::{Matcher, MatchOptions, MatchRange};
///
/// let matcher = Matcher::new("e a", MatchOptions::default());
/// assert_eq!(
///     matcher.find("Albert Einstein"),
///     vec![MatchRange::new(0, 1), MatchRange::new(7, 8)]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Matcher {
    tokens: Vec<Token>,
    options: MatchOptions,
}

impl Matcher {
    pub fn new(query: &str, options: MatchOptions) -> Self {
        let tokens: Vec<Token> = tokenize(query).into_iter().map(Token::new).collect();
        debug!("Prepared {} query token(s) with {:?}", tokens.len(), options);
        Self { tokens, options }
    }

    /// Folded tokens, in query order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(|t| t.text.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Ranges of `content` to highlight, sorted and free of duplicates.
    pub fn find(&self, content: &str) -> Vec<MatchRange> {
        if self.tokens.is_empty() {
            return Vec::new();
        }

        let text = FoldedText::new(content);
        let mut ranges = Vec::new();

        for token in &self.tokens {
            let hits = self.scan(&text, token);
            trace!("Token {:?} matched {} time(s)", token.text, hits.len());

            if hits.is_empty() && self.options.require_match_all {
                debug!("Token {:?} has no match, dropping all ranges", token.text);
                return Vec::new();
            }
            ranges.extend(hits);
        }

        ranges.sort_unstable();
        ranges.dedup();
        ranges
    }

    /// Accepted occurrences of one token. Occurrences rejected by the
    /// word rule only advance the scan by one position; accepted ones
    /// resume after their end.
    fn scan(&self, text: &FoldedText<'_>, token: &Token) -> Vec<MatchRange> {
        let haystack = text.as_bytes();
        let needle_len = token.text.len();
        let unit = self.options.offset_unit;
        let mut hits = Vec::new();
        let mut from = 0;

        while from <= haystack.len() {
            let Some(found) = token.finder.find(&haystack[from..]) else {
                break;
            };
            let start = from + found;
            let end = start + needle_len;

            if !self.options.inside_words && !text.starts_word(start) {
                from = start + 1;
                continue;
            }

            if let (Some(s), Some(e)) = (text.position(start), text.position(end)) {
                hits.push(MatchRange::new(unit.pick(s), unit.pick(e)));
            }
            if !self.options.find_all_occurrences {
                break;
            }
            from = end;
        }

        hits
    }
}

/// Compute the ranges of `content` that `query` highlights.
///
/// Shorthand for building a [`Matcher`] and calling [`Matcher::find`] once.
pub fn find_matches(content: &str, query: &str, options: &MatchOptions) -> Vec<MatchRange> {
    Matcher::new(query, *options).find(content)
}
