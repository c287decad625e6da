//! Rendering of highlighted lines
pub mod formats;

use crate::cli::OutputFormat;
use crate::processor::LineMatch;

pub use formats::{HtmlFormatter, JsonFormatter, MarkdownFormatter, TextFormatter};

/// Layout switches shared by every formatter.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    pub line_numbers: bool,
    pub show_path: bool,
    pub only_matching: bool,
    pub color: bool,
}

/// Trait for output formatters
pub trait LineFormatter: Send + Sync {
    /// Render every matched line of a run.
    fn format(&self, matches: &[LineMatch]) -> String;
    fn name(&self) -> &str;
}

/// Pick the formatter for `format`.
pub fn formatter_for(format: OutputFormat, options: RenderOptions) -> Box<dyn LineFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(options)),
        OutputFormat::Json => Box::new(JsonFormatter::new()),
        OutputFormat::Html => Box::new(HtmlFormatter::new(options)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(options)),
    }
}
