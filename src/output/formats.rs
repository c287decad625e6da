//! Individual output format implementations
use crate::matcher::segments;
use crate::output::{LineFormatter, RenderOptions};
use crate::processor::LineMatch;
use colored::Colorize;
use serde_json::json;
use std::ops::Range;

/// Prefix shared by the line-oriented formats: `path:line: `.
fn prefix(m: &LineMatch, options: &RenderOptions) -> String {
    let mut out = String::new();
    if options.show_path {
        out.push_str(&format!("{}:", m.path.display()));
    }
    if options.line_numbers {
        out.push_str(&format!("{}:", m.line_number));
    }
    if !out.is_empty() {
        out.push(' ');
    }
    out
}

/// Render one line by wrapping highlighted segments with `mark`. With
/// `only_matching`, plain text is dropped and marks are space separated.
fn render_line<F>(m: &LineMatch, options: &RenderOptions, escape: fn(&str) -> String, mark: F) -> String
where
    F: Fn(&str) -> String,
{
    let segs = segments(&m.line, &m.ranges);
    if options.only_matching {
        return segs
            .iter()
            .filter(|s| s.highlighted)
            .map(|s| mark(escape(s.text).as_str()))
            .collect::<Vec<_>>()
            .join(" ");
    }
    segs.iter()
        .map(|s| {
            if s.highlighted {
                mark(escape(s.text).as_str())
            } else {
                escape(s.text)
            }
        })
        .collect()
}

fn verbatim(s: &str) -> String {
    s.to_string()
}

/// Text formatter (default)
pub struct TextFormatter {
    options: RenderOptions,
}

impl TextFormatter {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }
}

impl LineFormatter for TextFormatter {
    fn format(&self, matches: &[LineMatch]) -> String {
        let mut output = String::new();
        for m in matches {
            output.push_str(&prefix(m, &self.options));
            let line = render_line(m, &self.options, verbatim, |s| {
                if self.options.color {
                    s.yellow().bold().to_string()
                } else {
                    s.to_string()
                }
            });
            output.push_str(&line);
            output.push('\n');
        }
        output
    }

    fn name(&self) -> &str {
        "text"
    }
}

/// JSON formatter, one object per line (NDJSON)
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl LineFormatter for JsonFormatter {
    fn format(&self, matches: &[LineMatch]) -> String {
        let mut output = String::new();
        for m in matches {
            let obj = json!({
                "path": m.path.to_string_lossy(),
                "line_number": m.line_number,
                "line": m.line,
                "ranges": m.ranges,
                "matched": m.ranges.iter().filter_map(|&r| m.line.get(Range::from(r))).collect::<Vec<_>>(),
            });
            output.push_str(&obj.to_string());
            output.push('\n');
        }
        output
    }

    fn name(&self) -> &str {
        "json"
    }
}

/// HTML formatter using `<mark>`
pub struct HtmlFormatter {
    options: RenderOptions,
}

impl HtmlFormatter {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }
}

impl LineFormatter for HtmlFormatter {
    fn format(&self, matches: &[LineMatch]) -> String {
        let mut output = String::from("<pre class=\"texthl\">\n");
        for m in matches {
            output.push_str(&escape_html(&prefix(m, &self.options)));
            output.push_str(&render_line(m, &self.options, escape_html, |s| {
                format!("<mark>{s}</mark>")
            }));
            output.push('\n');
        }
        output.push_str("</pre>\n");
        output
    }

    fn name(&self) -> &str {
        "html"
    }
}

/// Markdown formatter using strong emphasis
pub struct MarkdownFormatter {
    options: RenderOptions,
}

impl MarkdownFormatter {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }
}

impl LineFormatter for MarkdownFormatter {
    fn format(&self, matches: &[LineMatch]) -> String {
        let mut output = String::new();
        for m in matches {
            output.push_str("- ");
            output.push_str(&escape_markdown(&prefix(m, &self.options)));
            output.push_str(&render_line(m, &self.options, escape_markdown, |s| {
                format!("**{s}**")
            }));
            output.push('\n');
        }
        output
    }

    fn name(&self) -> &str {
        "markdown"
    }
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn escape_markdown(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '\\' | '*' | '_' | '`' | '[' | ']' | '#' | '<' | '>') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
