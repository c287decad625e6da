use crate::config::InputConfig;
use crate::error::{Result, TexthlError};
use crate::matcher::{MatchOptions, MatchRange, Matcher, OffsetUnit};
use log::{debug, warn};
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

const BINARY_CHECK_SIZE: usize = 8000;

/// One input line that had at least one range to highlight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineMatch {
    pub path: PathBuf,
    pub line_number: usize,
    pub line: String,
    /// Byte offsets into `line`.
    pub ranges: Vec<MatchRange>,
}

pub fn is_binary(file: &Path) -> bool {
    if let Ok(mut file) = File::open(file) {
        let mut buffer = vec![0u8; BINARY_CHECK_SIZE];
        if let Ok(n) = file.read(&mut buffer) {
            return buffer[..n].contains(&0);
        }
    }
    false
}

/// Build a matcher that reports byte offsets, which renderers slice
/// lines with.
pub fn byte_matcher(query: &str, options: MatchOptions) -> Matcher {
    let options = MatchOptions {
        offset_unit: OffsetUnit::Byte,
        ..options
    };
    Matcher::new(query, options)
}

/// Run `matcher` over every line of `reader`. Invalid UTF-8 is replaced
/// rather than rejected.
pub fn highlight_reader<R: BufRead>(
    mut reader: R,
    path: &Path,
    matcher: &Matcher,
) -> Result<Vec<LineMatch>> {
    let mut results = Vec::new();
    let mut buf = Vec::new();
    let mut line_number = 0;

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|source| TexthlError::Input {
                path: path.to_path_buf(),
                source,
            })?;
        if read == 0 {
            break;
        }
        line_number += 1;

        let text = String::from_utf8_lossy(&buf);
        let line = text.trim_end_matches(['\n', '\r']);
        let ranges = matcher.find(line);
        if !ranges.is_empty() {
            results.push(LineMatch {
                path: path.to_path_buf(),
                line_number,
                line: line.to_string(),
                ranges,
            });
        }
    }

    debug!(
        "{}: {} of {} line(s) matched",
        path.display(),
        results.len(),
        line_number
    );
    Ok(results)
}

/// Open and highlight a file, honoring the binary and size limits.
pub fn highlight_file(path: &Path, matcher: &Matcher, input: &InputConfig) -> Result<Vec<LineMatch>> {
    let metadata = std::fs::metadata(path).map_err(|source| TexthlError::Input {
        path: path.to_path_buf(),
        source,
    })?;

    if let Some(limit_mb) = input.max_file_size_mb {
        let size_mb = metadata.len() as f64 / (1024.0 * 1024.0);
        if size_mb > limit_mb as f64 {
            return Err(TexthlError::FileTooLarge {
                path: path.to_path_buf(),
                size_mb,
            });
        }
    }

    if input.skip_binary && is_binary(path) {
        warn!("Skipping binary file {}", path.display());
        return Err(TexthlError::BinaryFile(path.to_path_buf()));
    }

    let file = File::open(path).map_err(|source| TexthlError::Input {
        path: path.to_path_buf(),
        source,
    })?;
    highlight_reader(BufReader::new(file), path, matcher)
}
