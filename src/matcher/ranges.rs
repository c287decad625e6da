use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Half-open `[start, end)` span of content to highlight.
///
/// Serializes as a two-element array so JSON output reads `[[5, 7]]`.
/// Ordering is by `start`, then `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "(usize, usize)", into = "(usize, usize)")]
pub struct MatchRange {
    pub start: usize,
    pub end: usize,
}

impl MatchRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

impl From<(usize, usize)> for MatchRange {
    fn from((start, end): (usize, usize)) -> Self {
        Self { start, end }
    }
}

impl From<MatchRange> for (usize, usize) {
    fn from(r: MatchRange) -> Self {
        (r.start, r.end)
    }
}

impl From<MatchRange> for Range<usize> {
    fn from(r: MatchRange) -> Self {
        r.start..r.end
    }
}

/// Collapse overlapping or adjacent ranges into spanning ones.
///
/// The engine never does this itself; renderers need it so a character is
/// decorated at most once.
pub fn merge_overlapping(ranges: &[MatchRange]) -> Vec<MatchRange> {
    let mut sorted = ranges.to_vec();
    sorted.sort_unstable();

    let mut merged: Vec<MatchRange> = Vec::with_capacity(sorted.len());
    for r in sorted {
        match merged.last_mut() {
            Some(last) if r.start <= last.end => last.end = last.end.max(r.end),
            _ => merged.push(r),
        }
    }
    merged
}

/// A run of content that is either highlighted or plain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub highlighted: bool,
}

/// Split `content` into alternating plain and highlighted segments.
///
/// `ranges` must use byte offsets. Overlapping ranges are merged first;
/// ranges that fall outside `content` or off a char boundary are ignored.
pub fn segments<'a>(content: &'a str, ranges: &[MatchRange]) -> Vec<Segment<'a>> {
    let mut out = Vec::new();
    let mut cursor = 0;

    for r in merge_overlapping(ranges) {
        if r.is_empty() || r.start < cursor {
            continue;
        }
        let (Some(plain), Some(marked)) = (content.get(cursor..r.start), content.get(Range::from(r)))
        else {
            continue;
        };
        if !plain.is_empty() {
            out.push(Segment {
                text: plain,
                highlighted: false,
            });
        }
        out.push(Segment {
            text: marked,
            highlighted: true,
        });
        cursor = r.end;
    }

    if let Some(rest) = content.get(cursor..) {
        if !rest.is_empty() {
            out.push(Segment {
                text: rest,
                highlighted: false,
            });
        }
    }
    out
}
