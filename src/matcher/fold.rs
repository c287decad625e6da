//! Case folding with an offset map back to the source text.

/// Offsets of one char boundary, expressed in every unit we report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Position {
    pub folded: usize,
    pub byte: usize,
    pub utf16: usize,
    pub char: usize,
}

/// Lower-case a single char, keeping it unchanged when its lower-case form
/// is more than one char. This keeps folding one-to-one per char.
pub(crate) fn fold_char(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

pub(crate) fn fold_str(s: &str) -> String {
    s.chars().map(fold_char).collect()
}

/// A case-folded copy of some content plus a boundary table mapping byte
/// offsets in the folded copy back to positions in the source.
pub(crate) struct FoldedText<'a> {
    source: &'a str,
    folded: String,
    /// One entry per char boundary, including the end of the text.
    positions: Vec<Position>,
}

impl<'a> FoldedText<'a> {
    pub fn new(source: &'a str) -> Self {
        let mut folded = String::with_capacity(source.len());
        let mut positions = Vec::with_capacity(source.len() + 1);
        let mut utf16 = 0;

        for (index, (byte, c)) in source.char_indices().enumerate() {
            positions.push(Position {
                folded: folded.len(),
                byte,
                utf16,
                char: index,
            });
            folded.push(fold_char(c));
            utf16 += c.len_utf16();
        }
        positions.push(Position {
            folded: folded.len(),
            byte: source.len(),
            utf16,
            char: positions.len(),
        });

        Self {
            source,
            folded,
            positions,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.folded.as_bytes()
    }

    /// Source position of a char boundary in the folded text.
    pub fn position(&self, folded_offset: usize) -> Option<Position> {
        self.positions
            .binary_search_by_key(&folded_offset, |p| p.folded)
            .ok()
            .map(|i| self.positions[i])
    }

    /// Whether a match may start at `folded_offset` under the
    /// beginning-of-word rule: nothing alphanumeric right before it.
    pub fn starts_word(&self, folded_offset: usize) -> bool {
        match self.position(folded_offset) {
            Some(p) => !self.source[..p.byte]
                .chars()
                .next_back()
                .is_some_and(char::is_alphanumeric),
            None => false,
        }
    }
}
