use serde::Deserialize;
use serde::Serialize;

/// Half-open selection in a compose buffer.
///
/// Offsets are byte offsets into the UTF-8 text. A caret is represented as the zero-length
/// selection `caret..caret`.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Selection {
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
}

impl Selection {
    pub fn new(start: usize, end: usize) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// Zero-length selection at `pos`.
    pub fn caret(pos: usize) -> Self {
        Self { start: pos, end: pos }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Zero for a hand-built selection whose `end` precedes `start`.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Clamp both ends into `text`, moving each down to the nearest char boundary.
    pub fn clamp_to(self, text: &str) -> Self {
        Self::new(
            clamp_pos_to_char_boundary(text, self.start),
            clamp_pos_to_char_boundary(text, self.end),
        )
    }
}

impl From<std::ops::Range<usize>> for Selection {
    fn from(range: std::ops::Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

/// Clamp `pos` to `text.len()` and move it down to the nearest char boundary.
pub fn clamp_pos_to_char_boundary(text: &str, pos: usize) -> usize {
    let mut pos = pos.min(text.len());
    while pos > 0 && !text.is_char_boundary(pos) {
        pos -= 1;
    }
    pos
}
