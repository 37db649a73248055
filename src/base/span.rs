//! Byte ranges and line/column conversion.

pub use text_size::{TextRange, TextSize};

use super::{Position, Span};

/// A 0-indexed line/column pair. Columns count UTF-16 code units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineCol {
    pub line: u32,
    pub col: u32,
}

impl From<LineCol> for Position {
    fn from(lc: LineCol) -> Self {
        Position::new(lc.line, lc.col)
    }
}

/// Maps byte offsets to line/column positions and back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    text: String,
    /// Byte offset of the first character of every line.
    line_starts: Vec<TextSize>,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::new(0)];
        for (offset, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(TextSize::new(offset as u32 + 1));
            }
        }
        Self {
            text: text.to_string(),
            line_starts,
        }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Convert a byte offset to a line/column pair.
    ///
    /// Offsets past the end of the text clamp to the end. Offsets inside a
    /// multi-byte character resolve to that character's start.
    pub fn line_col(&self, offset: TextSize) -> LineCol {
        let offset = offset.min(TextSize::of(self.text.as_str()));
        let line = self
            .line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);
        let line_start = usize::from(self.line_starts[line]);
        let col = self.text[line_start..]
            .char_indices()
            .take_while(|(i, _)| line_start + i < usize::from(offset))
            .map(|(_, c)| c.len_utf16() as u32)
            .sum();
        LineCol {
            line: line as u32,
            col,
        }
    }

    /// Convert a line/column pair to a byte offset.
    ///
    /// Lines past the end clamp to the end of the text; columns past the end
    /// of a line clamp to the line end (before its newline).
    pub fn offset(&self, line_col: LineCol) -> TextSize {
        let Some(&start) = self.line_starts.get(line_col.line as usize) else {
            return TextSize::of(self.text.as_str());
        };
        let start = usize::from(start);
        let line_text = self.text[start..].split('\n').next().unwrap_or_default();
        let line_text = line_text.strip_suffix('\r').unwrap_or(line_text);

        let mut units = 0u32;
        for (i, c) in line_text.char_indices() {
            if units >= line_col.col {
                return TextSize::new((start + i) as u32);
            }
            units += c.len_utf16() as u32;
        }
        TextSize::new((start + line_text.len()) as u32)
    }

    /// Convert a byte range to a line/column span.
    pub fn span(&self, range: TextRange) -> Span {
        Span::new(
            self.line_col(range.start()).into(),
            self.line_col(range.end()).into(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_col_single_line() {
        let index = LineIndex::new("@define-color a #fff;");
        assert_eq!(index.line_col(TextSize::new(0)), LineCol { line: 0, col: 0 });
        assert_eq!(index.line_col(TextSize::new(14)), LineCol { line: 0, col: 14 });
    }

    #[test]
    fn test_line_col_multi_line() {
        let index = LineIndex::new("a\nbc\n\ndef");
        assert_eq!(index.line_count(), 4);
        assert_eq!(index.line_col(TextSize::new(2)), LineCol { line: 1, col: 0 });
        assert_eq!(index.line_col(TextSize::new(4)), LineCol { line: 1, col: 2 });
        assert_eq!(index.line_col(TextSize::new(5)), LineCol { line: 2, col: 0 });
        assert_eq!(index.line_col(TextSize::new(8)), LineCol { line: 3, col: 2 });
    }

    #[test]
    fn test_line_col_counts_utf16_units() {
        // 'é' is two bytes but one UTF-16 unit, '😀' is four bytes and two units
        let index = LineIndex::new("é😀@x");
        assert_eq!(index.line_col(TextSize::new(6)), LineCol { line: 0, col: 3 });
    }

    #[test]
    fn test_line_col_clamps_past_end() {
        let index = LineIndex::new("ab");
        assert_eq!(index.line_col(TextSize::new(99)), LineCol { line: 0, col: 2 });
    }

    #[test]
    fn test_offset_roundtrips_line_col() {
        let text = "a\n  @accent;\r\nlast";
        let index = LineIndex::new(text);
        for offset in [0u32, 2, 4, 10, 14, 16] {
            let offset = TextSize::new(offset);
            assert_eq!(index.offset(index.line_col(offset)), offset);
        }
    }

    #[test]
    fn test_offset_clamps_column_and_line() {
        let index = LineIndex::new("ab\r\ncd");
        assert_eq!(index.offset(LineCol { line: 0, col: 40 }), TextSize::new(2));
        assert_eq!(index.offset(LineCol { line: 9, col: 0 }), TextSize::new(6));
    }

    #[test]
    fn test_span_of_range() {
        let index = LineIndex::new("x\n@accent");
        let span = index.span(TextRange::new(TextSize::new(2), TextSize::new(9)));
        assert_eq!(span, Span::from_coords(1, 0, 1, 7));
    }
}
