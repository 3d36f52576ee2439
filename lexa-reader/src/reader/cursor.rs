/// Where a reader stands in its text. `index` is a byte offset, `column` counts bytes
/// since the last newline.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Cursor {
    pub index: usize,
    pub line: usize,
    pub column: usize,
}

impl Cursor {
    pub fn shift(&mut self, c: char) {
        self.index += c.len_utf8();

        if c == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += c.len_utf8();
        }
    }

    pub fn shift_str(&mut self, s: &str) {
        for c in s.chars() {
            self.shift(c);
        }
    }

    /// Moves over `s` as if it held no newline.
    pub fn shift_columns(&mut self, s: &str) {
        self.index += s.len();
        self.column += s.len();
    }
}

#[cfg(test)]
mod tests {
    use super::Cursor;

    #[test]
    fn test_shift_resets_column_on_newline() {
        let mut cursor = Cursor::default();

        cursor.shift_str("ab\nc");

        assert_eq!(4, cursor.index);
        assert_eq!(1, cursor.line);
        assert_eq!(1, cursor.column);
    }

    #[test]
    fn test_shift_counts_code_units() {
        let mut cursor = Cursor::default();

        cursor.shift('é');

        assert_eq!(2, cursor.index);
        assert_eq!(0, cursor.line);
        assert_eq!(2, cursor.column);
    }

    #[test]
    fn test_shift_columns_ignores_newlines() {
        let mut cursor = Cursor::default();

        cursor.shift_columns("a\nb");

        assert_eq!(3, cursor.index);
        assert_eq!(0, cursor.line);
        assert_eq!(3, cursor.column);
    }
}
