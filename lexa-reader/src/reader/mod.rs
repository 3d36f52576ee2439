use crate::{
    options::{LineTracking, Options},
    pattern::Pattern,
    pos::{Location, Pos},
};

mod cursor;

use cursor::Cursor;

/// A set of characters that [`Reader::consume`] may eat.
pub trait CharSet {
    fn contains_char(&self, c: char) -> bool;
}

impl CharSet for str {
    fn contains_char(&self, c: char) -> bool {
        self.contains(c)
    }
}

impl CharSet for [char] {
    fn contains_char(&self, c: char) -> bool {
        self.contains(&c)
    }
}

impl<const N: usize> CharSet for [char; N] {
    fn contains_char(&self, c: char) -> bool {
        self.as_slice().contains(&c)
    }
}

/// Position-tracked cursor over a borrowed text.
///
/// Every consuming operation either succeeds and moves the cursor forward, or fails and
/// leaves `index`, `line` and `column` exactly where they were. The cursor never moves
/// backward.
#[derive(Debug)]
pub struct Reader<'a> {
    text: &'a str,
    cursor: Cursor,
    options: Options,
}

impl<'a> Reader<'a> {
    pub fn new(text: &'a str) -> Self {
        Self::with_options(text, Options::default())
    }

    pub fn with_options(text: &'a str, options: Options) -> Self {
        Self {
            text,
            cursor: Cursor::default(),
            options,
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Returns the next character without consuming it, `None` at end of input.
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Consumes the next character. At end of input this returns `None` and does nothing.
    pub fn read(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.cursor.shift(c);

        Some(c)
    }

    pub fn eof(&self) -> bool {
        self.cursor.index == self.text.len()
    }

    /// Consumes characters as long as `predicate` holds and returns how many were eaten.
    pub fn consume_while<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(char) -> bool,
    {
        let mut count = 0;

        while let Some(c) = self.peek() {
            if !predicate(c) {
                break;
            }

            self.cursor.shift(c);
            count += 1;
        }

        count
    }

    pub fn consume<S>(&mut self, set: &S) -> usize
    where
        S: CharSet + ?Sized,
    {
        self.consume_while(|c| set.contains_char(c))
    }

    /// Skips spaces and horizontal tabs. Newlines are left alone.
    pub fn consume_whitespace(&mut self) -> usize {
        self.consume_while(|c| c == ' ' || c == '\t')
    }

    /// Consumes everything left, or returns `None` if nothing is left.
    pub fn match_any(&mut self) -> Option<&'a str> {
        let rest = self.rest();

        if rest.is_empty() {
            return None;
        }

        self.cursor.shift_str(rest);

        Some(rest)
    }

    /// Runs `pattern` anchored at the cursor and consumes what it matched.
    ///
    /// How `line` and `column` move over the match depends on [`Options::regex_lines`].
    /// A span that doesn't start at the cursor, overruns the text or splits a character
    /// is rejected as a failed match.
    pub fn match_pattern<P>(&mut self, pattern: &P) -> Option<&'a str>
    where
        P: Pattern + ?Sized,
    {
        let start = self.cursor.index;
        let span = pattern.find_at(self.text, start)?;

        if span.start != start
            || span.end < span.start
            || span.end > self.text.len()
            || !self.text.is_char_boundary(span.end)
        {
            tracing::warn!(
                offset = start,
                span_start = span.start,
                span_end = span.end,
                "pattern returned an invalid span, treating it as no match"
            );

            return None;
        }

        let matched = &self.text[span.start..span.end];

        match self.options.regex_lines {
            LineTracking::Tracked => self.cursor.shift_str(matched),
            LineTracking::ColumnOnly => self.cursor.shift_columns(matched),
        }

        tracing::trace!(
            offset = start,
            len = matched.len(),
            line = self.cursor.line,
            column = self.cursor.column,
            "pattern matched"
        );

        Some(matched)
    }

    /// Consumes `literal` if the text at the cursor starts with it.
    pub fn match_str(&mut self, literal: &str) -> bool {
        if !self.rest().starts_with(literal) {
            return false;
        }

        self.cursor.shift_str(literal);

        tracing::trace!(
            literal,
            line = self.cursor.line,
            column = self.cursor.column,
            "literal matched"
        );

        true
    }

    pub fn match_char(&mut self, expected: char) -> bool {
        if self.peek() != Some(expected) {
            return false;
        }

        self.cursor.shift(expected);

        true
    }

    pub fn index(&self) -> usize {
        self.cursor.index
    }

    pub fn line(&self) -> usize {
        self.cursor.line
    }

    pub fn column(&self) -> usize {
        self.cursor.column
    }

    pub fn pos(&self) -> Pos {
        Pos::new(self.cursor.line, self.cursor.column)
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn rest(&self) -> &'a str {
        &self.text[self.cursor.index..]
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Text consumed between an earlier `index()` and the cursor. Empty when `start` is
    /// past the cursor or not on a character boundary.
    pub fn consumed_since(&self, start: usize) -> &'a str {
        self.text.get(start..self.cursor.index).unwrap_or_default()
    }
}

impl Location for Reader<'_> {
    fn line(&self) -> usize {
        self.cursor.line
    }

    fn column(&self) -> usize {
        self.cursor.column
    }
}
