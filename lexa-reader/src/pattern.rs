use std::{ops::Range, str::FromStr};

use regex::Regex;
use regex_automata::{meta, Input};

use crate::error::{Error, Result};

/// A matcher that can be anchored at an arbitrary offset of a text.
///
/// Implementations treat `offset` as the beginning of the haystack: a match is only
/// reported if it starts exactly there. The returned span is in bytes, relative to the
/// whole `text`.
pub trait Pattern {
    fn find_at(&self, text: &str, offset: usize) -> Option<Range<usize>>;
}

/// The remainder is searched with leftmost semantics and only a match starting at the
/// cursor is kept. A failing match may scan to the end of the text, so a lexer trying
/// many alternatives per token should prefer [`Anchored`], which stops at the first
/// byte that cannot extend a match.
impl Pattern for Regex {
    fn find_at(&self, text: &str, offset: usize) -> Option<Range<usize>> {
        let rest = text.get(offset..)?;
        let found = self.find(rest)?;

        // Leftmost semantics: a match starting at 0 would have been found first.
        if found.start() != 0 {
            return None;
        }

        Some(offset..offset + found.end())
    }
}

/// Closures receive the remaining text and return the length of the prefix they accept.
impl<F> Pattern for F
where
    F: Fn(&str) -> Option<usize>,
{
    fn find_at(&self, text: &str, offset: usize) -> Option<Range<usize>> {
        let len = self(text.get(offset..)?)?;

        Some(offset..offset.checked_add(len)?)
    }
}

/// A regular expression that is only ever searched in anchored mode.
///
/// The pattern text is compiled as written. Unlike a bare [`Regex`], a failing match is
/// detected without scanning the rest of the input.
#[derive(Debug, Clone)]
pub struct Anchored {
    source: String,
    regex: meta::Regex,
}

impl Anchored {
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = meta::Regex::new(pattern).map_err(|source| Error::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;

        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl FromStr for Anchored {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Anchored::new(s)
    }
}

impl Pattern for Anchored {
    fn find_at(&self, text: &str, offset: usize) -> Option<Range<usize>> {
        // The remainder is the haystack so that `^` and `\A` match at the cursor.
        let input = Input::new(text.get(offset..)?).anchored(regex_automata::Anchored::Yes);
        let found = self.regex.find(input)?;

        Some(offset + found.start()..offset + found.end())
    }
}
