/// How [`Reader::match_pattern`](crate::Reader::match_pattern) moves the line/column
/// coordinates over the text it matched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineTracking {
    /// Newlines inside the match bump `line` and reset `column`, like every other
    /// consuming operation.
    #[default]
    Tracked,

    /// `column` grows by the matched length and `line` is left alone, even when the
    /// match spans several lines.
    ColumnOnly,
}

/// Settings a [`Reader`](crate::Reader) is built with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Line/column bookkeeping for pattern matches. Defaults to [`LineTracking::Tracked`].
    pub regex_lines: LineTracking,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_regex_lines(self, regex_lines: LineTracking) -> Options {
        Self {
            regex_lines,
            ..self
        }
    }

    pub fn column_only_regex(self) -> Options {
        self.with_regex_lines(LineTracking::ColumnOnly)
    }
}
