use std::fmt::Display;

/// Anything that can report a line and a column.
pub trait Location {
    fn line(&self) -> usize;
    fn column(&self) -> usize;
}

/// A line/column pair copied out of a reader or any other [`Location`].
///
/// Both coordinates are 0-based. A `Pos` keeps no reference to where it came from.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub struct Pos {
    line: usize,
    column: usize,
}

impl Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl Pos {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    pub fn of<L>(location: &L) -> Self
    where
        L: Location + ?Sized,
    {
        Self::new(location.line(), location.column())
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }
}

impl Location for Pos {
    fn line(&self) -> usize {
        self.line
    }

    fn column(&self) -> usize {
        self.column
    }
}

impl<L> From<&L> for Pos
where
    L: Location + ?Sized,
{
    fn from(location: &L) -> Self {
        Pos::of(location)
    }
}
