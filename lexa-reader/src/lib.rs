mod error;
mod options;
mod pattern;
mod pos;
mod reader;

#[cfg(test)]
mod tests;

pub use error::{Error, Result};
pub use options::{LineTracking, Options};
pub use pattern::{Anchored, Pattern};
pub use pos::{Location, Pos};
pub use reader::{CharSet, Reader};
