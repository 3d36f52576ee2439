use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex_automata::meta::BuildError,
    },
}

pub type Result<A> = std::result::Result<A, Error>;
