use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The corpus holds no documents, so IDF is undefined.
    #[error("corpus contains no documents")]
    EmptyCorpus,
    /// The query holds no terms, so the score average is undefined.
    #[error("query contains no terms")]
    EmptyQuery,
    #[error("No term to search")]
    MissingQueryArgument,
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
