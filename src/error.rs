//! Error types shared by the preprocessor and the materializer.

use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The input document or an included file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The expanded document is not well-formed XML.
    #[error("malformed XML: {0}")]
    Parse(#[from] roxmltree::Error),
    /// A template directory or `node.def` could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
