use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShellError {
    #[error("Unable to split command line: {0}")]
    Tokenize(#[from] shell_words::ParseError),

    #[error("Invalid zone store {path}: {source}")]
    StoreFormat {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Unable to encode zone store: {0}")]
    StoreEncode(#[from] toml::ser::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ShellError>;
