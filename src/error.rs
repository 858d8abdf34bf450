use std::path::PathBuf;

use thiserror::Error;

use crate::dice::DieType;

/// The input did not match the roll specifier grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed roll specifier {input:?}\n{message}")]
pub struct MalformedSpecifier {
    input: String,
    offset: usize,
    message: String,
}

impl MalformedSpecifier {
    pub(crate) fn new(input: &str, offset: usize, message: String) -> Self {
        Self {
            input: input.to_owned(),
            offset,
            message,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Byte offset into the input where parsing stopped.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    MalformedSpecifier(#[from] MalformedSpecifier),
    #[error("the active dice set has no {0} die")]
    NoMatchingDie(DieType),
    #[error("unknown dice set {0:?}")]
    UnknownDiceSet(String),
    #[error("failed to read config file {path:?}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Config(String),
    #[error(transparent)]
    ConfigFormat(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
