use std::io;

use thiserror::Error;

/// Every way a turn can go wrong. None of these are recovered from: the driver stops on the
/// first one and no command is written for the turn in progress.
#[derive(Debug, Error)]
pub enum BotError {
    #[error("unrecognized cell '{0}'")]
    UnknownCell(char),
    #[error("map row {row} has {found} cells, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("map row {row} is outside a grid of height {height}")]
    RowOutOfBounds { row: usize, height: usize },
    #[error("unrecognized entity type '{0}'")]
    UnknownEntityType(String),
    #[error("unrecognized minion state {0}")]
    UnknownMinionState(i32),
    #[error("malformed line '{line}': {reason}")]
    MalformedLine { line: String, reason: String },
    #[error("cannot search {0} in an empty collection")]
    EmptyInput(&'static str),
    #[error("no explorer reported this turn")]
    NoExplorer,
    #[error("input ended while reading {0}")]
    UnexpectedEof(&'static str),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl BotError {
    pub fn malformed(line: &str, reason: impl Into<String>) -> Self {
        BotError::MalformedLine {
            line: line.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BotError>;
