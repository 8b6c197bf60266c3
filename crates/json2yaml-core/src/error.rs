//! Error types for JSON reading and YAML emission.

use std::fmt;
use thiserror::Error;

/// A location in the input stream.
///
/// `line` and `column` are 1-based; `column` counts bytes, not characters.
/// `offset` is the 0-based byte offset from the start of the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
    pub offset: u64,
}

impl Position {
    /// The position of the first byte of a stream.
    pub const fn start() -> Self {
        Self {
            line: 1,
            column: 1,
            offset: 0,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Errors that can occur while converting JSON to YAML.
#[derive(Error, Debug)]
pub enum Json2YamlError {
    /// Malformed token, invalid escape, bad number grammar, or a byte that
    /// cannot start or continue the current construct.
    #[error("syntax error at {position}: {message}")]
    Syntax { message: String, position: Position },

    /// The input ended before the value being read was closed.
    #[error("unexpected EOF at {position} while reading {context}")]
    UnexpectedEof {
        context: &'static str,
        position: Position,
    },

    /// Containers nested deeper than the configured limit.
    #[error("exceeded max depth of {limit} at {position}")]
    DepthLimitExceeded { limit: usize, position: Position },

    /// Reading the input or writing the output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Json2YamlError {
    /// Where in the input the error was detected, if it came from the reader.
    pub fn position(&self) -> Option<Position> {
        match self {
            Json2YamlError::Syntax { position, .. }
            | Json2YamlError::UnexpectedEof { position, .. }
            | Json2YamlError::DepthLimitExceeded { position, .. } => Some(*position),
            Json2YamlError::Io(_) => None,
        }
    }

    pub fn is_eof(&self) -> bool {
        matches!(self, Json2YamlError::UnexpectedEof { .. })
    }
}

/// Convenience alias used throughout json2yaml-core.
pub type Result<T> = std::result::Result<T, Json2YamlError>;
