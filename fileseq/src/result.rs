//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Error types for file sequences

use framix_frameset::FrameError;
use thiserror::Error;

/// Result type for file sequence operations
pub type SequenceResult<T> = Result<T, SequenceError>;

/// File sequence error types
#[derive(Debug, Error)]
pub enum SequenceError {
    /// The descriptor does not have the `[dir/]base[range][padding][.ext]` shape
    #[error("Failed to parse file sequence '{input}' at position {position}: {reason}")]
    Parse {
        /// The descriptor that failed to parse
        input: String,
        /// Byte offset of the rejected character
        position: usize,
        /// Why it failed
        reason: String,
    },

    /// Error from the frame set layer
    #[error("Frame error: {0}")]
    Frame(#[from] FrameError),

    /// The operation needs frames but the sequence has no frame range
    #[error("File sequence has no frame range")]
    MissingFrameSet,

    /// Padding contains a character other than `#` or `@`
    #[error("Invalid padding '{padding}': unexpected character {character:?}")]
    InvalidPadding {
        /// The rejected padding string
        padding: String,
        /// The first character that is not a padding character
        character: char,
    },

    /// A format template could not be rendered
    #[error("Invalid template '{template}' at position {position}: {kind}")]
    Template {
        /// The template being rendered
        template: String,
        /// Byte offset of the problem within the template
        position: usize,
        /// What went wrong
        kind: TemplateErrorKind,
    },

    /// No sequence matches a lookup
    #[error("No sequence found matching {pattern}")]
    NotFound {
        /// The pattern that was looked up
        pattern: String,
    },

    /// The directory listing collaborator failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SequenceError {
    /// Check if the error was raised while parsing a descriptor or frame range
    pub fn is_parse_error(&self) -> bool {
        match self {
            SequenceError::Parse { .. } | SequenceError::InvalidPadding { .. } => true,
            SequenceError::Frame(err) => err.is_parse_error(),
            _ => false,
        }
    }

    /// Check if the error reports a missing frame or sequence
    pub fn is_not_found(&self) -> bool {
        match self {
            SequenceError::NotFound { .. } => true,
            SequenceError::Frame(err) => err.is_not_found(),
            _ => false,
        }
    }

    /// Check if the error reports an out of bounds index
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, SequenceError::Frame(err) if err.is_out_of_range())
    }
}

/// Specific kinds of template rendering errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateErrorKind {
    /// A `{name}` placeholder names a field that does not exist.
    UnknownField {
        /// The unrecognised field name
        name: String,
    },

    /// A `{` was never closed.
    Unterminated,

    /// A lone `}` outside of a placeholder.
    UnmatchedBrace,
}

impl std::fmt::Display for TemplateErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemplateErrorKind::UnknownField { name } => write!(f, "unknown field '{}'", name),
            TemplateErrorKind::Unterminated => write!(f, "unterminated placeholder"),
            TemplateErrorKind::UnmatchedBrace => write!(f, "single '}}' encountered"),
        }
    }
}
