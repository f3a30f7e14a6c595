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

//! Error types for the frameset crate.
//!
//! Every failure is scoped to the call that triggered it. Parse failures carry
//! the offending comma-separated part together with its byte offset in the
//! original expression so callers can point at the exact location.

use thiserror::Error;

/// Result type alias for operations that may fail with a [`FrameError`].
pub type FrameResult<T> = Result<T, FrameError>;

/// Errors that can occur when parsing or querying a frame set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameError {
    /// A comma-separated part of a frame range expression could not be parsed.
    #[error("Failed to parse frame range '{input}' on part '{part}' at position {position}: {kind}")]
    Parse {
        /// The complete expression that was being parsed
        input: String,
        /// The comma-separated part that failed
        part: String,
        /// Byte offset of `part` within `input`
        position: usize,
        /// Structured reason for the failure
        kind: ParseErrorKind,
    },

    /// The queried frame is not a member of the set.
    #[error("Frame {frame} not found in frame set")]
    NotFound {
        /// The frame that was looked up
        frame: i64,
    },

    /// An index was outside the bounds of the set.
    #[error("Index {index} out of range for frame set of length {len}")]
    OutOfRange {
        /// The requested index
        index: usize,
        /// Number of frames in the set
        len: usize,
    },

    /// Compaction was asked to render an empty frame list.
    #[error("Cannot compact an empty frame list")]
    EmptyFrameList,
}

impl FrameError {
    /// Check if the error was raised while parsing an expression
    pub fn is_parse_error(&self) -> bool {
        matches!(self, FrameError::Parse { .. })
    }

    /// Check if the error reports a missing frame
    pub fn is_not_found(&self) -> bool {
        matches!(self, FrameError::NotFound { .. })
    }

    /// Check if the error reports an out of bounds index
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, FrameError::OutOfRange { .. })
    }

    /// The structured parse failure reason, if this is a parse error.
    pub fn parse_kind(&self) -> Option<&ParseErrorKind> {
        match self {
            FrameError::Parse { kind, .. } => Some(kind),
            _ => None,
        }
    }
}

/// Specific reasons a frame range token fails to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The part contains no characters at all (e.g. `1,,2` or an empty expression).
    Empty,

    /// A character that is not valid at this point of the token.
    UnexpectedCharacter {
        /// The offending character
        character: char,
        /// Byte offset of the character within the part
        offset: usize,
    },

    /// The part ended before the token was complete (e.g. `1-` or `1-10x`).
    UnexpectedEnd,

    /// A number does not fit into a 64 bit signed frame.
    NumberOverflow,

    /// A stepped range used a stride of zero.
    ZeroStride,
}

impl std::fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseErrorKind::Empty => write!(f, "empty frame range token"),
            ParseErrorKind::UnexpectedCharacter { character, offset } => {
                write!(f, "unexpected character {:?} at offset {}", character, offset)
            }
            ParseErrorKind::UnexpectedEnd => write!(f, "unexpected end of token"),
            ParseErrorKind::NumberOverflow => write!(f, "number out of range"),
            ParseErrorKind::ZeroStride => {
                write!(f, "invalid use of the number zero as a stride")
            }
        }
    }
}
