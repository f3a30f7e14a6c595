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

//! Decomposition of sequence descriptors and frame file paths.
//!
//! Both grammars share the same outer shape:
//!
//! ```text
//! [directory/] basename <body> [.extension]
//! ```
//!
//! The directory is everything up to and including the last `/`. The basename
//! is the shortest non-empty prefix of the remainder after which the body and
//! an optional extension consume the rest exactly. The extension starts at a
//! `.` and contains no further `.`.

use crate::consts::PATH_SEPARATOR;
use crate::padding::is_padding_char;
use tracing::trace;

/// The parts of a `[dir/]base[range][padding][.ext]` descriptor.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Descriptor<'a> {
    pub directory: &'a str,
    pub basename: &'a str,
    pub range: &'a str,
    pub padding: &'a str,
    pub extension: &'a str,
}

impl<'a> Descriptor<'a> {
    /// Decompose a sequence descriptor.
    ///
    /// Fails with the byte offset of the first line break, the only input
    /// that cannot be decomposed.
    pub fn parse(text: &'a str) -> Result<Descriptor<'a>, usize> {
        if let Some(position) = text.find('\n') {
            return Err(position);
        }
        let (directory, rest) = split_directory(text);

        let (basename, (range, padding, extension)) = shortest_basename(rest, |tail| {
            let (range, tail) = take_while(tail, is_range_char);
            let (padding, tail) = take_while(tail, is_padding_char);
            extension(tail).map(|extension| (range, padding, extension))
        })
        .unwrap_or(("", ("", "", "")));

        let descriptor = Descriptor {
            directory,
            basename,
            range,
            padding,
            extension,
        };
        trace!(?descriptor, "Decomposed sequence descriptor");
        Ok(descriptor)
    }
}

/// Decompose a frame file path into `(directory, basename, frame, extension)`.
///
/// The frame is a non-empty run of digits and `-`. Returns `None` for paths
/// that carry no frame number.
pub(crate) fn split_frame_path(path: &str) -> Option<(&str, &str, &str, &str)> {
    if path.contains('\n') {
        return None;
    }
    let (directory, rest) = split_directory(path);
    let (basename, (frame, extension)) = shortest_basename(rest, |tail| {
        let (frame, tail) = take_while(tail, is_frame_char);
        if frame.is_empty() {
            return None;
        }
        extension(tail).map(|extension| (frame, extension))
    })?;
    Some((directory, basename, frame, extension))
}

fn is_range_char(ch: char) -> bool {
    matches!(ch, '0'..='9' | '-' | ',' | ':' | 'x' | 'y')
}

fn is_frame_char(ch: char) -> bool {
    matches!(ch, '0'..='9' | '-')
}

/// Split everything up to and including the last separator off `text`.
fn split_directory(text: &str) -> (&str, &str) {
    match text.rfind(PATH_SEPARATOR) {
        Some(at) => text.split_at(at + PATH_SEPARATOR.len_utf8()),
        None => ("", text),
    }
}

/// Find the shortest non-empty prefix of `rest` whose tail satisfies `matcher`.
fn shortest_basename<'a, T>(
    rest: &'a str,
    mut matcher: impl FnMut(&'a str) -> Option<T>,
) -> Option<(&'a str, T)> {
    rest.char_indices()
        .map(|(at, _)| at)
        .skip(1)
        .chain(std::iter::once(rest.len()))
        .filter(|at| *at > 0)
        .find_map(|at| {
            let (basename, tail) = rest.split_at(at);
            matcher(tail).map(|parts| (basename, parts))
        })
}

fn take_while(text: &str, predicate: impl Fn(char) -> bool) -> (&str, &str) {
    let end = text.find(|ch: char| !predicate(ch)).unwrap_or(text.len());
    text.split_at(end)
}

/// Accept an empty tail or a `.` followed by anything but another `.`.
fn extension(tail: &str) -> Option<&str> {
    if tail.is_empty() || (tail.starts_with('.') && !tail[1..].contains('.')) {
        Some(tail)
    } else {
        None
    }
}
