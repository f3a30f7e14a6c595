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

//! Grouping of frame files into sequences.
//!
//! The library never reads the filesystem itself. A [`SequenceSource`] lists
//! the frame files of a directory as [`SequenceEntry`] values and
//! [`group_entries`] folds them into one [`FileSequence`] per
//! `(directory, basename, extension)`.

use crate::descriptor::split_frame_path;
use crate::padding::padding_chars;
use crate::{FileSequence, SequenceError, SequenceResult};
use framix_frameset::frames_to_frame_range;
use std::collections::BTreeMap;
use tracing::{debug, instrument};

/// A single frame file, decomposed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SequenceEntry {
    /// Directory including its trailing separator, or empty
    pub directory: String,
    /// Everything between the directory and the frame number
    pub basename: String,
    /// The frame number exactly as written, e.g. `0042`
    pub frame: String,
    /// Extension including its leading `.`, or empty
    pub extension: String,
}

impl SequenceEntry {
    /// Create an entry from its parts.
    pub fn new(
        directory: impl Into<String>,
        basename: impl Into<String>,
        frame: impl Into<String>,
        extension: impl Into<String>,
    ) -> SequenceEntry {
        SequenceEntry {
            directory: directory.into(),
            basename: basename.into(),
            frame: frame.into(),
            extension: extension.into(),
        }
    }

    /// Decompose a path of the form `[dir/]base<frame>[.ext]`.
    ///
    /// Returns `None` if the path carries no frame number.
    ///
    /// ```
    /// use framix_fileseq::SequenceEntry;
    ///
    /// let entry = SequenceEntry::from_path("/renders/beauty.0042.exr").unwrap();
    /// assert_eq!(entry.basename, "beauty.");
    /// assert_eq!(entry.frame, "0042");
    /// ```
    pub fn from_path(path: &str) -> Option<SequenceEntry> {
        split_frame_path(path).map(|(directory, basename, frame, extension)| {
            SequenceEntry::new(directory, basename, frame, extension)
        })
    }
}

/// Lists the frame files of a directory.
pub trait SequenceSource {
    /// Return one entry per frame file in `directory`.
    fn entries(&self, directory: &str) -> std::io::Result<Vec<SequenceEntry>>;
}

impl<F> SequenceSource for F
where
    F: Fn(&str) -> std::io::Result<Vec<SequenceEntry>>,
{
    fn entries(&self, directory: &str) -> std::io::Result<Vec<SequenceEntry>> {
        self(directory)
    }
}

/// Frames gathered for one `(directory, basename, extension)` key.
struct Group {
    frames: Vec<i64>,
    width: usize,
}

/// Fold entries into one sequence per `(directory, basename, extension)`.
///
/// Each group's frames are compacted into a range expression and its padding
/// is derived from the width of the first frame number seen. Entries whose
/// frame is not an integer, and groups whose rebuilt descriptor does not
/// parse, are skipped. Sequences are returned ordered by directory, basename
/// and extension.
pub fn group_entries<I>(entries: I) -> Vec<FileSequence>
where
    I: IntoIterator<Item = SequenceEntry>,
{
    let mut groups: BTreeMap<(String, String, String), Group> = BTreeMap::new();

    for entry in entries {
        let frame = match entry.frame.parse::<i64>() {
            Ok(frame) => frame,
            Err(_) => {
                debug!(?entry, "Skipping entry with non-integer frame");
                continue;
            }
        };
        let width = entry.frame.len();
        groups
            .entry((entry.directory, entry.basename, entry.extension))
            .or_insert_with(|| Group {
                frames: Vec::new(),
                width,
            })
            .frames
            .push(frame);
    }

    groups
        .into_iter()
        .filter_map(|((directory, basename, extension), group)| {
            let range = frames_to_frame_range(&group.frames).ok()?;
            let descriptor = format!(
                "{}{}{}{}{}",
                directory,
                basename,
                range,
                padding_chars(group.width),
                extension
            );
            match FileSequence::parse(&descriptor) {
                Ok(sequence) => Some(sequence),
                Err(error) => {
                    debug!(%descriptor, %error, "Dropping sequence group");
                    None
                }
            }
        })
        .collect()
}

/// List `directory` through `source` and group its frame files.
///
/// # Errors
///
/// Returns [`SequenceError::Io`] if the source fails.
#[instrument(level = "debug", skip(source))]
pub fn find_sequences<S>(source: &S, directory: &str) -> SequenceResult<Vec<FileSequence>>
where
    S: SequenceSource + ?Sized,
{
    let sequences = group_entries(source.entries(directory)?);
    debug!(count = sequences.len(), "Found sequences");
    Ok(sequences)
}

/// Find the sequence on disk matching the basename of `pattern`.
///
/// `pattern` is parsed as a sequence descriptor and its directory is listed
/// through `source`. Only the basename is compared, so `seq/bar#.exr` finds
/// `seq/bar1-100#.exr` whatever its frames, padding or extension.
///
/// # Errors
///
/// Returns [`SequenceError::NotFound`] if no group matches, or the parse and
/// I/O errors of [`FileSequence::parse`] and [`find_sequences`].
pub fn find_sequence<S>(source: &S, pattern: &str) -> SequenceResult<FileSequence>
where
    S: SequenceSource + ?Sized,
{
    let wanted = FileSequence::parse(pattern)?;
    find_sequences(source, wanted.dirname())?
        .into_iter()
        .find(|sequence| sequence.basename() == wanted.basename())
        .ok_or_else(|| SequenceError::NotFound {
            pattern: pattern.to_string(),
        })
}
