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

use crate::compact::{compact, compact_gaps, pad_frame_range};
use crate::parser::{FrameRangeParser, parse_token};
use crate::{CompactConfig, FrameError, FrameResult};
use std::collections::HashMap;
use tracing::instrument;

/// An ordered, duplicate-free set of frames parsed from a frame range expression.
///
/// Frames keep the order in which they first appear in the expression, read
/// left to right across its comma-separated parts. Membership and position
/// lookups are constant time.
///
/// A `FrameSet` is immutable once built. It remembers the expression it was
/// parsed from, which [`FrameSet::frame_range`] re-renders and [`Display`]
/// reproduces verbatim.
///
/// # Examples
///
/// ```
/// use framix_frameset::FrameSet;
///
/// let set = FrameSet::parse("1-5,3-7").unwrap();
/// assert_eq!(set.len(), 7);
/// assert_eq!(set.frames(), &[1, 2, 3, 4, 5, 6, 7]);
///
/// let set = FrameSet::parse("1-10x2").unwrap();
/// assert_eq!(set.frames(), &[1, 3, 5, 7, 9]);
/// assert_eq!(set.inverted_frame_range(0), "2-8x2");
/// ```
///
/// [`Display`]: std::fmt::Display
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameSet {
    /// The expression the set was built from.
    text: String,
    /// Frames in first-seen order.
    frames: Vec<i64>,
    /// Frame to position in `frames`. Always the same size as `frames`.
    positions: HashMap<i64, usize>,
}

impl FrameSet {
    /// Parse a comma-separated frame range expression.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::Parse`] naming the first part that is not a
    /// single frame, a closed range or a stepped range with a non-zero stride.
    #[instrument(level = "trace", skip_all, fields(expr = %text))]
    pub fn parse(text: &str) -> FrameResult<FrameSet> {
        let mut set = FrameSet {
            text: text.to_string(),
            frames: Vec::new(),
            positions: HashMap::new(),
        };
        for token in FrameRangeParser::new(text) {
            token?.for_each_frame(|frame| set.insert(frame));
        }
        Ok(set)
    }

    /// Build a normalized set from an explicit list of frames.
    ///
    /// The frames are sorted, deduplicated and compacted into an expression;
    /// an empty list yields an empty set with an empty expression.
    pub fn from_frames(frames: &[i64]) -> FrameSet {
        let mut sorted = frames.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        let text = compact(&sorted, &CompactConfig::default()).unwrap_or_default();
        FrameSet::from_sorted(text, sorted)
    }

    fn from_sorted(text: String, frames: Vec<i64>) -> FrameSet {
        let positions = frames
            .iter()
            .enumerate()
            .map(|(position, frame)| (*frame, position))
            .collect();
        FrameSet {
            text,
            frames,
            positions,
        }
    }

    /// Return `true` if `text` is a valid frame range expression.
    ///
    /// Padding characters (`#` and `@`) are ignored. An empty expression is
    /// not a frame range.
    pub fn is_frame_range(text: &str) -> bool {
        let stripped: String = text.chars().filter(|ch| !matches!(ch, '#' | '@')).collect();
        !stripped.is_empty() && stripped.split(',').all(|part| parse_token(part).is_ok())
    }

    fn insert(&mut self, frame: i64) {
        if !self.positions.contains_key(&frame) {
            self.positions.insert(frame, self.frames.len());
            self.frames.push(frame);
        }
    }

    /// Position of `frame` within the set.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::NotFound`] if the frame is not a member.
    pub fn index(&self, frame: i64) -> FrameResult<usize> {
        self.positions
            .get(&frame)
            .copied()
            .ok_or(FrameError::NotFound { frame })
    }

    /// The frame at position `index`.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::OutOfRange`] if `index` is not below [`FrameSet::len`].
    pub fn frame(&self, index: usize) -> FrameResult<i64> {
        self.frames
            .get(index)
            .copied()
            .ok_or(FrameError::OutOfRange {
                index,
                len: self.frames.len(),
            })
    }

    /// Return `true` if the set contains `frame`.
    pub fn has_frame(&self, frame: i64) -> bool {
        self.positions.contains_key(&frame)
    }

    /// The first frame in set order, which is not necessarily the smallest.
    pub fn start(&self) -> Option<i64> {
        self.frames.first().copied()
    }

    /// The last frame in set order, which is not necessarily the largest.
    pub fn end(&self) -> Option<i64> {
        self.frames.last().copied()
    }

    /// Number of frames in the set.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Return `true` if the set has no frames.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// The frames in set order.
    pub fn frames(&self) -> &[i64] {
        &self.frames
    }

    /// Iterate over the frames in set order.
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, i64>> {
        self.frames.iter().copied()
    }

    /// The expression the set was built from, with every frame number
    /// zero-filled to `pad_width`.
    pub fn frame_range(&self, pad_width: usize) -> String {
        pad_frame_range(&self.text, pad_width)
    }

    /// A range expression naming every frame missing between the smallest
    /// and largest member, zero-filled to `pad_width`.
    ///
    /// Returns an empty string when the set has no gaps.
    pub fn inverted_frame_range(&self, pad_width: usize) -> String {
        let mut sorted = self.frames.clone();
        sorted.sort_unstable();

        compact_gaps(&sorted, pad_width)
    }

    /// A new set holding the same frames, sorted ascending and described by
    /// the compacted expression.
    pub fn normalize(&self) -> FrameSet {
        FrameSet::from_frames(&self.frames)
    }
}

impl std::fmt::Display for FrameSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

impl std::str::FromStr for FrameSet {
    type Err = FrameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FrameSet::parse(s)
    }
}

impl TryFrom<&str> for FrameSet {
    type Error = FrameError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        FrameSet::parse(value)
    }
}

impl<'a> IntoIterator for &'a FrameSet {
    type Item = i64;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, i64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
