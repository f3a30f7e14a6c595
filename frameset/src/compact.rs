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

//! Conversion of explicit frame lists back into compact range expressions.
//!
//! The compactor scans a frame list for maximal arithmetic progressions
//! ([`RangeRun`]s) and renders each one in the shortest unambiguous form:
//!
//! | Run                       | Rendered as   |
//! |---------------------------|---------------|
//! | one frame                 | `7`           |
//! | two frames                | `1,2` / `1,5` |
//! | three or more, stride 1   | `1-5`         |
//! | three or more, stride > 1 | `1-9x2`       |
//!
//! A two frame run is never rendered with a dash, so `1,2` cannot be mistaken
//! for the start of a longer contiguous range.

use crate::{CompactConfig, FrameError, FrameResult};
use std::collections::HashSet;
use std::fmt::Write;

/// A maximal arithmetic progression found while scanning a frame list.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RangeRun {
    /// First frame of the run
    pub start: i64,
    /// Last frame of the run
    pub end: i64,
    /// Difference between consecutive frames. Negative for descending runs.
    pub step: i64,
    /// Number of frames in the run
    pub count: usize,
}

impl RangeRun {
    fn single(frame: i64) -> RangeRun {
        RangeRun {
            start: frame,
            end: frame,
            step: 1,
            count: 1,
        }
    }

    /// Render the run, zero-filling each frame number to `pad_width`.
    pub fn render(&self, out: &mut String, pad_width: usize) {
        let start = pad_frame(self.start, pad_width);
        let end = pad_frame(self.end, pad_width);
        // Writing into a String cannot fail.
        let _ = match self.count {
            1 => write!(out, "{}", start),
            2 => write!(out, "{},{}", start, end),
            _ if self.step.unsigned_abs() == 1 => write!(out, "{}-{}", start, end),
            _ => write!(out, "{}-{}x{}", start, end, self.step.unsigned_abs()),
        };
    }
}

/// Zero-fill `frame` to `width` characters, counting a minus sign toward the width.
pub fn pad_frame(frame: i64, width: usize) -> String {
    format!("{:0width$}", frame, width = width)
}

/// Split a deduplicated frame list into runs.
///
/// A two frame run that is immediately followed by a stride 1 continuation is
/// split instead: its first frame is emitted alone and scanning restarts at
/// its second frame, so `[1, 3, 4, 5]` becomes `1` and `3-5` rather than
/// `1,3` and `4,5`. Neighbours whose difference overflows `i64` never share a
/// run.
pub fn detect_runs(frames: &[i64]) -> Vec<RangeRun> {
    runs_of(frames)
}

/// Random access to a frame list that may not be materialized.
trait FrameSource {
    fn len(&self) -> usize;

    fn get(&self, index: usize) -> i64;

    /// Last index of the stride 1 stretch that begins at `index`.
    fn contiguous_end(&self, index: usize) -> usize;

    fn step(&self, index: usize) -> Option<i64> {
        self.get(index + 1).checked_sub(self.get(index))
    }
}

impl FrameSource for [i64] {
    fn len(&self) -> usize {
        <[i64]>::len(self)
    }

    fn get(&self, index: usize) -> i64 {
        self[index]
    }

    fn contiguous_end(&self, index: usize) -> usize {
        let mut last = index;
        while last + 1 < <[i64]>::len(self) && self.step(last) == Some(1) {
            last += 1;
        }
        last
    }
}

/// Sorted, disjoint, non-adjacent inclusive stretches of frames.
struct Stretches {
    bounds: Vec<(i64, i64)>,
    /// Index of the first frame of each stretch.
    offsets: Vec<usize>,
    len: usize,
}

impl Stretches {
    fn new(bounds: Vec<(i64, i64)>) -> Stretches {
        let mut offsets = Vec::with_capacity(bounds.len());
        let mut len = 0usize;
        for (low, high) in &bounds {
            offsets.push(len);
            let count = usize::try_from(high.abs_diff(*low)).unwrap_or(usize::MAX);
            len = len.saturating_add(count).saturating_add(1);
        }
        Stretches {
            bounds,
            offsets,
            len,
        }
    }

    fn locate(&self, index: usize) -> usize {
        self.offsets.partition_point(|offset| *offset <= index) - 1
    }
}

impl FrameSource for Stretches {
    fn len(&self) -> usize {
        self.len
    }

    fn get(&self, index: usize) -> i64 {
        let stretch = self.locate(index);
        let (low, high) = self.bounds[stretch];
        low.checked_add_unsigned((index - self.offsets[stretch]) as u64)
            .unwrap_or(high)
    }

    fn contiguous_end(&self, index: usize) -> usize {
        let stretch = self.locate(index);
        let (low, high) = self.bounds[stretch];
        let count = usize::try_from(high.abs_diff(low)).unwrap_or(usize::MAX);
        self.offsets[stretch].saturating_add(count)
    }
}

fn runs_of<S: FrameSource + ?Sized>(frames: &S) -> Vec<RangeRun> {
    let len = frames.len();
    let mut runs = Vec::new();
    let mut i = 0;

    while i < len {
        let start = frames.get(i);
        let Some(step) = (i + 1 < len).then(|| frames.step(i)).flatten() else {
            runs.push(RangeRun::single(start));
            i += 1;
            continue;
        };

        let last = if step == 1 {
            frames.contiguous_end(i)
        } else {
            let mut last = i + 1;
            while last + 1 < len && frames.step(last) == Some(step) {
                last += 1;
            }
            last
        };

        let count = last - i + 1;
        let next_is_contiguous = last + 1 < len && frames.step(last) == Some(1);
        if count == 2 && next_is_contiguous {
            runs.push(RangeRun::single(start));
            i = last;
        } else {
            runs.push(RangeRun {
                start,
                end: frames.get(last),
                step,
                count,
            });
            i = last + 1;
        }
    }

    runs
}

fn render_runs(runs: &[RangeRun], pad_width: usize) -> String {
    let mut out = String::new();
    for (index, run) in runs.iter().enumerate() {
        if index > 0 {
            out.push(',');
        }
        run.render(&mut out, pad_width);
    }
    out
}

/// Compact the frames strictly between each pair of neighbours in `sorted`
/// without enumerating them.
///
/// Returns an empty string if `sorted` has no gaps.
pub(crate) fn compact_gaps(sorted: &[i64], pad_width: usize) -> String {
    let bounds = sorted
        .windows(2)
        .filter(|pair| pair[1] > pair[0] && pair[1] - 1 > pair[0])
        .map(|pair| (pair[0] + 1, pair[1] - 1))
        .collect();
    render_runs(&runs_of(&Stretches::new(bounds)), pad_width)
}

/// Compact a list of frames into a minimal comma-separated range expression.
///
/// Duplicate frames are dropped, keeping the first occurrence. When
/// `config.sort` is set the frames are sorted ascending first.
///
/// # Errors
///
/// Returns [`FrameError::EmptyFrameList`] if `frames` is empty.
///
/// ```
/// use framix_frameset::{CompactConfig, compact};
///
/// let config = CompactConfig::default();
/// assert_eq!(compact(&[1, 2, 3, 4, 5], &config).unwrap(), "1-5");
/// assert_eq!(compact(&[1, 3, 5, 7], &config).unwrap(), "1-7x2");
/// ```
pub fn compact(frames: &[i64], config: &CompactConfig) -> FrameResult<String> {
    match frames {
        [] => return Err(FrameError::EmptyFrameList),
        [frame] => return Ok(pad_frame(*frame, config.pad_width)),
        _ => {}
    }

    let frames = if config.sort {
        let mut sorted = frames.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        sorted
    } else {
        let mut seen = HashSet::with_capacity(frames.len());
        frames
            .iter()
            .copied()
            .filter(|frame| seen.insert(*frame))
            .collect()
    };

    Ok(render_runs(&detect_runs(&frames), config.pad_width))
}

/// Compact with the default settings: sorted and unpadded.
pub fn frames_to_frame_range(frames: &[i64]) -> FrameResult<String> {
    compact(frames, &CompactConfig::default())
}

/// Zero-fill the frame numbers of a range expression to `width`.
///
/// This is a literal text transform: the start and end number of every
/// comma-separated part are zero-filled in place, numbers already at least
/// `width` characters long are left as written, and modifiers and strides
/// pass through untouched.
///
/// ```
/// use framix_frameset::pad_frame_range;
///
/// assert_eq!(pad_frame_range("1-5,10", 4), "0001-0005,0010");
/// assert_eq!(pad_frame_range("-5-5x2", 3), "-05-005x2");
/// ```
pub fn pad_frame_range(text: &str, width: usize) -> String {
    let mut out = String::with_capacity(text.len().max(width));
    for (index, part) in text.split(',').enumerate() {
        if index > 0 {
            out.push(',');
        }
        let (start, rest) = split_number(part);
        zfill_into(&mut out, start, width);
        match rest.strip_prefix('-') {
            Some(rest) if !start.is_empty() => {
                let (end, tail) = split_number(rest);
                out.push('-');
                zfill_into(&mut out, end, width);
                out.push_str(tail);
            }
            _ => out.push_str(rest),
        }
    }
    out
}

/// Split a leading optionally signed run of digits off `text`.
fn split_number(text: &str) -> (&str, &str) {
    let sign = usize::from(text.starts_with('-'));
    let digits = text[sign..]
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(text.len() - sign);
    if digits == 0 {
        ("", text)
    } else {
        text.split_at(sign + digits)
    }
}

fn zfill_into(out: &mut String, number: &str, width: usize) {
    let (sign, digits) = match number.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", number),
    };
    out.push_str(sign);
    for _ in number.len()..width {
        out.push('0');
    }
    out.push_str(digits);
}
