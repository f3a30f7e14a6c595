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

use crate::consts::DEFAULT_TEMPLATE;
use crate::descriptor::Descriptor;
use crate::padding::pad_width;
use crate::template::{TemplateField, render};
use crate::{SequenceError, SequenceResult};
use framix_frameset::{FrameSet, pad_frame};
use tracing::instrument;

/// A value to splice into a frame path.
///
/// Numbers, and strings that parse as numbers, are zero-filled to the
/// sequence's padding width. Any other string passes through untouched, which
/// lets callers render placeholder paths such as `file.#.exr`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FrameValue<'a> {
    /// A frame number
    Number(i64),
    /// A literal token, zero-filled only if it parses as a number
    Token(&'a str),
}

impl From<i64> for FrameValue<'_> {
    fn from(value: i64) -> Self {
        FrameValue::Number(value)
    }
}

impl From<i32> for FrameValue<'_> {
    fn from(value: i32) -> Self {
        FrameValue::Number(i64::from(value))
    }
}

impl From<u32> for FrameValue<'_> {
    fn from(value: u32) -> Self {
        FrameValue::Number(i64::from(value))
    }
}

impl<'a> From<&'a str> for FrameValue<'a> {
    fn from(value: &'a str) -> Self {
        FrameValue::Token(value)
    }
}

impl<'a> From<&'a String> for FrameValue<'a> {
    fn from(value: &'a String) -> Self {
        FrameValue::Token(value.as_str())
    }
}

/// An ordered sequence of numbered files described by a single string.
///
/// A descriptor has the shape `[dir/]base[range][padding][.ext]`:
///
/// ```text
/// /path/to/file.1-100#.exr
/// ^^^^^^^^^ directory
///          ^^^^^ basename
///               ^^^^^ frame range
///                    ^ padding (# = 4 digits, @ = 1 digit)
///                     ^^^^ extension
/// ```
///
/// Every field can be replaced independently through its setter. The only
/// derived value is the zero-fill width, which [`FileSequence::set_padding`]
/// recomputes; the frame range and the padding are never checked against
/// each other.
///
/// # Examples
///
/// ```
/// use framix_fileseq::FileSequence;
///
/// let seq = FileSequence::parse("/path/to/file.1-5#.exr").unwrap();
/// assert_eq!(seq.frame(3), "/path/to/file.0003.exr");
/// assert_eq!(seq.frame("#"), "/path/to/file.#.exr");
/// assert_eq!(seq.len(), 5);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileSequence {
    dirname: String,
    basename: String,
    frame_set: Option<FrameSet>,
    padding: String,
    pad_width: usize,
    extension: String,
}

impl FileSequence {
    /// Decompose a sequence descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::Parse`] if the descriptor does not have the
    /// expected shape, or [`SequenceError::Frame`] if its frame range is
    /// malformed.
    #[instrument(level = "trace", skip_all, fields(descriptor = %text))]
    pub fn parse(text: &str) -> SequenceResult<FileSequence> {
        let descriptor = Descriptor::parse(text).map_err(|position| SequenceError::Parse {
            input: text.to_string(),
            position,
            reason: "line breaks are not allowed in a descriptor".to_string(),
        })?;

        let frame_set = if descriptor.range.is_empty() {
            None
        } else {
            Some(FrameSet::parse(descriptor.range)?)
        };

        Ok(FileSequence {
            dirname: descriptor.directory.to_string(),
            basename: descriptor.basename.to_string(),
            frame_set,
            padding: descriptor.padding.to_string(),
            pad_width: pad_width(descriptor.padding)?,
            extension: descriptor.extension.to_string(),
        })
    }

    /// The directory, including its trailing separator. Empty if none.
    pub fn dirname(&self) -> &str {
        &self.dirname
    }

    /// The basename.
    pub fn basename(&self) -> &str {
        &self.basename
    }

    /// The padding characters.
    pub fn padding(&self) -> &str {
        &self.padding
    }

    /// The zero-fill width the padding characters stand for.
    pub fn pad_width(&self) -> usize {
        self.pad_width
    }

    /// The extension, including its leading `.`. Empty if none.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// The frames of the sequence, if a frame range was given.
    pub fn frame_set(&self) -> Option<&FrameSet> {
        self.frame_set.as_ref()
    }

    /// The first frame.
    pub fn start(&self) -> Option<i64> {
        self.frame_set.as_ref().and_then(FrameSet::start)
    }

    /// The last frame.
    pub fn end(&self) -> Option<i64> {
        self.frame_set.as_ref().and_then(FrameSet::end)
    }

    /// Number of frames in the sequence.
    pub fn len(&self) -> usize {
        self.frame_set.as_ref().map_or(0, FrameSet::len)
    }

    /// Return `true` if the sequence names no frames.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The frame range zero-filled to the padding width.
    pub fn frame_range(&self) -> Option<String> {
        self.frame_set
            .as_ref()
            .map(|set| set.frame_range(self.pad_width))
    }

    /// The frames missing from the range, zero-filled to the padding width.
    pub fn inverted_frame_range(&self) -> Option<String> {
        self.frame_set
            .as_ref()
            .map(|set| set.inverted_frame_range(self.pad_width))
    }

    /// The path of a single frame.
    pub fn frame<'a>(&self, value: impl Into<FrameValue<'a>>) -> String {
        let frame = match value.into() {
            FrameValue::Number(frame) => pad_frame(frame, self.pad_width),
            FrameValue::Token(token) => match token.parse::<i64>() {
                Ok(frame) => pad_frame(frame, self.pad_width),
                Err(_) => token.to_string(),
            },
        };
        let mut path = String::with_capacity(
            self.dirname.len() + self.basename.len() + frame.len() + self.extension.len(),
        );
        path.push_str(&self.dirname);
        path.push_str(&self.basename);
        path.push_str(&frame);
        path.push_str(&self.extension);
        path
    }

    /// The path of the frame at position `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::MissingFrameSet`] if the sequence has no frame
    /// range, or an out of range [`SequenceError::Frame`] error.
    pub fn index(&self, index: usize) -> SequenceResult<String> {
        let set = self
            .frame_set
            .as_ref()
            .ok_or(SequenceError::MissingFrameSet)?;
        Ok(self.frame(set.frame(index)?))
    }

    /// Iterate over the path of every frame in sequence order.
    pub fn iter(&self) -> impl Iterator<Item = String> + '_ {
        self.frame_set
            .iter()
            .flat_map(FrameSet::iter)
            .map(|frame| self.frame(frame))
    }

    /// Render the sequence through a template of `{field}` placeholders.
    ///
    /// Fields without a value, such as `{start}` on a sequence with no frame
    /// range, render as the empty string.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::Template`] for unknown field names and
    /// unbalanced braces.
    pub fn render_template(&self, template: &str) -> SequenceResult<String> {
        render(template, |field| self.field(field))
    }

    /// Render the sequence through [`DEFAULT_TEMPLATE`], without its directory.
    pub fn format(&self) -> String {
        render(DEFAULT_TEMPLATE, |field| self.field(field)).unwrap_or_default()
    }

    fn field(&self, field: TemplateField) -> String {
        let frame = |frame: Option<i64>| frame.map(|f| f.to_string()).unwrap_or_default();
        match field {
            TemplateField::Basename => self.basename.clone(),
            TemplateField::Extension => self.extension.clone(),
            TemplateField::Start => frame(self.start()),
            TemplateField::End => frame(self.end()),
            TemplateField::Length => self.len().to_string(),
            TemplateField::Padding => self.padding.clone(),
            TemplateField::Range => self.frame_range().unwrap_or_default(),
            TemplateField::Inverted => self.inverted_frame_range().unwrap_or_default(),
            TemplateField::Dirname => self.dirname.clone(),
        }
    }

    /// Split the sequence into one sequence per comma-separated part of its
    /// frame range, each sharing this sequence's directory, basename, padding
    /// and extension.
    ///
    /// A sequence without a frame range splits into a copy of itself.
    pub fn split(&self) -> SequenceResult<Vec<FileSequence>> {
        let Some(range) = self.frame_range() else {
            return Ok(vec![self.clone()]);
        };
        range
            .split(',')
            .map(|part| {
                FileSequence::parse(&format!(
                    "{}{}{}{}{}",
                    self.dirname, self.basename, part, self.padding, self.extension
                ))
            })
            .collect()
    }

    /// Replace the directory.
    pub fn set_dirname(&mut self, dirname: impl Into<String>) {
        self.dirname = dirname.into();
    }

    /// Replace the basename.
    pub fn set_basename(&mut self, basename: impl Into<String>) {
        self.basename = basename.into();
    }

    /// Replace the padding characters and recompute the zero-fill width.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidPadding`] and leaves the sequence
    /// unchanged if `padding` holds anything but `#` and `@`.
    pub fn set_padding(&mut self, padding: &str) -> SequenceResult<()> {
        self.pad_width = pad_width(padding)?;
        self.padding = padding.to_string();
        Ok(())
    }

    /// Replace the extension, adding a leading `.` if it is missing.
    pub fn set_extension(&mut self, extension: &str) {
        self.extension = if extension.is_empty() || extension.starts_with('.') {
            extension.to_string()
        } else {
            format!(".{}", extension)
        };
    }

    /// Replace the frame set.
    pub fn set_frame_set(&mut self, frame_set: Option<FrameSet>) {
        self.frame_set = frame_set;
    }

    /// Replace the frame set by parsing a frame range expression.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::Frame`] and leaves the sequence unchanged if
    /// the expression is malformed.
    pub fn set_frame_range(&mut self, range: &str) -> SequenceResult<()> {
        self.frame_set = Some(FrameSet::parse(range)?);
        Ok(())
    }
}

impl std::fmt::Display for FileSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.dirname)?;
        f.write_str(&self.basename)?;
        if let Some(set) = &self.frame_set {
            write!(f, "{}", set)?;
        }
        f.write_str(&self.padding)?;
        f.write_str(&self.extension)
    }
}

impl std::str::FromStr for FileSequence {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FileSequence::parse(s)
    }
}

impl TryFrom<&str> for FileSequence {
    type Error = SequenceError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        FileSequence::parse(value)
    }
}
