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

//! # Framix File Sequences
//!
//! Decomposition, rendering and grouping of numbered file sequences such as
//! `/renders/beauty.1-100#.exr`.
//!
//! ## Descriptor Grammar
//!
//! ```text
//! [directory/] basename [frame range] [padding] [.extension]
//! ```
//!
//! - The directory runs up to and including the last `/`.
//! - The basename is the shortest prefix that lets the rest of the descriptor fit.
//! - The frame range is any expression accepted by [`FrameSet::parse`].
//! - Padding is a run of `#` (four digits each) and `@` (one digit each).
//! - The extension starts at the last `.`.
//!
//! ## Core Components
//!
//! - [`FileSequence`] - a parsed descriptor that renders frame paths
//! - [`TemplateField`] - the `{field}` placeholders of [`FileSequence::render_template`]
//! - [`SequenceSource`] - lists frame files; the library never reads the filesystem
//! - [`group_entries`] - folds frame files into sequences
//!
//! ## Usage Example
//!
//! ```
//! use framix_fileseq::{FileSequence, SequenceEntry, group_entries};
//!
//! let seq = FileSequence::parse("/renders/beauty.1-3#.exr").unwrap();
//! let paths: Vec<String> = seq.iter().collect();
//! assert_eq!(paths[0], "/renders/beauty.0001.exr");
//!
//! let found = group_entries(
//!     ["a.0001.exr", "a.0002.exr", "a.0003.exr"]
//!         .iter()
//!         .filter_map(|path| SequenceEntry::from_path(path)),
//! );
//! assert_eq!(found[0].to_string(), "a.1-3#.exr");
//! ```

mod consts;
mod descriptor;
mod padding;
mod resolver;
mod result;
mod sequence;
mod template;

pub use self::consts::{AT_PADDING_WIDTH, DEFAULT_TEMPLATE, HASH_PADDING_WIDTH, PATH_SEPARATOR};
pub use self::padding::{is_padding_char, pad_width, padding_chars, padding_weight};
pub use self::resolver::{
    SequenceEntry, SequenceSource, find_sequence, find_sequences, group_entries,
};
pub use self::result::{SequenceError, SequenceResult, TemplateErrorKind};
pub use self::sequence::{FileSequence, FrameValue};
pub use self::template::TemplateField;
pub use framix_frameset::{FrameError, FrameSet, ParseErrorKind};
