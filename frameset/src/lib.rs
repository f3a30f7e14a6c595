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

//! # Framix Frame Sets
//!
//! Parsing, querying and compaction of frame range expressions, the compact
//! notation used to name numbered sets of files such as rendered animation
//! frames.
//!
//! ## Grammar
//!
//! An expression is a comma-separated list of tokens:
//!
//! - `N` - a single frame, e.g. `7` or `-3`
//! - `start-end` - every frame from `start` to `end` inclusive, e.g. `1-100`
//! - `start-endxN` - every `N`th frame, e.g. `1-100x5`
//! - `start-endyN` - every frame `x` would skip, e.g. `1-100y5`
//! - `start-end:N` - `start-endxN`, then `xN-1`, down to `x1`, e.g. `1-100:4`
//!
//! ## Core Components
//!
//! - [`FrameSet`] - an ordered, duplicate-free set of frames built from an expression
//! - [`FrameRangeParser`] - the token scanner behind [`FrameSet::parse`]
//! - [`compact`] - the inverse: renders a frame list as a minimal expression
//! - [`pad_frame_range`] - zero-fills the frame numbers of an expression
//!
//! ## Usage Example
//!
//! ```
//! use framix_frameset::{FrameSet, frames_to_frame_range};
//!
//! let set = FrameSet::parse("1-5,10-20x5").unwrap();
//! assert_eq!(set.frames(), &[1, 2, 3, 4, 5, 10, 15, 20]);
//! assert_eq!(set.frame_range(4), "0001-0005,0010-0020x5");
//!
//! assert_eq!(frames_to_frame_range(&[1, 2, 3, 7]).unwrap(), "1-3,7");
//! ```

mod compact;
mod config;
mod frameset;
mod parser;
mod result;
mod token;

pub use self::compact::{
    RangeRun, compact, detect_runs, frames_to_frame_range, pad_frame, pad_frame_range,
};
pub use self::config::CompactConfig;
pub use self::frameset::FrameSet;
pub use self::parser::{FrameRangeParser, parse_token};
pub use self::result::{FrameError, FrameResult, ParseErrorKind};
pub use self::token::{FrameToken, Modifier};
