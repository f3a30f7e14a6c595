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

//! Compaction settings
//!
//! ```
//! use framix_frameset::{CompactConfig, compact};
//!
//! let config = CompactConfig::new().with_pad_width(4);
//! assert_eq!(compact(&[1, 2, 3], &config).unwrap(), "0001-0003");
//! ```

/// Settings controlling how [`compact`](crate::compact) renders a frame list.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CompactConfig {
    /// Sort the frames ascending before detecting runs
    pub sort: bool,
    /// Zero-fill width applied to every rendered frame number
    pub pad_width: usize,
}

impl CompactConfig {
    /// Sorted, unpadded output
    pub fn new() -> CompactConfig {
        CompactConfig {
            sort: true,
            pad_width: 0,
        }
    }

    /// Keep frames in the order given
    pub fn unsorted() -> CompactConfig {
        CompactConfig {
            sort: false,
            pad_width: 0,
        }
    }

    /// Enable or disable sorting
    pub fn with_sort(mut self, sort: bool) -> Self {
        self.sort = sort;
        self
    }

    /// Set the zero-fill width
    pub fn with_pad_width(mut self, pad_width: usize) -> Self {
        self.pad_width = pad_width;
        self
    }
}

impl Default for CompactConfig {
    fn default() -> Self {
        Self::new()
    }
}
