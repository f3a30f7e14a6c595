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

//! Padding characters and the zero-fill widths they stand for.

use crate::consts::{AT_PADDING_WIDTH, HASH_PADDING_WIDTH};
use crate::{SequenceError, SequenceResult};

/// Width contributed by a single padding character, or `None` if `ch` is
/// not a padding character.
pub fn padding_weight(ch: char) -> Option<usize> {
    match ch {
        '#' => Some(HASH_PADDING_WIDTH),
        '@' => Some(AT_PADDING_WIDTH),
        _ => None,
    }
}

/// Return `true` if `ch` is `#` or `@`.
pub fn is_padding_char(ch: char) -> bool {
    padding_weight(ch).is_some()
}

/// Total zero-fill width of a padding string.
///
/// # Errors
///
/// Returns [`SequenceError::InvalidPadding`] naming the first character that
/// is neither `#` nor `@`.
pub fn pad_width(padding: &str) -> SequenceResult<usize> {
    padding.chars().try_fold(0, |width, ch| {
        padding_weight(ch)
            .map(|weight| width + weight)
            .ok_or_else(|| SequenceError::InvalidPadding {
                padding: padding.to_string(),
                character: ch,
            })
    })
}

/// Padding characters that express a zero-fill `width`.
///
/// Widths divisible by four use `#`, anything else spells the width out in
/// `@`. A width of zero maps to a single `@`.
pub fn padding_chars(width: usize) -> String {
    if width == 0 {
        "@".to_string()
    } else if width % HASH_PADDING_WIDTH == 0 {
        "#".repeat(width / HASH_PADDING_WIDTH)
    } else {
        "@".repeat(width)
    }
}
