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

/// Zero-fill width contributed by each `#` padding character.
///
/// `#` is the conventional four digit padding, so `file.#.exr` names
/// `file.0001.exr` and `##` names eight digit frames.
pub const HASH_PADDING_WIDTH: usize = 4;

/// Zero-fill width contributed by each `@` padding character.
pub const AT_PADDING_WIDTH: usize = 1;

/// Separator between the directory and the rest of a descriptor.
pub const PATH_SEPARATOR: char = '/';

/// Template used by [`FileSequence::format`](crate::FileSequence::format).
pub const DEFAULT_TEMPLATE: &str = "{basename}{range}{padding}{extension}";
