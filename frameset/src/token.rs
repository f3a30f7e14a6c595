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

/// Modifier applied to a stepped range token.
///
/// Frame range expressions support three stepped forms, each written as
/// `start-end<modifier>chunk`:
///
/// | Form       | Modifier               | Frames                                              |
/// |------------|------------------------|-----------------------------------------------------|
/// | `1-10x3`   | [`Modifier::Step`]     | every third frame: `1,4,7,10`                       |
/// | `1-10y3`   | [`Modifier::Complement`] | everything `x` would skip: `2,3,5,6,8,9`          |
/// | `1-10:3`   | [`Modifier::Fill`]     | `1-10x3`, then `1-10x2`, then `1-10`, deduplicated  |
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Modifier {
    /// `x` - every `chunk`-th frame.
    Step,
    /// `:` - staggered fill, coarsest stride first.
    Fill,
    /// `y` - every frame not on the `chunk` stride.
    Complement,
}

impl Modifier {
    /// Map a modifier character to its modifier.
    pub fn from_char(ch: char) -> Option<Modifier> {
        match ch {
            'x' => Some(Modifier::Step),
            ':' => Some(Modifier::Fill),
            'y' => Some(Modifier::Complement),
            _ => None,
        }
    }

    /// The character used to write this modifier.
    pub fn as_char(&self) -> char {
        match self {
            Modifier::Step => 'x',
            Modifier::Fill => ':',
            Modifier::Complement => 'y',
        }
    }
}

impl std::fmt::Display for Modifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A single parsed atom of a frame range expression.
///
/// A token is either a single frame (`start == end`, no modifier), a closed
/// range, or a stepped range. `start` and `end` may appear in either order;
/// a token whose `start` is greater than its `end` walks downward.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FrameToken {
    /// First frame named by the token
    pub start: i64,
    /// Last frame named by the token
    pub end: i64,
    /// Stepped range modifier, if any
    pub modifier: Option<Modifier>,
    /// Stride of a stepped range. Always at least `1`.
    pub chunk: u64,
}

impl FrameToken {
    /// A token naming exactly one frame.
    pub fn single(frame: i64) -> FrameToken {
        FrameToken {
            start: frame,
            end: frame,
            modifier: None,
            chunk: 1,
        }
    }

    /// A token naming every frame from `start` to `end` inclusive.
    pub fn range(start: i64, end: i64) -> FrameToken {
        FrameToken {
            start,
            end,
            modifier: None,
            chunk: 1,
        }
    }

    /// A stepped token. Returns `None` if `chunk` is zero.
    pub fn stepped(start: i64, end: i64, modifier: Modifier, chunk: u64) -> Option<FrameToken> {
        if chunk == 0 {
            return None;
        }
        Some(FrameToken {
            start,
            end,
            modifier: Some(modifier),
            chunk,
        })
    }

    /// Enumerate the frames of this token in natural order, handing each one to
    /// `sink`. Frames may repeat across passes of a [`Modifier::Fill`] token;
    /// deduplication is the caller's responsibility.
    pub fn for_each_frame<F>(&self, mut sink: F)
    where
        F: FnMut(i64),
    {
        match self.modifier {
            None => walk(self.start, self.end, 1).for_each(&mut sink),
            Some(Modifier::Step) => walk(self.start, self.end, self.chunk).for_each(&mut sink),
            Some(Modifier::Fill) => {
                // Every stride wider than the span only yields `start`.
                let widest = self.chunk.min(self.start.abs_diff(self.end).max(1));
                if widest < self.chunk {
                    sink(self.start);
                }
                for stride in (1..=widest).rev() {
                    walk(self.start, self.end, stride).for_each(&mut sink);
                }
            }
            Some(Modifier::Complement) => {
                let chunk = self.chunk as u128;
                walk(self.start, self.end, 1)
                    .filter(|frame| (*frame as i128 - self.start as i128).unsigned_abs() % chunk != 0)
                    .for_each(&mut sink);
            }
        }
    }

    /// Collect the frames of this token in natural order.
    pub fn frames(&self) -> Vec<i64> {
        let mut frames = Vec::new();
        self.for_each_frame(|frame| frames.push(frame));
        frames
    }
}

impl std::fmt::Display for FrameToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.modifier {
            None if self.start == self.end => write!(f, "{}", self.start),
            None => write!(f, "{}-{}", self.start, self.end),
            Some(modifier) => write!(f, "{}-{}{}{}", self.start, self.end, modifier, self.chunk),
        }
    }
}

/// Walk from `start` toward `end` inclusive in increments of `stride`.
fn walk(start: i64, end: i64, stride: u64) -> Box<dyn Iterator<Item = i64>> {
    let stride = usize::try_from(stride).unwrap_or(usize::MAX);
    if start <= end {
        Box::new((start..=end).step_by(stride))
    } else {
        Box::new((end..=start).rev().step_by(stride))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_and_range() {
        assert_eq!(FrameToken::single(5).frames(), vec![5]);
        assert_eq!(FrameToken::range(1, 5).frames(), vec![1, 2, 3, 4, 5]);
        assert_eq!(FrameToken::range(-2, 1).frames(), vec![-2, -1, 0, 1]);
    }

    #[test]
    fn test_descending_range() {
        assert_eq!(FrameToken::range(5, 1).frames(), vec![5, 4, 3, 2, 1]);
        let token = FrameToken::stepped(10, 1, Modifier::Step, 3).unwrap();
        assert_eq!(token.frames(), vec![10, 7, 4, 1]);
    }

    #[test]
    fn test_step_modifier() {
        let token = FrameToken::stepped(1, 10, Modifier::Step, 2).unwrap();
        assert_eq!(token.frames(), vec![1, 3, 5, 7, 9]);
    }

    #[test]
    fn test_complement_modifier() {
        let token = FrameToken::stepped(1, 10, Modifier::Complement, 3).unwrap();
        assert_eq!(token.frames(), vec![2, 3, 5, 6, 8, 9]);

        let token = FrameToken::stepped(1, 5, Modifier::Complement, 1).unwrap();
        assert!(token.frames().is_empty());
    }

    #[test]
    fn test_fill_modifier_passes() {
        let token = FrameToken::stepped(1, 5, Modifier::Fill, 2).unwrap();
        // Raw passes, duplicates included: x2 then x1.
        assert_eq!(token.frames(), vec![1, 3, 5, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_fill_modifier_wider_than_span() {
        let token = FrameToken::stepped(1, 3, Modifier::Fill, 10_000_000_000_000).unwrap();
        assert_eq!(token.frames(), vec![1, 1, 3, 1, 2, 3]);

        let token = FrameToken::stepped(7, 7, Modifier::Fill, u64::MAX).unwrap();
        assert_eq!(token.frames(), vec![7, 7]);
    }

    #[test]
    fn test_zero_chunk_rejected() {
        assert!(FrameToken::stepped(1, 10, Modifier::Step, 0).is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(FrameToken::single(-3).to_string(), "-3");
        assert_eq!(FrameToken::range(1, 5).to_string(), "1-5");
        let token = FrameToken::stepped(1, 100, Modifier::Fill, 4).unwrap();
        assert_eq!(token.to_string(), "1-100:4");
    }

    #[test]
    fn test_modifier_chars() {
        for ch in ['x', 'y', ':'] {
            assert_eq!(Modifier::from_char(ch).unwrap().as_char(), ch);
        }
        assert_eq!(Modifier::from_char('z'), None);
    }
}
