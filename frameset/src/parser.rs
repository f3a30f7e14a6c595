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

use crate::token::{FrameToken, Modifier};
use crate::{FrameError, FrameResult, ParseErrorKind};
use tracing::trace;

/// Internal state machine states for the frame token scanner.
///
/// A token is one of three shapes, scanned left to right:
///
/// ```text
/// N                   Start -> [StartSign] -> StartDigits
/// start-end           ... StartDigits -> Dash -> [EndSign] -> EndDigits
/// start-end{x|y|:}c   ... EndDigits -> Modifier -> ChunkDigits
/// ```
///
/// Each state knows which characters may follow; anything else is rejected at
/// the position it occurs.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum State {
    /// Nothing consumed yet. Accepts a sign or a digit.
    Start,
    /// A leading minus sign on the start frame. Requires a digit.
    StartSign,
    /// Inside the digits of the start frame.
    ///
    /// A `-` moves on to the end frame; end of input yields a single frame.
    StartDigits,
    /// The range separator. Accepts a sign or a digit of the end frame.
    Dash,
    /// A minus sign on the end frame. Requires a digit.
    EndSign,
    /// Inside the digits of the end frame.
    ///
    /// A modifier character moves on to the stride; end of input yields a
    /// closed range.
    EndDigits,
    /// A modifier character has been read. Requires a digit.
    Modifier,
    /// Inside the digits of the stride. End of input yields a stepped range.
    ChunkDigits,
}

/// Scan a single comma-free part of a frame range expression into a token.
///
/// Embedded whitespace, repeated separators (`1-5-10`) and trailing garbage are
/// all rejected with the offset of the first character that does not fit.
pub fn parse_token(part: &str) -> Result<FrameToken, ParseErrorKind> {
    if part.is_empty() {
        return Err(ParseErrorKind::Empty);
    }

    let mut state = State::Start;
    // Byte offsets of the range separator and the modifier character.
    let mut dash_at = 0;
    let mut modifier_at = 0;
    let mut modifier = Modifier::Step;

    for (offset, ch) in part.char_indices() {
        state = match (state, ch) {
            (State::Start, '-') => State::StartSign,
            (State::Start | State::StartSign, '0'..='9') => State::StartDigits,
            (State::StartDigits, '0'..='9') => State::StartDigits,
            (State::StartDigits, '-') => {
                dash_at = offset;
                State::Dash
            }
            (State::Dash, '-') => State::EndSign,
            (State::Dash | State::EndSign, '0'..='9') => State::EndDigits,
            (State::EndDigits, '0'..='9') => State::EndDigits,
            (State::EndDigits, 'x' | 'y' | ':') => {
                modifier_at = offset;
                modifier = Modifier::from_char(ch).unwrap_or(Modifier::Step);
                State::Modifier
            }
            (State::Modifier | State::ChunkDigits, '0'..='9') => State::ChunkDigits,
            (_, character) => {
                return Err(ParseErrorKind::UnexpectedCharacter { character, offset });
            }
        };
    }

    match state {
        State::StartDigits => Ok(FrameToken::single(parse_frame(part)?)),
        State::EndDigits => Ok(FrameToken::range(
            parse_frame(&part[..dash_at])?,
            parse_frame(&part[dash_at + 1..])?,
        )),
        State::ChunkDigits => {
            let start = parse_frame(&part[..dash_at])?;
            let end = parse_frame(&part[dash_at + 1..modifier_at])?;
            let chunk = part[modifier_at + 1..]
                .parse::<u64>()
                .map_err(|_| ParseErrorKind::NumberOverflow)?;
            FrameToken::stepped(start, end, modifier, chunk).ok_or(ParseErrorKind::ZeroStride)
        }
        State::Start
        | State::StartSign
        | State::Dash
        | State::EndSign
        | State::Modifier => Err(ParseErrorKind::UnexpectedEnd),
    }
}

fn parse_frame(digits: &str) -> Result<i64, ParseErrorKind> {
    digits
        .parse::<i64>()
        .map_err(|_| ParseErrorKind::NumberOverflow)
}

/// An iterator over the tokens of a comma-separated frame range expression.
///
/// `FrameRangeParser` splits its input on `,` and scans each part with
/// [`parse_token`], yielding tokens left to right. A part that fails to scan
/// yields a [`FrameError::Parse`] naming the part and its byte offset, after
/// which the parser is exhausted.
///
/// ```
/// use framix_frameset::FrameRangeParser;
///
/// let tokens: Vec<_> = FrameRangeParser::new("1-5,10")
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(tokens.len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct FrameRangeParser<'a> {
    /// The full expression, kept for error reporting.
    input: &'a str,
    /// Byte offset of the next part to scan.
    offset: usize,
    /// Set once the last part was consumed or an error was reported.
    finished: bool,
}

impl<'a> FrameRangeParser<'a> {
    /// Creates a parser over `input`.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            offset: 0,
            finished: false,
        }
    }

    /// Scan the next part, returning the token together with the byte offset
    /// of the part it came from.
    pub fn next_token(&mut self) -> Option<FrameResult<(usize, FrameToken)>> {
        if self.finished {
            return None;
        }

        let position = self.offset;
        let rest = &self.input[position..];
        let part = match rest.find(',') {
            Some(comma) => {
                self.offset = position + comma + 1;
                &rest[..comma]
            }
            None => {
                self.finished = true;
                rest
            }
        };

        match parse_token(part) {
            Ok(token) => {
                trace!(part, position, token = %token, "Matched frame token");
                Some(Ok((position, token)))
            }
            Err(kind) => {
                self.finished = true;
                Some(Err(FrameError::Parse {
                    input: self.input.to_string(),
                    part: part.to_string(),
                    position,
                    kind,
                }))
            }
        }
    }
}

impl Iterator for FrameRangeParser<'_> {
    type Item = FrameResult<FrameToken>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
            .map(|result| result.map(|(_, token)| token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single() {
        assert_eq!(parse_token("5"), Ok(FrameToken::single(5)));
        assert_eq!(parse_token("-5"), Ok(FrameToken::single(-5)));
        assert_eq!(parse_token("0007"), Ok(FrameToken::single(7)));
    }

    #[test]
    fn test_parse_range() {
        assert_eq!(parse_token("1-5"), Ok(FrameToken::range(1, 5)));
        assert_eq!(parse_token("-10--5"), Ok(FrameToken::range(-10, -5)));
        assert_eq!(parse_token("-3-3"), Ok(FrameToken::range(-3, 3)));
        assert_eq!(parse_token("5-1"), Ok(FrameToken::range(5, 1)));
    }

    #[test]
    fn test_parse_stepped() {
        assert_eq!(
            parse_token("1-10x2"),
            Ok(FrameToken::stepped(1, 10, Modifier::Step, 2).unwrap())
        );
        assert_eq!(
            parse_token("1-100y5"),
            Ok(FrameToken::stepped(1, 100, Modifier::Complement, 5).unwrap())
        );
        assert_eq!(
            parse_token("-20--1:4"),
            Ok(FrameToken::stepped(-20, -1, Modifier::Fill, 4).unwrap())
        );
    }

    #[test]
    fn test_parse_rejects_extra_separator() {
        assert_eq!(
            parse_token("1-5-10"),
            Err(ParseErrorKind::UnexpectedCharacter {
                character: '-',
                offset: 3
            })
        );
    }

    #[test]
    fn test_parse_rejects_whitespace() {
        assert_eq!(
            parse_token("1 -5"),
            Err(ParseErrorKind::UnexpectedCharacter {
                character: ' ',
                offset: 1
            })
        );
        assert!(parse_token(" 1").is_err());
        assert!(parse_token("1-5 ").is_err());
    }

    #[test]
    fn test_parse_rejects_incomplete() {
        assert_eq!(parse_token(""), Err(ParseErrorKind::Empty));
        assert_eq!(parse_token("-"), Err(ParseErrorKind::UnexpectedEnd));
        assert_eq!(parse_token("1-"), Err(ParseErrorKind::UnexpectedEnd));
        assert_eq!(parse_token("1-10x"), Err(ParseErrorKind::UnexpectedEnd));
        assert!(parse_token("x5").is_err());
        assert!(parse_token("1x5").is_err());
        assert!(parse_token("1-10x2x2").is_err());
        assert!(parse_token("1-10x-2").is_err());
    }

    #[test]
    fn test_parse_zero_stride() {
        assert_eq!(parse_token("1-10x0"), Err(ParseErrorKind::ZeroStride));
        assert_eq!(parse_token("1-10:00"), Err(ParseErrorKind::ZeroStride));
    }

    #[test]
    fn test_parse_overflow() {
        assert_eq!(
            parse_token("99999999999999999999"),
            Err(ParseErrorKind::NumberOverflow)
        );
    }

    #[test]
    fn test_parser_iterates_parts() {
        let tokens: Vec<FrameToken> = FrameRangeParser::new("1-5,7,10-20x5")
            .collect::<FrameResult<_>>()
            .unwrap();
        assert_eq!(
            tokens,
            vec![
                FrameToken::range(1, 5),
                FrameToken::single(7),
                FrameToken::stepped(10, 20, Modifier::Step, 5).unwrap(),
            ]
        );
    }

    #[test]
    fn test_parser_reports_part_position() {
        let mut parser = FrameRangeParser::new("1,2,1-10x0,4");
        assert!(matches!(parser.next_token(), Some(Ok((0, _)))));
        assert!(matches!(parser.next_token(), Some(Ok((2, _)))));
        match parser.next_token() {
            Some(Err(FrameError::Parse {
                part,
                position,
                kind,
                ..
            })) => {
                assert_eq!(part, "1-10x0");
                assert_eq!(position, 4);
                assert_eq!(kind, ParseErrorKind::ZeroStride);
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(parser.next_token().is_none());
    }

    #[test]
    fn test_parser_empty_parts() {
        let result: FrameResult<Vec<FrameToken>> = FrameRangeParser::new("1,,2").collect();
        let err = result.unwrap_err();
        assert_eq!(err.parse_kind(), Some(&ParseErrorKind::Empty));

        let result: FrameResult<Vec<FrameToken>> = FrameRangeParser::new("").collect();
        assert!(result.is_err());
    }
}
