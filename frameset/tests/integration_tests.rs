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

//! Integration tests for frame set parsing and compaction

use framix_frameset::{
    CompactConfig, FrameError, FrameSet, ParseErrorKind, compact, frames_to_frame_range,
};

#[test]
fn test_simple_range_round_trip() {
    let set = FrameSet::parse("1-5").unwrap();
    assert_eq!(set.frame_range(0), "1-5");
    assert_eq!(set.frames(), &[1, 2, 3, 4, 5]);
}

#[test]
fn test_stepped_range_values() {
    let set = FrameSet::parse("1-10x2").unwrap();
    assert_eq!(set.frames(), &[1, 3, 5, 7, 9]);
}

#[test]
fn test_compaction_examples() {
    assert_eq!(frames_to_frame_range(&[1, 2, 3, 4, 5]).unwrap(), "1-5");
    assert_eq!(frames_to_frame_range(&[1, 3, 5, 7]).unwrap(), "1-7x2");
    // Two frame runs are never written as a dash range.
    assert_eq!(frames_to_frame_range(&[1, 2, 4, 5]).unwrap(), "1,2,4,5");
}

#[test]
fn test_malformed_expressions() {
    match FrameSet::parse("1-5-10") {
        Err(FrameError::Parse { part, position, .. }) => {
            assert_eq!(part, "1-5-10");
            assert_eq!(position, 0);
        }
        other => panic!("expected parse error, got {:?}", other),
    }

    match FrameSet::parse("1-10x0") {
        Err(FrameError::Parse { kind, .. }) => assert_eq!(kind, ParseErrorKind::ZeroStride),
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn test_error_names_offending_part() {
    let err = FrameSet::parse("1-5,10,abc,20").unwrap_err();
    match err {
        FrameError::Parse {
            input,
            part,
            position,
            kind,
        } => {
            assert_eq!(input, "1-5,10,abc,20");
            assert_eq!(part, "abc");
            assert_eq!(position, 7);
            assert_eq!(
                kind,
                ParseErrorKind::UnexpectedCharacter {
                    character: 'a',
                    offset: 0
                }
            );
        }
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn test_single_frame_boundary() {
    let set = FrameSet::parse("5").unwrap();
    assert_eq!(set.start(), Some(5));
    assert_eq!(set.end(), Some(5));
    assert_eq!(set.frame_range(0), "5");
    assert_eq!(set.inverted_frame_range(0), "");
}

#[test]
fn test_negative_frames() {
    let set = FrameSet::parse("-5--1,0,1-2").unwrap();
    assert_eq!(set.frames(), &[-5, -4, -3, -2, -1, 0, 1, 2]);
    assert_eq!(set.normalize().to_string(), "-5-2");
    assert_eq!(set.frame_range(3), "-05--01,000,001-002");
}

#[test]
fn test_fill_keeps_insertion_order_but_normalizes_sorted() {
    let set = FrameSet::parse("1-9:4").unwrap();
    // x4 pass, then x3, then x2, then x1, each adding only new frames.
    assert_eq!(set.frames(), &[1, 5, 9, 4, 7, 3, 2, 6, 8]);
    assert_eq!(set.index(4).unwrap(), 3);
    assert_eq!(set.frame(1).unwrap(), 5);
    assert_eq!(set.normalize().to_string(), "1-9");
    assert_eq!(set.frame_range(0), "1-9:4");
}

#[test]
fn test_fill_with_huge_stride() {
    let set = FrameSet::parse("1-3:10000000000000").unwrap();
    assert_eq!(set.frames(), &[1, 3, 2]);
    assert_eq!(
        FrameSet::parse("1-3:5").unwrap().frames(),
        set.frames()
    );
}

#[test]
fn test_reverse_range_walks_downward() {
    let set = FrameSet::parse("5-1").unwrap();
    assert_eq!(set.frames(), &[5, 4, 3, 2, 1]);
    assert_eq!(set.start(), Some(5));
    assert_eq!(set.end(), Some(1));
    assert_eq!(set.normalize().to_string(), "1-5");
}

#[test]
fn test_complement_law_gap_sizes() {
    let set = FrameSet::parse("1-10,14-20,22").unwrap();
    let inverted = FrameSet::parse(&set.inverted_frame_range(0)).unwrap();
    assert_eq!(inverted.frames(), &[11, 12, 13, 21]);
}

#[test]
fn test_compact_padded_output() {
    let config = CompactConfig::default().with_pad_width(4);
    assert_eq!(
        compact(&[1, 2, 3, 7, 10, 20, 30, 40], &config).unwrap(),
        "0001-0003,0007,0010,0020-0040x10"
    );
}

#[test]
fn test_compact_empty_list() {
    assert_eq!(
        compact(&[], &CompactConfig::default()),
        Err(FrameError::EmptyFrameList)
    );
}

#[test]
fn test_frame_set_is_shareable_across_threads() {
    let set = std::sync::Arc::new(FrameSet::parse("1-100").unwrap());
    let handles: Vec<_> = (0..4)
        .map(|offset| {
            let set = set.clone();
            std::thread::spawn(move || set.has_frame(offset * 25 + 1))
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
