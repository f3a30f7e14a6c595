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

//! Integration tests for file sequences

use framix_fileseq::{
    FileSequence, FrameSet, SequenceEntry, SequenceError, find_sequence, find_sequences,
    group_entries, padding_chars,
};
use std::collections::HashMap;

/// In-memory directory listing keyed by directory.
struct MemorySource {
    directories: HashMap<String, Vec<String>>,
}

impl MemorySource {
    fn new(files: &[&str]) -> MemorySource {
        let mut directories: HashMap<String, Vec<String>> = HashMap::new();
        for file in files {
            let directory = match file.rfind('/') {
                Some(at) => &file[..=at],
                None => "",
            };
            directories
                .entry(directory.to_string())
                .or_default()
                .push(file.to_string());
        }
        MemorySource { directories }
    }
}

impl framix_fileseq::SequenceSource for MemorySource {
    fn entries(&self, directory: &str) -> std::io::Result<Vec<SequenceEntry>> {
        let files = self.directories.get(directory).ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, directory.to_string())
        })?;
        Ok(files
            .iter()
            .filter_map(|file| SequenceEntry::from_path(file))
            .collect())
    }
}

#[test]
fn test_frame_paths_from_descriptor() {
    let seq = FileSequence::parse("/path/to/file.1-5#.exr").unwrap();
    assert_eq!(seq.frame(3), "/path/to/file.0003.exr");
    assert_eq!(seq.frame("#"), "/path/to/file.#.exr");
    let paths: Vec<String> = seq.iter().collect();
    assert_eq!(paths.len(), 5);
    assert_eq!(paths[4], "/path/to/file.0005.exr");
}

#[test]
fn test_descriptor_without_range() {
    let seq: FileSequence = "/path/to/file.#.exr".parse().unwrap();
    assert_eq!(seq.basename(), "file.");
    assert!(seq.frame_set().is_none());
    assert!(seq.is_empty());
    assert_eq!(seq.frame(7), "/path/to/file.0007.exr");
}

#[test]
fn test_descriptor_round_trips_through_display() {
    for text in [
        "/path/to/file.1-5#.exr",
        "shot.1-100x5@@@.dpx",
        "relative/dir/plate_v001.1001-1010#.exr",
        "bar#.exr",
        "/abs/seq.-10--1@@@.tif",
    ] {
        assert_eq!(FileSequence::parse(text).unwrap().to_string(), text);
    }
}

#[test]
fn test_parse_errors_surface_frame_errors() {
    let err = FileSequence::parse("file.1-10x0#.exr").unwrap_err();
    assert!(err.is_parse_error());
    match err {
        SequenceError::Frame(frame) => assert!(frame.is_parse_error()),
        other => panic!("expected frame error, got {:?}", other),
    }
    assert!(FileSequence::parse("file.1-5#\n.exr").unwrap_err().is_parse_error());
}

#[test]
fn test_template_rendering() {
    let seq = FileSequence::parse("/out/comp.1-3,7#.exr").unwrap();
    assert_eq!(
        seq.render_template("{basename}{range}{padding}{extension}").unwrap(),
        "comp.0001-0003,0007#.exr"
    );
    assert_eq!(
        seq.render_template("{{{length}}} frames, missing {inverted}").unwrap(),
        "{4} frames, missing 0004-0006"
    );
    assert!(seq.render_template("{nope}").is_err());
}

#[test]
fn test_split_and_recombine() {
    let seq = FileSequence::parse("/out/comp.1-3,7,20-40x10#.exr").unwrap();
    let parts = seq.split().unwrap();
    assert_eq!(parts.len(), 3);

    let total: usize = parts.iter().map(FileSequence::len).sum();
    assert_eq!(total, seq.len());
    assert_eq!(parts[1].to_string(), "/out/comp.0007#.exr");
}

#[test]
fn test_replace_frame_set() {
    let mut seq = FileSequence::parse("img.1-3@@.png").unwrap();
    seq.set_frame_set(Some(FrameSet::from_frames(&[4, 6, 8, 10])));
    assert_eq!(seq.to_string(), "img.4-10x2@@.png");
    assert_eq!(seq.index(3).unwrap(), "img.10.png");
}

#[test]
fn test_grouping_mixed_directory() {
    let files = [
        "shots/a.0001.exr",
        "shots/a.0002.exr",
        "shots/a.0003.exr",
        "shots/a.0010.exr",
        "shots/a.0001.jpg",
        "shots/b_v2.10.tif",
        "shots/b_v2.12.tif",
        "shots/b_v2.14.tif",
        "shots/notes.txt",
    ];
    let entries = files.iter().filter_map(|file| SequenceEntry::from_path(file));
    let rendered: Vec<String> = group_entries(entries)
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(
        rendered,
        vec![
            "shots/a.1-3,10#.exr",
            "shots/a.1#.jpg",
            "shots/b_v2.10-14x2@@.tif",
        ]
    );
}

#[test]
fn test_find_with_memory_source() {
    let source = MemorySource::new(&[
        "seq/bar1000.exr",
        "seq/bar1001.exr",
        "seq/bar1002.exr",
        "seq/foo.1.jpg",
        "seq/foo.2.jpg",
    ]);

    let sequences = find_sequences(&source, "seq/").unwrap();
    assert_eq!(sequences.len(), 2);

    let bar = find_sequence(&source, "seq/bar#.exr").unwrap();
    assert_eq!(bar.to_string(), "seq/bar1000-1002#.exr");
    assert_eq!(bar.frame(1001), "seq/bar1001.exr");

    let foo = find_sequence(&source, "seq/foo.@.jpg").unwrap();
    assert_eq!(foo.to_string(), "seq/foo.1,2@.jpg");

    assert!(find_sequence(&source, "seq/baz#.exr").unwrap_err().is_not_found());
    assert!(matches!(
        find_sequence(&source, "elsewhere/bar#.exr"),
        Err(SequenceError::Io(_))
    ));
}

#[test]
fn test_padding_width_mapping() {
    assert_eq!(padding_chars(0), "@");
    assert_eq!(padding_chars(4), "#");
    assert_eq!(padding_chars(5), "@@@@@");
    assert_eq!(padding_chars(12), "###");
}
