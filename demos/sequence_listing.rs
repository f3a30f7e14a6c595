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

//! Sequence Listing Demonstration
//!
//! Lists a directory, groups its numbered files into sequences and prints one
//! descriptor per sequence.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin sequence_listing -- /path/to/renders/
//! cargo run --bin sequence_listing -- /path/to/renders/beauty.#.exr
//! ```
//!
//! An argument containing padding characters is treated as a pattern and
//! resolved to the single sequence it names.

use framix_fileseq::{
    FileSequence, SequenceEntry, SequenceSource, find_sequence, find_sequences, is_padding_char,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Lists plain files of a directory on the local filesystem.
struct DiskSource;

impl SequenceSource for DiskSource {
    fn entries(&self, directory: &str) -> std::io::Result<Vec<SequenceEntry>> {
        let path = if directory.is_empty() { "." } else { directory };
        let mut entries = Vec::new();
        for item in std::fs::read_dir(path)? {
            let item = item?;
            if !item.file_type()?.is_file() {
                continue;
            }
            let Some(name) = item.file_name().to_str().map(str::to_string) else {
                debug!(name = ?item.file_name(), "Skipping non UTF-8 file name");
                continue;
            };
            if let Some(entry) = SequenceEntry::from_path(&format!("{}{}", directory, name)) {
                entries.push(entry);
            }
        }
        Ok(entries)
    }
}

fn print_sequence(sequence: &FileSequence) {
    println!("{}", sequence);
    if let (Some(start), Some(end)) = (sequence.start(), sequence.end()) {
        println!("  frames {} to {}, {} total", start, end, sequence.len());
    }
    if let Some(missing) = sequence.inverted_frame_range().filter(|m| !m.is_empty()) {
        println!("  missing {}", missing);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let target = std::env::args().nth(1).unwrap_or_else(|| "./".to_string());
    info!(%target, "Listing sequences");

    if target.chars().any(is_padding_char) {
        let sequence = find_sequence(&DiskSource, &target)?;
        print_sequence(&sequence);
        return Ok(());
    }

    let mut directory = target;
    if !directory.ends_with('/') {
        directory.push('/');
    }
    for sequence in find_sequences(&DiskSource, &directory)? {
        print_sequence(&sequence);
    }

    Ok(())
}
