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

//! Frame Range Demonstration
//!
//! Parses each argument as a frame range expression and prints its frames,
//! its normalized and inverted forms, and a zero-filled rendering.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin frame_ranges -- 1-10x3 "1-20:5" 5-1,10
//! RUST_LOG=framix_frameset=trace cargo run --bin frame_ranges -- 1-5,9
//! ```

use framix_frameset::{FrameSet, frames_to_frame_range};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut expressions: Vec<String> = std::env::args().skip(1).collect();
    if expressions.is_empty() {
        expressions = vec!["1-10x3".to_string(), "1-20:5".to_string(), "1-9y3,20".to_string()];
    }

    for expression in &expressions {
        let set = match FrameSet::parse(expression) {
            Ok(set) => set,
            Err(error) => {
                println!("{}: {}\n", expression, error);
                continue;
            }
        };

        println!("{}", set);
        println!("  frames:     {:?}", set.frames());
        println!("  length:     {}", set.len());
        println!("  normalized: {}", set.normalize());
        println!("  inverted:   {}", set.inverted_frame_range(0));
        println!("  padded:     {}", set.frame_range(4));
        println!();
    }

    let frames = [1, 2, 3, 5, 7, 9, 20, 21];
    println!("{:?} compacts to {}", frames, frames_to_frame_range(&frames)?);

    Ok(())
}
