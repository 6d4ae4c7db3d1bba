/*
Command line demo for quick debugging.

## Usage

```
$ cargo run --example flips abcd dcba
6 flips from "abcd" to "dcba": (2, 3) (1, 2) (0, 1) (2, 3) (1, 2) (2, 3) (found in 4µs)

$ cargo run --example flips -- --count abcba 2
2 pairs of substrings of "abcba" within 2 flips (counted in 31µs)
```
*/
use std::time::Instant;

use flips::{count_within_distance, minimal_flips};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.as_slice() {
        [flag, s, max_dist] if flag == "--count" => count(s, max_dist),
        [src, dest] => sequence(src, dest),
        _ => {
            eprintln!("Usage: flips SRC DEST");
            eprintln!("       flips --count STRING MAX_DIST");
            std::process::exit(1);
        }
    }
}

fn sequence(src: &str, dest: &str) {
    let now = Instant::now();
    match minimal_flips(src, dest) {
        Ok(flips) => {
            let time = now.elapsed();
            let len = flips.len();
            let flips = flips.iter().fold(String::new(), |mut s, flip| {
                if !s.is_empty() {
                    s.push(' ');
                }
                s.push_str(&flip.to_string());
                s
            });
            println!("{len} flips from {src:?} to {dest:?}: {flips} (found in {time:?})");
        }
        Err(err) => {
            eprintln!("{src:?} -> {dest:?}: {err}");
            std::process::exit(1);
        }
    }
}

fn count(s: &str, max_dist: &str) {
    let max_dist: usize = match max_dist.parse() {
        Ok(max_dist) => max_dist,
        Err(err) => {
            eprintln!("Invalid MAX_DIST {max_dist:?}: {err}");
            std::process::exit(1);
        }
    };

    let now = Instant::now();
    let total = count_within_distance(s, max_dist);
    println!(
        "{total} pairs of substrings of {s:?} within {max_dist} flips (counted in {:?})",
        now.elapsed()
    );
}
