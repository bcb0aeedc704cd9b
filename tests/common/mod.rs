//! Shared helpers for integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// The 11-line preamble of a generated download script
pub const WGET_HEADER: &str = "#!/usr/bin/env bash
set -Eeuo pipefail

if ! command -v wget >/dev/null 2>&1; then
  echo \"Error: wget is not installed.\" >&2
  exit 1
fi

DATA_DIR=/data/proof-pile-2
echo \"Saving to: $DATA_DIR\"
mkdir -p \"$DATA_DIR\"
";

/// One 4-line download record
pub fn wget_record(n: usize) -> String {
    let rel = format!("arxiv/train/part-{:05}.npy", n);
    let url = format!("https://example.org/preprocessed/proof-pile-2/{}", rel);
    format!(
        "\n# {url}\nmkdir -p \"$(dirname \"$DATA_DIR/{rel}\")\"\nwget -c --retry-connrefused -t 5 --timeout=60 \"{url}\" -O \"$DATA_DIR/{rel}\"\n",
        url = url,
        rel = rel
    )
}

/// A complete download script with `records` records
pub fn wget_script(records: usize) -> String {
    let mut script = String::from(WGET_HEADER);
    for n in 0..records {
        script.push_str(&wget_record(n));
    }
    script
}

/// Script with numbered header and body lines, handy for exact slice checks
pub fn numbered_script(header_lines: usize, body_lines: usize) -> String {
    let mut script = String::new();
    for i in 1..=header_lines {
        script.push_str(&format!("header {}\n", i));
    }
    for i in 1..=body_lines {
        script.push_str(&format!("body {}\n", i));
    }
    script
}

pub fn write_input(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

/// Sorted file names in `dir`
pub fn dir_entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
