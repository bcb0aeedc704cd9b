//! Configuration for split operations
//!
//! Values are layered: built-in defaults, then the `HEADER_LINES` /
//! `GROUP_LINES` environment variables, then command-line options.

use crate::error::{Result, SplitError};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Input script used when none is given on the command line
pub const DEFAULT_INPUT: &str = "download_data.sh";
/// Number of fragments produced when none is given on the command line
pub const DEFAULT_CHUNKS: i64 = 12;
/// Lines in the shared preamble of a generated download script
pub const DEFAULT_HEADER_LINES: usize = 11;
/// Lines per download record (blank, `# url`, `mkdir -p`, `wget`)
pub const DEFAULT_GROUP_LINES: usize = 4;
/// Prefix of every fragment file name
pub const DEFAULT_PREFIX: &str = "download_part_";
/// Suffix used when the input has no extension
pub const FALLBACK_SUFFIX: &str = ".sh";

pub const HEADER_LINES_VAR: &str = "HEADER_LINES";
pub const GROUP_LINES_VAR: &str = "GROUP_LINES";

/// Structural constants of the input: header size and group size, in lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineLayout {
    header_lines: usize,
    group_lines: usize,
}

impl Default for LineLayout {
    fn default() -> Self {
        Self {
            header_lines: DEFAULT_HEADER_LINES,
            group_lines: DEFAULT_GROUP_LINES,
        }
    }
}

impl LineLayout {
    pub fn new(header_lines: usize, group_lines: usize) -> Result<Self> {
        if header_lines == 0 {
            return Err(SplitError::InvalidLayout {
                origin: "header lines".to_string(),
                value: header_lines.to_string(),
            });
        }
        if group_lines == 0 {
            return Err(SplitError::InvalidLayout {
                origin: "group lines".to_string(),
                value: group_lines.to_string(),
            });
        }
        Ok(Self {
            header_lines,
            group_lines,
        })
    }

    pub fn header_lines(&self) -> usize {
        self.header_lines
    }

    pub fn group_lines(&self) -> usize {
        self.group_lines
    }

    /// Build a layout from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var_os(name))
    }

    /// Build a layout from an arbitrary variable lookup. Unset and empty
    /// variables fall back to the defaults; values that are not valid UTF-8
    /// are rejected.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let header_lines = layout_var(&lookup, HEADER_LINES_VAR, DEFAULT_HEADER_LINES)?;
        let group_lines = layout_var(&lookup, GROUP_LINES_VAR, DEFAULT_GROUP_LINES)?;
        Self::new(header_lines, group_lines)
    }
}

fn layout_var<F>(lookup: &F, name: &str, default: usize) -> Result<usize>
where
    F: Fn(&str) -> Option<OsString>,
{
    match lookup(name).filter(|v| !v.is_empty()) {
        Some(raw) => match raw.into_string() {
            Ok(raw) => parse_positive(name, &raw),
            Err(raw) => Err(SplitError::InvalidLayout {
                origin: name.to_string(),
                value: raw.to_string_lossy().into_owned(),
            }),
        },
        None => Ok(default),
    }
}

/// Parse a strictly positive line count, naming `origin` on failure
pub fn parse_positive(origin: &str, raw: &str) -> Result<usize> {
    match raw.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(SplitError::InvalidLayout {
            origin: origin.to_string(),
            value: raw.to_string(),
        }),
    }
}

/// Parse the chunk-count argument. Sign is checked later by the planner so that
/// structural problems with the input are reported first.
pub fn parse_chunk_count(raw: &str) -> Result<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| SplitError::InvalidChunkCount(raw.to_string()))
}

/// Full configuration of one split run
#[derive(Debug, Clone)]
pub struct SplitConfig {
    /// Script to split
    pub input: PathBuf,
    /// Requested number of fragments; validated by the planner
    pub chunks: i64,
    pub layout: LineLayout,
    /// Directory that receives the fragments
    pub output_dir: PathBuf,
    pub prefix: String,
    /// Fragment suffix; `None` derives it from the input extension
    pub suffix: Option<String>,
    /// Validate and report the plan without writing anything
    pub dry_run: bool,
    /// Re-read every fragment after writing
    pub verify: bool,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            chunks: DEFAULT_CHUNKS,
            layout: LineLayout::default(),
            output_dir: PathBuf::from("."),
            prefix: DEFAULT_PREFIX.to_string(),
            suffix: None,
            dry_run: false,
            verify: false,
        }
    }
}

impl SplitConfig {
    pub fn new(input: impl Into<PathBuf>, chunks: i64, layout: LineLayout) -> Self {
        Self {
            input: input.into(),
            chunks,
            layout,
            ..Self::default()
        }
    }

    /// Defaults with the layout taken from the environment
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            layout: LineLayout::from_env()?,
            ..Self::default()
        })
    }

    /// Build from parsed command-line arguments (see [`crate::args::build_command`]).
    ///
    /// Command-line layout options take precedence over the environment.
    pub fn from_args(matches: &clap::ArgMatches) -> Result<Self> {
        Self::from_args_with_lookup(matches, |name| std::env::var_os(name))
    }

    pub fn from_args_with_lookup<F>(matches: &clap::ArgMatches, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let header_lines = match matches.get_one::<String>("header-lines") {
            Some(raw) => parse_positive("--header-lines", raw)?,
            None => layout_var(&lookup, HEADER_LINES_VAR, DEFAULT_HEADER_LINES)?,
        };
        let group_lines = match matches.get_one::<String>("group-lines") {
            Some(raw) => parse_positive("--group-lines", raw)?,
            None => layout_var(&lookup, GROUP_LINES_VAR, DEFAULT_GROUP_LINES)?,
        };

        let chunks = match matches.get_one::<String>("chunks") {
            Some(raw) => parse_chunk_count(raw)?,
            None => DEFAULT_CHUNKS,
        };

        let input = matches
            .get_one::<String>("input")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT));

        Ok(Self {
            input,
            chunks,
            layout: LineLayout::new(header_lines, group_lines)?,
            output_dir: matches
                .get_one::<String>("output-dir")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
            prefix: matches
                .get_one::<String>("prefix")
                .cloned()
                .unwrap_or_else(|| DEFAULT_PREFIX.to_string()),
            suffix: matches.get_one::<String>("suffix").cloned(),
            dry_run: matches.get_flag("dry-run"),
            verify: matches.get_flag("verify"),
        })
    }

    /// Suffix for fragment names: explicit, else the input's extension, else `.sh`
    pub fn effective_suffix(&self) -> String {
        match &self.suffix {
            Some(suffix) => suffix.clone(),
            None => suffix_for(&self.input),
        }
    }
}

fn suffix_for(input: &Path) -> String {
    input
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty())
        .map(|ext| format!(".{}", ext))
        .unwrap_or_else(|| FALLBACK_SUFFIX.to_string())
}
