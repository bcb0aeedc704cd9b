//! Fragment naming and writing
//!
//! Every fragment is first written to a temporary file in the output directory.
//! The file handle is closed as soon as the fragment is written, so only the
//! path is held while the remaining fragments are staged. Staged files are
//! deleted when dropped, so a run that fails part-way leaves nothing behind.
//! Once all fragments are staged they are renamed into place in fragment
//! order, replacing any existing files of the same name.

use crate::domain::ChunkIndex;
use crate::error::{Result, SplitError};
use log::debug;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::TempPath;

/// Prefix of staging files, so stray ones are recognisable after an interruption
const STAGING_PREFIX: &str = ".scriptsplit-";

/// Mode given to every fragment: the usual 0644 plus execute bits
#[cfg(unix)]
const FRAGMENT_MODE: u32 = 0o755;

/// `<prefix><index padded to two digits><suffix>`, e.g. `download_part_01.sh`
pub fn fragment_file_name(prefix: &str, index: ChunkIndex, suffix: &str) -> String {
    format!("{}{}{}", prefix, index.padded(), suffix)
}

/// A fully written fragment waiting to be moved to its final name
#[derive(Debug)]
pub struct StagedFragment {
    pub final_path: PathBuf,
    temp: TempPath,
}

impl StagedFragment {
    /// Location of the staging file
    pub fn temp_path(&self) -> &Path {
        &self.temp
    }
}

/// Write `header` followed by `body` to a staging file in `dir`
pub fn stage_fragment(
    dir: &Path,
    file_name: &str,
    header: &[u8],
    body: &[u8],
) -> Result<StagedFragment> {
    let final_path = dir.join(file_name);
    let write_err = |source| SplitError::FragmentWrite {
        file: final_path.clone(),
        source,
    };

    let temp = tempfile::Builder::new()
        .prefix(STAGING_PREFIX)
        .tempfile_in(dir)
        .map_err(write_err)?;

    {
        let mut writer = BufWriter::new(temp.as_file());
        writer.write_all(header).map_err(write_err)?;
        writer.write_all(body).map_err(write_err)?;
        writer.flush().map_err(write_err)?;
    }
    make_executable(temp.path()).map_err(write_err)?;

    // Keep only the path; the descriptor is released here
    let temp = temp.into_temp_path();

    debug!(
        "Staged {} ({} header bytes, {} body bytes) at {}",
        file_name,
        header.len(),
        body.len(),
        temp.display()
    );

    Ok(StagedFragment { final_path, temp })
}

/// Rename staged fragments to their final names, in order
pub fn persist_fragments(staged: Vec<StagedFragment>) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(staged.len());
    for fragment in staged {
        let StagedFragment { final_path, temp } = fragment;
        temp.persist(&final_path)
            .map_err(|e| SplitError::FragmentPersist {
                file: final_path.clone(),
                source: e.error,
            })?;
        written.push(final_path);
    }
    Ok(written)
}

#[cfg(unix)]
fn make_executable(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(FRAGMENT_MODE))
}

#[cfg(not(unix))]
fn make_executable(path: &Path) -> std::io::Result<()> {
    // No execute bit outside Unix; just make sure the file is there
    fs::metadata(path).map(|_| ())
}
