//! On-disk storage of the VERSION file.
//!
//! The file holds exactly one line, the canonical `v<major>.<minor>.<release>`
//! encoding followed by a newline.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::Version;
use crate::error::{Result, VersioningError};

/// Default file name for the version file.
pub const VERSION_FILE_NAME: &str = "VERSION";

/// Returns the path of the VERSION file inside `dir`.
pub fn version_file(dir: impl AsRef<Path>) -> PathBuf {
    dir.as_ref().join(VERSION_FILE_NAME)
}

/// Creates the version file containing `v0.0.0` if nothing exists at `path`.
///
/// An existing file is never opened for writing, so calling this repeatedly
/// leaves the content untouched.
pub fn ensure_version_file(path: &Path) -> Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }

    match options.open(path) {
        Ok(mut file) => {
            if let Err(e) = file.write_all(encode(&Version::default()).as_bytes()) {
                drop(file);
                discard_partial_file(path);
                return Err(VersioningError::io(path, e));
            }
            debug!(path = %path.display(), "created version file");
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(()),
        Err(e) => Err(VersioningError::io(path, e)),
    }
}

/// Reads and parses the version stored at `path`, creating the file first if
/// it is missing.
pub fn read_version(path: &Path) -> Result<Version> {
    ensure_version_file(path)?;
    let bytes = fs::read(path).map_err(|e| VersioningError::io(path, e))?;
    let content = String::from_utf8(bytes).map_err(|e| {
        VersioningError::malformed(
            String::from_utf8_lossy(e.as_bytes()),
            "version file is not valid UTF-8",
        )
    })?;
    let version = Version::parse(&content)?;
    debug!(path = %path.display(), %version, "read version");
    Ok(version)
}

/// Replaces the content of `path` with the canonical encoding of `version`.
pub fn write_version(path: &Path, version: &Version) -> Result<()> {
    fs::write(path, encode(version)).map_err(|e| VersioningError::io(path, e))?;
    debug!(path = %path.display(), %version, "wrote version");
    Ok(())
}

/// Removes a version file whose initial write failed, so later reads do not
/// see an empty file.
fn discard_partial_file(path: &Path) {
    match fs::remove_file(path) {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => warn!(path = %path.display(), error = %e, "cannot remove partial version file"),
    }
}

fn encode(version: &Version) -> String {
    format!("{}\n", version)
}
