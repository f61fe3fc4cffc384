//! Bump workflow orchestration
//!
//! Ties the version file store to the pure bump rules. Kept separate from
//! main.rs so the workflow can be driven without clap.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::domain::{self, Version};
use crate::error::Result;
use crate::store;

/// Reads the version at `path`, bumps it by `level` and writes it back.
///
/// The file is created with `v0.0.0` first if it does not exist. When reading
/// or bumping fails the file is left as it was.
pub fn run(level: &str, path: &Path) -> Result<Version> {
    let (_, next) = bump_file(level, path, true)?;
    Ok(next)
}

/// ensure → read → bump → optional write. Returns the previous and the bumped
/// version.
fn bump_file(level: &str, path: &Path, write: bool) -> Result<(Version, Version)> {
    store::ensure_version_file(path)?;
    let current = store::read_version(path)?;
    let next = domain::bump(level, current)?;

    if write {
        store::write_version(path, &next)?;
        info!(path = %path.display(), from = %current, to = %next, "bumped version");
    } else {
        info!(path = %path.display(), from = %current, to = %next, "dry run, not writing");
    }
    Ok((current, next))
}

/// Arguments for the bump workflow
#[derive(Debug, Clone, PartialEq)]
pub struct BumpWorkflowArgs {
    /// Requested bump level, validated by the workflow
    pub level: String,

    /// Version file to operate on
    pub path: PathBuf,

    /// Compute the next version without writing it
    pub dry_run: bool,
}

/// Result of a successful bump workflow
#[derive(Debug, Clone, PartialEq)]
pub struct BumpOutcome {
    /// Version found in the file before bumping
    pub previous: Version,

    /// Bumped version
    pub current: Version,

    /// File that was read
    pub path: PathBuf,

    /// Whether the bumped version was written back
    pub written: bool,
}

/// Runs a bump as requested from the command line.
///
/// Same sequence as [`run`], but reports the previous version and skips the
/// write in dry-run mode.
pub fn run_bump_workflow(args: BumpWorkflowArgs) -> Result<BumpOutcome> {
    let written = !args.dry_run;
    let (previous, current) = bump_file(&args.level, &args.path, written)?;

    Ok(BumpOutcome {
        previous,
        current,
        path: args.path,
        written,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VersioningError;
    use std::fs;
    use tempfile::TempDir;

    fn args(level: &str, path: &Path, dry_run: bool) -> BumpWorkflowArgs {
        BumpWorkflowArgs {
            level: level.to_string(),
            path: path.to_path_buf(),
            dry_run,
        }
    }

    #[test]
    fn test_run_creates_and_bumps() {
        let dir = TempDir::new().unwrap();
        let path = store::version_file(dir.path());

        let v = run("major", &path).unwrap();
        assert_eq!(v, Version::new(1, 0, 0));
        assert_eq!(fs::read_to_string(&path).unwrap(), "v1.0.0\n");
    }

    #[test]
    fn test_run_invalid_level_leaves_file() {
        let dir = TempDir::new().unwrap();
        let path = store::version_file(dir.path());
        fs::write(&path, "v1.2.3").unwrap();

        let err = run("patch", &path).unwrap_err();
        assert!(matches!(err, VersioningError::InvalidBumpLevel(_)));
        assert_eq!(fs::read_to_string(&path).unwrap(), "v1.2.3");
    }

    #[test]
    fn test_workflow_reports_previous_and_current() {
        let dir = TempDir::new().unwrap();
        let path = store::version_file(dir.path());
        fs::write(&path, "v0.9.9\n").unwrap();

        let outcome = run_bump_workflow(args("minor", &path, false)).unwrap();
        assert_eq!(outcome.previous, Version::new(0, 9, 9));
        assert_eq!(outcome.current, Version::new(0, 10, 0));
        assert_eq!(outcome.path, path);
        assert!(outcome.written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "v0.10.0\n");
    }

    #[test]
    fn test_workflow_dry_run_does_not_write() {
        let dir = TempDir::new().unwrap();
        let path = store::version_file(dir.path());
        fs::write(&path, "v2.0.0\n").unwrap();

        let outcome = run_bump_workflow(args("release", &path, true)).unwrap();
        assert_eq!(outcome.current, Version::new(2, 0, 1));
        assert!(!outcome.written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "v2.0.0\n");
    }

    #[test]
    fn test_workflow_matches_run() {
        let dir = TempDir::new().unwrap();
        let via_run = store::version_file(dir.path().join("a").as_path());
        let via_workflow = store::version_file(dir.path().join("b").as_path());
        fs::create_dir(dir.path().join("a")).unwrap();
        fs::create_dir(dir.path().join("b")).unwrap();

        for level in ["release", "minor", "release", "major"] {
            let expected = run(level, &via_run).unwrap();
            let outcome = run_bump_workflow(args(level, &via_workflow, false)).unwrap();
            assert_eq!(outcome.current, expected);
        }
        assert_eq!(
            fs::read_to_string(&via_run).unwrap(),
            fs::read_to_string(&via_workflow).unwrap()
        );
    }

    #[test]
    fn test_workflow_creates_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = store::version_file(dir.path());

        let outcome = run_bump_workflow(args("minor", &path, true)).unwrap();
        assert_eq!(outcome.previous, Version::default());
        assert_eq!(fs::read_to_string(&path).unwrap(), "v0.0.0\n");
    }

    #[test]
    fn test_workflow_dry_run_rejects_invalid_level() {
        let dir = TempDir::new().unwrap();
        let path = store::version_file(dir.path());

        let err = run_bump_workflow(args("bogus", &path, true)).unwrap_err();
        assert!(matches!(err, VersioningError::InvalidBumpLevel(ref l) if l == "bogus"));
    }
}
