//! Git repository operations.

use anyhow::{Context, Result};
use std::path::Path;

/// Author timestamp of a commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitTime {
    /// Seconds since the Unix epoch.
    pub seconds: i64,
    /// Timezone offset of the author clock, in seconds east of UTC.
    pub offset: i32,
}

impl CommitTime {
    /// Formats the timestamp as `YYYY-MM-DD HH:MM` in UTC.
    ///
    /// Returns None for timestamps outside the representable calendar
    /// range, in which case the caller renders nothing.
    pub fn format_utc(&self) -> Option<String> {
        chrono::DateTime::from_timestamp(self.seconds, 0)
            .map(|time| time.format("%Y-%m-%d %H:%M").to_string())
    }
}

/// Opens the git repository at `path`.
///
/// The path must be a repository: a git directory, or a directory
/// holding a `.git` entry. Parent directories are never searched.
///
/// # Errors
///
/// Returns error if the path is not an openable git repository.
pub fn open_repository(path: impl AsRef<Path>) -> Result<gix::Repository> {
    let path = path.as_ref();
    // A worktree checked out in a directory named like `foo.git` is
    // itself taken for a git directory by the direct open, which then
    // never probes the nested `.git`. Try that layout before giving up;
    // the original error is kept when the probe fails too.
    gix::open(path)
        .or_else(|err| match gix::open(path.join(".git")) {
            Ok(repo) => Ok(repo),
            Err(_) => Err(err),
        })
        .with_context(|| format!("Failed to open repository at {}", path.display()))
}

/// Finds the author time of the most recent commit reachable from HEAD.
///
/// Walks ancestors from the HEAD commit with merge topology collapsed to
/// first parents and takes the first commit the walk yields, so symbolic
/// and detached HEADs are both handled by the same path.
///
/// # Returns
///
/// `Ok(None)` when the repository has no commits (unborn HEAD).
///
/// # Errors
///
/// Returns error if HEAD cannot be read, the walk cannot be created, or
/// the commit object is unreadable. Callers treat these as a skip for
/// the affected repository.
pub fn latest_commit_time(repo: &gix::Repository) -> Result<Option<CommitTime>> {
    let head = repo.head().context("Failed to read HEAD reference")?;
    if head.is_unborn() {
        return Ok(None);
    }

    let head_commit = repo.head_commit().context("Failed to resolve HEAD commit")?;
    let mut walk = head_commit
        .ancestors()
        .first_parent_only()
        .all()
        .context("Failed to create revision walk")?;

    let Some(info) = walk.next() else {
        return Ok(None);
    };
    let info = info.context("Failed to advance revision walk")?;
    let commit = info.object().context("Failed to read commit object")?;
    let author = commit.author().context("Failed to read commit author")?;

    Ok(Some(CommitTime {
        seconds: author.time.seconds,
        offset: author.time.offset,
    }))
}
