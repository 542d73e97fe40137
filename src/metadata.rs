//! Repository metadata resolution.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Maximum bytes read from a sidecar metadata file.
///
/// Matches the traditional 255-byte description buffer of git web
/// frontends, minus the terminator.
pub const MAX_LINE_LEN: usize = 254;

/// Display metadata for one repository.
///
/// Constructed fresh for every repository so values can never leak from
/// one entry into the next.
#[derive(Debug, Clone)]
pub struct RepoMetadata {
    /// Directory basename with a single trailing `.git` stripped.
    pub display_name: String,
    /// First line of `description` or `.git/description`, trailing
    /// newline preserved; falls back to the process-wide default.
    pub description: String,
    /// First line of `owner` or `.git/owner`, trailing newline stripped;
    /// empty when absent. Not rendered on the index page yet.
    pub owner: String,
}

/// Resolves display metadata for the repository at `repo_dir`.
///
/// The display name derives from the canonicalized path, never from the
/// raw argument text. Sidecar file reads are best-effort: either
/// candidate file may be missing or unreadable without failing the
/// repository.
///
/// # Errors
///
/// Returns error if `repo_dir` cannot be canonicalized. This is the only
/// fatal condition; everything else falls through to a default.
pub fn resolve_metadata(repo_dir: &Path, default_description: &str) -> Result<RepoMetadata> {
    let resolved = repo_dir
        .canonicalize()
        .with_context(|| format!("Failed to resolve path: {}", repo_dir.display()))?;

    let display_name = resolved
        .file_name()
        .and_then(|name| name.to_str())
        .map(strip_git_suffix)
        .unwrap_or_default()
        .to_string();

    let description = first_line(&repo_dir.join("description"))
        .or_else(|| first_line(&repo_dir.join(".git/description")))
        .unwrap_or_else(|| default_description.to_string());

    let owner = first_line(&repo_dir.join("owner"))
        .or_else(|| first_line(&repo_dir.join(".git/owner")))
        .map(|line| line.trim_end_matches('\n').to_string())
        .unwrap_or_default();

    Ok(RepoMetadata {
        display_name,
        description,
        owner,
    })
}

/// Strips exactly one trailing `.git` suffix.
fn strip_git_suffix(name: &str) -> &str {
    name.strip_suffix(".git").unwrap_or(name)
}

/// Reads the first line of `path`, bounded to [`MAX_LINE_LEN`] bytes.
///
/// The trailing newline, if read, is kept. Returns None when the file
/// cannot be opened or yields no bytes, so callers can fall through to
/// the next candidate.
fn first_line(path: &Path) -> Option<String> {
    let file = File::open(path).ok()?;
    let mut reader = BufReader::new(file).take(MAX_LINE_LEN as u64);
    let mut buf = Vec::new();
    reader.read_until(b'\n', &mut buf).ok()?;
    if buf.is_empty() {
        return None;
    }
    Some(String::from_utf8_lossy(&buf).into_owned())
}
