use anyhow::{Context, Result};
use gitdex::{Config, RepositoryEntry};
use std::io::{self, Write};
use std::process::ExitCode;

/// Streams the index page for every configured repository into `out`.
///
/// Repositories are processed strictly in argument order. A repository
/// that cannot be opened or walked is skipped with a diagnostic on
/// stderr; the page is still completed for the remaining repositories.
///
/// # Returns
///
/// `true` if any repository was skipped.
///
/// # Errors
///
/// Returns error on fatal conditions only: a repository argument that
/// cannot be resolved to an absolute path, or a write failure on `out`.
fn run(config: &Config, out: &mut impl Write) -> Result<bool> {
    gitdex::write_header(out, &config.description, &config.relpath)
        .context("Failed to write page header")?;

    let mut failed = false;
    for repodir in &config.repodirs {
        let metadata = gitdex::resolve_metadata(repodir, &config.description)
            .with_context(|| format!("Failed to resolve metadata for {}", repodir.display()))?;

        let repo = match gitdex::open_repository(repodir) {
            Ok(repo) => repo,
            Err(err) => {
                eprintln!("gitdex: {err:#}");
                failed = true;
                continue;
            }
        };

        let last_commit = match gitdex::latest_commit_time(&repo) {
            Ok(last_commit) => last_commit,
            Err(err) => {
                eprintln!("gitdex: {err:#}");
                failed = true;
                continue;
            }
        };

        let entry = RepositoryEntry::new(metadata, last_commit);
        gitdex::write_row(out, &entry)
            .with_context(|| format!("Failed to write row for {}", repodir.display()))?;
    }

    gitdex::write_footer(out).context("Failed to write page footer")?;
    out.flush().context("Failed to flush output")?;

    Ok(failed)
}

fn main() -> Result<ExitCode> {
    let config = Config::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let failed = run(&config, &mut out)?;
    Ok(if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
