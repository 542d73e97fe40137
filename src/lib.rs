//! Static HTML index generator for Git repositories.

mod config;
mod escape;
mod git;
mod metadata;
mod page;

pub use config::Config;
pub use escape::escape_html;
pub use git::{CommitTime, latest_commit_time, open_repository};
pub use metadata::{MAX_LINE_LEN, RepoMetadata, resolve_metadata};
pub use page::{RepositoryEntry, write_footer, write_header, write_row};
