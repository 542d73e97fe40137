//! Index page rendering.
//!
//! The page is streamed to an injected sink in three strictly ordered
//! phases: header, one row per repository, footer. Nothing is buffered
//! or rewritten; every write appends.

use crate::escape::escape_html;
use crate::git::CommitTime;
use crate::metadata::RepoMetadata;
use std::io::{self, Write};

/// Everything the renderer needs for one repository row.
///
/// Transient; built per input path and dropped after its row is written.
#[derive(Debug, Clone)]
pub struct RepositoryEntry {
    pub display_name: String,
    pub description: String,
    /// Carried alongside the rendered fields for future pages; the index
    /// table itself does not show the owner.
    pub owner: String,
    pub last_commit: Option<CommitTime>,
}

impl RepositoryEntry {
    /// Combines resolved metadata with the latest-commit lookup result.
    pub fn new(metadata: RepoMetadata, last_commit: Option<CommitTime>) -> Self {
        Self {
            display_name: metadata.display_name,
            description: metadata.description,
            owner: metadata.owner,
            last_commit,
        }
    }
}

/// Writes the document head, page heading, and table opening.
///
/// `description` doubles as title and `<h1>` heading and is escaped.
/// `relpath` prefixes the favicon and stylesheet links; it is
/// operator-supplied and written verbatim.
///
/// # Errors
///
/// Returns error only if writing to `out` fails.
pub fn write_header<W: Write>(out: &mut W, description: &str, relpath: &str) -> io::Result<()> {
    out.write_all(
        b"<!DOCTYPE html>\n\
          <html>\n<head>\n\
          <meta http-equiv=\"Content-Type\" content=\"text/html; charset=UTF-8\" />\n\
          <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />\n\
          <title>",
    )?;
    escape_html(out, description, description.len())?;
    out.write_all(b"</title>\n")?;
    write!(
        out,
        "<link rel=\"icon\" type=\"image/png\" href=\"{relpath}favicon.ico\" />\n\
         <link rel=\"stylesheet\" type=\"text/css\" href=\"{relpath}style.css\" />\n"
    )?;
    out.write_all(b"</head>\n<body id=\"home\">\n<h1>")?;
    escape_html(out, description, description.len())?;
    out.write_all(
        b"</h1>\n<div id=\"content\">\n\
          <h2 id=\"repositories\">Repositories</h2>\n\
          <div class=\"table-container\">\n<table id=\"index\"><thead>\n\
          <tr><td><b>Name</b></td><td><b>Description</b></td><td><b>Last commit</b></td></tr>\
          </thead><tbody>\n",
    )
}

/// Writes one table row for `entry`.
///
/// Name and description pass through the sanitizer; the anchor href is
/// the escaped name plus a trailing slash, forming a directory-style
/// link. A repository without commits gets an empty timestamp cell.
///
/// # Errors
///
/// Returns error only if writing to `out` fails.
pub fn write_row<W: Write>(out: &mut W, entry: &RepositoryEntry) -> io::Result<()> {
    out.write_all(b"<tr><td><a href=\"")?;
    escape_html(out, &entry.display_name, entry.display_name.len())?;
    out.write_all(b"/\">")?;
    escape_html(out, &entry.display_name, entry.display_name.len())?;
    out.write_all(b"</a></td><td>")?;
    escape_html(out, &entry.description, entry.description.len())?;
    out.write_all(b"</td><td>")?;
    if let Some(formatted) = entry.last_commit.as_ref().and_then(CommitTime::format_utc) {
        out.write_all(formatted.as_bytes())?;
    }
    out.write_all(b"</td></tr>\n")
}

/// Writes the table closing and the static contribution footer.
///
/// # Errors
///
/// Returns error only if writing to `out` fails.
pub fn write_footer<W: Write>(out: &mut W) -> io::Result<()> {
    out.write_all(
        b"</tbody>\n</table>\n</div>\n\
          <h2 id=\"contribute\">Contribute</h2>\n\
          <p>Patches are welcome by e-mail; see \
          <a href=\"https://git-send-email.io\">git-send-email.io</a> if you have not sent \
          one before. Set the subject prefix to the repository you are patching:</p>\n\
          <pre><code>git config format.subjectPrefix \"PATCH &lt;name-of-repository&gt;\"</code></pre>\n\
          </div>\n</body>\n</html>\n",
    )
}
