//! HTML escaping for untrusted text.

use std::io::{self, Write};

/// Escapes text for safe embedding inside HTML element content.
///
/// Replaces `<`, `>`, `'`, `&`, and `"` with their named character
/// references and streams everything else through unchanged, in a single
/// pass without intermediate allocation. Consumption stops at the first
/// NUL character, or before a character that would push the number of
/// consumed input bytes past `max_len`.
///
/// Safe for element content and double-quoted attribute values; not a
/// general attribute-context escaper beyond that.
///
/// # Arguments
///
/// * `out`: Destination sink
/// * `text`: Untrusted text to escape
/// * `max_len`: Maximum number of input bytes to consume
///
/// # Errors
///
/// Returns error only if writing to `out` fails.
pub fn escape_html<W: Write>(out: &mut W, text: &str, max_len: usize) -> io::Result<()> {
    let mut consumed = 0usize;
    for ch in text.chars() {
        if ch == '\0' || consumed + ch.len_utf8() > max_len {
            break;
        }
        consumed += ch.len_utf8();
        match ch {
            '<' => out.write_all(b"&lt;")?,
            '>' => out.write_all(b"&gt;")?,
            '\'' => out.write_all(b"&#39;")?,
            '&' => out.write_all(b"&amp;")?,
            '"' => out.write_all(b"&quot;")?,
            _ => {
                let mut buf = [0u8; 4];
                out.write_all(ch.encode_utf8(&mut buf).as_bytes())?;
            }
        }
    }
    Ok(())
}
