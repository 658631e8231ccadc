//! Line splitting and literal escaping
//!
//! Everything here works on raw bytes. OBJ files are nominally ASCII, but the
//! tool does not validate them, so arbitrary content must pass through intact.

/// Opening/closing delimiter of every record
const QUOTE: u8 = b'"';

/// Two-character newline escape written before the closing quote
const NEWLINE_ESCAPE: &[u8] = b"\\n";

/// Split content on universal newline boundaries (`\n`, `\r\n`, `\r`).
///
/// A terminator at the very end does not produce an extra empty line, so
/// `"a\n"` and `"a"` both yield `["a"]`, while `"\n"` yields `[""]`.
pub fn split_lines(content: &[u8]) -> Vec<&[u8]> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < content.len() {
        match content[i] {
            b'\n' => {
                lines.push(&content[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&content[start..i]);
                i += 1;
                // CRLF counts as a single boundary
                if content.get(i) == Some(&b'\n') {
                    i += 1;
                }
                start = i;
            }
            _ => i += 1,
        }
    }

    if start < content.len() {
        lines.push(&content[start..]);
    }

    lines
}

/// Append one record for `line` to `out`: `"<line>\n"` plus a real line feed.
///
/// The line is copied verbatim. Quotes and backslashes inside it are NOT
/// escaped, so such lines produce literals that need fixing by hand.
pub fn escape_line(line: &[u8], out: &mut Vec<u8>) {
    out.reserve(line.len() + NEWLINE_ESCAPE.len() + 3);
    out.push(QUOTE);
    out.extend_from_slice(line);
    out.extend_from_slice(NEWLINE_ESCAPE);
    out.push(QUOTE);
    out.push(b'\n');
}

/// Escape every line of `content`, in order, into a single buffer.
pub fn escape_lines(content: &[u8]) -> Vec<u8> {
    let lines = split_lines(content);
    let mut out = Vec::with_capacity(content.len() + lines.len() * 5);

    for line in &lines {
        escape_line(line, &mut out);
    }

    tracing::debug!("Escaped {} lines into {} bytes", lines.len(), out.len());
    out
}

/// Recover the original lines from escaped output.
///
/// Returns `None` if any record is not of the form `"<line>\n"`.
pub fn unescape_records(output: &[u8]) -> Option<Vec<&[u8]>> {
    let mut lines = Vec::new();

    for record in output.split(|&b| b == b'\n') {
        if record.is_empty() {
            // Trailing line feed after the last record
            continue;
        }
        let inner = record.strip_prefix(&[QUOTE])?.strip_suffix(&[QUOTE])?;
        lines.push(inner.strip_suffix(NEWLINE_ESCAPE)?);
    }

    Some(lines)
}
