//! Line-oriented INI parser
//!
//! Recognized lines, after trimming:
//! - blank lines
//! - `#` / `;` comments, attached to the next header or key
//! - `[name]` section headers, optionally followed by a `#` / `;` comment
//!   that is kept above the header on render
//! - `key = value` pairs (split on the first `=`)
//! - indented lines directly under a key, kept verbatim as value continuation

use crate::document::{DEFAULT_SECTION, IniFile};
use crate::error::{Error, Result};
use crate::section::Entry;

pub(crate) fn parse(source: &str) -> Result<IniFile> {
    let mut file = IniFile::new();
    let mut current = 0usize;
    let mut pending_comment: Vec<&str> = Vec::new();
    let mut last_entry: Option<usize> = None;

    for (idx, raw) in source.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            last_entry = None;
            continue;
        }

        if trimmed.starts_with('#') || trimmed.starts_with(';') {
            pending_comment.push(trimmed);
            last_entry = None;
            continue;
        }

        if let Some(header) = trimmed.strip_prefix('[') {
            let (name, rest) = header
                .split_once(']')
                .ok_or_else(|| Error::parse(line_no, "unterminated section header"))?;
            let (name, rest) = (name.trim(), rest.trim());
            if rest.starts_with('#') || rest.starts_with(';') {
                pending_comment.push(rest);
            } else if !rest.is_empty() {
                return Err(Error::parse(
                    line_no,
                    format!("unexpected text after section header: {rest:?}"),
                ));
            }

            current = if name == DEFAULT_SECTION {
                0
            } else {
                file.index_or_insert(name)
                    .map_err(|reason| Error::parse(line_no, reason))?
            };
            file.section_at_mut(current)
                .append_comment(&pending_comment.join("\n"));
            pending_comment.clear();
            last_entry = None;
            continue;
        }

        if raw.starts_with([' ', '\t'])
            && let Some(entry_idx) = last_entry
        {
            file.section_at_mut(current)
                .append_continuation(entry_idx, raw.trim_end());
            continue;
        }

        let (key, value) = trimmed
            .split_once('=')
            .ok_or_else(|| Error::parse(line_no, format!("expected `key = value`, got {trimmed:?}")))?;
        let key = key.trim();
        if key.is_empty() {
            return Err(Error::parse(line_no, "missing key before `=`"));
        }

        let mut entry = Entry::new(key, value.trim());
        entry.comment = pending_comment.join("\n");
        pending_comment.clear();
        last_entry = Some(file.section_at_mut(current).upsert(entry));
    }

    file.set_trailing_comment(pending_comment.join("\n"));
    Ok(file)
}
