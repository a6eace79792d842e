//! Sections and key/value entries

/// A single `key = value` line, with the comment lines directly above it.
///
/// Values may span several lines: AWS nested settings such as
/// `s3 =` followed by indented lines keep the indented lines verbatim,
/// each prefixed by `\n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    pub value: String,
    pub comment: String,
}

impl Entry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            comment: String::new(),
        }
    }
}

/// A named section of an INI document.
///
/// Sections are created through [`IniFile::new_section`](crate::IniFile::new_section)
/// so that name uniqueness is enforced by the owning document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    name: String,
    comment: String,
    entries: Vec<Entry>,
}

impl Section {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comment: String::new(),
            entries: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Free-text comment rendered above the section header.
    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn set_comment(&mut self, comment: impl Into<String>) {
        self.comment = comment.into();
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_str())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.value.as_str())
    }

    /// Set a key, replacing the value in place if the key already exists.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.upsert(Entry::new(key, value));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.comment.is_empty()
    }

    /// Copy the comment and every entry of `other` into this section.
    ///
    /// The name is left untouched; existing entries are replaced.
    pub fn copy_from(&mut self, other: &Section) {
        self.comment = other.comment.clone();
        self.entries = other.entries.clone();
    }

    /// Insert or replace an entry, returning its index.
    ///
    /// A replacement keeps the original position. The replacing entry's
    /// comment wins only when it has one.
    pub(crate) fn upsert(&mut self, entry: Entry) -> usize {
        match self.entries.iter().position(|e| e.key == entry.key) {
            Some(idx) => {
                let existing = &mut self.entries[idx];
                existing.value = entry.value;
                if !entry.comment.is_empty() {
                    existing.comment = entry.comment;
                }
                idx
            }
            None => {
                self.entries.push(entry);
                self.entries.len() - 1
            }
        }
    }

    pub(crate) fn append_continuation(&mut self, idx: usize, line: &str) {
        if let Some(entry) = self.entries.get_mut(idx) {
            entry.value.push('\n');
            entry.value.push_str(line);
        }
    }

    pub(crate) fn append_comment(&mut self, comment: &str) {
        if comment.is_empty() {
            return;
        }
        if !self.comment.is_empty() {
            self.comment.push('\n');
        }
        self.comment.push_str(comment);
    }

    /// Render the section body; `with_header` is false for the default section.
    pub(crate) fn render_into(&self, out: &mut String, with_header: bool) {
        push_comment(out, &self.comment);
        if with_header {
            out.push('[');
            out.push_str(&self.name);
            out.push_str("]\n");
        }
        for entry in &self.entries {
            push_comment(out, &entry.comment);
            let (first, rest) = match entry.value.split_once('\n') {
                Some((first, rest)) => (first, Some(rest)),
                None => (entry.value.as_str(), None),
            };
            out.push_str(&entry.key);
            out.push_str(" =");
            if !first.is_empty() {
                out.push(' ');
                out.push_str(first);
            }
            out.push('\n');
            if let Some(rest) = rest {
                out.push_str(rest);
                out.push('\n');
            }
        }
    }
}

/// Render comment text, giving bare lines a `# ` marker.
pub(crate) fn push_comment(out: &mut String, comment: &str) {
    for line in comment.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with('#') || trimmed.starts_with(';') {
            out.push_str(line);
        } else if trimmed.is_empty() {
            out.push('#');
        } else {
            out.push_str("# ");
            out.push_str(line);
        }
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_replaces_in_place() {
        let mut section = Section::new("profile dev");
        section.set("region", "us-east-1").set("output", "json");
        section.set("region", "eu-west-1");

        let keys: Vec<_> = section.keys().collect();
        assert_eq!(keys, vec!["region", "output"]);
        assert_eq!(section.get("region"), Some("eu-west-1"));
    }

    #[test]
    fn copy_from_keeps_name() {
        let mut source = Section::new("profile a");
        source.set_comment("# from registry");
        source.set("sso_role_name", "Admin");

        let mut target = Section::new("profile ns.a");
        target.set("stale", "value");
        target.copy_from(&source);

        assert_eq!(target.name(), "profile ns.a");
        assert_eq!(target.comment(), "# from registry");
        assert_eq!(target.get("sso_role_name"), Some("Admin"));
        assert_eq!(target.get("stale"), None);
    }

    #[test]
    fn render_bare_comment_lines_get_marker() {
        let mut section = Section::new("profile a");
        section.set_comment("plain note\n; kept\n# kept too");
        section.set("region", "us-east-1");

        let mut out = String::new();
        section.render_into(&mut out, true);

        assert_eq!(
            out,
            "# plain note\n; kept\n# kept too\n[profile a]\nregion = us-east-1\n"
        );
    }

    #[test]
    fn render_multiline_value() {
        let mut section = Section::new("profile a");
        section.set("s3", "\n  max_concurrent_requests = 20");

        let mut out = String::new();
        section.render_into(&mut out, true);

        assert_eq!(out, "[profile a]\ns3 =\n  max_concurrent_requests = 20\n");
    }
}
