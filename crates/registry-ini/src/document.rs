//! The ordered INI document

use std::fmt;
use std::str::FromStr;

use registry_fs::{NormalizedPath, io};

use crate::error::{Error, Result};
use crate::parser;
use crate::section::{Section, push_comment};

/// Name of the reserved section holding keys that precede every header.
pub const DEFAULT_SECTION: &str = "DEFAULT";

/// An INI document whose sections keep their file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IniFile {
    sections: Vec<Section>,
    trailing_comment: String,
}

impl Default for IniFile {
    fn default() -> Self {
        Self::new()
    }
}

impl IniFile {
    /// An empty document containing only the default section.
    pub fn new() -> Self {
        Self {
            sections: vec![Section::new(DEFAULT_SECTION)],
            trailing_comment: String::new(),
        }
    }

    pub fn parse(source: &str) -> Result<Self> {
        parser::parse(source)
    }

    /// Load and parse the file at `path`.
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        let content = io::read_text(path)?;
        let file = Self::parse(&content)?;
        tracing::debug!(path = %path, sections = file.sections.len(), "loaded ini file");
        Ok(file)
    }

    /// Load the file at `path`, or start an empty document if it does not exist.
    pub fn load_or_default(path: &NormalizedPath) -> Result<Self> {
        match io::read_text_if_exists(path)? {
            Some(content) => Self::parse(&content),
            None => {
                tracing::debug!(path = %path, "ini file missing, starting empty");
                Ok(Self::new())
            }
        }
    }

    /// Overwrite the file at `path` with the rendered document.
    pub fn save_to(&self, path: &NormalizedPath) -> Result<()> {
        io::write_text(path, &self.render())?;
        Ok(())
    }

    /// All sections in document order, the default section first.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section_names(&self) -> Vec<&str> {
        self.sections.iter().map(Section::name).collect()
    }

    pub fn has_section(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.position(name).map(|idx| &self.sections[idx])
    }

    pub fn section_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.position(name).map(|idx| &mut self.sections[idx])
    }

    pub fn default_section(&self) -> &Section {
        &self.sections[0]
    }

    /// Append a new, empty section at the end of the document.
    ///
    /// # Errors
    ///
    /// - [`Error::DuplicateSection`] if a section with this name exists
    /// - [`Error::InvalidSectionName`] if the name is empty or would break
    ///   the header syntax
    pub fn new_section(&mut self, name: &str) -> Result<&mut Section> {
        validate_section_name(name).map_err(|reason| Error::InvalidSectionName {
            name: name.to_string(),
            reason: reason.to_string(),
        })?;
        if self.has_section(name) {
            return Err(Error::DuplicateSection {
                name: name.to_string(),
            });
        }
        self.sections.push(Section::new(name));
        let idx = self.sections.len() - 1;
        Ok(&mut self.sections[idx])
    }

    /// Remove a section by name. Returns whether a section was removed.
    ///
    /// The default section is never removed.
    pub fn delete_section(&mut self, name: &str) -> bool {
        match self.position(name) {
            Some(idx) if idx > 0 => {
                self.sections.remove(idx);
                true
            }
            _ => false,
        }
    }

    /// Comment lines that followed the last section or key.
    pub fn trailing_comment(&self) -> &str {
        &self.trailing_comment
    }

    pub(crate) fn set_trailing_comment(&mut self, comment: String) {
        self.trailing_comment = comment;
    }

    /// Index of the named section, creating it at the end if missing.
    ///
    /// Used by the parser, where a repeated header merges into the
    /// earlier section instead of failing.
    pub(crate) fn index_or_insert(&mut self, name: &str) -> std::result::Result<usize, &'static str> {
        if let Some(idx) = self.position(name) {
            return Ok(idx);
        }
        validate_section_name(name)?;
        self.sections.push(Section::new(name));
        Ok(self.sections.len() - 1)
    }

    pub(crate) fn section_at_mut(&mut self, idx: usize) -> &mut Section {
        &mut self.sections[idx]
    }

    /// Render the document in INI syntax.
    pub fn render(&self) -> String {
        let mut blocks = Vec::with_capacity(self.sections.len() + 1);

        let default = &self.sections[0];
        if !default.is_empty() {
            let mut out = String::new();
            default.render_into(&mut out, false);
            blocks.push(out);
        }

        for section in &self.sections[1..] {
            let mut out = String::new();
            section.render_into(&mut out, true);
            blocks.push(out);
        }

        if !self.trailing_comment.is_empty() {
            let mut out = String::new();
            push_comment(&mut out, &self.trailing_comment);
            blocks.push(out);
        }

        blocks.join("\n")
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.name() == name)
    }
}

fn validate_section_name(name: &str) -> std::result::Result<(), &'static str> {
    if name.trim().is_empty() {
        return Err("section name is empty");
    }
    if name.contains(['[', ']']) {
        return Err("section name contains a bracket");
    }
    if name.contains(['\n', '\r']) {
        return Err("section name contains a line break");
    }
    Ok(())
}

impl fmt::Display for IniFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl FromStr for IniFile {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
