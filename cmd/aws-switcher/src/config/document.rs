use indexmap::IndexMap;
use std::{
    fmt::{self, Display},
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
    str::FromStr,
};
use tempfile::NamedTempFile;

use super::locator;

/// Name under which keys that appear before the first `[section]` header are kept.
pub const PRE_SECTION: &str = "DEFAULT";

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed to load AWS credentials file {path}: {error}")]
    Load { path: PathBuf, error: io::Error },
    #[error("failed to load AWS credentials file {path}: {error}")]
    Malformed { path: PathBuf, error: ParseError },
    #[error("failed to save credentials file {path}: {error}")]
    Save { path: PathBuf, error: io::Error },
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: section header has no name")]
    EmptySectionName { line: usize },
    #[error("line {line}: key is empty")]
    EmptyKey { line: usize },
    #[error("line {line}: expected `[section]` or `key = value`, found {content:?}")]
    UnexpectedLine { line: usize, content: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Entry {
    value: String,
    comments: Vec<String>,
}

/// Ordered key/value pairs of one `[section]`.
///
/// Comment lines found above the header or above a key are kept with it and
/// written back in the same place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    comments: Vec<String>,
    entries: IndexMap<String, Entry>,
}

impl Section {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|entry| entry.value.as_str())
    }

    /// Value of `key`, or `""` when the key is absent.
    pub fn value(&self, key: &str) -> &str {
        self.get(key).unwrap_or_default()
    }

    /// Overwrites an existing key in place, otherwise appends it.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.entry(key.into()).or_default().value = value.into();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(k, entry)| (k.as_str(), entry.value.as_str()))
    }

    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    fn push(&mut self, key: &str, value: &str, comments: Vec<String>) {
        let entry = self.entries.entry(key.to_owned()).or_default();
        entry.value = value.to_owned();
        entry.comments.extend(comments);
    }

    fn write_entries(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, entry) in &self.entries {
            for comment in &entry.comments {
                writeln!(f, "{comment}")?;
            }
            writeln!(f, "{key} = {}", entry.value)?;
        }
        Ok(())
    }
}

/// In-memory form of an AWS shared credentials file.
///
/// Sections keep the order in which they first appear in the file, and so do
/// the keys inside each section. Inline comments (`region = x # note`) are
/// moved to their own line above the key or header they followed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialDocument {
    sections: IndexMap<String, Section>,
    trailing: Vec<String>,
}

impl CredentialDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(path: &Path) -> Result<Self, Error> {
        let data = fs::read_to_string(path).map_err(|error| Error::Load {
            path: path.to_path_buf(),
            error,
        })?;
        let document: Self = data.parse().map_err(|error| Error::Malformed {
            path: path.to_path_buf(),
            error,
        })?;
        tracing::debug!(
            "loaded {} section(s) from {}",
            document.sections.len(),
            path.display()
        );
        Ok(document)
    }

    /// Replaces the file at `path` with the serialized document.
    ///
    /// The new contents are written to a temporary file next to `path` and then
    /// renamed over it, so a failed save leaves the previous file intact.
    pub fn save(&self, path: &Path) -> Result<(), Error> {
        let save_failed = |error: io::Error| Error::Save {
            path: path.to_path_buf(),
            error,
        };
        let dir = locator::ensure_directory(path).map_err(|e| save_failed(io::Error::other(e)))?;
        let mut file = NamedTempFile::new_in(&dir).map_err(save_failed)?;
        file.write_all(self.to_string().as_bytes())
            .map_err(save_failed)?;
        file.as_file().sync_all().map_err(save_failed)?;
        if let Ok(metadata) = fs::metadata(path) {
            fs::set_permissions(file.path(), metadata.permissions()).map_err(save_failed)?;
        }
        file.persist(path).map_err(|e| save_failed(e.error))?;
        tracing::debug!("wrote {}", path.display());
        Ok(())
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    /// Section `name`, appended empty if the document has none.
    pub fn section_mut(&mut self, name: &str) -> &mut Section {
        self.sections.entry(name.to_owned()).or_default()
    }

    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    pub fn sections(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.sections.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl FromStr for CredentialDocument {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut document = Self::new();
        let mut current = PRE_SECTION.to_owned();
        let mut pending: Vec<String> = Vec::new();
        for (idx, raw) in s.trim_start_matches('\u{feff}').lines().enumerate() {
            let line = raw.trim();
            let line_no = idx + 1;
            if line.is_empty() {
                continue;
            }
            if is_comment(line) {
                pending.push(line.to_owned());
                continue;
            }
            let unexpected = || ParseError::UnexpectedLine {
                line: line_no,
                content: raw.to_owned(),
            };
            if let Some(header) = line.strip_prefix('[') {
                let (name, rest) = header.split_once(']').ok_or_else(unexpected)?;
                let rest = rest.trim();
                if !rest.is_empty() && !is_comment(rest) {
                    return Err(unexpected());
                }
                let name = name.trim();
                if name.is_empty() {
                    return Err(ParseError::EmptySectionName { line: line_no });
                }
                if !rest.is_empty() {
                    pending.push(rest.to_owned());
                }
                current = name.to_owned();
                document
                    .section_mut(&current)
                    .comments
                    .extend(pending.drain(..));
                continue;
            }
            let (key, value) = line.split_once(['=', ':']).ok_or_else(unexpected)?;
            let key = key.trim();
            if key.is_empty() {
                return Err(ParseError::EmptyKey { line: line_no });
            }
            let (value, comment) = split_inline_comment(value.trim());
            pending.extend(comment.map(ToOwned::to_owned));
            document
                .section_mut(&current)
                .push(key, value, std::mem::take(&mut pending));
        }
        document.trailing = pending;
        Ok(document)
    }
}

fn is_comment(line: &str) -> bool {
    line.starts_with(['#', ';'])
}

/// Splits `value # note` into the value and the comment. The marker only
/// counts when whitespace precedes it, so `abc#def` stays one value.
fn split_inline_comment(value: &str) -> (&str, Option<&str>) {
    for (idx, c) in value.char_indices() {
        if c.is_whitespace() && is_comment(&value[idx + c.len_utf8()..]) {
            return (value[..idx].trim_end(), Some(value[idx..].trim_start()));
        }
    }
    (value, None)
}

impl Display for CredentialDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut wrote_any = false;
        if let Some(pre) = self.sections.get(PRE_SECTION) {
            for comment in &pre.comments {
                writeln!(f, "{comment}")?;
            }
            pre.write_entries(f)?;
            wrote_any = !pre.comments.is_empty() || !pre.entries.is_empty();
        }
        for (name, section) in self.sections() {
            if name == PRE_SECTION {
                continue;
            }
            if wrote_any {
                writeln!(f)?;
            }
            for comment in &section.comments {
                writeln!(f, "{comment}")?;
            }
            writeln!(f, "[{name}]")?;
            section.write_entries(f)?;
            wrote_any = true;
        }
        if !self.trailing.is_empty() {
            if wrote_any {
                writeln!(f)?;
            }
            for comment in &self.trailing {
                writeln!(f, "{comment}")?;
            }
        }
        Ok(())
    }
}
