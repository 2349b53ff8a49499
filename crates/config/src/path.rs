//! Site-relative paths used for generated output such as feeds.

use std::fmt;

/// A normalized path relative to the generated site's root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelPath(relative_path::RelativePathBuf);

impl RelPath {
    pub fn new() -> Self {
        Self(relative_path::RelativePathBuf::new())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn as_path(&self) -> &relative_path::RelativePath {
        &self.0
    }
}

impl Default for RelPath {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<&str> for RelPath {
    type Error = &'static str;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        // Windows-style separators are accepted and rewritten.
        let value = value.replace('\\', "/");
        if value.trim().is_empty() {
            return Err("path is empty");
        }
        if value.starts_with('/') {
            return Err("path must be relative to the site root");
        }
        let normalized = relative_path::RelativePath::new(&value).normalize();
        let s = normalized.as_str();
        if s.is_empty() {
            return Err("path resolves to the site root");
        }
        if s == ".." || s.starts_with("../") {
            return Err("path escapes the site root");
        }
        Ok(Self(normalized))
    }
}

impl fmt::Display for RelPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl serde::Serialize for RelPath {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
