use std::sync::OnceLock;

use regex::Regex;

use crate::error::{ReleaseNotesError, Result};

/// Optional prefix ending in something other than a digit or dot, then the
/// MAJOR.MINOR.PATCH core with any prerelease or build suffix.
fn tag_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^((?:.*?[^\d.])?)(\d+\.\d+\.\d+(?:[-+].*)?)$").ok())
        .as_ref()
}

/// Represents a git tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
}

impl Tag {
    /// Create a new tag from a string
    pub fn new(name: impl Into<String>) -> Self {
        Tag { name: name.into() }
    }

    /// Split the tag into its prefix and version text
    /// Example: "v1.2.3" -> ("v", "1.2.3"), "app2-v2.0.0-rc.1" -> ("app2-v", "2.0.0-rc.1")
    fn split(&self) -> Option<(&str, &str)> {
        let captures = tag_pattern()?.captures(&self.name)?;
        let prefix = captures.get(1)?.as_str();
        let version = captures.get(2)?.as_str();
        Some((prefix, version))
    }

    /// Text preceding the MAJOR.MINOR.PATCH core (empty when there is none)
    pub fn prefix(&self) -> &str {
        self.split().map(|(prefix, _)| prefix).unwrap_or("")
    }

    /// Extract version text from tag (e.g., "v1.2.3" -> "1.2.3")
    pub fn version_part(&self) -> Option<&str> {
        self.split().map(|(_, version)| version)
    }

    /// Parse the tag's version part as a semantic version
    pub fn version(&self) -> Result<semver::Version> {
        let text = self.version_part().ok_or_else(|| {
            ReleaseNotesError::invalid_version(&self.name, "no MAJOR.MINOR.PATCH component")
        })?;
        semver::Version::parse(text)
            .map_err(|e| ReleaseNotesError::invalid_version(&self.name, e.to_string()))
    }
}

/// Pick the latest tag from a tag listing.
///
/// Tags are ranked by their semantic version; tags that do not parse rank
/// below every parseable tag and are ordered among themselves by name.
pub fn select_latest(tags: &[String]) -> Option<&String> {
    tags.iter()
        .map(|name| (Tag::new(name.as_str()).version().ok(), name))
        .max()
        .map(|(_, name)| name)
}
