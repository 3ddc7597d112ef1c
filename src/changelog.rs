//! Splicing generated notes into a changelog under the `## [Unreleased]` line.

/// The line new entries are inserted after.
pub const UNRELEASED_MARKER: &str = "## [Unreleased]";

/// Result of splicing a new entry into changelog content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Splice {
    pub content: String,
    /// False when the marker was absent and had to be appended.
    pub marker_found: bool,
}

/// Insert `entry` right after the first `## [Unreleased]` marker.
///
/// The content is rebuilt as `before + marker + "\n\n" + entry + after`, where
/// `before` and `after` are the text around the first marker. Everything
/// outside the marker is kept verbatim and in order. Without a marker the
/// whole content counts as `before`, so marker and entry land at the end.
pub fn splice(existing: &str, entry: &str) -> Splice {
    let (before, after, marker_found) = match existing.split_once(UNRELEASED_MARKER) {
        Some((before, after)) => (before, after, true),
        None => (existing, "", false),
    };

    let mut content =
        String::with_capacity(existing.len() + UNRELEASED_MARKER.len() + entry.len() + 2);
    content.push_str(before);
    content.push_str(UNRELEASED_MARKER);
    content.push_str("\n\n");
    content.push_str(entry);
    content.push_str(after);

    Splice {
        content,
        marker_found,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splice_preserves_surroundings() {
        let result = splice("A\n## [Unreleased]\nB", "E");
        assert_eq!(result.content, "A\n## [Unreleased]\n\nE\nB");
        assert!(result.marker_found);
    }

    #[test]
    fn test_splice_keeps_previous_releases() {
        let existing = "# Changelog\n\n## [Unreleased]\n\n## [v1.0.0] - 2024-01-01\n\n- first\n";
        let result = splice(existing, "## [v1.1.0] - 2024-02-01\n\n- second\n");

        assert_eq!(
            result.content,
            "# Changelog\n\n## [Unreleased]\n\n## [v1.1.0] - 2024-02-01\n\n- second\n\n\n## [v1.0.0] - 2024-01-01\n\n- first\n"
        );
    }

    #[test]
    fn test_splice_empty_changelog() {
        let result = splice("", "E");
        assert_eq!(result.content, "## [Unreleased]\n\nE");
        assert!(!result.marker_found);
    }

    #[test]
    fn test_splice_without_marker_appends() {
        let result = splice("# Changelog\n", "E");
        assert_eq!(result.content, "# Changelog\n## [Unreleased]\n\nE");
        assert!(!result.marker_found);
    }

    #[test]
    fn test_splice_only_first_marker() {
        let result = splice("## [Unreleased]\nX\n## [Unreleased]\nY", "E");
        assert_eq!(
            result.content,
            "## [Unreleased]\n\nE\nX\n## [Unreleased]\nY"
        );
    }

    #[test]
    fn test_splice_empty_entry() {
        let result = splice("A\n## [Unreleased]\nB", "");
        assert_eq!(result.content, "A\n## [Unreleased]\n\n\nB");
    }
}
