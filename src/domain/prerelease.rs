//! Pre-release identifier handling for semantic versioning
//!
//! Implements how the `pre*` release types start and advance the
//! dot-separated prerelease identifiers (https://semver.org/#spec-item-9).

use semver::Prerelease;

use crate::error::{ReleaseNotesError, Result};

/// Build a prerelease from dot-separated identifiers, validating the result.
fn from_identifiers(identifiers: &[String]) -> Result<Prerelease> {
    let text = identifiers.join(".");
    Prerelease::new(&text).map_err(|e| {
        ReleaseNotesError::invalid_version(text.clone(), format!("invalid prerelease: {}", e))
    })
}

fn is_numeric(identifier: &str) -> bool {
    !identifier.is_empty() && identifier.chars().all(|c| c.is_ascii_digit())
}

/// The first prerelease of a new cycle
///
/// `None` -> "0", `Some("beta")` -> "beta.0"
pub fn start(preid: Option<&str>) -> Result<Prerelease> {
    let identifiers = match preid {
        Some(id) => vec![id.to_string(), "0".to_string()],
        None => vec!["0".to_string()],
    };
    from_identifiers(&identifiers)
}

/// Advance an existing prerelease
///
/// - empty prerelease: starts a new cycle
/// - a `preid` that differs from the first identifier (or is not followed by
///   a number) resets to `<preid>.0`
/// - otherwise the last numeric identifier is incremented, or `.0` is
///   appended when no identifier is numeric
///
/// # Examples
/// ```ignore
/// "beta.1" -> "beta.2"
/// "beta"   -> "beta.0"
/// "beta.1" with preid "rc" -> "rc.0"
/// ```
pub fn increment(current: &Prerelease, preid: Option<&str>) -> Result<Prerelease> {
    if current.is_empty() {
        return start(preid);
    }

    let mut identifiers: Vec<String> = current.as_str().split('.').map(String::from).collect();

    if let Some(id) = preid {
        let same_series = identifiers.first().map(String::as_str) == Some(id)
            && identifiers.get(1).map(|s| is_numeric(s)).unwrap_or(false);
        if !same_series {
            return start(preid);
        }
    }

    let last_numeric = identifiers
        .iter()
        .rposition(|identifier| is_numeric(identifier));

    match last_numeric {
        Some(index) => {
            let next = identifiers[index]
                .parse::<u64>()
                .ok()
                .and_then(|value| value.checked_add(1))
                .ok_or_else(|| {
                    ReleaseNotesError::invalid_version(
                        current.as_str(),
                        format!("prerelease number '{}' is out of range", identifiers[index]),
                    )
                })?;
            identifiers[index] = next.to_string();
        }
        None => identifiers.push("0".to_string()),
    }

    from_identifiers(&identifiers)
}
