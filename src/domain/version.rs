use semver::{BuildMetadata, Prerelease, Version};

use super::prerelease;
use super::release_type::ReleaseType;
use super::tag::Tag;
use crate::error::{ReleaseNotesError, Result};

/// Increment one version component, failing instead of wrapping at `u64::MAX`.
fn increment(version: &Version, component: &str, value: u64) -> Result<u64> {
    value.checked_add(1).ok_or_else(|| {
        ReleaseNotesError::invalid_version(
            version.to_string(),
            format!("{} version {} is out of range", component, value),
        )
    })
}

/// Bump a semantic version according to the release type.
///
/// Plain releases increment one component, reset the lower ones and clear any
/// prerelease. The `pre*` variants do the same and then start a prerelease
/// cycle; `Prerelease` advances an existing cycle (or starts one on the next
/// patch). Build metadata is always dropped.
pub fn bump(version: &Version, release: ReleaseType, preid: Option<&str>) -> Result<Version> {
    let mut next = Version {
        major: version.major,
        minor: version.minor,
        patch: version.patch,
        pre: Prerelease::EMPTY,
        build: BuildMetadata::EMPTY,
    };

    match release {
        ReleaseType::Major | ReleaseType::Premajor => {
            next.major = increment(version, "major", version.major)?;
            next.minor = 0;
            next.patch = 0;
        }
        ReleaseType::Minor | ReleaseType::Preminor => {
            next.minor = increment(version, "minor", version.minor)?;
            next.patch = 0;
        }
        ReleaseType::Patch | ReleaseType::Prepatch => {
            next.patch = increment(version, "patch", version.patch)?;
        }
        ReleaseType::Prerelease => {
            if version.pre.is_empty() {
                next.patch = increment(version, "patch", version.patch)?;
            }
        }
    }

    next.pre = match release {
        ReleaseType::Premajor | ReleaseType::Preminor | ReleaseType::Prepatch => {
            prerelease::start(preid)?
        }
        ReleaseType::Prerelease => prerelease::increment(&version.pre, preid)?,
        _ => Prerelease::EMPTY,
    };

    Ok(next)
}

/// Compute the next version string for a tag, keeping the tag's prefix.
///
/// # Example
/// ```ignore
/// assert_eq!(next_version("v1.2.3", ReleaseType::Minor, None)?, "v1.3.0");
/// assert_eq!(next_version("v1.2.3-beta.1", ReleaseType::Prerelease, None)?, "v1.2.3-beta.2");
/// ```
pub fn next_version(tag: &str, release: ReleaseType, preid: Option<&str>) -> Result<String> {
    let tag = Tag::new(tag);
    let current = tag.version()?;
    let next = bump(&current, release, preid)?;
    Ok(format!("{}{}", tag.prefix(), next))
}
