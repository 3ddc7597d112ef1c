use std::fmt;

/// Which semantic-version component a release increments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ReleaseType {
    Major,
    Premajor,
    Minor,
    Preminor,
    Patch,
    Prepatch,
    Prerelease,
}

impl ReleaseType {
    /// True for the variants that produce a prerelease version
    pub fn is_prerelease(&self) -> bool {
        matches!(
            self,
            ReleaseType::Premajor
                | ReleaseType::Preminor
                | ReleaseType::Prepatch
                | ReleaseType::Prerelease
        )
    }
}

impl fmt::Display for ReleaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReleaseType::Major => "major",
            ReleaseType::Premajor => "premajor",
            ReleaseType::Minor => "minor",
            ReleaseType::Preminor => "preminor",
            ReleaseType::Patch => "patch",
            ReleaseType::Prepatch => "prepatch",
            ReleaseType::Prerelease => "prerelease",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ValueEnum;

    #[test]
    fn test_value_enum_names_match_display() {
        for variant in ReleaseType::value_variants() {
            let parsed = ReleaseType::from_str(&variant.to_string(), false).unwrap();
            assert_eq!(&parsed, variant);
        }
    }

    #[test]
    fn test_is_prerelease() {
        assert!(ReleaseType::Premajor.is_prerelease());
        assert!(ReleaseType::Prerelease.is_prerelease());
        assert!(!ReleaseType::Major.is_prerelease());
        assert!(!ReleaseType::Patch.is_prerelease());
    }

    #[test]
    fn test_unknown_name_rejected() {
        assert!(ReleaseType::from_str("hotfix", false).is_err());
    }
}
