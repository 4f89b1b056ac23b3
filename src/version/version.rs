// Tue Aug 04 2026 - Alex

use crate::version::error::VersionError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

static FORMAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+)\.(\d+)\.?(\d*)([.+-])?([0-9A-Za-z.-]*)$").expect("version format regex")
});

const SNAPSHOT_SUFFIX: &str = "SNAPSHOT";

/// Version element that can be bumped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    Major,
    Minor,
    Patch,
}

/// Semantic version: `MAJOR.MINOR.PATCH` plus an optional separator and
/// pre-release/build tag. Immutable; `separator` is cosmetic and takes
/// no part in equality or ordering.
#[derive(Debug, Clone)]
pub struct Version {
    major: u32,
    minor: u32,
    patch: u32,
    separator: Option<String>,
    special: Option<String>,
}

impl Version {
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self { major, minor, patch, separator: None, special: None }
    }

    pub fn with_special(major: u32, minor: u32, patch: u32, separator: &str, special: &str) -> Self {
        Self {
            major,
            minor,
            patch,
            separator: Some(separator.to_string()),
            special: Some(special.to_string()),
        }
    }

    /// Parse from text. PATCH defaults to 0 when omitted; the tag may be
    /// attached with `.`, `-`, `+` or no separator at all.
    pub fn parse(text: &str) -> Result<Self, VersionError> {
        let captures = FORMAT
            .captures(text)
            .ok_or_else(|| VersionError::InvalidFormat(text.to_string()))?;

        let number = |index: usize| -> Result<u32, VersionError> {
            captures
                .get(index)
                .map(|m| m.as_str())
                .filter(|s| !s.is_empty())
                .map_or(Ok(0), |s| {
                    s.parse().map_err(|_| VersionError::InvalidFormat(text.to_string()))
                })
        };

        let separator = captures.get(4).map(|m| m.as_str().to_string());
        let special = captures
            .get(5)
            .map(|m| m.as_str())
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string());

        // A dangling separator with no tag does not round-trip; reject it.
        if separator.is_some() && special.is_none() {
            return Err(VersionError::InvalidFormat(text.to_string()));
        }

        Ok(Self {
            major: number(1)?,
            minor: number(2)?,
            patch: number(3)?,
            separator,
            special,
        })
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn minor(&self) -> u32 {
        self.minor
    }

    pub fn patch(&self) -> u32 {
        self.patch
    }

    pub fn special(&self) -> Option<&str> {
        self.special.as_deref()
    }

    /// Bump the given element, zeroing everything less significant and
    /// dropping any pre-release tag.
    pub fn next(&self, element: Element) -> Self {
        match element {
            Element::Major => Version::new(self.major + 1, 0, 0),
            Element::Minor => Version::new(self.major, self.minor + 1, 0),
            Element::Patch => Version::new(self.major, self.minor, self.patch + 1),
        }
    }

    /// The release form of this version, with any pre-release tag stripped.
    pub fn release(&self) -> Self {
        Version::new(self.major, self.minor, self.patch)
    }

    /// Major zero means the API is still in development and carries no
    /// compatibility contract.
    pub fn is_in_development(&self) -> bool {
        self.major == 0
    }

    pub fn is_stable(&self) -> bool {
        !self.is_in_development()
    }

    pub fn is_snapshot(&self) -> bool {
        self.special
            .as_deref()
            .map(|s| s.ends_with(SNAPSHOT_SUFFIX))
            .unwrap_or(false)
    }

    /// A user compiled against `self` keeps linking against `other`:
    /// same major line, and `other` is not older.
    pub fn is_compatible_with(&self, other: &Version) -> bool {
        self.major == other.major && other >= self
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.major == other.major
            && self.minor == other.minor
            && self.patch == other.patch
            && self.special == other.special
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        self.special.hash(state);
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then_with(|| self.minor.cmp(&other.minor))
            .then_with(|| self.patch.cmp(&other.patch))
            .then_with(|| match (&self.special, &other.special) {
                // A release is newer than any of its pre-releases.
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(a), Some(b)) => a.cmp(b),
            })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(ref separator) = self.separator {
            write!(f, "{}", separator)?;
        }
        if let Some(ref special) = self.special {
            write!(f, "{}", special)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_versions_parse() {
        for text in [
            "1.2",
            "1.2.3",
            "10.20.30",
            "1.2.3beta",
            "1.2.3.DEV",
            "1.2.3.DEV-SNAPSHOT",
            "1.2-SNAPSHOT",
            "1.2.3-SNAPSHOT",
            "1.2.3-RC-SNAPSHOT",
        ] {
            assert!(Version::parse(text).is_ok(), "should parse: {}", text);
        }
    }

    #[test]
    fn test_invalid_versions_fail() {
        for text in ["invalid", "a.2.3", "1", "1.", "", "1.2.3!"] {
            assert!(Version::parse(text).is_err(), "should fail: {}", text);
        }
    }

    #[test]
    fn test_patch_defaults_to_zero() {
        let v = Version::parse("1.2").unwrap();
        assert_eq!(v.patch(), 0);
        assert_eq!(v, Version::new(1, 2, 0));
    }

    #[test]
    fn test_parse_round_trips_canonical_forms() {
        for text in ["1.2.3", "2.0.0-RC1", "1.5.30-SNAPSHOT", "1.2.3.DEV", "7.0.1+b42"] {
            let v = Version::parse(text).unwrap();
            assert_eq!(Version::parse(&v.to_string()).unwrap(), v);
            assert_eq!(v.to_string(), text);
        }
    }

    #[test]
    fn test_next_zeroes_lower_elements() {
        let v = Version::new(1, 2, 3);
        assert_eq!(v.next(Element::Major), Version::new(2, 0, 0));
        assert_eq!(v.next(Element::Minor), Version::new(1, 3, 0));
        assert_eq!(v.next(Element::Patch), Version::new(1, 2, 4));
    }

    #[test]
    fn test_next_drops_special() {
        let v = Version::parse("1.2.3-RC1").unwrap();
        assert_eq!(v.next(Element::Minor), Version::new(1, 3, 0));
        assert!(v.next(Element::Patch).special().is_none());
    }

    #[test]
    fn test_in_development_and_stable() {
        assert!(Version::parse("0.1.1").unwrap().is_in_development());
        assert!(!Version::parse("1.1.1").unwrap().is_in_development());
        assert!(Version::parse("1.1.1").unwrap().is_stable());
    }

    #[test]
    fn test_snapshot_detection() {
        assert!(Version::parse("1.5.30-SNAPSHOT").unwrap().is_snapshot());
        assert!(Version::parse("1.2.3.DEV-SNAPSHOT").unwrap().is_snapshot());
        assert!(!Version::parse("1.5.30").unwrap().is_snapshot());
        assert!(!Version::parse("1.5.30-RC1").unwrap().is_snapshot());
    }

    #[test]
    fn test_ordering() {
        let parse = |s: &str| Version::parse(s).unwrap();
        assert!(parse("1.0.0") > parse("0.0.0"));
        assert!(parse("1.1.0") > parse("1.0.0"));
        assert!(parse("1.0.1") > parse("1.0.0"));
        assert!(parse("1.0.0Beta") > parse("1.0.0Alpha"));
        // A release outranks its own pre-releases.
        assert!(parse("1.0.0") > parse("1.0.0-RC1"));
        assert!(parse("3.2.3") > parse("3.2-M1-SNAPSHOT"));
    }

    #[test]
    fn test_equality_ignores_separator() {
        assert_eq!(Version::parse("1.2.3.DEV").unwrap(), Version::parse("1.2.3-DEV").unwrap());
        assert_ne!(Version::parse("1.2.3-DEV").unwrap(), Version::parse("1.2.3").unwrap());
    }

    #[test]
    fn test_release_strips_special() {
        let v = Version::parse("1.2.3-SNAPSHOT").unwrap();
        assert_eq!(v.release(), Version::new(1, 2, 3));
    }

    #[test]
    fn test_compatibility() {
        let parse = |s: &str| Version::parse(s).unwrap();
        assert!(parse("1.0.0").is_compatible_with(&parse("1.2.3-SNAPSHOT")));
        assert!(parse("1.0.0").is_compatible_with(&parse("1.0.1")));
        assert!(!parse("1.0.1").is_compatible_with(&parse("2.0.0")));
        assert!(!parse("1.1.0").is_compatible_with(&parse("1.0.0")));
    }
}
