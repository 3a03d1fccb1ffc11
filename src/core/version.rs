//! Game version the document targets.

use std::fmt;
use std::str::FromStr;

use crate::util::Error;

/// `major.minor.micro` version, ordered lexicographically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GameVersion {
    pub major: u16,
    pub minor: u16,
    pub micro: u16,
}

impl GameVersion {
    /// Newest version this crate writes.
    pub const LATEST: Self = Self::new(1, 1, 0);
    /// Oldest version with time-explicit kinematics; nothing earlier is
    /// writable.
    pub const MINIMUM: Self = Self::new(1, 0, 14);

    pub const fn new(major: u16, minor: u16, micro: u16) -> Self {
        Self { major, minor, micro }
    }

    /// True if this version can be written at all.
    pub fn is_supported(self) -> bool {
        self >= Self::MINIMUM
    }
}

impl Default for GameVersion {
    fn default() -> Self {
        Self::LATEST
    }
}

impl fmt::Display for GameVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.micro)
    }
}

impl FromStr for GameVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let mut parts = s.trim().split('.');
        let mut next = || -> Result<u16, Error> {
            parts
                .next()
                .and_then(|p| p.parse().ok())
                .ok_or_else(|| Error::InvalidVersion(s.to_string()))
        };
        let version = Self::new(next()?, next()?, next()?);
        if parts.next().is_some() {
            return Err(Error::InvalidVersion(s.to_string()));
        }
        Ok(version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(GameVersion::new(1, 0, 15) > GameVersion::new(1, 0, 14));
        assert!(GameVersion::new(1, 1, 0) > GameVersion::new(1, 0, 99));
        assert!(GameVersion::new(2, 0, 0) > GameVersion::LATEST);
        assert!(GameVersion::LATEST.is_supported());
        assert!(!GameVersion::new(1, 0, 13).is_supported());
    }

    #[test]
    fn test_display_and_parse() {
        assert_eq!(GameVersion::LATEST.to_string(), "1.1.0");
        assert_eq!("1.0.14".parse::<GameVersion>().unwrap(), GameVersion::MINIMUM);
        assert!("1.0".parse::<GameVersion>().is_err());
        assert!("1.0.1.2".parse::<GameVersion>().is_err());
        assert!("a.b.c".parse::<GameVersion>().is_err());
    }
}
