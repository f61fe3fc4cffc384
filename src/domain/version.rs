use crate::error::{Result, VersioningError};
use std::fmt;
use std::str::FromStr;

/// Three-part version as stored in a VERSION file
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub release: u64,
}

impl Version {
    /// Create a new version
    pub fn new(major: u64, minor: u64, release: u64) -> Self {
        Version {
            major,
            minor,
            release,
        }
    }

    /// Parse the canonical form `v<major>.<minor>.<release>`.
    ///
    /// Surrounding whitespace is ignored. The `v` prefix is mandatory and each
    /// component must be a plain run of decimal digits.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();

        let rest = trimmed
            .strip_prefix('v')
            .ok_or_else(|| VersioningError::malformed(trimmed, "version must start with 'v'"))?;

        let parts: Vec<&str> = rest.split('.').collect();
        if parts.len() != 3 {
            return Err(VersioningError::malformed(
                trimmed,
                "version must have three numeric parts",
            ));
        }

        let major = parse_component(trimmed, "major", parts[0])?;
        let minor = parse_component(trimmed, "minor", parts[1])?;
        let release = parse_component(trimmed, "release", parts[2])?;

        Ok(Version {
            major,
            minor,
            release,
        })
    }

    /// Apply a bump level, producing the next version.
    ///
    /// - **Major**: major += 1, minor = 0, release = 0
    /// - **Minor**: minor += 1, release = 0
    /// - **Release**: release += 1
    pub fn bump(&self, level: BumpLevel) -> Result<Self> {
        let next = match level {
            BumpLevel::Major => Version {
                major: increment(self.major, "major")?,
                minor: 0,
                release: 0,
            },
            BumpLevel::Minor => Version {
                major: self.major,
                minor: increment(self.minor, "minor")?,
                release: 0,
            },
            BumpLevel::Release => Version {
                major: self.major,
                minor: self.minor,
                release: increment(self.release, "release")?,
            },
        };
        Ok(next)
    }
}

fn parse_component(content: &str, name: &str, part: &str) -> Result<u64> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(VersioningError::malformed(
            content,
            format!("invalid {} component '{}'", name, part),
        ));
    }
    part.parse::<u64>().map_err(|_| {
        VersioningError::malformed(content, format!("{} component '{}' is too large", name, part))
    })
}

fn increment(value: u64, name: &'static str) -> Result<u64> {
    value
        .checked_add(1)
        .ok_or(VersioningError::VersionOverflow(name))
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}.{}", self.major, self.minor, self.release)
    }
}

impl FromStr for Version {
    type Err = VersioningError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

/// Which component a bump increments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpLevel {
    Major,
    Minor,
    Release,
}

impl BumpLevel {
    /// All levels, in the order they are listed in usage text
    pub const ALL: [BumpLevel; 3] = [BumpLevel::Major, BumpLevel::Minor, BumpLevel::Release];

    pub fn as_str(&self) -> &'static str {
        match self {
            BumpLevel::Major => "major",
            BumpLevel::Minor => "minor",
            BumpLevel::Release => "release",
        }
    }
}

impl fmt::Display for BumpLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BumpLevel {
    type Err = VersioningError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "major" => Ok(BumpLevel::Major),
            "minor" => Ok(BumpLevel::Minor),
            "release" => Ok(BumpLevel::Release),
            other => Err(VersioningError::invalid_level(other)),
        }
    }
}

/// Bump `version` by the level named in `level`.
///
/// Pure: no I/O, and `version` itself is never modified.
pub fn bump(level: &str, version: Version) -> Result<Version> {
    let level: BumpLevel = level.parse()?;
    version.bump(level)
}
