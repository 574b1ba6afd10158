//! Dotted version strings such as `1.16.5` or `1.17-pre1`, split into
//! individually addressable parts.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{Error, Result};

/// One `.`-separated segment of a [`SemanticVersion`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionPart {
    /// A purely numeric release segment, e.g. the `16` in `1.16.5`.
    /// `raw` keeps the segment as written, leading zeros included.
    Release { version: u32, raw: String },
    /// Anything else, e.g. the `17-pre1` in `1.17-pre1`.
    Text(String),
}

impl VersionPart {
    fn parse(segment: &str) -> Self {
        match segment.parse::<u32>() {
            Ok(version) if segment.bytes().all(|b| b.is_ascii_digit()) => VersionPart::Release {
                version,
                raw: segment.to_string(),
            },
            _ => VersionPart::Text(segment.to_string()),
        }
    }

    /// Returns the segment as it appeared in the version string.
    pub fn version_string(&self) -> String {
        match self {
            VersionPart::Release { raw, .. } => raw.clone(),
            VersionPart::Text(s) => s.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct SemanticVersion {
    parts: Vec<VersionPart>,
}

impl SemanticVersion {
    /// Parses a dotted version string.
    ///
    /// # Errors
    /// * `Error::VersionError` if the string is blank or contains an empty segment
    pub fn parse(version: &str) -> Result<Self> {
        let version = version.trim();
        if version.is_empty() {
            return Err(Error::VersionError {
                version: version.to_string(),
            });
        }

        let parts = version
            .split('.')
            .map(|segment| {
                if segment.is_empty() {
                    Err(Error::VersionError {
                        version: version.to_string(),
                    })
                } else {
                    Ok(VersionPart::parse(segment))
                }
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { parts })
    }

    pub fn parts(&self) -> &[VersionPart] {
        &self.parts
    }

    pub fn part(&self, index: usize) -> Option<&VersionPart> {
        self.parts.get(index)
    }

    /// Numeric value of the release part at `index`, if it is one.
    pub fn release(&self, index: usize) -> Option<u32> {
        match self.part(index) {
            Some(VersionPart::Release { version, .. }) => Some(*version),
            _ => None,
        }
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.parts.iter().map(VersionPart::version_string).collect();
        write!(f, "{}", rendered.join("."))
    }
}

impl FromStr for SemanticVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for SemanticVersion {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}
