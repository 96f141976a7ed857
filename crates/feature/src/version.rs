// Copyright 2021 Datafuse Labs
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt;
use std::str::FromStr;

use crate::InvalidArgument;

/// A `const`-compatible three-component server version (major, minor, patch).
///
/// Ordering is lexicographic over `(major, minor, patch)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl Version {
    /// Creates a new version with the given components.
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    pub const fn major(&self) -> u64 {
        self.major
    }

    pub const fn minor(&self) -> u64 {
        self.minor
    }

    pub const fn patch(&self) -> u64 {
        self.patch
    }

    /// Returns the version as a tuple `(major, minor, patch)`.
    pub const fn as_tuple(&self) -> (u64, u64, u64) {
        (self.major, self.minor, self.patch)
    }

    /// Returns the minimum possible version (0.0.0).
    pub const fn min() -> Self {
        Version::new(0, 0, 0)
    }

    pub const fn to_semver(&self) -> semver::Version {
        semver::Version::new(self.major, self.minor, self.patch)
    }
}

/// Parses `"2.6.0"` or `"v2.6.0"`.
///
/// Pre-release and build metadata are accepted but dropped: `"4.0.0-rc1"` parses as `4.0.0`.
impl FromStr for Version {
    type Err = InvalidArgument;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let trimmed = trimmed.strip_prefix('v').unwrap_or(trimmed);

        let sv = semver::Version::parse(trimmed)
            .map_err(|e| InvalidArgument::new(e, format!("parse version: {:?}", s)))?;

        Ok(Version::from(sv))
    }
}

impl From<Version> for semver::Version {
    fn from(v: Version) -> Self {
        v.to_semver()
    }
}

impl From<&semver::Version> for Version {
    fn from(v: &semver::Version) -> Self {
        Version::new(v.major, v.minor, v.patch)
    }
}

impl From<semver::Version> for Version {
    fn from(v: semver::Version) -> Self {
        Version::from(&v)
    }
}
