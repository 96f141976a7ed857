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

//! Descriptor of a server feature and the version range supporting it.
//!
//! # Supported Range
//!
//! Each feature has an inclusive range `[first, last]`:
//! - `first`: the earliest server version providing the feature.
//! - `last`: the latest server version still providing it,
//!   or `None` if the range is open-ended.
//!
//! The `is_supported` flag is supplied by the caller and is never derived
//! from the range. Keeping the two consistent is the caller's job.
//!
//! # Example
//!
//! ```
//! use driver_feature::Feature;
//! use driver_feature::Version;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! enum FeatureId {
//!     AggregateCursor,
//!     GroupCommand,
//! }
//!
//! static FEATURES: [Feature<FeatureId>; 2] = [
//!     Feature::new(FeatureId::AggregateCursor, true, Version::new(2, 6, 0)),
//!     Feature::new(FeatureId::GroupCommand, false, Version::new(1, 0, 0))
//!         .last_supported_in(Version::new(3, 4, 0)),
//! ];
//!
//! assert_eq!(FEATURES[0].last_supported_in_version(), None);
//! assert_eq!(
//!     FEATURES[1].last_supported_in_version(),
//!     Some(Version::new(3, 4, 0))
//! );
//! ```

use std::fmt;

use display_more::DisplayOptionExt;
use log::debug;
use log::warn;

use crate::InvalidArgument;
use crate::Version;

/// A feature that is not supported by every version of the server.
///
/// Immutable once built: there are no setters and no `&mut self` methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Feature<I> {
    id: I,
    is_supported: bool,
    first_supported_in_version: Version,
    last_supported_in_version: Option<Version>,
}

impl<I> Feature<I> {
    /// Creates an open-ended feature, supported from `first_supported_in_version` onward.
    pub const fn new(id: I, is_supported: bool, first_supported_in_version: Version) -> Self {
        Feature {
            id,
            is_supported,
            first_supported_in_version,
            last_supported_in_version: None,
        }
    }

    /// Sets the last supported version; for building `static` tables.
    ///
    /// No validation is done here, see [`Feature::validate`].
    pub const fn last_supported_in(mut self, last_supported_in_version: Version) -> Self {
        self.last_supported_in_version = Some(last_supported_in_version);
        self
    }

    /// Creates a feature with an optional upper bound.
    ///
    /// `None` makes it open-ended, the same as [`Feature::new`].
    /// An upper bound lower than `first_supported_in_version` is accepted, with a warning logged.
    pub fn bounded(
        id: I,
        is_supported: bool,
        first_supported_in_version: Version,
        last_supported_in_version: Option<Version>,
    ) -> Self {
        let feature = Feature {
            id,
            is_supported,
            first_supported_in_version,
            last_supported_in_version,
        };

        if let Err(e) = feature.check_range() {
            warn!("accepting feature with inverted version range: {}", e);
        }

        feature
    }

    /// Like [`Feature::bounded`], but refuses an upper bound lower than the first supported version.
    pub fn try_bounded(
        id: I,
        is_supported: bool,
        first_supported_in_version: Version,
        last_supported_in_version: Option<Version>,
    ) -> Result<Self, InvalidArgument> {
        let feature = Feature {
            id,
            is_supported,
            first_supported_in_version,
            last_supported_in_version,
        };

        feature.validate()?;
        Ok(feature)
    }

    /// Checks that `last_supported_in_version`, if present, is not lower than
    /// `first_supported_in_version`.
    pub fn validate(&self) -> Result<(), InvalidArgument> {
        self.check_range().inspect_err(|e| {
            debug!("rejecting feature: {}", e);
        })
    }

    fn check_range(&self) -> Result<(), InvalidArgument> {
        match self.last_supported_in_version {
            Some(last) if last < self.first_supported_in_version => {
                Err(InvalidArgument::msg(format!(
                    "last supported version {} is lower than first supported version {}",
                    last, self.first_supported_in_version
                )))
            }
            _ => Ok(()),
        }
    }

    pub fn id_ref(&self) -> &I {
        &self.id
    }

    /// Whether this feature is supported by the server instance it was built for.
    pub const fn is_supported(&self) -> bool {
        self.is_supported
    }

    /// The version of the server this feature was first supported in.
    pub const fn first_supported_in_version(&self) -> Version {
        self.first_supported_in_version
    }

    /// The version of the server this feature was last supported in,
    /// or `None` if the range is open-ended.
    pub const fn last_supported_in_version(&self) -> Option<Version> {
        self.last_supported_in_version
    }

    pub const fn is_open_ended(&self) -> bool {
        self.last_supported_in_version.is_none()
    }

    /// Returns true if `version` lies within `[first, last]`.
    ///
    /// This is range membership only: `is_supported` is not consulted.
    pub fn spans_version(&self, version: Version) -> bool {
        if version < self.first_supported_in_version {
            return false;
        }

        match self.last_supported_in_version {
            Some(last) => version <= last,
            None => true,
        }
    }
}

impl<I: Copy> Feature<I> {
    pub const fn id(&self) -> I {
        self.id
    }
}

impl<I: fmt::Display> fmt::Display for Feature<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: supported={}, since={}, until={}",
            self.id,
            self.is_supported,
            self.first_supported_in_version,
            self.last_supported_in_version.display()
        )
    }
}
