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

use std::io;

use driver_feature::Feature;
use driver_feature::InvalidArgument;
use driver_feature::Version;

/// Builds a feature from version strings, as read from a server build-info reply.
fn feature_from_strs(
    id: &'static str,
    first: &str,
    last: Option<&str>,
) -> Result<Feature<&'static str>, InvalidArgument> {
    let first: Version = first.parse()?;
    let last = last.map(str::parse::<Version>).transpose()?;

    Feature::try_bounded(id, true, first, last).map_err(|e| e.add_context(id))
}

#[test]
fn test_feature_from_strs() -> Result<(), InvalidArgument> {
    let f = feature_from_strs("text_search", "2.4.0", Some("v2.6.0"))?;

    assert_eq!(f.id(), "text_search");
    assert_eq!(f.first_supported_in_version(), Version::new(2, 4, 0));
    assert_eq!(f.last_supported_in_version(), Some(Version::new(2, 6, 0)));

    let f = feature_from_strs("aggregate_cursor", "2.6.0", None)?;
    assert!(f.is_open_ended());
    Ok(())
}

#[test]
fn test_feature_from_strs_bad_version() {
    let err = feature_from_strs("text_search", "2.4", None).unwrap_err();
    assert!(err.message().contains("\"2.4\""), "{}", err);
}

#[test]
fn test_feature_from_strs_inverted_range() {
    let err = feature_from_strs("text_search", "2.6.0", Some("2.4.0")).unwrap_err();
    assert!(err.message().ends_with("; while: text_search"), "{}", err);

    let io_err: io::Error = err.into();
    assert_eq!(io_err.kind(), io::ErrorKind::InvalidInput);
}
