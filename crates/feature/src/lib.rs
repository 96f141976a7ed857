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

//! Server feature descriptors for the driver.
//!
//! A [`Feature`] records whether a feature is supported and the range of
//! server versions providing it. Deciding whether a feature is usable
//! against a live server is left to the registry that owns the descriptors.

mod errors;
mod feature;
mod version;

pub use errors::InvalidArgument;
pub use feature::Feature;
pub use version::Version;
