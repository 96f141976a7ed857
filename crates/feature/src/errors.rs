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
use std::io;

use anyerror::AnyError;

/// An argument supplied to a constructor or parser is not acceptable.
///
/// Only returned at construction or parse time; reading a built value never fails.
#[derive(thiserror::Error, serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[error("InvalidArgument: {msg} source: {source}")]
pub struct InvalidArgument {
    msg: String,
    #[source]
    source: AnyError,
}

impl InvalidArgument {
    pub fn new(source: impl std::error::Error + 'static, msg: impl fmt::Display) -> Self {
        Self {
            msg: msg.to_string(),
            source: AnyError::new(&source),
        }
    }

    /// Build an error that has no underlying cause.
    pub fn msg(msg: impl fmt::Display) -> Self {
        let msg = msg.to_string();
        Self {
            source: AnyError::error(&msg),
            msg,
        }
    }

    pub fn add_context(mut self, context: impl fmt::Display) -> Self {
        self.msg = format!("{}; while: {}", self.msg, context);
        self
    }

    pub fn message(&self) -> &str {
        &self.msg
    }
}

impl From<InvalidArgument> for io::Error {
    fn from(e: InvalidArgument) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, e)
    }
}
