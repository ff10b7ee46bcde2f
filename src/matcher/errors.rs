// Copyright (C) 2009 The Libphonenumber Authors
// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use thiserror::Error;

/// Construction errors of the matcher and its match type. Rejected
/// candidates are not errors; they are the ordinary control path of a
/// scan and are reported as "no match" instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatcherError {
    #[error("The maximum number of retries must not be negative, got {0}")]
    NegativeMaxTries(i32), // IllegalArgumentException in the java version.
    #[error("The raw string of a match must not be empty")]
    EmptyRawString,
}
