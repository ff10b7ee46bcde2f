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

use std::fmt;

use crate::phonenumber::PhoneNumber;
use crate::string_util;

use super::errors::MatcherError;

/// The immutable match of a phone number within a piece of text. Matches
/// may be found using [`crate::PhoneNumberMatcher`].
///
/// A match consists of the phone number as well as the `start` and `end`
/// offsets of the corresponding subsequence of the searched text. Use
/// `raw_string()` to obtain a copy of the matched subsequence.
///
/// The following text is a candidate for a match:
/// ```text
/// Call me at +1 425 882-8080 for details.
/// ```
/// The match itself spans `[11,26)`, its raw string is
/// `"+1 425 882-8080"` and its number holds the parsed representation.
///
/// Matches are value types: two matches are equal when their offsets, raw
/// strings and numbers are all equal. All offsets are Unicode codepoint
/// indices.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumberMatch {
    /// The start index into the text.
    start: usize,
    /// The raw substring matched.
    raw_string: String,
    /// The matched phone number.
    number: PhoneNumber,
}

impl PhoneNumberMatch {
    /// Only the matcher constructs matches, on successful verification of
    /// a candidate. A negative start index is unrepresentable here.
    pub(crate) fn new(
        start: usize,
        raw_string: String,
        number: PhoneNumber,
    ) -> Result<Self, MatcherError> {
        if raw_string.is_empty() {
            return Err(MatcherError::EmptyRawString);
        }
        Ok(Self {
            start,
            raw_string,
            number,
        })
    }

    /// Codepoint index of the first character of the match within the
    /// searched text.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Exclusive codepoint index of the last character of the match.
    pub fn end(&self) -> usize {
        self.start + string_util::codepoint_len(&self.raw_string)
    }

    /// The substring of the searched text covered by `[start, end)`.
    pub fn raw_string(&self) -> &str {
        &self.raw_string
    }

    /// The phone number parsed out of the raw string, with its transient
    /// parse-context fields cleared.
    pub fn number(&self) -> &PhoneNumber {
        &self.number
    }
}

impl fmt::Display for PhoneNumberMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PhoneNumberMatch [{},{}) {}",
            self.start(),
            self.end(),
            self.raw_string
        )
    }
}
