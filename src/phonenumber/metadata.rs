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

/// The slice of a region's numbering-plan metadata the matcher consults.
/// The engine owns the full plan; only the formatting rules needed to decide
/// whether a national prefix should have been written are surfaced here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionMetadata {
    /// Upper-case CLDR region code, e.g. "NZ".
    pub region_code: String,
    /// The national prefix of the region, empty when it has none.
    pub national_prefix: String,
    /// Formatting rules in the order the engine would try them.
    pub number_formats: Vec<NumberFormatRule>,
}

/// One formatting rule of a region, mirroring the fields of a libphonenumber
/// `NumberFormat` message that matter for national-prefix checks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberFormatRule {
    /// Regex the national significant number must fully match for this rule
    /// to apply.
    pub pattern: String,
    /// Replacement template, e.g. `"$1-$2 $3"`.
    pub format: String,
    /// How the national prefix is written when formatting with this rule;
    /// empty when the rule says nothing about the prefix.
    pub national_prefix_formatting_rule: String,
    /// Whether the prefix may be omitted even though a rule exists.
    pub national_prefix_optional_when_formatting: bool,
}

/// Outcome of the engine stripping a national prefix and carrier code off
/// the start of a dialled number, returned as a value instead of through
/// out-parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripResult {
    /// Whether a prefix or carrier code was actually removed.
    pub stripped: bool,
    /// The number with any prefix and carrier code removed; equals the
    /// input when nothing was stripped.
    pub number: String,
}
