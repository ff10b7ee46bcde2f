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

/// Records how the parsing engine deduced the country calling code of a
/// number. This is a parsing artifact: the matcher consults it while
/// verifying a candidate and clears it before handing the number out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountryCodeSource {
    /// The country code was read off the number itself, which carried a
    /// leading plus sign. Example: `+41 44 668 1800`.
    FromNumberWithPlusSign,
    /// The number started with an international direct dialing prefix for
    /// the parsing region, such as `00` or `011`.
    FromNumberWithIdd,
    /// The leading digits looked like a country code even though no plus
    /// sign was present. Example: `41 44 668 1800` parsed outside CH.
    FromNumberWithoutPlusSign,
    /// Nothing in the number indicated a country code; the code of the
    /// default region was assumed.
    FromDefaultCountry,
    /// The source has not been recorded (or has been cleared).
    Unspecified,
}

/// Describes the degree of similarity between two phone numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchType {
    /// **No match.**
    /// The two numbers are entirely different.
    NoMatch,
    /// **Short National Significant Number match.**
    /// One number is a shorter version of the other's National Significant
    /// Number (NSN). For example, `6502530000` is a short match for
    /// `16502530000`.
    ShortNsnMatch,
    /// **National Significant Number (NSN) match.**
    /// The numbers share the same NSN but may have different country codes
    /// or formatting. For example, `0446681800` (national) and
    /// `+41446681800` (international) are an NSN match.
    NsnMatch,
    /// **Exact match.**
    /// The two numbers are identical in every aspect, including country
    /// code, NSN, and any specified extensions.
    ExactMatch,
}
