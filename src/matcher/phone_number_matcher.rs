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

use log::trace;
use regex::Regex;

use crate::i18n;
use crate::interfaces::PhoneNumberEngine;
use crate::phonenumber::{CountryCodeSource, MatchType, PhoneNumber};
use crate::regex_cursor::RegexCursor;
use crate::string_util;

use super::errors::MatcherError;
use super::leniency::Leniency;
use super::matcher_regexps::MATCHER_REGEXPS;
use super::phone_number_match::PhoneNumberMatch;

/// The state of the lookahead iteration: either the next match still has
/// to be computed, or it is waiting to be consumed, or the scan is over.
enum IterState {
    NeedsScan,
    Pending(PhoneNumberMatch),
    Exhausted,
}

/// Scans a piece of text for sequences that look like phone numbers,
/// verifies each candidate through a [`PhoneNumberEngine`] at the
/// requested [`Leniency`] and yields the accepted ones lazily, in text
/// order, as [`PhoneNumberMatch`] values.
///
/// All parsing and region knowledge lives behind the injected engine; the
/// matcher itself only knows how to carve candidates out of text and when
/// to give up on them. A matcher instance carries private iteration state
/// and must not be shared between threads; independent instances over the
/// same text may run in parallel.
pub struct PhoneNumberMatcher<'a> {
    /// The parsing and validation engine candidates are delegated to.
    engine: &'a dyn PhoneNumberEngine,
    /// The text searched for phone numbers.
    text: &'a str,
    /// The region to assume for phone numbers without an international
    /// prefix. `None` means only numbers with a leading plus can match.
    preferred_region: Option<&'a str>,
    /// The degree of validation requested.
    leniency: Leniency,
    /// The number of invalid candidates we are still willing to verify
    /// before giving up on the text.
    max_tries: i32,
    state: IterState,
    /// The next codepoint index to start searching at.
    search_index: usize,
}

impl<'a> PhoneNumberMatcher<'a> {
    /// Creates a matcher over `text`.
    ///
    /// `preferred_region` is assumed for numbers not written in
    /// international format; pass `None` if only numbers with a leading
    /// plus should be considered. `max_tries` caps the number of invalid
    /// candidates verified before the scan gives up, which covers
    /// degenerate texts with a lot of false positives in them; it must not
    /// be negative. Verification successes never consume the budget.
    pub fn new(
        engine: &'a dyn PhoneNumberEngine,
        text: &'a str,
        preferred_region: Option<&'a str>,
        leniency: Leniency,
        max_tries: i32,
    ) -> Result<Self, MatcherError> {
        if max_tries < 0 {
            return Err(MatcherError::NegativeMaxTries(max_tries));
        }
        Ok(Self {
            engine,
            text,
            preferred_region,
            leniency,
            max_tries,
            state: IterState::NeedsScan,
            search_index: 0,
        })
    }

    /// Peeks at the next match, computing it as a side effect when none is
    /// pending yet.
    pub fn has_next(&mut self) -> bool {
        if let IterState::NeedsScan = self.state {
            self.state = match self.find(self.search_index) {
                Some(found) => {
                    self.search_index = found.end();
                    IterState::Pending(found)
                }
                None => IterState::Exhausted,
            };
        }
        matches!(self.state, IterState::Pending(_))
    }

    /// Resets the scan position to the start of the text and discards any
    /// pending match. The retry budget is **not** replenished; create a
    /// fresh matcher for a fully independent scan.
    pub fn rewind(&mut self) {
        self.search_index = 0;
        self.state = IterState::NeedsScan;
    }

    /// Attempts to find the next subsequence in the searched sequence on
    /// or after `index` that represents a phone number. Returns the next
    /// match, `None` if none was found.
    fn find(&mut self, index: usize) -> Option<PhoneNumberMatch> {
        let text = self.text;
        let mut index = index;
        let mut cursor = RegexCursor::new(&MATCHER_REGEXPS.matchable_number, text);
        while self.max_tries > 0 && cursor.find_at(index) {
            let start = cursor.start(0)?;
            let end = cursor.end(0)?;
            let candidate =
                &text[string_util::byte_index(text, start)..string_util::byte_index(text, end)];

            // Check for extra numbers at the end.
            // TODO: This is the place to start when trying to support
            // extraction of multiple phone numbers from split notations
            // (+41 79 123 45 67 / 68).
            let candidate =
                Self::trim_after_first_match(&MATCHER_REGEXPS.second_number_start, candidate);

            // Dates and timestamps are dropped outright, before any
            // verification is attempted, so they never touch the budget.
            if self.looks_like_date_or_timestamp(candidate, start) {
                index = start + string_util::codepoint_len(candidate);
                continue;
            }

            if let Some(found) = self.extract_match(candidate, start) {
                return Some(found);
            }

            index = start + string_util::codepoint_len(candidate);
            self.max_tries -= 1;
        }
        if self.max_tries <= 0 {
            trace!("retry budget exhausted at codepoint {index}, ending the scan");
        }
        None
    }

    /// Trims away any characters after the first match of `pattern` in
    /// `candidate`, returning the trimmed version.
    fn trim_after_first_match<'t>(pattern: &Regex, candidate: &'t str) -> &'t str {
        match pattern.find(candidate) {
            Some(found) => &candidate[..found.start()],
            None => candidate,
        }
    }

    /// True when the candidate is a slash-separated date, or a timestamp
    /// whose ":mm" tail sits in the text right behind the candidate.
    fn looks_like_date_or_timestamp(&self, candidate: &str, offset: usize) -> bool {
        if MATCHER_REGEXPS.slash_separated_dates.is_match(candidate) {
            return true;
        }
        if MATCHER_REGEXPS.time_stamps.is_match(candidate) {
            let following_start = string_util::byte_index(
                self.text,
                offset + string_util::codepoint_len(candidate),
            );
            let following_text = &self.text[following_start..];
            return RegexCursor::new(&MATCHER_REGEXPS.time_stamps_suffix, following_text)
                .looking_at();
        }
        false
    }

    /// Attempts to extract a match from a candidate. The whole candidate
    /// is tried first; when that fails, the inner-split patterns carve the
    /// candidate into smaller pieces and each piece is tried in turn.
    fn extract_match(&mut self, candidate: &'a str, offset: usize) -> Option<PhoneNumberMatch> {
        // Try to come up with a valid match given the entire candidate.
        if let Some(found) = self.parse_and_verify(candidate, offset) {
            return Some(found);
        }
        self.extract_inner_match(candidate, offset)
    }

    /// Attempts to extract a match from `candidate` if the whole candidate
    /// does not qualify as a phone number.
    fn extract_inner_match(
        &mut self,
        candidate: &'a str,
        offset: usize,
    ) -> Option<PhoneNumberMatch> {
        for possible_inner_match in &MATCHER_REGEXPS.inner_matches {
            let mut group_cursor = RegexCursor::new(possible_inner_match, candidate);
            let mut is_first_match = true;
            while self.max_tries > 0 && group_cursor.find() {
                if is_first_match {
                    // We should handle any group before this one too.
                    let group_start = group_cursor.start(0)?;
                    let group = Self::trim_after_first_match(
                        &MATCHER_REGEXPS.unwanted_end_chars,
                        &candidate[..string_util::byte_index(candidate, group_start)],
                    );
                    if let Some(found) = self.parse_and_verify(group, offset) {
                        return Some(found);
                    }
                    self.max_tries -= 1;
                    is_first_match = false;
                }
                let group = Self::trim_after_first_match(
                    &MATCHER_REGEXPS.unwanted_end_chars,
                    group_cursor.group(1)?,
                );
                let group_offset = offset + group_cursor.start(1)?;
                if let Some(found) = self.parse_and_verify(group, group_offset) {
                    return Some(found);
                }
                self.max_tries -= 1;
            }
        }
        None
    }

    /// Parses a phone number from the candidate through the engine and
    /// verifies it matches the requested leniency. If parsing and
    /// verification succeed, the corresponding match is returned, otherwise
    /// this method returns `None`. A parse failure is a soft rejection of
    /// the candidate, never a fatal error.
    fn parse_and_verify(&mut self, candidate: &'a str, offset: usize) -> Option<PhoneNumberMatch> {
        // Check the candidate doesn't contain any formatting which would
        // indicate that it really isn't a phone number.
        if !RegexCursor::new(&MATCHER_REGEXPS.matching_brackets, candidate).matches()
            || MATCHER_REGEXPS.pub_pages.is_match(candidate)
        {
            return None;
        }

        // If leniency is set to VALID or stricter, we also want to skip
        // numbers that are surrounded by Latin alphabetic characters, to
        // skip cases like abc8005001234 or 8005001234def.
        if self.leniency == Leniency::Valid {
            // If the candidate is not at the start of the text, and does
            // not start with phone-number punctuation, check the previous
            // character.
            if offset > 0 && !RegexCursor::new(&MATCHER_REGEXPS.lead_class, candidate).looking_at()
            {
                if let Some(previous_char) = string_util::char_at(self.text, offset - 1) {
                    if Self::is_invalid_punctuation_symbol(previous_char)
                        || Self::is_latin_letter(previous_char)
                    {
                        return None;
                    }
                }
            }
            let last_char_index = offset + string_util::codepoint_len(candidate);
            if let Some(next_char) = string_util::char_at(self.text, last_char_index) {
                if Self::is_invalid_punctuation_symbol(next_char)
                    || Self::is_latin_letter(next_char)
                {
                    return None;
                }
            }
        }

        let mut number = self
            .engine
            .parse_and_keep_raw_input(candidate, self.preferred_region)
            .ok()?;

        // Check Israel * numbers: these are a special case in that they
        // are four-digit numbers that the numbering plan supports, but
        // they can only be dialled with a leading *. Since we don't
        // actually store or detect the * in the parsed number, this means
        // in practice we detect most four digit numbers as being valid for
        // Israel. We restrict the false matches by only allowing these
        // numbers when they are preceded by a star. We enforce this for
        // all leniency levels even though these numbers are technically
        // accepted by is_possible_number and is_valid_number, since we
        // consider it to be a deficiency in those methods that they accept
        // these numbers without the *.
        if self
            .engine
            .region_code_for_country_code(number.country_code())
            .as_deref()
            == Some(i18n::RegionCode::il())
            && string_util::codepoint_len(&self.engine.national_significant_number(&number)) == 4
            && (offset == 0 || string_util::char_at(self.text, offset - 1) != Some('*'))
        {
            // No match.
            return None;
        }

        if self.leniency.verify(&number, candidate, self.engine) {
            // The fields below are only relevant to how the number was
            // written, not to the number itself.
            number.clear_country_code_source();
            number.clear_raw_input();
            number.clear_preferred_domestic_carrier_code();
            return PhoneNumberMatch::new(offset, candidate.to_owned(), number).ok();
        }
        None
    }

    fn is_invalid_punctuation_symbol(character: char) -> bool {
        let mut buf = [0u8; 4];
        character == '%'
            || MATCHER_REGEXPS
                .currency_symbol
                .is_match(character.encode_utf8(&mut buf))
    }

    /// Helper method to determine if a character is a Latin-script letter
    /// or not. For our purposes, combining marks should also return true
    /// since we assume they have been added to a preceding Latin character.
    pub(crate) fn is_latin_letter(letter: char) -> bool {
        let mut buf = [0u8; 4];
        // Combining marks are a subset of non-spacing-mark.
        if !letter.is_alphabetic()
            && !MATCHER_REGEXPS
                .non_spacing_mark
                .is_match(letter.encode_utf8(&mut buf))
        {
            return false;
        }
        // Basic Latin through Latin Extended-B, Latin Extended Additional
        // and the Combining Diacritical Marks block.
        let code = letter as u32;
        return code <= 0x024F
            || (0x1E00..=0x1EFF).contains(&code)
            || (0x0300..=0x036F).contains(&code);
    }

    /// Checks that every `x` or `X` inside the candidate plays a
    /// legitimate role: a doubled `xx` marks a carrier code, anything else
    /// must introduce exactly the number's extension. A doubled `xx` whose
    /// tail re-parses as a distinct number of its own is rejected as
    /// ambiguous.
    pub(crate) fn contains_only_valid_x_chars(
        number: &PhoneNumber,
        candidate: &str,
        engine: &dyn PhoneNumberEngine,
    ) -> bool {
        // The characters 'x' and 'X' can be (1) a carrier code, in which
        // case they always precede the national significant number or (2)
        // an extension sign, in which case they always precede the
        // extension number. We assume a carrier code is more than 1 digit,
        // so the first case has to have more than 1 digit after the 'x' or
        // 'X'.
        let chars: Vec<char> = candidate.chars().collect();
        let mut index = 0;
        while index + 1 < chars.len() {
            let char_at_index = chars[index];
            if char_at_index == 'x' || char_at_index == 'X' {
                let char_at_next_index = chars[index + 1];
                if char_at_next_index == 'x' || char_at_next_index == 'X' {
                    // This is the carrier code case, in which the 'X's
                    // always precede the national significant number.
                    index += 1;
                    let tail: String = chars[index..].iter().collect();
                    if engine.is_number_match_with_text(number, &tail) == MatchType::NsnMatch {
                        // This is not a carrier code.
                        return false;
                    }
                } else {
                    let tail: String = chars[index..].iter().collect();
                    if engine.normalize_digits_only(&tail) != number.extension() {
                        return false;
                    }
                }
            }
            index += 1;
        }
        true
    }

    /// True when the way the number was written carried its national
    /// prefix, in case the region's formatting rules require one.
    pub(crate) fn is_national_prefix_present_if_required(
        number: &PhoneNumber,
        engine: &dyn PhoneNumberEngine,
    ) -> bool {
        // First, check how we deduced the country code. If it was written
        // in international format, then the national prefix is not
        // required.
        if number.country_code_source() != CountryCodeSource::FromDefaultCountry {
            return true;
        }
        let phone_number_region = match engine.region_code_for_country_code(number.country_code())
        {
            Some(region) => region,
            None => return true,
        };
        let metadata = match engine.metadata_for_region(&phone_number_region) {
            Some(metadata) => metadata,
            None => return true,
        };

        // Check if a national prefix should be present when formatting
        // this number.
        let national_number = engine.national_significant_number(number);
        let format_rule =
            engine.choose_formatting_pattern_for_number(&metadata.number_formats, &national_number);
        // To do this, we check that a national prefix formatting rule was
        // present and that it wasn't just the first-group symbol ($1) with
        // punctuation.
        if let Some(format_rule) = format_rule {
            if !format_rule.national_prefix_formatting_rule.is_empty() {
                if format_rule.national_prefix_optional_when_formatting {
                    // The national-prefix is optional in these cases, so
                    // we don't need to check if it was present.
                    return true;
                }
                if Self::formatting_rule_has_first_group_only(
                    &format_rule.national_prefix_formatting_rule,
                ) {
                    // National prefix not needed for this number.
                    return true;
                }
                // Normalize the remainder and check if we found a national
                // prefix and/or carrier code at the start of the raw input.
                let raw_input = engine.normalize_digits_only(number.raw_input());
                return engine
                    .maybe_strip_national_prefix_and_carrier_code(&raw_input, &metadata)
                    .stripped;
            }
        }
        true
    }

    /// Whether the national prefix formatting rule is nothing but the
    /// first group, i.e. does not actually start with the national prefix.
    /// Note that the pattern explicitly allows for unbalanced parentheses.
    pub(crate) fn formatting_rule_has_first_group_only(
        national_prefix_formatting_rule: &str,
    ) -> bool {
        national_prefix_formatting_rule.is_empty()
            || MATCHER_REGEXPS
                .first_group_only
                .is_match(national_prefix_formatting_rule)
    }

    /// Checks whether a candidate contains more than one slash once a
    /// slash attributable to the country-calling-code boundary is
    /// discounted, as in "+7/8 921 123 45 67". Such a notation is
    /// ambiguous between one number with options and several numbers.
    /// A reusable predicate; not consulted by the scan loop itself.
    pub fn contains_more_than_one_slash_in_national_number(
        number: &PhoneNumber,
        candidate: &str,
        engine: &dyn PhoneNumberEngine,
    ) -> bool {
        let first_slash_in_body_index = match candidate.find('/') {
            Some(index) => index,
            // No slashes, this is okay.
            None => return false,
        };
        // Now look for a second one.
        let second_slash_in_body_index =
            match candidate[first_slash_in_body_index + 1..].find('/') {
                Some(index) => first_slash_in_body_index + 1 + index,
                // Only one slash, this is okay.
                None => return false,
            };

        // If the first slash is after the country calling code, this is
        // permitted.
        let candidate_has_country_code = matches!(
            number.country_code_source(),
            CountryCodeSource::FromNumberWithPlusSign
                | CountryCodeSource::FromNumberWithoutPlusSign
        );
        if candidate_has_country_code {
            let mut buf = itoa::Buffer::new();
            let country_code = buf.format(number.country_code());
            if engine.normalize_digits_only(&candidate[..first_slash_in_body_index])
                == country_code
            {
                // Any more slashes and this is illegal.
                return candidate[second_slash_in_body_index + 1..].contains('/');
            }
        }
        true
    }
}

impl Iterator for PhoneNumberMatcher<'_> {
    type Item = PhoneNumberMatch;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.has_next() {
            return None;
        }
        // Don't retain that memory any longer than necessary.
        match std::mem::replace(&mut self.state, IterState::NeedsScan) {
            IterState::Pending(found) => Some(found),
            _ => None,
        }
    }
}
