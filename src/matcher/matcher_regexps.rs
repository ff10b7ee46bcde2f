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

use std::sync::LazyLock;

use regex::Regex;

use super::matcher_constants::{
    CLOSING_PARENS, DIGITS, MAX_LENGTH_COUNTRY_CODE, MAX_LENGTH_FOR_NSN, OPENING_PARENS,
    PLUS_CHARS, SECOND_NUMBER_START, VALID_PUNCTUATION, create_extn_pattern_for_matching, limit,
};

/// The regular expressions driving a scan, built once per process. All of
/// their repetitions carry explicit bounds so that adversarial text cannot
/// trigger catastrophic backtracking.
pub(super) struct MatcherRegExps {
    /// The phone number pattern used by `find`, similar to the pattern a
    /// parser would accept as a viable phone number, but with the following
    /// differences:
    /// - All captures are limited in order to place an upper bound to the
    ///   text matched by the pattern: leading punctuation / plus signs,
    ///   consecutive occurrences of punctuation and the number of digits
    ///   are all limited.
    /// - No whitespace is allowed at the start or end.
    /// - No alpha digits (vanity numbers such as 1-800-SIX-FLAGS) are
    ///   currently supported.
    pub matchable_number: Regex,

    /// Matches strings that look like publication pages. Example:
    /// "Computing Complete Answers to Queries in the Presence of Limited
    /// Access Patterns. Chen Li. VLDB J. 12(3): 211-227 (2003)."
    ///
    /// The string "211-227 (2003)" is not a telephone number.
    pub pub_pages: Regex,

    /// Matches strings that look like dates using "/" as a separator.
    /// Examples: 3/10/2011, 31/10/96 or 08/31/95.
    pub slash_separated_dates: Regex,

    /// Matches timestamps. Examples: "2012-01-02 08:00". Note that the
    /// reg-ex does not include the trailing ":\d\d" -- that is covered by
    /// `time_stamps_suffix`.
    pub time_stamps: Regex,
    pub time_stamps_suffix: Regex,

    /// Pattern to check that brackets match. Opening brackets should be
    /// closed within a phone number. This also checks that there is
    /// something inside the brackets. Having no brackets at all is also
    /// fine. Anchored on both sides: a candidate must match it entirely.
    pub matching_brackets: Regex,

    /// Patterns used to extract phone numbers from a larger candidate that
    /// is plausibly several numbers joined together. Tried strictly in
    /// order; each one captures the remainder after the split point.
    pub inner_matches: [Regex; 6],

    /// Punctuation that may be at the start of a phone number - brackets
    /// and plus signs.
    pub lead_class: Regex,

    /// Marker after which a candidate is cut because the rest is likely the
    /// start of a second phone number.
    pub second_number_start: Regex,

    /// Trailing characters to cut off a group before re-verifying it. The
    /// hash character is retained, as it may signify the previous block was
    /// an extension.
    pub unwanted_end_chars: Regex,

    /// A national prefix formatting rule that is nothing but the first
    /// group, possibly wrapped in (unbalanced) parentheses. Such a rule
    /// does not actually require the prefix to be written.
    pub first_group_only: Regex,

    pub non_spacing_mark: Regex,
    pub currency_symbol: Regex,
}

impl MatcherRegExps {
    fn new() -> Self {
        // it'll be initialized only once, so we can use slow format!
        let non_parens = format!("[^{}{}]", OPENING_PARENS, CLOSING_PARENS);
        // Limit on the number of pairs of brackets in a phone number.
        let bracket_pair_limit = limit(0, 3);
        // An opening bracket at the beginning may not be closed, but
        // subsequent ones should be. It's also possible that the leading
        // bracket was dropped, so we shouldn't be surprised if we see a
        // closing bracket first.
        let matching_brackets = format!(
            "^(?:[{op}])?(?:{np}+[{cl}])?{np}+(?:[{op}]{np}+[{cl}]){pairs}{np}*$",
            op = OPENING_PARENS,
            cl = CLOSING_PARENS,
            np = non_parens,
            pairs = bracket_pair_limit,
        );

        // Limit on the number of leading (plus) characters.
        let lead_limit = limit(0, 2);
        // Limit on the number of consecutive punctuation characters.
        let punctuation_limit = limit(0, 4);
        // The maximum number of digits allowed in a digit-separated block.
        // As we allow all digits in a single block, set high enough to
        // accommodate the entire national number and the international
        // country code.
        let digit_block_limit = MAX_LENGTH_FOR_NSN + MAX_LENGTH_COUNTRY_CODE;
        // Limit on the number of blocks separated by punctuation. Uses
        // digit_block_limit since some formats use spaces to separate each
        // digit.
        let block_limit = limit(0, digit_block_limit);

        // A punctuation sequence allowing white space.
        let punctuation = format!("[{}]{}", VALID_PUNCTUATION, punctuation_limit);
        // A digits block without punctuation.
        let digit_sequence = format!("{}{}", DIGITS, limit(1, digit_block_limit));

        let lead_class = format!("[{}{}]", OPENING_PARENS, PLUS_CHARS);

        let matchable_number = format!(
            "(?i)(?:{lead}{punct}){leads}{digits}(?:{punct}{digits}){blocks}(?:{extn})?",
            lead = lead_class,
            punct = punctuation,
            leads = lead_limit,
            digits = digit_sequence,
            blocks = block_limit,
            extn = create_extn_pattern_for_matching(),
        );

        Self {
            matchable_number: Regex::new(&matchable_number).unwrap(),
            pub_pages: Regex::new(r"\d{1,5}-+\d{1,5}\s{0,4}\(\d{1,4}").unwrap(),
            slash_separated_dates: Regex::new(
                r"(?:(?:[0-3]?\d/[01]?\d)|(?:[01]?\d/[0-3]?\d))/(?:[12]\d)?\d{2}",
            )
            .unwrap(),
            time_stamps: Regex::new(r"[12]\d{3}[-/]?[01]\d[-/]?[0-3]\d +[0-2]\d$").unwrap(),
            time_stamps_suffix: Regex::new(r":[0-5]\d").unwrap(),
            matching_brackets: Regex::new(&matching_brackets).unwrap(),
            inner_matches: [
                // Breaks on the slash - e.g. "651-234-2345/332-445-1234"
                Regex::new(r"/+(.*)").unwrap(),
                // Note that the bracket here is inside the capturing group,
                // since we consider it part of the phone number. Will match
                // a pattern like "(650) 223 3345 (754) 223 3321".
                Regex::new(r"(\([^(]*)").unwrap(),
                // Breaks on a hyphen - e.g. "12345 - 332-445-1234 is my
                // number." We require a space on either side of the hyphen
                // for it to be considered a separator.
                Regex::new(r"(?:\p{Z}-|-\p{Z})\p{Z}*(.+)").unwrap(),
                // Various types of wide hyphens. Note we have decided not
                // to enforce a space here, since it's possible that it's
                // supposed to be used to break two numbers without spaces,
                // and we haven't seen many instances of it used within a
                // number.
                Regex::new("[\u{2012}-\u{2015}\u{FF0D}]\\p{Z}*(.+)").unwrap(),
                // Breaks on a full stop - e.g. "12345. 332-445-1234 is my
                // number."
                Regex::new(r"\.+\p{Z}*([^.]+)").unwrap(),
                // Breaks on space - e.g. "3324451234 8002341234"
                Regex::new(r"\p{Z}+(\P{Z}+)").unwrap(),
            ],
            lead_class: Regex::new(&lead_class).unwrap(),
            second_number_start: Regex::new(SECOND_NUMBER_START).unwrap(),
            unwanted_end_chars: Regex::new(r"[^\p{N}\p{L}#]+$").unwrap(),
            first_group_only: Regex::new(r"^\(?\$1\)?$").unwrap(),
            non_spacing_mark: Regex::new(r"\p{Mn}").unwrap(),
            currency_symbol: Regex::new(r"\p{Sc}").unwrap(),
        }
    }
}

pub(super) static MATCHER_REGEXPS: LazyLock<MatcherRegExps> = LazyLock::new(MatcherRegExps::new);
