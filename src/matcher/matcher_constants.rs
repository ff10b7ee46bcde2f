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

// The ITU says the maximum length should be 15, but we have found longer
// numbers in Germany.
pub(super) const MAX_LENGTH_FOR_NSN: usize = 17;
/// The maximum length of the country calling code.
pub(super) const MAX_LENGTH_COUNTRY_CODE: usize = 3;

pub(super) const PLUS_CHARS: &'static str = "+\u{FF0B}";

// Regular expression of acceptable punctuation found in phone numbers. This
// excludes punctuation found as a leading character only. This consists of
// dash characters, white space characters, full stops, slashes, square
// brackets, parentheses and tildes. It also includes the letter 'x' as that
// is found as a placeholder for carrier information in some phone numbers.
// Full-width variants are also present. The ASCII square brackets are
// backslash-escaped so the whole string can be embedded in a character
// class.
pub(super) const VALID_PUNCTUATION: &'static str = "-x\
\u{2010}-\u{2015}\u{2212}\u{30FC}\u{FF0D}-\u{FF0F} \u{00A0}\
\u{00AD}\u{200B}\u{2060}\u{3000}()\u{FF08}\u{FF09}\u{FF3B}\
\u{FF3D}.\\[\\]/~\u{2053}\u{223C}";

pub(super) const DIGITS: &'static str = r"\p{Nd}";

// Brackets that may legitimately open or close a phone number, written as
// character-class members: round, square and their full-width variants.
pub(super) const OPENING_PARENS: &'static str = "(\\[\u{FF08}\u{FF3B}";
pub(super) const CLOSING_PARENS: &'static str = ")\\]\u{FF09}\u{FF3D}";

// Characters typically used to start a second phone number. This allows us
// to strip off parts of a candidate that are actually the start of another
// number, such as for: (530) 583-6985 x302/x2303 -> the second extension
// here makes this actually two phone numbers, (530) 583-6985 x302 and
// (530) 583-6985 x2303. We cut the candidate before this marker so that
// the first number is matched correctly.
// This corresponds to SECOND_NUMBER_START in the java version.
pub(super) const SECOND_NUMBER_START: &'static str = r"[\\/] *x";

// Zero or more spaces/tabs/commas between the number and an extension
// label.
pub(super) const POSSIBLE_SEPARATORS_BETWEEN_NUMBER_AND_EXT_LABEL: &'static str =
    "[ \u{00A0}\\t,]*";
// Optional full stop (.) or colon, followed by zero or more
// spaces/tabs/commas.
pub(super) const POSSIBLE_CHARS_AFTER_EXT_LABEL: &'static str = "[:\\.\u{FF0E}]?[ \u{00A0}\\t,-]*";
pub(super) const OPTIONAL_EXT_SUFFIX: &'static str = "#?";

pub(super) const RFC3966_EXTN_PREFIX: &'static str = ";ext=";

/// Helper method for constructing regular expressions for parsing. Creates
/// an expression that captures up to max_length digits.
fn extn_digits(max_length: u32) -> String {
    let mut buf = itoa::Buffer::new();
    let max_length_str = buf.format(max_length);
    return fast_cat::concat_str!("([", DIGITS, "]{1,", max_length_str, "})");
}

// Helper initialiser method to create the regular-expression pattern to
// match extensions found in free text. Note that the only capturing groups
// should be around the digits that you want to capture as part of the
// extension, or else matching of the outer candidate pattern will fail!
pub(super) fn create_extn_pattern_for_matching() -> String {
    // We cap the maximum length of an extension based on the ambiguity of
    // the way the extension is prefixed. As per ITU, the officially allowed
    // length for extensions is actually 40, but we don't support this since
    // we haven't seen real examples and this introduces many false
    // interpretations as the extension labels are not standardized.
    let ext_limit_after_explicit_label = 20;
    let ext_limit_after_ambiguous_char = 9;
    let ext_limit_when_not_sure = 6;

    // Canonical-equivalence doesn't seem to be an option with the regex
    // crate, so we allow two options for representing any non-ASCII
    // character like ó - the character itself, and one in the unicode
    // decomposed form with the combining acute accent.

    // Here the extension is called out in a more explicit way, i.e
    // mentioning it obvious patterns like "ext.".
    let explicit_ext_labels = "(?:e?xt(?:ensi(?:o\u{0301}?|\u{00F3}))?n?|(?:\u{FF45})?\u{FF58}\u{FF54}(?:\u{FF4E})?|\u{0434}\u{043E}\u{0431}|anexo)";
    // One-character symbols that can be used to indicate an extension, and
    // less commonly used or more ambiguous extension labels.
    let ambiguous_ext_labels = "(?:[x\u{FF58}#\u{FF03}~\u{FF5E}]|int|\u{FF49}\u{FF4E}\u{FF54})";
    // When extension is not separated clearly.
    let ambiguous_separator = "[- ]+";

    let rfc_extn = fast_cat::concat_str!(
        RFC3966_EXTN_PREFIX,
        &extn_digits(ext_limit_after_explicit_label)
    );
    let explicit_extn = fast_cat::concat_str!(
        POSSIBLE_SEPARATORS_BETWEEN_NUMBER_AND_EXT_LABEL,
        explicit_ext_labels,
        POSSIBLE_CHARS_AFTER_EXT_LABEL,
        &extn_digits(ext_limit_after_explicit_label),
        OPTIONAL_EXT_SUFFIX
    );
    let ambiguous_extn = fast_cat::concat_str!(
        POSSIBLE_SEPARATORS_BETWEEN_NUMBER_AND_EXT_LABEL,
        ambiguous_ext_labels,
        POSSIBLE_CHARS_AFTER_EXT_LABEL,
        &extn_digits(ext_limit_after_ambiguous_char),
        OPTIONAL_EXT_SUFFIX
    );
    let american_style_extn_with_suffix = fast_cat::concat_str!(
        ambiguous_separator,
        &extn_digits(ext_limit_when_not_sure),
        "#"
    );

    // The first regular expression covers RFC 3966 format, where the
    // extension is added using ";ext=". The second more generic where
    // extension is mentioned with explicit labels like "ext:". In both the
    // above cases we allow more numbers in extension than any other
    // extension labels. The third one captures when single character
    // extension labels or less commonly used labels are present. In such
    // cases we capture fewer extension digits in order to reduce the chance
    // of falsely interpreting two numbers beside each other as a number +
    // extension. The fourth one covers the special case of American numbers
    // where the extension is written with a hash at the end, such as
    // "- 503#".
    return fast_cat::concat_str!(
        &rfc_extn,
        "|",
        &explicit_extn,
        "|",
        &ambiguous_extn,
        "|",
        &american_style_extn_with_suffix
    );
}

/// Returns a regular expression quantifier with an upper and lower limit.
pub(super) fn limit(lower: usize, upper: usize) -> String {
    debug_assert!(lower <= upper && upper > 0);
    let mut lower_buf = itoa::Buffer::new();
    let mut upper_buf = itoa::Buffer::new();
    return fast_cat::concat_str!(
        "{",
        lower_buf.format(lower),
        ",",
        upper_buf.format(upper),
        "}"
    );
}
