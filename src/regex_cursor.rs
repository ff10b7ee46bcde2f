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

use regex::{Captures, Regex};

use crate::string_util;

/// A stateful cursor over one (pattern, subject) pair, in the manner of
/// `java.util.regex.Matcher`: `find` scans forward from an internal offset
/// and repositions it past the match, `looking_at` anchors at the start of
/// the subject and `matches` requires the whole subject to match. Group
/// positions are reported as Unicode codepoint indices. Case folding is the
/// pattern's concern; no matching policy lives here.
pub(crate) struct RegexCursor<'r, 's> {
    pattern: &'r Regex,
    subject: &'s str,
    groups: Option<Captures<'s>>,
    /// Next codepoint offset `find` continues from.
    offset: usize,
}

impl<'r, 's> RegexCursor<'r, 's> {
    pub fn new(pattern: &'r Regex, subject: &'s str) -> Self {
        Self {
            pattern,
            subject,
            groups: None,
            offset: 0,
        }
    }

    /// Scans forward from the internal offset for the next occurrence of
    /// the pattern. On success the offset is moved past the match.
    pub fn find(&mut self) -> bool {
        let from = string_util::byte_index(self.subject, self.offset);
        match self.pattern.captures_at(self.subject, from) {
            Some(captures) => {
                if let Some(full_capture) = captures.get(0) {
                    self.offset = string_util::codepoint_index(self.subject, full_capture.end());
                }
                self.groups = Some(captures);
                true
            }
            None => {
                self.groups = None;
                false
            }
        }
    }

    /// `find` restarted from the given codepoint index.
    pub fn find_at(&mut self, index: usize) -> bool {
        self.offset = index;
        self.find()
    }

    /// Tests whether the pattern matches at position 0 of the subject,
    /// without requiring it to cover the whole subject.
    pub fn looking_at(&mut self) -> bool {
        self.match_with_bounds(|m, _| m.start() == 0)
    }

    /// Tests whether the pattern matches the entire subject.
    pub fn matches(&mut self) -> bool {
        self.match_with_bounds(|m, len| m.start() == 0 && m.end() == len)
    }

    fn match_with_bounds(&mut self, accept: impl Fn(&regex::Match<'_>, usize) -> bool) -> bool {
        // The leftmost match starts at 0 whenever any match does.
        match self.pattern.captures(self.subject) {
            Some(captures)
                if captures
                    .get(0)
                    .is_some_and(|m| accept(&m, self.subject.len())) =>
            {
                self.groups = Some(captures);
                true
            }
            _ => {
                self.groups = None;
                false
            }
        }
    }

    /// Text captured by group `index` in the last successful match; group 0
    /// is the whole match.
    pub fn group(&self, index: usize) -> Option<&'s str> {
        self.groups.as_ref()?.get(index).map(|m| m.as_str())
    }

    /// Codepoint index where group `index` of the last match starts.
    pub fn start(&self, index: usize) -> Option<usize> {
        self.groups
            .as_ref()?
            .get(index)
            .map(|m| string_util::codepoint_index(self.subject, m.start()))
    }

    /// Codepoint index just past the end of group `index` of the last match.
    pub fn end(&self, index: usize) -> Option<usize> {
        self.groups
            .as_ref()?
            .get(index)
            .map(|m| string_util::codepoint_index(self.subject, m.end()))
    }

    /// Number of capturing groups in the pattern, group 0 excluded.
    #[allow(unused)]
    pub fn group_count(&self) -> usize {
        self.pattern.captures_len() - 1
    }
}

#[cfg(test)]
mod tests {
    use regex::Regex;

    use super::RegexCursor;

    #[test]
    fn find_advances_past_each_match() {
        let pattern = Regex::new(r"\p{Nd}+").unwrap();
        // Cyrillic letters ahead of the digits shift byte and codepoint
        // offsets apart.
        let mut cursor = RegexCursor::new(&pattern, "аб 123 в 45");

        assert!(cursor.find());
        assert_eq!(Some("123"), cursor.group(0));
        assert_eq!(Some(3), cursor.start(0));
        assert_eq!(Some(6), cursor.end(0));

        assert!(cursor.find());
        assert_eq!(Some("45"), cursor.group(0));
        assert_eq!(Some(9), cursor.start(0));

        assert!(!cursor.find());
        assert_eq!(None, cursor.group(0));
    }

    #[test]
    fn find_at_repositions_the_cursor() {
        let pattern = Regex::new(r"\p{Nd}+").unwrap();
        let mut cursor = RegexCursor::new(&pattern, "аб 123 в 45");

        assert!(cursor.find_at(7));
        assert_eq!(Some("45"), cursor.group(0));
        assert!(!cursor.find_at(11));
    }

    #[test]
    fn looking_at_requires_a_match_at_the_start() {
        let pattern = Regex::new(r":[0-5]\p{Nd}").unwrap();
        assert!(RegexCursor::new(&pattern, ":30 sharp").looking_at());
        assert!(!RegexCursor::new(&pattern, " :30").looking_at());
    }

    #[test]
    fn matches_requires_the_whole_subject() {
        let pattern = Regex::new(r"\p{Nd}+").unwrap();
        assert!(RegexCursor::new(&pattern, "1234").matches());
        assert!(!RegexCursor::new(&pattern, "1234x").matches());
        assert!(!RegexCursor::new(&pattern, "x1234").matches());
    }

    #[test]
    fn groups_are_codepoint_indexed() {
        let pattern = Regex::new(r"(\p{Nd}+)-(\p{Nd}+)").unwrap();
        let mut cursor = RegexCursor::new(&pattern, "ф 12-34");

        assert!(cursor.find());
        assert_eq!(2, cursor.group_count());
        assert_eq!(Some("12"), cursor.group(1));
        assert_eq!(Some("34"), cursor.group(2));
        assert_eq!(Some(5), cursor.start(2));
        assert_eq!(Some(7), cursor.end(2));
    }
}
