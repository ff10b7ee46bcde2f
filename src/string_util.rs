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

//! Codepoint-offset helpers. Every offset this crate exposes is a Unicode
//! codepoint index into the searched text, never a byte index, so positions
//! stay meaningful to callers that slice the text themselves.

/// Number of Unicode codepoints in `s`.
pub fn codepoint_len(s: &str) -> usize {
    s.chars().count()
}

/// Byte index of the codepoint at `index`. Indices at or past the end of
/// `s` map to `s.len()`.
pub fn byte_index(s: &str, index: usize) -> usize {
    s.char_indices()
        .nth(index)
        .map(|(byte, _)| byte)
        .unwrap_or(s.len())
}

/// Codepoint index of the char-boundary byte offset `byte`.
pub fn codepoint_index(s: &str, byte: usize) -> usize {
    s[..byte].chars().count()
}

/// The codepoint at position `index`, if any.
pub fn char_at(s: &str, index: usize) -> Option<char> {
    s.chars().nth(index)
}
