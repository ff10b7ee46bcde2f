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

use super::CountryCodeSource;

/// The parsed representation of a phone number, produced by the parsing
/// engine and carried inside every match. Field accessors follow the
/// `has_`/getter/`set_`/`clear_` convention of the libphonenumber
/// `PhoneNumber` message so engine implementations can map onto it
/// directly.
///
/// The last three fields (country code source, raw input, preferred
/// domestic carrier code) only exist on numbers parsed with
/// `parse_and_keep_raw_input`; the matcher clears them before exposing a
/// number, since they describe how the number was written rather than what
/// it is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PhoneNumber {
    country_code: i32,
    national_number: u64,
    extension: Option<String>,
    italian_leading_zero: bool,
    number_of_leading_zeros: Option<i32>,
    country_code_source: Option<CountryCodeSource>,
    raw_input: Option<String>,
    preferred_domestic_carrier_code: Option<String>,
}

impl PhoneNumber {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn country_code(&self) -> i32 {
        self.country_code
    }

    pub fn set_country_code(&mut self, value: i32) {
        self.country_code = value;
    }

    pub fn national_number(&self) -> u64 {
        self.national_number
    }

    pub fn set_national_number(&mut self, value: u64) {
        self.national_number = value;
    }

    pub fn has_extension(&self) -> bool {
        self.extension.is_some()
    }

    pub fn extension(&self) -> &str {
        self.extension.as_deref().unwrap_or("")
    }

    pub fn set_extension(&mut self, value: String) {
        self.extension = Some(value);
    }

    pub fn clear_extension(&mut self) {
        self.extension = None;
    }

    /// Whether the national number starts with literal zeros that are part
    /// of the number itself (as in Italy) rather than a national prefix.
    pub fn italian_leading_zero(&self) -> bool {
        self.italian_leading_zero
    }

    pub fn set_italian_leading_zero(&mut self, value: bool) {
        self.italian_leading_zero = value;
    }

    pub fn number_of_leading_zeros(&self) -> i32 {
        self.number_of_leading_zeros.unwrap_or(1)
    }

    pub fn set_number_of_leading_zeros(&mut self, value: i32) {
        self.number_of_leading_zeros = Some(value);
    }

    pub fn has_country_code_source(&self) -> bool {
        self.country_code_source.is_some()
    }

    pub fn country_code_source(&self) -> CountryCodeSource {
        self.country_code_source
            .unwrap_or(CountryCodeSource::Unspecified)
    }

    pub fn set_country_code_source(&mut self, value: CountryCodeSource) {
        self.country_code_source = Some(value);
    }

    pub fn clear_country_code_source(&mut self) {
        self.country_code_source = None;
    }

    pub fn has_raw_input(&self) -> bool {
        self.raw_input.is_some()
    }

    pub fn raw_input(&self) -> &str {
        self.raw_input.as_deref().unwrap_or("")
    }

    pub fn set_raw_input(&mut self, value: String) {
        self.raw_input = Some(value);
    }

    pub fn clear_raw_input(&mut self) {
        self.raw_input = None;
    }

    pub fn has_preferred_domestic_carrier_code(&self) -> bool {
        self.preferred_domestic_carrier_code.is_some()
    }

    pub fn preferred_domestic_carrier_code(&self) -> &str {
        self.preferred_domestic_carrier_code
            .as_deref()
            .unwrap_or("")
    }

    pub fn set_preferred_domestic_carrier_code(&mut self, value: String) {
        self.preferred_domestic_carrier_code = Some(value);
    }

    pub fn clear_preferred_domestic_carrier_code(&mut self) {
        self.preferred_domestic_carrier_code = None;
    }

    /// Resets every field to its unset state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transient_fields_can_be_cleared_independently() {
        let mut number = PhoneNumber::new();
        number.set_country_code(64);
        number.set_national_number(33316005);
        number.set_country_code_source(CountryCodeSource::FromDefaultCountry);
        number.set_raw_input("03-331 6005".to_owned());
        number.set_preferred_domestic_carrier_code("81".to_owned());

        let mut core_only = PhoneNumber::new();
        core_only.set_country_code(64);
        core_only.set_national_number(33316005);
        assert_ne!(core_only, number);

        number.clear_country_code_source();
        number.clear_raw_input();
        number.clear_preferred_domestic_carrier_code();
        assert_eq!(core_only, number);
        assert_eq!(CountryCodeSource::Unspecified, number.country_code_source());
        assert_eq!("", number.raw_input());
    }
}
