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

use strum::EnumIter;

use crate::interfaces::PhoneNumberEngine;
use crate::phonenumber::PhoneNumber;

use super::phone_number_matcher::PhoneNumberMatcher;

/// The degree of phone number validation a candidate must clear before it
/// is accepted as a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Leniency {
    /// Phone numbers accepted are possible, but not necessarily valid.
    Possible,
    /// Phone numbers accepted are possible and valid. Numbers written in
    /// national format must have their national-prefix present if it is
    /// usually written for a number of this type.
    Valid,
}

impl Leniency {
    /// Decides whether `number`, matched as the text `candidate`, clears
    /// this confidence bar.
    pub fn verify(
        &self,
        number: &PhoneNumber,
        candidate: &str,
        engine: &dyn PhoneNumberEngine,
    ) -> bool {
        match self {
            Leniency::Possible => engine.is_possible_number(number),
            Leniency::Valid => {
                if !engine.is_valid_number(number)
                    || !PhoneNumberMatcher::contains_only_valid_x_chars(number, candidate, engine)
                {
                    return false;
                }
                return PhoneNumberMatcher::is_national_prefix_present_if_required(number, engine);
            }
        }
    }
}
