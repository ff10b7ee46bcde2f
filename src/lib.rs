pub mod i18n;
pub mod interfaces;
pub mod matcher;
pub mod phonenumber;
pub(crate) mod regex_cursor;
pub(crate) mod string_util;

pub use interfaces::PhoneNumberEngine;
pub use matcher::{Leniency, MatcherError, PhoneNumberMatch, PhoneNumberMatcher};
pub use phonenumber::{
    CountryCodeSource, MatchType, NumberFormatRule, ParseError, PhoneNumber, RegionMetadata,
    StripResult,
};

#[cfg(test)]
mod tests;
