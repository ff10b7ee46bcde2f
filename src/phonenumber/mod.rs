mod enums;
mod errors;
mod metadata;
mod phone_number;

pub use enums::{CountryCodeSource, MatchType};
pub use errors::ParseError;
pub use metadata::{NumberFormatRule, RegionMetadata, StripResult};
pub use phone_number::PhoneNumber;
