use crate::phonenumber::{
    MatchType, NumberFormatRule, ParseError, PhoneNumber, RegionMetadata, StripResult,
};

/// The number parsing and validation engine the matcher delegates to. This
/// isolates the matcher from any concrete metadata-driven implementation
/// and allows different engines to be swapped in easily: the matcher never
/// performs region or metadata lookup itself, it only scans text and asks
/// the engine about the candidates it finds.
pub trait PhoneNumberEngine {
    /// Parses `number_to_parse` keeping the raw input and the
    /// country-code-source on the result. `default_region` is assumed for
    /// numbers without an international prefix; `None` means only numbers
    /// written with a leading plus are parseable.
    fn parse_and_keep_raw_input(
        &self,
        number_to_parse: &str,
        default_region: Option<&str>,
    ) -> Result<PhoneNumber, ParseError>;

    /// Full validation against the numbering plan of the number's region.
    fn is_valid_number(&self, number: &PhoneNumber) -> bool;

    /// Length-based plausibility check, much cheaper than full validation.
    fn is_possible_number(&self, number: &PhoneNumber) -> bool;

    /// Compares `number` with a second number given as raw text.
    fn is_number_match_with_text(&self, number: &PhoneNumber, other_text: &str) -> MatchType;

    /// The main region served by a country calling code, `None` when the
    /// code belongs to no known region.
    fn region_code_for_country_code(&self, country_calling_code: i32) -> Option<String>;

    /// The country calling code of a region, 0 when the region is unknown.
    fn country_code_for_region(&self, region_code: &str) -> i32;

    /// Formatting metadata for a region, `None` when none is on file.
    fn metadata_for_region(&self, region_code: &str) -> Option<RegionMetadata>;

    /// The number's national significant number as a digit string, leading
    /// zeros included where they are part of the number.
    fn national_significant_number(&self, number: &PhoneNumber) -> String;

    /// The first rule of `available_formats` that applies to the given
    /// national significant number, `None` when no rule does.
    fn choose_formatting_pattern_for_number(
        &self,
        available_formats: &[NumberFormatRule],
        national_number: &str,
    ) -> Option<NumberFormatRule>;

    /// Attempts to strip the region's national prefix and any carrier code
    /// off the start of `number` (a digit string).
    fn maybe_strip_national_prefix_and_carrier_code(
        &self,
        number: &str,
        metadata: &RegionMetadata,
    ) -> StripResult;

    /// Reduces `number` to its digits, converting any Unicode decimal
    /// digits to their ASCII value.
    fn normalize_digits_only(&self, number: &str) -> String;
}
