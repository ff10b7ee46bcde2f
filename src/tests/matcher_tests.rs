use crate::matcher::{Leniency, MatcherError, PhoneNumberMatch, PhoneNumberMatcher};

use super::get_engine;
use super::region_code::RegionCode;
use super::stub_engine::StubEngine;

fn find_matches(
    engine: &StubEngine,
    text: &str,
    region: Option<&str>,
    leniency: Leniency,
    max_tries: i32,
) -> Vec<PhoneNumberMatch> {
    PhoneNumberMatcher::new(engine, text, region, leniency, max_tries)
        .expect("matcher arguments should be valid")
        .collect()
}

#[test]
fn negative_max_tries_is_rejected() {
    let engine = get_engine();
    let result = PhoneNumberMatcher::new(
        &engine,
        "650-253-4561",
        Some(RegionCode::us()),
        Leniency::Valid,
        -1,
    );
    assert!(matches!(result, Err(MatcherError::NegativeMaxTries(-1))));
}

#[test]
fn empty_text_has_no_matches() {
    let engine = get_engine();
    let found = find_matches(&engine, "", Some(RegionCode::us()), Leniency::Valid, 65535);
    assert!(found.is_empty());
}

#[test]
fn text_without_numbers_has_no_matches() {
    let engine = get_engine();
    let found = find_matches(
        &engine,
        "This is not a phone number at all.",
        Some(RegionCode::us()),
        Leniency::Valid,
        65535,
    );
    assert!(found.is_empty());
}

#[test]
fn finds_national_numbers_in_running_text() {
    let engine = get_engine();
    let found = find_matches(
        &engine,
        "Call 033316005  or 032316005!",
        Some(RegionCode::nz()),
        Leniency::Possible,
        65535,
    );
    assert_eq!(2, found.len());
    assert_eq!("033316005", found[0].raw_string());
    assert_eq!(5, found[0].start());
    assert_eq!("032316005", found[1].raw_string());
    assert_eq!(19, found[1].start());
}

#[test]
fn offsets_are_codepoints_not_bytes() {
    let engine = get_engine();
    // Cyrillic prefix: byte and codepoint offsets diverge.
    let found = find_matches(
        &engine,
        "тел. 033316005",
        Some(RegionCode::nz()),
        Leniency::Possible,
        65535,
    );
    assert_eq!(1, found.len());
    assert_eq!("033316005", found[0].raw_string());
    assert_eq!(5, found[0].start());
    assert_eq!(14, found[0].end());
}

#[test]
fn matches_are_strictly_ordered_and_non_overlapping() {
    let engine = get_engine();
    let found = find_matches(
        &engine,
        "Numbers: 650-253-4561, 455-234-3451 and (650) 253-0000.",
        Some(RegionCode::us()),
        Leniency::Valid,
        65535,
    );
    assert_eq!(3, found.len());
    for pair in found.windows(2) {
        assert!(pair[0].start() < pair[1].start());
        assert!(pair[0].end() <= pair[1].start());
    }
}

#[test]
fn spaced_double_hyphen_splits_two_numbers() {
    let engine = get_engine();
    let found = find_matches(
        &engine,
        "Call 650-253-4561 -- 455-234-3451",
        Some(RegionCode::us()),
        Leniency::Valid,
        65535,
    );
    assert_eq!(2, found.len());
    assert_eq!("650-253-4561", found[0].raw_string());
    assert_eq!(5, found[0].start());
    assert_eq!("455-234-3451", found[1].raw_string());
    assert_eq!(21, found[1].start());
}

#[test]
fn unspaced_double_hyphen_joins_into_nothing() {
    let engine = get_engine();
    let found = find_matches(
        &engine,
        "Call 650-253-4561--455-234-3451",
        Some(RegionCode::us()),
        Leniency::Valid,
        65535,
    );
    assert!(found.is_empty());
}

#[test]
fn slash_joined_numbers_are_both_recovered() {
    let engine = get_engine();
    let found = find_matches(
        &engine,
        "651-234-2345/332-445-1234",
        Some(RegionCode::us()),
        Leniency::Valid,
        65535,
    );
    assert_eq!(2, found.len());
    assert_eq!("651-234-2345", found[0].raw_string());
    assert_eq!("332-445-1234", found[1].raw_string());
}

#[test]
fn bracket_joined_numbers_are_split_on_the_bracket() {
    let engine = get_engine();
    let found = find_matches(
        &engine,
        "(650) 223-3345 (754) 223-3321",
        Some(RegionCode::us()),
        Leniency::Valid,
        65535,
    );
    assert_eq!(2, found.len());
    assert_eq!("(650) 223-3345", found[0].raw_string());
    assert_eq!("(754) 223-3321", found[1].raw_string());
}

#[test]
fn slash_separated_dates_are_not_numbers() {
    let engine = get_engine();
    for text in ["3/10/2011", "31/10/96", "08/31/95"] {
        let found = find_matches(&engine, text, Some(RegionCode::us()), Leniency::Possible, 65535);
        assert!(found.is_empty(), "{text} should not match");
    }
}

#[test]
fn date_rejection_does_not_touch_the_budget() {
    let engine = get_engine();
    // With a budget of one, the date before the number must cost nothing
    // for the number to still be found.
    let found = find_matches(
        &engine,
        "Posted 3/10/2011! Call 650-253-4561",
        Some(RegionCode::us()),
        Leniency::Valid,
        1,
    );
    assert_eq!(1, found.len());
    assert_eq!("650-253-4561", found[0].raw_string());
}

#[test]
fn timestamps_with_a_minutes_suffix_are_skipped() {
    let engine = get_engine();
    let found = find_matches(
        &engine,
        "created: 2012-01-02 08:00",
        Some(RegionCode::nz()),
        Leniency::Possible,
        65535,
    );
    assert!(found.is_empty());
}

#[test]
fn israeli_star_codes_need_their_star() {
    let engine = get_engine();
    let found = find_matches(
        &engine,
        "Call *1234 now",
        Some(RegionCode::il()),
        Leniency::Possible,
        65535,
    );
    assert_eq!(1, found.len());
    assert_eq!("1234", found[0].raw_string());

    let found = find_matches(
        &engine,
        "Call 1234 now",
        Some(RegionCode::il()),
        Leniency::Possible,
        65535,
    );
    assert!(found.is_empty());

    // Longer israeli numbers do not need the star.
    let found = find_matches(
        &engine,
        "Call 523456789 now",
        Some(RegionCode::il()),
        Leniency::Possible,
        65535,
    );
    assert_eq!(1, found.len());
}

#[test]
fn exhausted_budget_ends_the_scan_early() {
    let engine = get_engine();
    // Two false-positive candidates ahead of a genuine number; each failed
    // candidate costs one try.
    let text = "254-234! 254-234! 650-253-4561";

    let found = find_matches(&engine, text, Some(RegionCode::us()), Leniency::Valid, 2);
    assert!(found.is_empty());

    let found = find_matches(&engine, text, Some(RegionCode::us()), Leniency::Valid, 3);
    assert_eq!(1, found.len());
    assert_eq!("650-253-4561", found[0].raw_string());
}

#[test]
fn successful_matches_do_not_consume_the_budget() {
    let engine = get_engine();
    let found = find_matches(
        &engine,
        "650-253-4561 or 455-234-3451",
        Some(RegionCode::us()),
        Leniency::Valid,
        1,
    );
    assert_eq!(2, found.len());
}

#[test]
fn zero_budget_finds_nothing() {
    let engine = get_engine();
    let found = find_matches(
        &engine,
        "650-253-4561",
        Some(RegionCode::us()),
        Leniency::Valid,
        0,
    );
    assert!(found.is_empty());
}

#[test]
fn rewind_reproduces_the_sequence() {
    let engine = get_engine();
    let mut matcher = PhoneNumberMatcher::new(
        &engine,
        "Call 033316005  or 032316005!",
        Some(RegionCode::nz()),
        Leniency::Possible,
        65535,
    )
    .unwrap();

    let first_pass: Vec<PhoneNumberMatch> = matcher.by_ref().collect();
    assert_eq!(2, first_pass.len());
    assert!(!matcher.has_next());

    matcher.rewind();
    let second_pass: Vec<PhoneNumberMatch> = matcher.collect();
    assert_eq!(first_pass, second_pass);
}

#[test]
fn has_next_peeks_without_consuming() {
    let engine = get_engine();
    let mut matcher = PhoneNumberMatcher::new(
        &engine,
        "Call 650-253-4561",
        Some(RegionCode::us()),
        Leniency::Valid,
        65535,
    )
    .unwrap();

    assert!(matcher.has_next());
    assert!(matcher.has_next());
    let found = matcher.next().unwrap();
    assert_eq!("650-253-4561", found.raw_string());
    assert!(!matcher.has_next());
    assert_eq!(None, matcher.next());
}

#[test]
fn without_a_region_only_plus_numbers_match() {
    let engine = get_engine();
    let found = find_matches(
        &engine,
        "Call +1 650-253-4561 or 455-234-3451",
        None,
        Leniency::Valid,
        65535,
    );
    assert_eq!(1, found.len());
    assert_eq!("+1 650-253-4561", found[0].raw_string());
}

#[test]
fn valid_leniency_rejects_latin_letter_boundaries() {
    let engine = get_engine();
    let found = find_matches(
        &engine,
        "abc650-253-4561",
        Some(RegionCode::us()),
        Leniency::Valid,
        65535,
    );
    assert!(found.is_empty());

    let found = find_matches(
        &engine,
        "650-253-4561def",
        Some(RegionCode::us()),
        Leniency::Valid,
        65535,
    );
    assert!(found.is_empty());

    // POSSIBLE does not look at the surrounding characters.
    let found = find_matches(
        &engine,
        "abc650-253-4561",
        Some(RegionCode::us()),
        Leniency::Possible,
        65535,
    );
    assert_eq!(1, found.len());
}

#[test]
fn valid_leniency_rejects_currency_and_percent_boundaries() {
    let engine = get_engine();
    for text in ["$650-253-4561", "650-253-4561%", "€650-253-4561"] {
        let found = find_matches(&engine, text, Some(RegionCode::us()), Leniency::Valid, 65535);
        assert!(found.is_empty(), "{text} should not match");
    }
}

#[test]
fn candidate_surrounded_by_punctuation_matches_exactly() {
    let engine = get_engine();
    let found = find_matches(
        &engine,
        "Tel: 650-253-4561.",
        Some(RegionCode::us()),
        Leniency::Valid,
        65535,
    );
    assert_eq!(1, found.len());
    assert_eq!("650-253-4561", found[0].raw_string());
    assert_eq!(5, found[0].start());
    assert_eq!(17, found[0].end());
}

#[test]
fn publication_pages_are_not_numbers() {
    let engine = get_engine();
    let found = find_matches(
        &engine,
        "As in: Chen Li. VLDB J. 12(3): 211-227 (2003).",
        Some(RegionCode::us()),
        Leniency::Valid,
        65535,
    );
    assert!(found.is_empty());
}

#[test]
fn matched_numbers_have_their_parse_context_cleared() {
    let engine = get_engine();
    let found = find_matches(
        &engine,
        "650-253-4561",
        Some(RegionCode::us()),
        Leniency::Valid,
        65535,
    );
    assert_eq!(1, found.len());
    let number = found[0].number();
    assert!(!number.has_country_code_source());
    assert!(!number.has_raw_input());
    assert!(!number.has_preferred_domestic_carrier_code());
    assert_eq!(1, number.country_code());
    assert_eq!(6502534561, number.national_number());
}
