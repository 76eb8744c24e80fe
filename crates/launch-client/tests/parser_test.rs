//! Tests for `Name|Symbol|Supply` parsing ([`launch_client::parse_launch_request`]).
//! BDD style: each test documents scenario and expected outcome.

use launch_client::{parse_launch_request, LaunchRequest, ParseError, U256};

fn tokens(n: u64) -> U256 {
    U256::from(n) * U256::from(10u64).pow(U256::from(18u64))
}

/// **Test: the canonical example parses into name, symbol and supply × 10^18.**
#[test]
fn parses_canonical_example() {
    let request = parse_launch_request("MyCoin|MYC|1000000000").unwrap();

    assert_eq!(request.name(), "MyCoin");
    assert_eq!(request.symbol(), "MYC");
    assert_eq!(request.supply(), tokens(1_000_000_000));
    assert_eq!(request.supply_text(), "1000000000");
}

/// **Test: surrounding and per-segment whitespace is trimmed; inner spaces in the name are kept.**
#[test]
fn trims_segments() {
    let request = parse_launch_request("  Ape City Coin |  APE | 42  \n").unwrap();

    assert_eq!(request.name(), "Ape City Coin");
    assert_eq!(request.symbol(), "APE");
    assert_eq!(request.supply_text(), "42");
    assert_eq!(request.supply(), tokens(42));
}

/// **Test: FromStr delegates to the parser.**
#[test]
fn from_str_matches_parse() {
    let request: LaunchRequest = "MyCoin|MYC|7".parse().unwrap();
    assert_eq!(request, parse_launch_request("MyCoin|MYC|7").unwrap());
}

/// **Test: no separator → MissingSeparator.**
#[test]
fn rejects_missing_separator() {
    assert_eq!(
        parse_launch_request("hello world"),
        Err(ParseError::MissingSeparator)
    );
}

/// **Test: missing supply (two segments) → SegmentCount(2).**
#[test]
fn rejects_two_segments() {
    assert_eq!(
        parse_launch_request("MyCoin|MYC"),
        Err(ParseError::SegmentCount(2))
    );
}

/// **Test: more than three segments → SegmentCount.**
#[test]
fn rejects_extra_segments() {
    assert_eq!(
        parse_launch_request("MyCoin|MYC|100|extra"),
        Err(ParseError::SegmentCount(4))
    );
    assert_eq!(
        parse_launch_request("MyCoin|MYC|100|"),
        Err(ParseError::SegmentCount(4))
    );
}

/// **Test: any empty trimmed segment → EmptySegment naming the field.**
#[test]
fn rejects_empty_segments() {
    assert_eq!(
        parse_launch_request(" |MYC|100"),
        Err(ParseError::EmptySegment("name"))
    );
    assert_eq!(
        parse_launch_request("MyCoin|   |100"),
        Err(ParseError::EmptySegment("symbol"))
    );
    assert_eq!(
        parse_launch_request("MyCoin|MYC|  "),
        Err(ParseError::EmptySegment("supply"))
    );
    assert_eq!(
        parse_launch_request("||"),
        Err(ParseError::EmptySegment("name"))
    );
}

/// **Test: non-numeric or negative supply → InvalidSupply.**
#[test]
fn rejects_non_numeric_and_negative_supply() {
    for input in [
        "MyCoin|MYC|lots",
        "MyCoin|MYC|-5",
        "MyCoin|MYC|1e9",
        "MyCoin|MYC|1,000",
        "MyCoin|MYC|NaN",
    ] {
        assert!(
            matches!(parse_launch_request(input), Err(ParseError::InvalidSupply(_))),
            "expected InvalidSupply for {:?}",
            input
        );
    }
}

/// **Test: fractional supply within 18 decimals is accepted; beyond is rejected.**
#[test]
fn fractional_supply_precision() {
    let request = parse_launch_request("MyCoin|MYC|1.5").unwrap();
    assert_eq!(request.supply(), tokens(3) / U256::from(2u64));

    assert_eq!(
        parse_launch_request("MyCoin|MYC|0.0000000000000000001"),
        Err(ParseError::TooManyDecimals { max: 18 })
    );
}

/// **Test: integer numerals round-trip through supply_units, modulo leading zeros.**
#[test]
fn integer_supply_round_trips() {
    for numeral in ["0", "1", "21000000", "1000000000", "115792089237316195423570985008687907853269984665640"] {
        let request = parse_launch_request(&format!("A|B|{}", numeral)).unwrap();
        assert_eq!(request.supply_units(), numeral);
    }

    let padded = parse_launch_request("A|B|000123").unwrap();
    assert_eq!(padded.supply_units(), "123");
    assert_eq!(padded.supply_text(), "000123");
}

/// **Test: trailing fractional zeros are normalized away.**
#[test]
fn fractional_round_trip_normalizes_trailing_zeros() {
    let request = parse_launch_request("A|B|2.500").unwrap();
    assert_eq!(request.supply_units(), "2.5");
    assert_eq!(request.supply_text(), "2.500");

    let whole = parse_launch_request("A|B|10.000").unwrap();
    assert_eq!(whole.supply_units(), "10");
}
