//! Focused unit tests covering request decoding and defaults.

use super::helpers::Workspace;
use super::*;
use crate::request::{Action, HotspotRequest, MarketRequest, RequestRecord};
use fishcast_core::{MarketConditions, Species};
use rstest::rstest;

fn record(text: &str) -> RequestRecord {
    RequestRecord::parse(RequestSource::Stdin, text).expect("request should parse")
}

#[rstest]
fn hotspot_fields_default_to_zero_and_unrecognised() {
    let request: HotspotRequest = record("{}").decode().expect("decode hotspot");
    assert_eq!(request, HotspotRequest::default());
    assert_eq!(request.species, Species::Unrecognised);
}

#[rstest]
fn hotspot_fields_accept_integer_readings() {
    let request: HotspotRequest = record(r#"{"sst": 27, "salinity": 35, "species": "Mackerel"}"#)
        .decode()
        .expect("decode hotspot");
    assert_eq!(request.sst, 27.0);
    assert_eq!(request.salinity, 35.0);
    assert_eq!(request.species, Species::Mackerel);
}

#[rstest]
fn market_fields_default_to_far_festival() {
    let request: MarketRequest = record("{}").decode().expect("decode market");
    assert_eq!(
        MarketConditions::from(request),
        MarketConditions::default()
    );
    assert_eq!(request.festival_days, 99);
}

#[rstest]
fn unknown_fields_are_ignored() {
    let request: MarketRequest = record(r#"{"action": "market", "festival_days": 3, "port": "Veraval"}"#)
        .decode()
        .expect("decode market");
    assert_eq!(request.festival_days, 3);
}

#[rstest]
#[case(Some("hotspot"), Some(Action::Hotspot))]
#[case(Some("market"), Some(Action::Market))]
#[case(Some("profit"), None)]
#[case(Some(""), None)]
#[case(None, None)]
fn actions_are_matched_exactly(#[case] name: Option<&str>, #[case] expected: Option<Action>) {
    assert_eq!(Action::parse(name), expected);
}

#[rstest]
#[case("[]", "an array")]
#[case("42", "a number")]
#[case("null", "null")]
#[case(r#""hotspot""#, "a string")]
fn non_object_requests_are_rejected(#[case] text: &str, #[case] kind: &str) {
    let err = RequestRecord::parse(RequestSource::Stdin, text).expect_err("non-object request");
    match err {
        CliError::RequestNotObject { found, .. } => assert_eq!(found, kind),
        other => panic!("expected RequestNotObject, found {other:?}"),
    }
}

#[rstest]
fn records_read_from_stdin_when_no_path_given() {
    let mut stdin = r#"{"action": "market"}"#.as_bytes();
    let parsed = RequestRecord::read(RequestSource::Stdin, &mut stdin).expect("read stdin");
    assert_eq!(parsed.action(), Some("market"));
}

#[rstest]
fn records_read_from_files_ignore_stdin() {
    let workspace = Workspace::new();
    let path = workspace.write("request.json", r#"{"action": "hotspot"}"#);
    let mut stdin = "not json".as_bytes();
    let parsed = RequestRecord::read(RequestSource::File(path), &mut stdin).expect("read file");
    assert_eq!(parsed.action(), Some("hotspot"));
}

#[rstest]
fn sources_display_their_origin() {
    assert_eq!(RequestSource::Stdin.to_string(), "stdin");
    assert_eq!(
        RequestSource::File("req.json".into()).to_string(),
        "\"req.json\""
    );
}

#[rstest]
#[case(r#"{"species": null}"#)]
#[case(r#"{"species": 5}"#)]
#[case(r#"{"species": ["Tuna"]}"#)]
fn non_string_species_decode_as_unrecognised(#[case] text: &str) {
    let request: HotspotRequest = record(text).decode().expect("decode hotspot");
    assert_eq!(request.species, Species::Unrecognised);
}

#[rstest]
#[case(r#"{"festival_days": 5.0}"#, 5)]
#[case(r#"{"festival_days": -2.0}"#, -2)]
#[case(r#"{"festival_days": 0}"#, 0)]
fn festival_days_accept_whole_numbers(#[case] text: &str, #[case] expected: i64) {
    let request: MarketRequest = record(text).decode().expect("decode market");
    assert_eq!(request.festival_days, expected);
}

#[rstest]
#[case(r#"{"festival_days": 2.5}"#)]
#[case(r#"{"festival_days": 1e300}"#)]
#[case(r#"{"festival_days": "5"}"#)]
fn festival_days_reject_fractions_and_text(#[case] text: &str) {
    let err = record(text)
        .decode::<MarketRequest>()
        .expect_err("festival_days should be rejected");
    assert!(matches!(err, CliError::ParseRequest { .. }));
}
