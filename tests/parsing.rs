use std::fs;
use std::path::PathBuf;

use cricket_history::archive_fetch::{parse_player_names_json, parse_player_profile_json};
use cricket_history::error::GatewayError;
use cricket_history::gemini::parse_generate_response_json;
use cricket_history::reference::Role;
use serde_json::{Value, json};

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

#[test]
fn parses_full_profile_fixture() {
    let raw = read_fixture("profile_bradman.json");
    let profile = parse_player_profile_json(&raw).expect("fixture should parse");
    assert_eq!(profile.full_name, "Sir Donald George Bradman");
    assert_eq!(profile.nickname.as_deref(), Some("The Don"));
    assert_eq!(profile.role, Role::Batter);
    assert_eq!(profile.career_statistics.len(), 2);

    let test = &profile.career_statistics[0];
    assert_eq!(test.format, "Test");
    assert_eq!(test.matches, 52);
    assert_eq!(test.runs, Some(6996));
    assert_eq!(test.wickets, Some(2));
    assert!((test.average - 99.94).abs() < 1e-9);
    assert_eq!(test.strike_rate, None);

    let first_class = &profile.career_statistics[1];
    assert_eq!(first_class.matches, 234);
    assert_eq!(first_class.runs, Some(28_067));
    assert!((first_class.average - 95.14).abs() < 1e-9);
    assert_eq!(first_class.wickets, None);
}

#[test]
fn blank_list_entries_are_dropped() {
    let raw = read_fixture("profile_bradman.json");
    let profile = parse_player_profile_json(&raw).expect("fixture should parse");
    assert_eq!(profile.major_achievements.len(), 2);
    assert!(profile.major_achievements.iter().all(|a| !a.is_empty()));
}

#[test]
fn missing_required_field_is_a_decode_error() {
    let raw = read_fixture("profile_missing_legacy.json");
    let err = parse_player_profile_json(&raw).expect_err("legacySummary is required");
    assert!(matches!(err, GatewayError::Decode(_)));
}

#[test]
fn unknown_role_is_rejected() {
    let raw = read_fixture("profile_unknown_role.json");
    assert!(parse_player_profile_json(&raw).is_err());
}

#[test]
fn malformed_profile_text_is_an_error_not_a_panic() {
    for raw in ["", "{}", "null", "Sorry, I can't help with that.", "{\"fullName\": 3}"] {
        assert!(parse_player_profile_json(raw).is_err(), "accepted {raw:?}");
    }
}

#[test]
fn fenced_profile_is_accepted() {
    let raw = format!("```json\n{}\n```", read_fixture("profile_bradman.json"));
    let profile = parse_player_profile_json(&raw).expect("fenced json should parse");
    assert_eq!(profile.country, "Australia");
}

#[test]
fn names_from_service_envelope_are_capped_at_eight() {
    let raw = read_fixture("gemini_names_response.json");
    let text = parse_generate_response_json(&raw)
        .expect("envelope should parse")
        .expect("envelope carries text");
    let names = parse_player_names_json(&text).expect("names should parse");
    assert_eq!(names.len(), 8);
    assert_eq!(names[0], "W.G. Grace");
    assert!(!names.iter().any(|n| n == "Herbert Sutcliffe"));
}

#[test]
fn malformed_names_are_an_error() {
    for raw in ["", "not json", "{\"names\": []}", "[1, 2, 3]"] {
        assert!(parse_player_names_json(raw).is_err(), "accepted {raw:?}");
    }
}

/// Bradman fixture with one field of the Test stat line replaced.
fn bradman_with_test_stat(field: &str, value: Value) -> String {
    let mut profile: Value =
        serde_json::from_str(&read_fixture("profile_bradman.json")).expect("fixture is json");
    profile["careerStatistics"][0][field] = value;
    profile.to_string()
}

#[test]
fn negative_count_is_a_decode_error() {
    let raw = read_fixture("profile_negative_runs.json");
    let err = parse_player_profile_json(&raw).expect_err("negative runs must not parse");
    assert!(matches!(err, GatewayError::Decode(_)));
}

#[test]
fn bad_figures_are_rejected_not_defaulted() {
    let cases = [
        ("matches", json!(-3)),
        ("wickets", json!("-1")),
        ("average", json!(-12.5)),
        ("average", json!("N/A")),
        ("average", Value::Null),
        ("strikeRate", json!("fast")),
        ("economy", json!(-0.5)),
    ];
    for (field, value) in cases {
        let raw = bradman_with_test_stat(field, value.clone());
        assert!(
            matches!(parse_player_profile_json(&raw), Err(GatewayError::Decode(_))),
            "accepted {field} = {value}"
        );
    }
}

#[test]
fn placeholder_for_optional_figure_means_absent() {
    let raw = bradman_with_test_stat("strikeRate", json!("N/A"));
    let profile = parse_player_profile_json(&raw).expect("placeholder is allowed");
    assert_eq!(profile.career_statistics[0].strike_rate, None);

    let raw = bradman_with_test_stat("wickets", json!("-"));
    let profile = parse_player_profile_json(&raw).expect("placeholder is allowed");
    assert_eq!(profile.career_statistics[0].wickets, None);
}

#[test]
fn uppercase_fence_is_accepted() {
    let raw = format!("```JSON\n{}\n```", read_fixture("profile_bradman.json"));
    let profile = parse_player_profile_json(&raw).expect("fenced json should parse");
    assert_eq!(profile.full_name, "Sir Donald George Bradman");
}
