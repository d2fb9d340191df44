//! Tests for the condition expression codec.
use kaiwa::prelude::*;

#[test]
fn test_decode_empty_is_always() {
    assert_eq!(decode(""), ParsedCondition::always());
}

#[test]
fn test_decode_bare_no_parameter_kinds() {
    for (text, kind) in [
        ("always", ConditionKind::Always),
        ("user_responded", ConditionKind::UserResponded),
        ("api_success", ConditionKind::ApiSuccess),
        ("api_failed", ConditionKind::ApiFailed),
    ] {
        let parsed = decode(text);
        assert_eq!(parsed.kind, kind);
        assert!(parsed.parameter.is_empty());
    }
}

#[test]
fn test_decode_parameterized_kinds() {
    assert_eq!(
        decode("contains:refund"),
        ParsedCondition::new(ConditionKind::Contains, "refund")
    );
    assert_eq!(
        decode("max_turns:3"),
        ParsedCondition::new(ConditionKind::MaxTurns, "3")
    );
    assert_eq!(
        decode("variables_extracted:date,name"),
        ParsedCondition::new(ConditionKind::VariablesExtracted, "date,name")
    );
    assert_eq!(
        decode("variable_equals:tier=gold"),
        ParsedCondition::new(ConditionKind::VariableEquals, "tier=gold")
    );
    assert_eq!(
        decode("intent:no_match"),
        ParsedCondition::new(ConditionKind::Intent, "no_match")
    );
    assert_eq!(
        decode("api_status:404"),
        ParsedCondition::new(ConditionKind::ApiStatus, "404")
    );
}

#[test]
fn test_decode_timeout_strips_one_trailing_s() {
    assert_eq!(
        decode("timeout:10s"),
        ParsedCondition::new(ConditionKind::Timeout, "10")
    );
    // No suffix is tolerated
    assert_eq!(
        decode("timeout:10"),
        ParsedCondition::new(ConditionKind::Timeout, "10")
    );
    // Exactly one `s` comes off, never more
    assert_eq!(
        decode("timeout:ss"),
        ParsedCondition::new(ConditionKind::Timeout, "s")
    );
}

#[test]
fn test_decode_unknown_degrades_to_always() {
    assert_eq!(decode("frobnicate:xyz"), ParsedCondition::always());
    assert_eq!(decode("gibberish"), ParsedCondition::always());
    // A no-parameter kind with a stray parameter is malformed too
    assert_eq!(decode("always:whatever"), ParsedCondition::always());
}

#[test]
fn test_encode_no_parameter_kinds() {
    assert_eq!(encode(ConditionKind::Always, ""), "always");
    assert_eq!(encode(ConditionKind::ApiSuccess, ""), "api_success");
    // A parameter on a no-parameter kind is ignored
    assert_eq!(encode(ConditionKind::UserResponded, "junk"), "user_responded");
}

#[test]
fn test_encode_timeout_appends_suffix() {
    assert_eq!(encode(ConditionKind::Timeout, "10"), "timeout:10s");
}

#[test]
fn test_encode_empty_parameter_yields_bare_name() {
    // No trailing colon, ever
    assert_eq!(encode(ConditionKind::Contains, ""), "contains");
    assert_eq!(encode(ConditionKind::Timeout, ""), "timeout");
}

#[test]
fn test_round_trip_law() {
    // Every pair producible by decode must survive encode -> decode.
    let pairs = [
        (ConditionKind::Always, ""),
        (ConditionKind::UserResponded, ""),
        (ConditionKind::Timeout, "45"),
        (ConditionKind::Timeout, ""),
        (ConditionKind::MaxTurns, "3"),
        (ConditionKind::Contains, "refund"),
        (ConditionKind::VariablesExtracted, "a,b,c"),
        (ConditionKind::ExtractionFailed, "date"),
        (ConditionKind::VariableEquals, "tier=gold"),
        (ConditionKind::Intent, "no_match"),
        (ConditionKind::ApiSuccess, ""),
        (ConditionKind::ApiFailed, ""),
        (ConditionKind::ApiStatus, "503"),
        (ConditionKind::ApiResponseContains, "ok"),
    ];
    for (kind, parameter) in pairs {
        let text = encode(kind, parameter);
        let parsed = decode(&text);
        assert_eq!(parsed.kind, kind, "kind survives round trip of '{}'", text);
        assert_eq!(
            parsed.parameter, parameter,
            "parameter survives round trip of '{}'",
            text
        );
    }
}

#[test]
fn test_parsed_condition_display_matches_encode() {
    let parsed = ParsedCondition::new(ConditionKind::Timeout, "10");
    assert_eq!(parsed.to_string(), "timeout:10s");
}
