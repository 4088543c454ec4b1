use journal_json::{event, parse_with_bigint, stringify_bigint_json, EventMap, JournalValue};

#[test]
fn build_and_serialize_an_event() {
    let jump = event!({
        "timestamp": "2026-08-06T12:00:00Z",
        "event": "FSDJump",
        "StarSystem": "Sol",
        "SystemAddress": 10477373803u64,
        "JumpDist": 8.284,
        "Taxi": false,
        "Factions": []
    });

    let text = stringify_bigint_json(&jump).unwrap();
    assert_eq!(
        text,
        r#"{"timestamp":"2026-08-06T12:00:00Z","event":"FSDJump","StarSystem":"Sol","SystemAddress":10477373803,"JumpDist":8.284,"Taxi":false,"Factions":[]}"#
    );
    assert_eq!(parse_with_bigint(&text).unwrap(), jump);
}

#[test]
fn nested_trees() {
    let scan = event!({
        "event": "Scan",
        "Parents": [{"Star": 0}, {"Null": 1}],
        "Composition": {"Ice": 0.0, "Rock": 0.67}
    });

    let parents = scan.get("Parents").unwrap().as_array().unwrap();
    assert_eq!(parents[0].get("Star").unwrap().as_i64(), Some(0));
    assert_eq!(
        scan.get("Composition").unwrap().get("Rock").unwrap().as_f64(),
        Some(0.67)
    );
}

#[test]
fn empty_forms() {
    assert_eq!(event!({}), JournalValue::Object(EventMap::new()));
    assert_eq!(event!([]), JournalValue::Array(vec![]));
    assert_eq!(event!(null), JournalValue::Null);
}
