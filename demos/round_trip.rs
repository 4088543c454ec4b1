//! Parsing a journal line precisely and writing it back without digit loss.
//!
//! Run with: cargo run --example round_trip

use journal_json::{parse_with_bigint, stringify_bigint_json};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let line = r#"{"timestamp":"2026-08-06T12:00:00Z","event":"FSDJump","StarSystem":"Shinrarta Dezhra","SystemAddress":9007199254740993,"JumpDist":14.577}"#;

    let event = parse_with_bigint(line)?;

    println!("event:     {}", event.event_name().unwrap_or("?"));
    println!("timestamp: {:?}", event.timestamp());

    // SystemAddress is past 2^53; the precise parser kept every digit.
    let address = event.get("SystemAddress").and_then(|v| v.as_bigint());
    println!("address:   {}", address.expect("SystemAddress present"));

    let out = stringify_bigint_json(&event)?;
    println!("\nround-tripped line:\n{}", out);
    assert_eq!(out, line);

    Ok(())
}
