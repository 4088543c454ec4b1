//! Building event trees from typed structs and the event! macro.
//!
//! Run with: cargo run --example typed_events

use journal_json::{event, stringify_bigint_json, to_value};
use serde::Serialize;
use std::error::Error;

#[derive(Serialize)]
struct CarrierJumpRequest {
    event: &'static str,
    #[serde(rename = "CarrierID")]
    carrier_id: u64,
    #[serde(rename = "SystemAddress")]
    system_address: u64,
}

fn main() -> Result<(), Box<dyn Error>> {
    // From a typed struct: integer fields become precise big-integer nodes.
    let request = CarrierJumpRequest {
        event: "CarrierJumpRequest",
        carrier_id: 3700005632,
        system_address: 9467047910809,
    };
    let tree = to_value(&request)?;
    println!("from struct: {}", stringify_bigint_json(&tree)?);

    // Ad hoc, with the macro.
    let scan = event!({
        "timestamp": "2026-08-06T12:00:00Z",
        "event": "Scan",
        "BodyID": 7,
        "SystemAddress": 12345678901234567890u128,
        "Radius": 2496916.25
    });
    println!("from macro:  {}", stringify_bigint_json(&scan)?);

    Ok(())
}
