//! How the two parsing modes treat a large identifier differently.
//!
//! Run with: cargo run --example lossy_vs_precise

use journal_json::{parse_with_bigint, parse_with_lossy_integers};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // 2^53 + 1: the first integer an f64 cannot represent.
    let line = r#"{"event":"CarrierJump","SystemAddress":9007199254740993}"#;

    let lossy = parse_with_lossy_integers(line)?;
    let precise = parse_with_bigint(line)?;

    let rounded = lossy.get("SystemAddress").unwrap().as_f64().unwrap();
    let exact = precise.get("SystemAddress").unwrap().as_bigint().unwrap();

    println!("literal in file:  9007199254740993");
    println!("lossy parse:      {:?}  <- may have rounded", rounded);
    println!("precise parse:    {}", exact);

    assert_eq!(exact.to_string(), "9007199254740993");

    // Floats and everything else behave identically in both modes.
    let floats = r#"{"FuelUsed":0.947167,"JumpDist":14.577}"#;
    assert_eq!(
        parse_with_lossy_integers(floats)?.get("FuelUsed").unwrap().as_f64(),
        parse_with_bigint(floats)?.get("FuelUsed").unwrap().as_f64(),
    );

    Ok(())
}
