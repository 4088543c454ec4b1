use criterion::{black_box, criterion_group, criterion_main, Criterion};
use journal_json::{
    parse_with_bigint, parse_with_lossy_integers, stringify_bigint_json, to_value,
};
use serde::Serialize;

const FSD_JUMP: &str = r#"{"timestamp":"2026-08-06T12:00:00Z","event":"FSDJump","StarSystem":"Shinrarta Dezhra","SystemAddress":3932277478106,"StarPos":[55.71875,17.59375,27.15625],"JumpDist":14.577,"FuelUsed":0.947167,"FuelLevel":15.052833}"#;

fn scan_line() -> String {
    // A long Scan event with a mix of identifiers, floats, and nested arrays.
    let mut parents = String::new();
    for i in 0..16 {
        if i > 0 {
            parents.push(',');
        }
        parents.push_str(&format!(r#"{{"Ring":{}}}"#, 9007199254740990u64 + i));
    }
    format!(
        r#"{{"timestamp":"2026-08-06T12:00:00Z","event":"Scan","BodyName":"Col 285 Sector IY-W b16-6 A","SystemAddress":12345678901234567890,"DistanceFromArrivalLS":0.0,"Radius":2496916.25,"SurfaceTemperature":3227.0,"Parents":[{}]}}"#,
        parents
    )
}

fn benchmark_parse_lossy(c: &mut Criterion) {
    c.bench_function("parse_lossy_fsd_jump", |b| {
        b.iter(|| parse_with_lossy_integers(black_box(FSD_JUMP)))
    });
}

fn benchmark_parse_precise(c: &mut Criterion) {
    c.bench_function("parse_precise_fsd_jump", |b| {
        b.iter(|| parse_with_bigint(black_box(FSD_JUMP)))
    });

    let line = scan_line();
    c.bench_function("parse_precise_large_scan", |b| {
        b.iter(|| parse_with_bigint(black_box(&line)))
    });
}

fn benchmark_stringify(c: &mut Criterion) {
    let event = parse_with_bigint(FSD_JUMP).unwrap();
    c.bench_function("stringify_fsd_jump", |b| {
        b.iter(|| stringify_bigint_json(black_box(&event)))
    });

    let scan = parse_with_bigint(&scan_line()).unwrap();
    c.bench_function("stringify_large_scan", |b| {
        b.iter(|| stringify_bigint_json(black_box(&scan)))
    });
}

fn benchmark_round_trip(c: &mut Criterion) {
    c.bench_function("round_trip_fsd_jump", |b| {
        b.iter(|| {
            let event = parse_with_bigint(black_box(FSD_JUMP)).unwrap();
            stringify_bigint_json(&event).unwrap()
        })
    });
}

fn benchmark_to_value(c: &mut Criterion) {
    #[derive(Serialize, Clone)]
    struct Jump {
        event: String,
        system_address: u64,
        jump_dist: f64,
    }

    let jump = Jump {
        event: "FSDJump".to_string(),
        system_address: 3932277478106,
        jump_dist: 14.577,
    };

    c.bench_function("to_value_struct", |b| {
        b.iter(|| to_value(black_box(&jump)))
    });
}

criterion_group!(
    benches,
    benchmark_parse_lossy,
    benchmark_parse_precise,
    benchmark_stringify,
    benchmark_round_trip,
    benchmark_to_value
);
criterion_main!(benches);
