//! End-to-end fixture test: parse a position file, run both calculators,
//! and compare against expected report files.
//!
//! Results are compared as unordered sets — the calculators make no
//! ordering promise, so sequence comparison would be fragile.

use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use boxcalc_core::calc::{compute_boxed_positions, compute_net_positions};
use boxcalc_core::error::BoxCalcError;
use boxcalc_io::csv;

fn data(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data").join(name)
}

fn open(name: &str) -> BufReader<File> {
    BufReader::new(File::open(data(name)).unwrap())
}

#[test]
fn fixture_batch_matches_expected_reports() {
    let positions = csv::read_positions_file(&data("positions.csv")).unwrap();
    assert_eq!(positions.len(), 10);

    let net: HashSet<_> = compute_net_positions(&positions).into_iter().collect();
    let boxed: HashSet<_> = compute_boxed_positions(&positions).into_iter().collect();

    let expected_net: HashSet<_> =
        csv::parse_net_report(open("net_expected.csv")).unwrap().into_iter().collect();
    let expected_boxed: HashSet<_> =
        csv::parse_boxed_report(open("boxed_expected.csv")).unwrap().into_iter().collect();

    assert_eq!(net, expected_net);
    assert_eq!(boxed, expected_boxed);
}

#[test]
fn fixture_batch_is_order_independent() {
    let mut positions = csv::read_positions_file(&data("positions.csv")).unwrap();
    let net: HashSet<_> = compute_net_positions(&positions).into_iter().collect();
    let boxed: HashSet<_> = compute_boxed_positions(&positions).into_iter().collect();

    positions.reverse();
    let net_rev: HashSet<_> = compute_net_positions(&positions).into_iter().collect();
    let boxed_rev: HashSet<_> = compute_boxed_positions(&positions).into_iter().collect();

    assert_eq!(net, net_rev);
    assert_eq!(boxed, boxed_rev);
}

#[test]
fn missing_input_file_is_an_io_error() {
    let err = csv::read_positions_file(&data("does_not_exist.csv")).unwrap_err();
    assert!(matches!(err, BoxCalcError::Io(_)));
}
