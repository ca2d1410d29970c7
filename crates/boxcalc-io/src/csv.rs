//! CSV parsing and rendering.
//!
//! Input position files look like:
//!
//! ```csv
//! Trader,Broker,Symbol,Quantity,Price
//! Mike,MS,AAPL.N,100,157.23
//! ```
//!
//! Reports (net and boxed) share one shape:
//!
//! ```csv
//! TRADER,SYMBOL,QUANTITY
//! Mike,AAPL.N,300
//! ```
//!
//! The first line of every file is a header and is discarded on parse.
//! Parsing returns a typed [`BoxCalcError`] carrying the 1-based line
//! number for any malformed row, so the calculators never see a bad record.

use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use rust_decimal::Decimal;

use boxcalc_core::error::BoxCalcError;
use boxcalc_core::types::{BoxedPosition, NetPosition, Position};

/// Header line written on both report shapes.
pub const REPORT_HEADER: &str = "TRADER,SYMBOL,QUANTITY";

// ---------------------------------------------------------------------------
// Position input
// ---------------------------------------------------------------------------

/// Open and parse a position CSV file.
pub fn read_positions_file(path: &Path) -> Result<Vec<Position>, BoxCalcError> {
    let file = File::open(path)?;
    parse_positions(BufReader::new(file))
}

/// Parse position rows from any buffered reader.
///
/// The first line is discarded as the header; blank lines (including a
/// trailing newline) are skipped. Each remaining line must split on `,`
/// into exactly `Trader,Broker,Symbol,Quantity,Price`.
pub fn parse_positions<R: BufRead>(reader: R) -> Result<Vec<Position>, BoxCalcError> {
    let mut positions = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if idx == 0 {
            // Header row.
            continue;
        }
        let line_no = idx + 1;
        let row = line.trim();
        if row.is_empty() {
            continue;
        }

        let fields: Vec<&str> = row.split(',').collect();
        if fields.len() != 5 {
            return Err(BoxCalcError::Csv {
                line: line_no,
                msg: format!("expected 5 fields, found {}", fields.len()),
            });
        }

        positions.push(Position::new(
            parse_identifier(fields[0], "trader", line_no)?,
            parse_identifier(fields[1], "broker", line_no)?,
            parse_identifier(fields[2], "symbol", line_no)?,
            parse_decimal(fields[3], "quantity", line_no)?,
            parse_decimal(fields[4], "price", line_no)?,
        ));
    }

    Ok(positions)
}

fn parse_identifier(raw: &str, field: &str, line: usize) -> Result<String, BoxCalcError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(BoxCalcError::Csv { line, msg: format!("empty {field} field") });
    }
    Ok(value.to_string())
}

fn parse_decimal(raw: &str, field: &str, line: usize) -> Result<Decimal, BoxCalcError> {
    let value = raw.trim();
    Decimal::from_str(value).map_err(|e| BoxCalcError::Csv {
        line,
        msg: format!("bad {field} value '{value}': {e}"),
    })
}

// ---------------------------------------------------------------------------
// Report rendering
// ---------------------------------------------------------------------------

/// Render a net position report. Records are emitted in the order given.
pub fn render_net_positions(records: &[NetPosition]) -> String {
    let mut out = String::from(REPORT_HEADER);
    out.push('\n');
    for record in records {
        let _ = writeln!(out, "{},{},{}", record.trader, record.symbol, record.quantity);
    }
    out
}

/// Render a boxed position report. Records are emitted in the order given.
pub fn render_boxed_positions(records: &[BoxedPosition]) -> String {
    let mut out = String::from(REPORT_HEADER);
    out.push('\n');
    for record in records {
        let _ = writeln!(out, "{},{},{}", record.trader, record.symbol, record.quantity);
    }
    out
}

// ---------------------------------------------------------------------------
// Report parsing (fixture-driven tests compare against expected reports)
// ---------------------------------------------------------------------------

/// Parse a net position report.
pub fn parse_net_report<R: BufRead>(reader: R) -> Result<Vec<NetPosition>, BoxCalcError> {
    let rows = parse_report_rows(reader)?;
    Ok(rows.into_iter().map(|(trader, symbol, qty)| NetPosition::new(trader, symbol, qty)).collect())
}

/// Parse a boxed position report.
pub fn parse_boxed_report<R: BufRead>(reader: R) -> Result<Vec<BoxedPosition>, BoxCalcError> {
    let rows = parse_report_rows(reader)?;
    Ok(rows
        .into_iter()
        .map(|(trader, symbol, qty)| BoxedPosition::new(trader, symbol, qty))
        .collect())
}

fn parse_report_rows<R: BufRead>(
    reader: R,
) -> Result<Vec<(String, String, Decimal)>, BoxCalcError> {
    let mut rows = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if idx == 0 {
            continue;
        }
        let line_no = idx + 1;
        let row = line.trim();
        if row.is_empty() {
            continue;
        }

        let fields: Vec<&str> = row.split(',').collect();
        if fields.len() != 3 {
            return Err(BoxCalcError::Csv {
                line: line_no,
                msg: format!("expected 3 fields, found {}", fields.len()),
            });
        }

        rows.push((
            parse_identifier(fields[0], "trader", line_no)?,
            parse_identifier(fields[1], "symbol", line_no)?,
            parse_decimal(fields[2], "quantity", line_no)?,
        ));
    }

    Ok(rows)
}
