//! JSON report rendering via `serde_json`.
//!
//! Alternative output format for downstream tooling; the CSV module stays
//! the default console shape.

use boxcalc_core::types::{BoxedPosition, NetPosition};

/// Render a net position report as a pretty-printed JSON array.
pub fn render_net_positions(records: &[NetPosition]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(records)
}

/// Render a boxed position report as a pretty-printed JSON array.
pub fn render_boxed_positions(records: &[BoxedPosition]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(records)
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn net_report_shape() {
        let records = vec![NetPosition::new("Mike", "AAPL.N", dec!(300))];
        let rendered = render_net_positions(&records).unwrap();

        let parsed: Vec<NetPosition> = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed, records);
    }

    #[test]
    fn boxed_report_shape() {
        let records = vec![BoxedPosition::new("Mike", "IBM.N", dec!(20))];
        let rendered = render_boxed_positions(&records).unwrap();
        assert!(rendered.contains("\"trader\": \"Mike\""));

        let parsed: Vec<BoxedPosition> = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed, records);
    }
}
