use chrono::{DateTime, NaiveDateTime};

/// Parse an order timestamp, either a zone-less local time or RFC 3339.
pub(crate) fn parse_order_time(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|ts| ts.naive_local()))
}

pub(crate) fn format_timestamp(raw: &str) -> String {
    parse_order_time(raw)
        .map(|ts| ts.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Time of day only, for the kitchen board.
pub(crate) fn format_clock(raw: &str) -> String {
    parse_order_time(raw)
        .map(|ts| ts.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| raw.to_string())
}
