use chrono::NaiveDateTime;

const SHORT_ID_LEN: usize = 8;

/// Departure as shown on cards and in option labels, e.g. `01.03.2025 10:30`.
pub fn format_departure(datetime: &NaiveDateTime) -> String {
    datetime.format("%d.%m.%Y %H:%M").to_string()
}

/// Value accepted by a `datetime-local` input, e.g. `2025-03-01T10:30`.
pub fn datetime_local_value(datetime: &NaiveDateTime) -> String {
    datetime.format("%Y-%m-%dT%H:%M").to_string()
}

/// First eight characters of an ID followed by an ellipsis.
pub fn short_id(id: &str) -> String {
    let prefix: String = id.chars().take(SHORT_ID_LEN).collect();
    format!("{}...", prefix)
}

pub fn seats_label(count: i64) -> String {
    format!("{} seat{}", count, if count == 1 { "" } else { "s" })
}
