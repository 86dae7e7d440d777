use chrono::{DateTime, Utc};

/// `DD/MM/YY HH:mm`.
pub const APP_DATE_FORMAT: &str = "%d/%m/%y %H:%M";

/// Formats a timestamp for table cells; missing timestamps render blank.
pub fn format_date(date: Option<&DateTime<Utc>>) -> String {
    date.map(|d| d.format(APP_DATE_FORMAT).to_string())
        .unwrap_or_default()
}
