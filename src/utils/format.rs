use chrono::{DateTime, NaiveDate, Utc};

/// Short display form for opaque record ids in table cells.
pub fn short_id(id: &str) -> String {
    if id.len() <= 8 {
        id.to_string()
    } else {
        format!("{}...", &id[..8])
    }
}

pub fn format_date(value: &DateTime<Utc>) -> String {
    value.format("%Y-%m-%d").to_string()
}

pub fn format_date_time(value: &DateTime<Utc>) -> String {
    value.format("%Y-%m-%d %H:%M").to_string()
}

pub fn format_opt_date(value: Option<&NaiveDate>) -> String {
    value
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

pub fn format_last_login(value: Option<&DateTime<Utc>>) -> String {
    value.map(format_date).unwrap_or_else(|| "Never".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn short_id_truncates_long_ids() {
        assert_eq!(short_id("0123456789abcdef"), "01234567...");
        assert_eq!(short_id("abc"), "abc");
    }

    #[test]
    fn last_login_falls_back_to_never() {
        assert_eq!(format_last_login(None), "Never");
        let at = Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap();
        assert_eq!(format_last_login(Some(&at)), "2025-03-14");
    }

    #[test]
    fn optional_dates_render_placeholder() {
        assert_eq!(format_opt_date(None), "N/A");
        let date = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
        assert_eq!(format_opt_date(Some(&date)), "2024-12-01");
    }
}
