/// Date formatting for list and detail cells

use chrono::{DateTime, NaiveDate};

/// ISO datetime to `DD.MM.YYYY HH:MM:SS` in UTC
/// Example: "2024-03-15T14:02:26.123Z" -> "15.03.2024 14:02:26"
pub fn format_datetime(datetime_str: &str) -> String {
    match DateTime::parse_from_rfc3339(datetime_str) {
        Ok(dt) => dt.naive_utc().format("%d.%m.%Y %H:%M:%S").to_string(),
        Err(_) => format_date(datetime_str),
    }
}

/// ISO date (or datetime) to `DD.MM.YYYY`; anything else is returned as is
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%d.%m.%Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// Value for `<input type="date">`: the `YYYY-MM-DD` prefix of an ISO string
pub fn date_input_value(raw: &str) -> String {
    let date_part = raw.split('T').next().unwrap_or(raw);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(_) => date_part.to_string(),
        Err(_) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-03-15T14:02:26.123Z"), "15.03.2024 14:02:26");
        assert_eq!(format_datetime("2024-03-15T14:02:26+00:00"), "15.03.2024 14:02:26");
    }

    #[test]
    fn test_format_datetime_falls_back_to_date() {
        assert_eq!(format_datetime("2024-03-15"), "15.03.2024");
        assert_eq!(format_datetime("soon"), "soon");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15.03.2024");
        assert_eq!(format_date("2024-03-15T14:02:26Z"), "15.03.2024");
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn test_date_input_value() {
        assert_eq!(date_input_value("2024-03-15T00:00:00.000Z"), "2024-03-15");
        assert_eq!(date_input_value("15/03/2024"), "");
    }
}
