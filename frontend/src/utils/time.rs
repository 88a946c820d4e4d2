use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Today's date in the format `<input type="date">` expects.
pub fn today_iso() -> String {
    today().format("%Y-%m-%d").to_string()
}

pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_date_input_values() {
        assert_eq!(
            parse_input_date("2024-01-10"),
            NaiveDate::from_ymd_opt(2024, 1, 10)
        );
        assert_eq!(parse_input_date(" 2024-01-10 "), NaiveDate::from_ymd_opt(2024, 1, 10));
        assert_eq!(parse_input_date(""), None);
        assert_eq!(parse_input_date("10/01/2024"), None);
    }

    #[test]
    fn today_iso_round_trips() {
        assert_eq!(parse_input_date(&today_iso()), Some(today()));
    }
}
