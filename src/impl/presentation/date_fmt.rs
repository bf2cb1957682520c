use chrono::NaiveDate;

/// Display form of a calendar date ("dd/mm/yyyy"); unset dates render
/// "N/A" instead of failing the page.
pub(crate) fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_set_and_unset_dates() {
        assert_eq!(
            format_date(NaiveDate::from_ymd_opt(2024, 1, 10)),
            "10/01/2024"
        );
        assert_eq!(format_date(None), "N/A");
    }
}
