use chrono::NaiveDate;

/// ISO date cell ("YYYY-MM-DD"). A blank or unparseable cell leaves the
/// date unset; downstream rendering shows "N/A".
#[derive(Debug)]
pub(crate) struct DateCellModel(pub(crate) Option<NaiveDate>);

impl DateCellModel {
    pub(crate) fn parse(raw: &str) -> Self {
        DateCellModel(NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates() {
        assert_eq!(
            DateCellModel::parse(" 2024-01-10 ").0,
            NaiveDate::from_ymd_opt(2024, 1, 10)
        );
    }

    #[test]
    fn malformed_cells_leave_the_date_unset() {
        assert_eq!(DateCellModel::parse("").0, None);
        assert_eq!(DateCellModel::parse("10/01/2024").0, None);
        assert_eq!(DateCellModel::parse("2024-13-40").0, None);
    }
}
