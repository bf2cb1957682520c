use crate::{
    data::datasources::spreadsheet_store::{columns, RawRecord},
    domain::entities::user::UserRecord,
};

/// One Users row. Rows with a blank username are dropped.
#[derive(Debug)]
pub(crate) struct UserRowModel(pub(crate) UserRecord);

impl UserRowModel {
    pub(crate) fn parse(record: &RawRecord) -> Option<Self> {
        let username = record.get(columns::USER_USERNAME)?.trim().to_string();
        if username.is_empty() {
            return None;
        }
        let display_name = record
            .get(columns::USER_NAME)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| username.clone());
        let password_hash = record
            .get(columns::USER_PASSWORD)
            .map(|s| s.trim().to_string())
            .unwrap_or_default();
        Some(UserRowModel(UserRecord {
            username,
            display_name,
            password_hash,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(cells: &[(&str, &str)]) -> RawRecord {
        cells
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn parses_a_user_row() {
        let model = UserRowModel::parse(&record(&[
            ("username", "ana"),
            ("name", "Ana Souza"),
            ("password", "$2b$12$abcdefg"),
        ]))
        .expect("row parses");
        assert_eq!(model.0.username, "ana");
        assert_eq!(model.0.display_name, "Ana Souza");
        assert_eq!(model.0.password_hash, "$2b$12$abcdefg");
    }

    #[test]
    fn blank_username_drops_the_row() {
        assert!(UserRowModel::parse(&record(&[("name", "Ana")])).is_none());
        assert!(UserRowModel::parse(&record(&[("username", "  ")])).is_none());
    }

    #[test]
    fn display_name_falls_back_to_username() {
        let model = UserRowModel::parse(&record(&[("username", "ana"), ("password", "h")]))
            .expect("row parses");
        assert_eq!(model.0.display_name, "ana");
    }
}
