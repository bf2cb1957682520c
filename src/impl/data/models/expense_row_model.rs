use crate::{
    data::{
        datasources::spreadsheet_store::{columns, RawRecord},
        models::{date_cell_model::DateCellModel, money_cell_model::MoneyCellModel},
    },
    domain::entities::{expense::ExpenseEntry, project::ProjectId},
};

/// One Expenses row. Rows with no usable project identifier are dropped;
/// a malformed week cell normalizes to 0, which no locate key can match.
#[derive(Debug)]
pub(crate) struct ExpenseRowModel(pub(crate) ExpenseEntry);

impl ExpenseRowModel {
    pub(crate) fn parse(record: &RawRecord) -> Option<Self> {
        let project_id = ProjectId::canonicalize(record.get(columns::EXPENSE_PROJECT_ID)?)?;
        let week_number = record
            .get(columns::EXPENSE_WEEK_NUMBER)
            .and_then(|cell| ExpenseEntry::week_from_cell(cell))
            .unwrap_or(0);
        let DateCellModel(reference_date) = DateCellModel::parse(
            record
                .get(columns::EXPENSE_REFERENCE_DATE)
                .map(String::as_str)
                .unwrap_or(""),
        );
        let MoneyCellModel(amount) = MoneyCellModel::parse(
            record
                .get(columns::EXPENSE_AMOUNT)
                .map(String::as_str)
                .unwrap_or(""),
        );
        Some(ExpenseRowModel(ExpenseEntry {
            project_id,
            week_number,
            reference_date,
            amount,
        }))
    }
}
