use crate::{
    data::{
        datasources::spreadsheet_store::{columns, RawRecord},
        models::{date_cell_model::DateCellModel, money_cell_model::MoneyCellModel},
    },
    domain::entities::project::{Project, ProjectId},
};

/// One Projects row. A row with no usable identifier cell parses to `None`
/// and is dropped; every other malformed cell coerces to its safe default.
#[derive(Debug)]
pub(crate) struct ProjectRowModel(pub(crate) Project);

impl ProjectRowModel {
    pub(crate) fn parse(record: &RawRecord) -> Option<Self> {
        let id = ProjectId::canonicalize(record.get(columns::PROJECT_ID)?)?;
        let name = record
            .get(columns::PROJECT_NAME)
            .map(|s| s.trim().to_string())
            .unwrap_or_default();
        let MoneyCellModel(initial_budget) = MoneyCellModel::parse(
            record
                .get(columns::PROJECT_INITIAL_BUDGET)
                .map(String::as_str)
                .unwrap_or(""),
        );
        let DateCellModel(start_date) = DateCellModel::parse(
            record
                .get(columns::PROJECT_START_DATE)
                .map(String::as_str)
                .unwrap_or(""),
        );
        Some(ProjectRowModel(Project {
            id,
            name,
            initial_budget,
            start_date,
        }))
    }
}
