use std::collections::HashMap;

use async_trait::async_trait;

use crate::{data::models::header_model::HeaderModel, errors::TrackerError};

/// A data row keyed by (disambiguated) header name.
pub type RawRecord = HashMap<String, String>;

/// Worksheet column names. The order listed here is also the physical cell
/// order used for appends and row overwrites.
pub mod columns {
    // Projects worksheet.
    pub const PROJECT_ID: &str = "id";
    pub const PROJECT_NAME: &str = "name";
    pub const PROJECT_INITIAL_BUDGET: &str = "initial_budget";
    pub const PROJECT_START_DATE: &str = "start_date";

    // Expenses worksheet.
    pub const EXPENSE_PROJECT_ID: &str = "project_id";
    pub const EXPENSE_WEEK_NUMBER: &str = "week_number";
    pub const EXPENSE_REFERENCE_DATE: &str = "reference_date";
    pub const EXPENSE_AMOUNT: &str = "amount";

    // Users worksheet.
    pub const USER_USERNAME: &str = "username";
    pub const USER_NAME: &str = "name";
    pub const USER_PASSWORD: &str = "password";
}

/// The minimal surface of the external spreadsheet service.
///
/// None of these operations are atomic with respect to each other: a
/// concurrent session can interleave between a read and the following
/// write. The tracker assumes a single writer and documents the race
/// instead of locking (two concurrent registrations may allocate the same
/// identifier).
#[async_trait]
pub trait SpreadsheetStore: Send + Sync {
    /// All data rows of the worksheet as header-keyed records. An empty
    /// worksheet yields an empty vec; a missing worksheet is
    /// `WorksheetNotFound`.
    async fn read_records(&self, tab: &str) -> Result<Vec<RawRecord>, TrackerError>;

    /// The raw cell grid, header row included.
    async fn read_values(&self, tab: &str) -> Result<Vec<Vec<String>>, TrackerError>;

    async fn append_row(&self, tab: &str, cells: Vec<String>) -> Result<(), TrackerError>;

    /// Overwrites the cells of one physical row. `sheet_row` is 1-based and
    /// counts the header as row 1.
    async fn overwrite_row(
        &self,
        tab: &str,
        sheet_row: usize,
        cells: Vec<String>,
    ) -> Result<(), TrackerError>;
}

// Shared handles satisfy the contract too; embedders and tests keep a
// handle on the store while the tracker owns another.
#[async_trait]
impl<S: SpreadsheetStore + ?Sized> SpreadsheetStore for std::sync::Arc<S> {
    async fn read_records(&self, tab: &str) -> Result<Vec<RawRecord>, TrackerError> {
        (**self).read_records(tab).await
    }

    async fn read_values(&self, tab: &str) -> Result<Vec<Vec<String>>, TrackerError> {
        (**self).read_values(tab).await
    }

    async fn append_row(&self, tab: &str, cells: Vec<String>) -> Result<(), TrackerError> {
        (**self).append_row(tab, cells).await
    }

    async fn overwrite_row(
        &self,
        tab: &str,
        sheet_row: usize,
        cells: Vec<String>,
    ) -> Result<(), TrackerError> {
        (**self).overwrite_row(tab, sheet_row, cells).await
    }
}

/// Turns a raw grid into header-keyed records, recovering duplicate header
/// names on the way. Cells beyond the header width are dropped; missing
/// trailing cells are simply absent from the record.
pub(crate) fn records_from_grid(grid: &[Vec<String>]) -> Vec<RawRecord> {
    let Some((header_row, data_rows)) = grid.split_first() else {
        return Vec::new();
    };
    let HeaderModel(headers) = HeaderModel::disambiguate(header_row);
    data_rows
        .iter()
        .map(|row| {
            headers
                .iter()
                .zip(row.iter())
                .map(|(name, cell)| (name.clone(), cell.clone()))
                .collect()
        })
        .collect()
}
