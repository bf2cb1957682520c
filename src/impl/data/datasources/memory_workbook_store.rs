use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard},
};

use async_trait::async_trait;

use crate::{
    data::datasources::spreadsheet_store::{records_from_grid, RawRecord, SpreadsheetStore},
    errors::TrackerError,
};

/// In-memory workbook seeded from literal grids. Backs the test suite and
/// embedders that don't need persistence.
#[derive(Default)]
pub struct InMemoryWorkbookStore {
    sheets: Mutex<HashMap<String, Vec<Vec<String>>>>,
}

impl InMemoryWorkbookStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sheet(self, tab: &str, rows: &[&[&str]]) -> Self {
        let grid = rows
            .iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect();
        if let Ok(mut sheets) = self.sheets.lock() {
            sheets.insert(tab.to_string(), grid);
        }
        self
    }

    /// A copy of the worksheet's current grid, for assertions.
    pub fn sheet(&self, tab: &str) -> Option<Vec<Vec<String>>> {
        self.sheets.lock().ok()?.get(tab).cloned()
    }

    fn sheets(&self) -> Result<MutexGuard<'_, HashMap<String, Vec<Vec<String>>>>, TrackerError> {
        self.sheets
            .lock()
            .map_err(|_| TrackerError::StoreUnavailable {
                details: "workbook mutex poisoned".to_string(),
            })
    }
}

#[async_trait]
impl SpreadsheetStore for InMemoryWorkbookStore {
    async fn read_records(&self, tab: &str) -> Result<Vec<RawRecord>, TrackerError> {
        let sheets = self.sheets()?;
        let grid = sheets
            .get(tab)
            .ok_or_else(|| TrackerError::WorksheetNotFound {
                name: tab.to_string(),
            })?;
        Ok(records_from_grid(grid))
    }

    async fn read_values(&self, tab: &str) -> Result<Vec<Vec<String>>, TrackerError> {
        let sheets = self.sheets()?;
        sheets
            .get(tab)
            .cloned()
            .ok_or_else(|| TrackerError::WorksheetNotFound {
                name: tab.to_string(),
            })
    }

    async fn append_row(&self, tab: &str, cells: Vec<String>) -> Result<(), TrackerError> {
        let mut sheets = self.sheets()?;
        let grid = sheets
            .get_mut(tab)
            .ok_or_else(|| TrackerError::WorksheetNotFound {
                name: tab.to_string(),
            })?;
        grid.push(cells);
        Ok(())
    }

    async fn overwrite_row(
        &self,
        tab: &str,
        sheet_row: usize,
        cells: Vec<String>,
    ) -> Result<(), TrackerError> {
        let mut sheets = self.sheets()?;
        let grid = sheets
            .get_mut(tab)
            .ok_or_else(|| TrackerError::WorksheetNotFound {
                name: tab.to_string(),
            })?;
        if sheet_row == 0 || sheet_row > grid.len() {
            return Err(TrackerError::StoreUnavailable {
                details: format!(
                    "row {} out of range for worksheet '{}' ({} rows)",
                    sheet_row,
                    tab,
                    grid.len()
                ),
            });
        }
        grid[sheet_row - 1] = cells;
        Ok(())
    }
}
