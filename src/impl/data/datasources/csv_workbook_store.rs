use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::{
    data::datasources::spreadsheet_store::{records_from_grid, RawRecord, SpreadsheetStore},
    errors::TrackerError,
};

/// File-backed workbook: each worksheet is `<dir>/<tab>.csv`. This is the
/// crate's runnable store; the hosted spreadsheet service satisfies the
/// same trait behind a network client.
pub struct CsvWorkbookStore {
    dir: PathBuf,
}

impl CsvWorkbookStore {
    /// Opens an existing workbook directory. A missing directory is the
    /// "spreadsheet not found" case.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self, TrackerError> {
        let dir = dir.as_ref().to_path_buf();
        if !dir.is_dir() {
            return Err(TrackerError::SpreadsheetNotFound {
                name: dir.display().to_string(),
            });
        }
        Ok(Self { dir })
    }

    fn sheet_path(&self, tab: &str) -> PathBuf {
        self.dir.join(format!("{}.csv", tab))
    }

    async fn load_grid(&self, tab: &str) -> Result<Vec<Vec<String>>, TrackerError> {
        let raw = tokio::fs::read_to_string(self.sheet_path(tab))
            .await
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => TrackerError::WorksheetNotFound {
                    name: tab.to_string(),
                },
                _ => TrackerError::StoreUnavailable {
                    details: e.to_string(),
                },
            })?;
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(raw.as_bytes());
        reader
            .records()
            .map(|record| {
                record
                    .map(|r| r.iter().map(|cell| cell.to_string()).collect())
                    .map_err(|e| TrackerError::StoreUnavailable {
                        details: e.to_string(),
                    })
            })
            .collect()
    }

    async fn store_grid(&self, tab: &str, grid: &[Vec<String>]) -> Result<(), TrackerError> {
        let store_err = |details: String| TrackerError::StoreUnavailable { details };
        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_writer(Vec::new());
        for row in grid {
            writer.write_record(row).map_err(|e| store_err(e.to_string()))?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| store_err(e.to_string()))?;
        tokio::fs::write(self.sheet_path(tab), bytes)
            .await
            .map_err(|e| store_err(e.to_string()))
    }
}

#[async_trait]
impl SpreadsheetStore for CsvWorkbookStore {
    async fn read_records(&self, tab: &str) -> Result<Vec<RawRecord>, TrackerError> {
        Ok(records_from_grid(&self.load_grid(tab).await?))
    }

    async fn read_values(&self, tab: &str) -> Result<Vec<Vec<String>>, TrackerError> {
        self.load_grid(tab).await
    }

    async fn append_row(&self, tab: &str, cells: Vec<String>) -> Result<(), TrackerError> {
        let mut grid = self.load_grid(tab).await?;
        grid.push(cells);
        self.store_grid(tab, &grid).await
    }

    async fn overwrite_row(
        &self,
        tab: &str,
        sheet_row: usize,
        cells: Vec<String>,
    ) -> Result<(), TrackerError> {
        let mut grid = self.load_grid(tab).await?;
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
        self.store_grid(tab, &grid).await
    }
}
