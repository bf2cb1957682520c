use async_trait::async_trait;

use crate::{
    domain::entities::{
        expense::ExpenseEntry, project::Project, snapshot::WorkbookSnapshot, user::UserRecord,
    },
    errors::TrackerError,
};

/// Typed access to the workbook, as the usecase layer sees it. Reads return
/// normalized entities; the raw grids are exposed only for the
/// locate-then-write step of the mutation operations.
#[async_trait]
pub trait WorkbookRepository: Send + Sync {
    async fn load_snapshot(&self) -> Result<WorkbookSnapshot, TrackerError>;

    async fn load_users(&self) -> Result<Vec<UserRecord>, TrackerError>;

    /// Raw Projects grid, header row included (for row location).
    async fn project_grid(&self) -> Result<Vec<Vec<String>>, TrackerError>;

    /// Raw Expenses grid, header row included (for row location).
    async fn expense_grid(&self) -> Result<Vec<Vec<String>>, TrackerError>;

    async fn append_project(&self, project: &Project) -> Result<(), TrackerError>;

    async fn overwrite_project(
        &self,
        sheet_row: usize,
        project: &Project,
    ) -> Result<(), TrackerError>;

    async fn append_expense(&self, entry: &ExpenseEntry) -> Result<(), TrackerError>;

    async fn overwrite_expense(
        &self,
        sheet_row: usize,
        entry: &ExpenseEntry,
    ) -> Result<(), TrackerError>;
}
