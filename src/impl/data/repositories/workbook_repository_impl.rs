use async_trait::async_trait;
use chrono::NaiveDate;

use crate::{
    data::{
        config::AppConfig,
        datasources::spreadsheet_store::SpreadsheetStore,
        models::{
            expense_row_model::ExpenseRowModel, project_row_model::ProjectRowModel,
            user_row_model::UserRowModel,
        },
    },
    domain::{
        entities::{
            expense::ExpenseEntry, project::Project, snapshot::WorkbookSnapshot, user::UserRecord,
        },
        repositories::workbook_repository::WorkbookRepository,
    },
    errors::TrackerError,
};

/// Store-backed repository: reads both tables, runs the rows through the
/// normalizing models, and serializes entities back to canonical cells for
/// writes. Writes always emit the canonical identifier form, so the store
/// converges to one representation.
pub(crate) struct WorkbookRepositoryImpl<S: SpreadsheetStore> {
    store: S,
    projects_tab: String,
    expenses_tab: String,
    users_tab: String,
}

impl<S: SpreadsheetStore> WorkbookRepositoryImpl<S> {
    pub(crate) fn new(store: S, config: &AppConfig) -> Self {
        Self {
            store,
            projects_tab: config.projects_tab.clone(),
            expenses_tab: config.expenses_tab.clone(),
            users_tab: config.users_tab.clone(),
        }
    }

    fn date_cell(date: Option<NaiveDate>) -> String {
        date.map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }

    fn project_cells(project: &Project) -> Vec<String> {
        vec![
            project.id.as_str().to_string(),
            project.name.clone(),
            format!("{:.2}", project.initial_budget),
            Self::date_cell(project.start_date),
        ]
    }

    fn expense_cells(entry: &ExpenseEntry) -> Vec<String> {
        vec![
            entry.project_id.as_str().to_string(),
            entry.week_number.to_string(),
            Self::date_cell(entry.reference_date),
            format!("{:.2}", entry.amount),
        ]
    }
}

#[async_trait]
impl<S: SpreadsheetStore> WorkbookRepository for WorkbookRepositoryImpl<S> {
    async fn load_snapshot(&self) -> Result<WorkbookSnapshot, TrackerError> {
        let (project_records, expense_records) = futures::try_join!(
            self.store.read_records(&self.projects_tab),
            self.store.read_records(&self.expenses_tab),
        )?;
        let projects = project_records
            .iter()
            .filter_map(|r| ProjectRowModel::parse(r).map(|ProjectRowModel(p)| p))
            .collect();
        let expenses = expense_records
            .iter()
            .filter_map(|r| ExpenseRowModel::parse(r).map(|ExpenseRowModel(e)| e))
            .collect();
        Ok(WorkbookSnapshot { projects, expenses })
    }

    async fn load_users(&self) -> Result<Vec<UserRecord>, TrackerError> {
        Ok(self
            .store
            .read_records(&self.users_tab)
            .await?
            .iter()
            .filter_map(|r| UserRowModel::parse(r).map(|UserRowModel(u)| u))
            .collect())
    }

    async fn project_grid(&self) -> Result<Vec<Vec<String>>, TrackerError> {
        self.store.read_values(&self.projects_tab).await
    }

    async fn expense_grid(&self) -> Result<Vec<Vec<String>>, TrackerError> {
        self.store.read_values(&self.expenses_tab).await
    }

    async fn append_project(&self, project: &Project) -> Result<(), TrackerError> {
        self.store
            .append_row(&self.projects_tab, Self::project_cells(project))
            .await
    }

    async fn overwrite_project(
        &self,
        sheet_row: usize,
        project: &Project,
    ) -> Result<(), TrackerError> {
        self.store
            .overwrite_row(&self.projects_tab, sheet_row, Self::project_cells(project))
            .await
    }

    async fn append_expense(&self, entry: &ExpenseEntry) -> Result<(), TrackerError> {
        self.store
            .append_row(&self.expenses_tab, Self::expense_cells(entry))
            .await
    }

    async fn overwrite_expense(
        &self,
        sheet_row: usize,
        entry: &ExpenseEntry,
    ) -> Result<(), TrackerError> {
        self.store
            .overwrite_row(&self.expenses_tab, sheet_row, Self::expense_cells(entry))
            .await
    }
}
