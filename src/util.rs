use chrono::NaiveDate;

use crate::{
    data::{
        config::AppConfig,
        datasources::{
            csv_workbook_store::CsvWorkbookStore, spreadsheet_store::SpreadsheetStore,
        },
        repositories::workbook_repository_impl::WorkbookRepositoryImpl,
    },
    domain::{
        entities::{
            expense::ExpenseEntry,
            project::ProjectId,
            snapshot::WorkbookSnapshot,
            status::{FinancialStatus, ProjectReport},
            user::Session,
        },
        logic::id_allocator::{next_project_id, next_week_number},
        usecases::tracker_usecase::{TrackerUsecase as _, TrackerUsecaseImpl},
    },
    errors::TrackerError,
    presentation::{report_printer::ReportPrinter, screens::Screen},
};

/// The application core behind the worksite finance screens: four mutation
/// operations, two read views, credential verification, and plain-text
/// screen rendering. Owns its store client explicitly; tear it down by
/// dropping, rebuild it on failure instead of caching a broken handle.
pub struct WorksiteFinanceUtil<S: SpreadsheetStore> {
    usecase: TrackerUsecaseImpl<WorkbookRepositoryImpl<S>>,
    printer: ReportPrinter,
}

impl<S: SpreadsheetStore> WorksiteFinanceUtil<S> {
    pub fn new(store: S, config: &AppConfig) -> Self {
        Self {
            usecase: TrackerUsecaseImpl::new(WorkbookRepositoryImpl::new(store, config), config),
            printer: ReportPrinter::new(),
        }
    }

    /// The current typed snapshot (served from the bounded cache).
    pub async fn snapshot(&self) -> Result<WorkbookSnapshot, TrackerError> {
        self.usecase.snapshot().await
    }

    /// Per-project financial position for every registered project.
    pub async fn financial_status(&self) -> Result<Vec<FinancialStatus>, TrackerError> {
        self.usecase.financial_status().await
    }

    /// Single-project detail: financial position plus the full expense
    /// history, ordered by week ascending.
    pub async fn project_report(&self, id: &ProjectId) -> Result<ProjectReport, TrackerError> {
        self.usecase.project_report(id).await
    }

    /// Registers a new project and returns its freshly allocated id.
    pub async fn register_project(
        &self,
        name: &str,
        initial_budget: f64,
        start_date: NaiveDate,
    ) -> Result<ProjectId, TrackerError> {
        self.usecase
            .register_project(name, initial_budget, start_date)
            .await
    }

    pub async fn update_project(
        &self,
        id: &ProjectId,
        new_name: &str,
        new_budget: f64,
        new_start_date: NaiveDate,
    ) -> Result<(), TrackerError> {
        self.usecase
            .update_project(id, new_name, new_budget, new_start_date)
            .await
    }

    /// Records the next week's expense and returns the allocated week
    /// number.
    pub async fn register_expense(
        &self,
        project_id: &ProjectId,
        amount: f64,
        reference_date: NaiveDate,
    ) -> Result<u32, TrackerError> {
        self.usecase
            .register_expense(project_id, amount, reference_date)
            .await
    }

    pub async fn update_expense(
        &self,
        project_id: &ProjectId,
        week_number: u32,
        new_amount: f64,
        new_reference_date: NaiveDate,
    ) -> Result<(), TrackerError> {
        self.usecase
            .update_expense(project_id, week_number, new_amount, new_reference_date)
            .await
    }

    /// Verifies credentials against the Users worksheet and issues a
    /// bounded session.
    pub async fn login(&self, username: &str, password: &str) -> Result<Session, TrackerError> {
        self.usecase.login(username, password).await
    }

    /// Renders one screen as plain text. The screen is an explicit
    /// parameter of the request cycle, not ambient state.
    pub async fn render_screen(&self, screen: &Screen) -> Result<String, TrackerError> {
        match screen {
            Screen::RegisterProject => {
                let snapshot = self.usecase.snapshot().await?;
                let next_id = next_project_id(&snapshot.projects);
                Ok(self
                    .printer
                    .print_registration_screen(&snapshot.projects, &next_id))
            }
            Screen::RecordExpense(id) => {
                let snapshot = self.usecase.snapshot().await?;
                let project =
                    snapshot
                        .project(id)
                        .ok_or_else(|| TrackerError::UnknownProject {
                            id: id.to_string(),
                        })?;
                let next_week = next_week_number(&snapshot.expenses, id);
                let mut history: Vec<&ExpenseEntry> = snapshot.expenses_for(id);
                history.sort_by(|a, b| b.week_number.cmp(&a.week_number));
                Ok(self.printer.print_expense_screen(project, &history, next_week))
            }
            Screen::FinancialStatus => Ok(self
                .printer
                .print_status_table(&self.usecase.financial_status().await?)),
            Screen::DetailedReport(id) => Ok(self
                .printer
                .print_project_report(&self.usecase.project_report(id).await?)),
        }
    }
}

impl WorksiteFinanceUtil<CsvWorkbookStore> {
    /// Opens the file-backed workbook named by the config: a directory with
    /// one CSV per worksheet.
    pub fn open_csv_workbook<P>(dir: P, config: &AppConfig) -> Result<Self, TrackerError>
    where
        P: AsRef<std::path::Path>,
    {
        Ok(Self::new(CsvWorkbookStore::open(dir)?, config))
    }
}
