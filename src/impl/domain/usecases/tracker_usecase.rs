use std::{
    sync::Mutex,
    time::{Duration, Instant},
};

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use tracing::{info, warn};

use crate::{
    data::config::{AppConfig, CookieConfig},
    domain::{
        entities::{
            expense::ExpenseEntry,
            project::{Project, ProjectId},
            snapshot::WorkbookSnapshot,
            status::{FinancialStatus, ProjectReport},
            user::{Session, UserRecord},
        },
        logic::{
            auth::verify_login,
            id_allocator::{next_project_id, next_week_number},
            reconcile::reconcile,
            row_locator::{locate_expense_row, locate_project_row},
        },
        repositories::workbook_repository::WorkbookRepository,
    },
    errors::TrackerError,
};

/// The application core behind the four screens: the mutation operations
/// (each validates, locates the target row, then performs a single write),
/// the two read views, and credential verification.
#[async_trait]
pub trait TrackerUsecase: Send + Sync {
    /// Current typed snapshot, served from the bounded cache.
    async fn snapshot(&self) -> Result<WorkbookSnapshot, TrackerError>;

    async fn financial_status(&self) -> Result<Vec<FinancialStatus>, TrackerError>;

    async fn project_report(&self, id: &ProjectId) -> Result<ProjectReport, TrackerError>;

    /// Registers a new project and returns its freshly allocated id.
    async fn register_project(
        &self,
        name: &str,
        initial_budget: f64,
        start_date: NaiveDate,
    ) -> Result<ProjectId, TrackerError>;

    async fn update_project(
        &self,
        id: &ProjectId,
        new_name: &str,
        new_budget: f64,
        new_start_date: NaiveDate,
    ) -> Result<(), TrackerError>;

    /// Records the next week's expense for a project and returns the
    /// allocated week number.
    async fn register_expense(
        &self,
        project_id: &ProjectId,
        amount: f64,
        reference_date: NaiveDate,
    ) -> Result<u32, TrackerError>;

    async fn update_expense(
        &self,
        project_id: &ProjectId,
        week_number: u32,
        new_amount: f64,
        new_reference_date: NaiveDate,
    ) -> Result<(), TrackerError>;

    async fn login(&self, username: &str, password: &str) -> Result<Session, TrackerError>;
}

struct CachedAt<T> {
    fetched_at: Instant,
    value: T,
}

pub(crate) struct TrackerUsecaseImpl<R: WorkbookRepository> {
    repository: R,
    cookie: CookieConfig,
    data_ttl: Duration,
    users_ttl: Duration,
    snapshot_cache: Mutex<Option<CachedAt<WorkbookSnapshot>>>,
    users_cache: Mutex<Option<CachedAt<Vec<UserRecord>>>>,
}

impl<R: WorkbookRepository> TrackerUsecaseImpl<R> {
    pub(crate) fn new(repository: R, config: &AppConfig) -> Self {
        Self {
            repository,
            cookie: config.cookie.clone(),
            data_ttl: Duration::from_secs(config.data_cache_secs),
            users_ttl: Duration::from_secs(config.users_cache_secs),
            snapshot_cache: Mutex::new(None),
            users_cache: Mutex::new(None),
        }
    }

    fn read_cache<T: Clone>(
        cache: &Mutex<Option<CachedAt<T>>>,
        ttl: Duration,
    ) -> Result<Option<T>, TrackerError> {
        let guard = cache.lock().map_err(|_| poisoned())?;
        Ok(guard
            .as_ref()
            .filter(|cached| cached.fetched_at.elapsed() < ttl)
            .map(|cached| cached.value.clone()))
    }

    fn write_cache<T>(cache: &Mutex<Option<CachedAt<T>>>, value: T) -> Result<(), TrackerError> {
        let mut guard = cache.lock().map_err(|_| poisoned())?;
        *guard = Some(CachedAt {
            fetched_at: Instant::now(),
            value,
        });
        Ok(())
    }

    /// Every successful mutation drops the snapshot so the next read
    /// re-fetches from the store.
    fn invalidate_snapshot(&self) -> Result<(), TrackerError> {
        let mut guard = self.snapshot_cache.lock().map_err(|_| poisoned())?;
        *guard = None;
        Ok(())
    }

    async fn cached_snapshot(&self) -> Result<WorkbookSnapshot, TrackerError> {
        if let Some(cached) = Self::read_cache(&self.snapshot_cache, self.data_ttl)? {
            return Ok(cached);
        }
        let snapshot = match self.repository.load_snapshot().await {
            Ok(snapshot) => snapshot,
            // A missing worksheet is a configuration error, but the read
            // views still render over empty tables.
            Err(TrackerError::WorksheetNotFound { name }) => {
                warn!(worksheet = %name, "worksheet missing; rendering empty tables");
                WorkbookSnapshot::default()
            }
            Err(e) => return Err(e),
        };
        Self::write_cache(&self.snapshot_cache, snapshot.clone())?;
        Ok(snapshot)
    }

    async fn cached_users(&self) -> Result<Vec<UserRecord>, TrackerError> {
        if let Some(cached) = Self::read_cache(&self.users_cache, self.users_ttl)? {
            return Ok(cached);
        }
        let users = self.repository.load_users().await?;
        Self::write_cache(&self.users_cache, users.clone())?;
        Ok(users)
    }
}

fn poisoned() -> TrackerError {
    TrackerError::StoreUnavailable {
        details: "cache mutex poisoned".to_string(),
    }
}

#[async_trait]
impl<R: WorkbookRepository> TrackerUsecase for TrackerUsecaseImpl<R> {
    async fn snapshot(&self) -> Result<WorkbookSnapshot, TrackerError> {
        self.cached_snapshot().await
    }

    async fn financial_status(&self) -> Result<Vec<FinancialStatus>, TrackerError> {
        let snapshot = self.cached_snapshot().await?;
        Ok(reconcile(&snapshot.projects, &snapshot.expenses))
    }

    async fn project_report(&self, id: &ProjectId) -> Result<ProjectReport, TrackerError> {
        let snapshot = self.cached_snapshot().await?;
        let status = reconcile(&snapshot.projects, &snapshot.expenses)
            .into_iter()
            .find(|s| &s.project_id == id)
            .ok_or_else(|| TrackerError::UnknownProject {
                id: id.to_string(),
            })?;
        let mut history: Vec<ExpenseEntry> = snapshot
            .expenses_for(id)
            .into_iter()
            .cloned()
            .collect();
        history.sort_by_key(|e| e.week_number);
        Ok(ProjectReport { status, history })
    }

    async fn register_project(
        &self,
        name: &str,
        initial_budget: f64,
        start_date: NaiveDate,
    ) -> Result<ProjectId, TrackerError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TrackerError::EmptyProjectName);
        }
        if initial_budget <= 0.0 {
            return Err(TrackerError::NonPositiveBudget {
                value: initial_budget,
            });
        }
        let snapshot = self.cached_snapshot().await?;
        let id = next_project_id(&snapshot.projects);
        let project = Project {
            id: id.clone(),
            name: name.to_string(),
            initial_budget,
            start_date: Some(start_date),
        };
        self.repository.append_project(&project).await?;
        self.invalidate_snapshot()?;
        info!(project_id = %id, name, "registered project");
        Ok(id)
    }

    async fn update_project(
        &self,
        id: &ProjectId,
        new_name: &str,
        new_budget: f64,
        new_start_date: NaiveDate,
    ) -> Result<(), TrackerError> {
        let new_name = new_name.trim();
        if new_name.is_empty() {
            return Err(TrackerError::EmptyProjectName);
        }
        if new_budget < 0.0 {
            return Err(TrackerError::NegativeBudget { value: new_budget });
        }
        let grid = self.repository.project_grid().await?;
        let sheet_row =
            locate_project_row(&grid, id).ok_or_else(|| TrackerError::ProjectNotFound {
                id: id.to_string(),
            })?;
        let project = Project {
            id: id.clone(),
            name: new_name.to_string(),
            initial_budget: new_budget,
            start_date: Some(new_start_date),
        };
        self.repository.overwrite_project(sheet_row, &project).await?;
        self.invalidate_snapshot()?;
        info!(project_id = %id, sheet_row, "updated project");
        Ok(())
    }

    async fn register_expense(
        &self,
        project_id: &ProjectId,
        amount: f64,
        reference_date: NaiveDate,
    ) -> Result<u32, TrackerError> {
        if amount < 0.0 {
            return Err(TrackerError::NegativeAmount { value: amount });
        }
        let snapshot = self.cached_snapshot().await?;
        if snapshot.project(project_id).is_none() {
            return Err(TrackerError::UnknownProject {
                id: project_id.to_string(),
            });
        }
        let week_number = next_week_number(&snapshot.expenses, project_id);
        let entry = ExpenseEntry {
            project_id: project_id.clone(),
            week_number,
            reference_date: Some(reference_date),
            amount,
        };
        self.repository.append_expense(&entry).await?;
        self.invalidate_snapshot()?;
        info!(project_id = %project_id, week_number, "recorded weekly expense");
        Ok(week_number)
    }

    async fn update_expense(
        &self,
        project_id: &ProjectId,
        week_number: u32,
        new_amount: f64,
        new_reference_date: NaiveDate,
    ) -> Result<(), TrackerError> {
        if new_amount < 0.0 {
            return Err(TrackerError::NegativeAmount { value: new_amount });
        }
        let grid = self.repository.expense_grid().await?;
        let sheet_row = locate_expense_row(&grid, project_id, week_number).ok_or_else(|| {
            TrackerError::ExpenseNotFound {
                id: project_id.to_string(),
                week: week_number,
            }
        })?;
        let entry = ExpenseEntry {
            project_id: project_id.clone(),
            week_number,
            reference_date: Some(new_reference_date),
            amount: new_amount,
        };
        self.repository.overwrite_expense(sheet_row, &entry).await?;
        self.invalidate_snapshot()?;
        info!(project_id = %project_id, week_number, sheet_row, "updated weekly expense");
        Ok(())
    }

    async fn login(&self, username: &str, password: &str) -> Result<Session, TrackerError> {
        let users = self.cached_users().await?;
        verify_login(&users, &self.cookie, username, password, Utc::now())
    }
}
