use thiserror::Error;

/// Failure taxonomy of the tracker. Store-level failures are converted to
/// these variants at the operation boundary; cell-level parse failures never
/// appear here (read paths normalize them to safe defaults instead).
#[derive(Debug, Error)]
pub enum TrackerError {
    // Store-related.
    #[error("could not reach the spreadsheet store: {details}")]
    StoreUnavailable { details: String },
    #[error("spreadsheet '{name}' not found")]
    SpreadsheetNotFound { name: String },
    #[error("worksheet '{name}' not found")]
    WorksheetNotFound { name: String },

    // Configuration-related.
    #[error("invalid application config: {details}")]
    InvalidConfig { details: String },
    #[error("invalid service account key: {details}")]
    InvalidServiceAccountKey { details: String },

    // Validation (rejected before any store call is made).
    #[error("project name must not be empty")]
    EmptyProjectName,
    #[error("initial budget must be greater than zero (got {value})")]
    NonPositiveBudget { value: f64 },
    #[error("budget must not be negative (got {value})")]
    NegativeBudget { value: f64 },
    #[error("expense amount must not be negative (got {value})")]
    NegativeAmount { value: f64 },
    #[error("no project with id '{id}'")]
    UnknownProject { id: String },

    // Missing update targets (reported, no write performed).
    #[error("project '{id}' not found for update")]
    ProjectNotFound { id: String },
    #[error("week {week} of project '{id}' not found for update")]
    ExpenseNotFound { id: String, week: u32 },

    // Authentication.
    #[error("invalid username or password")]
    InvalidCredentials,
    #[error("session expired")]
    SessionExpired,
}
