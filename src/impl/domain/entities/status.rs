use chrono::NaiveDate;

use super::{expense::ExpenseEntry, project::ProjectId};

/// Per-project financial position, derived fresh on every read. Never
/// persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct FinancialStatus {
    pub project_id: ProjectId,
    pub name: String,
    pub initial_budget: f64,
    /// Sum of all recorded weekly amounts, rounded to currency precision.
    pub total_spent: f64,
    /// `initial_budget - total_spent`. Negative when over budget.
    pub remaining: f64,
    pub start_date: Option<NaiveDate>,
}

/// Detailed view of a single project: its financial position plus the full
/// expense history, ordered by week ascending.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectReport {
    pub status: FinancialStatus,
    pub history: Vec<ExpenseEntry>,
}
