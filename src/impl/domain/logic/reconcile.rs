use std::collections::HashMap;

use crate::domain::entities::{
    expense::ExpenseEntry,
    project::{Project, ProjectId},
    status::FinancialStatus,
};

/// Rounds to currency precision (2 decimal places).
pub(crate) fn round_currency(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// The budget reconciliation: group expense amounts by project, sum, and
/// compute the remaining budget. Every input project appears exactly once
/// in the output, in input order; projects with no expense rows get a zero
/// total. `remaining` is not floored; an over-budget project shows a
/// negative value.
pub(crate) fn reconcile(
    projects: &[Project],
    expenses: &[ExpenseEntry],
) -> Vec<FinancialStatus> {
    let mut totals: HashMap<&ProjectId, f64> = HashMap::new();
    for entry in expenses {
        *totals.entry(&entry.project_id).or_insert(0.0) += entry.amount;
    }

    projects
        .iter()
        .map(|project| {
            let total_spent =
                round_currency(totals.get(&project.id).copied().unwrap_or(0.0));
            FinancialStatus {
                project_id: project.id.clone(),
                name: project.name.clone(),
                initial_budget: project.initial_budget,
                total_spent,
                remaining: project.initial_budget - total_spent,
                start_date: project.start_date,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &str, budget: f64) -> Project {
        Project {
            id: ProjectId::new(id),
            name: format!("Project {}", id),
            initial_budget: budget,
            start_date: None,
        }
    }

    fn expense(id: &str, week: u32, amount: f64) -> ExpenseEntry {
        ExpenseEntry {
            project_id: ProjectId::new(id),
            week_number: week,
            reference_date: None,
            amount,
        }
    }

    #[test]
    fn sums_expenses_and_computes_remaining() {
        let projects = vec![project("001", 100.0)];
        let expenses = vec![
            expense("001", 1, 10.0),
            expense("001", 2, 15.5),
            expense("001", 3, 0.0),
        ];
        let statuses = reconcile(&projects, &expenses);
        assert_eq!(statuses.len(), 1);
        assert_eq!(statuses[0].total_spent, 25.5);
        assert_eq!(statuses[0].remaining, 74.5);
    }

    #[test]
    fn project_without_expenses_keeps_full_budget() {
        let projects = vec![project("001", 100.0), project("002", 250.0)];
        let expenses = vec![expense("001", 1, 40.0)];
        let statuses = reconcile(&projects, &expenses);
        assert_eq!(statuses[1].total_spent, 0.0);
        assert_eq!(statuses[1].remaining, 250.0);
    }

    #[test]
    fn over_budget_project_goes_negative() {
        let projects = vec![project("001", 50.0)];
        let expenses = vec![expense("001", 1, 80.0)];
        let statuses = reconcile(&projects, &expenses);
        assert_eq!(statuses[0].remaining, -30.0);
    }

    #[test]
    fn totals_are_rounded_to_currency_precision() {
        let projects = vec![project("001", 10.0)];
        let expenses = vec![
            expense("001", 1, 0.105),
            expense("001", 2, 0.105),
            expense("001", 3, 0.105),
        ];
        let statuses = reconcile(&projects, &expenses);
        assert_eq!(statuses[0].total_spent, 0.32);
    }

    #[test]
    fn output_preserves_input_project_order() {
        let projects = vec![project("005", 1.0), project("001", 1.0), project("003", 1.0)];
        let statuses = reconcile(&projects, &[]);
        let ids: Vec<&str> = statuses.iter().map(|s| s.project_id.as_str()).collect();
        assert_eq!(ids, vec!["005", "001", "003"]);
    }

    #[test]
    fn reconciliation_is_idempotent() {
        let projects = vec![project("001", 100.0), project("002", 30.0)];
        let expenses = vec![expense("001", 1, 12.34), expense("002", 1, 5.0)];
        let first = reconcile(&projects, &expenses);
        let second = reconcile(&projects, &expenses);
        assert_eq!(first, second);
    }
}
