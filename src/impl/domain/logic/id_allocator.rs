use crate::domain::entities::{
    expense::ExpenseEntry,
    project::{Project, ProjectId},
};

/// Next unused project identifier: maximum over the entirely-numeric
/// identifiers plus one, rendered in the canonical zero-padded form.
/// Non-numeric identifiers are ignored rather than failing; an empty set
/// yields "001".
///
/// The value is advisory only: two concurrent registrations can compute
/// the same id. The flow is single-writer by assumption, so no reservation
/// is attempted.
pub(crate) fn next_project_id(projects: &[Project]) -> ProjectId {
    let max_numeric = projects
        .iter()
        .filter_map(|p| p.id.as_str().parse::<u64>().ok())
        .max();
    ProjectId::from_numeric(max_numeric.map_or(1, |m| m + 1))
}

/// Next week-sequence number for the given project: maximum recorded week
/// plus one, or 1 for a project with no expense rows yet.
pub(crate) fn next_week_number(expenses: &[ExpenseEntry], project_id: &ProjectId) -> u32 {
    expenses
        .iter()
        .filter(|e| &e.project_id == project_id)
        .map(|e| e.week_number)
        .max()
        .map_or(1, |m| m + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &str) -> Project {
        Project {
            id: ProjectId::new(id),
            name: String::new(),
            initial_budget: 0.0,
            start_date: None,
        }
    }

    fn expense(id: &str, week: u32) -> ExpenseEntry {
        ExpenseEntry {
            project_id: ProjectId::new(id),
            week_number: week,
            reference_date: None,
            amount: 0.0,
        }
    }

    #[test]
    fn allocates_past_the_numeric_maximum() {
        let projects = vec![project("001"), project("002"), project("005")];
        assert_eq!(next_project_id(&projects).as_str(), "006");
    }

    #[test]
    fn empty_set_starts_at_one() {
        assert_eq!(next_project_id(&[]).as_str(), "001");
    }

    #[test]
    fn non_numeric_identifiers_are_ignored() {
        let projects = vec![project("OBRA-A"), project("003")];
        assert_eq!(next_project_id(&projects).as_str(), "004");

        let only_opaque = vec![project("OBRA-A")];
        assert_eq!(next_project_id(&only_opaque).as_str(), "001");
    }

    #[test]
    fn grows_past_the_padding_width() {
        let projects = vec![project("999")];
        assert_eq!(next_project_id(&projects).as_str(), "1000");
    }

    #[test]
    fn week_numbers_are_per_project() {
        let expenses = vec![expense("001", 1), expense("001", 4), expense("002", 9)];
        assert_eq!(next_week_number(&expenses, &ProjectId::new("001")), 5);
        assert_eq!(next_week_number(&expenses, &ProjectId::new("002")), 10);
        assert_eq!(next_week_number(&expenses, &ProjectId::new("003")), 1);
    }
}
