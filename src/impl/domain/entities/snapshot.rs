use super::{expense::ExpenseEntry, project::Project, project::ProjectId};

/// Transient typed copy of both tables, reloaded from the store on a
/// bounded cache interval. Holds no derived data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkbookSnapshot {
    pub projects: Vec<Project>,
    pub expenses: Vec<ExpenseEntry>,
}

impl WorkbookSnapshot {
    pub fn project(&self, id: &ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| &p.id == id)
    }

    /// All expense entries recorded against the given project, in store
    /// order.
    pub fn expenses_for(&self, id: &ProjectId) -> Vec<&ExpenseEntry> {
        self.expenses
            .iter()
            .filter(|e| &e.project_id == id)
            .collect()
    }
}
