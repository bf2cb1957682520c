use std::fmt;

use crate::domain::entities::project::ProjectId;

/// The four interactive screens. The active screen is an explicit value
/// handed to the render dispatch, never module-level state, so a request
/// cycle is a pure function of its inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    RegisterProject,
    RecordExpense(ProjectId),
    FinancialStatus,
    DetailedReport(ProjectId),
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::RegisterProject => "1. Register New Project",
            Screen::RecordExpense(_) => "2. Record Weekly Expense",
            Screen::FinancialStatus => "3. Financial Status of Projects",
            Screen::DetailedReport(_) => "4. Detailed Project Report",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}
