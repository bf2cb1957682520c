use crate::{
    domain::entities::{
        expense::ExpenseEntry,
        project::{Project, ProjectId},
        status::{FinancialStatus, ProjectReport},
    },
    presentation::{date_fmt::format_date, money_fmt::format_money},
};

const WRAP_WIDTH: usize = 74;

#[derive(Clone, Copy)]
enum Align {
    Left,
    Right,
}

/// Renders the read views and screen summaries as plain text. The
/// embedding UI lays widgets around these; the numbers and ordering come
/// from here.
pub(crate) struct ReportPrinter;

impl ReportPrinter {
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn print_status_table(&self, statuses: &[FinancialStatus]) -> String {
        if statuses.is_empty() {
            return "No projects registered.\n".to_string();
        }
        let rows: Vec<Vec<String>> = statuses
            .iter()
            .map(|s| {
                vec![
                    s.project_id.to_string(),
                    s.name.clone(),
                    format_money(s.initial_budget),
                    format_money(s.total_spent),
                    format_money(s.remaining),
                    format_date(s.start_date),
                ]
            })
            .collect();
        self.table(
            &[
                "ID",
                "Project",
                "Initial Budget",
                "Total Spent",
                "Remaining",
                "Start Date",
            ],
            &rows,
            &[
                Align::Left,
                Align::Left,
                Align::Right,
                Align::Right,
                Align::Right,
                Align::Left,
            ],
        )
    }

    pub(crate) fn print_project_report(&self, report: &ProjectReport) -> String {
        let mut out = String::new();
        for line in textwrap::wrap(
            &format!("Monitoring report: {}", report.status.name),
            WRAP_WIDTH,
        ) {
            out.push_str(&line);
            out.push('\n');
        }
        out.push('\n');
        out.push_str(&format!("Project id:      {}\n", report.status.project_id));
        out.push_str(&format!(
            "Start date:      {}\n",
            format_date(report.status.start_date)
        ));
        out.push_str(&format!(
            "Initial budget:  {}\n",
            format_money(report.status.initial_budget)
        ));
        out.push_str(&format!(
            "Total spent:     {}\n",
            format_money(report.status.total_spent)
        ));
        out.push_str(&format!(
            "Remaining:       {}\n",
            format_money(report.status.remaining)
        ));
        out.push('\n');
        out.push_str("Weekly expense history\n");
        if report.history.is_empty() {
            out.push_str("No weekly expenses recorded for this project.\n");
        } else {
            out.push_str(&self.expense_table(report.history.iter()));
        }
        out
    }

    pub(crate) fn print_registration_screen(
        &self,
        projects: &[Project],
        next_id: &ProjectId,
    ) -> String {
        let mut out = String::new();
        out.push_str(&format!("The next project id will be: {}\n", next_id));
        if projects.is_empty() {
            out.push_str("No projects registered yet.\n");
        } else {
            out.push_str("Projects available for editing:\n");
            for project in projects {
                out.push_str(&format!("  {} ({})\n", project.name, project.id));
            }
        }
        out
    }

    pub(crate) fn print_expense_screen(
        &self,
        project: &Project,
        history_desc: &[&ExpenseEntry],
        next_week: u32,
    ) -> String {
        let mut out = String::new();
        out.push_str(&format!("Project: {} ({})\n", project.name, project.id));
        out.push_str(&format!("Next reference week: {}\n", next_week));
        if history_desc.is_empty() {
            out.push_str("No expenses recorded for this project.\n");
        } else {
            out.push_str(&format!(
                "Recorded weeks, most recent first ({}):\n",
                history_desc.len()
            ));
            out.push_str(&self.expense_table(history_desc.iter().copied()));
        }
        out
    }

    fn expense_table<'a, I>(&self, entries: I) -> String
    where
        I: Iterator<Item = &'a ExpenseEntry>,
    {
        let rows: Vec<Vec<String>> = entries
            .map(|e| {
                vec![
                    e.week_number.to_string(),
                    format_date(e.reference_date),
                    format_money(e.amount),
                ]
            })
            .collect();
        self.table(
            &["Week", "Reference Date", "Amount"],
            &rows,
            &[Align::Right, Align::Left, Align::Right],
        )
    }

    fn table(&self, headers: &[&str], rows: &[Vec<String>], aligns: &[Align]) -> String {
        let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
        for row in rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(cell.chars().count());
                }
            }
        }
        let mut out = String::new();
        self.push_row(&mut out, headers.iter().map(|h| h.to_string()), &widths, aligns);
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        self.push_row(&mut out, rule.into_iter(), &widths, aligns);
        for row in rows {
            self.push_row(&mut out, row.iter().cloned(), &widths, aligns);
        }
        out
    }

    fn push_row<I>(&self, out: &mut String, cells: I, widths: &[usize], aligns: &[Align])
    where
        I: Iterator<Item = String>,
    {
        let mut rendered = Vec::new();
        for (i, cell) in cells.enumerate() {
            let width = widths.get(i).copied().unwrap_or(0);
            let pad = width.saturating_sub(cell.chars().count());
            let padding = " ".repeat(pad);
            rendered.push(match aligns.get(i).copied().unwrap_or(Align::Left) {
                Align::Left => format!("{}{}", cell, padding),
                Align::Right => format!("{}{}", padding, cell),
            });
        }
        out.push_str(rendered.join("  ").trim_end());
        out.push('\n');
    }
}
