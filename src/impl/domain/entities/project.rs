use std::fmt;

use chrono::NaiveDate;

/// Display width project identifiers are padded to. Numeric values above
/// three digits simply grow wider.
pub const PROJECT_ID_PAD_WIDTH: usize = 3;

/// Canonical project identifier: an opaque string, compared byte-for-byte.
/// Numeric identifiers are rendered zero-padded ("001", "002", …) so the
/// store holds a single representation regardless of how the cell was
/// originally typed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProjectId(String);

impl ProjectId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The canonical form of a numeric identifier.
    pub fn from_numeric(n: u64) -> Self {
        Self(format!("{:0width$}", n, width = PROJECT_ID_PAD_WIDTH))
    }

    /// Folds the renditions seen in the wild (bare integer, zero-padded
    /// string, float artifact "7.0") into the canonical form. Non-numeric
    /// identifiers pass through trimmed. Returns `None` for a blank cell, so
    /// callers drop the row instead of inventing an identifier.
    pub fn canonicalize(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        if let Ok(n) = trimmed.parse::<u64>() {
            return Some(Self::from_numeric(n));
        }
        // Spreadsheet clients sometimes hand numeric cells back as floats.
        if let Ok(f) = trimmed.parse::<f64>() {
            if f.is_finite() && f >= 0.0 && f.fract() == 0.0 {
                return Some(Self::from_numeric(f as u64));
            }
        }
        Some(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One tracked construction project.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    /// Non-negative; malformed cells normalize to 0.0 on read.
    pub initial_budget: f64,
    /// `None` when the cell was blank or unparseable (rendered "N/A").
    pub start_date: Option<NaiveDate>,
}
