/// Currency cell. Read paths favor availability over strict validation:
/// grouping commas are stripped, a parenthesized value is negative, and
/// anything that still fails to parse coerces to zero instead of failing
/// the row.
#[derive(Debug)]
pub(crate) struct MoneyCellModel(pub(crate) f64);

impl MoneyCellModel {
    pub(crate) fn parse(raw: &str) -> Self {
        let cleaned = raw.trim().replace(',', "");
        let is_negative = cleaned.starts_with('(') && cleaned.ends_with(')');
        let numeric_part = cleaned.trim_matches(|c| c == '(' || c == ')');
        let amount = numeric_part
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .unwrap_or(0.0);
        MoneyCellModel(if is_negative { -amount } else { amount })
    }
}

impl From<MoneyCellModel> for f64 {
    fn from(model: MoneyCellModel) -> f64 {
        model.0
    }
}
