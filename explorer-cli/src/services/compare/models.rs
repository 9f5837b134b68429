/// Literal marker for fields a record does not have
pub const NOT_APPLICABLE: &str = "N/A";

/// Which side of a numeric row is strictly greater
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Highlight {
    #[default]
    None,
    Left,
    Right,
}

/// One field of the comparison, already formatted for display
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    pub label: &'static str,
    pub left: String,
    pub right: String,
    pub highlight: Highlight,
}

impl ComparisonRow {
    pub fn text(label: &'static str, left: Option<String>, right: Option<String>) -> Self {
        Self {
            label,
            left: left.unwrap_or_else(|| NOT_APPLICABLE.to_string()),
            right: right.unwrap_or_else(|| NOT_APPLICABLE.to_string()),
            highlight: Highlight::None,
        }
    }

    pub fn with_highlight(mut self, highlight: Highlight) -> Self {
        self.highlight = highlight;
        self
    }
}

/// Field-by-field pairing of two records
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub left_code: String,
    pub left_name: String,
    pub right_code: String,
    pub right_name: String,
    pub rows: Vec<ComparisonRow>,
}

#[cfg(test)]
impl Comparison {
    /// Look a row up by its label
    pub fn row(&self, label: &str) -> Option<&ComparisonRow> {
        self.rows.iter().find(|r| r.label == label)
    }
}
