//! Renderer module
//!
//! Renders sorted coverage rows as a fixed-width text table:
//!
//! ```text
//! -------------------------------------------------------------------------------
//! src/a.py                                                  80.0% (8/10)
//! ===============================================================================
//! Total:                                                    80.0% (8/10)
//! -------------------------------------------------------------------------------
//! ```

use crate::core::model::Coverage;

/// Table geometry and labels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableLayout {
    /// Minimum width of the path column; longer paths widen the row
    pub path_width: usize,
    /// Length of each separator line
    pub rule_width: usize,
    pub rule: char,
    pub totals_rule: char,
    pub totals_label: &'static str,
}

impl Default for TableLayout {
    fn default() -> Self {
        Self {
            path_width: 57,
            rule_width: 79,
            rule: '-',
            totals_rule: '=',
            totals_label: "Total:",
        }
    }
}

/// One file row: display path plus its figures
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub path: String,
    pub coverage: Coverage,
}

/// Renderer for coverage tables
pub struct Renderer {
    layout: TableLayout,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::with_layout(TableLayout::default())
    }
}

impl Renderer {
    /// Create a new renderer with a custom layout
    pub fn with_layout(layout: TableLayout) -> Self {
        Self { layout }
    }

    /// Render rows and totals into output lines (no trailing newlines)
    ///
    /// Always yields `rows.len() + 4` lines.
    pub fn render(&self, rows: &[TableRow], totals: &Coverage) -> Vec<String> {
        let mut lines = Vec::with_capacity(rows.len() + 4);

        lines.push(self.rule(self.layout.rule));
        for row in rows {
            lines.push(self.row(&row.path, &row.coverage));
        }
        lines.push(self.rule(self.layout.totals_rule));
        lines.push(self.row(self.layout.totals_label, totals));
        lines.push(self.rule(self.layout.rule));

        lines
    }

    fn rule(&self, c: char) -> String {
        c.to_string().repeat(self.layout.rule_width)
    }

    fn row(&self, label: &str, coverage: &Coverage) -> String {
        format!(
            "{:<width$} {}",
            label,
            coverage,
            width = self.layout.path_width
        )
    }
}
