//! The version report — an ordered sequence of text lines, built once,
//! emitted once, then discarded.

/// Accumulates report lines in emission order.
///
/// `render` joins lines with `\n`, so the rendered report never carries a
/// trailing line break.
#[derive(Debug, Default)]
pub struct Report {
    lines: Vec<String>,
}

impl Report {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one line to the report.
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Append several lines in order.
    pub fn extend(&mut self, lines: impl IntoIterator<Item = String>) {
        self.lines.extend(lines);
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Render the whole report as one string.
    #[must_use]
    pub fn render(&self) -> String {
        self.lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_preserves_line_order() {
        let mut report = Report::new();
        report.push("first");
        report.push("second");
        report.push("third");
        assert_eq!(report.render(), "first\nsecond\nthird");
    }

    #[test]
    fn test_render_has_no_trailing_line_break() {
        let mut report = Report::new();
        report.push("only");
        assert!(!report.render().ends_with('\n'));
    }

    #[test]
    fn test_extend_appends_after_existing_lines() {
        let mut report = Report::new();
        report.push("head");
        report.extend(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(report.lines(), &["head", "a", "b"]);
    }

    #[test]
    fn test_empty_report_renders_empty() {
        assert_eq!(Report::new().render(), "");
    }
}
