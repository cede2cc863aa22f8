use spellwatch_core::render::AuditRow;

const HEADERS: [&str; 4] = ["Spell", "Attempts", "Successes", "Failures"];

pub struct AuditTableFormatter {
    spell_width: usize,
    count_width: usize,
}

impl AuditTableFormatter {
    pub fn new(rows: &[AuditRow]) -> Self {
        let spell_width = rows
            .iter()
            .filter_map(|row| match row {
                AuditRow::Spell { name, .. } => Some(name.chars().count()),
                _ => None,
            })
            .max()
            .unwrap_or(16)
            .clamp(16, 40); // Wide enough for placeholder text, narrow enough for a terminal

        Self {
            spell_width,
            count_width: 9,
        }
    }

    pub fn print_table(&self, rows: &[AuditRow]) {
        for line in self.render(rows) {
            println!("{}", line);
        }
    }

    pub fn render(&self, rows: &[AuditRow]) -> Vec<String> {
        let mut lines = vec![self.top_border(), self.header_row(), self.separator()];
        lines.extend(rows.iter().map(|row| self.row(row)));
        lines.push(self.bottom_border());
        lines
    }

    fn row(&self, row: &AuditRow) -> String {
        match row {
            AuditRow::Spell {
                name,
                attempts,
                successes,
                failures,
            } => format!(
                "│ {} │ {:>width_count$} │ {:>width_count$} │ {:>width_count$} │",
                truncate(name, self.spell_width),
                attempts,
                successes,
                failures,
                width_count = self.count_width,
            ),
            AuditRow::Placeholder(text) | AuditRow::Error(text) => {
                format!("│ {} │", truncate(text, self.full_width()))
            }
        }
    }

    /// Inner width of a row spanning every column.
    fn full_width(&self) -> usize {
        self.spell_width + 3 * (self.count_width + 3)
    }

    fn header_row(&self) -> String {
        format!(
            "│ {:<width_spell$} │ {:>width_count$} │ {:>width_count$} │ {:>width_count$} │",
            HEADERS[0],
            HEADERS[1],
            HEADERS[2],
            HEADERS[3],
            width_spell = self.spell_width,
            width_count = self.count_width,
        )
    }

    fn border(&self, left: &str, middle: &str, right: &str) -> String {
        let count = "─".repeat(self.count_width + 2);
        format!(
            "{left}{}{middle}{count}{middle}{count}{middle}{count}{right}",
            "─".repeat(self.spell_width + 2),
        )
    }

    fn top_border(&self) -> String {
        self.border("┌", "┬", "┐")
    }

    fn separator(&self) -> String {
        self.border("├", "┼", "┤")
    }

    fn bottom_border(&self) -> String {
        self.border("└", "┴", "┘")
    }
}

/// Truncate a string to a maximum display width, adding "..." if truncated.
///
/// Uses character count (not byte count) to safely handle UTF-8 strings
/// including accented spell names.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        format!("{:<width$}", s, width = max_len)
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{:<width$}", format!("{}...", truncated), width = max_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spell(name: &str, attempts: u64, successes: u64, failures: u64) -> AuditRow {
        AuditRow::Spell {
            name: name.to_string(),
            attempts,
            successes,
            failures,
        }
    }

    #[test]
    fn test_truncate_pads_short_strings() {
        assert_eq!(truncate("Lumos", 8), "Lumos   ");
    }

    #[test]
    fn test_truncate_long_strings() {
        assert_eq!(truncate("Expecto Patronum", 10), "Expecto...");
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate("Éxito rápido", 8).chars().count(), 8);
    }

    #[test]
    fn test_all_lines_have_same_width() {
        let rows = vec![spell("Spell A", 3, 2, 1), spell("Expelliarmus", 10, 7, 3)];
        let formatter = AuditTableFormatter::new(&rows);
        let lines = formatter.render(&rows);

        assert_eq!(lines.len(), 6);
        let width = lines[0].chars().count();
        for line in &lines {
            assert_eq!(line.chars().count(), width, "line: {}", line);
        }
    }

    #[test]
    fn test_full_width_row_spans_table() {
        let rows = vec![AuditRow::Placeholder("No events recorded yet.".to_string())];
        let formatter = AuditTableFormatter::new(&rows);
        let lines = formatter.render(&rows);

        assert_eq!(lines[3].chars().count(), lines[0].chars().count());
        assert!(lines[3].contains("No events recorded yet."));
        assert_eq!(lines[3].matches('│').count(), 2);
    }

    #[test]
    fn test_spell_row_cells() {
        let rows = vec![spell("Spell A", 3, 2, 1)];
        let formatter = AuditTableFormatter::new(&rows);
        let row = &formatter.render(&rows)[3];

        let cells: Vec<&str> = row
            .trim_matches('│')
            .split('│')
            .map(str::trim)
            .collect();
        assert_eq!(cells, vec!["Spell A", "3", "2", "1"]);
    }
}
