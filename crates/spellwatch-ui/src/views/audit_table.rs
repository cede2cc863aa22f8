use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Style, Stylize};
use ratatui::text::Line;
use ratatui::widgets::{Block, Cell, Row, Table};

use spellwatch_core::DashboardView;
use spellwatch_core::render::AuditRow;

const WIDTHS: [Constraint; 4] = [
    Constraint::Fill(1),
    Constraint::Length(10),
    Constraint::Length(10),
    Constraint::Length(10),
];

pub fn draw(frame: &mut Frame, area: Rect, view: &DashboardView) {
    let header = Row::new(["Spell", "Attempts", "Successes", "Failures"]).bold();

    let rows: Vec<Row> = view
        .audit_rows()
        .iter()
        .map(|row| match row {
            AuditRow::Spell {
                name,
                attempts,
                successes,
                failures,
            } => Row::new([
                Cell::from(name.as_str()),
                Cell::from(attempts.to_string()),
                Cell::from(successes.to_string()).green(),
                Cell::from(failures.to_string()).red(),
            ]),
            // Cells cannot span; the text takes the wide first column.
            AuditRow::Placeholder(text) => Row::new([Cell::from(text.as_str()).italic()]),
            AuditRow::Error(text) => {
                Row::new([Cell::from(text.as_str()).style(Style::new().fg(Color::Red))])
            }
        })
        .collect();

    let mut block = Block::bordered().title(" Spell audit ");
    if let Some(error) = view.fetch_error() {
        block = block.title_bottom(
            Line::from(format!(" ⚠ {} ", error)).style(Style::new().fg(Color::Red)),
        );
    }

    let table = Table::new(rows, WIDTHS).header(header).block(block);
    frame.render_widget(table, area);
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use spellwatch_core::api::{AuditTablePayload, SpellCounts};
    use spellwatch_core::{DashboardView, Route};

    use crate::state::AppState;
    use crate::views::test_support::{contains, render};

    #[test]
    fn test_rows_render_counts() {
        let mut view = DashboardView::new();
        view.render_audit_table(&AuditTablePayload::Events(BTreeMap::from([(
            "Expelliarmus".to_string(),
            SpellCounts {
                attempts: 3,
                successes: 2,
                failures: 1,
            },
        )])));

        let lines = render(&AppState::new(Route::Dashboard), &view, 120, 30);

        let row = lines
            .iter()
            .find(|line| line.contains("Expelliarmus"))
            .expect("spell row");
        let numbers: Vec<&str> = row
            .split_whitespace()
            .filter(|cell| cell.chars().all(|c| c.is_ascii_digit()))
            .collect();
        assert_eq!(numbers, vec!["3", "2", "1"]);
    }

    #[test]
    fn test_placeholder_row() {
        let mut view = DashboardView::new();
        view.render_audit_table(&AuditTablePayload::default());

        let lines = render(&AppState::new(Route::Dashboard), &view, 120, 30);

        assert!(contains(&lines, "No events recorded yet."));
    }

    #[test]
    fn test_fetch_error_shown_in_table_border() {
        let mut view = DashboardView::new();
        view.render_fetch_error("Request failed: timed out");

        let lines = render(&AppState::new(Route::Dashboard), &view, 120, 30);

        assert!(contains(&lines, "Request failed: timed out"));
    }
}
