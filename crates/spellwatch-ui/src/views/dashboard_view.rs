use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};

use spellwatch_core::{DashboardView, PollState};

use crate::state::{AppState, CastPrompt, StatusMessage};

use super::{audit_table, centered, chart_panel, profile_panel};

const KEY_HINTS: &str = "[c] cast  [r] refresh  [l] logout  [q] quit";

pub fn draw(frame: &mut Frame, app: &AppState, view: &DashboardView) {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    draw_header(frame, header, app, view);

    let [profile, main] =
        Layout::horizontal([Constraint::Percentage(30), Constraint::Percentage(70)]).areas(body);
    let [table, chart] =
        Layout::vertical([Constraint::Percentage(45), Constraint::Percentage(55)]).areas(main);

    profile_panel::draw(frame, profile, view.profile());
    audit_table::draw(frame, table, view);
    chart_panel::draw(frame, chart, view);

    draw_footer(frame, footer, app);

    if let CastPrompt::Open { spell } = &app.cast_prompt {
        draw_cast_prompt(frame, spell);
    }
}

fn draw_header(frame: &mut Frame, area: Rect, app: &AppState, view: &DashboardView) {
    let updated = match view.last_updated() {
        Some(at) => at.format("%H:%M:%S").to_string(),
        None => "never".to_string(),
    };

    let line = Line::from(vec![
        Span::raw(" spellwatch ").bold(),
        Span::raw("· "),
        Span::raw(view.profile().name.as_str()),
        Span::raw(" (").dark_gray(),
        Span::raw(view.profile().role.as_str()).dark_gray(),
        Span::raw(") ").dark_gray(),
        Span::raw("· updated ").dark_gray(),
        Span::raw(updated),
        Span::raw(" · ").dark_gray(),
        poll_indicator(app.poll_state()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn poll_indicator(state: PollState) -> Span<'static> {
    match state {
        PollState::Polling => Span::styled("● live", Style::new().fg(Color::Green)),
        PollState::Idle => Span::raw("○ idle").dark_gray(),
    }
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &AppState) {
    let line = match app.status() {
        Some(StatusMessage::Error(text)) => {
            Line::from(Span::styled(format!(" {}", text), Style::new().fg(Color::Red)))
        }
        Some(StatusMessage::Info(text)) => Line::from(vec![
            Span::styled(format!(" {}", text), Style::new().fg(Color::Green)),
            Span::raw("   "),
            Span::raw(KEY_HINTS).dark_gray(),
        ]),
        None => Line::from(Span::raw(format!(" {}", KEY_HINTS)).dark_gray()),
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_cast_prompt(frame: &mut Frame, spell: &str) {
    let area = centered(frame.area(), 44, 3);
    let block = Block::bordered()
        .title(" Cast spell ")
        .title_bottom(Line::from(" Enter cast · Esc cancel ").dark_gray());

    let line = Line::from(vec![
        Span::raw("> "),
        Span::raw(spell).bold(),
        Span::raw("_").dark_gray(),
    ]);

    frame.render_widget(Clear, area);
    frame.render_widget(Paragraph::new(line).block(block), area);
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use spellwatch_core::{DashboardView, PollState, Route};

    use crate::state::{AppState, UiMessage};
    use crate::views::test_support::{contains, render};

    #[test]
    fn test_dashboard_layout_has_all_panels() {
        let app = AppState::new(Route::Dashboard);
        let lines = render(&app, &DashboardView::new(), 120, 30);

        assert!(contains(&lines, "Profile"));
        assert!(contains(&lines, "Spell audit"));
        assert!(contains(&lines, "Performance"));
        assert!(contains(&lines, "[c] cast"));
        assert!(contains(&lines, "updated never"));
    }

    #[test]
    fn test_header_shows_poll_state() {
        let mut app = AppState::new(Route::Dashboard);
        let lines = render(&app, &DashboardView::new(), 120, 30);
        assert!(contains(&lines, "○ idle"));

        app.set_poll_state(PollState::Polling);
        let lines = render(&app, &DashboardView::new(), 120, 30);
        assert!(contains(&lines, "● live"));
    }

    #[test]
    fn test_cast_prompt_overlay() {
        let mut app = AppState::new(Route::Dashboard);
        app.on_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE));
        for c in "Lumos".chars() {
            app.on_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }

        let lines = render(&app, &DashboardView::new(), 120, 30);

        assert!(contains(&lines, "Cast spell"));
        assert!(contains(&lines, "> Lumos_"));
    }

    #[test]
    fn test_footer_shows_error_status() {
        let mut app = AppState::new(Route::Dashboard);
        app.apply(UiMessage::CastFinished(Err("Forbidden spell".to_string())));

        let lines = render(&app, &DashboardView::new(), 120, 30);

        assert!(contains(&lines, "Cast failed: Forbidden spell"));
    }
}
