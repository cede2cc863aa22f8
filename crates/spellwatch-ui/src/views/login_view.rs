use ratatui::Frame;
use ratatui::style::{Color, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::state::AppState;

use super::centered;

pub fn draw(frame: &mut Frame, app: &AppState) {
    let area = centered(frame.area(), 56, 9);
    let form = &app.login;

    let mut lines = vec![
        Line::from("Username"),
        Line::from(vec![
            Span::raw("> "),
            Span::raw(form.username.as_str()).bold(),
            Span::raw("_").dark_gray(),
        ]),
        Line::default(),
    ];

    if let Some(error) = &form.error {
        lines.push(Line::from(Span::styled(
            error.as_str(),
            Style::new().fg(Color::Red),
        )));
    } else if form.submitting {
        lines.push(Line::from("Signing in...".dark_gray()));
    } else {
        lines.push(Line::default());
    }

    let block = Block::bordered()
        .title(" spellwatch · Sign in ")
        .title_bottom(Line::from(" Enter sign in · Esc quit ").dark_gray());

    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

#[cfg(test)]
mod tests {
    use spellwatch_core::{DashboardView, Route};

    use crate::state::AppState;
    use crate::views::test_support::{contains, render};

    #[test]
    fn test_login_shows_typed_username() {
        let mut app = AppState::new(Route::Login);
        app.login.username = "hermione_granger".to_string();

        let lines = render(&app, &DashboardView::new(), 80, 24);

        assert!(contains(&lines, "Sign in"));
        assert!(contains(&lines, "> hermione_granger_"));
    }

    #[test]
    fn test_login_shows_inline_error() {
        let mut app = AppState::new(Route::Login);
        app.login.error = Some("Please enter a username.".to_string());

        let lines = render(&app, &DashboardView::new(), 80, 24);

        assert!(contains(&lines, "Please enter a username."));
    }

    #[test]
    fn test_login_shows_progress_while_submitting() {
        let mut app = AppState::new(Route::Login);
        app.login.username = "alice".to_string();
        app.login.begin_submit();

        let lines = render(&app, &DashboardView::new(), 80, 24);

        assert!(contains(&lines, "Signing in..."));
    }
}
