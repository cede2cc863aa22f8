use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, Paragraph};

use ratatui::layout::{Constraint, Layout};
use spellwatch_core::render::{PermissionItem, ProfilePanel};

pub fn draw(frame: &mut Frame, area: Rect, profile: &ProfilePanel) {
    let block = Block::bordered().title(" Profile ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [identity, permissions] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(inner);

    let identity_lines = vec![
        Line::from(vec![Span::raw("User: ").dark_gray(), Span::raw(profile.name.as_str()).bold()]),
        Line::from(vec![Span::raw("Role: ").dark_gray(), Span::raw(profile.role.as_str())]),
        Line::from("Permissions:".dark_gray()),
    ];
    frame.render_widget(Paragraph::new(identity_lines), identity);

    let items: Vec<ListItem> = profile
        .permissions
        .iter()
        .map(|item| match item {
            PermissionItem::Error(text) => {
                ListItem::new(Span::styled(text.as_str(), Style::new().fg(Color::Red)))
            }
            PermissionItem::Placeholder(text) => ListItem::new(Span::raw(text.as_str()).italic()),
            PermissionItem::Permission { .. } => ListItem::new(item.text()),
        })
        .collect();
    frame.render_widget(List::new(items), permissions);
}
