//! Menu page

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::app::App;

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let category_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let price_style = Style::default().add_modifier(Modifier::BOLD);
    let description_style = Style::default().fg(Color::DarkGray);

    let mut lines = vec![
        Line::from("Crafted with passion, served with excellence").centered(),
        Line::default(),
    ];

    // Categories render in registry order.
    for category in &app.registry.menu {
        lines.push(Line::from(Span::styled(
            category.name.to_uppercase(),
            category_style,
        )));
        for item in &category.items {
            lines.push(Line::from(vec![
                Span::raw(format!("  {}  ", item.name)),
                Span::styled(item.display_price(), price_style),
            ]));
            lines.push(Line::from(Span::styled(
                format!("    {}", item.description),
                description_style,
            )));
        }
        lines.push(Line::default());
    }

    let page = Paragraph::new(lines)
        .block(Block::bordered().title(" Our Menu "))
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));

    frame.render_widget(page, area);
}
