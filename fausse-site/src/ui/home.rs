//! Home page

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::app::App;

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let store = &app.registry.store;
    let accent = Style::default().fg(Color::Yellow);
    let heading = Style::default().add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::default(),
        Line::from(Span::styled("Fine Dining Experience", accent)).centered(),
        Line::from(Span::styled(
            "Where Culinary Art Meets Elegance",
            heading.add_modifier(Modifier::ITALIC),
        ))
        .centered(),
        Line::default(),
        Line::from(
            "Experience the perfect blend of traditional Italian flavors and modern culinary \
             innovation in an intimate, sophisticated setting.",
        )
        .centered(),
        Line::default(),
        Line::from(Span::styled("[ Enter: Reserve Your Table ]", accent)).centered(),
        Line::default(),
        Line::from(Span::styled("Visit Us", heading)),
        Line::from(store.address.as_str()),
        Line::from(store.city.as_str()),
        Line::from(store.phone.as_str()),
        Line::default(),
        Line::from(Span::styled("Hours", heading)),
    ];

    for hours in &store.hours {
        lines.push(Line::from(format!("{}: {}", hours.days, hours.open)));
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled("Awards", heading)));
    for award in &app.registry.awards {
        lines.push(Line::from(format!("{} ({})", award.title, award.citation)));
    }

    let page = Paragraph::new(lines)
        .block(Block::bordered().title(" Home "))
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));

    frame.render_widget(page, area);
}
