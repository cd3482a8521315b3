//! About page

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::app::App;

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let heading = Style::default().add_modifier(Modifier::BOLD);
    let accent = Style::default().fg(Color::Yellow);

    let lines = vec![
        Line::from(Span::styled("Our Story", accent.add_modifier(Modifier::BOLD))).centered(),
        Line::from("Where tradition meets innovation").centered(),
        Line::default(),
        Line::from(Span::styled(
            format!("About {}", app.registry.store.name),
            heading,
        )),
        Line::from(
            "Founded in 2010 by Chef Antonio Rossi and restaurateur Maria Lopez, Café Fausse \
             blends traditional Italian flavors with modern culinary innovation. Our mission is \
             to provide an unforgettable dining experience that reflects both quality and \
             creativity.",
        ),
        Line::default(),
        Line::from(Span::styled("Chef Antonio Rossi", heading)),
        Line::from(
            "With over 20 years of culinary experience trained in Milan, Chef Rossi brings \
             authentic Italian techniques combined with innovative flavor combinations that \
             surprise and delight our guests.",
        ),
        Line::default(),
        Line::from(Span::styled("Maria Lopez", heading)),
        Line::from(
            "A visionary restaurateur with a passion for creating memorable experiences. Maria \
             ensures every aspect of Café Fausse, from ambiance to service, exceeds \
             expectations.",
        ),
        Line::default(),
        Line::from(Span::styled("Our Commitment", heading)),
        Line::from("Locally Sourced: we partner with local farms and producers to bring you the freshest ingredients."),
        Line::from("Unforgettable Dining: every dish is crafted to create lasting memories and exceptional flavors."),
        Line::from("Traditional Excellence: honoring Italian culinary traditions while embracing modern techniques."),
    ];

    let page = Paragraph::new(lines)
        .block(Block::bordered().title(" About "))
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));

    frame.render_widget(page, area);
}
