//! Gallery page and lightbox

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, List, ListItem, ListState, Paragraph, Wrap};

use crate::app::App;
use crate::ui::overlay_rect;

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let [info_area, grid_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(app.registry.gallery.len() as u16 + 2),
    ])
    .areas(area);

    draw_info(frame, app, info_area);
    draw_grid(frame, app, grid_area);
}

fn draw_info(frame: &mut Frame, app: &App, area: Rect) {
    let heading = Style::default().add_modifier(Modifier::BOLD);
    let quote_style = Style::default().add_modifier(Modifier::ITALIC);

    let mut lines = vec![Line::from(Span::styled("Our Awards & Recognition", heading))];
    for award in &app.registry.awards {
        lines.push(Line::from(format!("  {} ({})", award.title, award.citation)));
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled("What Our Guests Say", heading)));
    for review in &app.registry.reviews {
        lines.push(Line::from(Span::styled(
            format!("  \"{}\"", review.quote),
            quote_style,
        )));
        lines.push(Line::from(format!("    {}", review.source)));
    }

    let info = Paragraph::new(lines)
        .block(Block::bordered().title(" Gallery "))
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));

    frame.render_widget(info, area);
}

fn draw_grid(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .registry
        .gallery
        .iter()
        .map(|item| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("[{}] ", item.category),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(item.title.as_str()),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(Block::bordered().title(" Visual Journey (Enter to view) "))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(Some(app.gallery.selected));
    frame.render_stateful_widget(list, area, &mut state);
}

/// Lightbox over the page, at most one item at a time.
pub fn draw_overlay(frame: &mut Frame, app: &App) {
    let Some(item) = app.gallery.open().and_then(|id| app.registry.gallery_item(id)) else {
        return;
    };

    let area = overlay_rect(frame.area());
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            item.title.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::from(format!("[{}]", item.category)).centered(),
        Line::default(),
        Line::from(item.description.as_str()).centered(),
        Line::default(),
        Line::from(Span::styled(
            "Esc to close",
            Style::default().fg(Color::DarkGray),
        ))
        .centered(),
    ];

    let lightbox = Paragraph::new(lines)
        .block(
            Block::bordered()
                .title(" x ")
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(lightbox, area);
}
