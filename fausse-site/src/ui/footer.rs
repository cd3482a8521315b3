//! Footer: contact columns and the newsletter signup

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::app::{App, InputMode};
use crate::ui::message_style;

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let store = &app.registry.store;
    let heading = Style::default().add_modifier(Modifier::BOLD);

    let block = Block::bordered().title_bottom(
        Line::from(format!(" © 2025 {}. All rights reserved. ", store.name)).centered(),
    );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [contact_area, hours_area, newsletter_area] = Layout::horizontal([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .areas(inner);

    let contact = Paragraph::new(vec![
        Line::from(Span::styled("Contact Info", heading)),
        Line::from(store.address.as_str()),
        Line::from(store.city.as_str()),
        Line::from(store.phone.as_str()),
    ]);
    frame.render_widget(contact, contact_area);

    let mut hours_lines = vec![Line::from(Span::styled("Hours", heading))];
    for hours in &store.hours {
        hours_lines.push(Line::from(format!("{}: {}", hours.days, hours.open)));
    }
    frame.render_widget(Paragraph::new(hours_lines), hours_area);

    draw_newsletter(frame, app, newsletter_area);
}

fn draw_newsletter(frame: &mut Frame, app: &App, area: Rect) {
    let editing = app.mode == InputMode::EditingNewsletter;
    let pane = &app.newsletter;

    let [title_area, input_area, message_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Min(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Newsletter", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(" (n to subscribe)", Style::default().fg(Color::DarkGray)),
        ])),
        title_area,
    );

    let border = if editing {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let width = input_area.width.saturating_sub(2).max(1);
    let scroll = pane.input.visual_scroll(width as usize);
    let input = Paragraph::new(pane.input.value())
        .scroll((0, scroll as u16))
        .block(
            Block::bordered()
                .title("Enter your email")
                .border_style(border),
        );
    frame.render_widget(input, input_area);

    if editing {
        frame.set_cursor_position((
            input_area.x + (pane.input.visual_cursor().saturating_sub(scroll)) as u16 + 1,
            input_area.y + 1,
        ));
    }

    if let Some(message) = pane.form.message() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                message.text.as_str(),
                message_style(message),
            ))),
            message_area,
        );
    }
}
