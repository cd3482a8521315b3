//! Reservations page

use chrono::{NaiveDate, NaiveTime};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};
use tui_input::Input;

use crate::app::{App, InputMode, ReservationFocus};
use crate::ui::message_style;
use shared::GuestCount;

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let [form_area, sidebar_area] =
        Layout::horizontal([Constraint::Percentage(65), Constraint::Percentage(35)]).areas(area);

    draw_form(frame, app, form_area);
    draw_sidebar(frame, app, sidebar_area);
}

fn draw_form(frame: &mut Frame, app: &App, area: Rect) {
    let editing = app.mode == InputMode::EditingReservation;
    let pane = &app.reservations;

    let block = Block::bordered().title(" Make a Reservation (e to edit) ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [name_area, email_area, phone_area, details_area, requests_area, submit_area, message_area] =
        Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .areas(inner);

    let focused = |field: ReservationFocus| editing && pane.focus == field;

    draw_text_field(
        frame,
        name_area,
        "Full Name *",
        &pane.name,
        focused(ReservationFocus::Name),
    );
    draw_text_field(
        frame,
        email_area,
        "Email Address *",
        &pane.email,
        focused(ReservationFocus::Email),
    );
    draw_text_field(
        frame,
        phone_area,
        "Phone Number",
        &pane.phone,
        focused(ReservationFocus::Phone),
    );

    let [guests_area, date_area, time_area] = Layout::horizontal([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .areas(details_area);

    draw_select_field(
        frame,
        guests_area,
        "Guests *",
        Some(guest_label(pane.guest_options[pane.guest_idx])),
        focused(ReservationFocus::Guests),
    );
    draw_select_field(
        frame,
        date_area,
        "Date *",
        pane.date_idx.map(|idx| date_label(pane.dates[idx])),
        focused(ReservationFocus::Date),
    );
    draw_select_field(
        frame,
        time_area,
        "Time *",
        pane.time_idx.map(|idx| time_label(pane.times[idx])),
        focused(ReservationFocus::Time),
    );

    draw_text_field(
        frame,
        requests_area,
        "Special Requests",
        &pane.special_requests,
        focused(ReservationFocus::SpecialRequests),
    );

    let submit_label = if pane.form.is_submitting() {
        "[ Processing... ]"
    } else {
        "[ Reserve Your Table ]"
    };
    let submit_style = if focused(ReservationFocus::Submit) {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(submit_label, submit_style))).centered(),
        submit_area,
    );

    if let Some(message) = pane.form.message() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                message.text.as_str(),
                message_style(message),
            )))
            .wrap(Wrap { trim: false })
            .centered(),
            message_area,
        );
    }
}

fn draw_text_field(frame: &mut Frame, area: Rect, title: &str, input: &Input, focused: bool) {
    let width = area.width.saturating_sub(2).max(1);
    let scroll = input.visual_scroll(width as usize);

    let style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let field = Paragraph::new(input.value())
        .scroll((0, scroll as u16))
        .block(Block::bordered().title(title).border_style(style));
    frame.render_widget(field, area);

    if focused {
        frame.set_cursor_position((
            area.x + (input.visual_cursor().saturating_sub(scroll)) as u16 + 1,
            area.y + 1,
        ));
    }
}

fn draw_select_field(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    value: Option<String>,
    focused: bool,
) {
    let style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let content = match value {
        Some(value) => Line::from(format!("< {} >", value)),
        None => Line::from(Span::styled(
            "Select...",
            Style::default().fg(Color::DarkGray),
        )),
    };

    let field =
        Paragraph::new(content).block(Block::bordered().title(title).border_style(style));
    frame.render_widget(field, area);
}

fn draw_sidebar(frame: &mut Frame, app: &App, area: Rect) {
    let store = &app.registry.store;
    let heading = Style::default().add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from(Span::styled("Need Immediate Assistance?", heading)),
        Line::from("Call us directly at"),
        Line::from(Span::styled(
            store.phone.as_str(),
            Style::default().fg(Color::Yellow),
        )),
        Line::default(),
        Line::from(Span::styled("Dining Hours", heading)),
    ];
    for hours in &store.hours {
        lines.push(Line::from(format!("{}: {}", hours.days, hours.open)));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled("Special Occasions?", heading)));
    lines.push(Line::from(
        "Mention any celebrations in the special requests field for a complimentary surprise.",
    ));

    let sidebar = Paragraph::new(lines)
        .block(Block::bordered())
        .wrap(Wrap { trim: false });
    frame.render_widget(sidebar, area);
}

fn guest_label(count: GuestCount) -> String {
    match count {
        GuestCount::Seated(1) => "1 Person".to_string(),
        GuestCount::Seated(n) => format!("{} People", n),
        GuestCount::LargeParty => "10+ People (Large Party)".to_string(),
    }
}

fn date_label(date: NaiveDate) -> String {
    date.format("%a, %b %-d").to_string()
}

fn time_label(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}
