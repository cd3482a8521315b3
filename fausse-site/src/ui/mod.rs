//! Rendering
//!
//! Pure renders of app state: a header/navigation bar, the active page
//! view, and a footer with the newsletter signup. The gallery lightbox is
//! drawn last so it sits above the page.

pub mod about;
pub mod footer;
pub mod gallery;
pub mod header;
pub mod home;
pub mod menu;
pub mod reservations;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};

use crate::app::{App, Route};
use fausse_client::forms::{FormMessage, MessageKind};

pub fn draw(frame: &mut Frame, app: &mut App) {
    app.last_size = frame.area();

    let [header_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(8),
    ])
    .areas(frame.area());

    header::draw(frame, app, header_area);

    match app.route {
        Route::Home => home::draw(frame, app, body_area),
        Route::Menu => menu::draw(frame, app, body_area),
        Route::Reservations => reservations::draw(frame, app, body_area),
        Route::About => about::draw(frame, app, body_area),
        Route::Gallery => gallery::draw(frame, app, body_area),
    }

    footer::draw(frame, app, footer_area);

    if app.route == Route::Gallery {
        gallery::draw_overlay(frame, app);
    }
}

/// Where the gallery lightbox sits: centred, over the page.
pub fn overlay_rect(area: Rect) -> Rect {
    let [_, vertical, _] = Layout::vertical([
        Constraint::Percentage(25),
        Constraint::Percentage(50),
        Constraint::Percentage(25),
    ])
    .areas(area);
    let [_, rect, _] = Layout::horizontal([
        Constraint::Percentage(20),
        Constraint::Percentage(60),
        Constraint::Percentage(20),
    ])
    .areas(vertical);
    rect
}

/// Style for a form outcome line
pub fn message_style(message: &FormMessage) -> Style {
    match message.kind {
        MessageKind::Success => Style::default().fg(Color::Green),
        MessageKind::Error => Style::default().fg(Color::Red),
        MessageKind::Info => Style::default().fg(Color::DarkGray),
    }
}
