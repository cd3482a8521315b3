//! Navigation bar

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Tabs};

use crate::app::{App, Route};

pub fn draw(frame: &mut Frame, app: &App, area: Rect) {
    // Condensed look once the page has scrolled past the threshold.
    let border_style = if app.scrolled() {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::bordered()
        .title(format!(" {} ", app.registry.store.name))
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .border_style(border_style);

    let titles = Route::ALL
        .iter()
        .map(|route| Line::from(route.title()))
        .collect::<Vec<_>>();

    let tabs = Tabs::new(titles)
        .select(app.route.index())
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(block);

    frame.render_widget(tabs, area);
}
