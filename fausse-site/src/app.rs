//! Application state and event loop
//!
//! Single-threaded and event-driven: every state change happens in
//! response to a terminal event or to a submit outcome coming back over
//! the channel. Form submissions are the only spawned work; one per form
//! may be in flight, guarded by the controllers' `submitting` flag.

use chrono::{NaiveDate, NaiveTime};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use futures::StreamExt;
use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::layout::{Position, Rect};
use tokio::sync::mpsc;
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;

use fausse_client::forms::reservation::{available_dates, available_time_slots};
use fausse_client::forms::{MessageKind, NewsletterForm, ReservationField, ReservationForm};
use fausse_client::{HttpClient, SiteApi};
use shared::{ContentRegistry, GuestCount};

use crate::event::AppEvent;
use crate::ui;

/// Scroll offset past which the header switches to its condensed style
pub const SCROLL_THRESHOLD: u16 = 50;

/// The site's routes, in navigation order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Menu,
    Reservations,
    About,
    Gallery,
}

impl Route {
    pub const ALL: [Route; 5] = [
        Route::Home,
        Route::Menu,
        Route::Reservations,
        Route::About,
        Route::Gallery,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Menu => "Menu",
            Route::Reservations => "Reservations",
            Route::About => "About",
            Route::Gallery => "Gallery",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|route| *route == self).unwrap_or(0)
    }

    pub fn next(self) -> Route {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Route {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Where key input is routed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Browse,
    EditingReservation,
    EditingNewsletter,
}

/// Reservation form fields in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationFocus {
    Name,
    Email,
    Phone,
    Guests,
    Date,
    Time,
    SpecialRequests,
    Submit,
}

impl ReservationFocus {
    const ORDER: [ReservationFocus; 8] = [
        ReservationFocus::Name,
        ReservationFocus::Email,
        ReservationFocus::Phone,
        ReservationFocus::Guests,
        ReservationFocus::Date,
        ReservationFocus::Time,
        ReservationFocus::SpecialRequests,
        ReservationFocus::Submit,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    /// Guests, date and time cycle through fixed options instead of taking
    /// text.
    fn is_selector(self) -> bool {
        matches!(
            self,
            ReservationFocus::Guests | ReservationFocus::Date | ReservationFocus::Time
        )
    }
}

/// Reservation page state: the form controller plus the input widgets and
/// selector cursors the terminal needs on top of it.
pub struct ReservationPane {
    pub form: ReservationForm,
    pub focus: ReservationFocus,
    pub name: Input,
    pub email: Input,
    pub phone: Input,
    pub special_requests: Input,
    pub guest_options: Vec<GuestCount>,
    pub guest_idx: usize,
    pub dates: Vec<NaiveDate>,
    pub date_idx: Option<usize>,
    pub times: Vec<NaiveTime>,
    pub time_idx: Option<usize>,
}

impl ReservationPane {
    pub fn new() -> Self {
        Self {
            form: ReservationForm::new(),
            focus: ReservationFocus::Name,
            name: Input::default(),
            email: Input::default(),
            phone: Input::default(),
            special_requests: Input::default(),
            guest_options: GuestCount::options().collect(),
            // Matches the controller's default of two guests.
            guest_idx: 1,
            dates: available_dates().collect(),
            date_idx: None,
            times: available_time_slots().collect(),
            time_idx: None,
        }
    }

    fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    fn focused_input(&mut self) -> Option<(&mut Input, ReservationField)> {
        match self.focus {
            ReservationFocus::Name => Some((&mut self.name, ReservationField::Name)),
            ReservationFocus::Email => Some((&mut self.email, ReservationField::Email)),
            ReservationFocus::Phone => Some((&mut self.phone, ReservationField::Phone)),
            ReservationFocus::SpecialRequests => Some((
                &mut self.special_requests,
                ReservationField::SpecialRequests,
            )),
            _ => None,
        }
    }

    fn handle_text_key(&mut self, key: KeyEvent) {
        let Some((input, field)) = self.focused_input() else {
            return;
        };
        input.handle_event(&Event::Key(key));
        let value = input.value().to_string();
        self.form.set_field(field, value);
    }

    /// Step the focused selector by `delta`, pushing the pick into the
    /// form controller.
    pub fn cycle_selector(&mut self, delta: i64) {
        match self.focus {
            ReservationFocus::Guests => {
                let len = self.guest_options.len() as i64;
                self.guest_idx = (self.guest_idx as i64 + delta).rem_euclid(len) as usize;
                self.form.set_guests(self.guest_options[self.guest_idx]);
            }
            ReservationFocus::Date => {
                if let Some(idx) = Self::step(self.date_idx, delta, self.dates.len()) {
                    self.date_idx = Some(idx);
                    self.form.set_date(self.dates[idx]);
                }
            }
            ReservationFocus::Time => {
                if let Some(idx) = Self::step(self.time_idx, delta, self.times.len()) {
                    self.time_idx = Some(idx);
                    self.form.set_time(self.times[idx]);
                }
            }
            _ => {}
        }
    }

    fn step(current: Option<usize>, delta: i64, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let len = len as i64;
        Some(match current {
            Some(idx) => (idx as i64 + delta).rem_euclid(len) as usize,
            // First touch lands on the nearest end of the list.
            None if delta >= 0 => 0,
            None => (len - 1) as usize,
        })
    }

    /// Reset the widgets after the controller cleared its fields, and
    /// re-derive the offered dates since "today" may have moved.
    pub fn clear_inputs(&mut self) {
        self.name = Input::default();
        self.email = Input::default();
        self.phone = Input::default();
        self.special_requests = Input::default();
        self.guest_idx = 1;
        self.dates = available_dates().collect();
        self.date_idx = None;
        self.time_idx = None;
        self.focus = ReservationFocus::Name;
    }
}

impl Default for ReservationPane {
    fn default() -> Self {
        Self::new()
    }
}

/// Newsletter signup state (lives in the footer, present on every page)
#[derive(Default)]
pub struct NewsletterPane {
    pub form: NewsletterForm,
    pub input: Input,
}

impl NewsletterPane {
    fn handle_key(&mut self, key: KeyEvent) {
        self.input.handle_event(&Event::Key(key));
        let value = self.input.value().to_string();
        self.form.set_email(value);
    }

    fn sync_after_submit(&mut self) {
        if self.form.email().is_empty() {
            self.input = Input::default();
        }
    }
}

/// Gallery page state: grid cursor plus the single opened item
#[derive(Debug, Default)]
pub struct GalleryPane {
    pub selected: usize,
    open: Option<i64>,
}

impl GalleryPane {
    /// Open an item in the overlay, replacing whatever was open before.
    pub fn open_item(&mut self, id: i64) {
        self.open = Some(id);
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    pub fn open(&self) -> Option<i64> {
        self.open
    }

    fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn select_next(&mut self, len: usize) {
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }
}

/// Top-level application state
pub struct App {
    pub registry: ContentRegistry,
    pub route: Route,
    pub scroll: u16,
    pub mode: InputMode,
    pub reservations: ReservationPane,
    pub newsletter: NewsletterPane,
    pub gallery: GalleryPane,
    pub last_size: Rect,
    client: HttpClient,
    events_tx: mpsc::UnboundedSender<AppEvent>,
    should_quit: bool,
}

impl App {
    pub fn new(
        registry: ContentRegistry,
        client: HttpClient,
    ) -> (Self, mpsc::UnboundedReceiver<AppEvent>) {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let app = Self {
            registry,
            route: Route::Home,
            scroll: 0,
            mode: InputMode::Browse,
            reservations: ReservationPane::new(),
            newsletter: NewsletterPane::default(),
            gallery: GalleryPane::default(),
            last_size: Rect::default(),
            client,
            events_tx,
            should_quit: false,
        };
        (app, events_rx)
    }

    /// Header state derived from the scroll offset, recomputed on every
    /// scroll event.
    pub fn scrolled(&self) -> bool {
        self.scroll > SCROLL_THRESHOLD
    }

    pub async fn run<B: Backend>(
        &mut self,
        events_rx: &mut mpsc::UnboundedReceiver<AppEvent>,
        terminal: &mut Terminal<B>,
    ) -> anyhow::Result<()> {
        let mut input_events = crossterm::event::EventStream::new();

        while !self.should_quit {
            terminal.draw(|frame| ui::draw(frame, self))?;

            tokio::select! {
                maybe_event = input_events.next() => match maybe_event {
                    Some(Ok(event)) => self.handle_event(event),
                    Some(Err(err)) => return Err(err.into()),
                    None => break,
                },
                Some(event) = events_rx.recv() => self.handle_app_event(event),
            }
        }
        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }
        match self.mode {
            InputMode::Browse => self.browse_key(key),
            InputMode::EditingReservation => self.editing_reservation_key(key),
            InputMode::EditingNewsletter => self.editing_newsletter_key(key),
        }
    }

    fn browse_key(&mut self, key: KeyEvent) {
        // An open lightbox swallows everything except its close keys.
        if self.route == Route::Gallery && self.gallery.open().is_some() {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('x')
            ) {
                self.gallery.close();
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Tab => self.go_to(self.route.next()),
            KeyCode::BackTab => self.go_to(self.route.prev()),
            KeyCode::Char(c @ '1'..='5') => {
                let idx = (c as usize) - ('1' as usize);
                self.go_to(Route::ALL[idx]);
            }
            KeyCode::Down | KeyCode::Char('j') => self.scroll = self.scroll.saturating_add(1),
            KeyCode::Up | KeyCode::Char('k') => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::PageDown => self.scroll = self.scroll.saturating_add(10),
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(10),
            KeyCode::Char('n') => self.mode = InputMode::EditingNewsletter,
            _ => self.route_key(key),
        }
    }

    fn route_key(&mut self, key: KeyEvent) {
        match (self.route, key.code) {
            (Route::Gallery, KeyCode::Left) => self.gallery.select_prev(),
            (Route::Gallery, KeyCode::Right) => {
                self.gallery.select_next(self.registry.gallery.len());
            }
            (Route::Gallery, KeyCode::Enter) => {
                if let Some(item) = self.registry.gallery.get(self.gallery.selected) {
                    self.gallery.open_item(item.id);
                }
            }
            (Route::Reservations, KeyCode::Enter | KeyCode::Char('e')) => {
                self.mode = InputMode::EditingReservation;
            }
            // The hero call-to-action: straight to the reservation form.
            (Route::Home, KeyCode::Enter) => {
                self.go_to(Route::Reservations);
                self.mode = InputMode::EditingReservation;
            }
            _ => {}
        }
    }

    fn editing_reservation_key(&mut self, key: KeyEvent) {
        let focus = self.reservations.focus;
        match key.code {
            KeyCode::Esc => self.mode = InputMode::Browse,
            KeyCode::Tab | KeyCode::Down => self.reservations.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.reservations.focus_prev(),
            KeyCode::Enter if focus == ReservationFocus::Submit => self.submit_reservation(),
            KeyCode::Enter => self.reservations.focus_next(),
            KeyCode::Left if focus.is_selector() => self.reservations.cycle_selector(-1),
            KeyCode::Right if focus.is_selector() => self.reservations.cycle_selector(1),
            _ => self.reservations.handle_text_key(key),
        }
    }

    fn editing_newsletter_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.mode = InputMode::Browse,
            KeyCode::Enter => self.submit_newsletter(),
            _ => self.newsletter.handle_key(key),
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollDown => self.scroll = self.scroll.saturating_add(1),
            MouseEventKind::ScrollUp => self.scroll = self.scroll.saturating_sub(1),
            // Clicking outside the lightbox content closes it.
            MouseEventKind::Down(_) if self.gallery.open().is_some() => {
                let popup = ui::overlay_rect(self.last_size);
                if !popup.contains(Position::new(mouse.column, mouse.row)) {
                    self.gallery.close();
                }
            }
            _ => {}
        }
    }

    fn go_to(&mut self, route: Route) {
        self.route = route;
        self.scroll = 0;
    }

    fn submit_reservation(&mut self) {
        let Some(request) = self.reservations.form.begin_submit() else {
            return;
        };
        let client = self.client.clone();
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = client.create_reservation(&request).await;
            let _ = tx.send(AppEvent::ReservationResolved(result));
        });
    }

    fn submit_newsletter(&mut self) {
        let Some(request) = self.newsletter.form.begin_submit() else {
            return;
        };
        let client = self.client.clone();
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = client.subscribe_newsletter(&request).await;
            let _ = tx.send(AppEvent::NewsletterResolved(result));
        });
    }

    pub fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::ReservationResolved(result) => {
                self.reservations.form.finish_submit(result);
                let confirmed = matches!(
                    self.reservations.form.message(),
                    Some(message) if message.kind == MessageKind::Success
                );
                if confirmed {
                    self.reservations.clear_inputs();
                }
            }
            AppEvent::NewsletterResolved(result) => {
                self.newsletter.form.finish_submit(result);
                self.newsletter.sync_after_submit();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fausse_client::ClientConfig;

    fn test_app() -> App {
        let client = ClientConfig::default().build_client().unwrap();
        App::new(ContentRegistry::builtin(), client).0
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_routes_cycle_in_navigation_order() {
        let titles: Vec<&str> = Route::ALL.iter().map(|r| r.title()).collect();
        assert_eq!(
            titles,
            vec!["Home", "Menu", "Reservations", "About", "Gallery"]
        );
        assert_eq!(Route::Gallery.next(), Route::Home);
        assert_eq!(Route::Home.prev(), Route::Gallery);
    }

    #[test]
    fn test_opening_replaces_opened_gallery_item() {
        let mut gallery = GalleryPane::default();
        assert_eq!(gallery.open(), None);

        gallery.open_item(3);
        gallery.open_item(5);
        assert_eq!(gallery.open(), Some(5));

        gallery.close();
        assert_eq!(gallery.open(), None);
    }

    #[test]
    fn test_scrolled_flag_threshold() {
        let mut app = test_app();
        app.scroll = SCROLL_THRESHOLD;
        assert!(!app.scrolled());
        app.scroll = SCROLL_THRESHOLD + 1;
        assert!(app.scrolled());
    }

    #[test]
    fn test_navigation_resets_scroll() {
        let mut app = test_app();
        app.scroll = 80;
        app.browse_key(press(KeyCode::Tab));
        assert_eq!(app.route, Route::Menu);
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn test_selector_cycle_composes_time_slot() {
        let mut pane = ReservationPane::new();

        pane.focus = ReservationFocus::Date;
        pane.cycle_selector(1);
        pane.focus = ReservationFocus::Time;
        pane.cycle_selector(1);

        let slot = &pane.form.request().time_slot;
        assert_eq!(
            slot.date_part(),
            Some(pane.dates[0].format("%Y-%m-%d").to_string().as_str())
        );
        assert_eq!(slot.time_part(), Some("17:00"));
    }

    #[test]
    fn test_guest_selector_wraps_to_large_party() {
        let mut pane = ReservationPane::new();
        pane.focus = ReservationFocus::Guests;

        pane.cycle_selector(-2);
        assert_eq!(pane.form.request().guests, GuestCount::LargeParty);
    }

    #[test]
    fn test_click_outside_overlay_closes_it() {
        let mut app = test_app();
        app.route = Route::Gallery;
        app.last_size = Rect::new(0, 0, 100, 40);
        app.gallery.open_item(3);

        let outside = MouseEvent {
            kind: MouseEventKind::Down(crossterm::event::MouseButton::Left),
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        app.handle_mouse(outside);
        assert_eq!(app.gallery.open(), None);

        app.gallery.open_item(3);
        let centre = ui::overlay_rect(app.last_size);
        let inside = MouseEvent {
            kind: MouseEventKind::Down(crossterm::event::MouseButton::Left),
            column: centre.x + centre.width / 2,
            row: centre.y + centre.height / 2,
            modifiers: KeyModifiers::NONE,
        };
        app.handle_mouse(inside);
        assert_eq!(app.gallery.open(), Some(3));
    }

    #[test]
    fn test_escape_closes_overlay_before_navigation() {
        let mut app = test_app();
        app.route = Route::Gallery;
        app.gallery.open_item(5);

        app.browse_key(press(KeyCode::Tab));
        // The open overlay swallowed the key; still on the gallery.
        assert_eq!(app.route, Route::Gallery);
        assert_eq!(app.gallery.open(), Some(5));

        app.browse_key(press(KeyCode::Esc));
        assert_eq!(app.gallery.open(), None);
    }
}
