use anyhow::Result;
use chrono::{DateTime, Local, TimeZone, Utc};
use chrono_tz::Tz;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    widgets::Block,
    DefaultTerminal, Frame,
};
use std::sync::{mpsc, Arc};
use std::thread;

use crate::config::AppConfig;
use crate::models::{City, PrayerEntry, CITIES};
use crate::prayer_times::{compute_next, FetchError, NextPrayer, TimingsClient, TimingsDay};
use crate::tui::events::{Event, EventHandler};
use crate::tui::theme;
use crate::tui::widgets::{city_menu, header, next_prayer, prayers, statusbar};
use crate::utils::format::{clock_string, date_string};

#[derive(Debug, Clone, PartialEq)]
pub enum FetchState {
    Loading,
    Ready,
    /// Last fetch failed; any entries still held are from an earlier fetch.
    Failed { reason: String },
}

/// A fetch the event loop should start on a worker thread.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchRequest {
    pub seq: u64,
    pub city: City,
}

pub struct App {
    pub city: City,
    pub entries: Vec<PrayerEntry>,
    pub timezone: Option<Tz>,
    pub source_date: Option<String>,
    pub fetch: FetchState,
    pub dark_mode: bool,
    pub show_city_menu: bool,
    pub menu_idx: usize,
    pub should_quit: bool,
    request_seq: u64,

    // Derived on every tick
    pub clock_str: String,
    pub date_str: String,
    pub next: Option<NextPrayer>,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        let now = Local::now().naive_local();
        App {
            city: config.city(),
            entries: Vec::new(),
            timezone: None,
            source_date: None,
            fetch: FetchState::Loading,
            dark_mode: config.display.dark_mode,
            show_city_menu: false,
            menu_idx: 0,
            should_quit: false,
            request_seq: 0,
            clock_str: clock_string(now),
            date_str: date_string(now),
            next: None,
        }
    }

    /// Tick at the current moment in the selected city when its zone is
    /// known, else in local time.
    pub fn refresh(&mut self) {
        match self.timezone {
            Some(tz) => self.tick(&Utc::now().with_timezone(&tz)),
            None => self.tick(&Local::now()),
        }
    }

    /// Start a new request for the current city. Any older request in flight
    /// is superseded.
    pub fn begin_fetch(&mut self) -> FetchRequest {
        self.request_seq += 1;
        self.fetch = FetchState::Loading;
        FetchRequest {
            seq: self.request_seq,
            city: self.city,
        }
    }

    pub fn select_city(&mut self, city: City) -> Option<FetchRequest> {
        self.show_city_menu = false;
        if city == self.city {
            return None;
        }
        log::info!("City changed to {}", city.label());
        self.city = city;
        self.entries.clear();
        self.timezone = None;
        self.source_date = None;
        self.next = None;
        Some(self.begin_fetch())
    }

    /// Apply a finished fetch. Returns false if the response answers a
    /// superseded request and was dropped.
    pub fn apply_fetch(&mut self, seq: u64, result: Result<TimingsDay, FetchError>) -> bool {
        if seq != self.request_seq {
            log::debug!(
                "Dropping response for request {} (current is {})",
                seq,
                self.request_seq
            );
            return false;
        }

        match result {
            Ok(day) => {
                self.timezone = day.timezone.as_deref().and_then(|tz| tz.parse::<Tz>().ok());
                self.source_date = day.readable_date;
                self.entries = day.entries;
                self.fetch = FetchState::Ready;
            }
            Err(e) => {
                log::error!("Error fetching prayer times for {}: {}", self.city.label(), e);
                self.fetch = FetchState::Failed {
                    reason: e.to_string(),
                };
            }
        }
        true
    }

    pub fn is_stale(&self) -> bool {
        matches!(self.fetch, FetchState::Failed { .. }) && !self.entries.is_empty()
    }

    /// Single one-second tick: refresh the clock and the countdown together.
    pub fn tick<T: TimeZone>(&mut self, now: &DateTime<T>) {
        let wall = now.naive_local();
        self.clock_str = clock_string(wall);
        self.date_str = date_string(wall);
        self.next = if self.entries.is_empty() {
            None
        } else {
            compute_next(&self.entries, now)
        };
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<FetchRequest> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        if self.show_city_menu {
            return self.handle_menu_key(key);
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                self.should_quit = true;
                None
            }
            KeyCode::Char('c') => {
                self.menu_idx = self.city.position();
                self.show_city_menu = true;
                None
            }
            KeyCode::Char('t') => {
                self.dark_mode = !self.dark_mode;
                None
            }
            KeyCode::Char('r') => Some(self.begin_fetch()),
            KeyCode::Char(c @ '1'..='9') => {
                let idx = c as usize - '1' as usize;
                CITIES.get(idx).copied().and_then(|city| self.select_city(city))
            }
            _ => None,
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent) -> Option<FetchRequest> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('c') => {
                self.show_city_menu = false;
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.menu_idx = self.menu_idx.saturating_sub(1);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.menu_idx + 1 < CITIES.len() {
                    self.menu_idx += 1;
                }
                None
            }
            KeyCode::Enter => {
                let city = CITIES.get(self.menu_idx).copied().unwrap_or_default();
                self.select_city(city)
            }
            _ => None,
        }
    }

    pub fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        let palette = theme::palette(self.dark_mode);

        frame.render_widget(Block::default().style(palette.base()), area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),  // header
                Constraint::Length(8),  // next prayer card
                Constraint::Min(10),    // table
                Constraint::Length(1),  // status bar
            ])
            .split(area);

        header::render(
            frame,
            chunks[0],
            palette,
            &self.city,
            &self.clock_str,
            &self.date_str,
        );

        next_prayer::render(
            frame,
            chunks[1],
            palette,
            self.next.as_ref(),
            &self.fetch,
            self.is_stale(),
        );

        prayers::render(
            frame,
            chunks[2],
            palette,
            &self.entries,
            self.next.as_ref().map(|n| n.info.name),
            self.source_date.as_deref(),
            self.fetch == FetchState::Loading,
        );

        statusbar::render(frame, chunks[3], palette, &self.fetch);

        if self.show_city_menu {
            city_menu::render(frame, area, palette, self.menu_idx, &self.city);
        }
    }
}

fn spawn_fetch(client: &Arc<TimingsClient>, request: FetchRequest, tx: mpsc::Sender<Event>) {
    let client = Arc::clone(client);
    thread::spawn(move || {
        let result = client.fetch(&request.city);
        // Receiver is gone once the loop has exited.
        let _ = tx.send(Event::Fetched {
            seq: request.seq,
            result,
        });
    });
}

/// Run the TUI event loop.
pub fn run(config: AppConfig) -> Result<()> {
    let client = Arc::new(TimingsClient::new(&config.api)?);
    let mut app = App::new(&config);
    let events = EventHandler::new(1000);

    spawn_fetch(&client, app.begin_fetch(), events.sender());

    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &mut app, &events, &client);
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    events: &EventHandler,
    client: &Arc<TimingsClient>,
) -> Result<()> {
    loop {
        terminal.draw(|frame| app.draw(frame))?;

        match events.next()? {
            Event::Key(key) => {
                if let Some(request) = app.handle_key(key) {
                    spawn_fetch(client, request, events.sender());
                }
                if app.should_quit {
                    return Ok(());
                }
            }
            Event::Tick => {
                app.refresh();
            }
            Event::Fetched { seq, result } => {
                if app.apply_fetch(seq, result) {
                    app.refresh();
                }
            }
        }
    }
}
