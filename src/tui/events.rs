use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event as CEvent, KeyEvent};

use crate::prayer_times::{FetchError, TimingsDay};

#[derive(Debug)]
pub enum Event {
    Key(KeyEvent),
    Tick,
    /// A timings fetch finished; `seq` identifies which request it answers.
    Fetched {
        seq: u64,
        result: Result<TimingsDay, FetchError>,
    },
}

pub struct EventHandler {
    tx: mpsc::Sender<Event>,
    rx: mpsc::Receiver<Event>,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        let (tx, rx) = mpsc::channel();
        let tick_rate = Duration::from_millis(tick_rate_ms);
        let input_tx = tx.clone();

        thread::spawn(move || {
            let mut last_tick = std::time::Instant::now();
            loop {
                let timeout = tick_rate
                    .checked_sub(last_tick.elapsed())
                    .unwrap_or(Duration::ZERO);

                if event::poll(timeout).unwrap_or(false) && !forward_input(event::read(), &input_tx) {
                    break;
                }

                if last_tick.elapsed() >= tick_rate {
                    if input_tx.send(Event::Tick).is_err() {
                        break;
                    }
                    last_tick = std::time::Instant::now();
                }
            }
        });

        Self { tx, rx }
    }

    /// Handle for worker threads to post results back into the loop.
    pub fn sender(&self) -> mpsc::Sender<Event> {
        self.tx.clone()
    }

    pub fn next(&self) -> Result<Event, mpsc::RecvError> {
        self.rx.recv()
    }
}

/// Push one terminal read into the channel. Returns `false` when the input
/// thread should stop: the terminal failed or the loop has gone away.
fn forward_input(read: std::io::Result<CEvent>, tx: &mpsc::Sender<Event>) -> bool {
    match read {
        Ok(CEvent::Key(key)) => tx.send(Event::Key(key)).is_ok(),
        Ok(_) => true,
        Err(e) => {
            log::error!("Terminal input failed, stopping input thread: {}", e);
            false
        }
    }
}
