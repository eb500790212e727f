use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::time::{Interval, MissedTickBehavior};

#[derive(Clone, Debug)]
pub enum Event {
    Key(KeyEvent),
    Tick,
    Resize { width: u16, height: u16 },
}

/// Merges the sampling ticker and terminal input into one ordered stream.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
    _task: Option<tokio::task::JoinHandle<()>>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel::<Event>();

        let task = tokio::spawn(async move {
            let mut reader = event::EventStream::new();
            let mut ticker = tick_interval(tick_rate);
            // The first tick fires immediately; the initial frame is drawn by the caller.
            ticker.tick().await;

            loop {
                tokio::select! {
                    maybe_event = reader.next() => {
                        match maybe_event {
                            Some(Ok(evt)) => {
                                let mapped = match evt {
                                    CrosstermEvent::Key(key) => Some(Event::Key(key)),
                                    CrosstermEvent::Resize(width, height) => {
                                        Some(Event::Resize { width, height })
                                    }
                                    _ => None,
                                };
                                if let Some(e) = mapped
                                    && tx.send(e).is_err()
                                {
                                    break;
                                }
                            }
                            Some(Err(_)) => break,
                            None => break,
                        }
                    }
                    _ = ticker.tick() => {
                        if tx.send(Event::Tick).is_err() {
                            break;
                        }
                    }
                }
            }
        });

        Self {
            rx,
            _task: Some(task),
        }
    }

    /// Events pushed by the caller instead of the terminal and a ticker.
    pub fn from_receiver(rx: mpsc::UnboundedReceiver<Event>) -> Self {
        Self { rx, _task: None }
    }

    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }
}

/// Ticker for sampling. After a stall it resumes one period later instead of
/// replaying the missed ticks back to back.
pub fn tick_interval(period: Duration) -> Interval {
    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    interval
}
