use color_eyre::Result;
use color_eyre::eyre::eyre;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::action::Action;
use crate::config::{Config, parse_key};
use crate::event::{Event, EventHandler};
use crate::format::{initial_title, terminated_title, usage_title};
use crate::system::process::{CommandMetadata, ProcessState};
use crate::system::sampler::{MemoryReader, SampleResult, Sampler};
use crate::system::series::SeriesBuffer;
use crate::ui::theme::Theme;
use crate::ui::view::{PanelLayout, View};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Sampling on every tick.
    Active,
    /// The process is gone; the last series stays on screen until quit.
    Terminated,
    Exited,
}

#[derive(Debug, Clone)]
pub struct ResolvedKeybinds {
    pub quit: KeyCode,
}

impl ResolvedKeybinds {
    pub fn from_config(kb: &crate::config::KeybindsConfig) -> Self {
        Self {
            quit: parse_key(&kb.quit).unwrap_or(KeyCode::Char('q')),
        }
    }
}

pub struct App<R> {
    pub pid: u32,
    pub phase: Phase,
    pub title: String,
    pub command: CommandMetadata,
    pub series: SeriesBuffer,
    pub layout: PanelLayout,
    pub theme: Theme,
    pub keybinds: ResolvedKeybinds,
    sampler: Sampler<R>,
}

impl<R: MemoryReader> App<R> {
    /// Sets up the session for `pid` on a terminal of the given size.
    pub fn new(
        pid: u32,
        reader: R,
        command: CommandMetadata,
        (width, height): (u16, u16),
        config: &Config,
    ) -> Self {
        let capacity = SeriesBuffer::capacity_for_width(width).max(1) as usize;

        App {
            pid,
            phase: Phase::Active,
            title: initial_title(pid),
            command,
            series: SeriesBuffer::new(capacity),
            layout: PanelLayout::for_size(width, height),
            theme: Theme::from_config(&config.colors),
            keybinds: ResolvedKeybinds::from_config(&config.keybinds),
            sampler: Sampler::new(reader),
        }
    }

    pub fn running(&self) -> bool {
        self.phase != Phase::Exited
    }

    /// Takes one sample. Returns whether the frame needs redrawing.
    pub fn on_tick(&mut self) -> bool {
        if self.phase != Phase::Active {
            return false;
        }

        let result = self.sampler.sample(self.pid);
        match result {
            SampleResult::Ok(bytes) => {
                self.series.push(bytes);
                self.title = usage_title(self.pid, bytes);
            }
            SampleResult::Unavailable => {
                self.title = terminated_title(self.pid);
                self.phase = Phase::Terminated;
                #[cfg(feature = "trace-log")]
                tracing::info!(pid = self.pid, samples = self.series.len(), "process terminated");
            }
        }
        debug_assert_eq!(
            result.state() == ProcessState::Running,
            self.phase == Phase::Active
        );
        true
    }

    pub fn on_resize(&mut self, width: u16, height: u16) {
        if let Err(_err) = self
            .series
            .set_capacity(SeriesBuffer::capacity_for_width(width))
        {
            #[cfg(feature = "trace-log")]
            tracing::debug!(width, height, error = %_err, "resize capacity rejected");
        }
        self.layout = PanelLayout::for_size(width, height);
    }

    pub fn map_key(&self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Action::Quit;
        }
        match key.code {
            KeyCode::Esc => Action::Quit,
            code if code == self.keybinds.quit => Action::Quit,
            _ => Action::None,
        }
    }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Quit => self.phase = Phase::Exited,
            Action::None => {}
        }
    }

    pub fn view(&self) -> View {
        View::build(
            &self.series.values(),
            &self.title,
            self.command.as_str(),
            self.series.peak(),
            self.layout,
        )
    }

    pub fn sampler(&self) -> &Sampler<R> {
        &self.sampler
    }
}

/// Drives `app` from `events` until an exit key arrives. `draw` is called for
/// the initial frame and after every event that changed what is on screen.
pub async fn run<R, D>(app: &mut App<R>, events: &mut EventHandler, mut draw: D) -> Result<()>
where
    R: MemoryReader,
    D: FnMut(&View, &Theme) -> Result<()>,
{
    draw(&app.view(), &app.theme)?;

    while app.running() {
        let Some(event) = events.next().await else {
            return Err(eyre!("terminal event stream closed"));
        };
        let should_draw = match event {
            Event::Key(key) => {
                if key.kind == KeyEventKind::Press {
                    let action = app.map_key(key);
                    app.dispatch(action);
                }
                false
            }
            Event::Tick => app.on_tick(),
            Event::Resize { width, height } => {
                app.on_resize(width, height);
                true
            }
        };
        if should_draw && app.running() {
            draw(&app.view(), &app.theme)?;
        }
    }

    Ok(())
}
