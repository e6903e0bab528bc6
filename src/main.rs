use chrono::Datelike;
use iced::widget::{column, container, Column};
use iced::{task, time, window};
use iced::{Alignment, Element, Length, Size, Subscription, Task, Theme};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod state;
mod ui;

use config::Config;
use state::catalog::Catalog;
use state::picker::{PendingPick, Picker};

/// Spinner animation rate while a pick is in flight
const SPINNER_INTERVAL: Duration = Duration::from_millis(90);

/// Main application state
struct CinemaSurprise {
    /// Selection state and the catalog it picks from
    picker: Picker,
    config: Config,
    /// The delayed pick waiting on the timer, if any
    pending: Option<InFlight>,
    spinner_tick: usize,
}

/// A scheduled pick and the handle that cancels it
struct InFlight {
    ticket: PendingPick,
    handle: task::Handle,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User clicked "Surprise Me!" or "Another One"
    Pick,
    /// The pick delay elapsed
    PickReady(PendingPick),
    /// User clicked "Watch Now" (no action attached)
    WatchNow,
    /// Advance the loading spinner
    SpinnerTick,
    /// The window is being closed
    CloseRequested(window::Id),
}

impl CinemaSurprise {
    /// Create a new instance of the application
    fn new(config: Config, catalog: Catalog) -> (Self, Task<Message>) {
        let picker = Picker::new(catalog);
        for movie in picker.catalog().movies() {
            tracing::debug!(title = %movie.title, year = movie.year, "Catalog entry");
        }
        tracing::info!(
            movies = picker.catalog().len(),
            "🎬 Cinema Surprise initialized"
        );

        (
            CinemaSurprise {
                picker,
                config,
                pending: None,
                spinner_tick: 0,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Pick => {
                let Some(pending) = self.picker.trigger() else {
                    return Task::none();
                };

                // A newer pick supersedes the one still waiting
                if let Some(previous) = self.cancel_pending() {
                    tracing::debug!(ticket = ?previous.ticket, "Superseded pending pick");
                }

                let (task, handle) = Task::perform(
                    state::schedule::delayed(self.config.delay(), pending),
                    Message::PickReady,
                )
                .abortable();
                self.pending = Some(InFlight {
                    ticket: pending,
                    handle,
                });
                self.spinner_tick = 0;

                task
            }
            Message::PickReady(pending) => {
                if self.picker.resolve(pending, &mut rand::rng()).is_some() {
                    self.pending = None;
                }
                Task::none()
            }
            Message::WatchNow => {
                if let Some(movie) = self.picker.selected() {
                    tracing::debug!(title = %movie.title, "Watch Now has no action attached");
                }
                Task::none()
            }
            Message::SpinnerTick => {
                self.spinner_tick = self.spinner_tick.wrapping_add(1);
                Task::none()
            }
            Message::CloseRequested(id) => {
                self.cancel_pending();
                self.picker.unmount();
                tracing::info!("👋 Picker unmounted, closing window");

                window::close(id)
            }
        }
    }

    /// Abort the scheduled pick, handing it back if there was one
    fn cancel_pending(&mut self) -> Option<InFlight> {
        let in_flight = self.pending.take()?;
        in_flight.handle.abort();
        Some(in_flight)
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let mut content: Column<Message> = column![]
            .spacing(48)
            .padding(32)
            .max_width(1100.0)
            .align_x(Alignment::Center);

        if self.config.show_header {
            content = content.push(ui::chrome::header());
        }

        content = content.push(ui::picker_view::view(&self.picker, self.spinner_tick));

        if self.config.show_footer {
            content = content.push(ui::chrome::footer(chrono::Local::now().year()));
        }

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }

    fn subscription(&self) -> Subscription<Message> {
        let close = window::close_requests().map(Message::CloseRequested);

        if self.picker.is_mounted() && self.picker.is_selecting() {
            Subscription::batch([
                close,
                time::every(SPINNER_INTERVAL).map(|_| Message::SpinnerTick),
            ])
        } else {
            close
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Read the config file, falling back to defaults if it is unusable
fn load_config() -> Config {
    match Config::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("⚠️  Using default config: {}", e);
            Config::default()
        }
    }
}

/// Use the configured catalog if there is one and it loads, else the built-in one
fn load_catalog(config: &Config) -> error::Result<Catalog> {
    if let Some(path) = &config.catalog_path {
        match Catalog::load(path) {
            Ok(catalog) => return Ok(catalog),
            Err(e) => tracing::warn!("⚠️  Falling back to built-in catalog: {}", e),
        }
    }

    Catalog::builtin()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = load_config();
    let catalog = load_catalog(&config)?;

    iced::application(
        ui::chrome::TITLE,
        CinemaSurprise::update,
        CinemaSurprise::view,
    )
    .subscription(CinemaSurprise::subscription)
    .theme(CinemaSurprise::theme)
    .window(window::Settings {
        size: Size::new(1100.0, 800.0),
        exit_on_close_request: false,
        ..Default::default()
    })
    .centered()
    .run_with(move || CinemaSurprise::new(config, catalog))?;

    Ok(())
}
