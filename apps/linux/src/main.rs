//! Fieldkit Linux App
//!
//! A desktop showcase for the Fieldkit input field, built with the Iced GUI
//! framework. It can also print the HTML rendering of every configured field.

use anyhow::{Context, Result};
use clap::Parser;
use iced::{Element, Subscription, Task, Theme};
use std::fmt::Write as _;
use std::path::PathBuf;
use tracing::{debug, info};

mod config;
mod logging;
mod ui;

use config::{ConfigManager, ShowcaseConfig};
use fieldkit_shared::InputField;
use ui::create_fieldkit_theme;
use ui::views::{ShowcaseMessage, ShowcaseView};

/// Command line interface
#[derive(Parser, Debug)]
#[command(name = "fieldkit", version, about = "Showcase for the Fieldkit input field")]
struct Cli {
    /// Showcase configuration file (defaults to the user config directory)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Console log filter, e.g. `debug` or `fieldkit_shared=trace`
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Also write logs to this file
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Print the HTML of every configured field and exit
    #[arg(long)]
    print_html: bool,

    /// Write the loaded configuration to the config path if no file exists there
    #[arg(long)]
    init_config: bool,
}

/// Main application messages
#[derive(Debug, Clone)]
pub enum Message {
    Showcase(ShowcaseMessage),
}

/// Application state
struct FieldkitApp {
    showcase: ShowcaseView,
    theme: Theme,
}

impl FieldkitApp {
    fn new(config: ShowcaseConfig) -> (Self, Task<Message>) {
        let app = Self {
            theme: create_fieldkit_theme(config.ui.theme),
            showcase: ShowcaseView::new(config.fields),
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        format!("Fieldkit {}", fieldkit_shared::VERSION)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Showcase(message) => self.showcase.update(message).map(Message::Showcase),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        self.showcase.view().map(Message::Showcase)
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        self.showcase.subscription().map(Message::Showcase)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging_config = logging::resolve_config();
    if let Some(level) = &cli.log_level {
        logging::validate_level(level)?;
        logging_config = logging_config.console_level(level);
    }
    if let Some(path) = &cli.log_file {
        logging_config = logging_config.log_file(path);
    }
    logging::initialize_logging(logging_config)?;

    info!("Starting Fieldkit {}", fieldkit_shared::VERSION);

    let mut config_manager = ConfigManager::new(cli.config.clone());
    config_manager.load()?;
    if cli.init_config {
        config_manager.write_if_missing()?;
    }
    let config = config_manager.into_config();

    if cli.print_html {
        print!("{}", render_html(&config));
        return Ok(());
    }

    run(config).context("Failed to run the showcase window")
}

/// HTML of every configured field, each preceded by a comment naming it
fn render_html(config: &ShowcaseConfig) -> String {
    let mut out = String::new();
    for entry in &config.fields {
        debug!("Rendering '{}' as HTML", entry.name);
        let field = InputField::new(entry.config.clone());
        let _ = writeln!(out, "<!-- {} -->", entry.name);
        let _ = writeln!(out, "{}", field.render().to_html());
    }
    out
}

fn run(config: ShowcaseConfig) -> iced::Result {
    let window = config.ui.clone();
    ui::utils::typography::init_font_scale(window.font_scale);

    iced::application(FieldkitApp::title, FieldkitApp::update, FieldkitApp::view)
        .theme(FieldkitApp::theme)
        .subscription(FieldkitApp::subscription)
        .window_size(iced::Size::new(
            window.window_width as f32,
            window.window_height as f32,
        ))
        .position(iced::window::Position::Centered)
        .run_with(move || FieldkitApp::new(config))
}
