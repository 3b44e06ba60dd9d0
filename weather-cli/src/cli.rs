use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{InquireError, Password, Text};
use weather_core::{
    App, Config, Outcome, WeatherProvider, config::DEFAULT_BASE_URL,
    provider::provider_from_config,
};

use crate::render::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Look up current weather for a location")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the WeatherAPI.com API key.
    Configure,

    /// Show current weather for a location.
    Show {
        /// Location as typed, e.g. "austin" or "paris, france".
        location: String,
    },

    /// Prompt for locations until cancelled (default).
    Interactive,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command.unwrap_or(Command::Interactive) {
            Command::Configure => configure(),
            Command::Show { location } => {
                let mut app = App::new(load_provider()?);
                app.page_mut().input = location;
                let outcome = app.submit().await;
                report(&app, &outcome);
                Ok(())
            }
            Command::Interactive => interactive(App::new(load_provider()?)).await,
        }
    }
}

fn load_provider() -> anyhow::Result<Box<dyn WeatherProvider>> {
    let config = Config::load()?;
    provider_from_config(&config)
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("WeatherAPI.com API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;
    config.set_api_key(api_key.trim().to_string());

    let base_url = Text::new("API base URL:")
        .with_default(config.base_url())
        .with_help_message("Leave as is unless you run a proxy or mock server")
        .prompt()
        .context("Failed to read base URL")?;
    if base_url.trim() == DEFAULT_BASE_URL {
        config.set_base_url("")?;
    } else {
        config.set_base_url(&base_url)?;
    }

    config.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn interactive(mut app: App<Box<dyn WeatherProvider>>) -> anyhow::Result<()> {
    loop {
        let location = match Text::new("Location:").prompt() {
            Ok(location) => location,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err).context("Failed to read location"),
        };

        app.page_mut().input = location;
        let outcome = app.submit().await;
        report(&app, &outcome);
    }

    Ok(())
}

fn report<P: WeatherProvider>(app: &App<P>, outcome: &Outcome) {
    if let Outcome::Failed(reason) = outcome {
        eprintln!("{reason}");
    }
    print!("{}", render(app.page()));
}
