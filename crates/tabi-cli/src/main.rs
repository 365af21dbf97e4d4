//! Tabi CLI application
//!
//! Command-line interface for the tabi travel itinerary organizer.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use tabi_core::OrganizerBuilder;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args { database_file, no_color, command } = Args::parse();

    let session = OrganizerBuilder::new()
        .with_database_path(database_file)
        .build()
        .context("Failed to initialize organizer")?
        .open_session()
        .await
        .context("Failed to open trip session")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Tabi started");

    match command {
        Some(Schedule { command }) => {
            Cli::new(session, renderer)
                .handle_schedule_command(command)
                .await
        }
        Some(Booking { command }) => Cli::new(session, renderer).handle_booking_command(command),
        Some(Trip { command }) => {
            Cli::new(session, renderer)
                .handle_trip_command(command)
                .await
        }
        None => Cli::new(session, renderer).show_default_day(),
    }
}
