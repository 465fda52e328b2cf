//! Subcommand implementations.

mod create_event;
mod events;
mod login;
mod logout;
mod records;
mod refresh_token;
mod whoami;

use anyhow::Result;
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log in and store the session
    Login(login::LoginArgs),

    /// End the stored session
    Logout(logout::LogoutArgs),

    /// Display the active session
    Whoami(whoami::WhoamiArgs),

    /// Renew the access token now
    RefreshToken(refresh_token::RefreshTokenArgs),

    /// List suppliers
    Suppliers(records::ListArgs),

    /// List organizers
    Organizers(records::ListArgs),

    /// List attendees
    Attendees(records::ListArgs),

    /// List events
    Events(events::EventsArgs),

    /// Create a new event
    CreateEvent(create_event::CreateEventArgs),
}

pub async fn handle(command: Commands, api_url: &str) -> Result<()> {
    match command {
        Commands::Login(args) => login::run(args, api_url).await,
        Commands::Logout(args) => logout::run(args, api_url).await,
        Commands::Whoami(args) => whoami::run(args, api_url).await,
        Commands::RefreshToken(args) => refresh_token::run(args, api_url).await,
        Commands::Suppliers(args) => records::suppliers(args, api_url).await,
        Commands::Organizers(args) => records::organizers(args, api_url).await,
        Commands::Attendees(args) => records::attendees(args, api_url).await,
        Commands::Events(args) => events::run(args, api_url).await,
        Commands::CreateEvent(args) => create_event::run(args, api_url).await,
    }
}
