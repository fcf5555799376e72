#[macro_use]
extern crate diesel;

mod cli;
mod config;
mod console;
mod database;
mod error;
mod models;
mod report;
mod schema;
mod utils;

use std::io;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::{
    cli::{Cli, Invocation},
    config::Config,
    console::Console,
    database::Session,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("reporting=info")),
        )
        .with_writer(io::stderr)
        .init();

    let (credentials, action) = match Cli::parse().invocation() {
        Invocation::Usage => {
            println!("{}", cli::USAGE);
            return Ok(());
        }
        Invocation::Menu => {
            println!("{}", cli::MENU);
            return Ok(());
        }
        Invocation::Run {
            credentials,
            action,
        } => (credentials, action),
    };

    dotenv::dotenv().ok();
    let config = Config::from_env();
    database::register_driver(&config.database_url)?;

    let mut session = Session::open(&config.connection_url(&credentials)).with_context(|| {
        format!(
            "connecting to the hospital database as `{}`",
            credentials.username
        )
    })?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());
    report::run(&mut session, &mut console, &action)
        .with_context(|| format!("action {} failed", action))?;

    Ok(())
}
