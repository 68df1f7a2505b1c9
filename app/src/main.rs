mod config;
mod terminal;
mod transport;

use std::io;

use anyhow::Context;
use catalog_core::{CatalogClient, ProductList};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::terminal::Session;
use crate::transport::UreqTransport;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so the rendered catalog owns stdout.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::parse();
    tracing::debug!(?config, "starting catalog viewer");

    let client = CatalogClient::new(&config.base_url);
    let mut list = ProductList::mount(client, UreqTransport::new(config.timeout()));
    list.wait();

    let mut session = Session::new(list, !config.no_color);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    session.print_list(&mut out).context("failed to write product list")?;

    if config.no_interactive {
        return Ok(());
    }
    session
        .run(io::stdin().lock(), &mut out)
        .context("terminal session failed")
}
