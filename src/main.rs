mod domain;
mod ledger;
mod menu;

use std::io;

use tracing_subscriber::EnvFilter;

use crate::menu::Menu;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG overrides; logs go to stderr so the menu owns stdout
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut menu = Menu::new(stdin.lock(), stdout.lock());

    menu.run()?;

    Ok(())
}
