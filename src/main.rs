use fridgekeeper::{Inventory, Shell, Store, StoreConfig};
use std::io;
use tracing::Level;

fn main() -> fridgekeeper::Result<()> {
    // Diagnostics go to stderr so they never interleave with the menu.
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_writer(io::stderr)
        .init();

    let inventory = Inventory::new(Store::new(StoreConfig::default()));
    let stdin = io::stdin();
    let stdout = io::stdout();

    let result = Shell::new(inventory, stdin.lock(), stdout.lock()).run();
    if let Err(e) = &result {
        tracing::error!(error = %e, "session aborted");
    }
    result
}
