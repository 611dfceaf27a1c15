use crate::initializer::FileInitializer;
use crate::safety::release::{InertResource, ReleaseGuard};
use anyhow::Result;
use clap::Parser;
use log::info;

#[derive(Parser)]
#[command(author, version, about = "Create or append a desktop marker file with guarded cleanup", long_about = None)]
struct Cli {}

/// Binary entrypoint: acquire a release guard, run the initializer once,
/// release explicitly. On an initializer error the guard's drop fallback
/// still releases while the error propagates to main.
pub fn run() -> Result<()> {
    env_logger::init();
    let _cli = Cli::parse();

    let mut guard = ReleaseGuard::new(InertResource);

    let initializer = FileInitializer::new()?;
    let outcome = initializer.exec()?;
    info!(
        "Marker file {}: {}",
        outcome,
        initializer.target().display()
    );

    guard.release();
    Ok(())
}
