use std::io;

use anyhow::Result;
use rookery_cli::{Session, SessionConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
    info!("rookery starting");

    let mut session = Session::new(SessionConfig::default());
    session.run(io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}
