//! `oparl-resolve open <url>` – dereference a document through the registry.

use anyhow::Result;

use super::http_registry;

pub fn run_open(url: &str) -> Result<()> {
    let registry = http_registry()?;
    let document = registry.open(url)?;
    tracing::info!("opened {} ({} bytes)", url, document.len());
    println!("{}", document);
    Ok(())
}
