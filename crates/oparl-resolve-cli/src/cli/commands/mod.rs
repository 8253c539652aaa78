//! CLI command handlers, one per file.

mod completions;
mod linguas;
mod open;
mod resolve;

pub use completions::run_completions;
pub use linguas::run_linguas;
pub use open::run_open;
pub use resolve::run_resolve;

#[cfg(test)]
pub(crate) use linguas::format_linguas;
#[cfg(test)]
pub(crate) use resolve::{ensure_success, format_result};

use anyhow::Result;
use oparl_resolve_core::{config, HttpOptions, HttpResolver, ResolverRegistry};

/// Registry with an `HttpResolver` built from the user's config.
fn http_registry() -> Result<ResolverRegistry> {
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);
    let mut registry = ResolverRegistry::new();
    registry.connect_resolve_url(HttpResolver::new(HttpOptions::from(&cfg.http)));
    Ok(registry)
}
