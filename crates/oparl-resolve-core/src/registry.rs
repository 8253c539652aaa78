//! Host for the `resolve_url` extension point.
//!
//! A client that dereferences URLs lazily holds one registered resolver and
//! calls it on demand. `ResolverRegistry` is that slot: register once with
//! [`ResolverRegistry::connect_resolve_url`], then every lookup goes through it.

use std::fmt;
use std::sync::Arc;

use crate::resolver::UrlResolver;
use crate::result::ResolveUrlResult;

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("no resolve_url handler connected")]
    NoResolver,
    #[error("empty URL")]
    EmptyUrl,
    #[error("could not resolve {url} (status {status_code})")]
    ResolveFailed { url: String, status_code: i64 },
}

/// Holds at most one resolver, shared behind an `Arc` so clones of the
/// registry dispatch to the same handler.
#[derive(Clone, Default)]
pub struct ResolverRegistry {
    resolver: Option<Arc<dyn UrlResolver>>,
}

impl fmt::Debug for ResolverRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolverRegistry")
            .field("connected", &self.is_connected())
            .finish()
    }
}

impl ResolverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `resolver`, replacing any previous one.
    pub fn connect_resolve_url<R>(&mut self, resolver: R)
    where
        R: UrlResolver + 'static,
    {
        if self.resolver.is_some() {
            tracing::debug!("replacing connected resolve_url handler");
        }
        self.resolver = Some(Arc::new(resolver));
    }

    pub fn is_connected(&self) -> bool {
        self.resolver.is_some()
    }

    /// Invoke the registered resolver. The result is returned as the resolver built it.
    pub fn resolve_url(&self, url: &str) -> Result<ResolveUrlResult, RegistryError> {
        let resolver = self.resolver.as_ref().ok_or(RegistryError::NoResolver)?;
        if url.is_empty() {
            return Err(RegistryError::EmptyUrl);
        }
        Ok(resolver.resolve(url))
    }

    /// Dereference `url` and return its text, or an error if resolution did not succeed.
    pub fn open(&self, url: &str) -> Result<String, RegistryError> {
        let result = self.resolve_url(url)?;
        match result {
            ResolveUrlResult {
                success: true,
                resolved_data: Some(text),
                ..
            } => Ok(text),
            ResolveUrlResult { status_code, .. } => Err(RegistryError::ResolveFailed {
                url: url.to_string(),
                status_code,
            }),
        }
    }
}
