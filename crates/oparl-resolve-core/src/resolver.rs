//! Resolver interface handed to a client's `resolve_url` hook.
//!
//! The client only depends on this trait and never performs network I/O
//! itself; whenever it needs the document behind a URL it calls `resolve`.

use crate::result::ResolveUrlResult;

/// Turns a URL into a [`ResolveUrlResult`]. Must not panic on bad input;
/// every failure is reported through the returned value.
pub trait UrlResolver: Send + Sync {
    fn resolve(&self, url: &str) -> ResolveUrlResult;
}

impl<F> UrlResolver for F
where
    F: Fn(&str) -> ResolveUrlResult + Send + Sync,
{
    fn resolve(&self, url: &str) -> ResolveUrlResult {
        self(url)
    }
}
