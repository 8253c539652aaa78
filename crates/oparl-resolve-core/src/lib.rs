pub mod config;
pub mod error;
pub mod fetch;
pub mod linguas;
pub mod logging;
pub mod registry;
pub mod resolver;
pub mod result;

pub use error::ResolveError;
pub use fetch::{HttpOptions, HttpResolver};
pub use registry::{RegistryError, ResolverRegistry};
pub use resolver::UrlResolver;
pub use result::{ResolveUrlResult, TRANSPORT_FAILURE_STATUS};
