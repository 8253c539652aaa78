//! Blocking HTTP GET resolver.
//!
//! Uses the curl crate (libcurl) to fetch a URL in the current thread, then
//! folds the outcome into a [`ResolveUrlResult`]. One request per call; no
//! retries and no shared state between calls.

mod decode;

use std::collections::HashMap;
use std::time::Duration;

use crate::config::HttpConfig;
use crate::error::ResolveError;
use crate::resolver::UrlResolver;
use crate::result::ResolveUrlResult;

pub use decode::decode_body;

/// Transfer settings applied to every GET. Unset timeouts leave libcurl's defaults.
#[derive(Debug, Clone)]
pub struct HttpOptions {
    pub follow_redirects: bool,
    pub max_redirections: Option<u32>,
    pub connect_timeout: Option<Duration>,
    pub timeout: Option<Duration>,
    pub user_agent: Option<String>,
    /// Extra request headers ("Name: value").
    pub headers: HashMap<String, String>,
}

impl Default for HttpOptions {
    fn default() -> Self {
        Self {
            follow_redirects: true,
            max_redirections: None,
            connect_timeout: None,
            timeout: None,
            user_agent: None,
            headers: HashMap::new(),
        }
    }
}

impl From<&HttpConfig> for HttpOptions {
    fn from(cfg: &HttpConfig) -> Self {
        Self {
            follow_redirects: cfg.follow_redirects,
            max_redirections: cfg.max_redirections,
            connect_timeout: cfg.connect_timeout_secs.map(Duration::from_secs),
            timeout: cfg.timeout_secs.map(Duration::from_secs),
            user_agent: cfg.user_agent.clone(),
            headers: cfg.headers.clone(),
        }
    }
}

/// A fully received response whose body decoded as UTF-8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedText {
    /// Status of the final response (after redirects, when followed).
    pub status: u32,
    pub text: String,
}

/// Raw response before decoding.
#[derive(Debug, Clone)]
struct RawResponse {
    status: u32,
    body: Vec<u8>,
}

/// The standard resolver: one blocking GET per `resolve` call.
///
/// Runs in the current thread; call from `spawn_blocking` if used from async code.
#[derive(Debug, Clone, Default)]
pub struct HttpResolver {
    options: HttpOptions,
}

impl HttpResolver {
    pub fn new(options: HttpOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &HttpOptions {
        &self.options
    }

    /// GET `url` and decode the body, keeping every failure kind distinct.
    ///
    /// A non-2xx status is not an error here: its body is returned like any other.
    pub fn fetch_text(&self, url: &str) -> Result<FetchedText, ResolveError> {
        let raw = self.get(url)?;
        let text = decode_body(raw.status, raw.body)?;
        Ok(FetchedText {
            status: raw.status,
            text,
        })
    }

    fn get(&self, url: &str) -> Result<RawResponse, ResolveError> {
        let parsed = parse_http_url(url)?;

        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        // Normalized form: libcurl rejects what `url` would percent-encode (spaces etc.).
        easy.url(parsed.as_str())?;
        easy.get(true)?;
        easy.follow_location(self.options.follow_redirects)?;
        if let Some(max) = self.options.max_redirections {
            easy.max_redirections(max)?;
        }
        if let Some(d) = self.options.connect_timeout {
            easy.connect_timeout(d)?;
        }
        if let Some(d) = self.options.timeout {
            easy.timeout(d)?;
        }
        if let Some(ua) = &self.options.user_agent {
            easy.useragent(ua)?;
        }

        let mut list = curl::easy::List::new();
        for (k, v) in &self.options.headers {
            list.append(&format!("{}: {}", k.trim(), v.trim()))?;
        }
        if !self.options.headers.is_empty() {
            easy.http_headers(list)?;
        }

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        // libcurl reports 0 when no response line was ever parsed.
        let status = easy.response_code()?;
        if status == 0 {
            return Err(ResolveError::NoResponse);
        }

        Ok(RawResponse { status, body })
    }
}

/// Parse `url` and accept only `http`/`https`; other schemes never reach libcurl.
fn parse_http_url(url: &str) -> Result<url::Url, ResolveError> {
    let parsed = url::Url::parse(url).map_err(|source| ResolveError::InvalidUrl {
        url: url.to_string(),
        source,
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(ResolveError::UnsupportedScheme {
            url: url.to_string(),
            scheme: other.to_string(),
        }),
    }
}

impl UrlResolver for HttpResolver {
    fn resolve(&self, url: &str) -> ResolveUrlResult {
        tracing::debug!("resolve GET {}", url);
        match self.fetch_text(url) {
            Ok(fetched) => {
                let result = ResolveUrlResult::from_response(fetched.status, fetched.text);
                if !result.success {
                    tracing::warn!("GET {} returned HTTP {}", url, fetched.status);
                }
                result
            }
            Err(e) => {
                tracing::warn!("GET {} failed: {}", url, e);
                ResolveUrlResult::from_error(&e)
            }
        }
    }
}
