//! `oparl-resolve resolve <url>` – resolve once and print the result.

use anyhow::Result;
use oparl_resolve_core::ResolveUrlResult;

use super::http_registry;

/// Human-readable form: status and flag, then the body after a blank line.
pub(crate) fn format_result(result: &ResolveUrlResult) -> String {
    let mut out = format!(
        "status: {}\nsuccess: {}\n",
        result.status_code, result.success
    );
    if let Some(text) = &result.resolved_data {
        out.push('\n');
        out.push_str(text);
        out.push('\n');
    }
    out
}

/// Err when the resolution failed, so the process exits non-zero.
pub(crate) fn ensure_success(url: &str, result: &ResolveUrlResult) -> Result<()> {
    if !result.success {
        anyhow::bail!("resolving {} failed (status {})", url, result.status_code);
    }
    Ok(())
}

pub fn run_resolve(url: &str, json: bool) -> Result<()> {
    let registry = http_registry()?;
    let result = registry.resolve_url(url)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", format_result(&result));
    }
    ensure_success(url, &result)
}
