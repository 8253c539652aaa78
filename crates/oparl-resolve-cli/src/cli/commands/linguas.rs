//! `oparl-resolve linguas <root>` – list available translations.

use anyhow::Result;
use oparl_resolve_core::linguas;
use std::path::Path;

/// List form, e.g. `["de", "en"]`.
pub(crate) fn format_linguas(langs: &[String]) -> String {
    format!("{:?}", langs)
}

pub fn run_linguas(root: &Path) -> Result<()> {
    let langs = linguas::read_linguas(root)?;
    println!("{}", format_linguas(&langs));
    Ok(())
}
