use std::io::Write as _;
use std::path::Path;

use anyhow::Context;
use tempfile::NamedTempFile;

/// Replace `path` with `contents` (newline-terminated) via a temp file in the same directory, so
/// readers never observe a half-written config.
pub fn write_atomic_text(path: &Path, contents: &str) -> anyhow::Result<()> {
    let Some(parent) = path.parent() else {
        anyhow::bail!("invalid path for atomic write: {}", path.display());
    };
    std::fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;

    let mut tmp = NamedTempFile::new_in(parent).context("create temp file")?;
    tmp.write_all(contents.as_bytes()).context("write temp file")?;
    if !contents.ends_with('\n') {
        tmp.write_all(b"\n").context("write temp newline")?;
    }
    tmp.flush().context("flush temp file")?;

    tmp.persist(path).map_err(|err| {
        anyhow::Error::new(err.error).context(format!("persist file to {}", path.display()))
    })?;

    Ok(())
}
