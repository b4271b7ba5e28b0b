use std::io::ErrorKind;
use std::path::Path;
use std::path::PathBuf;

use toml_edit::DocumentMut;
use toml_edit::Item as TomlItem;
use toml_edit::value;

use crate::atomic_write::write_atomic_text;

const START_FULLSCREEN_KEY: &str = "start_fullscreen";
const PEOPLE_FILE_KEY: &str = "people_file";

/// `~/.chat-compose/config.toml`, read and updated in place so user comments survive.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn new_default() -> anyhow::Result<Self> {
        let Some(home) = dirs::home_dir() else {
            anyhow::bail!("cannot determine home directory for config path");
        };
        Ok(Self::new(default_config_path(&home)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the compose box starts out fullscreen. Defaults to `false`.
    pub fn start_fullscreen(&self) -> anyhow::Result<bool> {
        let Some(content) = read_document_string(&self.path)? else {
            return Ok(false);
        };

        let parsed = match content.parse::<DocumentMut>() {
            Ok(doc) => doc
                .get(START_FULLSCREEN_KEY)
                .and_then(TomlItem::as_value)
                .and_then(|v| v.as_bool()),
            Err(_) => match parse_top_level_fallback(&content, START_FULLSCREEN_KEY) {
                Some("true") => Some(true),
                Some("false") => Some(false),
                _ => None,
            },
        };

        Ok(parsed.unwrap_or(false))
    }

    /// Default people directory (JSON) used to resolve direct-message recipients.
    pub fn people_file(&self) -> anyhow::Result<Option<PathBuf>> {
        let Some(content) = read_document_string(&self.path)? else {
            return Ok(None);
        };

        let parsed = match content.parse::<DocumentMut>() {
            Ok(doc) => doc
                .get(PEOPLE_FILE_KEY)
                .and_then(TomlItem::as_value)
                .and_then(|v| v.as_str())
                .map(str::to_string),
            Err(_) => parse_top_level_fallback(&content, PEOPLE_FILE_KEY)
                .and_then(|token| token.strip_prefix('"'))
                .and_then(|token| token.strip_suffix('"'))
                .map(str::to_string),
        };

        Ok(parsed.filter(|path| !path.is_empty()).map(PathBuf::from))
    }

    pub fn set_start_fullscreen(&self, fullscreen: bool) -> anyhow::Result<()> {
        let content = read_document_string(&self.path)?.unwrap_or_default();

        let updated = match content.parse::<DocumentMut>() {
            Ok(mut doc) => {
                doc[START_FULLSCREEN_KEY] = value(fullscreen);
                doc.to_string()
            }
            Err(_) => append_top_level_fallback(&content, fullscreen),
        };

        write_atomic_text(&self.path, &updated)
    }
}

fn default_config_path(home: &Path) -> PathBuf {
    home.join(".chat-compose").join("config.toml")
}

/// Find `key = value` before the first table header of a document `toml_edit` rejected and
/// return the first whitespace-separated token of the value.
fn parse_top_level_fallback<'a>(contents: &'a str, key: &str) -> Option<&'a str> {
    let mut result = None;
    for line in contents.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with('[') {
            break;
        }
        let Some(line) = strip_toml_comment(trimmed) else {
            continue;
        };
        let Some((k, v)) = line.split_once('=') else {
            continue;
        };
        if k.trim() == key {
            result = v.split_whitespace().next();
        }
    }
    result
}

fn strip_toml_comment(line: &str) -> Option<&str> {
    let line = line.split_once('#').map_or(line, |(head, _)| head).trim();
    if line.is_empty() { None } else { Some(line) }
}

/// Prepend the key so it stays top-level even when the broken document has tables.
fn append_top_level_fallback(existing: &str, fullscreen: bool) -> String {
    let mut out = format!("{START_FULLSCREEN_KEY} = {fullscreen}\n");
    for line in existing.lines() {
        let is_old_entry = strip_toml_comment(line.trim_start())
            .and_then(|l| l.split_once('='))
            .is_some_and(|(k, _)| k.trim() == START_FULLSCREEN_KEY);
        if !is_old_entry {
            out.push_str(line);
            out.push('\n');
        }
    }
    out
}

fn read_document_string(path: &Path) -> anyhow::Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => Err(anyhow::Error::new(err).context("read config.toml")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_file_uses_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = ConfigStore::new(dir.path().join("config.toml"));
        assert!(!store.start_fullscreen().expect("read flag"));
        assert_eq!(store.people_file().expect("read people file"), None);
    }

    #[test]
    fn set_start_fullscreen_preserves_comments() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("config.toml");
        std::fs::create_dir_all(dir.path().join("nested")).expect("create dir");
        std::fs::write(
            &path,
            r#"# top comment
people_file = "/tmp/people.json" # keep me

[other]
key = 1
"#,
        )
        .expect("write config");

        let store = ConfigStore::new(path.clone());
        store.set_start_fullscreen(true).expect("set flag");

        let updated = std::fs::read_to_string(&path).expect("read updated");
        assert!(updated.contains("# top comment"));
        assert!(updated.contains("# keep me"));
        assert!(updated.contains("[other]"));
        assert!(store.start_fullscreen().expect("read flag"));
        assert_eq!(
            store.people_file().expect("read people file"),
            Some(PathBuf::from("/tmp/people.json"))
        );

        store.set_start_fullscreen(false).expect("clear flag");
        assert!(!store.start_fullscreen().expect("read flag"));
    }

    #[test]
    fn writes_into_missing_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = ConfigStore::new(dir.path().join("a").join("config.toml"));
        store.set_start_fullscreen(true).expect("set flag");
        assert!(store.start_fullscreen().expect("read flag"));
    }

    #[test]
    fn malformed_toml_falls_back_to_line_parsing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "start_fullscreen = true\npeople_file = \"/p.json\"\n[broken\n")
            .expect("write config");

        let store = ConfigStore::new(path.clone());
        assert!(store.start_fullscreen().expect("read flag"));
        assert_eq!(
            store.people_file().expect("read people file"),
            Some(PathBuf::from("/p.json"))
        );

        store.set_start_fullscreen(false).expect("set flag");
        let updated = std::fs::read_to_string(&path).expect("read updated");
        assert!(updated.starts_with("start_fullscreen = false\n"));
        assert!(updated.contains("[broken"));
        assert!(!store.start_fullscreen().expect("read flag"));
    }
}
