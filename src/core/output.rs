//! JSON output sink
//!
//! Every document written through [`OutputWriter`] is stamped with a
//! `last_updated` UTC timestamp and pretty-printed. Directories are created
//! on demand.

use chrono::{SecondsFormat, Utc};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::{
    fs,
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};
use tracing::{debug, info};

use crate::Result;

/// Writes scraper output under a root directory.
#[derive(Debug, Clone)]
pub struct OutputWriter {
    root: PathBuf,
}

impl OutputWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve `filename` under the root, or under `root/subdir`.
    pub fn path_for(&self, filename: &str, subdir: Option<&str>) -> PathBuf {
        match subdir {
            Some(dir) => self.root.join(dir).join(filename),
            None => self.root.join(filename),
        }
    }

    /// Serialize `data`, add `last_updated`, and write it as pretty JSON.
    ///
    /// Returns the path that was written.
    pub fn write_json<T: Serialize>(
        &self,
        filename: &str,
        data: &T,
        subdir: Option<&str>,
    ) -> Result<PathBuf> {
        let mut doc = serde_json::to_value(data)?;
        if let Value::Object(map) = &mut doc {
            map.insert(
                "last_updated".to_string(),
                Value::String(Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)),
            );
        }

        let path = self.path_for(filename, subdir);
        write_string(&path, &serde_json::to_string_pretty(&doc)?)?;
        info!("Wrote {}", path.display());
        Ok(path)
    }

    /// Read a previously written document. `Ok(None)` when the file does not exist.
    pub fn read_json<T: DeserializeOwned>(&self, filename: &str) -> Result<Option<T>> {
        let path = self.path_for(filename, None);
        let Some(contents) = read_to_string_if_exists(&path)? else {
            debug!("No existing output at {}", path.display());
            return Ok(None);
        };
        Ok(Some(serde_json::from_str(&contents)?))
    }
}

/// Read a file into a String. `Ok(None)` only when the file does not exist;
/// any other failure (permissions, a directory, invalid UTF-8) is an error.
pub fn read_to_string_if_exists(path: &Path) -> std::io::Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(s) => Ok(Some(s)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

/// Write a string to file, creating parent directories
pub fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut f = fs::File::create(path)?;
    f.write_all(contents.as_bytes())
}

/// Lowercase a tournament name and collapse every run of characters outside
/// `[a-z0-9]` into a single `-`.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;
    for c in name.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// `{event_id}_{slug}.json`
pub fn tournament_filename(event_id: &str, event_name: &str) -> String {
    format!("{}_{}.json", event_id, slugify(event_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("The Sentry"), "the-sentry");
        assert_eq!(
            slugify("AT&T Pebble Beach Pro-Am"),
            "at-t-pebble-beach-pro-am"
        );
        assert_eq!(slugify("  --Masters Tournament!! "), "masters-tournament");
        assert_eq!(slugify("Genesis Invitational 2026"), "genesis-invitational-2026");
        assert_eq!(slugify("Pro-Am São Paulo"), "pro-am-s-o-paulo");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_tournament_filename() {
        assert_eq!(
            tournament_filename("401703489", "The Sentry"),
            "401703489_the-sentry.json"
        );
    }

    #[test]
    fn test_write_json_adds_last_updated() {
        let dir = tempdir().unwrap();
        let writer = OutputWriter::new(dir.path());

        let path = writer
            .write_json("schedule.json", &json!({"season": 2026, "events": []}), None)
            .unwrap();

        assert_eq!(path, dir.path().join("schedule.json"));
        let written: Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["season"], 2026);
        assert!(written["last_updated"].as_str().unwrap().ends_with('Z'));
    }

    #[test]
    fn test_write_json_creates_subdir() {
        let dir = tempdir().unwrap();
        let writer = OutputWriter::new(dir.path().join("output"));

        let path = writer
            .write_json("1_event.json", &json!({"event_id": "1"}), Some("tournament_results"))
            .unwrap();

        assert!(path.exists());
        assert!(path.starts_with(dir.path().join("output").join("tournament_results")));
    }

    #[test]
    fn test_write_json_preserves_unicode() {
        let dir = tempdir().unwrap();
        let writer = OutputWriter::new(dir.path());

        let path = writer
            .write_json("names.json", &json!({"name": "Ludvig Åberg"}), None)
            .unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("Ludvig Åberg"));
    }

    #[test]
    fn test_read_json_missing_file_is_none() {
        let dir = tempdir().unwrap();
        let writer = OutputWriter::new(dir.path());

        let result: Option<Value> = writer.read_json("missing.json").unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_read_json_round_trips_written_document() {
        let dir = tempdir().unwrap();
        let writer = OutputWriter::new(dir.path());
        writer
            .write_json("doc.json", &json!({"standings": [1, 2]}), None)
            .unwrap();

        let doc: Value = writer.read_json("doc.json").unwrap().unwrap();
        assert_eq!(doc["standings"], json!([1, 2]));
    }

    #[test]
    fn test_read_json_invalid_contents_is_error() {
        let dir = tempdir().unwrap();
        write_string(&dir.path().join("bad.json"), "{ not json").unwrap();
        let writer = OutputWriter::new(dir.path());

        let result: Result<Option<Value>> = writer.read_json("bad.json");
        assert!(result.is_err());
    }

    #[test]
    fn test_read_json_unreadable_file_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("standings.json");
        fs::write(&path, [b'{', 0xff, b'}']).unwrap();
        let writer = OutputWriter::new(dir.path());

        let result: Result<Option<Value>> = writer.read_json("standings.json");
        assert!(matches!(result, Err(crate::EspnError::Io(_))));
    }

    #[test]
    fn test_read_json_directory_is_error() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("standings.json")).unwrap();
        let writer = OutputWriter::new(dir.path());

        let result: Result<Option<Value>> = writer.read_json("standings.json");
        assert!(result.is_err());
    }

    #[test]
    fn test_read_to_string_if_exists() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("present.txt");
        write_string(&path, "hello").unwrap();

        assert_eq!(read_to_string_if_exists(&path).unwrap().as_deref(), Some("hello"));
        assert!(read_to_string_if_exists(&dir.path().join("absent.txt")).unwrap().is_none());
    }
}
