//! JSONL history and atomic file writes

use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

fn ensure_parent(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

/// Append one record as a JSON line
pub fn append_jsonl<T: Serialize>(path: &Path, record: &T) -> std::io::Result<()> {
    ensure_parent(path)?;
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    let json = serde_json::to_string(record)?;
    writeln!(file, "{}", json)?;
    Ok(())
}

/// Read every well-formed record; a missing file reads as empty
pub fn read_jsonl<T: for<'de> Deserialize<'de>>(path: &Path) -> std::io::Result<Vec<T>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let reader = BufReader::new(File::open(path)?);
    let mut records = Vec::new();
    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str(&line) {
            Ok(record) => records.push(record),
            Err(e) => {
                tracing::warn!(path = %path.display(), line = lineno + 1, error = %e, "skipping malformed record")
            }
        }
    }
    Ok(records)
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("out"));
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write via a sibling temp file and rename, so readers never see a partial file
pub fn atomic_write(path: &Path, data: &[u8]) -> std::io::Result<()> {
    ensure_parent(path)?;
    let tmp = temp_path(path);
    std::fs::write(&tmp, data)?;
    std::fs::rename(tmp, path)?;
    Ok(())
}

/// Pretty-printed JSON with a trailing newline, written atomically
pub fn write_json_pretty<T: Serialize>(path: &Path, value: &T) -> std::io::Result<()> {
    let mut json = serde_json::to_vec_pretty(value)?;
    json.push(b'\n');
    atomic_write(path, &json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Row {
        day: String,
        count: u32,
    }

    #[test]
    fn test_jsonl_append_and_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history").join("runs.jsonl");

        let rows = vec![
            Row {
                day: "2024-05-01".to_string(),
                count: 3,
            },
            Row {
                day: "2024-05-02".to_string(),
                count: 9,
            },
        ];
        for row in &rows {
            append_jsonl(&path, row).unwrap();
        }

        let read: Vec<Row> = read_jsonl(&path).unwrap();
        assert_eq!(read, rows);
    }

    #[test]
    fn test_read_jsonl_skips_garbage() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("runs.jsonl");
        std::fs::write(
            &path,
            "{\"day\":\"a\",\"count\":1}\nnot json\n\n{\"day\":\"b\",\"count\":2}\n",
        )
        .unwrap();
        let read: Vec<Row> = read_jsonl(&path).unwrap();
        assert_eq!(read.len(), 2);
        assert_eq!(read[1].day, "b");
    }

    #[test]
    fn test_read_jsonl_missing_file() {
        let dir = TempDir::new().unwrap();
        let read: Vec<Row> = read_jsonl(&dir.path().join("nope.jsonl")).unwrap();
        assert!(read.is_empty());
    }

    #[test]
    fn test_atomic_write_replaces_and_cleans_up() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out").join("summary.json");

        atomic_write(&path, b"first").unwrap();
        atomic_write(&path, b"second").unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"second");
        assert!(!temp_path(&path).exists());
    }

    #[test]
    fn test_write_json_pretty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("row.json");
        let row = Row {
            day: "2024-05-01".to_string(),
            count: 7,
        };
        write_json_pretty(&path, &row).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.ends_with("}\n"));
        assert!(text.contains("\n  \"count\": 7"));
        let back: Row = serde_json::from_str(&text).unwrap();
        assert_eq!(back, row);
    }
}
