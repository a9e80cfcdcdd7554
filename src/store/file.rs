use std::fs::{self, File};
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use super::Store;
use crate::error::AppError;

/// Read the store at `path`, creating an empty file when none exists yet.
pub(crate) fn load(path: &Path) -> Result<Store, AppError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            File::create(path).map_err(|source| AppError::Write {
                path: path.to_path_buf(),
                source,
            })?;
            debug!(path = %path.display(), "created empty track file");
            return Ok(Store::default());
        }
        Err(source) => {
            return Err(AppError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let store: Store = toml::from_str(&content).map_err(|source| AppError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), tags = store.len(), "loaded track file");
    Ok(store)
}

/// Overwrite `path` with the whole serialized store.
pub(crate) fn save(path: &Path, store: &Store) -> Result<(), AppError> {
    let content = toml::to_string(store)?;
    fs::write(path, content).map_err(|source| AppError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), tags = store.len(), "saved track file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Entry;

    fn sample_store() -> Store {
        let mut store = Store::default();
        store.push(
            "work",
            Entry {
                start: "2025-01-01 09:00:00".to_string(),
                stop: "2025-01-01 12:00:00".to_string(),
                notes: vec!["standup".to_string(), "review".to_string()],
            },
        );
        store.push("work", Entry::started_at("2025-01-01 13:00:00"));
        store.push("side project", Entry::started_at("2025-01-02 20:00:00"));
        store
    }

    #[test]
    fn missing_file_is_created_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".track.toml");

        let store = load(&path).unwrap();
        assert!(store.is_empty());
        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn empty_file_loads_as_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".track.toml");
        fs::write(&path, "").unwrap();

        assert!(load(&path).unwrap().is_empty());
    }

    #[test]
    fn corrupt_file_is_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".track.toml");
        fs::write(&path, "[[work]\nStart = ").unwrap();

        let err = load(&path).unwrap_err();
        assert!(matches!(err, AppError::Decode { .. }));
    }

    #[test]
    fn unreadable_path_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be read as a file
        let err = load(dir.path()).unwrap_err();
        assert!(matches!(err, AppError::Read { .. }));
    }

    #[test]
    fn save_then_load_returns_equal_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".track.toml");
        let store = sample_store();

        save(&path, &store).unwrap();
        assert_eq!(load(&path).unwrap(), store);
    }

    #[test]
    fn blank_fields_are_written_as_empty_strings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".track.toml");
        let mut store = Store::default();
        store.push("work", Entry::started_at("2025-01-01 09:00:00"));

        save(&path, &store).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("[[work]]"), "{content}");
        assert!(content.contains(r#"Start = "2025-01-01 09:00:00""#), "{content}");
        assert!(content.contains(r#"Stop = """#), "{content}");
        assert!(content.contains("Notes = []"), "{content}");
    }

    #[test]
    fn reads_existing_track_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".track.toml");
        fs::write(
            &path,
            r#"[[foo]]
  Start = "2025-03-01 08:00:00"
  Stop = "2025-03-01 09:30:00"
  Notes = ["first", "second"]

[[foo]]
  Start = "2025-03-02 08:00:00"
  Stop = ""
  Notes = []
"#,
        )
        .unwrap();

        let store = load(&path).unwrap();
        let entries = store.entries("foo");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].notes, vec!["first", "second"]);
        assert!(entries[1].is_open());
    }

    #[test]
    fn missing_fields_decode_as_blank() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".track.toml");
        fs::write(&path, "[[foo]]\nStart = \"2025-03-01 08:00:00\"\n").unwrap();

        let store = load(&path).unwrap();
        let entry = store.last("foo").unwrap();
        assert_eq!(entry.stop, "");
        assert!(entry.notes.is_empty());
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join(".track.toml");

        let err = save(&path, &sample_store()).unwrap_err();
        assert!(matches!(err, AppError::Write { .. }));
    }
}
