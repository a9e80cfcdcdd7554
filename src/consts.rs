/// Timestamp layout stored in the track file: "2025-01-15 09:30:00"
pub(crate) const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Pseudo tag that makes `show` report every tag in the store
pub(crate) const ALL_TAGS: &str = "all";

/// Store file name, relative to the home directory
pub(crate) const STORE_FILE_NAME: &str = ".track.toml";
