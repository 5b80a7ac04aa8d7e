//! Directory-backed key-value store.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io::ErrorKind;

use crate::task::ports::{KeyValueStore, StorageError, StorageResult};

const VALUE_EXTENSION: &str = "json";
const STAGING_EXTENSION: &str = "json.tmp";

/// Key-value store keeping one UTF-8 file per key inside a directory.
///
/// Key `k` is stored as `k.json`. Writes go to a staging file first and are
/// renamed into place, so a reader sees either the old or the new value.
#[derive(Debug)]
pub struct FileKeyValueStore {
    dir: Dir,
}

impl FileKeyValueStore {
    /// Opens the store rooted at `path`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] when the directory cannot be created or
    /// opened.
    pub fn open(path: &Utf8Path) -> StorageResult<Self> {
        Dir::create_ambient_dir_all(path, ambient_authority())?;
        let dir = Dir::open_ambient_dir(path, ambient_authority())?;
        Ok(Self { dir })
    }

    /// Wraps an already opened directory capability.
    #[must_use]
    pub const fn from_dir(dir: Dir) -> Self {
        Self { dir }
    }
}

fn file_name(key: &str, extension: &str) -> StorageResult<String> {
    let is_valid = !key.is_empty()
        && key != "."
        && key != ".."
        && !key.chars().any(|ch| matches!(ch, '/' | '\\' | '\0'));
    if !is_valid {
        return Err(StorageError::InvalidKey(key.to_owned()));
    }
    Ok(format!("{key}.{extension}"))
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let name = file_name(key, VALUE_EXTENSION)?;
        match self.dir.read_to_string(&name) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let name = file_name(key, VALUE_EXTENSION)?;
        let staging = file_name(key, STAGING_EXTENSION)?;
        self.dir.write(&staging, value)?;
        self.dir.rename(&staging, &self.dir, &name)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let name = file_name(key, VALUE_EXTENSION)?;
        match self.dir.remove_file(&name) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
