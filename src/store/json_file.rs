//! Reference file-backed cassette store.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::model::Cassette;
use crate::ports::CassetteStore;
use crate::store::wire::CassetteFile;

/// Cassette store over a single JSON file.
///
/// Saves are all-or-nothing: content is written to a sibling temp file and
/// renamed over the target, so concurrent readers observe either the prior
/// or the new cassette, never a torn one. Multi-writer coordination on one
/// file is out of scope.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    create_if_missing: bool,
}

impl JsonFileStore {
    /// Creates a strict store: loading a missing file is an error.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), create_if_missing: false }
    }

    /// Creates a store whose `load` yields an empty cassette when the file
    /// does not exist; the file is created on first save.
    #[must_use]
    pub fn create_if_missing(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), create_if_missing: true }
    }

    /// The configured file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CassetteStore for JsonFileStore {
    fn load(&self) -> Result<Cassette, Error> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(err) if err.kind() == io::ErrorKind::NotFound && self.create_if_missing => {
                return Ok(Cassette::empty());
            }
            Err(err) => return Err(Error::CassetteLoad { source: Box::new(err) }),
        };
        let file: CassetteFile = serde_json::from_str(&json)
            .map_err(|err| Error::CassetteLoad { source: Box::new(err) })?;
        file.into_cassette()
            .map_err(|err| Error::CassetteLoad { source: Box::new(err) })
    }

    fn save(&self, cassette: &Cassette) -> Result<(), Error> {
        let json = serde_json::to_string_pretty(&CassetteFile::from_cassette(cassette))
            .map_err(|err| Error::CassetteSave { source: Box::new(err) })?;
        write_atomically(&self.path, json.as_bytes())
            .map_err(|err| Error::CassetteSave { source: Box::new(err) })
    }
}

/// Writes to a sibling temp file, then renames over the target.
fn write_atomically(path: &Path, contents: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut temp = path.as_os_str().to_owned();
    temp.push(".tmp");
    let temp = PathBuf::from(temp);
    fs::write(&temp, contents)?;
    fs::rename(&temp, path)
}
