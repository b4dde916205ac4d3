//! JSON-backed record store

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// A record that can live in a [`Store`], identified by an integer id.
pub trait Record: Serialize + DeserializeOwned {
    fn id(&self) -> i64;
}

/// Ordered sequence of records persisted as a JSON array.
///
/// The whole sequence is held in memory and rewritten on every [`Store::save`].
#[derive(Debug, Clone)]
pub struct Store<R> {
    path: PathBuf,
    records: Vec<R>,
}

impl<R: Record> Store<R> {
    /// Open the store at `path`, loading whatever it currently holds
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let records = Self::load(&path)?;
        Ok(Store { path, records })
    }

    /// Read all records from `path`.
    ///
    /// A missing file is an empty store; any other failure is returned.
    pub fn load(path: &Path) -> Result<Vec<R>> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("{} does not exist, starting empty", path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let records: Vec<R> = serde_json::from_str(&contents)?;
        log::debug!("loaded {} records from {}", records.len(), path.display());
        Ok(records)
    }

    /// Write every record back to the backing file.
    ///
    /// Output is UTF-8 with 4-space indentation and non-ASCII kept as is.
    /// The data is written to a temp file beside the target, then renamed into place.
    pub fn save(&self) -> Result<()> {
        let contents = to_json_pretty(&self.records)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_name = format!(
            "{}.notekeep-tmp-{}",
            self.path
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("notes.json"),
            std::process::id()
        );
        let tmp_path = self.path.with_file_name(tmp_name);

        // The target is replaced by the rename only; it is never removed first
        if let Err(e) = fs::write(&tmp_path, contents)
            .and_then(|()| fs::rename(&tmp_path, &self.path))
        {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }

        log::debug!(
            "saved {} records to {}",
            self.records.len(),
            self.path.display()
        );
        Ok(())
    }

    /// First record whose id equals `id`
    pub fn find_by_id(&self, id: i64) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn find_by_id_mut(&mut self, id: i64) -> Option<&mut R> {
        self.records.iter_mut().find(|r| r.id() == id)
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn records_mut(&mut self) -> &mut Vec<R> {
        &mut self.records
    }

    pub fn push(&mut self, record: R) {
        self.records.push(record);
    }

    /// Keep only records matching `keep`, returning how many were dropped
    pub fn retain<F>(&mut self, keep: F) -> usize
    where
        F: FnMut(&R) -> bool,
    {
        let before = self.records.len();
        self.records.retain(keep);
        before - self.records.len()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn to_json_pretty<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    Ok(buf)
}
