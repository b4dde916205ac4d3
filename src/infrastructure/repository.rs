//! Note repository: CRUD and CSV exchange on top of the JSON store

use crate::domain::{Note, NoteUpdate};
use crate::error::{NotekeepError, Result};
use crate::infrastructure::store::{Record, Store};
use std::path::{Path, PathBuf};

/// Column order shared by CSV export and import
pub const CSV_HEADER: [&str; 4] = ["id", "title", "content", "timestamp"];

impl Record for Note {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Notes persisted in a single JSON file.
///
/// Every mutating call rewrites the whole file.
#[derive(Debug, Clone)]
pub struct NoteRepository {
    store: Store<Note>,
}

impl NoteRepository {
    /// Open the repository backed by `path` (missing file means no notes yet)
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        Ok(NoteRepository {
            store: Store::open(path)?,
        })
    }

    pub fn path(&self) -> &Path {
        self.store.path()
    }

    /// All notes in file order
    pub fn notes(&self) -> &[Note] {
        self.store.records()
    }

    pub fn find(&self, id: i64) -> Option<&Note> {
        self.store.find_by_id(id)
    }

    /// Add a note and persist.
    ///
    /// The id is the current note count plus one. After a deletion this can
    /// repeat an id that is still in use.
    pub fn add(&mut self, title: &str, content: &str) -> Result<Note> {
        let id = self.store.len() as i64 + 1;
        let note = Note::new(id, title, content);
        let snapshot = self.snapshot();
        self.store.push(note.clone());
        self.persist(snapshot)?;

        log::info!("added note {}", id);
        Ok(note)
    }

    /// Edit the first note with `id`, returning false when there is none.
    ///
    /// Absent or empty fields keep their value; the timestamp is always refreshed.
    pub fn edit(&mut self, id: i64, update: NoteUpdate) -> Result<bool> {
        let snapshot = self.snapshot();
        let Some(note) = self.store.find_by_id_mut(id) else {
            log::debug!("edit skipped, no note {}", id);
            return Ok(false);
        };

        note.apply(update);
        self.persist(snapshot)?;

        log::info!("edited note {}", id);
        Ok(true)
    }

    /// Remove every note with `id` and persist, returning how many were removed
    pub fn delete(&mut self, id: i64) -> Result<usize> {
        let snapshot = self.snapshot();
        let removed = self.store.retain(|note| note.id != id);
        self.persist(snapshot)?;

        log::info!("deleted {} note(s) with id {}", removed, id);
        Ok(removed)
    }

    /// Write all notes to a CSV file with an `id,title,content,timestamp` header
    pub fn export_to_csv(&self, path: &Path) -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(path)?;

        writer.write_record(CSV_HEADER)?;
        for note in self.store.records() {
            writer.serialize(note)?;
        }
        writer.flush()?;

        log::info!(
            "exported {} notes to {}",
            self.store.len(),
            path.display()
        );
        Ok(())
    }

    /// Append every row of a CSV file as a note, keeping the ids it carries.
    ///
    /// Nothing is appended unless the whole file parses.
    pub fn import_from_csv(&mut self, path: &Path) -> Result<usize> {
        if !path.exists() {
            return Err(NotekeepError::ImportFileNotFound(path.to_path_buf()));
        }

        let mut reader = csv::Reader::from_path(path)?;
        let imported = reader
            .deserialize()
            .collect::<std::result::Result<Vec<Note>, csv::Error>>()?;

        let count = imported.len();
        let snapshot = self.snapshot();
        self.store.records_mut().extend(imported);
        self.persist(snapshot)?;

        log::info!("imported {} notes from {}", count, path.display());
        Ok(count)
    }

    fn snapshot(&self) -> Vec<Note> {
        self.store.records().to_vec()
    }

    /// Save, restoring `snapshot` in memory when the write fails
    fn persist(&mut self, snapshot: Vec<Note>) -> Result<()> {
        if let Err(e) = self.store.save() {
            *self.store.records_mut() = snapshot;
            return Err(e);
        }
        Ok(())
    }
}
