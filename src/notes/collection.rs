use super::codec::{deserialize, serialize};
use crate::config::WidgetConfig;
use crate::error::{NotesError, NotesResult};
use crate::models::{assign_random_color, Note, NoteEntry, NoteId};
use crate::storage::KeyValueStore;
use crate::util::is_blank;

/// Ordered notes plus the store they are mirrored into.
///
/// The in-memory list is the source of truth. Every successful mutation
/// rewrites the whole list under `key`; failed or no-op calls never write.
#[derive(Clone, Debug)]
pub struct NoteCollection<S: KeyValueStore> {
    entries: Vec<NoteEntry>,
    store: S,
    key: String,
}

impl<S: KeyValueStore> NoteCollection<S> {
    /// An empty board that will persist under `config.notes_key`. Reads nothing.
    pub fn empty(store: S, config: &WidgetConfig) -> Self {
        Self {
            entries: Vec::new(),
            store,
            key: config.notes_key.clone(),
        }
    }

    /// Reads the stored board once.
    ///
    /// A malformed value is either reported or, with
    /// `recover_malformed_store`, logged and replaced by an empty board.
    pub fn load(store: S, config: &WidgetConfig) -> NotesResult<Self> {
        let mut collection = Self::empty(store, config);
        let stored = collection.store.get(&collection.key)?;

        let notes = match deserialize(stored.as_deref()) {
            Ok(notes) => notes,
            Err(e @ NotesError::MalformedStore(_)) if config.recover_malformed_store => {
                log::error!("starting with an empty board: {e}");
                Vec::new()
            }
            Err(e) => return Err(e),
        };

        log::info!("loaded {} note(s) from '{}'", notes.len(), collection.key);
        collection.entries = notes.into_iter().map(NoteEntry::new).collect();
        Ok(collection)
    }

    /// Appends a note with trimmed `text` and a random color.
    ///
    /// Blank text is a no-op: `Ok(None)`, nothing written.
    pub fn add(&mut self, text: &str) -> NotesResult<Option<Note>> {
        if is_blank(text) {
            return Ok(None);
        }

        let note = Note::new(text.trim(), assign_random_color());
        self.entries.push(NoteEntry::new(note.clone()));
        self.persist()?;
        Ok(Some(note))
    }

    pub fn remove(&mut self, index: usize) -> NotesResult<Note> {
        self.check_index(index)?;
        let removed = self.entries.remove(index);
        self.persist()?;
        Ok(removed.note)
    }

    /// Replaces the text of the note at `index` with `text.trim()`.
    ///
    /// Empty text is stored as-is; the note is not deleted. Color is kept.
    pub fn update_text(&mut self, index: usize, text: &str) -> NotesResult<()> {
        self.check_index(index)?;
        self.entries[index].note.text = text.trim().to_string();
        self.persist()
    }

    pub fn position_of(&self, id: NoteId) -> NotesResult<usize> {
        self.entries
            .iter()
            .position(|e| e.id == id)
            .ok_or(NotesError::UnknownNote(id))
    }

    pub fn remove_by_id(&mut self, id: NoteId) -> NotesResult<Note> {
        let index = self.position_of(id)?;
        self.remove(index)
    }

    pub fn update_text_by_id(&mut self, id: NoteId, text: &str) -> NotesResult<()> {
        let index = self.position_of(id)?;
        self.update_text(index, text)
    }

    pub fn entries(&self) -> &[NoteEntry] {
        &self.entries
    }

    pub fn notes(&self) -> Vec<Note> {
        self.entries.iter().map(|e| e.note.clone()).collect()
    }

    pub fn get(&self, index: usize) -> Option<&Note> {
        self.entries.get(index).map(|e| &e.note)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn serialize(&self) -> NotesResult<String> {
        serialize(&self.notes())
    }

    fn check_index(&self, index: usize) -> NotesResult<()> {
        if index >= self.entries.len() {
            return Err(NotesError::OutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        Ok(())
    }

    fn persist(&self) -> NotesResult<()> {
        self.serialize()
            .and_then(|json| self.store.set(&self.key, &json))
            .inspect_err(|e| {
                log::warn!("failed to persist {} note(s): {e}", self.entries.len());
            })
    }
}
