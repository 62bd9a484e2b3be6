use crate::config::WidgetConfig;
use crate::error::NotesError;
use crate::models::{NoteColor, NoteEntry, NoteId};
use crate::notes::NoteCollection;
use crate::storage::{BoardStore, LocalStorage, MemoryStore};
use crate::theme::{Theme, ThemePreference};
use crate::util::is_blank;
use leptos::prelude::*;

/// Loads the board from `store`.
///
/// When loading fails the board runs detached on a fresh in-memory store, so
/// the value that could not be read stays untouched in `store`.
pub(crate) fn open_board(
    store: BoardStore,
    config: &WidgetConfig,
) -> (NoteCollection<BoardStore>, Option<NotesError>) {
    match NoteCollection::load(store, config) {
        Ok(notes) => (notes, None),
        Err(e) => {
            log::error!("could not load notes, changes will not be saved: {e}");
            let detached = BoardStore::Memory(MemoryStore::new());
            (NoteCollection::empty(detached, config), Some(e))
        }
    }
}

#[derive(Clone, Copy)]
pub(crate) struct AppState {
    /// Source of truth for the board; the DOM is a projection of it.
    pub notes: RwSignal<NoteCollection<BoardStore>>,
    pub theme: RwSignal<ThemePreference<LocalStorage>>,

    /// Text in the "new note" field.
    pub draft: RwSignal<String>,

    /// Last failed action, shown under the composer.
    pub last_error: RwSignal<Option<String>>,
}

impl AppState {
    pub fn new() -> Self {
        let config = WidgetConfig::from_window();
        Self::with_config(&config)
    }

    pub fn with_config(config: &WidgetConfig) -> Self {
        let (notes, load_error) = open_board(BoardStore::Local(LocalStorage), config);
        let last_error = load_error.map(|e| e.to_string());
        let theme = ThemePreference::load_initial(LocalStorage, config);

        Self {
            notes: RwSignal::new(notes),
            theme: RwSignal::new(theme),
            draft: RwSignal::new(String::new()),
            last_error: RwSignal::new(last_error),
        }
    }

    /// Add-button enablement.
    pub fn can_add(&self) -> bool {
        self.draft.with(|d| !is_blank(d))
    }

    pub fn entries(&self) -> Vec<NoteEntry> {
        self.notes.with(|c| c.entries().to_vec())
    }

    pub fn note_text(&self, id: NoteId) -> Option<String> {
        self.notes.with(|c| {
            c.position_of(id)
                .ok()
                .and_then(|i| c.get(i))
                .map(|n| n.text.clone())
        })
    }

    pub fn note_text_untracked(&self, id: NoteId) -> Option<String> {
        self.notes.with_untracked(|c| {
            c.position_of(id)
                .ok()
                .and_then(|i| c.get(i))
                .map(|n| n.text.clone())
        })
    }

    pub fn note_color(&self, id: NoteId) -> Option<NoteColor> {
        self.notes.with_untracked(|c| {
            c.position_of(id)
                .ok()
                .and_then(|i| c.get(i))
                .map(|n| n.color)
        })
    }

    pub fn current_theme(&self) -> Theme {
        self.theme.with(|t| t.theme())
    }

    pub fn on_add_requested(&self) {
        let text = self.draft.get_untracked();
        let result = self.notes.try_update(|c| c.add(&text));
        match result {
            Some(Ok(Some(_))) => {
                self.draft.set(String::new());
                self.last_error.set(None);
            }
            Some(Ok(None)) | None => {}
            Some(Err(e)) => self.report(e),
        }
    }

    pub fn on_delete_requested(&self, id: NoteId) {
        if let Some(Err(e)) = self.notes.try_update(|c| c.remove_by_id(id)) {
            self.report(e);
        }
    }

    pub fn on_edit_committed(&self, id: NoteId, text: &str) {
        if let Some(Err(e)) = self.notes.try_update(|c| c.update_text_by_id(id, text)) {
            self.report(e);
        }
    }

    pub fn on_theme_toggle_requested(&self) {
        if let Some(Err(e)) = self.theme.try_update(|t| t.toggle()) {
            self.report(e);
        }
    }

    fn report(&self, e: NotesError) {
        log::warn!("{e}");
        self.last_error.set(Some(e.to_string()));
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy)]
pub(crate) struct AppContext(pub AppState);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notes::serialize;
    use crate::storage::{KeyValueStore, NOTES_KEY};

    const UNREADABLE: &str =
        r#"[{"text":"keep me","color":"note-yellow"},{"text":"x","color":"note-purple"}]"#;

    fn stored_notes(store: &MemoryStore) -> Option<String> {
        store.get(NOTES_KEY).expect("memory read never fails")
    }

    #[test]
    fn test_failed_load_keeps_stored_value() {
        let durable = MemoryStore::with_item(NOTES_KEY, UNREADABLE);
        let config = WidgetConfig {
            recover_malformed_store: false,
            ..WidgetConfig::default()
        };

        let (mut board, err) = open_board(BoardStore::Memory(durable.clone()), &config);
        assert!(matches!(err, Some(NotesError::MalformedStore(_))));
        assert!(board.is_empty());

        board.add("new").expect("detached add").expect("note created");
        board.update_text(0, "newer").expect("detached update");
        assert_eq!(board.len(), 1);
        assert_eq!(stored_notes(&durable).as_deref(), Some(UNREADABLE));
    }

    #[test]
    fn test_recovered_load_replaces_value_on_first_mutation() {
        let durable = MemoryStore::with_item(NOTES_KEY, UNREADABLE);

        let (mut board, err) =
            open_board(BoardStore::Memory(durable.clone()), &WidgetConfig::default());
        assert!(err.is_none());
        assert!(board.is_empty());
        assert_eq!(stored_notes(&durable).as_deref(), Some(UNREADABLE));

        let note = board.add("fresh").expect("add").expect("note created");
        assert_eq!(
            stored_notes(&durable),
            Some(serialize(&[note]).expect("encode"))
        );
    }

    #[test]
    fn test_loaded_board_writes_through() {
        let durable = MemoryStore::new();
        let (mut board, err) =
            open_board(BoardStore::Memory(durable.clone()), &WidgetConfig::default());
        assert!(err.is_none());

        board.add("saved").expect("add");
        board.add("   ").expect("blank add");
        let stored = crate::notes::deserialize(stored_notes(&durable).as_deref()).expect("parse");
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].text, "saved");
    }
}
