//! Sticky-note board: notes with a random color, edited in place, persisted
//! to `localStorage` together with a light/dark preference.

mod app;
mod components;
mod pages;
mod state;

pub mod config;
pub mod editor;
pub mod error;
pub mod logging;
pub mod models;
pub mod notes;
pub mod storage;
pub mod theme;
pub mod util;

pub use app::App;
pub use config::WidgetConfig;
pub use editor::{EditMode, EditOutcome, EditSession, Modifiers};
pub use error::{NotesError, NotesResult};
pub use models::{assign_random_color, Note, NoteColor, NoteEntry, NoteId};
pub use notes::NoteCollection;
pub use storage::{KeyValueStore, LocalStorage, MemoryStore};
pub use theme::{Theme, ThemePreference};
pub use util::is_blank;

use leptos::prelude::*;

// Needed for `#[wasm_bindgen(start)]` on the wasm entrypoint.
#[cfg(all(target_arch = "wasm32", not(test)))]
use wasm_bindgen::prelude::wasm_bindgen;

// WASM-only tests (run with `cargo test --target wasm32-unknown-unknown` + wasm-bindgen-test-runner)
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const TEST_NOTES_KEY: &str = "notewall_test_notes";
    const TEST_THEME_KEY: &str = "notewall_test_theme";

    fn config() -> WidgetConfig {
        WidgetConfig::default()
            .with_notes_key(TEST_NOTES_KEY)
            .with_theme_key(TEST_THEME_KEY)
    }

    #[wasm_bindgen_test]
    fn test_logging_init_twice() {
        logging::init(log::Level::Info);
        logging::init(log::Level::Debug);
        log::info!("console logger installed");
    }

    #[wasm_bindgen_test]
    fn test_local_storage_roundtrip() {
        LocalStorage::remove(TEST_NOTES_KEY);
        LocalStorage
            .set(TEST_NOTES_KEY, "[]")
            .expect("localStorage should accept writes");
        let v = LocalStorage.get(TEST_NOTES_KEY).expect("read");
        assert_eq!(v.as_deref(), Some("[]"));
        LocalStorage::remove(TEST_NOTES_KEY);
        assert!(LocalStorage.get(TEST_NOTES_KEY).expect("read").is_none());
    }

    #[wasm_bindgen_test]
    fn test_board_survives_reload() {
        LocalStorage::remove(TEST_NOTES_KEY);

        let mut board = NoteCollection::load(LocalStorage, &config()).expect("load");
        board.add("Buy milk").expect("add");
        board.add("Call mom").expect("add");
        board.remove(0).expect("remove");

        let reloaded = NoteCollection::load(LocalStorage, &config()).expect("reload");
        assert_eq!(reloaded.notes(), board.notes());
        assert_eq!(reloaded.notes()[0].text, "Call mom");

        LocalStorage::remove(TEST_NOTES_KEY);
    }

    #[wasm_bindgen_test]
    fn test_theme_survives_reload() {
        LocalStorage::remove(TEST_THEME_KEY);

        let mut theme = ThemePreference::load_initial(LocalStorage, &config());
        assert!(!theme.is_dark());
        assert!(theme.toggle().expect("toggle"));

        let reloaded = ThemePreference::load_initial(LocalStorage, &config());
        assert_eq!(reloaded.theme(), Theme::Dark);

        LocalStorage::remove(TEST_THEME_KEY);
    }
}

// Only register the WASM start function for normal builds (not for tests),
// otherwise wasm-bindgen-test will end up with multiple entry symbols.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() {
    console_error_panic_hook::set_once();
    logging::init(log::Level::Info);
    mount_to_body(App);
}
