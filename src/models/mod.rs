use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use strum::IntoEnumIterator;

/// Background color of a note.
///
/// The persisted form is the CSS class name (`note-yellow`, ...), so stored
/// boards stay readable by the plain page script this widget replaces.
/// Adding a variant here is all it takes to widen the palette.
#[derive(
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Default,
    strum::EnumIter,
    strum::IntoStaticStr,
    strum::EnumString,
)]
pub enum NoteColor {
    #[default]
    #[serde(rename = "note-yellow")]
    #[strum(serialize = "note-yellow")]
    Yellow,

    #[serde(rename = "note-blue")]
    #[strum(serialize = "note-blue")]
    Blue,

    #[serde(rename = "note-pink")]
    #[strum(serialize = "note-pink")]
    Pink,

    #[serde(rename = "note-green")]
    #[strum(serialize = "note-green")]
    Green,
}

impl NoteColor {
    pub fn palette() -> Vec<NoteColor> {
        NoteColor::iter().collect()
    }

    /// Persisted identifier, also used as the marker class on the rendered note.
    pub fn class_name(self) -> &'static str {
        self.into()
    }

    pub fn from_class_name(name: &str) -> Option<NoteColor> {
        name.parse().ok()
    }

    /// Tailwind classes for the note surface.
    pub(crate) fn surface_classes(self) -> &'static str {
        match self {
            NoteColor::Yellow => "bg-yellow-200 text-yellow-950",
            NoteColor::Blue => "bg-sky-200 text-sky-950",
            NoteColor::Pink => "bg-pink-200 text-pink-950",
            NoteColor::Green => "bg-green-200 text-green-950",
        }
    }
}

/// Picks a palette entry uniformly at random.
pub fn assign_random_color() -> NoteColor {
    NoteColor::palette()
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or_default()
}

/// A note as persisted: exactly `{text, color}`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Note {
    pub text: String,
    pub color: NoteColor,
}

impl Note {
    pub fn new(text: impl Into<String>, color: NoteColor) -> Self {
        Self {
            text: text.into(),
            color,
        }
    }
}

/// Runtime-only handle for a note held by the board.
///
/// Never persisted; rendered elements are keyed by it so a stale element can
/// not silently address a different note after the list shifts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoteId(u64);

static NEXT_NOTE_ID: AtomicU64 = AtomicU64::new(1);

impl NoteId {
    pub(crate) fn next() -> Self {
        Self(NEXT_NOTE_ID.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for NoteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "note-{}", self.0)
    }
}

/// A note together with its runtime id, as the board and the UI see it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoteEntry {
    pub id: NoteId,
    pub note: Note,
}

impl NoteEntry {
    pub(crate) fn new(note: Note) -> Self {
        Self {
            id: NoteId::next(),
            note,
        }
    }
}
