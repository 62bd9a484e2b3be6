use crate::models::NoteId;
use thiserror::Error;

/// Errors raised by the note board and the theme preference.
#[derive(Debug, Error)]
pub enum NotesError {
    /// The persisted `notes` value exists but is not a JSON array of notes.
    #[error("Stored notes are malformed: {0}")]
    MalformedStore(#[from] serde_json::Error),

    /// A positional operation targeted a note that is not on the board.
    #[error("No note at position {index} (board has {len})")]
    OutOfRange { index: usize, len: usize },

    /// A rendered element referred to a note that has since been removed.
    #[error("Note not found: {0}")]
    UnknownNote(NoteId),

    /// The board could not be encoded; nothing was written.
    #[error("Could not encode notes: {0}")]
    Encode(String),

    /// The key-value store rejected a read or write.
    #[error("Storage error: {0}")]
    Storage(String),
}

pub type NotesResult<T> = Result<T, NotesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message() {
        let e = NotesError::OutOfRange { index: 3, len: 2 };
        assert_eq!(e.to_string(), "No note at position 3 (board has 2)");
    }

    #[test]
    fn test_malformed_from_serde_json() {
        let err = serde_json::from_str::<Vec<u8>>("{").expect_err("should not parse");
        let e: NotesError = err.into();
        assert!(matches!(e, NotesError::MalformedStore(_)));
        assert!(e.to_string().starts_with("Stored notes are malformed"));
    }
}
