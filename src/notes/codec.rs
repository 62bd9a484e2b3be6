use crate::error::{NotesError, NotesResult};
use crate::models::Note;

/// Encodes the board as a JSON array of `{text, color}` objects, in order.
///
/// Strings and unit variants always encode, so this does not fail for
/// `Note`; the error is still surfaced so a caller never writes a
/// substitute value over the stored board.
pub fn serialize(notes: &[Note]) -> NotesResult<String> {
    serde_json::to_string(notes).map_err(|e| NotesError::Encode(e.to_string()))
}

/// Decodes a stored board.
///
/// An absent value (first run) and an empty string both mean "no notes".
/// Anything else must be a JSON array of notes with known colors.
pub fn deserialize(stored: Option<&str>) -> NotesResult<Vec<Note>> {
    match stored {
        None => Ok(Vec::new()),
        Some(s) if s.is_empty() => Ok(Vec::new()),
        Some(s) => Ok(serde_json::from_str::<Vec<Note>>(s)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NoteColor;

    #[test]
    fn test_serialize_empty() {
        assert_eq!(serialize(&[]).expect("encode"), "[]");
    }

    #[test]
    fn test_serialize_wire_format() {
        let notes = vec![
            Note::new("a", NoteColor::Yellow),
            Note::new("b", NoteColor::Green),
        ];
        assert_eq!(
            serialize(&notes).expect("encode"),
            r#"[{"text":"a","color":"note-yellow"},{"text":"b","color":"note-green"}]"#
        );
    }

    #[test]
    fn test_round_trip_keeps_order_and_text() {
        let notes = vec![
            Note::new("Buy milk", NoteColor::Blue),
            Note::new("quote \" and \\ backslash", NoteColor::Pink),
            Note::new("línea con acentos ✓", NoteColor::Green),
            Note::new("x marks the spot", NoteColor::Yellow),
            Note::new("", NoteColor::Blue),
            Note::new("Buy milk", NoteColor::Blue),
        ];
        let json = serialize(&notes).expect("encode");
        let back = deserialize(Some(&json)).expect("round trip should parse");
        assert_eq!(back, notes);
    }

    #[test]
    fn test_absent_and_empty_mean_no_notes() {
        assert!(deserialize(None).expect("absent").is_empty());
        assert!(deserialize(Some("")).expect("empty").is_empty());
        assert!(deserialize(Some("[]")).expect("empty array").is_empty());
    }

    #[test]
    fn test_malformed_values() {
        for bad in [
            "not json",
            "{",
            "null",
            r#"{"text":"a","color":"note-blue"}"#,
            r#"[{"text":"a"}]"#,
            r#"[{"color":"note-blue"}]"#,
            r#"[{"text":"a","color":"note-purple"}]"#,
            r#"[{"text":1,"color":"note-blue"}]"#,
        ] {
            let err = deserialize(Some(bad)).expect_err(bad);
            assert!(matches!(err, NotesError::MalformedStore(_)), "{bad}");
        }
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let notes = deserialize(Some(r#"[{"text":"a","color":"note-pink","pinned":true}]"#))
            .expect("extra fields should parse");
        assert_eq!(notes, vec![Note::new("a", NoteColor::Pink)]);
    }
}
