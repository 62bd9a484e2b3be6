/// Modifier keys held during a key press.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn any(self) -> bool {
        self.shift || self.ctrl || self.alt || self.meta
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum EditMode {
    #[default]
    Display,
    Editing {
        buffer: String,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditOutcome {
    /// Nothing changed.
    Ignored,
    /// Entered editing with the buffer seeded from the note.
    Started,
    /// Left editing; carries the trimmed text to store on the note.
    Committed(String),
}

/// Display/editing state of one rendered note.
///
/// Editing is only left by committing: focus loss, or Enter without
/// modifiers. There is no cancel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditSession {
    mode: EditMode,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> &EditMode {
        &self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, EditMode::Editing { .. })
    }

    /// The delete affordance is hidden while editing.
    pub fn shows_delete(&self) -> bool {
        !self.is_editing()
    }

    pub fn buffer(&self) -> Option<&str> {
        match &self.mode {
            EditMode::Editing { buffer } => Some(buffer),
            EditMode::Display => None,
        }
    }

    /// Double-activate gesture. Seeds the buffer with the note's current text.
    pub fn begin(&mut self, current_text: &str) -> EditOutcome {
        if self.is_editing() {
            return EditOutcome::Ignored;
        }
        self.mode = EditMode::Editing {
            buffer: current_text.to_string(),
        };
        EditOutcome::Started
    }

    pub fn input(&mut self, text: &str) -> EditOutcome {
        match &mut self.mode {
            EditMode::Editing { buffer } => {
                *buffer = text.to_string();
                EditOutcome::Ignored
            }
            EditMode::Display => EditOutcome::Ignored,
        }
    }

    pub fn blur(&mut self) -> EditOutcome {
        self.commit()
    }

    pub fn key_down(&mut self, key: &str, modifiers: Modifiers) -> EditOutcome {
        if key == "Enter" && !modifiers.any() {
            return self.commit();
        }
        EditOutcome::Ignored
    }

    fn commit(&mut self) -> EditOutcome {
        match std::mem::take(&mut self.mode) {
            EditMode::Editing { buffer } => EditOutcome::Committed(buffer.trim().to_string()),
            EditMode::Display => EditOutcome::Ignored,
        }
    }
}
