mod codec;
mod collection;

pub use codec::{deserialize, serialize};
pub use collection::NoteCollection;
