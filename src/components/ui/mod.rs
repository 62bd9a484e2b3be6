pub mod button;
pub mod input;

// Re-export component symbols so callers can `use crate::components::ui::Button` etc.
pub use button::*;
pub use input::*;
