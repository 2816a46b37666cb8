//! Bound input field
//!
//! The single-line search input the typeahead is bound to. Selections write
//! the chosen handle into it and raise a synthetic change notification so
//! hosts observe the update as if the user had typed it.

mod input_render;
mod input_state;

pub use input_render::render_input;
pub use input_state::{ChangeEvent, InputState};
