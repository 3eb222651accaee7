// Rendering elements
pub mod native_picker;
pub mod web_select;

// Orchestrator; depends on both elements for its platform default
pub mod select_field;

pub use native_picker::*;
pub use select_field::*;
pub use web_select::*;
