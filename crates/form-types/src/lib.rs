pub mod error;
pub mod platform;

// Option data and value resolution
pub mod value;
pub mod value_key;

// Handlers and interactive state
pub mod handler;
pub mod interactivity;

// Theme and styles
pub mod style;
pub mod styles;
pub mod theme;

// Orchestration and data-driven configuration
pub mod config;
pub mod select;

pub use error::*;
pub use platform::*;

pub use config::*;
pub use handler::*;
pub use interactivity::*;
pub use select::*;
pub use style::*;
pub use styles::*;
pub use theme::*;
pub use value::*;
pub use value_key::*;
