// ============================================================================
// DOM MODULE - Thin helpers over web-sys
// ============================================================================

pub mod builder;
pub mod element;
pub mod events;

pub use builder::*;
pub use element::*;
pub use events::*;
