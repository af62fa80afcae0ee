pub mod app_state;
pub mod dtos;

// Re-export commonly used types
pub use app_state::*;
pub use dtos::*;
