pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::{describe, error_page};
pub use layouts::map::map_layout;
