pub mod error;
pub mod popup;

pub use error::error_page;
pub use popup::describe;
