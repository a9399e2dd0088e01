pub mod format;
pub mod listing;

pub use listing::{GougingRule, HomeType, ListingProperties};
