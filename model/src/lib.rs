pub mod base_types;
pub mod config;
pub mod error;
pub mod rolling_stock;
pub mod train;

pub use train::Train;
