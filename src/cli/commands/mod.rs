//! Command implementations

mod filter;

pub use filter::filter;
