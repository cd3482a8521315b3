//! Content records
//!
//! Descriptive records rendered by the page views. All of them are defined
//! once at load time and never mutated.

pub mod award;
pub mod gallery;
pub mod menu;
pub mod review;
pub mod store_info;

// Re-exports
pub use award::*;
pub use gallery::*;
pub use menu::*;
pub use review::*;
pub use store_info::*;
