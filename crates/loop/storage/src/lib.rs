//! Loop Profile Storage
//!
//! Sources of device profiles for the notification dispatcher.

mod json;
mod memory;
mod traits;

pub use json::JsonProfileStore;
pub use memory::MemoryProfileStore;
pub use traits::*;
