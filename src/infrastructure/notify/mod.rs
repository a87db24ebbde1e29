pub mod log;
pub mod memory;

pub use log::LogNotifier;
pub use memory::{MemoryNotifier, Notification};
