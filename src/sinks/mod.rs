//! Sink implementations

pub mod callback;
#[cfg(feature = "console")]
pub mod console;
pub mod file;
pub mod memory;
pub mod network;

pub use callback::FnSink;
#[cfg(feature = "console")]
pub use console::ConsoleSink;
pub use file::FileSink;
pub use memory::{MemoryRecords, MemorySink};
pub use network::NetworkSink;

pub use crate::core::Sink;
