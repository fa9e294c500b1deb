pub mod file;
pub mod line_format;
pub mod traits;

// Re-export
pub use file::FileTaskStore;
pub use line_format::CorruptLine;
pub use traits::TaskStore;
