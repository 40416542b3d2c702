//! Command implementations for the ijma CLI.
//!
//! Each command has its own module/file.

pub mod agree;
pub mod export;
pub mod stats;
pub mod validate;

// Re-export argument types for the parser
pub use agree::AgreeArgs;
pub use export::ExportArgs;
pub use stats::StatsArgs;
pub use validate::ValidateArgs;
