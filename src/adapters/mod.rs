//! Live adapters behind the port traits.

pub mod console;
pub mod stdin_input;
pub mod walk_tree;
pub mod zip_archive;

pub use console::ConsoleReport;
pub use stdin_input::StdinInput;
pub use walk_tree::WalkTree;
pub use zip_archive::ZipExtractor;
