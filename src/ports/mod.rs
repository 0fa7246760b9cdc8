//! Port traits for the external boundaries of the tool.
//!
//! The comparison core talks to archives, the filesystem, the terminal
//! and the interactive user only through these traits, so tests can
//! substitute scripted or capturing doubles.

pub mod archive;
pub mod file_tree;
pub mod input;
pub mod report;

pub use archive::ArchiveExtractor;
pub use file_tree::FileTree;
pub use input::InputSource;
pub use report::ReportSink;
