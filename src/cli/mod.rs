//! Command workflow, decoupled from argument parsing

pub mod orchestration;

pub use orchestration::NotesCmd;
