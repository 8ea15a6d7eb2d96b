//! Release notes pipeline: turn listed pull requests into a document

pub mod generator;
pub mod printer;
pub mod processor;

pub use generator::NotesGenerator;
pub use printer::ReleaseNotesPrinter;
pub use processor::PrEntryProcessor;
