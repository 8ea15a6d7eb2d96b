use crate::error::Result;
use crate::github::PrLister;
use crate::notes::{PrEntryProcessor, ReleaseNotesPrinter};
use log::info;

/// Drives lister → processor → printer
pub struct NotesGenerator<L: PrLister> {
    lister: L,
    processor: PrEntryProcessor,
    printer: ReleaseNotesPrinter,
}

impl<L: PrLister> NotesGenerator<L> {
    pub fn new(lister: L, processor: PrEntryProcessor, printer: ReleaseNotesPrinter) -> Self {
        NotesGenerator {
            lister,
            processor,
            printer,
        }
    }

    /// List every PR, process it and return the rendered document.
    ///
    /// A listing failure returns the error and renders nothing.
    pub fn run(mut self) -> Result<String> {
        let prs = self.lister.list_prs()?;
        info!("Processing {} pull requests", prs.len());

        for pr in &prs {
            let note = self.processor.process(pr);
            self.printer.add(note);
        }

        Ok(self.printer.print())
    }
}
