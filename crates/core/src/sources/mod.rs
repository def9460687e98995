mod document_symbol;
mod references;

pub use document_symbol::DocumentSymbolSource;
pub use references::ReferencesSource;
