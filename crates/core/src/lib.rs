pub mod config;
pub mod dispatch;
pub mod enrich;
pub mod error;
pub mod files;
pub mod flatten;
pub mod logging;
pub mod normalize;
pub mod ordering;
pub mod position;
pub mod sources;
pub mod util;

pub use config::{DocumentSymbolConfig, GatherSettings, ReferencesConfig};
pub use dispatch::{Batch, BatchStream, Collaborators, DispatchStats, Dispatcher, Source};
pub use error::{GatherError, Result};
pub use files::DiskFileAccess;
pub use logging::TracingReporter;
pub use position::{EditorParamsBuilder, EditorView};
pub use sources::{DocumentSymbolSource, ReferencesSource};
