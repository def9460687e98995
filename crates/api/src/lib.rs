pub mod editor;
pub mod error;
pub mod host;
pub mod models;
pub mod session;

// Re-export commonly used types
pub use editor::{FileAccess, ParamsBuilder};
pub use error::{ApiError, ApiResult};
pub use host::{AcceptAll, ErrorReporter, ValidityPredicate};
pub use models::*;
pub use session::{ConnectionResolver, RequestTransport};
