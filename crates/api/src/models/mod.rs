pub mod client;
pub mod kind;
pub mod record;
pub mod symbol;

pub use client::*;
pub use kind::*;
pub use record::*;
pub use symbol::*;
