pub mod api;
pub mod config;
pub mod error;
pub mod format;
pub mod interop;
pub mod notes;

pub use api::*;
pub use config::{client_config, ClientConfig};
pub use error::NotesError;
pub use notes::*;
