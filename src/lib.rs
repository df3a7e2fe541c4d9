//! FontRemap: find every font used by text layers in a project and
//! replace them in one undoable pass.

pub mod cli;
pub mod error;
pub mod font;
pub mod host;
pub mod models;
pub mod remap;
pub mod utils;

pub use error::{Error, HostError, Result};
