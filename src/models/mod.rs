//! Project document, font sets and run configuration

pub mod config;
pub mod font;
pub mod project;

pub use config::{Config, FontSource};
pub use font::{FontMapping, UsedFonts};
pub use project::{
    Asset, Composition, Item, Layer, LayerContent, LayerRef, Project, Properties, TextDocument,
    UndoEntry, Untyped,
};
