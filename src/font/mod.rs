//! Font file inspection and the list of available fonts

pub mod metadata;
pub mod registry;

pub use metadata::{find_font_files, is_valid_font_file, postscript_name};
pub use registry::{
    load_available_fonts, registry_for, DirectoryFontRegistry, FontRegistry, StaticFontRegistry,
    SystemFontRegistry,
};
