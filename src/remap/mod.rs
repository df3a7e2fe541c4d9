//! Font collection, the mapping form, and the apply pass

pub mod applier;
pub mod collector;
pub mod presenter;
pub mod session;

pub use applier::{apply_font_mapping, ApplyReport, LayerChange, LayerFailure};
pub use collector::{collect_used_fonts, text_layers, TextLayer};
pub use presenter::{
    parse_map_arg, parse_mapping_file, Decision, MappingField, MappingForm, MappingPresenter,
    ScriptedPresenter,
};
pub use session::{RemapSession, SessionOutcome, SessionState};
