pub mod file;
pub mod naming;
pub mod logging;

pub use file::{load_project, save_project, safe_move_file};
pub use naming::{closest_fonts, levenshtein_distance, normalize_font_id};
pub use logging::init_logging;
