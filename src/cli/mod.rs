//! Command-line interface handling and user interaction

mod args;
mod help;
mod interaction;

pub use args::Cli;
pub use help::get_help_message;
pub use interaction::{ask_keep_changes, print_used_fonts, report_outcome, TerminalPresenter};
