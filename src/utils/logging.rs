use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initialise logging. `--debug` forces debug output; otherwise `RUST_LOG`
/// decides, defaulting to warnings only.
pub fn init_logging(debug_mode: bool) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if debug_mode {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
    log::debug!("Debug mode enabled");
}
