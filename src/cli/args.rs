use std::path::PathBuf;
use clap::Parser;
use crate::error::{Error, Result};
use crate::models::{Config, FontSource};

/// Batch-change font families and weights across an entire project
#[derive(Parser, Debug)]
#[command(name = "FontRemap", version, about, long_about = None)]
pub struct Cli {
    /// Project file to remap
    pub project: PathBuf,

    /// Replace FROM with TO (repeatable); skips the interactive form
    #[arg(long = "map", value_name = "FROM=TO")]
    pub maps: Vec<String>,

    /// Read `FROM => TO` lines from a file; skips the interactive form
    #[arg(long, value_name = "FILE")]
    pub mapping: Option<PathBuf>,

    /// Print the fonts used by text layers and exit
    #[arg(long)]
    pub list: bool,

    /// Take the list of available fonts from the font files in a directory
    #[arg(long, value_name = "DIR", conflicts_with_all = ["fonts_file", "no_system_fonts"])]
    pub fonts_dir: Option<PathBuf>,

    /// Take the list of available fonts from a text file, one per line
    #[arg(long, value_name = "FILE", conflicts_with = "no_system_fonts")]
    pub fonts_file: Option<PathBuf>,

    /// Do not look up installed fonts
    #[arg(long)]
    pub no_system_fonts: bool,

    /// Write the result here instead of overwriting the project
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Apply and report, then undo without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Do not report how many layers changed
    #[arg(long)]
    pub no_report: bool,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// True when mappings come from arguments or a file
    pub fn is_scripted(&self) -> bool {
        !self.maps.is_empty() || self.mapping.is_some()
    }

    /// Build the run configuration
    pub fn config(&self) -> Result<Config> {
        let font_source = match (&self.fonts_dir, &self.fonts_file, self.no_system_fonts) {
            (Some(dir), _, _) => FontSource::Directory(dir.clone()),
            (None, Some(file), _) => FontSource::ListFile(file.clone()),
            (None, None, true) => FontSource::None,
            (None, None, false) => FontSource::System,
        };

        if self.output.as_deref() == Some(self.project.as_path()) {
            return Err(Error::Config(
                "--output is the project itself; omit it to write in place".to_string(),
            ));
        }

        Ok(Config {
            debug_mode: self.debug,
            show_report: !self.no_report,
            dry_run: self.dry_run,
            output: self.output.clone(),
            font_source,
        })
    }
}
