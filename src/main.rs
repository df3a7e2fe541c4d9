use std::fs;
use std::io;
use std::process::ExitCode;
use clap::Parser;
use font_remap::cli::{ask_keep_changes, print_used_fonts, report_outcome, Cli, TerminalPresenter};
use font_remap::error::{Error, Result};
use font_remap::font::registry_for;
use font_remap::host::DocumentModel;
use font_remap::remap::{
    collect_used_fonts, parse_map_arg, parse_mapping_file, RemapSession, ScriptedPresenter,
    SessionOutcome,
};
use font_remap::utils::{init_logging, load_project, save_project};

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Mapping pairs from `--mapping` and `--map`, file entries first
fn scripted_pairs(cli: &Cli) -> Result<Vec<(String, String)>> {
    let mut pairs = Vec::new();
    if let Some(path) = &cli.mapping {
        pairs.extend(parse_mapping_file(&fs::read_to_string(path)?)?);
    }
    for arg in &cli.maps {
        pairs.push(parse_map_arg(arg)?);
    }
    Ok(pairs)
}

fn run(cli: &Cli) -> Result<()> {
    let config = cli.config()?;
    init_logging(config.debug_mode);

    let scripted = if cli.is_scripted() {
        Some(scripted_pairs(cli)?)
    } else {
        None
    };

    let mut project = load_project(&cli.project)?;

    if cli.list {
        if project.item_count() == 0 {
            return Err(Error::NoProject);
        }
        print_used_fonts(&mut io::stdout().lock(), &collect_used_fonts(&project))?;
        return Ok(());
    }

    log::debug!("Available fonts from {}", config.font_source);
    let registry = registry_for(&config.font_source)?;
    let mut session = RemapSession::new();

    let interactive = scripted.is_none();
    let outcome = match scripted {
        Some(pairs) => {
            let mut presenter = ScriptedPresenter::new(pairs, config.show_report);
            session.run(&mut project, registry.as_ref(), &mut presenter)?
        }
        None => {
            let mut presenter =
                TerminalPresenter::new(io::stdin().lock(), io::stdout(), config.show_report);
            session.run(&mut project, registry.as_ref(), &mut presenter)?
        }
    };

    let (report, show_report) = match outcome {
        SessionOutcome::Cancelled => {
            println!("No changes made.");
            return Ok(());
        }
        SessionOutcome::Applied {
            report,
            show_report,
        } => (report, show_report),
    };

    let mut stdout = io::stdout();
    report_outcome(&mut stdout, &report, show_report)?;

    if config.dry_run {
        project.undo();
        println!("Dry run: nothing written.");
        return Ok(());
    }

    if report.changed_count() == 0 && config.output.is_none() {
        log::info!("No layers changed; project left as is");
        return Ok(());
    }

    if interactive
        && report.changed_count() > 0
        && !ask_keep_changes(&mut io::stdin().lock(), &mut stdout)?
    {
        project.undo();
        println!("Changes undone; nothing written.");
        return Ok(());
    }

    let destination = config.output.as_deref().unwrap_or(&cli.project);
    save_project(&project, destination)?;
    println!("Saved {}", destination.display());
    Ok(())
}
