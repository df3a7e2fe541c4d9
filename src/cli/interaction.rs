use std::io::{BufRead, Write};
use crate::error::Result;
use crate::models::UsedFonts;
use crate::remap::{ApplyReport, Decision, MappingForm, MappingPresenter};
use crate::utils::closest_fonts;
use super::help::get_help_message;

/// How many available fonts `fonts` prints without a filter
const FONT_LIST_LIMIT: usize = 200;

/// Line-oriented mapping form on a terminal
pub struct TerminalPresenter<R, W> {
    input: R,
    output: W,
    show_report: bool,
}

enum FieldInput {
    Keep,
    Replace(String),
    Cancel,
}

enum Confirmation {
    Replace,
    EditAgain,
    Cancel,
}

impl<R: BufRead, W: Write> TerminalPresenter<R, W> {
    pub fn new(input: R, output: W, show_report: bool) -> Self {
        Self {
            input,
            output,
            show_report,
        }
    }

    /// Give back the reader and writer
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Read one trimmed line; `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()
    }

    fn list_fonts(&mut self, form: &MappingForm, filter: &str) -> Result<()> {
        let needle = filter.to_lowercase();
        let matches: Vec<&String> = form
            .available()
            .iter()
            .filter(|font| needle.is_empty() || font.to_lowercase().contains(&needle))
            .collect();

        if matches.is_empty() {
            writeln!(self.output, "    (no matching fonts)")?;
            return Ok(());
        }
        let limit = if needle.is_empty() { FONT_LIST_LIMIT } else { matches.len() };
        for font in matches.iter().take(limit) {
            writeln!(self.output, "    {}", font)?;
        }
        if matches.len() > limit {
            writeln!(
                self.output,
                "    ... {} more, use `fonts <filter>` to narrow down",
                matches.len() - limit
            )?;
        }
        Ok(())
    }

    fn read_field(&mut self, form: &MappingForm, index: usize) -> Result<FieldInput> {
        loop {
            let field = &form.fields()[index];
            let text = format!("  {} [{}]: ", field.source, field.replacement);
            let line = match self.prompt(&text)? {
                Some(line) => line,
                None => return Ok(FieldInput::Cancel),
            };

            match line.as_str() {
                "" => return Ok(FieldInput::Keep),
                "?" => writeln!(self.output, "{}", get_help_message())?,
                "cancel" => return Ok(FieldInput::Cancel),
                "fonts" => self.list_fonts(form, "")?,
                _ => match line.strip_prefix("fonts ") {
                    Some(filter) => self.list_fonts(form, filter.trim())?,
                    None => return Ok(FieldInput::Replace(line)),
                },
            }
        }
    }

    fn hint_if_unknown(&mut self, form: &MappingForm, font: &str) -> Result<()> {
        if form.available().is_empty() || form.is_available(font) {
            return Ok(());
        }
        writeln!(self.output, "    note: '{}' is not in the available font list", font)?;
        let closest = closest_fonts(font, form.available(), 3);
        if !closest.is_empty() {
            writeln!(self.output, "    closest matches: {}", closest.join(", "))?;
        }
        Ok(())
    }

    fn print_summary(&mut self, form: &MappingForm) -> Result<()> {
        let changes: Vec<_> = form
            .fields()
            .iter()
            .filter(|f| !f.replacement.is_empty() && f.replacement != f.source)
            .collect();

        if changes.is_empty() {
            writeln!(self.output, "\nNo fonts will be changed.")?;
        } else {
            writeln!(self.output, "\nFonts to replace:")?;
            for field in changes {
                writeln!(self.output, "  {} -> {}", field.source, field.replacement)?;
            }
        }
        Ok(())
    }

    fn confirm(&mut self) -> Result<Confirmation> {
        loop {
            let answer = match self.prompt("Replace fonts? [y]es / [e]dit again / [n]o: ")? {
                Some(answer) => answer.to_lowercase(),
                None => return Ok(Confirmation::Cancel),
            };
            match answer.as_str() {
                "y" | "yes" => return Ok(Confirmation::Replace),
                "e" | "edit" => return Ok(Confirmation::EditAgain),
                "n" | "no" | "cancel" => return Ok(Confirmation::Cancel),
                _ => writeln!(self.output, "Please answer y, e or n.")?,
            }
        }
    }

    fn ask_show_report(&mut self) -> Result<bool> {
        let text = if self.show_report {
            "Show success report? (Y/n): "
        } else {
            "Show success report? (y/N): "
        };
        Ok(match self.prompt(text)?.map(|a| a.to_lowercase()).as_deref() {
            Some("y") | Some("yes") => true,
            Some("n") | Some("no") => false,
            _ => self.show_report,
        })
    }
}

impl<R: BufRead, W: Write> MappingPresenter for TerminalPresenter<R, W> {
    fn present(&mut self, mut form: MappingForm) -> Result<Decision> {
        writeln!(self.output, "Remap Fonts")?;
        writeln!(self.output, "  Used Font [Replacement Font]")?;
        if form.available().is_empty() {
            writeln!(self.output, "  (no list of available fonts; `?` for help)")?;
        } else {
            writeln!(
                self.output,
                "  ({} fonts available; `fonts` to list them, `?` for help)",
                form.available().len()
            )?;
        }

        loop {
            for index in 0..form.fields().len() {
                match self.read_field(&form, index)? {
                    FieldInput::Keep => {}
                    FieldInput::Replace(font) => {
                        self.hint_if_unknown(&form, &font)?;
                        let source = form.fields()[index].source.clone();
                        form.set_replacement(&source, &font);
                    }
                    FieldInput::Cancel => {
                        log::debug!("Mapping form cancelled");
                        return Ok(Decision::Cancelled);
                    }
                }
            }

            self.print_summary(&form)?;
            match self.confirm()? {
                Confirmation::Replace => break,
                Confirmation::EditAgain => continue,
                Confirmation::Cancel => return Ok(Decision::Cancelled),
            }
        }

        let show_report = self.ask_show_report()?;
        Ok(Decision::Confirmed {
            mapping: form.into_mapping(),
            show_report,
        })
    }
}

/// Ask whether to keep the changes just applied. End of input keeps them.
pub fn ask_keep_changes<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<bool> {
    loop {
        write!(output, "Keep these changes? (Y/n): ")?;
        output.flush()?;

        let mut answer = String::new();
        if input.read_line(&mut answer)? == 0 {
            return Ok(true);
        }
        match answer.trim().to_lowercase().as_str() {
            "" | "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => writeln!(output, "Please answer y or n.")?,
        }
    }
}

/// Alert once per failed layer, then the change count if wanted
pub fn report_outcome<W: Write>(output: &mut W, report: &ApplyReport, show_report: bool) -> Result<()> {
    for failure in &report.failures {
        writeln!(
            output,
            "Failed to set font on layer '{}': {}",
            failure.layer, failure.message
        )?;
    }
    if show_report && report.changed_count() > 0 {
        writeln!(
            output,
            "{} text layers were changed within the project.",
            report.changed_count()
        )?;
    }
    Ok(())
}

/// Print the used fonts, one per line
pub fn print_used_fonts<W: Write>(output: &mut W, used: &UsedFonts) -> Result<()> {
    for font in used.iter() {
        writeln!(output, "{}", font)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use crate::remap::{LayerChange, LayerFailure};

    fn form() -> MappingForm {
        let used: UsedFonts = ["Arial", "TimesNewRoman-Bold"].into_iter().collect();
        MappingForm::new(
            &used,
            vec!["Arial".to_string(), "Helvetica".to_string(), "Helvetica-Bold".to_string()],
        )
    }

    fn run(input: &str) -> (Decision, String) {
        let mut presenter = TerminalPresenter::new(Cursor::new(input.to_string()), Vec::new(), true);
        let decision = presenter.present(form()).unwrap();
        let (_, output) = presenter.into_inner();
        (decision, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_edit_and_confirm() {
        let (decision, output) = run("Helvetica\n\ny\nn\n");
        match decision {
            Decision::Confirmed { mapping, show_report } => {
                assert!(!show_report);
                assert_eq!(mapping.replacement_for("Arial"), Some("Helvetica"));
                assert_eq!(mapping.replacement_for("TimesNewRoman-Bold"), None);
            }
            Decision::Cancelled => panic!("expected confirmation"),
        }
        assert!(output.contains("Arial -> Helvetica"));
        assert!(!output.contains("note:"));
    }

    #[test]
    fn test_unknown_font_gets_hint_but_is_accepted() {
        let (decision, output) = run("Helvetca\n\ny\n\n");
        assert!(output.contains("note: 'Helvetca' is not in the available font list"));
        assert!(output.contains("closest matches: Helvetica"));
        match decision {
            Decision::Confirmed { mapping, show_report } => {
                assert!(show_report);
                assert_eq!(mapping.replacement_for("Arial"), Some("Helvetca"));
            }
            Decision::Cancelled => panic!("expected confirmation"),
        }
    }

    #[test]
    fn test_help_and_font_listing_do_not_advance() {
        let (decision, output) = run("?\nfonts helv\n\n\ny\n\n");
        assert!(output.contains("=== FAQ ==="));
        assert!(output.contains("    Helvetica-Bold"));
        assert!(matches!(decision, Decision::Confirmed { .. }));
    }

    #[test]
    fn test_cancel_paths() {
        assert_eq!(run("cancel\n").0, Decision::Cancelled);
        assert_eq!(run("Helvetica\n").0, Decision::Cancelled);
        assert_eq!(run("Helvetica\n\nn\n").0, Decision::Cancelled);
    }

    #[test]
    fn test_edit_again_keeps_previous_values() {
        let (decision, output) = run("Helvetica\n\ne\n\nGeorgia\ny\n\n");
        assert!(output.contains("Arial [Helvetica]"));
        match decision {
            Decision::Confirmed { mapping, .. } => {
                assert_eq!(mapping.replacement_for("Arial"), Some("Helvetica"));
                assert_eq!(mapping.replacement_for("TimesNewRoman-Bold"), Some("Georgia"));
            }
            Decision::Cancelled => panic!("expected confirmation"),
        }
    }

    #[test]
    fn test_ask_keep_changes() {
        let mut out = Vec::new();
        assert!(!ask_keep_changes(&mut Cursor::new("maybe\nn\n"), &mut out).unwrap());
        assert!(ask_keep_changes(&mut Cursor::new("\n"), &mut out).unwrap());
        assert!(ask_keep_changes(&mut Cursor::new(""), &mut out).unwrap());

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Keep these changes? (Y/n): "));
        assert_eq!(text.matches("Please answer y or n.").count(), 1);
    }

    #[test]
    fn test_report_outcome() {
        let report = ApplyReport {
            changes: vec![
                LayerChange {
                    composition: "Main".to_string(),
                    layer: "L1".to_string(),
                    from: "Arial".to_string(),
                    to: "Helvetica".to_string(),
                },
                LayerChange {
                    composition: "Main".to_string(),
                    layer: "L2".to_string(),
                    from: "Arial".to_string(),
                    to: "Helvetica".to_string(),
                },
            ],
            failures: vec![LayerFailure {
                composition: "Main".to_string(),
                layer: "Locked".to_string(),
                message: "layer 'Locked' is locked".to_string(),
            }],
        };

        let mut out = Vec::new();
        report_outcome(&mut out, &report, true).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Failed to set font on layer 'Locked': layer 'Locked' is locked"));
        assert!(text.contains("2 text layers were changed within the project."));

        let mut out = Vec::new();
        report_outcome(&mut out, &report, false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(!text.contains("text layers were changed"));
        assert!(text.contains("Failed to set font"));
    }
}
