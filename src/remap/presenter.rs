use lazy_static::lazy_static;
use regex::Regex;
use crate::error::{Error, Result};
use crate::models::{FontMapping, UsedFonts};

lazy_static! {
    /// `FROM => TO` in a mapping file
    static ref MAPPING_LINE: Regex = Regex::new(r"^\s*(.*?)\s*=>\s*(.*?)\s*$").unwrap();
}

/// One row of the mapping form
#[derive(Debug, Clone, PartialEq)]
pub struct MappingField {
    pub source: String,
    pub replacement: String,
}

/// The editable form shown to the user: one field per used font, each
/// pre-filled with the font itself, plus the advisory list of available
/// fonts.
#[derive(Debug, Clone)]
pub struct MappingForm {
    fields: Vec<MappingField>,
    available: Vec<String>,
}

/// What the user decided
#[derive(Debug, Clone, PartialEq)]
pub enum Decision {
    Confirmed {
        mapping: FontMapping,
        show_report: bool,
    },
    Cancelled,
}

/// Shows the mapping form and returns the user's decision
pub trait MappingPresenter {
    fn present(&mut self, form: MappingForm) -> Result<Decision>;
}

impl MappingForm {
    pub fn new(used: &UsedFonts, available: Vec<String>) -> Self {
        let fields = used
            .iter()
            .map(|font| MappingField {
                source: font.to_string(),
                replacement: font.to_string(),
            })
            .collect();
        Self { fields, available }
    }

    pub fn fields(&self) -> &[MappingField] {
        &self.fields
    }

    /// Available fonts, sorted ascending
    pub fn available(&self) -> &[String] {
        &self.available
    }

    pub fn is_available(&self, font: &str) -> bool {
        self.available.binary_search_by(|f| f.as_str().cmp(font)).is_ok()
    }

    /// Set the replacement for `source`. Returns false if `source` has no field.
    pub fn set_replacement(&mut self, source: &str, replacement: &str) -> bool {
        match self.fields.iter_mut().find(|field| field.source == source) {
            Some(field) => {
                field.replacement = replacement.to_string();
                true
            }
            None => false,
        }
    }

    /// Restore every field to its identity value
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.replacement = field.source.clone();
        }
    }

    /// Freeze the current field values into a mapping
    pub fn into_mapping(self) -> FontMapping {
        self.fields
            .into_iter()
            .map(|field| (field.source, field.replacement))
            .collect()
    }
}

/// Parse a `FROM=TO` command-line argument
pub fn parse_map_arg(arg: &str) -> Result<(String, String)> {
    let (from, to) = arg.split_once('=').ok_or_else(|| Error::InvalidMapping {
        entry: arg.to_string(),
        reason: "expected FROM=TO".to_string(),
    })?;
    if from.is_empty() {
        return Err(Error::InvalidMapping {
            entry: arg.to_string(),
            reason: "source font is empty".to_string(),
        });
    }
    Ok((from.to_string(), to.to_string()))
}

/// Parse mapping file content: `FROM => TO` per line, `#` comments and blank
/// lines ignored
pub fn parse_mapping_file(content: &str) -> Result<Vec<(String, String)>> {
    let mut pairs = Vec::new();
    for (number, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let captures = MAPPING_LINE.captures(line).ok_or_else(|| Error::InvalidMapping {
            entry: trimmed.to_string(),
            reason: format!("line {}: expected FROM => TO", number + 1),
        })?;
        let from = captures[1].to_string();
        if from.is_empty() {
            return Err(Error::InvalidMapping {
                entry: trimmed.to_string(),
                reason: format!("line {}: source font is empty", number + 1),
            });
        }
        pairs.push((from, captures[2].to_string()));
    }
    Ok(pairs)
}

/// Non-interactive presenter: fills the form from prepared pairs and confirms
#[derive(Debug, Clone, Default)]
pub struct ScriptedPresenter {
    pairs: Vec<(String, String)>,
    show_report: bool,
}

impl ScriptedPresenter {
    pub fn new(pairs: Vec<(String, String)>, show_report: bool) -> Self {
        Self { pairs, show_report }
    }
}

impl MappingPresenter for ScriptedPresenter {
    fn present(&mut self, mut form: MappingForm) -> Result<Decision> {
        for (from, to) in &self.pairs {
            if !form.set_replacement(from, to) {
                log::warn!("Font '{}' is not used in this project, ignoring", from);
                continue;
            }
            if !to.is_empty() && !form.available().is_empty() && !form.is_available(to) {
                log::warn!("Font '{}' is not in the list of available fonts", to);
            }
        }
        Ok(Decision::Confirmed {
            mapping: form.into_mapping(),
            show_report: self.show_report,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> MappingForm {
        let used: UsedFonts = ["Arial", "TimesNewRoman-Bold"].into_iter().collect();
        MappingForm::new(&used, vec!["Arial".to_string(), "Helvetica".to_string()])
    }

    #[test]
    fn test_form_defaults_to_identity() {
        let form = form();
        assert_eq!(form.fields().len(), 2);
        assert!(form.fields().iter().all(|f| f.source == f.replacement));
        assert!(form.into_mapping().is_identity());
    }

    #[test]
    fn test_form_edits_and_reset() {
        let mut form = form();
        assert!(form.set_replacement("Arial", "Helvetica"));
        assert!(!form.set_replacement("Verdana", "Helvetica"));
        assert!(form.is_available("Helvetica"));
        assert!(!form.is_available("Futura"));

        let mapping = form.clone().into_mapping();
        assert_eq!(mapping.replacement_for("Arial"), Some("Helvetica"));

        form.reset();
        assert!(form.into_mapping().is_identity());
    }

    #[test]
    fn test_parse_map_arg() {
        assert_eq!(
            parse_map_arg("Arial-Bold=Helvetica-Bold").unwrap(),
            ("Arial-Bold".to_string(), "Helvetica-Bold".to_string())
        );
        assert_eq!(parse_map_arg("Arial=").unwrap().1, "");
        assert!(parse_map_arg("Arial").is_err());
        assert!(parse_map_arg("=Arial").is_err());
    }

    #[test]
    fn test_parse_mapping_file() {
        let content = "# studio fonts\nArial => Helvetica\n\n  Times New Roman   =>   Georgia-Bold \nCourier =>\n";
        let pairs = parse_mapping_file(content).unwrap();
        assert_eq!(
            pairs,
            vec![
                ("Arial".to_string(), "Helvetica".to_string()),
                ("Times New Roman".to_string(), "Georgia-Bold".to_string()),
                ("Courier".to_string(), String::new()),
            ]
        );

        let err = parse_mapping_file("Arial -> Helvetica").unwrap_err();
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn test_scripted_presenter_ignores_unused_sources() {
        let mut presenter = ScriptedPresenter::new(
            vec![
                ("Arial".to_string(), "Helvetica".to_string()),
                ("Verdana".to_string(), "Futura".to_string()),
            ],
            false,
        );
        let decision = presenter.present(form()).unwrap();
        match decision {
            Decision::Confirmed { mapping, show_report } => {
                assert!(!show_report);
                assert_eq!(mapping.len(), 2);
                assert_eq!(mapping.replacement_for("Arial"), Some("Helvetica"));
                assert_eq!(mapping.get("Verdana"), None);
            }
            Decision::Cancelled => panic!("scripted presenter never cancels"),
        }
    }
}
