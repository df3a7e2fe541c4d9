use crate::host::{DocumentModel, UndoGroup, UNDO_GROUP_NAME};
use crate::models::{FontMapping, LayerRef};
use super::collector::text_layers;

/// A layer whose font was changed
#[derive(Debug, Clone, PartialEq)]
pub struct LayerChange {
    pub composition: String,
    pub layer: String,
    pub from: String,
    pub to: String,
}

/// A layer the host refused to change
#[derive(Debug, Clone, PartialEq)]
pub struct LayerFailure {
    pub composition: String,
    pub layer: String,
    pub message: String,
}

/// Outcome of one apply pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplyReport {
    pub changes: Vec<LayerChange>,
    pub failures: Vec<LayerFailure>,
}

impl ApplyReport {
    pub fn changed_count(&self) -> usize {
        self.changes.len()
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

struct PlannedEdit {
    at: LayerRef,
    composition: String,
    layer: String,
    from: String,
    to: String,
}

/// Re-scan the project and rewrite every text layer whose font has a
/// non-empty, non-identity replacement.
///
/// The whole pass runs inside one undo group. A layer that cannot be
/// changed is recorded in the report and the pass moves on; earlier
/// changes are kept.
pub fn apply_font_mapping<D: DocumentModel + ?Sized>(
    doc: &mut D,
    mapping: &FontMapping,
) -> ApplyReport {
    let plan: Vec<PlannedEdit> = text_layers(&*doc)
        .into_iter()
        .filter_map(|layer| {
            let to = mapping.replacement_for(&layer.text.font)?;
            Some(PlannedEdit {
                at: layer.at,
                composition: layer.composition.to_string(),
                layer: layer.name.to_string(),
                from: layer.text.font.clone(),
                to: to.to_string(),
            })
        })
        .collect();

    let mut report = ApplyReport::default();
    let mut group = UndoGroup::begin(doc, UNDO_GROUP_NAME);

    for edit in plan {
        match group.set_text_font(edit.at, &edit.to) {
            Ok(()) => {
                log::debug!(
                    "{} / {}: {} -> {}",
                    edit.composition,
                    edit.layer,
                    edit.from,
                    edit.to
                );
                report.changes.push(LayerChange {
                    composition: edit.composition,
                    layer: edit.layer,
                    from: edit.from,
                    to: edit.to,
                });
            }
            Err(e) => {
                log::warn!("Failed to set font on layer '{}': {}", edit.layer, e);
                report.failures.push(LayerFailure {
                    composition: edit.composition,
                    layer: edit.layer,
                    message: e.to_string(),
                });
            }
        }
    }

    drop(group);
    log::info!(
        "Changed {} layers, {} failures",
        report.changes.len(),
        report.failures.len()
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Composition, Item, Layer, Project};

    fn example_project() -> Project {
        Project::new(vec![Item::Composition(Composition::new(
            "Main",
            vec![
                Layer::text("L1", "Arial"),
                Layer::text("L2", "Arial"),
                Layer::text("L3", "TimesNewRoman-Bold"),
            ],
        ))])
    }

    fn mapping(pairs: &[(&str, &str)]) -> FontMapping {
        pairs
            .iter()
            .map(|(from, to)| (from.to_string(), to.to_string()))
            .collect()
    }

    fn fonts(project: &Project) -> Vec<&str> {
        project.items[0]
            .as_composition()
            .unwrap()
            .layers
            .iter()
            .filter_map(Layer::font)
            .collect()
    }

    #[test]
    fn test_applies_exact_matches_only() {
        let mut project = example_project();
        let report = apply_font_mapping(
            &mut project,
            &mapping(&[("Arial", "Helvetica"), ("TimesNewRoman-Bold", "TimesNewRoman-Bold")]),
        );

        assert_eq!(report.changed_count(), 2);
        assert!(!report.has_failures());
        assert_eq!(fonts(&project), vec!["Helvetica", "Helvetica", "TimesNewRoman-Bold"]);
        assert_eq!(report.changes[0].layer, "L1");
        assert_eq!(report.changes[0].from, "Arial");
        assert_eq!(project.undo_depth(), 1);
    }

    #[test]
    fn test_identity_and_empty_replacements_are_noops() {
        let mut project = example_project();
        let report = apply_font_mapping(
            &mut project,
            &mapping(&[("Arial", "Arial"), ("TimesNewRoman-Bold", "")]),
        );

        assert_eq!(report, ApplyReport::default());
        assert_eq!(fonts(&project), vec!["Arial", "Arial", "TimesNewRoman-Bold"]);
        assert_eq!(project.undo_depth(), 0);
    }

    #[test]
    fn test_case_sensitive_match() {
        let mut project = example_project();
        let report = apply_font_mapping(&mut project, &mapping(&[("arial", "Helvetica")]));
        assert_eq!(report.changed_count(), 0);
    }

    #[test]
    fn test_failure_does_not_abort_pass() {
        let mut project = Project::new(vec![Item::Composition(Composition::new(
            "Main",
            vec![
                Layer::text("L1", "Arial"),
                Layer::text("Locked", "Arial").locked(),
                Layer::text("L3", "Arial"),
            ],
        ))]);

        let report = apply_font_mapping(&mut project, &mapping(&[("Arial", "Helvetica")]));

        assert_eq!(report.changed_count(), 2);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].layer, "Locked");
        assert_eq!(report.failures[0].message, "layer 'Locked' is locked");
        assert_eq!(fonts(&project), vec!["Helvetica", "Arial", "Helvetica"]);

        project.undo().unwrap();
        assert_eq!(fonts(&project), vec!["Arial", "Arial", "Arial"]);
    }
}
