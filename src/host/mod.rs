//! The document host: what the remapper reads from and writes to

use std::ops::{Deref, DerefMut};

use crate::error::HostError;
use crate::models::{Item, LayerRef};

/// Name of the undo group wrapping an apply pass
pub const UNDO_GROUP_NAME: &str = "Apply Font Mapping";

/// Read and write access to an open project.
///
/// Layers are exposed as tagged values so callers pattern-match on the
/// layer kind instead of probing it.
pub trait DocumentModel {
    fn items(&self) -> &[Item];

    /// Set the font of the text layer at `at`
    fn set_text_font(&mut self, at: LayerRef, font: &str) -> Result<(), HostError>;

    fn begin_undo_group(&mut self, name: &str);

    fn end_undo_group(&mut self);

    fn item_count(&self) -> usize {
        self.items().len()
    }
}

/// An open undo group. The group is closed when the guard drops, whatever
/// happened in between.
pub struct UndoGroup<'a, D: DocumentModel + ?Sized> {
    doc: &'a mut D,
}

impl<'a, D: DocumentModel + ?Sized> UndoGroup<'a, D> {
    pub fn begin(doc: &'a mut D, name: &str) -> Self {
        log::debug!("Begin undo group '{}'", name);
        doc.begin_undo_group(name);
        Self { doc }
    }
}

impl<D: DocumentModel + ?Sized> Deref for UndoGroup<'_, D> {
    type Target = D;

    fn deref(&self) -> &D {
        self.doc
    }
}

impl<D: DocumentModel + ?Sized> DerefMut for UndoGroup<'_, D> {
    fn deref_mut(&mut self) -> &mut D {
        self.doc
    }
}

impl<D: DocumentModel + ?Sized> Drop for UndoGroup<'_, D> {
    fn drop(&mut self) {
        self.doc.end_undo_group();
        log::debug!("End undo group");
    }
}
