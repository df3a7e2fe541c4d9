use crate::host::DocumentModel;
use crate::models::{Item, LayerContent, LayerRef, TextDocument, UsedFonts};

/// A text layer found during a scan
pub struct TextLayer<'a> {
    pub at: LayerRef,
    pub composition: &'a str,
    pub name: &'a str,
    pub text: &'a TextDocument,
}

/// Every text layer of every composition, in project order
pub fn text_layers<D: DocumentModel + ?Sized>(doc: &D) -> Vec<TextLayer<'_>> {
    let mut layers = Vec::new();
    for (item_index, item) in doc.items().iter().enumerate() {
        let comp = match item {
            Item::Composition(comp) => comp,
            Item::Footage(_) | Item::Folder(_) | Item::Other(_) => continue,
        };
        for (layer_index, layer) in comp.layers.iter().enumerate() {
            if let LayerContent::Text(text) = &layer.content {
                layers.push(TextLayer {
                    at: LayerRef {
                        item: item_index,
                        layer: layer_index,
                    },
                    composition: &comp.name,
                    name: &layer.name,
                    text,
                });
            }
        }
    }
    layers
}

/// Collect the distinct fonts applied to text layers
pub fn collect_used_fonts<D: DocumentModel + ?Sized>(doc: &D) -> UsedFonts {
    let layers = text_layers(doc);
    let used: UsedFonts = layers.iter().map(|layer| layer.text.font.as_str()).collect();
    log::debug!(
        "Collected {} distinct fonts from {} text layers",
        used.len(),
        layers.len()
    );
    used
}
