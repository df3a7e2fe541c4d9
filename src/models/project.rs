use serde::de::Error as _;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::HostError;
use crate::host::DocumentModel;

/// Fields this tool does not interpret, written back as found
pub type Properties = Map<String, Value>;

/// An open project: an ordered list of items
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(flatten)]
    pub extra: Properties,
    #[serde(skip)]
    history: UndoHistory,
}

/// A project item. Only compositions hold layers.
///
/// Serialized with a `type` tag; kinds this tool does not know are kept
/// as `Other` with their tag and fields.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Properties")]
pub enum Item {
    Composition(Composition),
    Footage(Asset),
    Folder(Asset),
    Other(Untyped),
}

/// A footage or folder item
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub name: String,
    #[serde(flatten)]
    pub extra: Properties,
}

/// An entry of an unrecognised kind
#[derive(Debug, Clone, PartialEq)]
pub struct Untyped {
    pub kind: String,
    pub properties: Properties,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Composition {
    pub name: String,
    #[serde(default)]
    pub layers: Vec<Layer>,
    #[serde(flatten)]
    pub extra: Properties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub name: String,
    #[serde(default)]
    pub locked: bool,
    pub content: LayerContent,
    #[serde(flatten)]
    pub extra: Properties,
}

/// What a layer carries. Collector and applier only look at `Text`;
/// cameras, nulls, solids and anything else land in `Other`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Properties")]
pub enum LayerContent {
    Text(TextDocument),
    Shape(Properties),
    Other(Untyped),
}

/// The styled text value of a text layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextDocument {
    #[serde(default)]
    pub text: String,
    pub font: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    /// Style properties this tool does not touch, kept for the round trip
    #[serde(flatten)]
    pub extra: Properties,
}

/// A body written out with its `type` tag in front
#[derive(Serialize)]
struct Tagged<'a, T: Serialize> {
    #[serde(rename = "type")]
    kind: &'a str,
    #[serde(flatten)]
    body: &'a T,
}

/// Split the `type` tag off an entry
fn take_kind(mut map: Properties) -> Result<(String, Properties), serde_json::Error> {
    match map.remove("type") {
        Some(Value::String(kind)) => Ok((kind, map)),
        Some(other) => Err(serde_json::Error::custom(format!(
            "`type` must be a string, found {}",
            other
        ))),
        None => Err(serde_json::Error::missing_field("type")),
    }
}

impl TryFrom<Properties> for Item {
    type Error = serde_json::Error;

    fn try_from(map: Properties) -> Result<Self, Self::Error> {
        let (kind, body) = take_kind(map)?;
        Ok(match kind.as_str() {
            "composition" => Item::Composition(serde_json::from_value(Value::Object(body))?),
            "footage" => Item::Footage(serde_json::from_value(Value::Object(body))?),
            "folder" => Item::Folder(serde_json::from_value(Value::Object(body))?),
            _ => Item::Other(Untyped { kind, properties: body }),
        })
    }
}

impl Serialize for Item {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Item::Composition(comp) => Tagged { kind: "composition", body: comp }.serialize(serializer),
            Item::Footage(asset) => Tagged { kind: "footage", body: asset }.serialize(serializer),
            Item::Folder(asset) => Tagged { kind: "folder", body: asset }.serialize(serializer),
            Item::Other(entry) => Tagged {
                kind: &entry.kind,
                body: &entry.properties,
            }
            .serialize(serializer),
        }
    }
}

impl TryFrom<Properties> for LayerContent {
    type Error = serde_json::Error;

    fn try_from(map: Properties) -> Result<Self, Self::Error> {
        let (kind, body) = take_kind(map)?;
        Ok(match kind.as_str() {
            "text" => LayerContent::Text(serde_json::from_value(Value::Object(body))?),
            "shape" => LayerContent::Shape(body),
            _ => LayerContent::Other(Untyped { kind, properties: body }),
        })
    }
}

impl Serialize for LayerContent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            LayerContent::Text(doc) => Tagged { kind: "text", body: doc }.serialize(serializer),
            LayerContent::Shape(properties) => {
                Tagged { kind: "shape", body: properties }.serialize(serializer)
            }
            LayerContent::Other(entry) => Tagged {
                kind: &entry.kind,
                body: &entry.properties,
            }
            .serialize(serializer),
        }
    }
}

/// Position of a layer inside the project, zero-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerRef {
    pub item: usize,
    pub layer: usize,
}

/// One font change recorded inside an undo group
#[derive(Debug, Clone, PartialEq)]
struct FontEdit {
    at: LayerRef,
    previous: String,
}

/// A closed undo group
#[derive(Debug, Clone, PartialEq)]
pub struct UndoEntry {
    pub name: String,
    edits: Vec<FontEdit>,
}

impl UndoEntry {
    /// Number of edits the group reverts
    pub fn len(&self) -> usize {
        self.edits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
struct UndoHistory {
    open: Option<UndoEntry>,
    depth: usize,
    done: Vec<UndoEntry>,
}

impl Item {
    pub fn footage(name: &str) -> Self {
        Item::Footage(Asset::new(name))
    }

    pub fn folder(name: &str) -> Self {
        Item::Folder(Asset::new(name))
    }

    pub fn name(&self) -> &str {
        match self {
            Item::Composition(comp) => &comp.name,
            Item::Footage(asset) | Item::Folder(asset) => &asset.name,
            Item::Other(entry) => entry
                .properties
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or_default(),
        }
    }

    pub fn as_composition(&self) -> Option<&Composition> {
        match self {
            Item::Composition(comp) => Some(comp),
            _ => None,
        }
    }
}

impl Asset {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            extra: Properties::new(),
        }
    }
}

impl Layer {
    pub fn new(name: &str, content: LayerContent) -> Self {
        Self {
            name: name.to_string(),
            locked: false,
            content,
            extra: Properties::new(),
        }
    }

    pub fn text(name: &str, font: &str) -> Self {
        Self::new(name, LayerContent::Text(TextDocument::new(name, font)))
    }

    pub fn shape(name: &str) -> Self {
        Self::new(name, LayerContent::Shape(Properties::new()))
    }

    pub fn locked(mut self) -> Self {
        self.locked = true;
        self
    }

    /// Current font, if this is a text layer
    pub fn font(&self) -> Option<&str> {
        match &self.content {
            LayerContent::Text(doc) => Some(&doc.font),
            _ => None,
        }
    }
}

impl TextDocument {
    pub fn new(text: &str, font: &str) -> Self {
        Self {
            text: text.to_string(),
            font: font.to_string(),
            font_size: None,
            extra: Properties::new(),
        }
    }
}

impl Composition {
    pub fn new(name: &str, layers: Vec<Layer>) -> Self {
        Self {
            name: name.to_string(),
            layers,
            extra: Properties::new(),
        }
    }
}

impl Project {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items,
            extra: Properties::new(),
            history: UndoHistory::default(),
        }
    }

    pub fn layer(&self, at: LayerRef) -> Option<&Layer> {
        self.items
            .get(at.item)
            .and_then(Item::as_composition)
            .and_then(|comp| comp.layers.get(at.layer))
    }

    fn layer_mut(&mut self, at: LayerRef) -> Option<&mut Layer> {
        match self.items.get_mut(at.item) {
            Some(Item::Composition(comp)) => comp.layers.get_mut(at.layer),
            _ => None,
        }
    }

    /// Number of undo groups that can be reverted
    pub fn undo_depth(&self) -> usize {
        self.history.done.len()
    }

    /// Revert the most recent undo group, restoring fonts in reverse order
    pub fn undo(&mut self) -> Option<UndoEntry> {
        let entry = self.history.done.pop()?;
        for edit in entry.edits.iter().rev() {
            if let Some(Layer {
                content: LayerContent::Text(doc),
                ..
            }) = self.layer_mut(edit.at)
            {
                doc.font = edit.previous.clone();
            }
        }
        log::debug!("Undid '{}' ({} edits)", entry.name, entry.edits.len());
        Some(entry)
    }
}

/// Reject identifiers no renderer would accept
fn validate_font_identifier(font: &str) -> Result<(), HostError> {
    if font.trim().is_empty() || font.chars().any(char::is_control) {
        return Err(HostError::InvalidFont(font.to_string()));
    }
    Ok(())
}

impl DocumentModel for Project {
    fn items(&self) -> &[Item] {
        &self.items
    }

    fn set_text_font(&mut self, at: LayerRef, font: &str) -> Result<(), HostError> {
        validate_font_identifier(font)?;

        let layer = self
            .layer_mut(at)
            .ok_or(HostError::NoSuchLayer { item: at.item, layer: at.layer })?;
        if layer.locked {
            return Err(HostError::LayerLocked(layer.name.clone()));
        }
        let doc = match &mut layer.content {
            LayerContent::Text(doc) => doc,
            _ => return Err(HostError::NotTextLayer(layer.name.clone())),
        };

        let previous = std::mem::replace(&mut doc.font, font.to_string());
        if let Some(group) = self.history.open.as_mut() {
            group.edits.push(FontEdit { at, previous });
        }
        Ok(())
    }

    fn begin_undo_group(&mut self, name: &str) {
        self.history.depth += 1;
        if self.history.open.is_none() {
            self.history.open = Some(UndoEntry {
                name: name.to_string(),
                edits: Vec::new(),
            });
        }
    }

    fn end_undo_group(&mut self) {
        if self.history.depth == 0 {
            return;
        }
        self.history.depth -= 1;
        if self.history.depth > 0 {
            return;
        }
        if let Some(group) = self.history.open.take() {
            if !group.is_empty() {
                self.history.done.push(group);
            }
        }
    }
}
