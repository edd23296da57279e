//! Component → structured value.
//!
//! The output mirrors the tree one-to-one. Styles are written as the node
//! declares them, never resolved, so the structured form can be edited and
//! read back without losing which node set what. Unset fields are omitted
//! rather than written as `null`.

use chatforge_text::{
    ClickEvent, Component, Content, Decoration, HoverEvent, PaletteKind, ShowEntity, ShowItem,
    Style, TextColor, nearest_palette_color,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::FormatError;
use crate::deserializer;
use crate::keys;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Output options for targets that can't read the full model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StructuredOptions {
    /// Replace every color with the nearest entry of this palette.
    pub downsample: Option<PaletteKind>,
    /// Write `show_text` hover events with the old `value` key instead of
    /// `contents`.
    pub legacy_hover_value: bool,
}

/// Converts components to and from the structured form.
///
/// `StructuredSerializer::default()` writes the full model. Reading accepts
/// every form any configuration writes.
///
/// ```rust
/// use chatforge_structured::StructuredSerializer;
/// use chatforge_text::{Component, NamedColor};
/// use serde_json::json;
///
/// let serializer = StructuredSerializer::default();
/// let component = Component::text("Hi").color(NamedColor::Blue);
///
/// let value = serializer.serialize(&component);
/// assert_eq!(value, json!({ "text": "Hi", "color": "blue" }));
/// assert_eq!(serializer.deserialize(&value).unwrap(), component);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct StructuredSerializer {
    pub options: StructuredOptions,
}

impl StructuredSerializer {
    pub const fn new(options: StructuredOptions) -> Self {
        Self { options }
    }

    /// A serializer for targets without RGB support: colors are reduced to
    /// the given palette and hover text uses the legacy `value` key.
    pub const fn downsampling(palette: PaletteKind) -> Self {
        Self {
            options: StructuredOptions {
                downsample: Some(palette),
                legacy_hover_value: true,
            },
        }
    }

    pub fn serialize(&self, component: &Component) -> Value {
        let mut object = Map::new();
        self.write_content(component.content(), &mut object);
        self.write_style(component.style(), &mut object);

        if !component.children().is_empty() {
            let extra = component
                .children()
                .iter()
                .map(|child| self.serialize(child))
                .collect();
            object.insert(keys::EXTRA.into(), Value::Array(extra));
        }
        Value::Object(object)
    }

    pub fn deserialize(&self, value: &Value) -> Result<Component, FormatError> {
        deserializer::component(value)
    }

    fn write_content(&self, content: &Content, object: &mut Map<String, Value>) {
        match content {
            Content::Text(text) => {
                object.insert(keys::TEXT.into(), text.as_str().into());
            }
            Content::Translatable { key, args } => {
                object.insert(keys::TRANSLATE.into(), key.as_str().into());
                if !args.is_empty() {
                    let with = args.iter().map(|arg| self.serialize(arg)).collect();
                    object.insert(keys::WITH.into(), Value::Array(with));
                }
            }
            Content::Score {
                name,
                objective,
                value,
            } => {
                let mut score = Map::new();
                score.insert(keys::SCORE_NAME.into(), name.as_str().into());
                score.insert(keys::SCORE_OBJECTIVE.into(), objective.as_str().into());
                if let Some(value) = value {
                    score.insert(keys::SCORE_VALUE.into(), value.as_str().into());
                }
                object.insert(keys::SCORE.into(), Value::Object(score));
            }
            Content::Selector(pattern) => {
                object.insert(keys::SELECTOR.into(), pattern.as_str().into());
            }
            Content::Keybind(key) => {
                object.insert(keys::KEYBIND.into(), key.as_str().into());
            }
        }
    }

    fn write_style(&self, style: &Style, object: &mut Map<String, Value>) {
        if let Some(color) = style.color {
            object.insert(keys::COLOR.into(), self.color(color).to_name_or_hex().into());
        }
        for decoration in Decoration::ALL {
            if let Some(state) = style.decoration(decoration) {
                object.insert(decoration.name().into(), Value::Bool(state));
            }
        }
        if let Some(font) = &style.font {
            object.insert(keys::FONT.into(), font.as_str().into());
        }
        if let Some(insertion) = &style.insertion {
            object.insert(keys::INSERTION.into(), insertion.as_str().into());
        }
        if let Some(click) = &style.click_event {
            object.insert(keys::CLICK_EVENT.into(), click_event(click));
        }
        if let Some(hover) = &style.hover_event {
            object.insert(keys::HOVER_EVENT.into(), self.hover_event(hover));
        }
    }

    fn color(&self, color: TextColor) -> TextColor {
        match self.options.downsample {
            Some(palette) => nearest_palette_color(color.rgb(), palette.entries()).rgb.into(),
            None => color,
        }
    }

    fn hover_event(&self, event: &HoverEvent) -> Value {
        let mut object = Map::new();
        object.insert(keys::ACTION.into(), event.action().into());
        match event {
            HoverEvent::ShowText(text) => {
                let key = if self.options.legacy_hover_value {
                    keys::VALUE
                } else {
                    keys::CONTENTS
                };
                object.insert(key.into(), self.serialize(text));
            }
            HoverEvent::ShowItem(item) => {
                object.insert(keys::CONTENTS.into(), show_item(item));
            }
            HoverEvent::ShowEntity(entity) => {
                object.insert(keys::CONTENTS.into(), self.show_entity(entity));
            }
        }
        Value::Object(object)
    }

    fn show_entity(&self, entity: &ShowEntity) -> Value {
        let mut object = Map::new();
        object.insert(keys::ENTITY_TYPE.into(), entity.kind.as_str().into());
        object.insert(keys::ENTITY_ID.into(), entity.id.as_str().into());
        if let Some(name) = &entity.name {
            object.insert(keys::ENTITY_NAME.into(), self.serialize(name));
        }
        Value::Object(object)
    }
}

fn click_event(event: &ClickEvent) -> Value {
    let mut object = Map::new();
    object.insert(keys::ACTION.into(), event.action().into());
    object.insert(keys::VALUE.into(), event.value().into());
    Value::Object(object)
}

fn show_item(item: &ShowItem) -> Value {
    let mut object = Map::new();
    object.insert(keys::ITEM_ID.into(), item.id.as_str().into());
    if item.count != 1 {
        object.insert(keys::ITEM_COUNT.into(), item.count.into());
    }
    if let Some(tag) = &item.tag {
        object.insert(keys::ITEM_TAG.into(), tag.as_str().into());
    }
    Value::Object(object)
}

/// Serializes with default options.
pub fn to_structured(component: &Component) -> Value {
    StructuredSerializer::default().serialize(component)
}

/// Deserializes any structured form.
pub fn from_structured(value: &Value) -> Result<Component, FormatError> {
    deserializer::component(value)
}
