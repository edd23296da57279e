//! Structured value → component.
//!
//! Reading is lenient about shape but strict about types. A bare string,
//! number, or boolean is a text component. An array is its first element
//! with the rest appended as children. `null` values inside an object count
//! as absent. A recognized key holding the wrong type is an error, not
//! silently ignored.

use chatforge_text::{
    ClickEvent, Component, Content, Decoration, HoverEvent, ShowEntity, ShowItem, Style, TextColor,
};
use serde_json::{Map, Value};

use crate::FormatError;
use crate::keys;

type Object = Map<String, Value>;

pub(crate) fn component(value: &Value) -> Result<Component, FormatError> {
    match value {
        Value::Object(object) => object_component(object),
        Value::Array(items) => array_component(items),
        Value::String(text) => Ok(Component::text(text.as_str())),
        Value::Number(number) => Ok(Component::text(number.to_string())),
        Value::Bool(flag) => Ok(Component::text(flag.to_string())),
        Value::Null => Err(FormatError::NotAComponent(Value::Null)),
    }
}

fn array_component(items: &[Value]) -> Result<Component, FormatError> {
    let Some((first, rest)) = items.split_first() else {
        return Ok(Component::empty());
    };
    let mut head = component(first)?;
    for item in rest {
        head = head.append(component(item)?);
    }
    Ok(head)
}

fn object_component(object: &Object) -> Result<Component, FormatError> {
    let content = content(object)?;
    let style = style(object)?;
    let children = match field(object, keys::EXTRA) {
        None => Vec::new(),
        Some(extra) => components(keys::EXTRA, extra)?,
    };
    Ok(Component::from_parts(content, style, children))
}

fn components(key: &'static str, value: &Value) -> Result<Vec<Component>, FormatError> {
    match value {
        Value::Array(items) => items.iter().map(component).collect(),
        other => Err(FormatError::invalid(key, other)),
    }
}

// ---------------------------------------------------------------------------
// Content
// ---------------------------------------------------------------------------

fn content(object: &Object) -> Result<Content, FormatError> {
    if let Some(text) = field(object, keys::TEXT) {
        return Ok(Content::Text(scalar(keys::TEXT, text)?));
    }

    if let Some(key) = field(object, keys::TRANSLATE) {
        let key = string(keys::TRANSLATE, key)?;
        let args = match field(object, keys::WITH) {
            None => Vec::new(),
            Some(with) => components(keys::WITH, with)?,
        };
        return Ok(Content::Translatable { key, args });
    }

    if let Some(score) = field(object, keys::SCORE) {
        let Value::Object(fields) = score else {
            return Err(FormatError::invalid(keys::SCORE, score));
        };
        let required = |key: &str| {
            field(fields, key)
                .and_then(Value::as_str)
                .map(str::to_owned)
                .ok_or_else(|| FormatError::invalid(keys::SCORE, score))
        };
        return Ok(Content::Score {
            name: required(keys::SCORE_NAME)?,
            objective: required(keys::SCORE_OBJECTIVE)?,
            value: field(fields, keys::SCORE_VALUE)
                .map(|value| scalar(keys::SCORE_VALUE, value))
                .transpose()?,
        });
    }

    if let Some(selector) = field(object, keys::SELECTOR) {
        return Ok(Content::Selector(string(keys::SELECTOR, selector)?));
    }

    if let Some(keybind) = field(object, keys::KEYBIND) {
        return Ok(Content::Keybind(string(keys::KEYBIND, keybind)?));
    }

    Err(FormatError::UnknownContent(Value::Object(object.clone())))
}

// ---------------------------------------------------------------------------
// Style
// ---------------------------------------------------------------------------

fn style(object: &Object) -> Result<Style, FormatError> {
    let color = match field(object, keys::COLOR) {
        None => None,
        Some(color) => {
            let name = color
                .as_str()
                .ok_or_else(|| FormatError::invalid(keys::COLOR, color))?;
            Some(name.parse::<TextColor>()?)
        }
    };

    let mut style = Style {
        color,
        font: optional_string(object, keys::FONT)?,
        click_event: field(object, keys::CLICK_EVENT)
            .map(click_event)
            .transpose()?,
        hover_event: field(object, keys::HOVER_EVENT)
            .map(hover_event)
            .transpose()?,
        insertion: optional_string(object, keys::INSERTION)?,
        ..Style::default()
    };
    for decoration in Decoration::ALL {
        style.set_decoration(decoration, optional_bool(object, decoration.name())?);
    }
    Ok(style)
}

fn click_event(value: &Value) -> Result<ClickEvent, FormatError> {
    let Value::Object(event) = value else {
        return Err(FormatError::invalid(keys::CLICK_EVENT, value));
    };
    let action = action(event, keys::CLICK_EVENT, value)?;
    // Page numbers are sometimes written as numbers.
    let payload = field(event, keys::VALUE)
        .ok_or_else(|| FormatError::invalid(keys::CLICK_EVENT, value))
        .and_then(|payload| scalar(keys::VALUE, payload))?;
    ClickEvent::from_action(action, payload)
        .ok_or_else(|| FormatError::UnknownClickAction(action.to_owned()))
}

fn hover_event(value: &Value) -> Result<HoverEvent, FormatError> {
    let Value::Object(event) = value else {
        return Err(FormatError::invalid(keys::HOVER_EVENT, value));
    };
    let action = action(event, keys::HOVER_EVENT, value)?;
    let contents = field(event, keys::CONTENTS);
    let missing = || FormatError::invalid(keys::HOVER_EVENT, value);

    match action {
        "show_text" => {
            let text = contents.or_else(|| field(event, keys::VALUE)).ok_or_else(missing)?;
            Ok(HoverEvent::ShowText(component(text)?))
        }
        "show_item" => show_item(contents.ok_or_else(missing)?).map(HoverEvent::ShowItem),
        "show_entity" => show_entity(contents.ok_or_else(missing)?).map(HoverEvent::ShowEntity),
        other => Err(FormatError::UnknownHoverAction(other.to_owned())),
    }
}

fn action<'a>(
    event: &'a Object,
    key: &'static str,
    whole: &Value,
) -> Result<&'a str, FormatError> {
    field(event, keys::ACTION)
        .and_then(Value::as_str)
        .ok_or_else(|| FormatError::invalid(key, whole))
}

fn show_item(contents: &Value) -> Result<ShowItem, FormatError> {
    let item = match contents {
        // Shorthand: just the item id.
        Value::String(id) => {
            return Ok(ShowItem {
                id: id.clone(),
                count: 1,
                tag: None,
            });
        }
        Value::Object(item) => item,
        other => return Err(FormatError::invalid(keys::CONTENTS, other)),
    };

    let id = field(item, keys::ITEM_ID)
        .and_then(Value::as_str)
        .ok_or_else(|| FormatError::invalid(keys::CONTENTS, contents))?;
    let count = match field(item, keys::ITEM_COUNT) {
        None => 1,
        Some(count) => count
            .as_i64()
            .and_then(|n| i32::try_from(n).ok())
            .ok_or_else(|| FormatError::invalid(keys::ITEM_COUNT, count))?,
    };
    Ok(ShowItem {
        id: id.to_owned(),
        count,
        tag: optional_string(item, keys::ITEM_TAG)?,
    })
}

fn show_entity(contents: &Value) -> Result<ShowEntity, FormatError> {
    let Value::Object(entity) = contents else {
        return Err(FormatError::invalid(keys::CONTENTS, contents));
    };
    let required = |key: &str| {
        field(entity, key)
            .and_then(Value::as_str)
            .map(str::to_owned)
            .ok_or_else(|| FormatError::invalid(keys::CONTENTS, contents))
    };
    Ok(ShowEntity {
        kind: required(keys::ENTITY_TYPE)?,
        id: required(keys::ENTITY_ID)?,
        name: field(entity, keys::ENTITY_NAME).map(component).transpose()?,
    })
}

// ---------------------------------------------------------------------------
// Field helpers
// ---------------------------------------------------------------------------

/// Looks up `key`, treating an explicit `null` as absent.
fn field<'a>(object: &'a Object, key: &str) -> Option<&'a Value> {
    object.get(key).filter(|value| !value.is_null())
}

fn string(key: &'static str, value: &Value) -> Result<String, FormatError> {
    value
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| FormatError::invalid(key, value))
}

/// A string, or a number or boolean taken as its text.
fn scalar(key: &'static str, value: &Value) -> Result<String, FormatError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(FormatError::invalid(key, other)),
    }
}

fn optional_string(object: &Object, key: &'static str) -> Result<Option<String>, FormatError> {
    field(object, key).map(|value| string(key, value)).transpose()
}

fn optional_bool(object: &Object, key: &'static str) -> Result<Option<bool>, FormatError> {
    field(object, key)
        .map(|value| {
            value
                .as_bool()
                .ok_or_else(|| FormatError::invalid(key, value))
        })
        .transpose()
}
