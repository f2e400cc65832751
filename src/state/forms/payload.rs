//! Payload shaping: value tree -> request body for the generation API
//!
//! The body is the strict nested tree plus one `extras` object holding the
//! optional data the user actually filled in.

use super::field::{FieldConfig, FieldKind};
use super::path::{is_present, FieldPath};
use super::schema::{SectionBody, ToolConfiguration};
use serde_json::{Map, Number, Value};

/// Key of the loosely-typed bag of optional data
pub const EXTRAS_KEY: &str = "extras";

/// Build the request body for `tool` from the current value tree
pub fn shape_payload(tool: &ToolConfiguration, tree: &Value) -> Value {
    let mut body = tree.clone();
    coerce_numbers(tool, &mut body);

    let mut extras = Map::new();
    for section in &tool.sections {
        let visible = section.is_visible(tree);
        match &section.body {
            SectionBody::DynamicList(list) => {
                if let Some(scalar) = &list.scalar_item {
                    if let Some(Value::Array(items)) = list.list_name.get_mut(&mut body) {
                        for item in items.iter_mut() {
                            let collapsed = scalar.get(item).cloned().unwrap_or(Value::Null);
                            *item = collapsed;
                        }
                    }
                }
                if visible && !list.required {
                    if let Some(items) = list.list_name.get(&body).and_then(Value::as_array) {
                        if !items.is_empty() {
                            extras.insert(list.list_name.to_string(), Value::Array(items.clone()));
                        }
                    }
                }
            }
            SectionBody::Form { fields } => {
                if !visible {
                    continue;
                }
                for field in fields.iter().filter(|f| !f.required) {
                    if let Some(value) = field.name.get(&body).filter(|v| is_present(Some(*v))) {
                        extras.insert(field.name.to_string(), value.clone());
                    }
                }
            }
        }
    }

    if let Some(object) = body.as_object_mut() {
        object.insert(EXTRAS_KEY.to_string(), Value::Object(extras));
    }
    body
}

/// Replace numeric text in number fields with JSON numbers
fn coerce_numbers(tool: &ToolConfiguration, body: &mut Value) {
    for section in &tool.sections {
        match &section.body {
            SectionBody::Form { fields } => {
                for field in number_fields(fields) {
                    coerce_at(&field.name, body);
                }
            }
            SectionBody::DynamicList(list) => {
                let count = list.items(body).len();
                for index in 0..count {
                    for field in number_fields(&list.fields) {
                        coerce_at(&list.item_field_path(index, field), body);
                    }
                }
            }
        }
    }
}

fn number_fields(fields: &[FieldConfig]) -> impl Iterator<Item = &FieldConfig> {
    fields.iter().filter(|f| f.kind == FieldKind::Number)
}

fn coerce_at(path: &FieldPath, body: &mut Value) {
    if let Some(slot) = path.get_mut(body) {
        if let Some(number) = slot.as_str().and_then(parse_number) {
            *slot = Value::Number(number);
        }
    }
}

fn parse_number(text: &str) -> Option<Number> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    if let Ok(int) = text.parse::<i64>() {
        return Some(Number::from(int));
    }
    text.parse::<f64>().ok().and_then(Number::from_f64)
}
