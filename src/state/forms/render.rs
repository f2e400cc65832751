//! Rendering dispatch: field configuration + value tree -> control description
//!
//! Everything here is a pure function of the current tree, so dynamic
//! options and displayed values are re-resolved on every draw.

use super::field::{ChoiceOption, FieldConfig, FieldKind, OptionSource};
use super::path::FieldPath;
use serde_json::Value;

/// Label of the empty entry selects and dynamic radios start with
pub const SELECT_PLACEHOLDER: &str = "Select…";

/// Input hint for single-line controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Number,
    Date,
}

/// How a choice control presents its options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceStyle {
    Dropdown,
    Radio,
}

/// What the UI should draw for a field
#[derive(Debug, Clone, PartialEq)]
pub enum Control {
    SingleLine {
        kind: InputKind,
        value: String,
    },
    Multiline {
        value: String,
    },
    Choice {
        style: ChoiceStyle,
        options: Vec<ChoiceOption>,
        /// Index into `options` matching the current value
        selected: Option<usize>,
    },
}

impl Control {
    /// Current value as display text (choice controls show the option label)
    pub fn display_value(&self) -> String {
        match self {
            Control::SingleLine { value, .. } | Control::Multiline { value } => value.clone(),
            Control::Choice {
                options, selected, ..
            } => selected
                .and_then(|i| options.get(i))
                .filter(|o| !o.value.is_empty())
                .map(|o| o.label.clone())
                .unwrap_or_default(),
        }
    }
}

/// Render a scalar leaf as text for editing
pub fn value_as_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(other) => other.to_string(),
    }
}

/// Pick the control for `field`.
///
/// `scope` is the node the field's path is relative to (the list item for
/// dynamic-list fields, the whole tree otherwise). `tree` is always the
/// full value tree, used to resolve dynamic option sources.
pub fn control_for(field: &FieldConfig, scope: &Value, tree: &Value) -> Control {
    let current = value_as_text(field.name.get(scope));
    match &field.kind {
        FieldKind::Textarea => Control::Multiline { value: current },
        FieldKind::Select(source) => choice(ChoiceStyle::Dropdown, source, &current, tree),
        FieldKind::Radio(source) => choice(ChoiceStyle::Radio, source, &current, tree),
        FieldKind::Number => Control::SingleLine {
            kind: InputKind::Number,
            value: current,
        },
        FieldKind::Date => Control::SingleLine {
            kind: InputKind::Date,
            value: current,
        },
        FieldKind::Text => Control::SingleLine {
            kind: InputKind::Text,
            value: current,
        },
    }
}

fn choice(style: ChoiceStyle, source: &OptionSource, current: &str, tree: &Value) -> Control {
    let mut options = resolve_options(source, tree);
    if style == ChoiceStyle::Dropdown || matches!(source, OptionSource::Dynamic(_)) {
        options.insert(0, ChoiceOption::new("", SELECT_PLACEHOLDER));
    }
    let selected = options.iter().position(|o| o.value == current);
    Control::Choice {
        style,
        options,
        selected,
    }
}

/// Resolve the option set of a choice field against the live tree
pub fn resolve_options(source: &OptionSource, tree: &Value) -> Vec<ChoiceOption> {
    match source {
        OptionSource::Static(options) => options.clone(),
        OptionSource::Dynamic(list) => dynamic_options(list, tree),
    }
}

fn dynamic_options(list: &FieldPath, tree: &Value) -> Vec<ChoiceOption> {
    list.get(tree)
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(|entry| entry.get("name").and_then(Value::as_str))
                .filter(|name| !name.is_empty())
                .map(|name| ChoiceOption::new(name, name))
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn beneficiary_select() -> FieldConfig {
        FieldConfig::select_from(
            FieldPath::key("beneficiary_name"),
            "Beneficiary",
            FieldPath::key("beneficiaries"),
        )
    }

    mod dispatch {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_textarea_is_multiline() {
            let field = FieldConfig::textarea(FieldPath::key("notes"), "Notes");
            let tree = json!({"notes": "line one\nline two"});
            assert_eq!(
                control_for(&field, &tree, &tree),
                Control::Multiline {
                    value: "line one\nline two".to_string()
                }
            );
        }

        #[test]
        fn test_text_number_date_are_single_line() {
            let tree = json!({"a": "x", "b": 12, "c": "2024-01-31"});
            let cases = [
                (FieldConfig::text(FieldPath::key("a"), "A"), InputKind::Text, "x"),
                (FieldConfig::number(FieldPath::key("b"), "B"), InputKind::Number, "12"),
                (FieldConfig::date(FieldPath::key("c"), "C"), InputKind::Date, "2024-01-31"),
            ];
            for (field, kind, value) in cases {
                assert_eq!(
                    control_for(&field, &tree, &tree),
                    Control::SingleLine {
                        kind,
                        value: value.to_string()
                    }
                );
            }
        }

        #[test]
        fn test_missing_value_renders_empty() {
            let field = FieldConfig::text(FieldPath::key("testator").then_key("name"), "Name");
            let tree = json!({});
            assert_eq!(control_for(&field, &tree, &tree).display_value(), "");
        }

        #[test]
        fn test_radio_has_no_placeholder() {
            let field = FieldConfig::radio(
                FieldPath::key("mutual"),
                "Mutual",
                &[("yes", "Yes"), ("no", "No")],
            );
            let tree = json!({"mutual": "no"});
            let Control::Choice {
                style,
                options,
                selected,
            } = control_for(&field, &tree, &tree)
            else {
                panic!("expected choice control");
            };
            assert_eq!(style, ChoiceStyle::Radio);
            assert_eq!(options.len(), 2);
            assert_eq!(selected, Some(1));
        }

        #[test]
        fn test_item_scope_used_for_value() {
            let field = beneficiary_select();
            let tree = json!({
                "beneficiaries": [{"name": "Alice"}],
                "bequests": [{"beneficiary_name": "Alice"}]
            });
            let item = &tree["bequests"][0];
            let control = control_for(&field, item, &tree);
            assert_eq!(control.display_value(), "Alice");
        }
    }

    mod dynamic_options {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_offers_entered_names() {
            let tree = json!({"beneficiaries": [{"name": "Alice"}]});
            let Control::Choice { options, .. } = control_for(&beneficiary_select(), &tree, &tree)
            else {
                panic!("expected choice control");
            };
            assert_eq!(
                options,
                vec![
                    ChoiceOption::new("", SELECT_PLACEHOLDER),
                    ChoiceOption::new("Alice", "Alice"),
                ]
            );
        }

        #[test]
        fn test_empty_source_offers_only_placeholder() {
            let tree = json!({"beneficiaries": []});
            let Control::Choice { options, .. } = control_for(&beneficiary_select(), &tree, &tree)
            else {
                panic!("expected choice control");
            };
            assert_eq!(options, vec![ChoiceOption::new("", SELECT_PLACEHOLDER)]);
        }

        #[test]
        fn test_absent_source_offers_only_placeholder() {
            let tree = json!({});
            let Control::Choice { options, .. } = control_for(&beneficiary_select(), &tree, &tree)
            else {
                panic!("expected choice control");
            };
            assert_eq!(options.len(), 1);
        }

        #[test]
        fn test_skips_blank_names_and_keeps_order() {
            let tree = json!({"beneficiaries": [
                {"name": "Zed"}, {"name": ""}, {"relationship": "son"}, {"name": "Amy"}
            ]});
            let names: Vec<_> = resolve_options(
                &OptionSource::Dynamic(FieldPath::key("beneficiaries")),
                &tree,
            )
            .into_iter()
            .map(|o| o.value)
            .collect();
            assert_eq!(names, vec!["Zed", "Amy"]);
        }

        #[test]
        fn test_whitespace_name_is_offered() {
            let tree = json!({"beneficiaries": [{"name": " "}]});
            let options = resolve_options(
                &OptionSource::Dynamic(FieldPath::key("beneficiaries")),
                &tree,
            );
            assert_eq!(options, vec![ChoiceOption::new(" ", " ")]);
        }

        #[test]
        fn test_radio_over_empty_source_offers_only_placeholder() {
            let field = FieldConfig::radio_from(
                FieldPath::key("residuary_beneficiary"),
                "Residuary beneficiary",
                FieldPath::key("beneficiaries"),
            );
            let tree = json!({"beneficiaries": []});
            let Control::Choice {
                style,
                options,
                selected,
            } = control_for(&field, &tree, &tree)
            else {
                panic!("expected choice control");
            };
            assert_eq!(style, ChoiceStyle::Radio);
            assert_eq!(options, vec![ChoiceOption::new("", SELECT_PLACEHOLDER)]);
            assert_eq!(selected, None);
        }

        #[test]
        fn test_radio_lists_names_after_placeholder() {
            let field = FieldConfig::radio_from(
                FieldPath::key("residuary_beneficiary"),
                "Residuary beneficiary",
                FieldPath::key("beneficiaries"),
            );
            let tree = json!({
                "beneficiaries": [{"name": "Alice"}],
                "residuary_beneficiary": "Alice"
            });
            let Control::Choice {
                options, selected, ..
            } = control_for(&field, &tree, &tree)
            else {
                panic!("expected choice control");
            };
            assert_eq!(options.len(), 2);
            assert_eq!(selected, Some(1));
        }

        #[test]
        fn test_stale_selection_is_not_matched() {
            let tree = json!({
                "beneficiaries": [{"name": "Bob"}],
                "pick": "Alice"
            });
            let field = FieldConfig::select_from(
                FieldPath::key("pick"),
                "Pick",
                FieldPath::key("beneficiaries"),
            );
            let Control::Choice { selected, .. } = control_for(&field, &tree, &tree) else {
                panic!("expected choice control");
            };
            assert_eq!(selected, None);
        }
    }
}
