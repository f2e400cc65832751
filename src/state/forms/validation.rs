//! Submission gate: required fields and required lists

use super::path::{is_present, FieldPath};
use super::schema::{SectionBody, ToolConfiguration};
use serde_json::Value;
use std::fmt;

/// Banner shown when the user tries to generate an incomplete form
pub const INCOMPLETE_FORM_MESSAGE: &str = "Please fill in all required fields before generating.";

/// One reason the form cannot be submitted yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    /// A required field resolved to an empty value
    MissingField { section: String, path: FieldPath },
    /// A required dynamic list has no items
    EmptyList { section: String, list: FieldPath },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::MissingField { section, path } => {
                write!(f, "{section}: `{path}` is required")
            }
            ValidationIssue::EmptyList { section, list } => {
                write!(f, "{section}: add at least one entry to `{list}`")
            }
        }
    }
}

/// Collect every validation issue in registry order.
///
/// Sections whose condition is false contribute nothing.
pub fn validate(tool: &ToolConfiguration, tree: &Value) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for section in tool.sections.iter().filter(|s| s.is_visible(tree)) {
        match &section.body {
            SectionBody::Form { fields } => {
                for field in fields.iter().filter(|f| f.required) {
                    if !is_present(field.name.get(tree)) {
                        issues.push(ValidationIssue::MissingField {
                            section: section.key.clone(),
                            path: field.name.clone(),
                        });
                    }
                }
            }
            SectionBody::DynamicList(list) => {
                let items = list.items(tree);
                if list.required && items.is_empty() {
                    issues.push(ValidationIssue::EmptyList {
                        section: section.key.clone(),
                        list: list.list_name.clone(),
                    });
                }
                for (index, item) in items.iter().enumerate() {
                    for field in list.fields.iter().filter(|f| f.required) {
                        if !is_present(field.name.get(item)) {
                            issues.push(ValidationIssue::MissingField {
                                section: section.key.clone(),
                                path: list.item_field_path(index, field),
                            });
                        }
                    }
                }
            }
        }
    }

    issues
}

/// Whether the Generate action is permitted for `tree`
pub fn check_form_validity(tool: &ToolConfiguration, tree: &Value) -> bool {
    validate(tool, tree).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::field::FieldConfig;
    use crate::state::forms::schema::{DynamicListConfig, SectionConfig, TabConfig};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn has_pets(tree: &Value) -> bool {
        tree.get("pets_allowed").and_then(Value::as_str) == Some("yes")
    }

    fn tool() -> ToolConfiguration {
        ToolConfiguration {
            id: "lease".to_string(),
            title: "Lease".to_string(),
            subtitle: String::new(),
            api_endpoint: "/preview".to_string(),
            download_endpoint: "/download".to_string(),
            initial_state: json!({
                "tenant": {"name": ""},
                "pets_allowed": "no",
                "pet": {"description": ""},
                "occupants": []
            }),
            tabs: vec![TabConfig::new("main", "Main")],
            sections: vec![
                SectionConfig::form(
                    "tenant",
                    "Tenant",
                    "main",
                    vec![
                        FieldConfig::text(FieldPath::key("tenant").then_key("name"), "Name")
                            .required(),
                        FieldConfig::text(FieldPath::key("tenant").then_key("phone"), "Phone"),
                    ],
                ),
                SectionConfig::form(
                    "pet",
                    "Pet",
                    "main",
                    vec![FieldConfig::text(
                        FieldPath::key("pet").then_key("description"),
                        "Description",
                    )
                    .required()],
                )
                .when(has_pets),
                SectionConfig::dynamic_list(
                    "occupants",
                    "Occupants",
                    "main",
                    DynamicListConfig::new(
                        FieldPath::key("occupants"),
                        "Occupant",
                        json!({"name": "", "age": ""}),
                    )
                    .fields(vec![
                        FieldConfig::text(FieldPath::key("name"), "Name").required(),
                        FieldConfig::number(FieldPath::key("age"), "Age").required(),
                    ])
                    .required(),
                ),
            ],
        }
    }

    fn filled() -> Value {
        json!({
            "tenant": {"name": "Tina"},
            "pets_allowed": "no",
            "pet": {"description": ""},
            "occupants": [{"name": "Tina", "age": 30}]
        })
    }

    #[test]
    fn test_initial_state_is_invalid() {
        let tool = tool();
        assert!(!check_form_validity(&tool, &tool.initial_state));
    }

    #[test]
    fn test_filled_form_is_valid() {
        assert!(check_form_validity(&tool(), &filled()));
    }

    #[test]
    fn test_missing_required_field_reported() {
        let mut tree = filled();
        tree["tenant"]["name"] = json!("");
        assert_eq!(
            validate(&tool(), &tree),
            vec![ValidationIssue::MissingField {
                section: "tenant".to_string(),
                path: FieldPath::key("tenant").then_key("name"),
            }]
        );
    }

    #[test]
    fn test_optional_field_never_blocks() {
        let mut tree = filled();
        tree["tenant"]["phone"] = Value::Null;
        assert!(check_form_validity(&tool(), &tree));
    }

    #[test]
    fn test_hidden_section_does_not_affect_validity() {
        let tool = tool();
        let mut tree = filled();
        let before = check_form_validity(&tool, &tree);
        tree["pet"]["description"] = json!("a cat");
        assert_eq!(check_form_validity(&tool, &tree), before);
        tree["pet"]["description"] = json!("");
        assert_eq!(check_form_validity(&tool, &tree), before);
    }

    #[test]
    fn test_visible_conditional_section_is_validated() {
        let mut tree = filled();
        tree["pets_allowed"] = json!("yes");
        assert!(!check_form_validity(&tool(), &tree));
        tree["pet"]["description"] = json!("a cat");
        assert!(check_form_validity(&tool(), &tree));
    }

    #[test]
    fn test_required_list_empty_fails() {
        let mut tree = filled();
        tree["occupants"] = json!([]);
        assert_eq!(
            validate(&tool(), &tree),
            vec![ValidationIssue::EmptyList {
                section: "occupants".to_string(),
                list: FieldPath::key("occupants"),
            }]
        );
    }

    #[test]
    fn test_required_list_missing_fails() {
        let mut tree = filled();
        tree.as_object_mut().unwrap().remove("occupants");
        assert!(!check_form_validity(&tool(), &tree));
    }

    #[test]
    fn test_list_item_fields_validated() {
        let mut tree = filled();
        tree["occupants"] = json!([{"name": "Tina", "age": 30}, {"name": "", "age": 4}]);
        assert_eq!(
            validate(&tool(), &tree),
            vec![ValidationIssue::MissingField {
                section: "occupants".to_string(),
                path: "occupants.1.name".parse().unwrap(),
            }]
        );
    }

    #[test]
    fn test_whitespace_counts_as_present() {
        let mut tree = filled();
        tree["tenant"]["name"] = json!(" ");
        tree["occupants"][0]["name"] = json!("  ");
        assert_eq!(validate(&tool(), &tree), vec![]);
    }

    #[test]
    fn test_numeric_zero_counts_as_present() {
        let mut tree = filled();
        tree["occupants"][0]["age"] = json!(0);
        assert!(check_form_validity(&tool(), &tree));
    }

    #[test]
    fn test_issue_display() {
        let issue = ValidationIssue::EmptyList {
            section: "occupants".to_string(),
            list: FieldPath::key("occupants"),
        };
        assert_eq!(
            issue.to_string(),
            "occupants: add at least one entry to `occupants`"
        );
    }
}
