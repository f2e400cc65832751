//! Declarative tool configuration: tabs, sections and dynamic lists

use super::field::FieldConfig;
use super::path::FieldPath;
use serde_json::Value;

/// Predicate over the whole value tree deciding whether a section is shown
pub type Condition = fn(&Value) -> bool;

/// A tab grouping sections visually
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabConfig {
    pub id: String,
    pub label: String,
}

impl TabConfig {
    pub fn new(id: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
        }
    }
}

/// A repeatable sub-form bound to an array in the value tree
#[derive(Debug, Clone)]
pub struct DynamicListConfig {
    pub list_name: FieldPath,
    /// Singular label for one item, e.g. "Executor"
    pub item_title: String,
    /// Template appended on "add"
    pub new_item: Value,
    /// Fields of one item, addressed relative to the item
    pub fields: Vec<FieldConfig>,
    /// The list must contain at least one item
    pub required: bool,
    /// When set, each item is submitted as the value at this item path
    /// instead of as an object
    pub scalar_item: Option<FieldPath>,
}

impl DynamicListConfig {
    pub fn new(list_name: FieldPath, item_title: &str, new_item: Value) -> Self {
        Self {
            list_name,
            item_title: item_title.to_string(),
            new_item,
            fields: Vec::new(),
            required: false,
            scalar_item: None,
        }
    }

    pub fn fields(mut self, fields: Vec<FieldConfig>) -> Self {
        self.fields = fields;
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn scalar_item(mut self, field: FieldPath) -> Self {
        self.scalar_item = Some(field);
        self
    }

    /// Items currently in the bound array (empty when missing)
    pub fn items<'a>(&self, tree: &'a Value) -> &'a [Value] {
        self.list_name
            .get(tree)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Absolute path of `field` inside item `index`
    pub fn item_field_path(&self, index: usize, field: &FieldConfig) -> FieldPath {
        self.list_name.clone().then_index(index).join(&field.name)
    }
}

/// Variant-specific part of a section
#[derive(Debug, Clone)]
pub enum SectionBody {
    Form { fields: Vec<FieldConfig> },
    DynamicList(DynamicListConfig),
}

/// A labeled group of fields or a repeatable sub-form inside a tab
#[derive(Debug, Clone)]
pub struct SectionConfig {
    pub key: String,
    pub title: String,
    /// Id of the tab this section is shown in
    pub tab: String,
    pub condition: Option<Condition>,
    pub body: SectionBody,
}

impl SectionConfig {
    pub fn form(key: &str, title: &str, tab: &str, fields: Vec<FieldConfig>) -> Self {
        Self {
            key: key.to_string(),
            title: title.to_string(),
            tab: tab.to_string(),
            condition: None,
            body: SectionBody::Form { fields },
        }
    }

    pub fn dynamic_list(key: &str, title: &str, tab: &str, list: DynamicListConfig) -> Self {
        Self {
            key: key.to_string(),
            title: title.to_string(),
            tab: tab.to_string(),
            condition: None,
            body: SectionBody::DynamicList(list),
        }
    }

    /// Only show (and validate) this section while `condition` holds
    pub fn when(mut self, condition: Condition) -> Self {
        self.condition = Some(condition);
        self
    }

    pub fn is_visible(&self, tree: &Value) -> bool {
        self.condition.map_or(true, |condition| condition(tree))
    }

    pub fn as_list(&self) -> Option<&DynamicListConfig> {
        match &self.body {
            SectionBody::DynamicList(list) => Some(list),
            SectionBody::Form { .. } => None,
        }
    }
}

/// Full description of one generated document type
#[derive(Debug, Clone)]
pub struct ToolConfiguration {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub api_endpoint: String,
    pub download_endpoint: String,
    pub initial_state: Value,
    pub tabs: Vec<TabConfig>,
    pub sections: Vec<SectionConfig>,
}

impl ToolConfiguration {
    pub fn section(&self, key: &str) -> Option<&SectionConfig> {
        self.sections.iter().find(|s| s.key == key)
    }

    /// Sections of a tab, in registry order, ignoring conditions
    pub fn sections_in_tab<'a>(&'a self, tab_id: &'a str) -> impl Iterator<Item = &'a SectionConfig> {
        self.sections.iter().filter(move |s| s.tab == tab_id)
    }

    /// File name used when saving the downloaded document
    pub fn download_filename(&self) -> String {
        format!("{}.docx", self.title.replace(' ', "_"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn has_children(tree: &Value) -> bool {
        tree.get("has_minor_children").and_then(Value::as_str) == Some("yes")
    }

    fn sample_tool() -> ToolConfiguration {
        ToolConfiguration {
            id: "sample".to_string(),
            title: "Last Will and Testament".to_string(),
            subtitle: String::new(),
            api_endpoint: "/preview".to_string(),
            download_endpoint: "/download".to_string(),
            initial_state: json!({"executors": []}),
            tabs: vec![TabConfig::new("people", "People"), TabConfig::new("other", "Other")],
            sections: vec![
                SectionConfig::form(
                    "testator",
                    "Testator",
                    "people",
                    vec![FieldConfig::text(FieldPath::key("name"), "Name")],
                ),
                SectionConfig::dynamic_list(
                    "executors",
                    "Executors",
                    "people",
                    DynamicListConfig::new(
                        FieldPath::key("executors"),
                        "Executor",
                        json!({"name": ""}),
                    ),
                ),
                SectionConfig::form("guardian", "Guardian", "other", vec![]).when(has_children),
            ],
        }
    }

    #[test]
    fn test_download_filename_replaces_spaces() {
        assert_eq!(
            sample_tool().download_filename(),
            "Last_Will_and_Testament.docx"
        );
    }

    #[test]
    fn test_sections_in_tab_keep_order() {
        let tool = sample_tool();
        let keys: Vec<_> = tool.sections_in_tab("people").map(|s| s.key.as_str()).collect();
        assert_eq!(keys, vec!["testator", "executors"]);
    }

    #[test]
    fn test_unconditional_section_is_visible() {
        let tool = sample_tool();
        assert!(tool.section("testator").unwrap().is_visible(&json!({})));
    }

    #[test]
    fn test_condition_controls_visibility() {
        let tool = sample_tool();
        let guardian = tool.section("guardian").unwrap();
        assert!(!guardian.is_visible(&json!({"has_minor_children": "no"})));
        assert!(guardian.is_visible(&json!({"has_minor_children": "yes"})));
    }

    #[test]
    fn test_items_of_missing_list_is_empty() {
        let tool = sample_tool();
        let list = tool.section("executors").unwrap().as_list().unwrap();
        assert!(list.items(&json!({})).is_empty());
        assert_eq!(list.items(&json!({"executors": [{"name": "a"}]})).len(), 1);
    }

    #[test]
    fn test_item_field_path() {
        let list = DynamicListConfig::new(FieldPath::key("executors"), "Executor", json!({}));
        let field = FieldConfig::text(FieldPath::key("name"), "Name");
        assert_eq!(list.item_field_path(2, &field).to_string(), "executors.2.name");
    }
}
