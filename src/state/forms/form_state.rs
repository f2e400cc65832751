//! Live state of one tool form: value tree, tab/focus cursor and workflow

use super::field::{FieldConfig, FieldKind};
use super::path::{FieldPath, PathError};
use super::payload::shape_payload;
use super::render::{control_for, value_as_text, Control};
use super::schema::{SectionBody, SectionConfig, ToolConfiguration};
use super::validation::{check_form_validity, validate, ValidationIssue};
use super::workflow::DocumentWorkflow;
use serde_json::Value;

/// Something on the current tab that can hold focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    /// A field; `item` is set for fields inside a dynamic-list item
    Field {
        section: usize,
        item: Option<usize>,
        field: usize,
    },
    AddItem {
        section: usize,
    },
    RemoveItem {
        section: usize,
        item: usize,
    },
    Generate,
}

/// Result of pressing Enter on the focused target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    None,
    Generate,
}

#[derive(Debug, Clone)]
pub struct FormState {
    pub tool: ToolConfiguration,
    pub values: Value,
    pub active_tab: usize,
    pub focus: usize,
    pub workflow: DocumentWorkflow,
}

impl FormState {
    /// Fresh form seeded from the tool's initial state
    pub fn new(tool: ToolConfiguration) -> Self {
        let values = tool.initial_state.clone();
        Self {
            tool,
            values,
            active_tab: 0,
            focus: 0,
            workflow: DocumentWorkflow::default(),
        }
    }

    pub fn active_tab_id(&self) -> &str {
        self.tool
            .tabs
            .get(self.active_tab)
            .map(|t| t.id.as_str())
            .unwrap_or_default()
    }

    /// Indices of the sections shown on the active tab right now
    pub fn visible_sections(&self) -> Vec<usize> {
        let tab = self.active_tab_id();
        self.tool
            .sections
            .iter()
            .enumerate()
            .filter(|(_, s)| s.tab == tab && s.is_visible(&self.values))
            .map(|(i, _)| i)
            .collect()
    }

    /// Focusable targets on the active tab, in draw order
    pub fn focus_targets(&self) -> Vec<FocusTarget> {
        let mut targets = Vec::new();
        for section in self.visible_sections() {
            match &self.tool.sections[section].body {
                SectionBody::Form { fields } => {
                    targets.extend((0..fields.len()).map(|field| FocusTarget::Field {
                        section,
                        item: None,
                        field,
                    }));
                }
                SectionBody::DynamicList(list) => {
                    for item in 0..list.items(&self.values).len() {
                        targets.extend((0..list.fields.len()).map(|field| FocusTarget::Field {
                            section,
                            item: Some(item),
                            field,
                        }));
                        targets.push(FocusTarget::RemoveItem { section, item });
                    }
                    targets.push(FocusTarget::AddItem { section });
                }
            }
        }
        targets.push(FocusTarget::Generate);
        targets
    }

    pub fn focused(&self) -> Option<FocusTarget> {
        let targets = self.focus_targets();
        targets.get(self.focus.min(targets.len().saturating_sub(1))).copied()
    }

    pub fn next_focus(&mut self) {
        let count = self.focus_targets().len();
        self.focus = (self.focus.min(count - 1) + 1) % count;
    }

    pub fn prev_focus(&mut self) {
        let count = self.focus_targets().len();
        let current = self.focus.min(count - 1);
        self.focus = if current == 0 { count - 1 } else { current - 1 };
    }

    /// Keep focus in range after sections appear or disappear
    fn clamp_focus(&mut self) {
        let count = self.focus_targets().len();
        self.focus = self.focus.min(count.saturating_sub(1));
    }

    fn focus_on(&mut self, target: FocusTarget) {
        if let Some(index) = self.focus_targets().iter().position(|t| *t == target) {
            self.focus = index;
        }
    }

    /// Switch to the next tab. Returns false when tabs are locked or at the end.
    pub fn next_tab(&mut self) -> bool {
        if self.workflow.tabs_locked() || self.active_tab + 1 >= self.tool.tabs.len() {
            return false;
        }
        self.active_tab += 1;
        self.focus = 0;
        true
    }

    pub fn prev_tab(&mut self) -> bool {
        if self.workflow.tabs_locked() || self.active_tab == 0 {
            return false;
        }
        self.active_tab -= 1;
        self.focus = 0;
        true
    }

    /// Field config and absolute value path of a field target
    pub fn field_at(&self, target: FocusTarget) -> Option<(&FieldConfig, FieldPath)> {
        let FocusTarget::Field {
            section,
            item,
            field,
        } = target
        else {
            return None;
        };
        match (&self.tool.sections.get(section)?.body, item) {
            (SectionBody::Form { fields }, None) => {
                let config = fields.get(field)?;
                Some((config, config.name.clone()))
            }
            (SectionBody::DynamicList(list), Some(item)) => {
                let config = list.fields.get(field)?;
                Some((config, list.item_field_path(item, config)))
            }
            _ => None,
        }
    }

    /// Control description for a field target, re-resolved against the tree
    pub fn control_at(&self, target: FocusTarget) -> Option<(&FieldConfig, Control)> {
        let (config, path) = self.field_at(target)?;
        let absolute = FieldConfig {
            name: path,
            ..config.clone()
        };
        let control = control_for(&absolute, &self.values, &self.values);
        Some((config, control))
    }

    pub fn section(&self, index: usize) -> Option<&SectionConfig> {
        self.tool.sections.get(index)
    }

    /// Write a value into the tree, then re-clamp focus since conditions may flip
    pub fn set_value(&mut self, path: &FieldPath, value: Value) -> Result<(), PathError> {
        path.set(&mut self.values, value)?;
        self.clamp_focus();
        Ok(())
    }

    fn write_focused(&mut self, path: &FieldPath, value: Value) {
        if let Err(e) = self.set_value(path, value) {
            tracing::warn!("Failed to write {path}: {e}");
        }
    }

    fn focused_field(&self) -> Option<(FieldKind, FieldPath)> {
        if !self.workflow.editing_allowed() {
            return None;
        }
        let (config, path) = self.field_at(self.focused()?)?;
        Some((config.kind.clone(), path))
    }

    /// Type a character into the focused field
    pub fn input_char(&mut self, c: char) {
        let Some((kind, path)) = self.focused_field() else {
            return;
        };
        let accepted = match kind {
            FieldKind::Text | FieldKind::Textarea => true,
            FieldKind::Number => c.is_ascii_digit() || c == '.' || c == '-',
            FieldKind::Date => c.is_ascii_digit() || c == '-',
            FieldKind::Select(_) | FieldKind::Radio(_) => false,
        };
        if !accepted {
            return;
        }
        let mut text = value_as_text(path.get(&self.values));
        text.push(c);
        self.write_focused(&path, Value::String(text));
    }

    pub fn backspace(&mut self) {
        let Some((kind, path)) = self.focused_field() else {
            return;
        };
        if kind.is_choice() {
            return;
        }
        let mut text = value_as_text(path.get(&self.values));
        if text.pop().is_some() {
            self.write_focused(&path, Value::String(text));
        }
    }

    pub fn newline(&mut self) {
        let Some((kind, path)) = self.focused_field() else {
            return;
        };
        if kind.is_multiline() {
            let mut text = value_as_text(path.get(&self.values));
            text.push('\n');
            self.write_focused(&path, Value::String(text));
        }
    }

    /// Move the focused choice field to the next/previous option
    pub fn cycle_choice(&mut self, forward: bool) {
        if !self.workflow.editing_allowed() {
            return;
        }
        let Some(target) = self.focused() else {
            return;
        };
        let Some((_, path)) = self.field_at(target) else {
            return;
        };
        let Some((
            _,
            Control::Choice {
                options, selected, ..
            },
        )) = self.control_at(target)
        else {
            return;
        };
        if options.is_empty() {
            return;
        }
        let count = options.len();
        let next = match (selected, forward) {
            (None, true) => 0,
            (None, false) => count - 1,
            (Some(i), true) => (i + 1) % count,
            (Some(i), false) => (i + count - 1) % count,
        };
        self.write_focused(&path, Value::String(options[next].value.clone()));
    }

    /// Append the template item to a dynamic list and focus its first field
    pub fn add_item(&mut self, section: usize) {
        if !self.workflow.editing_allowed() {
            return;
        }
        let Some(list) = self.section(section).and_then(SectionConfig::as_list) else {
            return;
        };
        let list_name = list.list_name.clone();
        let template = list.new_item.clone();
        let has_fields = !list.fields.is_empty();

        let index = match list_name.get_mut(&mut self.values) {
            Some(Value::Array(items)) => {
                items.push(template);
                items.len() - 1
            }
            _ => {
                if let Err(e) = list_name.set(&mut self.values, Value::Array(vec![template])) {
                    tracing::warn!("Failed to create list {list_name}: {e}");
                    return;
                }
                0
            }
        };
        tracing::debug!("Added item {index} to {list_name}");

        if has_fields {
            self.focus_on(FocusTarget::Field {
                section,
                item: Some(index),
                field: 0,
            });
        }
    }

    pub fn remove_item(&mut self, section: usize, item: usize) {
        if !self.workflow.editing_allowed() {
            return;
        }
        let Some(list) = self.section(section).and_then(SectionConfig::as_list) else {
            return;
        };
        let list_name = list.list_name.clone();
        if let Some(Value::Array(items)) = list_name.get_mut(&mut self.values) {
            if item < items.len() {
                items.remove(item);
                tracing::debug!("Removed item {item} from {list_name}");
            }
        }
        self.clamp_focus();
    }

    /// Enter on the focused target
    pub fn activate(&mut self) -> FormAction {
        match self.focused() {
            Some(FocusTarget::Generate) => FormAction::Generate,
            Some(FocusTarget::AddItem { section }) => {
                self.add_item(section);
                FormAction::None
            }
            Some(FocusTarget::RemoveItem { section, item }) => {
                self.remove_item(section, item);
                FormAction::None
            }
            Some(target @ FocusTarget::Field { .. }) => {
                let kind = self.field_at(target).map(|(config, _)| config.kind.clone());
                match kind {
                    Some(kind) if kind.is_choice() => self.cycle_choice(true),
                    Some(FieldKind::Textarea) => self.newline(),
                    _ => self.next_focus(),
                }
                FormAction::None
            }
            None => FormAction::None,
        }
    }

    pub fn is_valid(&self) -> bool {
        check_form_validity(&self.tool, &self.values)
    }

    pub fn validation_issues(&self) -> Vec<ValidationIssue> {
        validate(&self.tool, &self.values)
    }

    /// Request body for the current tree
    pub fn payload(&self) -> Value {
        shape_payload(&self.tool, &self.values)
    }
}
