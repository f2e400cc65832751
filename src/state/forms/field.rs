//! Field configuration value objects

use super::path::FieldPath;

/// A single selectable option
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceOption {
    pub value: String,
    pub label: String,
}

impl ChoiceOption {
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

/// Where a choice field gets its options from
#[derive(Debug, Clone, PartialEq)]
pub enum OptionSource {
    /// Fixed options authored with the tool
    Static(Vec<ChoiceOption>),
    /// Top-level array in the value tree; each entry's `.name` becomes an option
    Dynamic(FieldPath),
}

/// The six supported input kinds
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Text,
    Number,
    Date,
    Textarea,
    Select(OptionSource),
    Radio(OptionSource),
}

impl FieldKind {
    pub fn is_choice(&self) -> bool {
        matches!(self, FieldKind::Select(_) | FieldKind::Radio(_))
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, FieldKind::Textarea)
    }
}

/// Layout hint for how wide a field should be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldSpan {
    Half,
    Third,
    #[default]
    Full,
}

/// Configuration of one atomic input
#[derive(Debug, Clone, PartialEq)]
pub struct FieldConfig {
    /// Path of the value, relative to the list item for dynamic-list fields
    pub name: FieldPath,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
    pub placeholder: Option<String>,
    pub span: FieldSpan,
}

impl FieldConfig {
    fn new(name: FieldPath, label: &str, kind: FieldKind) -> Self {
        Self {
            name,
            label: label.to_string(),
            kind,
            required: false,
            placeholder: None,
            span: FieldSpan::Full,
        }
    }

    pub fn text(name: FieldPath, label: &str) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    pub fn number(name: FieldPath, label: &str) -> Self {
        Self::new(name, label, FieldKind::Number)
    }

    pub fn date(name: FieldPath, label: &str) -> Self {
        Self::new(name, label, FieldKind::Date)
    }

    pub fn textarea(name: FieldPath, label: &str) -> Self {
        Self::new(name, label, FieldKind::Textarea)
    }

    pub fn select(name: FieldPath, label: &str, options: &[(&str, &str)]) -> Self {
        Self::new(name, label, FieldKind::Select(static_options(options)))
    }

    pub fn radio(name: FieldPath, label: &str, options: &[(&str, &str)]) -> Self {
        Self::new(name, label, FieldKind::Radio(static_options(options)))
    }

    /// Select whose options are the `.name` entries of another list
    pub fn select_from(name: FieldPath, label: &str, source: FieldPath) -> Self {
        Self::new(name, label, FieldKind::Select(OptionSource::Dynamic(source)))
    }

    /// Radio group over the `.name` entries of another list
    pub fn radio_from(name: FieldPath, label: &str, source: FieldPath) -> Self {
        Self::new(name, label, FieldKind::Radio(OptionSource::Dynamic(source)))
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = Some(placeholder.to_string());
        self
    }

    pub fn span(mut self, span: FieldSpan) -> Self {
        self.span = span;
        self
    }

    /// Label with a required marker for display
    pub fn display_label(&self) -> String {
        if self.required {
            format!("{} *", self.label)
        } else {
            self.label.clone()
        }
    }
}

fn static_options(options: &[(&str, &str)]) -> OptionSource {
    OptionSource::Static(
        options
            .iter()
            .map(|(value, label)| ChoiceOption::new(value, label))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_defaults() {
        let field = FieldConfig::text(FieldPath::key("name"), "Name");
        assert!(!field.required);
        assert!(field.placeholder.is_none());
        assert_eq!(field.span, FieldSpan::Full);
        assert_eq!(field.kind, FieldKind::Text);
    }

    #[test]
    fn test_builder_chain() {
        let field = FieldConfig::number(FieldPath::key("rent"), "Rent")
            .required()
            .placeholder("1200")
            .span(FieldSpan::Half);
        assert!(field.required);
        assert_eq!(field.placeholder.as_deref(), Some("1200"));
        assert_eq!(field.span, FieldSpan::Half);
    }

    #[test]
    fn test_static_options_preserve_order() {
        let field = FieldConfig::radio(
            FieldPath::key("mutual"),
            "Mutual?",
            &[("yes", "Yes"), ("no", "No")],
        );
        let FieldKind::Radio(OptionSource::Static(options)) = field.kind else {
            panic!("expected static radio options");
        };
        assert_eq!(options[0], ChoiceOption::new("yes", "Yes"));
        assert_eq!(options[1], ChoiceOption::new("no", "No"));
    }

    #[test]
    fn test_select_from_is_dynamic() {
        let field = FieldConfig::select_from(
            FieldPath::key("beneficiary_name"),
            "Beneficiary",
            FieldPath::key("beneficiaries"),
        );
        assert!(field.kind.is_choice());
        assert!(matches!(
            field.kind,
            FieldKind::Select(OptionSource::Dynamic(_))
        ));
    }

    #[test]
    fn test_display_label_marks_required() {
        let field = FieldConfig::text(FieldPath::key("name"), "Name").required();
        assert_eq!(field.display_label(), "Name *");
    }

    #[test]
    fn test_only_textarea_is_multiline() {
        assert!(FieldKind::Textarea.is_multiline());
        assert!(!FieldKind::Text.is_multiline());
        assert!(!FieldKind::Date.is_multiline());
    }
}
