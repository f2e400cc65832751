//! Form domain layer
//!
//! Config-driven document forms: typed schema, value-tree addressing,
//! rendering dispatch, validation, payload shaping and the preview/download
//! workflow.

mod field;
mod form_state;
mod path;
mod payload;
mod render;
mod schema;
mod validation;
mod workflow;

pub use field::{ChoiceOption, FieldConfig, FieldKind, FieldSpan, OptionSource};
pub use form_state::{FocusTarget, FormAction, FormState};
pub use path::{is_present, FieldPath, PathError, PathSegment};
pub use payload::{shape_payload, EXTRAS_KEY};
pub use render::{control_for, resolve_options, ChoiceStyle, Control, InputKind, SELECT_PLACEHOLDER};
pub use schema::{
    Condition, DynamicListConfig, SectionBody, SectionConfig, TabConfig, ToolConfiguration,
};
pub use validation::{check_form_validity, validate, ValidationIssue, INCOMPLETE_FORM_MESSAGE};
pub use workflow::{DocumentWorkflow, Preview, RequestTicket, WorkflowError, WorkflowPhase};
