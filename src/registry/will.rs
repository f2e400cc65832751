//! Last Will and Testament

use super::top_level_is;
use crate::state::{
    DynamicListConfig, FieldConfig, FieldPath, FieldSpan, SectionConfig, TabConfig,
    ToolConfiguration,
};
use serde_json::{json, Value};

fn has_minor_children(tree: &Value) -> bool {
    top_level_is(tree, "has_minor_children", "yes")
}

fn at(section: &str, field: &str) -> FieldPath {
    FieldPath::key(section).then_key(field)
}

pub fn tool() -> ToolConfiguration {
    ToolConfiguration {
        id: "will".to_string(),
        title: "Last Will and Testament".to_string(),
        subtitle: "Name executors, beneficiaries and specific bequests".to_string(),
        api_endpoint: "/api/documents/will/preview".to_string(),
        download_endpoint: "/api/documents/will/download".to_string(),
        initial_state: json!({
            "testator": {"full_name": "", "address": "", "occupation": ""},
            "has_minor_children": "no",
            "guardian": {"name": "", "relationship": "", "address": ""},
            "executors": [],
            "beneficiaries": [],
            "bequests": [],
            "residuary": {"beneficiary_name": "", "alternate_beneficiary": ""},
            "execution": {"date": "", "place": ""},
            "additional_clauses": []
        }),
        tabs: vec![
            TabConfig::new("testator", "Testator"),
            TabConfig::new("family", "Family & Executors"),
            TabConfig::new("gifts", "Gifts"),
            TabConfig::new("signing", "Signing"),
        ],
        sections: vec![
            SectionConfig::form(
                "testator",
                "About you",
                "testator",
                vec![
                    FieldConfig::text(at("testator", "full_name"), "Full legal name")
                        .required()
                        .span(FieldSpan::Half),
                    FieldConfig::text(at("testator", "occupation"), "Occupation")
                        .span(FieldSpan::Half),
                    FieldConfig::textarea(at("testator", "address"), "Residential address")
                        .required(),
                    FieldConfig::radio(
                        FieldPath::key("has_minor_children"),
                        "Do you have children under 18?",
                        &[("no", "No"), ("yes", "Yes")],
                    ),
                ],
            ),
            SectionConfig::form(
                "guardian",
                "Guardian for minor children",
                "family",
                vec![
                    FieldConfig::text(at("guardian", "name"), "Guardian name")
                        .required()
                        .span(FieldSpan::Half),
                    FieldConfig::text(at("guardian", "relationship"), "Relationship to you")
                        .required()
                        .span(FieldSpan::Half),
                    FieldConfig::text(at("guardian", "address"), "Guardian address"),
                ],
            )
            .when(has_minor_children),
            SectionConfig::dynamic_list(
                "executors",
                "Executors",
                "family",
                DynamicListConfig::new(
                    FieldPath::key("executors"),
                    "Executor",
                    json!({"name": "", "relationship": "", "address": ""}),
                )
                .fields(vec![
                    FieldConfig::text(FieldPath::key("name"), "Name")
                        .required()
                        .span(FieldSpan::Third),
                    FieldConfig::text(FieldPath::key("relationship"), "Relationship")
                        .required()
                        .span(FieldSpan::Third),
                    FieldConfig::text(FieldPath::key("address"), "Address")
                        .required()
                        .span(FieldSpan::Third),
                ])
                .required(),
            ),
            SectionConfig::dynamic_list(
                "beneficiaries",
                "Beneficiaries",
                "gifts",
                DynamicListConfig::new(
                    FieldPath::key("beneficiaries"),
                    "Beneficiary",
                    json!({"name": "", "relationship": ""}),
                )
                .fields(vec![
                    FieldConfig::text(FieldPath::key("name"), "Name")
                        .required()
                        .span(FieldSpan::Half),
                    FieldConfig::text(FieldPath::key("relationship"), "Relationship")
                        .span(FieldSpan::Half),
                ])
                .required(),
            ),
            SectionConfig::dynamic_list(
                "bequests",
                "Specific bequests",
                "gifts",
                DynamicListConfig::new(
                    FieldPath::key("bequests"),
                    "Bequest",
                    json!({"beneficiary_name": "", "item_description": "", "estimated_value": ""}),
                )
                .fields(vec![
                    FieldConfig::select_from(
                        FieldPath::key("beneficiary_name"),
                        "Beneficiary",
                        FieldPath::key("beneficiaries"),
                    )
                    .required(),
                    FieldConfig::text(FieldPath::key("item_description"), "Item or gift")
                        .required()
                        .placeholder("e.g. my grandmother's ring"),
                    FieldConfig::number(FieldPath::key("estimated_value"), "Estimated value")
                        .span(FieldSpan::Half),
                ])
                .required(),
            ),
            SectionConfig::form(
                "residuary",
                "Residuary estate",
                "gifts",
                vec![
                    FieldConfig::radio_from(
                        at("residuary", "beneficiary_name"),
                        "Residuary beneficiary",
                        FieldPath::key("beneficiaries"),
                    )
                    .required(),
                    FieldConfig::text(
                        at("residuary", "alternate_beneficiary"),
                        "Alternate beneficiary",
                    ),
                ],
            ),
            SectionConfig::form(
                "execution",
                "Execution",
                "signing",
                vec![
                    FieldConfig::date(at("execution", "date"), "Date of signing")
                        .required()
                        .placeholder("YYYY-MM-DD")
                        .span(FieldSpan::Half),
                    FieldConfig::text(at("execution", "place"), "Place of signing")
                        .required()
                        .span(FieldSpan::Half),
                ],
            ),
            SectionConfig::dynamic_list(
                "additional_clauses",
                "Additional clauses",
                "signing",
                DynamicListConfig::new(
                    FieldPath::key("additional_clauses"),
                    "Clause",
                    json!({"paragraph": ""}),
                )
                .fields(vec![FieldConfig::textarea(
                    FieldPath::key("paragraph"),
                    "Clause text",
                )])
                .scalar_item(FieldPath::key("paragraph")),
            ),
        ],
    }
}
