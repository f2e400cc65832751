//! Non-disclosure agreement

use super::top_level_is;
use crate::state::{
    DynamicListConfig, FieldConfig, FieldPath, FieldSpan, SectionConfig, TabConfig,
    ToolConfiguration,
};
use serde_json::{json, Value};

fn is_one_way(tree: &Value) -> bool {
    top_level_is(tree, "agreement_type", "one_way")
}

fn party(key: &str, title: &str) -> SectionConfig {
    SectionConfig::form(
        key,
        title,
        "parties",
        vec![
            FieldConfig::text(FieldPath::key(key).then_key("name"), "Legal name")
                .required()
                .span(FieldSpan::Half),
            FieldConfig::text(FieldPath::key(key).then_key("signatory"), "Signatory")
                .span(FieldSpan::Half),
            FieldConfig::textarea(FieldPath::key(key).then_key("address"), "Registered address")
                .required(),
        ],
    )
}

pub fn tool() -> ToolConfiguration {
    ToolConfiguration {
        id: "nda".to_string(),
        title: "Non-Disclosure Agreement".to_string(),
        subtitle: "Mutual or one-way confidentiality agreement".to_string(),
        api_endpoint: "/api/documents/nda/preview".to_string(),
        download_endpoint: "/api/documents/nda/download".to_string(),
        initial_state: json!({
            "agreement_type": "mutual",
            "effective_date": "",
            "party_a": {"name": "", "signatory": "", "address": ""},
            "party_b": {"name": "", "signatory": "", "address": ""},
            "disclosing_party": "",
            "purpose": "",
            "term_years": "",
            "governing_law": "",
            "confidential_categories": []
        }),
        tabs: vec![
            TabConfig::new("parties", "Parties"),
            TabConfig::new("terms", "Terms"),
        ],
        sections: vec![
            SectionConfig::form(
                "agreement",
                "Agreement",
                "parties",
                vec![
                    FieldConfig::radio(
                        FieldPath::key("agreement_type"),
                        "Type",
                        &[("mutual", "Mutual"), ("one_way", "One-way")],
                    )
                    .required(),
                    FieldConfig::date(FieldPath::key("effective_date"), "Effective date")
                        .required()
                        .placeholder("YYYY-MM-DD"),
                ],
            ),
            party("party_a", "Party A"),
            party("party_b", "Party B"),
            SectionConfig::form(
                "disclosure",
                "Disclosure direction",
                "parties",
                vec![FieldConfig::select(
                    FieldPath::key("disclosing_party"),
                    "Who discloses information?",
                    &[("party_a", "Party A"), ("party_b", "Party B")],
                )
                .required()],
            )
            .when(is_one_way),
            SectionConfig::form(
                "terms",
                "Terms",
                "terms",
                vec![
                    FieldConfig::textarea(FieldPath::key("purpose"), "Purpose of disclosure")
                        .required(),
                    FieldConfig::number(FieldPath::key("term_years"), "Term (years)")
                        .required()
                        .span(FieldSpan::Half),
                    FieldConfig::text(FieldPath::key("governing_law"), "Governing law")
                        .required()
                        .placeholder("e.g. England and Wales")
                        .span(FieldSpan::Half),
                ],
            ),
            SectionConfig::dynamic_list(
                "confidential_categories",
                "Categories of confidential information",
                "terms",
                DynamicListConfig::new(
                    FieldPath::key("confidential_categories"),
                    "Category",
                    json!({"category": ""}),
                )
                .fields(vec![FieldConfig::text(FieldPath::key("category"), "Category")])
                .scalar_item(FieldPath::key("category")),
            ),
        ],
    }
}
