//! Residential rental agreement

use super::top_level_is;
use crate::state::{
    DynamicListConfig, FieldConfig, FieldPath, FieldSpan, SectionConfig, TabConfig,
    ToolConfiguration,
};
use serde_json::{json, Value};

fn pets_allowed(tree: &Value) -> bool {
    top_level_is(tree, "pets_allowed", "yes")
}

fn at(section: &str, field: &str) -> FieldPath {
    FieldPath::key(section).then_key(field)
}

pub fn tool() -> ToolConfiguration {
    ToolConfiguration {
        id: "rental-agreement".to_string(),
        title: "Rental Agreement".to_string(),
        subtitle: "Residential lease between a landlord and tenants".to_string(),
        api_endpoint: "/api/documents/rental-agreement/preview".to_string(),
        download_endpoint: "/api/documents/rental-agreement/download".to_string(),
        initial_state: json!({
            "landlord": {"name": "", "address": "", "phone": ""},
            "tenants": [],
            "property": {"address": "", "type": "", "furnished": "no"},
            "lease": {
                "start_date": "",
                "term_months": "",
                "monthly_rent": "",
                "security_deposit": "",
                "rent_due_day": ""
            },
            "pets_allowed": "no",
            "pet_policy": {"description": "", "pet_deposit": ""},
            "additional_terms": []
        }),
        tabs: vec![
            TabConfig::new("parties", "Parties"),
            TabConfig::new("property", "Property"),
            TabConfig::new("terms", "Lease Terms"),
        ],
        sections: vec![
            SectionConfig::form(
                "landlord",
                "Landlord",
                "parties",
                vec![
                    FieldConfig::text(at("landlord", "name"), "Name")
                        .required()
                        .span(FieldSpan::Half),
                    FieldConfig::text(at("landlord", "phone"), "Phone").span(FieldSpan::Half),
                    FieldConfig::text(at("landlord", "address"), "Address for notices")
                        .required(),
                ],
            ),
            SectionConfig::dynamic_list(
                "tenants",
                "Tenants",
                "parties",
                DynamicListConfig::new(
                    FieldPath::key("tenants"),
                    "Tenant",
                    json!({"name": "", "email": ""}),
                )
                .fields(vec![
                    FieldConfig::text(FieldPath::key("name"), "Name")
                        .required()
                        .span(FieldSpan::Half),
                    FieldConfig::text(FieldPath::key("email"), "Email").span(FieldSpan::Half),
                ])
                .required(),
            ),
            SectionConfig::form(
                "property",
                "Property",
                "property",
                vec![
                    FieldConfig::textarea(at("property", "address"), "Property address")
                        .required(),
                    FieldConfig::select(
                        at("property", "type"),
                        "Property type",
                        &[
                            ("apartment", "Apartment"),
                            ("house", "House"),
                            ("condo", "Condominium"),
                            ("room", "Room"),
                        ],
                    )
                    .required()
                    .span(FieldSpan::Half),
                    FieldConfig::radio(
                        at("property", "furnished"),
                        "Furnished",
                        &[("no", "No"), ("yes", "Yes")],
                    )
                    .span(FieldSpan::Half),
                ],
            ),
            SectionConfig::form(
                "lease",
                "Rent and term",
                "terms",
                vec![
                    FieldConfig::date(at("lease", "start_date"), "Start date")
                        .required()
                        .placeholder("YYYY-MM-DD")
                        .span(FieldSpan::Third),
                    FieldConfig::number(at("lease", "term_months"), "Term (months)")
                        .required()
                        .span(FieldSpan::Third),
                    FieldConfig::number(at("lease", "monthly_rent"), "Monthly rent")
                        .required()
                        .span(FieldSpan::Third),
                    FieldConfig::number(at("lease", "security_deposit"), "Security deposit")
                        .span(FieldSpan::Half),
                    FieldConfig::number(at("lease", "rent_due_day"), "Rent due day")
                        .placeholder("1-28")
                        .span(FieldSpan::Half),
                    FieldConfig::radio(
                        FieldPath::key("pets_allowed"),
                        "Pets allowed",
                        &[("no", "No"), ("yes", "Yes")],
                    ),
                ],
            ),
            SectionConfig::form(
                "pet_policy",
                "Pet policy",
                "terms",
                vec![
                    FieldConfig::text(at("pet_policy", "description"), "Permitted pets")
                        .required(),
                    FieldConfig::number(at("pet_policy", "pet_deposit"), "Pet deposit"),
                ],
            )
            .when(pets_allowed),
            SectionConfig::dynamic_list(
                "additional_terms",
                "Additional terms",
                "terms",
                DynamicListConfig::new(
                    FieldPath::key("additional_terms"),
                    "Term",
                    json!({"term": ""}),
                )
                .fields(vec![FieldConfig::textarea(FieldPath::key("term"), "Term")])
                .scalar_item(FieldPath::key("term")),
            ),
        ],
    }
}
