use crate::analysis::json_schema::SchemaDocument;
use crate::models::{ComponentModel, ComponentOptionModel, EndpointOptionModel};

const COMPONENT_SECTION: &str = "component";
const COMPONENT_PROPERTIES_SECTION: &str = "componentProperties";
const ENDPOINT_PROPERTIES_SECTION: &str = "properties";

/// Build the typed component model from a parsed metadata document.
///
/// Every field is read through `safe_value`, so partial documents produce a
/// model with empty strings rather than an error. Option order follows the
/// document; option names are not deduplicated here.
pub fn build_component_model(document: &SchemaDocument) -> ComponentModel {
    let header = document.scalar_section(COMPONENT_SECTION);

    let mut model = ComponentModel {
        scheme: header.safe_value("scheme").to_string(),
        syntax: header.safe_value("syntax").to_string(),
        alternative_syntax: header.safe_value("alternativeSyntax").to_string(),
        title: header.safe_value("title").to_string(),
        description: header.safe_value("description").to_string(),
        label: header.safe_value("label").to_string(),
        deprecated: header.safe_value("deprecated").to_string(),
        consumer_only: header.safe_value("consumerOnly").to_string(),
        producer_only: header.safe_value("producerOnly").to_string(),
        java_type: header.safe_value("javaType").to_string(),
        group_id: header.safe_value("groupId").to_string(),
        artifact_id: header.safe_value("artifactId").to_string(),
        version: header.safe_value("version").to_string(),
        ..Default::default()
    };

    for row in document.list_section(COMPONENT_PROPERTIES_SECTION) {
        model.add_component_option(ComponentOptionModel {
            name: row.safe_value("name").to_string(),
            kind: row.safe_value("kind").to_string(),
            data_type: row.safe_value("type").to_string(),
            java_type: row.safe_value("javaType").to_string(),
            deprecated: row.safe_value("deprecated").to_string(),
            description: row.safe_value("description").to_string(),
        });
    }

    for row in document.list_section(ENDPOINT_PROPERTIES_SECTION) {
        model.add_endpoint_option(EndpointOptionModel {
            name: row.safe_value("name").to_string(),
            kind: row.safe_value("kind").to_string(),
            group: row.safe_value("group").to_string(),
            required: row.safe_value("required").to_string(),
            data_type: row.safe_value("type").to_string(),
            java_type: row.safe_value("javaType").to_string(),
            enums: row.safe_value("enum").to_string(),
            prefix: row.safe_value("prefix").to_string(),
            multi_value: row.safe_value("multiValue").to_string(),
            deprecated: row.safe_value("deprecated").to_string(),
            default_value: row.safe_value("defaultValue").to_string(),
            description: row.safe_value("description").to_string(),
        });
    }

    model
}
