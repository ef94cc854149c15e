use serde::Serialize;

/// Typed view of one component's metadata document.
///
/// All scalar fields keep the document's string representation, including
/// flags like `deprecated` which the documents carry as `"true"`/`"false"`
/// (see [`ComponentModel::is_deprecated`]). Everything is rebuilt from the
/// metadata on every run; nothing here survives between runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentModel {
    /// Unique short identifier, e.g. `timer`. Also the configuration
    /// binding key segment of the generated holder.
    pub scheme: String,
    pub syntax: String,
    pub alternative_syntax: String,
    pub title: String,
    pub description: String,
    pub label: String,
    pub deprecated: String,
    pub consumer_only: String,
    pub producer_only: String,
    /// Fully qualified name of the component's concrete Java type.
    /// Drives every derived name; must contain a package separator.
    pub java_type: String,
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub component_options: Vec<ComponentOptionModel>,
    pub endpoint_options: Vec<EndpointOptionModel>,
}

impl ComponentModel {
    pub fn is_deprecated(&self) -> bool {
        self.deprecated == "true"
    }

    /// Simple (unqualified) name of the component's Java type.
    pub fn short_java_type(&self) -> &str {
        match self.java_type.rfind('.') {
            Some(pos) => &self.java_type[pos + 1..],
            None => &self.java_type,
        }
    }

    pub fn add_component_option(&mut self, option: ComponentOptionModel) {
        self.component_options.push(option);
    }

    pub fn add_endpoint_option(&mut self, option: EndpointOptionModel) {
        self.endpoint_options.push(option);
    }
}

/// One configuration property exposed on the generated configuration holder.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentOptionModel {
    pub name: String,
    pub kind: String,
    /// Declared schema type (`string`, `object`, `boolean`, ...).
    pub data_type: String,
    /// Resolved Java type used for the generated field.
    pub java_type: String,
    pub deprecated: String,
    pub description: String,
}

impl ComponentOptionModel {
    pub fn is_deprecated(&self) -> bool {
        self.deprecated == "true"
    }
}

/// One endpoint-level property. Carried for model completeness; the
/// endpoint artifact is generated elsewhere, so nothing in this crate
/// emits these into source.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointOptionModel {
    pub name: String,
    pub kind: String,
    pub group: String,
    pub required: String,
    pub data_type: String,
    pub java_type: String,
    pub enums: String,
    pub prefix: String,
    pub multi_value: String,
    pub deprecated: String,
    pub default_value: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_deprecated_parses_bool_as_string() {
        let mut model = ComponentModel::default();
        assert!(!model.is_deprecated());

        model.deprecated = "true".to_string();
        assert!(model.is_deprecated());

        // anything but the literal "true" counts as not deprecated
        model.deprecated = "TRUE".to_string();
        assert!(!model.is_deprecated());
    }

    #[test]
    fn test_short_java_type() {
        let model = ComponentModel {
            java_type: "org.apache.camel.component.timer.TimerComponent".to_string(),
            ..Default::default()
        };
        assert_eq!(model.short_java_type(), "TimerComponent");

        let bare = ComponentModel {
            java_type: "TimerComponent".to_string(),
            ..Default::default()
        };
        assert_eq!(bare.short_java_type(), "TimerComponent");
    }

    #[test]
    fn test_options_keep_insertion_order() {
        let mut model = ComponentModel::default();
        for name in ["binding", "client", "allowJavaSerializedObject"] {
            model.add_component_option(ComponentOptionModel {
                name: name.to_string(),
                ..Default::default()
            });
        }

        let names: Vec<&str> = model
            .component_options
            .iter()
            .map(|o| o.name.as_str())
            .collect();
        assert_eq!(names, vec!["binding", "client", "allowJavaSerializedObject"]);
    }

    #[test]
    fn test_options_serialize_camel_case() {
        let option = ComponentOptionModel {
            name: "client".to_string(),
            java_type: "com.ning.http.client.AsyncHttpClient".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_string(&option).unwrap();
        assert!(json.contains("\"javaType\""));
        assert!(json.contains("\"dataType\""));
        assert!(!json.contains("java_type"));
    }
}
