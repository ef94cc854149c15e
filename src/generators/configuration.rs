use crate::generators::java::{JavaClassBuilder, JavaField};
use crate::models::ComponentModel;
use crate::naming::DerivedNames;

/// Root token of the property binding prefix. The host framework's binder
/// maps `camel.component.<scheme>.*` values onto the generated holder, so
/// this literal must be reproduced exactly.
pub const CONFIG_PREFIX_ROOT: &str = "camel.component.";

const CONFIGURATION_PROPERTIES: &str =
    "org.springframework.boot.context.properties.ConfigurationProperties";

/// Render the configuration holder class: one private field with accessors
/// per component option, bound to the component's property prefix.
pub fn render_configuration_class(model: &ComponentModel, names: &DerivedNames) -> String {
    let mut class = JavaClassBuilder::new(&names.package_name, &names.configuration_class_name);

    if !model.description.trim().is_empty() {
        class.set_javadoc(&model.description);
    }

    let annotation = class.import_type(CONFIGURATION_PROPERTIES);
    class.add_annotation(&format!(
        "@{}(prefix = \"{}{}\")",
        annotation, CONFIG_PREFIX_ROOT, model.scheme
    ));

    for option in &model.component_options {
        let type_ref = class.import_type(&option.java_type);
        class.add_field(JavaField {
            javadoc: if option.description.trim().is_empty() {
                None
            } else {
                Some(option.description.clone())
            },
            deprecated: option.is_deprecated(),
            type_ref,
            name: option.name.clone(),
        });
    }

    class.build()
}
