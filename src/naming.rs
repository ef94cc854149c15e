use crate::error::{Error, Result};
use serde::Serialize;

/// Sub-package appended to the component's own package so the generated
/// bindings live outside it and the Spring Boot jars can stay optional at
/// runtime.
const SPRING_BOOT_SUB_PACKAGE: &str = ".springboot";

/// Names derived from a component's implementation type. Recomputed on
/// every run; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedNames {
    pub package_name: String,
    pub configuration_class_name: String,
    pub auto_configuration_class_name: String,
}

impl DerivedNames {
    pub fn configuration_class_fqn(&self) -> String {
        format!("{}.{}", self.package_name, self.configuration_class_name)
    }

    pub fn auto_configuration_class_fqn(&self) -> String {
        format!("{}.{}", self.package_name, self.auto_configuration_class_name)
    }
}

/// Derive the generated package and class names from the component's fully
/// qualified implementation type.
///
/// The class names come from a plain substring replacement of `Component`,
/// so a `Component` occurring before the suffix is replaced as well — kept
/// bug-for-bug with the established naming of already published bindings.
/// Both class names are produced from the same simple name, which is what
/// guarantees the auto-configuration class always references the
/// configuration class actually generated next to it.
pub fn derive_names(component: &str, java_type: &str) -> Result<DerivedNames> {
    let pos = java_type.rfind('.').ok_or_else(|| Error::UnqualifiedType {
        component: component.to_string(),
        java_type: java_type.to_string(),
    })?;

    let package_name = format!("{}{}", &java_type[..pos], SPRING_BOOT_SUB_PACKAGE);
    let simple_name = &java_type[pos + 1..];

    Ok(DerivedNames {
        package_name,
        configuration_class_name: simple_name.replace("Component", "ComponentConfiguration"),
        auto_configuration_class_name: simple_name
            .replace("Component", "ComponentAutoConfiguration"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derives_all_three_names() {
        let names = derive_names("foo", "org.example.foo.FooComponent").unwrap();
        assert_eq!(names.package_name, "org.example.foo.springboot");
        assert_eq!(names.configuration_class_name, "FooComponentConfiguration");
        assert_eq!(
            names.auto_configuration_class_name,
            "FooComponentAutoConfiguration"
        );
    }

    #[test]
    fn test_fqn_helpers() {
        let names = derive_names("foo", "org.example.foo.FooComponent").unwrap();
        assert_eq!(
            names.configuration_class_fqn(),
            "org.example.foo.springboot.FooComponentConfiguration"
        );
        assert_eq!(
            names.auto_configuration_class_fqn(),
            "org.example.foo.springboot.FooComponentAutoConfiguration"
        );
    }

    #[test]
    fn test_unqualified_type_is_rejected() {
        let err = derive_names("foo", "FooComponent").unwrap_err();
        assert!(matches!(err, Error::UnqualifiedType { .. }));
        assert!(err.to_string().contains("'foo'"));
    }

    #[test]
    fn test_interior_component_substring_is_replaced_too() {
        // Substring semantics, not suffix-anchored: every occurrence of
        // "Component" is expanded. Pinned so a change here is a conscious one.
        let names = derive_names("odd", "org.example.ComponentishComponent").unwrap();
        assert_eq!(
            names.configuration_class_name,
            "ComponentConfigurationishComponentConfiguration"
        );
        assert_eq!(
            names.auto_configuration_class_name,
            "ComponentAutoConfigurationishComponentAutoConfiguration"
        );
    }

    #[test]
    fn test_name_without_component_suffix_passes_through() {
        let names = derive_names("beans", "org.example.BeanProcessor").unwrap();
        assert_eq!(names.configuration_class_name, "BeanProcessor");
        assert_eq!(names.auto_configuration_class_name, "BeanProcessor");
    }

    #[test]
    fn test_config_and_auto_config_share_the_same_stem() {
        let names = derive_names("timer", "org.apache.camel.component.timer.TimerComponent")
            .unwrap();
        assert_eq!(
            names
                .auto_configuration_class_name
                .replace("ComponentAutoConfiguration", "ComponentConfiguration"),
            names.configuration_class_name
        );
    }
}
