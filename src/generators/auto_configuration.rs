use crate::generators::java::{JavaClassBuilder, INDENT};
use crate::models::ComponentModel;
use crate::naming::DerivedNames;

const CONFIGURATION: &str = "org.springframework.context.annotation.Configuration";
const ENABLE_CONFIGURATION_PROPERTIES: &str =
    "org.springframework.boot.context.properties.EnableConfigurationProperties";
const BEAN: &str = "org.springframework.context.annotation.Bean";
const CONDITIONAL_ON_CLASS: &str =
    "org.springframework.boot.autoconfigure.condition.ConditionalOnClass";
const CONDITIONAL_ON_MISSING_BEAN: &str =
    "org.springframework.boot.autoconfigure.condition.ConditionalOnMissingBean";
const CAMEL_CONTEXT: &str = "org.apache.camel.CamelContext";
const INTROSPECTION_SUPPORT: &str = "org.apache.camel.util.IntrospectionSupport";

/// Activation guard on the generated factory method. Guards are rendered
/// as annotation metadata on the generated unit; the host framework
/// evaluates them at startup, this tool never does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BeanCondition {
    /// Activate only when the named type is present on the classpath.
    OnClass(String),
    /// Activate only when no binding of the named type exists yet.
    OnMissingBean(String),
}

impl BeanCondition {
    fn annotation_type(&self) -> &'static str {
        match self {
            BeanCondition::OnClass(_) => CONDITIONAL_ON_CLASS,
            BeanCondition::OnMissingBean(_) => CONDITIONAL_ON_MISSING_BEAN,
        }
    }

    fn guarded_type(&self) -> &str {
        match self {
            BeanCondition::OnClass(type_ref) | BeanCondition::OnMissingBean(type_ref) => type_ref,
        }
    }
}

/// Render the auto-configuration class: a guarded factory method that
/// instantiates the component, attaches the context and copies the
/// configuration holder's properties onto it via introspection.
pub fn render_auto_configuration_class(model: &ComponentModel, names: &DerivedNames) -> String {
    let mut class =
        JavaClassBuilder::new(&names.package_name, &names.auto_configuration_class_name);

    let configuration = class.import_type(CONFIGURATION);
    class.add_annotation(&format!("@{}", configuration));
    let enable = class.import_type(ENABLE_CONFIGURATION_PROPERTIES);
    class.add_annotation(&format!(
        "@{}({}.class)",
        enable, names.configuration_class_name
    ));

    class.import_type("java.util.HashMap");
    class.import_type("java.util.Map");
    let component_type = class.import_type(&model.java_type);
    let context_type = class.import_type(CAMEL_CONTEXT);
    class.import_type(INTROSPECTION_SUPPORT);

    let conditions = vec![
        BeanCondition::OnClass(context_type.clone()),
        BeanCondition::OnMissingBean(component_type.clone()),
    ];

    let method = render_factory_method(
        &mut class,
        &component_type,
        &context_type,
        &names.configuration_class_name,
        &conditions,
    );
    class.add_method(method);

    class.build()
}

fn render_factory_method(
    class: &mut JavaClassBuilder,
    component_type: &str,
    context_type: &str,
    configuration_type: &str,
    conditions: &[BeanCondition],
) -> String {
    let mut block = String::new();

    let bean = class.import_type(BEAN);
    block.push_str(&format!("{}@{}\n", INDENT, bean));
    for condition in conditions {
        let annotation = class.import_type(condition.annotation_type());
        block.push_str(&format!(
            "{}@{}({}.class)\n",
            INDENT,
            annotation,
            condition.guarded_type()
        ));
    }

    block.push_str(&format!(
        "{i}public {t} configureComponent({c} camelContext,\n\
         {i}{i}{i}{g} configuration) throws Exception {{\n",
        i = INDENT,
        t = component_type,
        c = context_type,
        g = configuration_type
    ));
    block.push_str(&format!(
        "{i}{i}{t} component = new {t}();\n",
        i = INDENT,
        t = component_type
    ));
    block.push_str(&format!(
        "{i}{i}component.setCamelContext(camelContext);\n\n",
        i = INDENT
    ));
    block.push_str(&format!(
        "{i}{i}Map<String, Object> parameters = new HashMap<>();\n",
        i = INDENT
    ));
    block.push_str(&format!(
        "{i}{i}IntrospectionSupport.getProperties(configuration, parameters, null);\n\n",
        i = INDENT
    ));
    block.push_str(&format!(
        "{i}{i}IntrospectionSupport.setProperties(camelContext,\n\
         {i}{i}{i}{i}camelContext.getTypeConverter(), component, parameters);\n\n",
        i = INDENT
    ));
    block.push_str(&format!("{i}{i}return component;\n{i}}}\n", i = INDENT));

    block
}
