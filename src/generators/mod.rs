pub mod auto_configuration;
pub mod configuration;
pub mod file_writer;
pub mod java;
pub mod spring_factories;

pub use auto_configuration::{render_auto_configuration_class, BeanCondition};
pub use configuration::{render_configuration_class, CONFIG_PREFIX_ROOT};
pub use file_writer::{IdempotentWriter, LicenseHeaders, WriteOutcome};
pub use java::JavaClassBuilder;
pub use spring_factories::{FactoryManifest, ENABLE_AUTO_CONFIGURATION, SPRING_FACTORIES_PATH};
