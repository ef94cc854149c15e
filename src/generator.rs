use std::fs;
use std::path::{Path, PathBuf};

use crate::analysis::{build_component_model, SchemaReader};
use crate::error::{Error, Result};
use crate::generators::{
    render_auto_configuration_class, render_configuration_class, FactoryManifest,
    IdempotentWriter, LicenseHeaders, WriteOutcome, SPRING_FACTORIES_PATH,
};
use crate::interface::config::GenerateConfig;
use crate::interface::output::Logger;
use crate::naming;

/// Registration marker directory under each resource root. One file per
/// component, named by the component identifier.
const COMPONENT_MARKER_DIR: &str = "META-INF/services/org/apache/camel/component";

/// One component the run could not generate bindings for.
#[derive(Debug)]
pub struct ComponentFailure {
    pub component: String,
    pub error: Error,
}

/// Tallies of one generator run. Failures are collected here instead of
/// aborting the run; callers check `has_failures` after all components
/// were attempted.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub components: usize,
    pub skipped: usize,
    pub created: usize,
    pub updated: usize,
    pub unchanged: usize,
    pub failures: Vec<ComponentFailure>,
}

impl RunSummary {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    pub fn files_written(&self) -> usize {
        self.created + self.updated
    }
}

/// Generates Spring Boot binding sources for every component registered in
/// the project's resource roots.
pub struct BindingsGenerator {
    config: GenerateConfig,
    logger: Logger,
}

impl BindingsGenerator {
    pub fn new(config: GenerateConfig) -> Self {
        let logger = Logger::new(config.is_verbose(), false);
        Self { config, logger }
    }

    pub fn with_logger(config: GenerateConfig, logger: Logger) -> Self {
        Self { config, logger }
    }

    /// One full pass: discover component identifiers, generate both class
    /// sources per component, then write the discovery manifest once. All
    /// per-component errors end up in the summary; the pass never aborts
    /// early.
    pub fn run(&self) -> RunSummary {
        let mut summary = RunSummary::default();

        let component_names = self.find_component_names();
        if component_names.is_empty() {
            self.logger.verbose("No component registrations found");
            return summary;
        }
        self.logger
            .info(&format!("Found {} components", component_names.len()));

        let reader = SchemaReader::scan(&self.config.build_path(), self.logger.clone());
        let headers = LicenseHeaders::bundled();
        let java_writer = IdempotentWriter::new(headers.java);
        let manifest_writer = IdempotentWriter::new(headers.properties);
        let mut manifest = FactoryManifest::new();

        for name in &component_names {
            match self.generate_component(name, &reader, &java_writer, &mut manifest, &mut summary)
            {
                Ok(true) => summary.components += 1,
                Ok(false) => {
                    summary.skipped += 1;
                    self.logger.verbose(&format!(
                        "No component metadata for '{}', skipping",
                        name
                    ));
                }
                Err(error) => {
                    self.logger.error(&format!(
                        "Failed to generate bindings for '{}': {}",
                        name, error
                    ));
                    summary.failures.push(ComponentFailure {
                        component: name.clone(),
                        error,
                    });
                }
            }
        }

        if !manifest.is_empty() {
            let target = self.config.resources_path().join(SPRING_FACTORIES_PATH);
            match manifest_writer.write(&target, &manifest.render()) {
                Ok(outcome) => self.record_outcome(&mut summary, outcome, &target),
                Err(error) => {
                    self.logger
                        .error(&format!("Failed to write {}: {}", target.display(), error));
                    summary.failures.push(ComponentFailure {
                        component: SPRING_FACTORIES_PATH.to_string(),
                        error,
                    });
                }
            }
        }

        summary
    }

    /// Generate both class sources for one identifier and record its
    /// manifest entry. `Ok(false)` means no component metadata was found,
    /// which is a skip, not a failure.
    fn generate_component(
        &self,
        name: &str,
        reader: &SchemaReader,
        writer: &IdempotentWriter,
        manifest: &mut FactoryManifest,
        summary: &mut RunSummary,
    ) -> Result<bool> {
        let document = match reader.load_component(name)? {
            Some(document) => document,
            None => return Ok(false),
        };

        let model = build_component_model(&document);
        let names = naming::derive_names(name, &model.java_type)?;
        self.logger.verbose(&format!(
            "  - {} ({}, {} options)",
            name,
            model.java_type,
            model.component_options.len()
        ));

        let package_dir = self
            .config
            .source_path()
            .join(names.package_name.replace('.', "/"));

        let configuration = render_configuration_class(&model, &names);
        let target = package_dir.join(format!("{}.java", names.configuration_class_name));
        let outcome = writer.write(&target, &configuration)?;
        self.record_outcome(summary, outcome, &target);

        let auto_configuration = render_auto_configuration_class(&model, &names);
        let target = package_dir.join(format!("{}.java", names.auto_configuration_class_name));
        let outcome = writer.write(&target, &auto_configuration)?;
        self.record_outcome(summary, outcome, &target);

        // only successfully generated components get registered
        manifest.add_auto_configuration(&names.auto_configuration_class_fqn());
        Ok(true)
    }

    /// Collect component identifiers from the registration markers of every
    /// configured resource root. Roots are visited in configuration order
    /// and entries sorted per root, so discovery order is stable across
    /// runs and file systems.
    fn find_component_names(&self) -> Vec<String> {
        let mut names = Vec::new();

        for root in self.config.effective_resource_roots() {
            let mut dir = PathBuf::from(&root);
            if !dir.exists() {
                dir = Path::new(&self.config.project_path).join(&root);
            }
            let marker_dir = dir.join(COMPONENT_MARKER_DIR);
            if !marker_dir.is_dir() {
                continue;
            }

            let entries = match fs::read_dir(&marker_dir) {
                Ok(entries) => entries,
                Err(err) => {
                    self.logger.warning(&format!(
                        "Cannot list {}: {}",
                        marker_dir.display(),
                        err
                    ));
                    continue;
                }
            };

            let mut root_names = Vec::new();
            for entry in entries.flatten() {
                // a sub directory may hold resolver markers, not components
                if entry.path().is_dir() {
                    continue;
                }
                let name = entry.file_name().to_string_lossy().to_string();
                if !name.starts_with('.') {
                    root_names.push(name);
                }
            }
            root_names.sort();
            names.extend(root_names);
        }

        names
    }

    fn record_outcome(&self, summary: &mut RunSummary, outcome: WriteOutcome, target: &Path) {
        match outcome {
            WriteOutcome::Created => {
                summary.created += 1;
                self.logger
                    .info(&format!("Created file: {}", target.display()));
            }
            WriteOutcome::Updated => {
                summary.updated += 1;
                self.logger
                    .info(&format!("Updated existing file: {}", target.display()));
            }
            WriteOutcome::Unchanged => {
                summary.unchanged += 1;
                self.logger
                    .info(&format!("No changes to existing file: {}", target.display()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn config_for(project: &Path) -> GenerateConfig {
        GenerateConfig {
            project_path: project.to_string_lossy().to_string(),
            ..Default::default()
        }
    }

    fn register_component(project: &Path, resources_dir: &str, name: &str) {
        let marker_dir = project.join(resources_dir).join(COMPONENT_MARKER_DIR);
        fs::create_dir_all(&marker_dir).unwrap();
        fs::write(marker_dir.join(name), "class=org.example.Ignored\n").unwrap();
    }

    #[test]
    fn test_discovery_skips_directories_and_hidden_entries() {
        let project = TempDir::new().unwrap();
        register_component(project.path(), "src/main/resources", "timer");
        register_component(project.path(), "src/main/resources", ".hidden");

        let marker_dir = project
            .path()
            .join("src/main/resources")
            .join(COMPONENT_MARKER_DIR);
        fs::create_dir_all(marker_dir.join("timer.resolver")).unwrap();

        let generator = BindingsGenerator::new(config_for(project.path()));
        assert_eq!(generator.find_component_names(), vec!["timer".to_string()]);
    }

    #[test]
    fn test_discovery_sorts_entries_within_a_root() {
        let project = TempDir::new().unwrap();
        register_component(project.path(), "src/main/resources", "zookeeper");
        register_component(project.path(), "src/main/resources", "ahc");
        register_component(project.path(), "src/main/resources", "timer");

        let generator = BindingsGenerator::new(config_for(project.path()));
        assert_eq!(
            generator.find_component_names(),
            vec!["ahc".to_string(), "timer".to_string(), "zookeeper".to_string()]
        );
    }

    #[test]
    fn test_discovery_visits_roots_in_configuration_order() {
        let project = TempDir::new().unwrap();
        register_component(project.path(), "res-b", "timer");
        register_component(project.path(), "res-a", "zookeeper");

        let mut config = config_for(project.path());
        config.resource_roots = Some(vec!["res-b".to_string(), "res-a".to_string()]);

        let generator = BindingsGenerator::new(config);
        assert_eq!(
            generator.find_component_names(),
            vec!["timer".to_string(), "zookeeper".to_string()]
        );
    }

    #[test]
    fn test_discovery_resolves_roots_against_the_project_path() {
        let project = TempDir::new().unwrap();
        register_component(project.path(), "nested/resources", "timer");

        let mut config = config_for(project.path());
        // not resolvable as-is from the test's working directory
        config.resource_roots = Some(vec!["nested/resources".to_string()]);

        let generator = BindingsGenerator::new(config);
        assert_eq!(generator.find_component_names(), vec!["timer".to_string()]);
    }

    #[test]
    fn test_missing_roots_discover_nothing() {
        let project = TempDir::new().unwrap();
        let generator = BindingsGenerator::new(config_for(project.path()));
        assert!(generator.find_component_names().is_empty());

        let summary = generator.run();
        assert_eq!(summary.components, 0);
        assert!(!summary.has_failures());
    }
}
